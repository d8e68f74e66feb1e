use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Success envelope: a human-readable `message` with the payload's fields
/// flattened next to it.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub message: String,
    #[serde(flatten)]
    pub data: T,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub message: String,
    pub error: String,
    pub kind: String,
}

pub fn success<T>(status: StatusCode, message: impl Into<String>, data: T) -> Response
where
    T: Serialize,
{
    let body = ApiResponse {
        message: message.into(),
        data,
    };
    (status, Json(body)).into_response()
}

pub fn error(
    message: impl Into<String>,
    error: impl Into<String>,
    kind: &str,
    status: StatusCode,
) -> Response {
    let body = ApiErrorResponse {
        message: message.into(),
        error: error.into(),
        kind: kind.to_string(),
    };

    (status, Json(body)).into_response()
}
