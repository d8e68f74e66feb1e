use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::utils::response::error as error_response;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Message returned for a create request whose body is not a readable form.
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid JSON data format";
pub const INVALID_EVENT_MESSAGE: &str = "Invalid event data";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("could not reach the event store: {0}")]
    Connection(#[source] BoxError),

    #[error("event store operation failed: {0}")]
    Persistence(#[source] BoxError),

    #[error("malformed form data: {0}")]
    Parse(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("page rendering failed: {0}")]
    Template(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Parse(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Configuration(_)
            | AppError::Connection(_)
            | AppError::Persistence(_)
            | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "configuration",
            AppError::Connection(_) => "connection",
            AppError::Persistence(_) => "persistence",
            AppError::Parse(_) => "parse",
            AppError::Validation(_) => "validation",
            AppError::Conflict(_) => "conflict",
            AppError::Template(_) => "template",
        }
    }

    fn log(&self, action: &str) {
        if self.status_code().is_server_error() {
            error!(kind = self.kind(), error = %self, "{action}");
        } else {
            warn!(kind = self.kind(), error = %self, "{action}");
        }
    }
}

/// An [`AppError`] raised while serving one endpoint.
///
/// `action` is the endpoint's generic failure message ("Event Creation
/// Failed", "Event fetching failed"); request-shape errors replace it with
/// their own fixed message.
#[derive(Debug)]
pub struct EndpointError {
    action: &'static str,
    error: AppError,
}

impl EndpointError {
    pub fn new(action: &'static str, error: AppError) -> Self {
        Self { action, error }
    }
}

impl IntoResponse for EndpointError {
    fn into_response(self) -> Response {
        self.error.log(self.action);

        let message = match &self.error {
            AppError::Parse(_) => INVALID_FORMAT_MESSAGE,
            AppError::Validation(_) => INVALID_EVENT_MESSAGE,
            _ => self.action,
        };

        error_response(
            message,
            self.error.to_string(),
            self.error.kind(),
            self.error.status_code(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape_errors_are_client_errors() {
        assert_eq!(
            AppError::Parse("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Validation("title is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("taken".into()).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_store_errors_are_server_errors() {
        let err = AppError::Connection("connection refused".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), "connection");
        assert!(err.to_string().contains("connection refused"));

        let err = AppError::Persistence("disk full".into());
        assert_eq!(err.kind(), "persistence");
    }

    #[test]
    fn test_parse_errors_use_the_fixed_format_message() {
        let response =
            EndpointError::new("Event Creation Failed", AppError::Parse("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
