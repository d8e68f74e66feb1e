//! Handlers for `/api/events`.
//!
//! | Method | Body | Success |
//! |--------|------|---------|
//! | `POST` | urlencoded or multipart event fields, `title` required | `201` with the new id |
//! | `GET`  | none | `200` with every event, newest first |

use std::collections::HashMap;

use axum::extract::{Form, FromRequest, Multipart, Request, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Event, NewEvent};
use crate::repository::EventRepository;
use crate::state::AppState;
use crate::utils::error::{AppError, EndpointError};
use crate::utils::response::success;

pub const CREATED_MESSAGE: &str = "Event created successfully";
pub const CREATE_FAILED_MESSAGE: &str = "Event Creation Failed";
pub const FETCHED_MESSAGE: &str = "Events fetched successfully";
pub const FETCH_FAILED_MESSAGE: &str = "Event fetching failed";

#[derive(Serialize)]
struct CreatedPayload {
    id: Uuid,
}

#[derive(Serialize)]
struct EventsPayload {
    events: Vec<Event>,
}

/// `POST /api/events`
pub async fn create<R: EventRepository>(
    State(state): State<AppState<R>>,
    request: Request,
) -> Result<Response, EndpointError> {
    let fail = |error: AppError| EndpointError::new(CREATE_FAILED_MESSAGE, error);

    let fields = read_form_fields(request).await.map_err(fail)?;
    let event = NewEvent::from_fields(fields).map_err(fail)?;

    let (id, slug) = state.events.insert_unique(event).await.map_err(fail)?;
    tracing::info!(%id, %slug, "event created");

    Ok(success(
        StatusCode::CREATED,
        CREATED_MESSAGE,
        CreatedPayload { id },
    ))
}

/// Flattens an urlencoded or multipart body into field name to value.
/// Multipart file parts are skipped.
async fn read_form_fields(request: Request) -> Result<HashMap<String, String>, AppError> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
        .unwrap_or(false);

    if !is_multipart {
        let Form(fields) = Form::<HashMap<String, String>>::from_request(request, &())
            .await
            .map_err(|rejection| AppError::Parse(rejection.body_text()))?;
        return Ok(fields);
    }

    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|rejection| AppError::Parse(rejection.body_text()))?;

    let mut fields = HashMap::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Parse(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if field.file_name().is_some() {
            continue;
        }
        let value = field
            .text()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))?;
        fields.insert(name, value);
    }

    Ok(fields)
}

/// `GET /api/events`
pub async fn list<R: EventRepository>(
    State(state): State<AppState<R>>,
) -> Result<Response, EndpointError> {
    let events = state
        .events
        .list_recent()
        .await
        .map_err(|error| EndpointError::new(FETCH_FAILED_MESSAGE, error))?;

    Ok(success(StatusCode::OK, FETCHED_MESSAGE, EventsPayload { events }))
}
