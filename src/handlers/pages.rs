use axum::extract::State;
use axum::http::{header, HeaderValue};
use axum::response::{Html, IntoResponse, Response};

use crate::repository::EventRepository;
use crate::state::AppState;
use crate::utils::error::EndpointError;

/// Revalidation hint for the home page: cache for an hour.
pub const HOME_CACHE_CONTROL: &str = "public, max-age=3600";
const NO_STORE: &str = "no-store";

/// `GET /`
///
/// A store outage still renders the page, just without cards. Neither that
/// page nor a rendering failure may be cached.
pub async fn home<R: EventRepository>(State(state): State<AppState<R>>) -> Response {
    let (events, complete) = match state.events.list_recent().await {
        Ok(events) => (events, true),
        Err(error) => {
            tracing::error!(kind = error.kind(), %error, "failed to fetch events for home page");
            (Vec::new(), false)
        }
    };

    let mut response = match state.pages.render_home(&events) {
        Ok(html) if complete => return Html(html).into_response(),
        Ok(html) => Html(html).into_response(),
        Err(error) => EndpointError::new("Page rendering failed", error).into_response(),
    };
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_STORE));
    response
}
