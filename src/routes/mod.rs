use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, Config, SecurityHeadersLayer};
use crate::handlers::pages::HOME_CACHE_CONTROL;
use crate::handlers::{events, health_check, pages};
use crate::repository::EventRepository;
use crate::state::AppState;

pub fn create_routes<R: EventRepository>(state: AppState<R>, config: &Config) -> Router {
    let page_routes: Router<AppState<R>> = Router::new()
        .route("/", get(pages::home::<R>))
        .route_layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static(HOME_CACHE_CONTROL),
        ));

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/events",
            get(events::list::<R>).post(events::create::<R>),
        )
        .merge(page_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SecurityHeadersLayer::new(config.production))
        .layer(create_cors_layer(&config.cors_allowed_origins))
}
