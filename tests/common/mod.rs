#![allow(dead_code)]

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use uuid::Uuid;

use devevent_server::config::Config;
use devevent_server::models::{Event, NewEvent};
use devevent_server::repository::EventRepository;
use devevent_server::routes::create_routes;
use devevent_server::state::AppState;
use devevent_server::utils::error::AppError;
use devevent_server::views::PageRenderer;

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "MONGODB_URI" => Some("postgres://localhost/devevent_test".to_string()),
        _ => None,
    })
    .unwrap()
}

pub fn app<R: EventRepository>(repo: Arc<R>) -> Router {
    create_routes(
        AppState::new(repo, PageRenderer::new().unwrap()),
        &test_config(),
    )
}

pub fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/events")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn text_body(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A repository whose store is never reachable.
pub struct UnreachableRepository;

impl EventRepository for UnreachableRepository {
    fn insert(&self, _event: NewEvent) -> impl Future<Output = Result<Uuid, AppError>> + Send + '_ {
        async { Err(AppError::Connection("connection refused".into())) }
    }

    fn list_recent(&self) -> impl Future<Output = Result<Vec<Event>, AppError>> + Send + '_ {
        async { Err(AppError::Connection("connection refused".into())) }
    }
}
