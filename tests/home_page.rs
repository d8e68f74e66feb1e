mod common;

use std::sync::Arc;

use axum::http::{header, StatusCode};
use tower::ServiceExt;

use common::{app, get, text_body, UnreachableRepository};
use devevent_server::models::featured::FEATURED_EVENTS;
use devevent_server::repository::{EventRepository, MemoryEventRepository};

#[tokio::test]
async fn test_home_renders_featured_events_with_cache_hint() {
    let repo = Arc::new(MemoryEventRepository::new());
    for featured in &FEATURED_EVENTS[..3] {
        repo.insert(featured.to_new_event()).await.unwrap();
    }

    let response = app(repo).oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=3600"
    );
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let html = text_body(response.into_body()).await;
    assert!(html.contains("Featured Events"));
    assert!(html.contains(r#"href="/events/jsconf-eu-2026""#));
    assert!(html.contains("Berlin, Germany"));

    // Newest card first.
    let kubecon = html.find("kubecon-cloudnativecon-eu-2026").unwrap();
    let jsconf = html.find("jsconf-eu-2026").unwrap();
    assert!(kubecon < jsconf);
}

#[tokio::test]
async fn test_home_renders_without_cards_when_store_is_down() {
    let response = app(Arc::new(UnreachableRepository))
        .oneshot(get("/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
    let html = text_body(response.into_body()).await;
    assert!(html.contains("The Hub for Every Dev"));
    assert!(!html.contains("event-card"));
}

#[tokio::test]
async fn test_api_responses_carry_no_page_cache_hint() {
    let response = app(Arc::new(MemoryEventRepository::new()))
        .oneshot(get("/api/events"))
        .await
        .unwrap();

    assert!(response.headers().get(header::CACHE_CONTROL).is_none());
}
