//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::TimeZone;
use http_body_util::BodyExt;
use knowme_core::clock::Clock;
use knowme_core::repository::AggregateRepository;
use knowme_game::domain::session::GameSession;
use knowme_store::InMemoryRepository;
use knowme_test_support::FixedClock;
use tower::ServiceExt;

use knowme_api::routes;
use knowme_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap(),
    ))
}

/// Build the full app router with a fresh in-memory store and a
/// deterministic clock. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    let games: Arc<dyn AggregateRepository<GameSession>> = Arc::new(InMemoryRepository::new());
    let app_state = AppState::new(fixed_clock(), games);

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/games", routes::games::router())
        .with_state(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
