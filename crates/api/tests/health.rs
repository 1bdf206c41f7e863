//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, MemoryBackend};

#[tokio::test]
async fn health_reports_degraded_without_database() {
    let app = common::build_test_app(Arc::new(MemoryBackend::default()));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(Arc::new(MemoryBackend::default()));
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(Arc::new(MemoryBackend::default()));
    let response = get(app, "/api/v1/icons").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}
