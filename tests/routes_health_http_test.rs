// ABOUTME: HTTP integration tests for health check routes and router-wide behavior
// ABOUTME: Covers liveness, readiness, the JSON 404 fallback and request id propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::{test_app, test_app_with};
use lookmaxxer_api::config::environment::ServerConfig;
use lookmaxxer_api::routes::HealthRoutes;

/// Get health routes for testing
fn health_routes() -> axum::Router {
    HealthRoutes::routes()
}

// ============================================================================
// GET /health - Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/health").send(health_routes()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "LookMaxxer API is running");
}

#[tokio::test]
async fn test_health_endpoint_timestamp_is_rfc3339() {
    let response = AxumTestRequest::get("/health").send(health_routes()).await;

    let body: serde_json::Value = response.json();
    let timestamp_str = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp_str).is_ok());
}

// ============================================================================
// GET /ready - Readiness Check Tests
// ============================================================================

#[tokio::test]
async fn test_ready_endpoint_success() {
    let response = AxumTestRequest::get("/ready").send(health_routes()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_endpoints_concurrent_requests() {
    let mut handles = vec![];

    for _ in 0..10 {
        let handle = tokio::spawn(async {
            AxumTestRequest::get("/health").send(health_routes()).await
        });

        handles.push(handle);
    }

    for handle in handles {
        let response = handle.await.expect("Task panicked");
        assert_eq!(response.status(), 200);
    }
}

// ============================================================================
// Full router
// ============================================================================

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let response = AxumTestRequest::get("/api/food/recognize")
        .send(test_app())
        .await;

    assert_eq!(response.status(), 404);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn test_request_id_generated_when_absent() {
    let response = AxumTestRequest::get("/health").send(test_app()).await;

    assert_eq!(response.status(), 200);
    let request_id = response.header("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[tokio::test]
async fn test_request_id_echoed_when_supplied() {
    let response = AxumTestRequest::get("/ready")
        .header("x-request-id", "client-abc")
        .send(test_app())
        .await;

    assert_eq!(response.header("x-request-id"), Some("client-abc"));
}

#[tokio::test]
async fn test_cors_allows_default_client_origin() {
    let response = AxumTestRequest::get("/health")
        .header("origin", "http://localhost:5173")
        .send(test_app())
        .await;

    assert_eq!(
        response.header("access-control-allow-origin"),
        Some("http://localhost:5173")
    );
}

#[tokio::test]
async fn test_cors_allows_credentials_for_listed_origins() {
    let response = AxumTestRequest::get("/health")
        .header("origin", "http://localhost:5173")
        .send(test_app())
        .await;

    assert_eq!(
        response.header("access-control-allow-credentials"),
        Some("true")
    );
}

#[tokio::test]
async fn test_cors_wildcard_omits_credentials() {
    let mut config = ServerConfig::default();
    config.cors.allowed_origins = "*".to_owned();

    let response = AxumTestRequest::get("/health")
        .header("origin", "https://anywhere.example")
        .send(test_app_with(config))
        .await;

    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(response.header("access-control-allow-credentials"), None);
}
