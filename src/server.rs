// ABOUTME: HTTP server assembly and lifecycle
// ABOUTME: Merges routes, applies tower-http middleware and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

use crate::config::environment::ServerConfig;
use crate::middleware::{make_request_span, setup_cors, stamp_error_request_id};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, OnboardingRoutes};
use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, Json, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Fallback for unmatched paths
async fn handle_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Route not found" })),
    )
}

/// Build the full application router
///
/// Layer order, outermost first: request id, trace span, id propagation,
/// CORS, timeout, body limit, request id in error bodies.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = &resources.config;
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(setup_cors(&config.cors))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.http.request_timeout_secs,
        )))
        .layer(DefaultBodyLimit::max(config.http.max_body_bytes))
        .layer(axum::middleware::from_fn(stamp_error_request_id));

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(OnboardingRoutes::routes(Arc::clone(&resources)))
        .fallback(handle_not_found)
        .layer(middleware)
}

/// Resolve when the process receives Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT"),
        () = terminate => info!("Received SIGTERM"),
    }
}

/// Bind and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.http_port);
    let resources = Arc::new(ServerResources::new(config));
    let app = build_router(resources);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}
