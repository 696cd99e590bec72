// ABOUTME: Request ID generation and per-request tracing spans
// ABOUTME: Every request gets an x-request-id that is logged and echoed back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

use axum::body::Body;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::Request;
use lookmaxxer_core::constants::defaults::REQUEST_ID_HEADER;
use lookmaxxer_core::errors::ErrorResponse;
use tracing::{info_span, Span};

/// Request ID assigned by `SetRequestIdLayer`, if present
#[must_use]
pub fn request_id<B>(request: &Request<B>) -> Option<&str> {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Span wrapping a single HTTP request
///
/// Used as the `TraceLayer` span factory. It runs inside `SetRequestIdLayer`,
/// so the id header is already set.
#[must_use]
pub fn make_request_span(request: &Request<Body>) -> Span {
    info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = request_id(request).unwrap_or("-"),
    )
}

/// Copy the request id into `AppError` bodies as `requestId`
///
/// Runs inside `SetRequestIdLayer`. Responses that did not come from an
/// `AppError` pass through untouched.
pub async fn stamp_error_request_id(request: Request<Body>, next: Next) -> Response {
    let request_id = request_id(&request).map(str::to_owned);
    let mut response = next.run(request).await;

    let Some(request_id) = request_id else {
        return response;
    };
    let Some(mut body) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };

    body.request_id = Some(request_id);
    (response.status(), Json(body)).into_response()
}
