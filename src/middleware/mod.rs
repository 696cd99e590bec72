// ABOUTME: HTTP middleware for CORS and request tracing
// ABOUTME: Provides request ID generation, span creation and request ids in error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

/// Cross-origin configuration
pub mod cors;
/// Request ids and request spans
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{make_request_span, request_id, stamp_error_request_id};
