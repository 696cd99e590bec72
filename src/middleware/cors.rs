// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for the web client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

use crate::config::environment::CorsConfig;
use http::{header::HeaderName, HeaderValue, Method};
use lookmaxxer_core::constants::defaults::REQUEST_ID_HEADER;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Configure CORS from `CORS_ORIGIN`
///
/// `*` (or an empty value) allows any origin without credentials; otherwise
/// the value is a comma-separated list of exact origins, which may send
/// credentials.
///
/// # Examples
///
/// ```bash
/// # Vite dev server (default)
/// export CORS_ORIGIN="http://localhost:5173"
///
/// # Several deployed clients
/// export CORS_ORIGIN="https://app.example.com,https://m.example.com"
/// ```
#[must_use]
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS]);

    let origins = parse_origins(&config.allowed_origins);
    if origins.is_empty() {
        // Browsers reject credentials with a wildcard origin
        layer.allow_origin(AllowOrigin::any())
    } else {
        layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
    }
}

/// Exact origins from a comma-separated list; empty for `*` or no valid entry
fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "*" {
        return Vec::new();
    }

    raw.split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            HeaderValue::from_str(trimmed)
                .inspect_err(|_| warn!(origin = trimmed, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert!(parse_origins("*").is_empty());
        assert!(parse_origins("  ").is_empty());
        assert_eq!(
            parse_origins("https://a.dev, https://b.dev,"),
            vec![
                HeaderValue::from_static("https://a.dev"),
                HeaderValue::from_static("https://b.dev"),
            ]
        );
    }
}
