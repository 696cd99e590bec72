// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Profile domain ranges, energy conversion factors, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Service identifiers used in logs and health responses
pub mod service_names {
    /// Name of the API server
    pub const LOOKMAXXER_API: &str = "lookmaxxer-api";
    /// Human readable service label
    pub const LOOKMAXXER_API_DISPLAY: &str = "LookMaxxer API";
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READINESS: &str = "/ready";
    /// One-shot onboarding endpoint
    pub const ONBOARDING: &str = "/api/onboarding";
    /// Session-driven onboarding collection
    pub const ONBOARDING_SESSIONS: &str = "/api/onboarding/sessions";
}

/// Domain-valid ranges for onboarding inputs (inclusive)
pub mod profile_limits {
    /// Youngest supported user
    pub const MIN_AGE_YEARS: u32 = 13;
    /// Oldest supported user
    pub const MAX_AGE_YEARS: u32 = 100;
    /// Minimum height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum body weight in kilograms (current and goal)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum body weight in kilograms (current and goal)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
}

/// Energy accounting factors
pub mod energy {
    /// Energy density of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Energy density of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Energy density of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Approximate energy stored in one kilogram of body weight change
    pub const KCAL_PER_KG_BODY_WEIGHT: f64 = 7700.0;
    /// Days per week, for weekly energy balance projections
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Network and server defaults
pub mod defaults {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 3001;
    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Default allowed CORS origin (Vite dev server of the web client)
    pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
    /// Default request body limit: 50 MiB, large enough for base64 image uploads
    pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;
    /// Default request timeout
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default cap on concurrently open onboarding sessions
    pub const DEFAULT_MAX_ONBOARDING_SESSIONS: usize = 10_000;
    /// Default idle lifetime of an onboarding session
    pub const DEFAULT_ONBOARDING_SESSION_TTL_SECS: u64 = 3600;
    /// Request ID header name
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}
