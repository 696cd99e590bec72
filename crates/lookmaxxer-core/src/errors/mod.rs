// ABOUTME: Unified error handling system with standard error codes and HTTP responses
// ABOUTME: AppError, ErrorCode, ErrorResponse plus onboarding and calculator domain errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

//! # Unified Error Handling System
//!
//! Centralized error handling for the LookMaxxer API. It defines standard
//! error codes, the `AppError` type every handler returns, and the JSON body
//! clients receive when a request fails.
//!
//! Domain errors live in [`validation`] and convert into `AppError` so that
//! field-level information survives all the way to the HTTP response.

/// Onboarding validation and calculator boundary errors
pub mod validation;

pub use validation::{InvalidInputError, ProfileField, ValidationError, ValidationErrorKind};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed a semantic check
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Required field absent or blank
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Input could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric input outside its domain
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Operation not allowed in the resource's current state
    #[serde(rename = "INVALID_STATE_TRANSITION")]
    InvalidStateTransition = 4001,
    /// Resource temporarily exhausted
    #[serde(rename = "RESOURCE_UNAVAILABLE")]
    ResourceUnavailable = 4003,

    // Configuration (6000-6999)
    /// Configuration value rejected by validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 400,

            // 404 Not Found
            Self::ResourceNotFound => 404,

            // 409 Conflict
            Self::InvalidStateTransition => 409,

            // 503 Service Unavailable
            Self::ResourceUnavailable => 503,

            // 500 Internal Server Error
            Self::ConfigInvalid => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::InvalidStateTransition => {
                "The operation is not allowed in the resource's current state"
            }
            Self::ResourceUnavailable => "The resource is temporarily unavailable",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Offending input field, when the error concerns a single field
    pub field: Option<String>,
    /// Request ID for tracing
    pub request_id: Option<String>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
            request_id: None,
        }
    }

    /// Attach the offending field name
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add a request ID to the error
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed request payload
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Operation rejected by the resource's state machine
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidStateTransition, message)
    }

    /// Resource temporarily exhausted
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceUnavailable, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body
///
/// Flat shape `{ "error": ..., "field": ..., "code": ... }` so clients can
/// highlight the offending form field directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Offending field, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Request ID echoed back for support correlation
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: error.message,
            field: error.field,
            code: error.code,
            request_id: error.request_id,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match error.kind {
            ValidationErrorKind::Missing => ErrorCode::MissingRequiredField,
            ValidationErrorKind::NotANumber
            | ValidationErrorKind::NotAnInteger
            | ValidationErrorKind::UnknownOption => ErrorCode::InvalidFormat,
            ValidationErrorKind::NotPositive | ValidationErrorKind::OutOfRange => {
                ErrorCode::ValueOutOfRange
            }
        };
        Self::new(code, error.message.clone()).with_field(error.field.as_str())
    }
}

impl From<InvalidInputError> for AppError {
    fn from(error: InvalidInputError) -> Self {
        let field = error.field();
        let app_error = Self::invalid_input(error.to_string());
        match field {
            Some(field) => app_error.with_field(field.as_str()),
            None => app_error,
        }
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse::from(self);
        // Read back by the request id middleware
        let mut response = (status, axum::Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}
