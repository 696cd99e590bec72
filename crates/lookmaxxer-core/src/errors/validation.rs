// ABOUTME: Field-level validation errors for onboarding and boundary errors for the calculator
// ABOUTME: Both convert into AppError so the offending field reaches the HTTP response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Input field of a user profile, named as on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    /// Age in whole years
    AgeYears,
    /// Height in centimeters
    HeightCm,
    /// Current body weight in kilograms
    CurrentWeightKg,
    /// Target body weight in kilograms
    GoalWeightKg,
    /// Lose, gain or maintain
    GoalType,
    /// Activity level bucket
    ActivityLevel,
    /// Sex used by the BMR formula
    Sex,
}

impl ProfileField {
    /// Wire name of the field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AgeYears => "ageYears",
            Self::HeightCm => "heightCm",
            Self::CurrentWeightKg => "currentWeightKg",
            Self::GoalWeightKg => "goalWeightKg",
            Self::GoalType => "goalType",
            Self::ActivityLevel => "activityLevel",
            Self::Sex => "sex",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Absent or blank
    Missing,
    /// Could not be parsed as a number
    NotANumber,
    /// Parsed, but a whole number was required
    NotAnInteger,
    /// Zero or negative
    NotPositive,
    /// Positive but outside the domain range
    OutOfRange,
    /// Not one of the accepted option values
    UnknownOption,
}

/// Recoverable, field-level rejection of onboarding input
///
/// The flow stays on the current step when this is returned; the caller
/// redisplays the step with `message` next to `field`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Field that failed validation
    pub field: ProfileField,
    /// Failure category
    pub kind: ValidationErrorKind,
    /// Human-readable message, always naming the field
    pub message: String,
}

impl ValidationError {
    /// Field absent or blank
    #[must_use]
    pub fn missing(field: ProfileField) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::Missing,
            message: format!("{field} is required"),
        }
    }

    /// Field could not be parsed as a number
    #[must_use]
    pub fn not_a_number(field: ProfileField, raw: &str) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::NotANumber,
            message: format!("{field} must be a number, got '{raw}'"),
        }
    }

    /// Field must be a whole number
    #[must_use]
    pub fn not_an_integer(field: ProfileField, raw: &str) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::NotAnInteger,
            message: format!("{field} must be a whole number, got '{raw}'"),
        }
    }

    /// Field is zero or negative
    #[must_use]
    pub fn not_positive(field: ProfileField) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::NotPositive,
            message: format!("{field} must be a positive number"),
        }
    }

    /// Field outside its inclusive domain range
    #[must_use]
    pub fn out_of_range(field: ProfileField, min: f64, max: f64) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::OutOfRange,
            message: format!("{field} must be between {min} and {max}"),
        }
    }

    /// Field is not one of the accepted options
    #[must_use]
    pub fn unknown_option(field: ProfileField, raw: &str, allowed: &[&str]) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::UnknownOption,
            message: format!("{field} must be one of {}, got '{raw}'", allowed.join(", ")),
        }
    }
}

/// Boundary violation when the calculator is called directly
/// with values that never went through onboarding validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// Numeric input outside its domain range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Offending field
        field: ProfileField,
        /// Supplied value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
    /// NaN or infinite numeric input
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Offending field
        field: ProfileField,
    },
    /// A conditionally required field is absent
    #[error("{field} is required for this goal type")]
    MissingField {
        /// Offending field
        field: ProfileField,
    },
    /// Logged intake below zero
    #[error("consumed calories must not be negative, got {0}")]
    NegativeIntake(f64),
    /// Computed calorie target is not a positive finite number
    #[error("calorie target must be a positive number, got {0} kcal; check the calorie adjustment")]
    NonPositiveTarget(f64),
}

impl InvalidInputError {
    /// Field associated with the error, if any
    #[must_use]
    pub const fn field(&self) -> Option<ProfileField> {
        match self {
            Self::OutOfRange { field, .. }
            | Self::NotFinite { field }
            | Self::MissingField { field } => Some(*field),
            Self::NegativeIntake(_) | Self::NonPositiveTarget(_) => None,
        }
    }
}
