// ABOUTME: Raw form value parsing for onboarding steps
// ABOUTME: Trims, parses and range-checks strings into typed profile fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

use lookmaxxer_core::errors::{ProfileField, ValidationError};
use serde::{Deserialize, Deserializer};

/// Accept a form value sent either as a JSON string or a JSON number
///
/// # Errors
///
/// Returns a deserialization error for any other JSON type
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<RawValue>::deserialize(deserializer)?.map(|raw| match raw {
            RawValue::Text(text) => text,
            RawValue::Number(number) => number.to_string(),
        }),
    )
}

/// Trimmed, non-empty value of a field
///
/// # Errors
///
/// Returns `ValidationError::missing` if the value is absent or blank
pub fn required(field: ProfileField, raw: Option<&str>) -> Result<&str, ValidationError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::missing(field)),
    }
}

fn parse_positive(field: ProfileField, value: &str) -> Result<f64, ValidationError> {
    let number: f64 = value
        .parse()
        .map_err(|_| ValidationError::not_a_number(field, value))?;
    if !number.is_finite() {
        return Err(ValidationError::not_a_number(field, value));
    }
    if number <= 0.0 {
        return Err(ValidationError::not_positive(field));
    }
    Ok(number)
}

/// Parse a positive real within `[min, max]`
///
/// # Errors
///
/// Returns a `ValidationError` if the value is missing, not a number, not
/// positive, or outside the range
pub fn parse_measurement(
    field: ProfileField,
    raw: Option<&str>,
    min: f64,
    max: f64,
) -> Result<f64, ValidationError> {
    let value = required(field, raw)?;
    let number = parse_positive(field, value)?;
    if !(min..=max).contains(&number) {
        return Err(ValidationError::out_of_range(field, min, max));
    }
    Ok(number)
}

/// Parse a positive whole number within `[min, max]`
///
/// `"30"` and `"30.0"` are both accepted; `"30.5"` is not.
///
/// # Errors
///
/// Returns a `ValidationError` if the value is missing, not a number, not
/// positive, fractional, or outside the range
pub fn parse_whole(
    field: ProfileField,
    raw: Option<&str>,
    min: u32,
    max: u32,
) -> Result<u32, ValidationError> {
    let value = required(field, raw)?;
    let number = parse_positive(field, value)?;
    if number.fract() != 0.0 {
        return Err(ValidationError::not_an_integer(field, value));
    }
    if !(f64::from(min)..=f64::from(max)).contains(&number) {
        return Err(ValidationError::out_of_range(
            field,
            f64::from(min),
            f64::from(max),
        ));
    }
    // Range-checked above, so the cast cannot truncate
    Ok(number as u32)
}

/// Parse one of a closed set of options
///
/// # Errors
///
/// Returns a `ValidationError` if the value is missing or `parse` rejects it
pub fn parse_option<T>(
    field: ProfileField,
    raw: Option<&str>,
    parse: fn(&str) -> Option<T>,
    allowed: &[&str],
) -> Result<T, ValidationError> {
    let value = required(field, raw)?;
    parse(value).ok_or_else(|| ValidationError::unknown_option(field, value, allowed))
}
