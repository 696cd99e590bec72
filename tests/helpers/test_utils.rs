// ABOUTME: Shared fixtures for onboarding and calculator integration tests
// ABOUTME: Reference profiles, request bodies and a fully layered test router

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use lookmaxxer_api::config::environment::ServerConfig;
use lookmaxxer_api::models::{ActivityLevel, GoalType, Sex, UserProfile};
use lookmaxxer_api::resources::ServerResources;
use lookmaxxer_api::server::build_router;
use std::sync::Arc;

/// 30 year old, 175 cm, 80 kg, moderately active male aiming for 75 kg
#[allow(dead_code)]
#[must_use]
pub const fn reference_profile(goal_type: GoalType) -> UserProfile {
    UserProfile {
        age_years: 30,
        height_cm: 175.0,
        current_weight_kg: 80.0,
        goal_weight_kg: Some(75.0),
        goal_type,
        activity_level: ActivityLevel::Moderate,
        sex: Sex::Male,
    }
}

/// Same profile as a one-shot request body
#[allow(dead_code)]
#[must_use]
pub fn reference_request(goal_type: &str) -> serde_json::Value {
    serde_json::json!({
        "ageYears": 30,
        "heightCm": 175,
        "currentWeightKg": 80,
        "goalWeightKg": 75,
        "goalType": goal_type,
        "activityLevel": "moderate",
        "sex": "male"
    })
}

/// Router with default configuration and every middleware layer applied
#[allow(dead_code)]
#[must_use]
pub fn test_app() -> axum::Router {
    test_app_with(ServerConfig::default())
}

/// Router with a custom configuration
#[allow(dead_code)]
#[must_use]
pub fn test_app_with(config: ServerConfig) -> axum::Router {
    build_router(Arc::new(ServerResources::new(config)))
}
