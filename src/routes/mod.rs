// ABOUTME: Route module organization for LookMaxxer API HTTP endpoints
// ABOUTME: Each domain module holds route definitions and thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

/// Health check and readiness routes
pub mod health;
/// Onboarding and daily target routes
pub mod onboarding;

pub use health::HealthRoutes;
pub use onboarding::{OnboardingRequest, OnboardingRoutes};
