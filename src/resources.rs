// ABOUTME: Shared resource container injected into every route as axum state
// ABOUTME: Holds the loaded configuration and the onboarding session store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

//! # Server Resources
//!
//! Built once at startup and shared through `Arc`, so handlers never rebuild
//! configuration or stores per request.

use crate::config::environment::ServerConfig;
use crate::config::goal_calculator::GoalCalculatorConfig;
use crate::onboarding::OnboardingSessionStore;

/// Centralized resource container for dependency injection
pub struct ServerResources {
    /// Loaded and validated configuration
    pub config: ServerConfig,
    /// Server-side onboarding sessions
    pub sessions: OnboardingSessionStore,
}

impl ServerResources {
    /// Build resources from configuration
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let sessions = OnboardingSessionStore::from_config(&config.onboarding);
        Self { config, sessions }
    }

    /// Calculator constants
    #[must_use]
    pub const fn goal_calculator(&self) -> &GoalCalculatorConfig {
        &self.config.goal_calculator
    }
}
