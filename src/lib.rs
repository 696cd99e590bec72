// ABOUTME: Main library entry point for the LookMaxxer API
// ABOUTME: Onboarding flow, daily calorie/macro targets and the HTTP server around them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

#![deny(unsafe_code)]

//! # LookMaxxer API
//!
//! Collects a user profile through a three-step onboarding flow and derives
//! daily calorie and macronutrient targets from it.
//!
//! ## Architecture
//!
//! - **Onboarding**: typestate flow `Biometrics -> Goal -> Activity`, with a
//!   bounded session store for driving it over HTTP
//! - **Intelligence**: Mifflin-St Jeor BMR, activity multipliers, goal
//!   adjustment and macro split
//! - **Routes**: axum handlers for `/health`, `/ready` and `/api/onboarding`
//! - **Config**: environment-only configuration with validation
//!
//! ## Example Usage
//!
//! ```rust
//! use lookmaxxer_api::config::GoalCalculatorConfig;
//! use lookmaxxer_api::intelligence::compute_daily_targets;
//! use lookmaxxer_core::models::{ActivityLevel, GoalType, Sex, UserProfile};
//!
//! let profile = UserProfile {
//!     age_years: 30,
//!     height_cm: 175.0,
//!     current_weight_kg: 80.0,
//!     goal_weight_kg: Some(75.0),
//!     goal_type: GoalType::Lose,
//!     activity_level: ActivityLevel::Moderate,
//!     sex: Sex::Male,
//! };
//! let targets = compute_daily_targets(&profile, &GoalCalculatorConfig::default())?;
//! assert_eq!(targets.calorie_goal, 2211);
//! # Ok::<(), lookmaxxer_core::errors::InvalidInputError>(())
//! ```

/// Configuration management
pub mod config;

/// Daily target computation and progress helpers
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request ids)
pub mod middleware;

/// Onboarding flow and session store
pub mod onboarding;

/// Shared state handed to route handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

pub use lookmaxxer_core::{constants, errors, models};
