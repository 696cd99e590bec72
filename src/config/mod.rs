// ABOUTME: Configuration module for server settings and daily target computation constants
// ABOUTME: Environment-only configuration with typed validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

/// Environment-based server configuration
pub mod environment;

/// Configuration error types
pub mod error;

/// Goal calculator constants (BMR, activity factors, adjustments, macro split)
pub mod goal_calculator;

pub use error::ConfigError;
pub use goal_calculator::GoalCalculatorConfig;
