// ABOUTME: Daily target computation and intake progress helpers
// ABOUTME: Pure functions over UserProfile and DailyTargets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

//! # Intelligence Module
//!
//! Everything in here is synchronous and stateless, so it can be called from
//! any handler or thread without coordination.

/// Mifflin-St Jeor based calorie and macro targets
pub mod goal_calculator;

/// Logged intake compared with the calorie goal
pub mod progress;

pub use goal_calculator::{
    calculate_mifflin_st_jeor, compute_daily_targets, compute_energy_breakdown,
    estimate_weeks_to_goal, macro_grams, round_half_up, validate_profile, EnergyBreakdown,
};
pub use progress::{daily_calorie_progress, DailyProgress};
