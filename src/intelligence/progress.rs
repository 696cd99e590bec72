// ABOUTME: Daily intake progress against computed calorie targets
// ABOUTME: Remaining calories and percent-of-goal for the dashboard view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

use super::goal_calculator::round_half_up;
use lookmaxxer_core::errors::InvalidInputError;
use lookmaxxer_core::models::DailyTargets;
use serde::{Deserialize, Serialize};

/// Intake so far compared with the daily calorie goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgress {
    /// Daily energy target (kcal)
    pub calorie_goal: u32,
    /// Energy logged so far (kcal)
    pub calories_consumed: f64,
    /// Goal minus consumed; negative once the goal is exceeded
    pub calories_remaining: f64,
    /// Consumed as a percentage of the goal, one decimal
    pub percent_of_goal: f64,
}

/// Compare logged intake with the calorie goal
///
/// # Errors
///
/// Returns `InvalidInputError::NegativeIntake` if `consumed_kcal` is negative
/// or not a finite number
pub fn daily_calorie_progress(
    targets: &DailyTargets,
    consumed_kcal: f64,
) -> Result<DailyProgress, InvalidInputError> {
    if !consumed_kcal.is_finite() || consumed_kcal < 0.0 {
        return Err(InvalidInputError::NegativeIntake(consumed_kcal));
    }

    let goal = f64::from(targets.calorie_goal);
    let percent_of_goal = if targets.calorie_goal == 0 {
        0.0
    } else {
        round_half_up(consumed_kcal / goal * 100.0, 1)
    };

    Ok(DailyProgress {
        calorie_goal: targets.calorie_goal,
        calories_consumed: consumed_kcal,
        calories_remaining: goal - consumed_kcal,
        percent_of_goal,
    })
}
