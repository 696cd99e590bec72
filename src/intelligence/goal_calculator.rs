// ABOUTME: Daily calorie and macronutrient target computation using Mifflin-St Jeor
// ABOUTME: BMR, maintenance calories, goal adjustment, macro split and goal-weight projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

//! Goal Calculator
//!
//! Derives [`DailyTargets`] from a [`UserProfile`]. Every function here is
//! pure: identical input always produces identical output, and nothing is
//! shared between calls.
//!
//! # Algorithm
//!
//! 1. BMR (Mifflin-St Jeor): `10 x kg + 6.25 x cm - 5 x age + (5 | -161)`,
//!    floored at `BmrConfig::min_bmr_kcal`
//! 2. Maintenance: BMR x activity factor (1.2 / 1.375 / 1.55 / 1.725)
//! 3. Calorie goal: maintenance - deficit (lose), + surplus (gain), rounded half up
//! 4. Macros: goal-specific percentage split converted with 4/4/9 kcal per gram,
//!    rounded half up to one decimal
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::goal_calculator::{BmrConfig, GoalCalculatorConfig};
use lookmaxxer_core::constants::energy::{
    DAYS_PER_WEEK, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
    KCAL_PER_KG_BODY_WEIGHT,
};
use lookmaxxer_core::constants::profile_limits::{
    MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE_YEARS, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use lookmaxxer_core::errors::{InvalidInputError, ProfileField};
use lookmaxxer_core::models::{DailyTargets, GoalType, Sex, UserProfile};
use serde::{Deserialize, Serialize};

/// Intermediate energy values of a target computation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBreakdown {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr_kcal: f64,
    /// BMR x activity factor (kcal/day)
    pub maintenance_kcal: f64,
    /// Signed goal adjustment (kcal/day)
    pub adjustment_kcal: f64,
}

impl EnergyBreakdown {
    /// Unrounded daily energy target
    #[must_use]
    pub fn target_kcal(&self) -> f64 {
        self.maintenance_kcal + self.adjustment_kcal
    }
}

/// Round half up to `decimals` places
///
/// `round_half_up(2710.5, 0)` is `2711.0`.
#[must_use]
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale + 0.5).floor() / scale
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
///
/// The result is floored at `config.min_bmr_kcal`. Inputs are assumed to be
/// range-checked already; see [`validate_profile`].
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    let bmr = config.msj_age_coef.mul_add(
        f64::from(age_years),
        config
            .msj_weight_coef
            .mul_add(weight_kg, config.msj_height_coef * height_cm),
    ) + sex_constant;

    bmr.max(config.min_bmr_kcal)
}

fn check_range(field: ProfileField, value: f64, min: f64, max: f64) -> Result<(), InvalidInputError> {
    if !value.is_finite() {
        return Err(InvalidInputError::NotFinite { field });
    }
    if !(min..=max).contains(&value) {
        return Err(InvalidInputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Domain check for profiles that may not have passed onboarding
///
/// # Errors
///
/// Returns `InvalidInputError` if any numeric field is outside its domain
/// range, or the goal weight is missing for a lose/gain goal
pub fn validate_profile(profile: &UserProfile) -> Result<(), InvalidInputError> {
    check_range(
        ProfileField::AgeYears,
        f64::from(profile.age_years),
        f64::from(MIN_AGE_YEARS),
        f64::from(MAX_AGE_YEARS),
    )?;
    check_range(
        ProfileField::HeightCm,
        profile.height_cm,
        MIN_HEIGHT_CM,
        MAX_HEIGHT_CM,
    )?;
    check_range(
        ProfileField::CurrentWeightKg,
        profile.current_weight_kg,
        MIN_WEIGHT_KG,
        MAX_WEIGHT_KG,
    )?;

    match profile.goal_weight_kg {
        Some(goal_weight) => check_range(
            ProfileField::GoalWeightKg,
            goal_weight,
            MIN_WEIGHT_KG,
            MAX_WEIGHT_KG,
        )?,
        None if profile.goal_type.requires_goal_weight() => {
            return Err(InvalidInputError::MissingField {
                field: ProfileField::GoalWeightKg,
            });
        }
        None => {}
    }

    Ok(())
}

/// Compute the intermediate BMR, maintenance and adjustment values
///
/// # Errors
///
/// Returns `InvalidInputError` if the profile is outside the domain ranges
pub fn compute_energy_breakdown(
    profile: &UserProfile,
    config: &GoalCalculatorConfig,
) -> Result<EnergyBreakdown, InvalidInputError> {
    validate_profile(profile)?;

    let bmr_kcal = calculate_mifflin_st_jeor(
        profile.current_weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
        &config.bmr,
    );
    let maintenance_kcal = bmr_kcal * config.activity_factors.factor(profile.activity_level);
    let adjustment_kcal = config.goal_adjustment.adjustment_kcal(profile.goal_type);

    Ok(EnergyBreakdown {
        bmr_kcal,
        maintenance_kcal,
        adjustment_kcal,
    })
}

/// Grams of a macro carrying `pct` percent of `calorie_goal`, rounded half up
/// to one decimal
///
/// Computed in whole tenths of a gram so exact halves always round up.
#[must_use]
pub fn macro_grams(calorie_goal: u32, pct: u8, kcal_per_gram: f64) -> f64 {
    let numerator = u64::from(calorie_goal) * u64::from(pct) * 10;
    let denominator = 100 * (kcal_per_gram as u64).max(1);
    let tenths = (2 * numerator + denominator) / (2 * denominator);
    tenths as f64 / 10.0
}

/// Compute daily calorie and macronutrient targets
///
/// Main entry point. Deterministic, and the macro grams satisfy
/// `4p + 4c + 9f` within 1 kcal of `calorie_goal`.
///
/// # Errors
///
/// Returns `InvalidInputError` if the profile is outside the domain ranges, or
/// `InvalidInputError::NonPositiveTarget` if the configured adjustment leaves
/// no positive calorie target
pub fn compute_daily_targets(
    profile: &UserProfile,
    config: &GoalCalculatorConfig,
) -> Result<DailyTargets, InvalidInputError> {
    let breakdown = compute_energy_breakdown(profile, config)?;
    let target_kcal = round_half_up(breakdown.target_kcal(), 0);
    if !target_kcal.is_finite() || target_kcal < 1.0 || target_kcal > f64::from(u32::MAX) {
        return Err(InvalidInputError::NonPositiveTarget(breakdown.target_kcal()));
    }
    let calorie_goal = target_kcal as u32;

    let split = config.macro_split.distribution(profile.goal_type);
    Ok(DailyTargets {
        calorie_goal,
        protein_goal_g: macro_grams(calorie_goal, split.protein_pct, KCAL_PER_GRAM_PROTEIN),
        carb_goal_g: macro_grams(calorie_goal, split.carbs_pct, KCAL_PER_GRAM_CARBS),
        fat_goal_g: macro_grams(calorie_goal, split.fat_pct, KCAL_PER_GRAM_FAT),
    })
}

/// Estimate weeks needed to reach the goal weight at the configured adjustment
///
/// Uses roughly 7700 kcal per kilogram of body weight. Returns `None` for
/// `maintain`, and `Some(0.0)` when the goal weight is already reached or lies
/// on the other side of the current weight.
///
/// # Errors
///
/// Returns `InvalidInputError` if the profile is outside the domain ranges
pub fn estimate_weeks_to_goal(
    profile: &UserProfile,
    config: &GoalCalculatorConfig,
) -> Result<Option<f64>, InvalidInputError> {
    validate_profile(profile)?;

    let Some(goal_weight) = profile.goal_weight_kg else {
        return Ok(None);
    };

    let remaining_kg = match profile.goal_type {
        GoalType::Maintain => return Ok(None),
        GoalType::Lose => profile.current_weight_kg - goal_weight,
        GoalType::Gain => goal_weight - profile.current_weight_kg,
    };
    if remaining_kg <= 0.0 {
        return Ok(Some(0.0));
    }

    let weekly_kcal = config.goal_adjustment.adjustment_kcal(profile.goal_type).abs() * DAYS_PER_WEEK;
    Ok(Some(round_half_up(
        remaining_kg * KCAL_PER_KG_BODY_WEIGHT / weekly_kcal,
        1,
    )))
}
