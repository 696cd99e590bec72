// ABOUTME: Goal calculator configuration for BMR, activity multipliers and goal adjustments
// ABOUTME: Holds the macro split table per goal type with validation and env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

//! Goal Calculator Configuration
//!
//! Every constant the daily target computation uses lives here as a named,
//! testable parameter.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use lookmaxxer_core::models::{ActivityLevel, GoalType};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Complete configuration for daily target computation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalCalculatorConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for maintenance calories
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie deficit/surplus per goal type
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Macro split table keyed by goal type
    pub macro_split: MacroSplitConfig,
}

/// Mifflin-St Jeor coefficients
///
/// BMR = `weight_coef` x kg + `height_coef` x cm + `age_coef` x years + sex constant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
    /// Floor applied to the computed BMR (kcal/day)
    pub min_bmr_kcal: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            min_bmr_kcal: 1000.0,
        }
    }
}

/// Activity factor multipliers for maintenance calories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Very active (6-7 days/week): 1.725
    pub very: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            very: 1.725,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Very => self.very,
        }
    }
}

/// Daily calorie adjustment applied on top of maintenance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalAdjustmentConfig {
    /// Deficit subtracted for `lose` (kcal/day)
    pub deficit_kcal: f64,
    /// Surplus added for `gain` (kcal/day)
    pub surplus_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            deficit_kcal: 500.0,
            surplus_kcal: 500.0,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Signed adjustment for a goal type
    #[must_use]
    pub fn adjustment_kcal(&self, goal: GoalType) -> f64 {
        match goal {
            GoalType::Lose => -self.deficit_kcal,
            GoalType::Gain => self.surplus_kcal,
            GoalType::Maintain => 0.0,
        }
    }
}

/// Macro distribution as whole percentages of the calorie goal
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.protein_pct as u16 + self.carbs_pct as u16 + self.fat_pct as u16
    }
}

/// Macro split table keyed by goal type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroSplitConfig {
    /// Higher protein to preserve lean mass in a deficit: 40/30/30
    pub lose: MacroDistribution,
    /// Balanced split: 30/40/30
    pub maintain: MacroDistribution,
    /// Carb-forward split to fuel training in a surplus: 30/45/25
    pub gain: MacroDistribution,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            lose: MacroDistribution::new(40, 30, 30),
            maintain: MacroDistribution::new(30, 40, 30),
            gain: MacroDistribution::new(30, 45, 25),
        }
    }
}

impl MacroSplitConfig {
    /// Distribution for a goal type
    #[must_use]
    pub const fn distribution(&self, goal: GoalType) -> MacroDistribution {
        match goal {
            GoalType::Lose => self.lose,
            GoalType::Maintain => self.maintain,
            GoalType::Gain => self.gain,
        }
    }
}

/// Largest accepted deficit or surplus
const MAX_ADJUSTMENT_KCAL: f64 = 1000.0;

impl GoalCalculatorConfig {
    /// Load defaults, apply environment overrides, then validate
    ///
    /// Recognized variables: `GOAL_CALORIE_DEFICIT_KCAL`, `GOAL_CALORIE_SURPLUS_KCAL`.
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not parse or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(deficit) = parse_env_f64("GOAL_CALORIE_DEFICIT_KCAL")? {
            config.goal_adjustment.deficit_kcal = deficit;
        }
        if let Some(surplus) = parse_env_f64("GOAL_CALORIE_SURPLUS_KCAL")? {
            config.goal_adjustment.surplus_kcal = surplus;
        }

        config.validate()?;
        debug!(
            deficit_kcal = config.goal_adjustment.deficit_kcal,
            surplus_kcal = config.goal_adjustment.surplus_kcal,
            "Goal calculator configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a macro row does not sum to 100, activity factors are
    /// not strictly increasing from at least 1.0, or an adjustment is outside (0, 1000]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rows = [
            ("lose", self.macro_split.lose),
            ("maintain", self.macro_split.maintain),
            ("gain", self.macro_split.gain),
        ];
        for (name, row) in rows {
            let sum = row.total();
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro percentages must sum to 100, got {sum}"
                )));
            }
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "sedentary activity factor must be at least 1.0",
            ));
        }
        if !(factors.sedentary < factors.light
            && factors.light < factors.moderate
            && factors.moderate < factors.very)
        {
            return Err(ConfigError::InvalidRange(
                "activity factors must be strictly increasing",
            ));
        }

        let adjustment = &self.goal_adjustment;
        if !(adjustment.deficit_kcal > 0.0 && adjustment.deficit_kcal <= MAX_ADJUSTMENT_KCAL) {
            return Err(ConfigError::ValueOutOfRange(
                "calorie deficit must be within (0, 1000] kcal",
            ));
        }
        if !(adjustment.surplus_kcal > 0.0 && adjustment.surplus_kcal <= MAX_ADJUSTMENT_KCAL) {
            return Err(ConfigError::ValueOutOfRange(
                "calorie surplus must be within (0, 1000] kcal",
            ));
        }

        if self.bmr.min_bmr_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("minimum BMR must be positive"));
        }

        Ok(())
    }
}

fn parse_env_f64(key: &str) -> Result<Option<f64>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{key}='{raw}': {e}"))),
        Err(_) => Ok(None),
    }
}
