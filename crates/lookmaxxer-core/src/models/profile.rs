// ABOUTME: User profile inputs and the daily calorie/macro targets derived from them
// ABOUTME: Sex, GoalType, ActivityLevel, UserProfile and DailyTargets definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

use crate::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sex used by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (+5 kcal Mifflin-St Jeor constant)
    Male,
    /// Female (-161 kcal Mifflin-St Jeor constant)
    Female,
}

impl Sex {
    /// Accepted wire values
    pub const WIRE_VALUES: [&'static str; 2] = ["male", "female"];

    /// Parse a form value, case-insensitively
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }

    /// Wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Weight goal selected during onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    /// Caloric deficit
    Lose,
    /// Caloric surplus
    Gain,
    /// Caloric balance
    Maintain,
}

impl GoalType {
    /// Accepted wire values
    pub const WIRE_VALUES: [&'static str; 3] = ["lose", "gain", "maintain"];

    /// Parse a form value, accepting the labels used by the clients
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "lose" | "lose_weight" => Some(Self::Lose),
            "gain" | "build_muscle" => Some(Self::Gain),
            "maintain" | "maintain_weight" => Some(Self::Maintain),
            _ => None,
        }
    }

    /// Whether a goal weight must accompany this goal
    #[must_use]
    pub const fn requires_goal_weight(&self) -> bool {
        !matches!(self, Self::Maintain)
    }

    /// Wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Gain => "gain",
            Self::Maintain => "maintain",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity level bucket for the maintenance multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Very,
}

impl ActivityLevel {
    /// Accepted wire values
    pub const WIRE_VALUES: [&'static str; 4] = ["sedentary", "light", "moderate", "very"];

    /// Parse a form value, accepting the long-form aliases
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "sedentary" => Some(Self::Sedentary),
            "light" | "lightly_active" => Some(Self::Light),
            "moderate" | "moderately_active" => Some(Self::Moderate),
            "very" | "very_active" => Some(Self::Very),
            _ => None,
        }
    }

    /// Wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Very => "very",
        }
    }
}

/// Complete, validated onboarding input
///
/// Only the onboarding flow is expected to construct this from user input;
/// the calculator re-checks the domain ranges because the fields are public.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Age in whole years (13-100)
    pub age_years: u32,
    /// Height in centimeters (100-250)
    pub height_cm: f64,
    /// Current body weight in kilograms (30-300)
    pub current_weight_kg: f64,
    /// Target body weight in kilograms, absent for `maintain`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_weight_kg: Option<f64>,
    /// Weight goal
    pub goal_type: GoalType,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Sex used by the BMR formula
    pub sex: Sex,
}

/// Daily calorie and macronutrient targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyTargets {
    /// Daily energy target (kcal)
    pub calorie_goal: u32,
    /// Protein target (grams)
    pub protein_goal_g: f64,
    /// Carbohydrate target (grams)
    pub carb_goal_g: f64,
    /// Fat target (grams)
    pub fat_goal_g: f64,
}

impl DailyTargets {
    /// Energy represented by the macro targets under 4/4/9 accounting
    #[must_use]
    pub fn macro_kcal(&self) -> f64 {
        self.fat_goal_g.mul_add(
            KCAL_PER_GRAM_FAT,
            self.protein_goal_g
                .mul_add(KCAL_PER_GRAM_PROTEIN, self.carb_goal_g * KCAL_PER_GRAM_CARBS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_parsing_is_lenient() {
        assert_eq!(GoalType::parse(" Lose "), Some(GoalType::Lose));
        assert_eq!(GoalType::parse("build_muscle"), Some(GoalType::Gain));
        assert_eq!(ActivityLevel::parse("MODERATELY_ACTIVE"), Some(ActivityLevel::Moderate));
        assert_eq!(Sex::parse("F"), Some(Sex::Female));
        assert_eq!(ActivityLevel::parse("extreme"), None);
    }

    #[test]
    fn test_profile_wire_format() {
        let profile = UserProfile {
            age_years: 30,
            height_cm: 175.0,
            current_weight_kg: 80.0,
            goal_weight_kg: None,
            goal_type: GoalType::Maintain,
            activity_level: ActivityLevel::Moderate,
            sex: Sex::Male,
        };
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["ageYears"], 30);
        assert_eq!(json["goalType"], "maintain");
        assert_eq!(json["activityLevel"], "moderate");
        assert!(json.get("goalWeightKg").is_none());
    }

    #[test]
    fn test_targets_wire_format() {
        let targets = DailyTargets {
            calorie_goal: 2000,
            protein_goal_g: 150.0,
            carb_goal_g: 200.0,
            fat_goal_g: 66.7,
        };
        let json = serde_json::to_value(targets).unwrap();
        assert_eq!(json["calorieGoal"], 2000);
        assert_eq!(json["proteinGoalG"], 150.0);
        assert_eq!(json["carbGoalG"], 200.0);
        assert_eq!(json["fatGoalG"], 66.7);
    }
}
