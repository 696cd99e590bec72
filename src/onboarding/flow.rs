// ABOUTME: Typestate onboarding flow with compile-time step ordering
// ABOUTME: Biometrics -> Goal -> Activity, each guarded by field-level validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

use super::validation::{lenient_string, parse_measurement, parse_option, parse_whole};
use crate::config::goal_calculator::GoalCalculatorConfig;
use crate::intelligence::{compute_daily_targets, estimate_weeks_to_goal};
use lookmaxxer_core::constants::profile_limits::{
    MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE_YEARS, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use lookmaxxer_core::errors::{AppError, InvalidInputError, ProfileField, ValidationError};
use lookmaxxer_core::models::{ActivityLevel, DailyTargets, GoalType, Sex, UserProfile};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

// ============================================================================
// Raw step input
// ============================================================================

/// Step 1 form values as the presentation layer holds them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricsForm {
    /// Age in years
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub age_years: Option<String>,
    /// Height in centimeters
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<String>,
    /// Current weight in kilograms
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub current_weight_kg: Option<String>,
    /// `male` or `female`
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
}

/// Step 2 form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalForm {
    /// `lose`, `gain` or `maintain`
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<String>,
    /// Target weight in kilograms, ignored for `maintain`
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub goal_weight_kg: Option<String>,
}

/// Step 3 form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityForm {
    /// `sedentary`, `light`, `moderate` or `very`
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
}

// ============================================================================
// Validated step output
// ============================================================================

/// Validated step 1 values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biometrics {
    /// Age in whole years
    pub age_years: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current weight in kilograms
    pub current_weight_kg: f64,
    /// Sex for the BMR formula
    pub sex: Sex,
}

impl Biometrics {
    fn parse(form: &BiometricsForm) -> Result<Self, ValidationError> {
        Ok(Self {
            age_years: parse_whole(
                ProfileField::AgeYears,
                form.age_years.as_deref(),
                MIN_AGE_YEARS,
                MAX_AGE_YEARS,
            )?,
            height_cm: parse_measurement(
                ProfileField::HeightCm,
                form.height_cm.as_deref(),
                MIN_HEIGHT_CM,
                MAX_HEIGHT_CM,
            )?,
            current_weight_kg: parse_measurement(
                ProfileField::CurrentWeightKg,
                form.current_weight_kg.as_deref(),
                MIN_WEIGHT_KG,
                MAX_WEIGHT_KG,
            )?,
            sex: parse_option(
                ProfileField::Sex,
                form.sex.as_deref(),
                Sex::parse,
                &Sex::WIRE_VALUES,
            )?,
        })
    }

    fn to_form(self) -> BiometricsForm {
        BiometricsForm {
            age_years: Some(self.age_years.to_string()),
            height_cm: Some(self.height_cm.to_string()),
            current_weight_kg: Some(self.current_weight_kg.to_string()),
            sex: Some(self.sex.as_str().to_owned()),
        }
    }
}

/// Validated step 2 values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalSelection {
    /// Weight goal
    pub goal_type: GoalType,
    /// Target weight, present exactly when the goal requires one
    pub goal_weight_kg: Option<f64>,
}

impl GoalSelection {
    fn parse(form: &GoalForm) -> Result<Self, ValidationError> {
        let goal_type = parse_option(
            ProfileField::GoalType,
            form.goal_type.as_deref(),
            GoalType::parse,
            &GoalType::WIRE_VALUES,
        )?;

        let goal_weight_kg = if goal_type.requires_goal_weight() {
            Some(parse_measurement(
                ProfileField::GoalWeightKg,
                form.goal_weight_kg.as_deref(),
                MIN_WEIGHT_KG,
                MAX_WEIGHT_KG,
            )?)
        } else {
            None
        };

        Ok(Self {
            goal_type,
            goal_weight_kg,
        })
    }

    fn to_form(self) -> GoalForm {
        GoalForm {
            goal_type: Some(self.goal_type.as_str().to_owned()),
            goal_weight_kg: self.goal_weight_kg.map(|kg| kg.to_string()),
        }
    }
}

// ============================================================================
// Step marker types
// ============================================================================

/// Step 1: age, height, current weight, sex
/// Valid transitions: -> `GoalStep` (via `submit`)
#[derive(Debug, Clone, Default)]
pub struct BiometricsStep {
    prefill: BiometricsForm,
}

/// Step 2: goal type and conditional goal weight
/// Valid transitions: -> `ActivityStep` (via `submit`), -> `BiometricsStep` (via `back`)
#[derive(Debug, Clone)]
pub struct GoalStep {
    biometrics: Biometrics,
    prefill: GoalForm,
}

/// Step 3: activity level
/// Valid transitions: -> `UserProfile` (via `finish`), -> `GoalStep` (via `back`)
#[derive(Debug, Clone)]
pub struct ActivityStep {
    biometrics: Biometrics,
    goal: GoalSelection,
}

/// Onboarding flow parameterized by its current step
///
/// Each transition consumes the flow, so a step cannot be skipped or
/// submitted twice. A rejected submission hands the unchanged flow back
/// inside [`Rejected`].
///
/// ```rust
/// use lookmaxxer_api::onboarding::{ActivityForm, BiometricsForm, GoalForm, OnboardingFlow};
///
/// let goal_step = OnboardingFlow::new()
///     .submit(&BiometricsForm {
///         age_years: Some("30".into()),
///         height_cm: Some("175".into()),
///         current_weight_kg: Some("80".into()),
///         sex: Some("male".into()),
///     })
///     .map_err(|rejected| rejected.error)?;
/// let activity_step = goal_step
///     .submit(&GoalForm {
///         goal_type: Some("maintain".into()),
///         goal_weight_kg: None,
///     })
///     .map_err(|rejected| rejected.error)?;
/// let profile = activity_step
///     .finish(&ActivityForm {
///         activity_level: Some("moderate".into()),
///     })
///     .map_err(|rejected| rejected.error)?;
/// assert_eq!(profile.age_years, 30);
/// # Ok::<(), lookmaxxer_core::errors::ValidationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OnboardingFlow<S> {
    step: S,
}

/// A blocked transition: the flow stays on its current step
#[derive(Debug, Clone)]
pub struct Rejected<S, E = ValidationError> {
    /// The flow, unchanged
    pub flow: OnboardingFlow<S>,
    /// Why the step could not advance
    pub error: E,
}

/// Why step 3 could not complete with targets
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompletionError {
    /// Step 3 input was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The assembled profile produced no usable targets
    #[error(transparent)]
    Calculation(#[from] InvalidInputError),
}

impl From<CompletionError> for AppError {
    fn from(error: CompletionError) -> Self {
        match error {
            CompletionError::Validation(error) => error.into(),
            CompletionError::Calculation(error) => error.into(),
        }
    }
}

/// Result of submitting a step
pub type StepResult<Next, Current> = Result<OnboardingFlow<Next>, Rejected<Current>>;

impl Default for OnboardingFlow<BiometricsStep> {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingFlow<BiometricsStep> {
    /// Start a new flow on step 1
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: BiometricsStep::default(),
        }
    }

    /// Values to pre-populate step 1 with after back navigation
    #[must_use]
    pub const fn prefill(&self) -> &BiometricsForm {
        &self.step.prefill
    }

    /// Validate step 1 and advance to the goal step
    ///
    /// # Errors
    ///
    /// Returns the unchanged flow with a `ValidationError` if any field is
    /// missing, non-numeric, not positive or out of range
    pub fn submit(self, form: &BiometricsForm) -> StepResult<GoalStep, BiometricsStep> {
        match Biometrics::parse(form) {
            Ok(biometrics) => {
                debug!(onboarding.step = "biometrics", "Onboarding step accepted");
                Ok(OnboardingFlow {
                    step: GoalStep {
                        biometrics,
                        prefill: GoalForm::default(),
                    },
                })
            }
            Err(error) => Err(Rejected { flow: self, error }),
        }
    }
}

impl OnboardingFlow<GoalStep> {
    /// Validated step 1 values
    #[must_use]
    pub const fn biometrics(&self) -> &Biometrics {
        &self.step.biometrics
    }

    /// Values to pre-populate step 2 with after back navigation
    #[must_use]
    pub const fn prefill(&self) -> &GoalForm {
        &self.step.prefill
    }

    /// Validate step 2 and advance to the activity step
    ///
    /// # Errors
    ///
    /// Returns the unchanged flow with a `ValidationError` if the goal type is
    /// unknown or the goal weight is missing or invalid for a lose/gain goal
    pub fn submit(self, form: &GoalForm) -> StepResult<ActivityStep, GoalStep> {
        match GoalSelection::parse(form) {
            Ok(goal) => {
                debug!(
                    onboarding.step = "goal",
                    goal_type = %goal.goal_type,
                    "Onboarding step accepted"
                );
                Ok(OnboardingFlow {
                    step: ActivityStep {
                        biometrics: self.step.biometrics,
                        goal,
                    },
                })
            }
            Err(error) => Err(Rejected { flow: self, error }),
        }
    }

    /// Return to step 1 with its previous values as prefill
    #[must_use]
    pub fn back(self) -> OnboardingFlow<BiometricsStep> {
        OnboardingFlow {
            step: BiometricsStep {
                prefill: self.step.biometrics.to_form(),
            },
        }
    }
}

impl OnboardingFlow<ActivityStep> {
    /// Validated step 1 values
    #[must_use]
    pub const fn biometrics(&self) -> &Biometrics {
        &self.step.biometrics
    }

    /// Validated step 2 values
    #[must_use]
    pub const fn goal(&self) -> &GoalSelection {
        &self.step.goal
    }

    /// Validate step 3 and assemble the finished profile
    ///
    /// # Errors
    ///
    /// Returns the unchanged flow with a `ValidationError` if the activity
    /// level is missing or unknown
    pub fn finish(self, form: &ActivityForm) -> Result<UserProfile, Rejected<ActivityStep>> {
        let activity_level = match parse_option(
            ProfileField::ActivityLevel,
            form.activity_level.as_deref(),
            ActivityLevel::parse,
            &ActivityLevel::WIRE_VALUES,
        ) {
            Ok(level) => level,
            Err(error) => return Err(Rejected { flow: self, error }),
        };

        let ActivityStep { biometrics, goal } = self.step;
        debug!(onboarding.step = "activity", "Onboarding complete");
        Ok(UserProfile {
            age_years: biometrics.age_years,
            height_cm: biometrics.height_cm,
            current_weight_kg: biometrics.current_weight_kg,
            goal_weight_kg: goal.goal_weight_kg,
            goal_type: goal.goal_type,
            activity_level,
            sex: biometrics.sex,
        })
    }

    /// Validate step 3 and compute the summary for the finished profile
    ///
    /// # Errors
    ///
    /// Returns the unchanged flow with a `CompletionError` if the activity
    /// level is rejected or the targets cannot be computed
    pub fn finish_with_targets(
        self,
        form: &ActivityForm,
        config: &GoalCalculatorConfig,
    ) -> Result<OnboardingSummary, Rejected<ActivityStep, CompletionError>> {
        let fallback = self.clone();
        let profile = self.finish(form).map_err(|rejected| Rejected {
            flow: rejected.flow,
            error: rejected.error.into(),
        })?;

        OnboardingSummary::compute(profile, config).map_err(|error| Rejected {
            flow: fallback,
            error: error.into(),
        })
    }

    /// Return to step 2 with its previous values as prefill
    #[must_use]
    pub fn back(self) -> OnboardingFlow<GoalStep> {
        OnboardingFlow {
            step: GoalStep {
                biometrics: self.step.biometrics,
                prefill: self.step.goal.to_form(),
            },
        }
    }
}

// ============================================================================
// Completion
// ============================================================================

/// Finished profile with its computed targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingSummary {
    /// Validated profile
    pub profile: UserProfile,
    /// Daily calorie and macro targets
    pub targets: DailyTargets,
    /// Weeks to reach the goal weight, absent for `maintain`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_weeks_to_goal: Option<f64>,
}

impl OnboardingSummary {
    /// Compute targets and the goal-weight projection for a profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError` if the profile is outside the domain ranges
    pub fn compute(
        profile: UserProfile,
        config: &GoalCalculatorConfig,
    ) -> Result<Self, InvalidInputError> {
        Ok(Self {
            targets: compute_daily_targets(&profile, config)?,
            estimated_weeks_to_goal: estimate_weeks_to_goal(&profile, config)?,
            profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookmaxxer_core::errors::ValidationErrorKind;

    fn biometrics_form() -> BiometricsForm {
        BiometricsForm {
            age_years: Some("30".into()),
            height_cm: Some("175".into()),
            current_weight_kg: Some("80".into()),
            sex: Some("male".into()),
        }
    }

    #[test]
    fn test_rejection_keeps_step_and_prefill() {
        let mut form = biometrics_form();
        form.height_cm = Some("-5".into());

        let rejected = OnboardingFlow::new().submit(&form).unwrap_err();
        assert_eq!(rejected.error.field, ProfileField::HeightCm);
        assert_eq!(rejected.error.kind, ValidationErrorKind::NotPositive);
        assert_eq!(rejected.flow.prefill(), &BiometricsForm::default());
    }

    #[test]
    fn test_back_prefills_previous_values() {
        let goal_step = OnboardingFlow::new().submit(&biometrics_form()).unwrap();
        let step_one = goal_step.back();
        assert_eq!(step_one.prefill().age_years.as_deref(), Some("30"));
        assert_eq!(step_one.prefill().sex.as_deref(), Some("male"));
    }

    #[test]
    fn test_maintain_drops_goal_weight() {
        let activity_step = OnboardingFlow::new()
            .submit(&biometrics_form())
            .unwrap()
            .submit(&GoalForm {
                goal_type: Some("Maintain".into()),
                goal_weight_kg: Some("not a number".into()),
            })
            .unwrap();
        assert_eq!(activity_step.goal().goal_weight_kg, None);
    }
}
