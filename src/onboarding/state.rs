// ABOUTME: Runtime wrapper over the typestate onboarding flow
// ABOUTME: Lets the session store drive steps chosen at request time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

use super::flow::{
    ActivityForm, ActivityStep, BiometricsForm, BiometricsStep, GoalForm, GoalStep,
    OnboardingFlow, OnboardingSummary,
};
use crate::config::goal_calculator::GoalCalculatorConfig;
use lookmaxxer_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem;
use tracing::info;

/// Step names as exposed over HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnboardingStep {
    /// Age, height, weight, sex
    Biometrics,
    /// Goal type and goal weight
    Goal,
    /// Activity level
    Activity,
    /// Targets computed
    Complete,
}

impl OnboardingStep {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Biometrics => "biometrics",
            Self::Goal => "goal",
            Self::Activity => "activity",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefill values for whichever step is current
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepPrefill {
    /// Step 1 values
    Biometrics(BiometricsForm),
    /// Step 2 values
    Goal(GoalForm),
    /// Step 3 values
    Activity(ActivityForm),
}

/// Onboarding flow in any of its steps
#[derive(Debug, Clone)]
pub enum OnboardingState {
    /// Waiting for step 1
    Biometrics(OnboardingFlow<BiometricsStep>),
    /// Waiting for step 2
    Goal(OnboardingFlow<GoalStep>),
    /// Waiting for step 3
    Activity(OnboardingFlow<ActivityStep>),
    /// Finished
    Complete(OnboardingSummary),
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::Biometrics(OnboardingFlow::new())
    }
}

impl OnboardingState {
    /// Current step
    #[must_use]
    pub const fn step(&self) -> OnboardingStep {
        match self {
            Self::Biometrics(_) => OnboardingStep::Biometrics,
            Self::Goal(_) => OnboardingStep::Goal,
            Self::Activity(_) => OnboardingStep::Activity,
            Self::Complete(_) => OnboardingStep::Complete,
        }
    }

    /// Prefill values of the current step, `None` once complete
    #[must_use]
    pub fn prefill(&self) -> Option<StepPrefill> {
        match self {
            Self::Biometrics(flow) => Some(StepPrefill::Biometrics(flow.prefill().clone())),
            Self::Goal(flow) => Some(StepPrefill::Goal(flow.prefill().clone())),
            Self::Activity(_) => Some(StepPrefill::Activity(ActivityForm::default())),
            Self::Complete(_) => None,
        }
    }

    /// Summary once complete
    #[must_use]
    pub const fn summary(&self) -> Option<&OnboardingSummary> {
        match self {
            Self::Complete(summary) => Some(summary),
            _ => None,
        }
    }

    fn out_of_order(current: OnboardingStep, attempted: OnboardingStep) -> AppError {
        AppError::invalid_state(format!(
            "Cannot submit {attempted} while onboarding is at {current}"
        ))
    }

    /// Submit step 1
    ///
    /// # Errors
    ///
    /// Returns an error if the flow is not at step 1 or validation fails;
    /// the state is unchanged in both cases
    pub fn submit_biometrics(&mut self, form: &BiometricsForm) -> AppResult<()> {
        match mem::take(self) {
            Self::Biometrics(flow) => match flow.submit(form) {
                Ok(next) => {
                    *self = Self::Goal(next);
                    Ok(())
                }
                Err(rejected) => {
                    *self = Self::Biometrics(rejected.flow);
                    Err(rejected.error.into())
                }
            },
            other => {
                let current = other.step();
                *self = other;
                Err(Self::out_of_order(current, OnboardingStep::Biometrics))
            }
        }
    }

    /// Submit step 2
    ///
    /// # Errors
    ///
    /// Returns an error if the flow is not at step 2 or validation fails;
    /// the state is unchanged in both cases
    pub fn submit_goal(&mut self, form: &GoalForm) -> AppResult<()> {
        match mem::take(self) {
            Self::Goal(flow) => match flow.submit(form) {
                Ok(next) => {
                    *self = Self::Activity(next);
                    Ok(())
                }
                Err(rejected) => {
                    *self = Self::Goal(rejected.flow);
                    Err(rejected.error.into())
                }
            },
            other => {
                let current = other.step();
                *self = other;
                Err(Self::out_of_order(current, OnboardingStep::Goal))
            }
        }
    }

    /// Submit step 3 and compute the targets
    ///
    /// # Errors
    ///
    /// Returns an error if the flow is not at step 3, validation fails, or
    /// the calculator rejects the profile; the state is unchanged in all cases
    pub fn submit_activity(
        &mut self,
        form: &ActivityForm,
        config: &GoalCalculatorConfig,
    ) -> AppResult<OnboardingSummary> {
        match mem::take(self) {
            Self::Activity(flow) => match flow.finish_with_targets(form, config) {
                Ok(summary) => {
                    info!(
                        targets.calorie_goal = summary.targets.calorie_goal,
                        goal_type = %summary.profile.goal_type,
                        "Onboarding targets computed"
                    );
                    *self = Self::Complete(summary);
                    Ok(summary)
                }
                Err(rejected) => {
                    *self = Self::Activity(rejected.flow);
                    Err(rejected.error.into())
                }
            },
            other => {
                let current = other.step();
                *self = other;
                Err(Self::out_of_order(current, OnboardingStep::Activity))
            }
        }
    }

    /// Go back one step
    ///
    /// # Errors
    ///
    /// Returns an error at step 1 or once complete
    pub fn back(&mut self) -> AppResult<()> {
        match mem::take(self) {
            Self::Goal(flow) => {
                *self = Self::Biometrics(flow.back());
                Ok(())
            }
            Self::Activity(flow) => {
                *self = Self::Goal(flow.back());
                Ok(())
            }
            other => {
                let current = other.step();
                *self = other;
                Err(AppError::invalid_state(format!(
                    "Cannot go back from {current}"
                )))
            }
        }
    }
}
