// ABOUTME: Multi-step onboarding that assembles a validated UserProfile
// ABOUTME: Typestate flow, runtime state wrapper and server-side session store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

//! # Onboarding
//!
//! `Biometrics -> Goal -> Activity -> Complete`. Invalid input blocks a
//! transition with a field-level [`ValidationError`](lookmaxxer_core::errors::ValidationError)
//! and leaves the flow on its current step. No partial profile ever leaves
//! this module.

/// Typestate flow and step forms
pub mod flow;
/// Bounded session store for HTTP-driven onboarding
pub mod session;
/// Runtime state enum over the typestate flow
pub mod state;
/// Raw form value parsing
pub mod validation;

pub use flow::{
    ActivityForm, ActivityStep, Biometrics, BiometricsForm, BiometricsStep, CompletionError,
    GoalForm, GoalSelection, GoalStep, OnboardingFlow, OnboardingSummary, Rejected, StepResult,
};
pub use session::{OnboardingSession, OnboardingSessionStore, OnboardingView};
pub use state::{OnboardingState, OnboardingStep, StepPrefill};
