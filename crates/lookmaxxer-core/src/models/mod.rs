// ABOUTME: Core data models shared by the calculator, onboarding flow and HTTP layer
// ABOUTME: Re-exports profile inputs, goal/activity enumerations and daily targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

/// User profile inputs and derived daily targets
pub mod profile;

pub use profile::{ActivityLevel, DailyTargets, GoalType, Sex, UserProfile};
