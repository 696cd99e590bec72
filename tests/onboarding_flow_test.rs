// ABOUTME: Integration tests for the multi-step onboarding flow
// ABOUTME: Step guards, conditional goal weight, back navigation and runtime state transitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use lookmaxxer_api::config::GoalCalculatorConfig;
use lookmaxxer_api::errors::{ErrorCode, InvalidInputError, ProfileField, ValidationErrorKind};
use lookmaxxer_api::models::{ActivityLevel, GoalType, Sex};
use lookmaxxer_api::onboarding::{
    ActivityForm, BiometricsForm, CompletionError, GoalForm, OnboardingFlow, OnboardingState,
    OnboardingStep, StepPrefill,
};

fn biometrics_form(age: &str, height: &str, weight: &str) -> BiometricsForm {
    BiometricsForm {
        age_years: Some(age.to_owned()),
        height_cm: Some(height.to_owned()),
        current_weight_kg: Some(weight.to_owned()),
        sex: Some("female".to_owned()),
    }
}

fn goal_form(goal_type: &str, goal_weight: Option<&str>) -> GoalForm {
    GoalForm {
        goal_type: Some(goal_type.to_owned()),
        goal_weight_kg: goal_weight.map(str::to_owned),
    }
}

fn activity_form(level: &str) -> ActivityForm {
    ActivityForm {
        activity_level: Some(level.to_owned()),
    }
}

// ============================================================================
// Typestate flow
// ============================================================================

#[test]
fn test_step_one_blocks_invalid_values() {
    let cases = [
        (biometrics_form("", "165", "60"), ProfileField::AgeYears, ValidationErrorKind::Missing),
        (biometrics_form("28", "0", "60"), ProfileField::HeightCm, ValidationErrorKind::NotPositive),
        (biometrics_form("28", "165", "-60"), ProfileField::CurrentWeightKg, ValidationErrorKind::NotPositive),
        (biometrics_form("28", "1.65m", "60"), ProfileField::HeightCm, ValidationErrorKind::NotANumber),
        (biometrics_form("28", "165", "600"), ProfileField::CurrentWeightKg, ValidationErrorKind::OutOfRange),
        (biometrics_form("28.5", "165", "60"), ProfileField::AgeYears, ValidationErrorKind::NotAnInteger),
    ];

    for (form, field, kind) in cases {
        let rejected = OnboardingFlow::new().submit(&form).unwrap_err();
        assert_eq!(rejected.error.field, field, "{form:?}");
        assert_eq!(rejected.error.kind, kind, "{form:?}");
        assert!(rejected.error.message.contains(field.as_str()));
    }
}

#[test]
fn test_step_one_requires_sex() {
    let form = BiometricsForm {
        sex: None,
        ..biometrics_form("28", "165", "60")
    };
    let rejected = OnboardingFlow::new().submit(&form).unwrap_err();
    assert_eq!(rejected.error.field, ProfileField::Sex);
}

#[test]
fn test_rejected_flow_can_retry() {
    let rejected = OnboardingFlow::new()
        .submit(&biometrics_form("28", "abc", "60"))
        .unwrap_err();

    let goal_step = rejected
        .flow
        .submit(&biometrics_form("28", "165", "60"))
        .unwrap();
    assert_eq!(goal_step.biometrics().height_cm, 165.0_f64);
    assert_eq!(goal_step.biometrics().sex, Sex::Female);
}

#[test]
fn test_goal_weight_is_conditional() {
    let goal_step = || {
        OnboardingFlow::new()
            .submit(&biometrics_form("28", "165", "60"))
            .unwrap()
    };

    let maintain = goal_step().submit(&goal_form("maintain", None)).unwrap();
    assert_eq!(maintain.goal().goal_type, GoalType::Maintain);
    assert_eq!(maintain.goal().goal_weight_kg, None);

    // A stray goal weight is dropped for maintain
    let maintain = goal_step()
        .submit(&goal_form("maintain", Some("55")))
        .unwrap();
    assert_eq!(maintain.goal().goal_weight_kg, None);

    for goal_type in ["lose", "gain"] {
        let rejected = goal_step().submit(&goal_form(goal_type, None)).unwrap_err();
        assert_eq!(rejected.error.field, ProfileField::GoalWeightKg);
        assert_eq!(rejected.error.kind, ValidationErrorKind::Missing);
    }

    let rejected = goal_step()
        .submit(&goal_form("lose", Some("0")))
        .unwrap_err();
    assert_eq!(rejected.error.kind, ValidationErrorKind::NotPositive);

    let rejected = goal_step().submit(&goal_form("shred", Some("55"))).unwrap_err();
    assert_eq!(rejected.error.field, ProfileField::GoalType);
    assert_eq!(rejected.error.kind, ValidationErrorKind::UnknownOption);
}

#[test]
fn test_finish_assembles_profile() {
    let profile = OnboardingFlow::new()
        .submit(&biometrics_form("28", "165", "60"))
        .unwrap()
        .submit(&goal_form("gain", Some("64.5")))
        .unwrap()
        .finish(&activity_form("light"))
        .unwrap();

    assert_eq!(profile.age_years, 28);
    assert_eq!(profile.goal_type, GoalType::Gain);
    assert_eq!(profile.goal_weight_kg, Some(64.5));
    assert_eq!(profile.activity_level, ActivityLevel::Light);
}

#[test]
fn test_finish_rejects_unknown_activity() {
    let activity_step = OnboardingFlow::new()
        .submit(&biometrics_form("28", "165", "60"))
        .unwrap()
        .submit(&goal_form("maintain", None))
        .unwrap();

    let rejected = activity_step.finish(&activity_form("couch")).unwrap_err();
    assert_eq!(rejected.error.field, ProfileField::ActivityLevel);
    assert!(rejected.flow.finish(&activity_form("very")).is_ok());
}

#[test]
fn test_finish_with_targets_computes_summary() {
    let config = GoalCalculatorConfig::default();
    let summary = OnboardingFlow::new()
        .submit(&BiometricsForm {
            sex: Some("male".to_owned()),
            ..biometrics_form("30", "175", "80")
        })
        .unwrap()
        .submit(&goal_form("lose", Some("75")))
        .unwrap()
        .finish_with_targets(&activity_form("moderate"), &config)
        .unwrap();

    assert_eq!(summary.profile.activity_level, ActivityLevel::Moderate);
    assert_eq!(summary.targets.calorie_goal, 2211);
    assert_eq!(summary.estimated_weeks_to_goal, Some(11.0));
}

#[test]
fn test_finish_with_targets_hands_flow_back() {
    let activity_step = || {
        OnboardingFlow::new()
            .submit(&biometrics_form("28", "165", "60"))
            .unwrap()
            .submit(&goal_form("maintain", None))
            .unwrap()
    };

    let config = GoalCalculatorConfig::default();
    let rejected = activity_step()
        .finish_with_targets(&activity_form("couch"), &config)
        .unwrap_err();
    assert!(matches!(
        rejected.error,
        CompletionError::Validation(ref error) if error.field == ProfileField::ActivityLevel
    ));
    assert!(rejected
        .flow
        .finish_with_targets(&activity_form("light"), &config)
        .is_ok());

    let mut config = GoalCalculatorConfig::default();
    config.goal_adjustment.deficit_kcal = 5000.0;
    let rejected = OnboardingFlow::new()
        .submit(&biometrics_form("28", "165", "60"))
        .unwrap()
        .submit(&goal_form("lose", Some("55")))
        .unwrap()
        .finish_with_targets(&activity_form("sedentary"), &config)
        .unwrap_err();
    assert!(matches!(
        rejected.error,
        CompletionError::Calculation(InvalidInputError::NonPositiveTarget(_))
    ));
    assert_eq!(rejected.flow.goal().goal_type, GoalType::Lose);
}

#[test]
fn test_back_navigation_preserves_values() {
    let activity_step = OnboardingFlow::new()
        .submit(&biometrics_form("28", "165.5", "60"))
        .unwrap()
        .submit(&goal_form("lose", Some("55")))
        .unwrap();

    let goal_step = activity_step.back();
    assert_eq!(goal_step.prefill(), &goal_form("lose", Some("55")));

    let biometrics_step = goal_step.back();
    let prefill = biometrics_step.prefill();
    assert_eq!(prefill.age_years.as_deref(), Some("28"));
    assert_eq!(prefill.height_cm.as_deref(), Some("165.5"));
    assert_eq!(prefill.sex.as_deref(), Some("female"));

    // Resubmitting the prefill walks forward again
    let resubmitted = biometrics_step.clone().submit(prefill).unwrap();
    assert_eq!(resubmitted.biometrics().current_weight_kg, 60.0_f64);
}

// ============================================================================
// Runtime state
// ============================================================================

#[test]
fn test_state_walks_to_complete() {
    let config = GoalCalculatorConfig::default();
    let mut state = OnboardingState::default();
    assert_eq!(state.step(), OnboardingStep::Biometrics);

    state
        .submit_biometrics(&BiometricsForm {
            sex: Some("male".to_owned()),
            ..biometrics_form("30", "175", "80")
        })
        .unwrap();
    assert_eq!(state.step(), OnboardingStep::Goal);

    state.submit_goal(&goal_form("lose", Some("75"))).unwrap();
    assert_eq!(state.step(), OnboardingStep::Activity);

    let summary = state
        .submit_activity(&activity_form("moderate"), &config)
        .unwrap();
    assert_eq!(state.step(), OnboardingStep::Complete);
    assert_eq!(summary.targets.calorie_goal, 2211);
    assert_eq!(summary.estimated_weeks_to_goal, Some(11.0));
    assert_eq!(state.summary(), Some(&summary));
    assert_eq!(state.prefill(), None);
}

#[test]
fn test_state_rejects_out_of_order_submission() {
    let config = GoalCalculatorConfig::default();
    let mut state = OnboardingState::default();

    let error = state.submit_goal(&goal_form("maintain", None)).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidStateTransition);
    assert_eq!(error.http_status(), 409);

    let error = state
        .submit_activity(&activity_form("light"), &config)
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidStateTransition);
    assert_eq!(state.step(), OnboardingStep::Biometrics);

    assert!(state.back().is_err());
    assert_eq!(state.step(), OnboardingStep::Biometrics);
}

#[test]
fn test_state_validation_error_keeps_step() {
    let mut state = OnboardingState::default();
    state
        .submit_biometrics(&biometrics_form("28", "165", "60"))
        .unwrap();

    let error = state.submit_goal(&goal_form("gain", Some("heavy"))).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert_eq!(error.field.as_deref(), Some("goalWeightKg"));
    assert_eq!(state.step(), OnboardingStep::Goal);
}

#[test]
fn test_state_back_exposes_prefill() {
    let mut state = OnboardingState::default();
    state
        .submit_biometrics(&biometrics_form("28", "165", "60"))
        .unwrap();
    state.submit_goal(&goal_form("maintain", None)).unwrap();

    state.back().unwrap();
    assert_eq!(
        state.prefill(),
        Some(StepPrefill::Goal(goal_form("maintain", None)))
    );

    state.back().unwrap();
    match state.prefill() {
        Some(StepPrefill::Biometrics(form)) => assert_eq!(form.age_years.as_deref(), Some("28")),
        other => panic!("expected biometrics prefill, got {other:?}"),
    }
}

#[test]
fn test_completed_state_is_final() {
    let config = GoalCalculatorConfig::default();
    let mut state = OnboardingState::default();
    state
        .submit_biometrics(&biometrics_form("28", "165", "60"))
        .unwrap();
    state.submit_goal(&goal_form("maintain", None)).unwrap();
    let summary = state
        .submit_activity(&activity_form("sedentary"), &config)
        .unwrap();
    assert_eq!(summary.estimated_weeks_to_goal, None);

    assert!(state.back().is_err());
    assert!(state
        .submit_biometrics(&biometrics_form("28", "165", "60"))
        .is_err());
    assert_eq!(state.step(), OnboardingStep::Complete);
}
