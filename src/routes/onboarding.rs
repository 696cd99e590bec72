// ABOUTME: Onboarding route handlers for daily target computation
// ABOUTME: One-shot profile submission plus step-by-step server-side sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

//! Onboarding routes
//!
//! `POST /api/onboarding` runs a complete profile through the same step guards
//! as the interactive flow and returns the daily targets. The session routes
//! drive that flow one step at a time for clients that keep no local state.

use crate::onboarding::validation::lenient_string;
use crate::onboarding::{
    ActivityForm, BiometricsForm, GoalForm, OnboardingFlow, OnboardingView,
};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use lookmaxxer_core::constants::endpoints;
use lookmaxxer_core::errors::{AppError, AppResult};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Complete profile as submitted in one request
///
/// Numeric fields may be JSON numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    /// Age in years
    #[serde(default, deserialize_with = "lenient_string")]
    pub age_years: Option<String>,
    /// Height in centimeters
    #[serde(default, deserialize_with = "lenient_string")]
    pub height_cm: Option<String>,
    /// Current weight in kilograms
    #[serde(default, deserialize_with = "lenient_string")]
    pub current_weight_kg: Option<String>,
    /// Target weight in kilograms
    #[serde(default, deserialize_with = "lenient_string")]
    pub goal_weight_kg: Option<String>,
    /// `lose`, `gain` or `maintain`
    #[serde(default, deserialize_with = "lenient_string")]
    pub goal_type: Option<String>,
    /// `sedentary`, `light`, `moderate` or `very`
    #[serde(default, deserialize_with = "lenient_string")]
    pub activity_level: Option<String>,
    /// `male` or `female`
    #[serde(default, deserialize_with = "lenient_string")]
    pub sex: Option<String>,
}

impl OnboardingRequest {
    /// Split into the three step forms
    #[must_use]
    pub fn into_forms(self) -> (BiometricsForm, GoalForm, ActivityForm) {
        (
            BiometricsForm {
                age_years: self.age_years,
                height_cm: self.height_cm,
                current_weight_kg: self.current_weight_kg,
                sex: self.sex,
            },
            GoalForm {
                goal_type: self.goal_type,
                goal_weight_kg: self.goal_weight_kg,
            },
            ActivityForm {
                activity_level: self.activity_level,
            },
        )
    }
}

/// Onboarding routes
pub struct OnboardingRoutes;

impl OnboardingRoutes {
    /// Create all onboarding routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let session = format!("{}/:session_id", endpoints::ONBOARDING_SESSIONS);

        Router::new()
            .route(endpoints::ONBOARDING, post(Self::handle_compute_targets))
            .route(
                endpoints::ONBOARDING_SESSIONS,
                post(Self::handle_create_session),
            )
            .route(
                &session,
                get(Self::handle_get_session).delete(Self::handle_delete_session),
            )
            .route(
                &format!("{session}/biometrics"),
                post(Self::handle_submit_biometrics),
            )
            .route(&format!("{session}/goal"), post(Self::handle_submit_goal))
            .route(
                &format!("{session}/activity"),
                post(Self::handle_submit_activity),
            )
            .route(&format!("{session}/back"), post(Self::handle_back))
            .with_state(resources)
    }

    /// Unwrap a JSON body, turning extractor rejections into `INVALID_FORMAT`
    fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
        payload
            .map(|Json(body)| body)
            .map_err(|rejection| AppError::invalid_format(rejection.body_text()))
    }

    /// Unknown and malformed ids are both reported as a missing session
    fn session_id(raw: &str) -> AppResult<Uuid> {
        Uuid::parse_str(raw)
            .map_err(|_| AppError::not_found(format!("Onboarding session {raw}")))
    }

    fn view_response(view: OnboardingView) -> Response {
        (StatusCode::OK, Json(view)).into_response()
    }

    /// Handle one-shot profile submission
    async fn handle_compute_targets(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<OnboardingRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let (biometrics, goal, activity) = Self::json_body(payload)?.into_forms();

        let summary = OnboardingFlow::new()
            .submit(&biometrics)
            .map_err(|rejected| rejected.error)?
            .submit(&goal)
            .map_err(|rejected| rejected.error)?
            .finish_with_targets(&activity, resources.goal_calculator())
            .map_err(|rejected| rejected.error)?;

        info!(
            targets.calorie_goal = summary.targets.calorie_goal,
            goal_type = %summary.profile.goal_type,
            activity_level = summary.profile.activity_level.as_str(),
            "Daily targets computed"
        );

        Ok((StatusCode::OK, Json(summary.targets)).into_response())
    }

    /// Handle session creation
    async fn handle_create_session(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let view = resources.sessions.create()?;
        Ok((StatusCode::CREATED, Json(view)).into_response())
    }

    /// Handle session lookup
    async fn handle_get_session(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<String>,
    ) -> Result<Response, AppError> {
        let session_id = Self::session_id(&session_id)?;
        Ok(Self::view_response(resources.sessions.view(session_id)?))
    }

    /// Handle step 1 submission
    async fn handle_submit_biometrics(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<String>,
        payload: Result<Json<BiometricsForm>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let session_id = Self::session_id(&session_id)?;
        let form = Self::json_body(payload)?;

        let view = resources.sessions.with_session(session_id, |state| {
            state.submit_biometrics(&form)?;
            Ok(OnboardingView::from_state(session_id, state))
        })?;
        Ok(Self::view_response(view))
    }

    /// Handle step 2 submission
    async fn handle_submit_goal(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<String>,
        payload: Result<Json<GoalForm>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let session_id = Self::session_id(&session_id)?;
        let form = Self::json_body(payload)?;

        let view = resources.sessions.with_session(session_id, |state| {
            state.submit_goal(&form)?;
            Ok(OnboardingView::from_state(session_id, state))
        })?;
        Ok(Self::view_response(view))
    }

    /// Handle step 3 submission, completing the session
    async fn handle_submit_activity(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<String>,
        payload: Result<Json<ActivityForm>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let session_id = Self::session_id(&session_id)?;
        let form = Self::json_body(payload)?;

        let view = resources.sessions.with_session(session_id, |state| {
            state.submit_activity(&form, resources.goal_calculator())?;
            Ok(OnboardingView::from_state(session_id, state))
        })?;
        Ok(Self::view_response(view))
    }

    /// Handle back navigation
    async fn handle_back(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<String>,
    ) -> Result<Response, AppError> {
        let session_id = Self::session_id(&session_id)?;

        let view = resources.sessions.with_session(session_id, |state| {
            state.back()?;
            Ok(OnboardingView::from_state(session_id, state))
        })?;
        Ok(Self::view_response(view))
    }

    /// Handle session deletion
    async fn handle_delete_session(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<String>,
    ) -> Result<Response, AppError> {
        let session_id = Self::session_id(&session_id)?;
        resources.sessions.remove(session_id)?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
