// ABOUTME: Bounded in-memory store of server-side onboarding sessions
// ABOUTME: DashMap keyed by session id with idle expiry and lazy purging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

use super::state::{OnboardingState, OnboardingStep, StepPrefill};
use super::OnboardingSummary;
use crate::config::environment::OnboardingSessionConfig;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use lookmaxxer_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// A single user's onboarding progress
#[derive(Debug, Clone)]
pub struct OnboardingSession {
    state: OnboardingState,
    last_active: DateTime<Utc>,
}

impl OnboardingSession {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            state: OnboardingState::default(),
            last_active: now,
        }
    }

    /// Idle longer than `ttl` at `now`
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        (now - self.last_active)
            .to_std()
            .is_ok_and(|idle| idle > ttl)
    }
}

/// Client-facing snapshot of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingView {
    /// Session identifier
    pub session_id: Uuid,
    /// Current step
    pub step: OnboardingStep,
    /// Values to pre-populate the current step with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefill: Option<StepPrefill>,
    /// Result once complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<OnboardingSummary>,
}

impl OnboardingView {
    /// Snapshot a state under its session id
    #[must_use]
    pub fn from_state(session_id: Uuid, state: &OnboardingState) -> Self {
        Self {
            session_id,
            step: state.step(),
            prefill: state.prefill(),
            summary: state.summary().copied(),
        }
    }
}

/// Concurrent, bounded session store
///
/// Each request only touches its own entry, so sessions never contend with
/// each other beyond the map's shard locks.
pub struct OnboardingSessionStore {
    sessions: DashMap<Uuid, OnboardingSession>,
    max_sessions: usize,
    ttl: Duration,
}

impl OnboardingSessionStore {
    /// Create a store with explicit limits
    #[must_use]
    pub fn new(max_sessions: usize, ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            max_sessions,
            ttl,
        }
    }

    /// Create a store from server configuration
    #[must_use]
    pub fn from_config(config: &OnboardingSessionConfig) -> Self {
        Self::new(
            config.max_sessions,
            Duration::from_secs(config.session_ttl_secs),
        )
    }

    /// Number of stored sessions, expired ones included until purged
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop every session idle longer than the TTL, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| !session.is_expired(now, self.ttl));
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            debug!(removed, "Purged expired onboarding sessions");
        }
        removed
    }

    /// Start a new session at step 1
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_UNAVAILABLE` if the store is full after purging
    pub fn create(&self) -> AppResult<OnboardingView> {
        self.purge_expired();
        if self.sessions.len() >= self.max_sessions {
            warn!(
                max_sessions = self.max_sessions,
                "Onboarding session store is full"
            );
            return Err(AppError::unavailable(
                "Too many onboarding sessions in progress, try again later",
            ));
        }

        let session_id = Uuid::new_v4();
        let session = OnboardingSession::new(Utc::now());
        let view = OnboardingView::from_state(session_id, &session.state);
        self.sessions.insert(session_id, session);
        debug!(%session_id, "Onboarding session created");
        Ok(view)
    }

    /// Run `action` against a live session, refreshing its idle timer
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for unknown or expired ids, otherwise
    /// whatever `action` returns
    pub fn with_session<T, F>(&self, session_id: Uuid, action: F) -> AppResult<T>
    where
        F: FnOnce(&mut OnboardingState) -> AppResult<T>,
    {
        let now = Utc::now();
        if let Some(mut entry) = self.sessions.get_mut(&session_id) {
            if !entry.is_expired(now, self.ttl) {
                entry.last_active = now;
                return action(&mut entry.state);
            }
        }

        self.sessions
            .remove_if(&session_id, |_, session| session.is_expired(now, self.ttl));
        Err(Self::not_found(session_id))
    }

    /// Snapshot of a live session
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for unknown or expired ids
    pub fn view(&self, session_id: Uuid) -> AppResult<OnboardingView> {
        self.with_session(session_id, |state| {
            Ok(OnboardingView::from_state(session_id, state))
        })
    }

    /// Delete a session
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if the id is unknown
    pub fn remove(&self, session_id: Uuid) -> AppResult<()> {
        if self.sessions.remove(&session_id).is_none() {
            return Err(Self::not_found(session_id));
        }
        debug!(%session_id, "Onboarding session removed");
        Ok(())
    }

    fn not_found(session_id: Uuid) -> AppError {
        AppError::not_found(format!("Onboarding session {session_id}"))
    }
}
