// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

//! Environment-based configuration management for production deployment

use super::goal_calculator::GoalCalculatorConfig;
use anyhow::{Context, Result};
use lookmaxxer_core::constants::defaults;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin settings for the web client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

/// HTTP transport limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Server-side onboarding session limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingSessionConfig {
    /// Maximum number of live sessions
    pub max_sessions: usize,
    /// Idle lifetime of a session in seconds
    pub session_ttl_secs: u64,
}

impl Default for OnboardingSessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: defaults::DEFAULT_MAX_ONBOARDING_SESSIONS,
            session_ttl_secs: defaults::DEFAULT_ONBOARDING_SESSION_TTL_SECS,
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// HTTP limits
    pub http: HttpConfig,
    /// Onboarding session store limits
    pub onboarding: OnboardingSessionConfig,
    /// Daily target computation constants
    pub goal_calculator: GoalCalculatorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_owned(),
            http_port: defaults::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            cors: CorsConfig {
                allowed_origins: defaults::DEFAULT_CORS_ORIGIN.to_owned(),
            },
            http: HttpConfig {
                max_body_bytes: defaults::DEFAULT_MAX_BODY_BYTES,
                request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
            },
            onboarding: OnboardingSessionConfig::default(),
            goal_calculator: GoalCalculatorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// `PORT` takes precedence over `HTTP_PORT` so the server runs unchanged on
    /// platforms that inject `PORT`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value or the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let port_raw = env::var("PORT")
            .or_else(|_| env::var("HTTP_PORT"))
            .unwrap_or_else(|_| defaults::DEFAULT_HTTP_PORT.to_string());

        let config = Self {
            host: env_var_or("HOST", defaults::DEFAULT_HOST),
            http_port: port_raw
                .parse()
                .with_context(|| format!("Invalid PORT value '{port_raw}'"))?,
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT")
                    .or_else(|_| env::var("NODE_ENV"))
                    .unwrap_or_else(|_| "development".to_owned()),
            ),
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ORIGIN", defaults::DEFAULT_CORS_ORIGIN),
            },
            http: HttpConfig {
                max_body_bytes: env_var_or(
                    "MAX_BODY_BYTES",
                    &defaults::DEFAULT_MAX_BODY_BYTES.to_string(),
                )
                .parse()
                .context("Invalid MAX_BODY_BYTES value")?,
                request_timeout_secs: env_var_or(
                    "REQUEST_TIMEOUT_SECS",
                    &defaults::DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid REQUEST_TIMEOUT_SECS value")?,
            },
            onboarding: OnboardingSessionConfig {
                max_sessions: env_var_or(
                    "ONBOARDING_MAX_SESSIONS",
                    &defaults::DEFAULT_MAX_ONBOARDING_SESSIONS.to_string(),
                )
                .parse()
                .context("Invalid ONBOARDING_MAX_SESSIONS value")?,
                session_ttl_secs: env_var_or(
                    "ONBOARDING_SESSION_TTL_SECS",
                    &defaults::DEFAULT_ONBOARDING_SESSION_TTL_SECS.to_string(),
                )
                .parse()
                .context("Invalid ONBOARDING_SESSION_TTL_SECS value")?,
            },
            goal_calculator: GoalCalculatorConfig::from_env()
                .context("Invalid goal calculator configuration")?,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is zero or the calculator configuration is invalid
    pub fn validate(&self) -> Result<()> {
        if self.http.max_body_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_BODY_BYTES must be greater than zero"));
        }
        if self.http.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!(
                "REQUEST_TIMEOUT_SECS must be greater than zero"
            ));
        }
        if self.onboarding.max_sessions == 0 {
            return Err(anyhow::anyhow!(
                "ONBOARDING_MAX_SESSIONS must be greater than zero"
            ));
        }
        if self.onboarding.session_ttl_secs == 0 {
            return Err(anyhow::anyhow!(
                "ONBOARDING_SESSION_TTL_SECS must be greater than zero"
            ));
        }
        if self.environment.is_production() && self.cors.allowed_origins.trim() == "*" {
            warn!("CORS allows any origin in production");
        }

        self.goal_calculator.validate()?;
        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "LookMaxxer API Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Max Body: {} bytes\n\
             - Request Timeout: {}s\n\
             - Onboarding Sessions: max {}, ttl {}s\n\
             - Calorie Deficit/Surplus: {}/{} kcal",
            self.host,
            self.http_port,
            self.environment,
            self.cors.allowed_origins,
            self.http.max_body_bytes,
            self.http.request_timeout_secs,
            self.onboarding.max_sessions,
            self.onboarding.session_ttl_secs,
            self.goal_calculator.goal_adjustment.deficit_kcal,
            self.goal_calculator.goal_adjustment.surplus_kcal,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
