// ABOUTME: Core types and constants for the LookMaxxer fitness API
// ABOUTME: Foundation crate with error handling, profile/target models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

#![deny(unsafe_code)]

//! # LookMaxxer Core
//!
//! Foundation crate providing shared types and constants for the LookMaxxer
//! API. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the
//!   onboarding/calculator domain errors
//! - **constants**: Domain ranges, energy conversion factors, service names
//! - **models**: `UserProfile`, `DailyTargets` and their enumerations

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile inputs and derived daily targets)
pub mod models;
