// ABOUTME: Core types and constants for the fitplan metabolic planning engine
// ABOUTME: Foundation crate with error handling, physiological constants, and profile models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing shared types and constants for the fitplan
//! engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Physiological constants and profile domain limits
//! - **models**: The onboarding `Profile` and its categorical fields

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological constants and input domain limits organized by domain
pub mod constants;

/// Onboarding profile model (biometrics, lifestyle, goals, medical, workout, meals)
pub mod models;
