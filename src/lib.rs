// ABOUTME: Main library entry point for the fitplan metabolic planning engine
// ABOUTME: Exposes the PlanEngine facade, logging setup, and output formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan
//!
//! Computes metabolic and fitness metrics from onboarding data, validates the
//! resulting plan against safety and feasibility rules, and proposes
//! re-validated alternatives when a plan is blocked.
//!
//! ## Architecture
//!
//! - **`fitplan-core`**: error type, physiological constants, `Profile` model
//! - **`fitplan-intelligence`**: configuration, calculator, modifiers, validation, alternatives
//! - **this crate**: the [`engine::PlanEngine`] facade, logging, formatters and the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan::engine::PlanEngine;
//! use fitplan::models::Profile;
//!
//! fn run(profile: &Profile) -> fitplan::errors::AppResult<()> {
//!     let engine = PlanEngine::from_global();
//!     let result = engine.evaluate(profile)?;
//!     if !result.may_proceed {
//!         for plan in &result.alternatives {
//!             println!("{}", plan.summary);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

/// Plan engine facade
pub mod engine;

/// JSON and text rendering of engine results
pub mod formatters;

/// Structured logging configuration
pub mod logging;

pub use fitplan_core::{constants, errors, models};
pub use fitplan_intelligence::{
    alternatives, calculator, config, metrics, modifiers, pipeline, validation,
};
pub use fitplan_intelligence::{
    AlternativePlan, AlternativeStrategy, CalculatedMetrics, EngineConfig, Finding, FindingCode,
    GoalDirection, ValidationResult,
};
