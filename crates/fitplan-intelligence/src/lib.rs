// ABOUTME: Metabolic metrics, plan validation, and alternative plan generation engine
// ABOUTME: Pure and synchronous; performs no I/O and holds no mutable state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Intelligence
//!
//! The analytical core of fitplan:
//!
//! `Profile -> calculator -> modifiers -> validation -> { result | result + alternatives }`
//!
//! Every function is a pure computation over a [`fitplan_core::models::Profile`]
//! and a read-only [`config::EngineConfig`]. Identical inputs always produce
//! identical outputs, so calls may run concurrently without coordination.
//!
//! ## Modules
//!
//! - **config**: Constant tables with environment overrides and validation
//! - **calculator**: BMR, TDEE, exercise burn, rate, macros, body fat, readiness, heart rate
//! - **modifiers**: Capped, non-stacking medical, age, lifestyle, and pregnancy adjustments
//! - **validation**: Ordered blocking and advisory rule batteries
//! - **alternatives**: Re-validated single-axis alternatives for blocked plans
//! - **pipeline**: Depth-bounded composition of the above

/// Re-validated alternatives for blocked plans
pub mod alternatives;
/// Metric calculator
pub mod calculator;
/// Engine constant tables
pub mod config;
/// Derived metric types
pub mod metrics;
/// Modifier pipeline
pub mod modifiers;
/// Depth-bounded evaluation pipeline
pub mod pipeline;
/// Validation engine
pub mod validation;

pub use alternatives::{AlternativePlan, AlternativeStrategy, FieldChange, ProfileField};
pub use config::{ConfigError, EngineConfig};
pub use metrics::{CalculatedMetrics, GoalDirection};
pub use pipeline::{compute_adjusted_metrics, evaluate, evaluate_at_depth, PipelineDepth};
pub use validation::{Finding, FindingCode, Remediation, Severity, ValidationResult};
