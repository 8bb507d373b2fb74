// ABOUTME: PlanEngine facade binding an engine configuration to the evaluation pipeline
// ABOUTME: Rejects out-of-domain profiles before any metric is computed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan engine facade
//!
//! [`PlanEngine`] is the single entry point most callers need. It owns a
//! read-only [`EngineConfig`] and exposes two operations:
//!
//! - [`PlanEngine::compute`]: calculator followed by the modifier pipeline
//! - [`PlanEngine::evaluate`]: the full pipeline including validation and alternatives
//!
//! Both first run [`Profile::check_domain`]. A profile that fails it is a fault
//! and comes back as `Err(AppError)` with `ErrorCode::ValueOutOfRange`; an
//! unsafe plan is a domain outcome and comes back as `Ok(ValidationResult)`
//! with `may_proceed == false`.

use std::time::Instant;

use fitplan_core::errors::AppResult;
use fitplan_core::models::Profile;
use fitplan_intelligence::{pipeline, CalculatedMetrics, EngineConfig, ValidationResult};
use tracing::instrument;

use crate::logging::PlanLogger;

/// Metabolic planning engine bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct PlanEngine {
    config: EngineConfig,
}

impl PlanEngine {
    /// Create an engine with an explicit configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an engine from the process-wide configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(EngineConfig::global().clone())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Derive adjusted metrics without validating the plan
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if any profile field is outside its domain
    #[instrument(skip_all, fields(age = profile.age, timeline_weeks = profile.timeline_weeks))]
    pub fn compute(&self, profile: &Profile) -> AppResult<CalculatedMetrics> {
        Self::check_profile(profile)?;
        Ok(pipeline::compute_adjusted_metrics(profile, &self.config))
    }

    /// Validate the plan and, when blocked, propose alternatives
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if any profile field is outside its domain
    #[instrument(skip_all, fields(age = profile.age, timeline_weeks = profile.timeline_weeks))]
    pub fn evaluate(&self, profile: &Profile) -> AppResult<ValidationResult> {
        Self::check_profile(profile)?;

        let start = Instant::now();
        let result = pipeline::evaluate(profile, &self.config);
        PlanLogger::log_evaluation(
            result.may_proceed,
            result.blocking.len(),
            result.advisory.len(),
            result.alternatives.len(),
            start.elapsed().as_micros(),
        );
        Ok(result)
    }

    fn check_profile(profile: &Profile) -> AppResult<()> {
        profile.check_domain().inspect_err(|error| {
            PlanLogger::log_rejection(error.field(), &error.message);
        })
    }
}
