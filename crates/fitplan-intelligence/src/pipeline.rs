// ABOUTME: Depth-bounded pipeline tying calculator, modifiers, validation, and alternatives together
// ABOUTME: Alternatives are generated only at the root depth so re-entry terminates after one level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::models::Profile;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::alternatives;
use crate::calculator;
use crate::config::EngineConfig;
use crate::metrics::CalculatedMetrics;
use crate::modifiers;
use crate::validation::{self, ValidationResult};

/// Recursion depth of a pipeline run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PipelineDepth {
    /// Caller-initiated evaluation; may generate alternatives
    Root,
    /// Re-evaluation of an alternative; never generates further alternatives
    Alternative,
}

impl PipelineDepth {
    /// Whether alternatives may be generated at this depth
    #[must_use]
    pub const fn allows_alternatives(self) -> bool {
        matches!(self, Self::Root)
    }
}

/// Calculator followed by the modifier pipeline
#[must_use]
pub fn compute_adjusted_metrics(profile: &Profile, config: &EngineConfig) -> CalculatedMetrics {
    let base = calculator::compute(profile, config);
    modifiers::adjust(&base, profile, config)
}

/// Full pipeline at an explicit depth
#[must_use]
#[instrument(skip_all, fields(depth = ?depth))]
pub fn evaluate_at_depth(
    profile: &Profile,
    config: &EngineConfig,
    depth: PipelineDepth,
) -> ValidationResult {
    let metrics = compute_adjusted_metrics(profile, config);
    let mut result = validation::validate(profile, &metrics, config);

    if !result.may_proceed && depth.allows_alternatives() {
        result.alternatives =
            alternatives::generate(profile, &result.metrics, &result.blocking, config);
    }

    debug!(
        may_proceed = result.may_proceed,
        alternatives = result.alternatives.len(),
        "pipeline finished"
    );
    result
}

/// Full pipeline at the root depth
#[must_use]
pub fn evaluate(profile: &Profile, config: &EngineConfig) -> ValidationResult {
    evaluate_at_depth(profile, config, PipelineDepth::Root)
}
