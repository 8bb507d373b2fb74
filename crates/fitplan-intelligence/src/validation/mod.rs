// ABOUTME: Validation engine running ordered blocking and advisory rule batteries
// ABOUTME: Collects every applicable finding; advisory rules are skipped once a plan is blocked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Validation Engine
//!
//! Each rule is an object implementing [`ValidationRule`] and is registered in
//! one of two static, ordered batteries ([`blocking::BLOCKING_RULES`] and
//! [`advisory::ADVISORY_RULES`]). Rules are independent: within a battery every
//! rule runs and every finding is collected, in declaration order, so the most
//! safety-critical problem always comes first.

/// Advisory battery: surfaced to the user, never blocks
pub mod advisory;
/// Blocking battery: any finding prevents the plan from proceeding
pub mod blocking;
/// Finding codes, severities and remediations
pub mod findings;

pub use findings::{Finding, FindingCode, Remediation, Severity};

use fitplan_core::models::Profile;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alternatives::AlternativePlan;
use crate::config::{EngineConfig, RateBand};
use crate::metrics::{CalculatedMetrics, GoalDirection};

/// A single validation predicate
pub trait ValidationRule: Sync {
    /// Code of the finding this rule produces
    fn code(&self) -> FindingCode;

    /// Evaluate the rule, returning a finding when it applies
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding>;
}

/// Everything a rule may inspect
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Raw profile
    pub profile: &'a Profile,
    /// Adjusted metrics
    pub metrics: &'a CalculatedMetrics,
    /// Constant tables
    pub config: &'a EngineConfig,
}

impl RuleContext<'_> {
    /// Rate band for the goal direction, if the direction changes weight
    #[must_use]
    pub const fn rate_band(&self) -> Option<&RateBand> {
        match self.metrics.goal_direction {
            GoalDirection::Loss => Some(&self.config.rates.loss),
            GoalDirection::Gain => Some(&self.config.rates.gain),
            GoalDirection::Maintain | GoalDirection::Indeterminate => None,
        }
    }

    /// Whether the weekly rate exceeds the aggressive threshold
    #[must_use]
    pub fn is_aggressive_rate(&self) -> bool {
        self.rate_band()
            .is_some_and(|band| self.metrics.weekly_rate_percent > band.aggressive_percent)
    }

    /// Whether the weekly rate exceeds the extreme threshold
    #[must_use]
    pub fn is_extreme_rate(&self) -> bool {
        self.rate_band()
            .is_some_and(|band| self.metrics.weekly_rate_percent > band.extreme_percent)
    }

    /// Whether the direction is weight loss
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.metrics.goal_direction == GoalDirection::Loss
    }

    /// Sex-specific absolute calorie floor
    #[must_use]
    pub fn calorie_floor(&self) -> f64 {
        self.config.safety.calorie_floor_kcal.get(self.profile.sex)
    }

    /// Weeks needed to reach the target at `rate_percent` of body weight per week
    #[must_use]
    pub fn weeks_at_rate_percent(&self, rate_percent: f64) -> u32 {
        let kg_per_week = rate_percent / 100.0 * self.profile.current_weight_kg;
        ceil_weeks(self.profile.weight_delta_kg().abs() / kg_per_week)
    }

    /// Weeks needed so the daily deficit stays within `max_daily_deficit`
    #[must_use]
    pub fn weeks_for_max_deficit(&self, max_daily_deficit: f64) -> Option<u32> {
        if max_daily_deficit <= 0.0 {
            return None;
        }
        let total_kcal =
            self.profile.weight_delta_kg().abs() * self.config.energy.kcal_per_kg_tissue;
        Some(ceil_weeks(total_kcal / 7.0 / max_daily_deficit))
    }

    /// Remediation for a target that falls below `floor`
    #[must_use]
    pub fn remediation_for_floor(&self, floor: f64) -> Remediation {
        let headroom = self.metrics.headroom_above(floor);
        self.weeks_for_max_deficit(headroom)
            .filter(|_| self.is_loss())
            .map_or(Remediation::MinimumDailyCalories { kcal: floor.round() }, |weeks| {
                Remediation::MinimumTimelineWeeks { weeks }
            })
    }
}

/// Round a fractional week count up, tolerating floating-point noise
pub(crate) fn ceil_weeks(weeks: f64) -> u32 {
    if !weeks.is_finite() || weeks <= 0.0 {
        return 0;
    }
    (weeks - 1e-9).ceil().max(0.0) as u32
}

/// Outcome of validating one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    /// Blocking findings in declaration order
    pub blocking: Vec<Finding>,
    /// Advisory findings in declaration order (empty when blocked)
    pub advisory: Vec<Finding>,
    /// True iff there are no blocking findings
    pub may_proceed: bool,
    /// Re-validated alternatives (only when blocked by a rate-related cause)
    pub alternatives: Vec<AlternativePlan>,
    /// The adjusted metrics that were validated
    pub metrics: CalculatedMetrics,
}

impl ValidationResult {
    /// Whether any finding carries `code`
    #[must_use]
    pub fn has_code(&self, code: FindingCode) -> bool {
        self.blocking
            .iter()
            .chain(&self.advisory)
            .any(|finding| finding.code == code)
    }

    /// Codes of all blocking findings
    #[must_use]
    pub fn blocking_codes(&self) -> Vec<FindingCode> {
        self.blocking.iter().map(|finding| finding.code).collect()
    }

    /// Codes of all advisory findings
    #[must_use]
    pub fn advisory_codes(&self) -> Vec<FindingCode> {
        self.advisory.iter().map(|finding| finding.code).collect()
    }
}

/// Run one battery, collecting every finding in declaration order
#[must_use]
pub fn run_battery(rules: &[&dyn ValidationRule], ctx: &RuleContext<'_>) -> Vec<Finding> {
    rules.iter().filter_map(|rule| rule.evaluate(ctx)).collect()
}

/// Validate adjusted metrics against both batteries
///
/// Alternatives are not generated here; see [`crate::pipeline`].
#[must_use]
pub fn validate(
    profile: &Profile,
    metrics: &CalculatedMetrics,
    config: &EngineConfig,
) -> ValidationResult {
    let ctx = RuleContext {
        profile,
        metrics,
        config,
    };

    let blocking = run_battery(blocking::BLOCKING_RULES, &ctx);
    let advisory = if blocking.is_empty() {
        run_battery(advisory::ADVISORY_RULES, &ctx)
    } else {
        Vec::new()
    };

    debug!(
        blocking = blocking.len(),
        advisory = advisory.len(),
        "validation complete"
    );

    ValidationResult {
        may_proceed: blocking.is_empty(),
        blocking,
        advisory,
        alternatives: Vec::new(),
        metrics: metrics.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil_weeks_tolerates_noise() {
        assert_eq!(ceil_weeks(50.000_000_000_01), 50);
        assert_eq!(ceil_weeks(50.1), 51);
        assert_eq!(ceil_weeks(f64::INFINITY), 0);
    }

    #[test]
    fn test_battery_codes_are_unique_and_correctly_tiered() {
        for rule in blocking::BLOCKING_RULES {
            assert_eq!(rule.code().severity(), Severity::Blocking);
        }
        for rule in advisory::ADVISORY_RULES {
            assert_eq!(rule.code().severity(), Severity::Advisory);
        }
        let mut codes: Vec<&str> = blocking::BLOCKING_RULES
            .iter()
            .chain(advisory::ADVISORY_RULES)
            .map(|rule| rule.code().as_str())
            .collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
        assert_eq!(blocking::BLOCKING_RULES.len(), 11);
        assert_eq!(advisory::ADVISORY_RULES.len(), 23);
    }
}
