// ABOUTME: Alternative plan generator for plans blocked by a rate or timeline cause
// ABOUTME: Builds single-axis variants and re-runs the full pipeline on each before returning it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Alternative Generator
//!
//! Invoked only when every blocking finding is rate or timeline related;
//! categorical blocks (pregnancy deficit, goal conflict, no meals) have no
//! numeric fix and yield an empty list.
//!
//! Candidates are derived from a *safe rate*: the optimal rate for the goal
//! direction, lowered further for loss when the energy headroom above
//! `max(BMR, calorie floor)` cannot carry it. Each candidate profile is
//! re-evaluated at [`PipelineDepth::Alternative`], which never generates
//! alternatives of its own, and is discarded unless it passes blocking
//! validation.

use fitplan_core::models::Profile;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::session_kcal;
use crate::config::EngineConfig;
use crate::metrics::{CalculatedMetrics, GoalDirection};
use crate::pipeline::{evaluate_at_depth, PipelineDepth};
use crate::validation::{ceil_weeks, Finding};

/// Trade-off axis an alternative explores
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlternativeStrategy {
    /// Hold the optimal safe rate and extend the timeline
    ExtendTimeline,
    /// Hold an aggressive-but-safe rate and cover the deficit with more sessions
    IncreaseExercise,
    /// Split the deficit between diet and exercise at an intermediate rate
    Balanced,
    /// Keep the timeline and move the target weight to what is reachable
    AdjustTargetWeight,
}

/// Profile field an alternative changes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// `timeline_weeks`
    TimelineWeeks,
    /// `workout_frequency_per_week`
    WorkoutFrequencyPerWeek,
    /// `target_weight_kg`
    TargetWeightKg,
}

/// One field change relative to the original profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FieldChange {
    /// Field changed
    pub field: ProfileField,
    /// Original value
    pub from: f64,
    /// Proposed value
    pub to: f64,
}

/// Guarantee attached to every returned alternative
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ValidationGuarantee {
    /// The embedded profile independently passed blocking validation
    PassedBlocking,
}

/// A re-validated, single-axis variant of a blocked plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlternativePlan {
    /// Trade-off axis
    pub strategy: AlternativeStrategy,
    /// Fields changed relative to the original profile
    pub changes: Vec<FieldChange>,
    /// Human-readable summary
    pub summary: String,
    /// Profile with the changes applied
    pub profile: Profile,
    /// Recomputed metrics for the changed profile
    pub metrics: CalculatedMetrics,
    /// Advisory findings for the changed profile
    pub advisory: Vec<Finding>,
    /// Validation guarantee
    pub guarantee: ValidationGuarantee,
}

struct Candidate {
    strategy: AlternativeStrategy,
    profile: Profile,
    changes: Vec<FieldChange>,
    summary: String,
}

/// Whether a set of blocking findings admits a numeric alternative
#[must_use]
pub fn admits_alternatives(blocking: &[Finding]) -> bool {
    !blocking.is_empty() && blocking.iter().all(|finding| finding.code.is_rate_related())
}

/// Diet-side deficit permitted above `max(BMR, calorie floor)` (kcal/day)
fn diet_allowance(profile: &Profile, metrics: &CalculatedMetrics, config: &EngineConfig) -> f64 {
    let floor = metrics
        .bmr
        .max(config.safety.calorie_floor_kcal.get(profile.sex));
    (metrics.headroom_above(floor) * config.alternatives.headroom_fraction).max(0.0)
}

/// Safe weekly rate as a percentage of body weight, if any change is feasible
#[must_use]
pub fn safe_rate_percent(
    profile: &Profile,
    metrics: &CalculatedMetrics,
    config: &EngineConfig,
) -> Option<f64> {
    match metrics.goal_direction {
        GoalDirection::Loss => {
            let allowance = diet_allowance(profile, metrics, config);
            let headroom_rate_kg = allowance * 7.0 / config.energy.kcal_per_kg_tissue;
            let headroom_percent = headroom_rate_kg / profile.current_weight_kg * 100.0;
            let safe = config.rates.loss.optimal_percent.min(headroom_percent);
            (safe > 0.0).then_some(safe)
        }
        GoalDirection::Gain => Some(config.rates.gain.optimal_percent),
        GoalDirection::Maintain | GoalDirection::Indeterminate => None,
    }
}

fn weeks_at(profile: &Profile, rate_percent: f64) -> u32 {
    let kg_per_week = rate_percent / 100.0 * profile.current_weight_kg;
    ceil_weeks(profile.weight_delta_kg().abs() / kg_per_week)
}

fn extend_timeline(profile: &Profile, safe_percent: f64) -> Option<Candidate> {
    let weeks = weeks_at(profile, safe_percent);
    if weeks <= profile.timeline_weeks {
        return None;
    }
    let mut candidate = profile.clone();
    candidate.timeline_weeks = weeks;
    Some(Candidate {
        strategy: AlternativeStrategy::ExtendTimeline,
        changes: vec![FieldChange {
            field: ProfileField::TimelineWeeks,
            from: f64::from(profile.timeline_weeks),
            to: f64::from(weeks),
        }],
        summary: format!(
            "Reach {:.1} kg in {weeks} weeks instead of {} at a sustainable pace",
            profile.target_weight_kg, profile.timeline_weeks
        ),
        profile: candidate,
    })
}

fn shift_to_exercise(
    strategy: AlternativeStrategy,
    rate_percent: f64,
    exercise_share: f64,
    profile: &Profile,
    metrics: &CalculatedMetrics,
    config: &EngineConfig,
) -> Option<Candidate> {
    if metrics.goal_direction != GoalDirection::Loss {
        return None;
    }
    let weeks = weeks_at(profile, rate_percent).max(profile.timeline_weeks);
    let weekly_kg = profile.weight_delta_kg().abs() / f64::from(weeks);
    let deficit = weekly_kg * config.energy.kcal_per_kg_tissue / 7.0;

    let shortfall = (deficit - diet_allowance(profile, metrics, config)).max(0.0);
    let exercise_kcal = shortfall.max(deficit * exercise_share);
    // Exercise burn is scaled by the metabolic modifier once re-computed
    let raw_exercise_kcal = exercise_kcal / (1.0 + metrics.modifiers.total_tdee_percent / 100.0);

    let per_session = session_kcal(profile, config);
    if per_session <= 0.0 {
        return None;
    }
    let extra_sessions = ceil_weeks(raw_exercise_kcal * 7.0 / per_session);
    let frequency = (profile.workout_frequency_per_week + extra_sessions)
        .min(config.alternatives.max_sessions_per_week);
    if frequency <= profile.workout_frequency_per_week {
        return None;
    }

    let mut candidate = profile.clone();
    candidate.timeline_weeks = weeks;
    candidate.workout_frequency_per_week = frequency;

    let mut changes = Vec::with_capacity(2);
    if weeks != profile.timeline_weeks {
        changes.push(FieldChange {
            field: ProfileField::TimelineWeeks,
            from: f64::from(profile.timeline_weeks),
            to: f64::from(weeks),
        });
    }
    changes.push(FieldChange {
        field: ProfileField::WorkoutFrequencyPerWeek,
        from: f64::from(profile.workout_frequency_per_week),
        to: f64::from(frequency),
    });

    Some(Candidate {
        strategy,
        changes,
        summary: format!(
            "Train {frequency} times per week instead of {} and reach {:.1} kg in {weeks} weeks",
            profile.workout_frequency_per_week, profile.target_weight_kg
        ),
        profile: candidate,
    })
}

fn adjust_target_weight(
    profile: &Profile,
    safe_percent: f64,
    config: &EngineConfig,
) -> Option<Candidate> {
    let step = config.alternatives.target_rounding_kg;
    let reachable =
        safe_percent / 100.0 * profile.current_weight_kg * f64::from(profile.timeline_weeks);
    let rounded = ((reachable / step) + 1e-9).floor() * step;
    // A change inside the maintain band would re-run as a maintenance plan
    if rounded < step || rounded <= config.energy.maintain_tolerance_kg {
        return None;
    }
    let target = if profile.weight_delta_kg() < 0.0 {
        profile.current_weight_kg - rounded
    } else {
        profile.current_weight_kg + rounded
    };

    let mut candidate = profile.clone();
    candidate.target_weight_kg = target;
    Some(Candidate {
        strategy: AlternativeStrategy::AdjustTargetWeight,
        changes: vec![FieldChange {
            field: ProfileField::TargetWeightKg,
            from: profile.target_weight_kg,
            to: target,
        }],
        summary: format!(
            "Aim for {target:.1} kg in your original {} weeks",
            profile.timeline_weeks
        ),
        profile: candidate,
    })
}

fn realize(candidate: Candidate, config: &EngineConfig) -> Option<AlternativePlan> {
    if let Err(error) = candidate.profile.check_domain() {
        debug!(strategy = ?candidate.strategy, %error, "discarded out-of-domain alternative");
        return None;
    }
    let result = evaluate_at_depth(&candidate.profile, config, PipelineDepth::Alternative);
    if !result.may_proceed {
        debug!(
            strategy = ?candidate.strategy,
            blocking = ?result.blocking_codes(),
            "discarded alternative that still fails validation"
        );
        return None;
    }
    Some(AlternativePlan {
        strategy: candidate.strategy,
        changes: candidate.changes,
        summary: candidate.summary,
        profile: candidate.profile,
        metrics: result.metrics,
        advisory: result.advisory,
        guarantee: ValidationGuarantee::PassedBlocking,
    })
}

/// Generate re-validated alternatives for a blocked plan
#[must_use]
pub fn generate(
    profile: &Profile,
    metrics: &CalculatedMetrics,
    blocking: &[Finding],
    config: &EngineConfig,
) -> Vec<AlternativePlan> {
    if !admits_alternatives(blocking) {
        return Vec::new();
    }
    let Some(safe_percent) = safe_rate_percent(profile, metrics, config) else {
        debug!("no energy headroom for a safe rate; no alternatives");
        return Vec::new();
    };

    let policy = &config.alternatives;
    let candidates = [
        extend_timeline(profile, safe_percent),
        shift_to_exercise(
            AlternativeStrategy::IncreaseExercise,
            policy.increase_exercise_rate_percent,
            policy.increase_exercise_share,
            profile,
            metrics,
            config,
        ),
        shift_to_exercise(
            AlternativeStrategy::Balanced,
            policy.balanced_rate_percent,
            policy.balanced_exercise_share,
            profile,
            metrics,
            config,
        ),
        adjust_target_weight(profile, safe_percent, config),
    ];

    let plans: Vec<AlternativePlan> = candidates
        .into_iter()
        .flatten()
        .filter_map(|candidate| realize(candidate, config))
        .take(policy.max_alternatives)
        .collect();

    debug!(count = plans.len(), safe_percent, "generated alternatives");
    plans
}
