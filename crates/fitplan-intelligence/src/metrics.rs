// ABOUTME: Derived metric types produced by the calculator and modifier pipeline
// ABOUTME: CalculatedMetrics, goal direction, macro targets, body-fat resolution, heart-rate zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculated metrics are a pure function of the profile. They own no identity,
//! are never mutated in place by consumers, and are replaced on every call.

use serde::{Deserialize, Serialize};

use crate::modifiers::AppliedModifiers;

/// Direction of the requested weight change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalDirection {
    /// Target is below current weight
    Loss,
    /// Target is above current weight
    Gain,
    /// Target is within tolerance of current weight
    Maintain,
    /// Goals contain both loss and gain; no energy delta is applied
    Indeterminate,
}

impl GoalDirection {
    /// Whether the direction requests a change in body weight
    #[must_use]
    pub const fn changes_weight(&self) -> bool {
        matches!(self, Self::Loss | Self::Gain)
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrate (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

/// Where the resolved body-fat value came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatSource {
    /// Entered by the user
    UserEntered,
    /// Supplied by an external estimator above the confidence threshold
    ExternalEstimate,
    /// Deurenberg BMI/age formula
    FormulaEstimate,
    /// Fixed sex-specific default
    ConservativeDefault,
}

/// Confidence label surfaced alongside the body-fat value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EstimateConfidence {
    /// Default value, treat with caution
    VeryLow,
    /// Population formula
    Low,
    /// External estimate
    Medium,
    /// Direct user entry
    High,
}

/// Resolved body-fat percentage with provenance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyFatResolution {
    /// Body fat (%)
    pub percentage: f64,
    /// Source tier that produced the value
    pub source: BodyFatSource,
    /// Confidence label for the source tier
    pub confidence: EstimateConfidence,
}

/// One heart-rate training zone
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HeartRateZone {
    /// Zone number (1-5)
    pub zone: u8,
    /// Lower bound (bpm)
    pub min_bpm: f64,
    /// Upper bound (bpm)
    pub max_bpm: f64,
}

/// Age-predicted maximum heart rate and training zones
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HeartRateZones {
    /// Tanaka maximum heart rate (bpm)
    pub max_hr: f64,
    /// Five zones from 50% to 100% of max
    pub zones: [HeartRateZone; 5],
}

/// Derived physiological metrics for one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculatedMetrics {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Body mass index at current weight
    pub bmi: f64,
    /// Body mass index at target weight
    pub target_bmi: f64,
    /// BMR x occupation multiplier (kcal/day)
    pub base_tdee: f64,
    /// MET-based exercise expenditure, daily average (kcal/day)
    pub exercise_kcal_per_day: f64,
    /// Base TDEE plus exercise, after modifiers (kcal/day)
    pub total_tdee: f64,
    /// Resolved daily calorie target (kcal/day)
    pub target_calories: f64,
    /// Signed weekly rate of change (kg/week)
    pub weekly_rate_kg: f64,
    /// Weekly rate as a percentage of current weight
    pub weekly_rate_percent: f64,
    /// Daily energy deficit or surplus implied by the rate (kcal/day)
    pub daily_energy_delta: f64,
    /// Direction of the requested change
    pub goal_direction: GoalDirection,
    /// Set only when the goal set contains both loss and gain
    pub goal_direction_indeterminate: bool,
    /// Macronutrient split
    pub macros: MacroTargets,
    /// Daily water target (ml)
    pub water_ml: f64,
    /// Daily fiber target (g)
    pub fiber_g: f64,
    /// Resolved body fat with provenance
    pub body_fat: BodyFatResolution,
    /// Diet-readiness score (0-100)
    pub diet_readiness_score: f64,
    /// Nightly sleep (hours)
    pub sleep_hours: f64,
    /// Planned training minutes per week
    pub weekly_exercise_minutes: u32,
    /// Waist-to-hip ratio when both measures are known
    pub waist_hip_ratio: Option<f64>,
    /// Heart-rate zones
    pub heart_rate: HeartRateZones,
    /// Requested timeline with lifestyle penalties applied (weeks)
    pub effective_timeline_weeks: u32,
    /// Record of every modifier applied
    pub modifiers: AppliedModifiers,
}

impl CalculatedMetrics {
    /// Energy headroom between total expenditure and `floor` (kcal/day)
    #[must_use]
    pub fn headroom_above(&self, floor: f64) -> f64 {
        self.total_tdee + self.modifiers.reproductive_kcal - floor
    }
}
