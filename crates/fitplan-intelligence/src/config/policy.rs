// ABOUTME: Safety and policy tables for modifiers, rate bands, validation thresholds, and alternatives
// ABOUTME: Includes the configurable medical-condition priority table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Safety and Policy Configuration
//!
//! # Scientific References
//!
//! - Rate of loss: Helms et al. (2014) DOI: 10.1186/1550-2783-11-20
//! - Calorie floors: NIH Clinical Guidelines on Overweight and Obesity (1998)
//! - Essential fat: `McArdle`, Katch & Katch (2010) Exercise Physiology
//! - Pregnancy energy: IOM (2009) Weight Gain During Pregnancy
//! - Waist-to-hip ratio: WHO (2008) Waist Circumference and Waist-Hip Ratio
//! - Muscle accretion: Aragon (2008) natural gain model

use fitplan_core::models::{ConditionClass, Trimester};
use serde::{Deserialize, Serialize};

use super::energy::SexSpecific;

/// One age band of metabolic decline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AgeBand {
    /// First age (inclusive) the band applies to
    pub min_age: u32,
    /// TDEE adjustment (%), negative for decline
    pub tdee_percent: f64,
}

/// Modifier pipeline policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierConfig {
    /// Which condition family wins when several qualify, highest first
    pub condition_priority: Vec<ConditionClass>,
    /// Hypothyroidism TDEE adjustment (%)
    pub hypothyroidism_tdee_percent: f64,
    /// Hyperthyroidism TDEE adjustment (%)
    pub hyperthyroidism_tdee_percent: f64,
    /// PCOS TDEE adjustment (%)
    pub pcos_tdee_percent: f64,
    /// PCOS carbohydrate reduction (%)
    pub pcos_carb_reduction_percent: f64,
    /// Type 2 diabetes, prediabetes, insulin resistance carbohydrate reduction (%)
    pub insulin_carb_reduction_percent: f64,
    /// Age bands, ascending by `min_age`
    pub age_bands: Vec<AgeBand>,
    /// Absolute cap on the combined TDEE adjustment (%)
    pub max_tdee_adjustment_percent: f64,
    /// Cap on carbohydrate reduction (%)
    pub max_carb_reduction_percent: f64,
    /// Sleep below this (hours) incurs a timeline penalty
    pub sleep_reference_hours: f64,
    /// Timeline penalty per hour of sleep debt (%)
    pub sleep_penalty_percent_per_hour: f64,
    /// Timeline penalty for high stress (%)
    pub high_stress_penalty_percent: f64,
    /// Cap on the total timeline penalty (%)
    pub max_timeline_penalty_percent: f64,
    /// Extra kcal per trimester (first, second, third)
    pub pregnancy_kcal: [f64; 3],
    /// Extra kcal while breastfeeding
    pub breastfeeding_kcal: f64,
}

impl ModifierConfig {
    /// Extra energy for a trimester
    #[must_use]
    pub const fn trimester_kcal(&self, trimester: Trimester) -> f64 {
        match trimester {
            Trimester::First => self.pregnancy_kcal[0],
            Trimester::Second => self.pregnancy_kcal[1],
            Trimester::Third => self.pregnancy_kcal[2],
        }
    }

    /// Position of a condition class in the priority table (lower wins)
    #[must_use]
    pub fn priority_of(&self, class: ConditionClass) -> Option<usize> {
        self.condition_priority.iter().position(|c| *c == class)
    }
}

impl Default for ModifierConfig {
    fn default() -> Self {
        Self {
            condition_priority: vec![
                ConditionClass::Thyroid,
                ConditionClass::InsulinResistance,
                ConditionClass::Cardiovascular,
            ],
            hypothyroidism_tdee_percent: -10.0,
            hyperthyroidism_tdee_percent: 10.0,
            pcos_tdee_percent: -5.0,
            pcos_carb_reduction_percent: 25.0,
            insulin_carb_reduction_percent: 30.0,
            age_bands: vec![
                AgeBand {
                    min_age: 50,
                    tdee_percent: -2.0,
                },
                AgeBand {
                    min_age: 60,
                    tdee_percent: -4.0,
                },
                AgeBand {
                    min_age: 70,
                    tdee_percent: -6.0,
                },
            ],
            max_tdee_adjustment_percent: 15.0,
            max_carb_reduction_percent: 30.0,
            sleep_reference_hours: 7.0,
            sleep_penalty_percent_per_hour: 10.0,
            high_stress_penalty_percent: 10.0,
            max_timeline_penalty_percent: 40.0,
            pregnancy_kcal: [0.0, 340.0, 452.0],
            breastfeeding_kcal: 500.0,
        }
    }
}

/// Weekly rate thresholds as a percentage of current body weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RateBand {
    /// Sustainable rate used for alternatives (%/week)
    pub optimal_percent: f64,
    /// Above this the rate is aggressive (%/week)
    pub aggressive_percent: f64,
    /// Above this the rate is unsafe (%/week)
    pub extreme_percent: f64,
}

impl RateBand {
    pub(crate) fn is_ordered(&self) -> bool {
        0.0 < self.optimal_percent
            && self.optimal_percent < self.aggressive_percent
            && self.aggressive_percent < self.extreme_percent
    }
}

/// Rate limits for loss and gain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateConfig {
    /// Loss thresholds: 0.5 / 1.0 / 1.5 %
    pub loss: RateBand,
    /// Gain thresholds: 0.25 / 0.5 / 1.0 %
    pub gain: RateBand,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            loss: RateBand {
                optimal_percent: 0.5,
                aggressive_percent: 1.0,
                extreme_percent: 1.5,
            },
            gain: RateBand {
                optimal_percent: 0.25,
                aggressive_percent: 0.5,
                extreme_percent: 1.0,
            },
        }
    }
}

/// Natural muscle accretion limits by training age (kg/month)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleGainConfig {
    /// Under `novice_years` of training
    pub novice_kg_per_month: f64,
    /// Between novice and advanced
    pub intermediate_kg_per_month: f64,
    /// Over `advanced_years` of training
    pub advanced_kg_per_month: f64,
    /// Novice cut-off (years)
    pub novice_years: f64,
    /// Advanced cut-off (years)
    pub advanced_years: f64,
}

impl MuscleGainConfig {
    /// Accretion limit for a training age
    #[must_use]
    pub fn limit_for(&self, experience_years: f64) -> f64 {
        if experience_years < self.novice_years {
            self.novice_kg_per_month
        } else if experience_years <= self.advanced_years {
            self.intermediate_kg_per_month
        } else {
            self.advanced_kg_per_month
        }
    }
}

impl Default for MuscleGainConfig {
    fn default() -> Self {
        Self {
            novice_kg_per_month: 1.0,
            intermediate_kg_per_month: 0.5,
            advanced_kg_per_month: 0.25,
            novice_years: 1.0,
            advanced_years: 3.0,
        }
    }
}

/// Validation thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyConfig {
    /// Essential fat floor (%): male 5, female 12, other 8.5
    pub essential_fat_percent: SexSpecific<f64>,
    /// Absolute daily calorie floor: male 1500, female 1200, other 1350
    pub calorie_floor_kcal: SexSpecific<f64>,
    /// Clinical underweight BMI
    pub underweight_bmi: f64,
    /// Below this sleep (hours) an aggressive rate is blocked
    pub severe_sleep_hours: f64,
    /// Recommended minimum sleep (hours)
    pub recommended_sleep_hours: f64,
    /// Absolute weekly training ceiling (minutes)
    pub max_weekly_training_minutes: u32,
    /// High weekly training volume (minutes)
    pub high_weekly_training_minutes: u32,
    /// Minimum weekly exercise (minutes), WHO guideline
    pub minimum_weekly_exercise_minutes: u32,
    /// Readiness below this with an aggressive rate is flagged
    pub low_readiness_score: f64,
    /// Readiness below this counts as a lifestyle risk
    pub lifestyle_readiness_score: f64,
    /// Number of lifestyle risks that triggers a finding
    pub lifestyle_risk_count: usize,
    /// Elderly guidance age
    pub elderly_age: u32,
    /// Adolescent guidance applies below this age
    pub adolescent_age: u32,
    /// Weekly sessions that make an adolescent an athlete
    pub adolescent_session_threshold: u32,
    /// Perimenopause age window (inclusive)
    pub perimenopause_ages: (u32, u32),
    /// Minimum push-ups consistent with advanced intensity
    pub capability_min_pushups: u32,
    /// Minimum running minutes consistent with advanced intensity
    pub capability_min_run_minutes: u32,
    /// Central adiposity waist-to-hip ratio: male 0.90, female 0.85, other 0.875
    pub central_adiposity_whr: SexSpecific<f64>,
    /// Natural muscle accretion limits
    pub muscle_gain: MuscleGainConfig,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            essential_fat_percent: SexSpecific {
                male: 5.0,
                female: 12.0,
                other: 8.5,
            },
            calorie_floor_kcal: SexSpecific {
                male: 1500.0,
                female: 1200.0,
                other: 1350.0,
            },
            underweight_bmi: 18.5,
            severe_sleep_hours: 5.0,
            recommended_sleep_hours: 7.0,
            max_weekly_training_minutes: 1200,
            high_weekly_training_minutes: 900,
            minimum_weekly_exercise_minutes: 150,
            low_readiness_score: 40.0,
            lifestyle_readiness_score: 50.0,
            lifestyle_risk_count: 3,
            elderly_age: 65,
            adolescent_age: 18,
            adolescent_session_threshold: 5,
            perimenopause_ages: (45, 55),
            capability_min_pushups: 10,
            capability_min_run_minutes: 10,
            central_adiposity_whr: SexSpecific {
                male: 0.90,
                female: 0.85,
                other: 0.875,
            },
            muscle_gain: MuscleGainConfig::default(),
        }
    }
}

/// Alternative generation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativesConfig {
    /// Fraction of the energy headroom above the floor a safe rate may use
    pub headroom_fraction: f64,
    /// Rate held by the increase-exercise strategy (%/week)
    pub increase_exercise_rate_percent: f64,
    /// Minimum share of the deficit covered by exercise in that strategy
    pub increase_exercise_share: f64,
    /// Rate held by the balanced strategy (%/week)
    pub balanced_rate_percent: f64,
    /// Minimum share of the deficit covered by exercise in the balanced strategy
    pub balanced_exercise_share: f64,
    /// Ceiling on weekly sessions an alternative may propose
    pub max_sessions_per_week: u32,
    /// Target-weight alternatives are rounded to this step (kg)
    pub target_rounding_kg: f64,
    /// Maximum number of alternatives returned
    pub max_alternatives: usize,
}

impl Default for AlternativesConfig {
    fn default() -> Self {
        Self {
            headroom_fraction: 0.95,
            increase_exercise_rate_percent: 1.0,
            increase_exercise_share: 0.5,
            balanced_rate_percent: 0.75,
            balanced_exercise_share: 0.4,
            max_sessions_per_week: 7,
            target_rounding_kg: 0.5,
            max_alternatives: 4,
        }
    }
}
