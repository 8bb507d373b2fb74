// ABOUTME: Modifier pipeline applying capped, non-stacking adjustments to base metrics
// ABOUTME: Dominant medical condition, age decline, sleep/stress timeline penalty, pregnancy/lactation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Modifier Pipeline
//!
//! An arbitrary list of medical conditions is first reduced to at most one
//! [`MetabolicAdjustment`] by walking the configured priority table; within a
//! class the condition with the largest combined effect wins. Only that single
//! variant flows into the energy and macro adjustment, so condition effects can
//! never stack. The combined TDEE change (condition plus age band) is clamped to
//! the configured cap, as is the carbohydrate reduction.
//!
//! The sleep and stress penalty lengthens the *reported* timeline only; it never
//! touches calories or the weekly rate.
//!
//! [`adjust`] always starts from the unadjusted base values carried in the
//! metrics, so applying it twice yields the same result as applying it once.

use fitplan_core::models::{ConditionClass, MedicalCondition, Profile, StressLevel};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::{derive_nutrition_targets, target_calories, NutritionInputs};
use crate::config::{EngineConfig, ModifierConfig};
use crate::metrics::CalculatedMetrics;

/// The single metabolic adjustment selected from the condition list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetabolicAdjustment {
    /// Thyroid disorder changing metabolic rate directly
    Thyroid {
        /// Condition that produced the adjustment
        condition: MedicalCondition,
        /// TDEE change (%)
        tdee_percent: f64,
    },
    /// Insulin-resistance disorder reshaping carbohydrate intake
    InsulinResistance {
        /// Condition that produced the adjustment
        condition: MedicalCondition,
        /// TDEE change (%)
        tdee_percent: f64,
        /// Carbohydrate reduction (%)
        carb_reduction_percent: f64,
    },
    /// Cardiovascular condition; no energy change, intensity caution only
    CardiovascularCaution {
        /// Condition that produced the caution
        condition: MedicalCondition,
    },
}

impl MetabolicAdjustment {
    /// TDEE change requested by this variant (%)
    #[must_use]
    pub const fn tdee_percent(&self) -> f64 {
        match self {
            Self::Thyroid { tdee_percent, .. } | Self::InsulinResistance { tdee_percent, .. } => {
                *tdee_percent
            }
            Self::CardiovascularCaution { .. } => 0.0,
        }
    }

    /// Carbohydrate reduction requested by this variant (%)
    #[must_use]
    pub const fn carb_reduction_percent(&self) -> f64 {
        match self {
            Self::InsulinResistance {
                carb_reduction_percent,
                ..
            } => *carb_reduction_percent,
            _ => 0.0,
        }
    }

    /// Condition that produced the adjustment
    #[must_use]
    pub const fn condition(&self) -> &MedicalCondition {
        match self {
            Self::Thyroid { condition, .. }
            | Self::InsulinResistance { condition, .. }
            | Self::CardiovascularCaution { condition } => condition,
        }
    }

    fn magnitude(&self) -> f64 {
        self.tdee_percent().abs() + self.carb_reduction_percent()
    }
}

/// Record of every modifier applied to a set of metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppliedModifiers {
    /// Dominant medical adjustment, if any condition qualified
    pub metabolic: Option<MetabolicAdjustment>,
    /// Age-band TDEE change (%)
    pub age_tdee_percent: f64,
    /// Combined TDEE change after the cap (%)
    pub total_tdee_percent: f64,
    /// Whether the combined change hit the cap
    pub tdee_capped: bool,
    /// Carbohydrate reduction after the cap (%)
    pub carb_reduction_percent: f64,
    /// Timeline penalty from sleep debt and stress (%)
    pub timeline_penalty_percent: f64,
    /// Pregnancy or lactation energy added to the target (kcal/day)
    pub reproductive_kcal: f64,
    /// Pregnancy or lactation water added to the target (ml/day)
    pub reproductive_water_ml: f64,
    /// A cardiovascular condition calls for intensity caution
    pub intensity_caution: bool,
}

fn adjustment_for(
    condition: &MedicalCondition,
    config: &ModifierConfig,
) -> Option<MetabolicAdjustment> {
    let adjustment = match condition {
        MedicalCondition::Hypothyroidism => MetabolicAdjustment::Thyroid {
            condition: condition.clone(),
            tdee_percent: config.hypothyroidism_tdee_percent,
        },
        MedicalCondition::Hyperthyroidism => MetabolicAdjustment::Thyroid {
            condition: condition.clone(),
            tdee_percent: config.hyperthyroidism_tdee_percent,
        },
        MedicalCondition::Pcos => MetabolicAdjustment::InsulinResistance {
            condition: condition.clone(),
            tdee_percent: config.pcos_tdee_percent,
            carb_reduction_percent: config.pcos_carb_reduction_percent,
        },
        MedicalCondition::Type2Diabetes
        | MedicalCondition::Prediabetes
        | MedicalCondition::InsulinResistance => MetabolicAdjustment::InsulinResistance {
            condition: condition.clone(),
            tdee_percent: 0.0,
            carb_reduction_percent: config.insulin_carb_reduction_percent,
        },
        MedicalCondition::Hypertension
        | MedicalCondition::HeartDisease
        | MedicalCondition::HighCholesterol => MetabolicAdjustment::CardiovascularCaution {
            condition: condition.clone(),
        },
        _ => return None,
    };
    Some(adjustment)
}

/// Reduce a condition list to at most one dominant adjustment
///
/// Classes are tried in priority order; the first class with a qualifying
/// condition wins, and within it the condition with the largest effect.
#[must_use]
pub fn classify_conditions(
    conditions: &[MedicalCondition],
    config: &ModifierConfig,
) -> Option<MetabolicAdjustment> {
    config.condition_priority.iter().find_map(|class| {
        conditions
            .iter()
            .filter(|condition| condition.class() == Some(*class))
            .filter_map(|condition| adjustment_for(condition, config))
            .max_by(|a, b| a.magnitude().total_cmp(&b.magnitude()))
    })
}

/// TDEE change for the profile's age band (%)
#[must_use]
pub fn age_band_percent(age: u32, config: &ModifierConfig) -> f64 {
    config
        .age_bands
        .iter()
        .rev()
        .find(|band| age >= band.min_age)
        .map_or(0.0, |band| band.tdee_percent)
}

/// Timeline penalty from sleep debt and stress (%)
#[must_use]
pub fn timeline_penalty_percent(
    sleep_hours: f64,
    stress: StressLevel,
    config: &ModifierConfig,
) -> f64 {
    let sleep_debt = (config.sleep_reference_hours - sleep_hours).max(0.0);
    let mut penalty = sleep_debt * config.sleep_penalty_percent_per_hour;
    if stress == StressLevel::High {
        penalty += config.high_stress_penalty_percent;
    }
    penalty.min(config.max_timeline_penalty_percent)
}

fn reproductive_additions(profile: &Profile, config: &EngineConfig) -> (f64, f64) {
    let mut kcal = 0.0;
    let mut water = 0.0;
    if let Some(trimester) = profile.pregnancy_trimester {
        kcal += config.modifiers.trimester_kcal(trimester);
        water += config.hydration.pregnancy_ml;
    }
    if profile.breastfeeding {
        kcal += config.modifiers.breastfeeding_kcal;
        water += config.hydration.breastfeeding_ml;
    }
    (kcal, water)
}

/// Apply the modifier pipeline to base metrics
#[must_use]
pub fn adjust(
    metrics: &CalculatedMetrics,
    profile: &Profile,
    config: &EngineConfig,
) -> CalculatedMetrics {
    let policy = &config.modifiers;

    let metabolic = classify_conditions(&profile.medical_conditions, policy);
    let age_tdee_percent = age_band_percent(profile.age, policy);
    let condition_percent = metabolic
        .as_ref()
        .map_or(0.0, MetabolicAdjustment::tdee_percent);
    let raw_percent = condition_percent + age_tdee_percent;
    let cap = policy.max_tdee_adjustment_percent;
    let total_tdee_percent = raw_percent.clamp(-cap, cap);
    let carb_reduction_percent = metabolic
        .as_ref()
        .map_or(0.0, MetabolicAdjustment::carb_reduction_percent)
        .min(policy.max_carb_reduction_percent);

    let penalty = timeline_penalty_percent(metrics.sleep_hours, profile.stress_level, policy);
    let effective_timeline_weeks =
        (f64::from(profile.timeline_weeks) * (100.0 + penalty) / 100.0).ceil() as u32;

    let (reproductive_kcal, reproductive_water_ml) = reproductive_additions(profile, config);
    let intensity_caution = profile
        .medical_conditions
        .iter()
        .any(|condition| condition.class() == Some(ConditionClass::Cardiovascular));

    let unadjusted_tdee = metrics.base_tdee + metrics.exercise_kcal_per_day;
    let total_tdee = unadjusted_tdee * (1.0 + total_tdee_percent / 100.0);
    let target = target_calories(total_tdee, metrics.goal_direction, metrics.daily_energy_delta)
        + reproductive_kcal;

    let nutrition = derive_nutrition_targets(
        &NutritionInputs {
            target_calories: target,
            weight_kg: profile.current_weight_kg,
            age: profile.age,
            direction: metrics.goal_direction,
            sessions_per_week: profile.workout_frequency_per_week,
            intensity: profile.intensity,
            carb_reduction_percent,
            weekly_exercise_minutes: metrics.weekly_exercise_minutes,
            extra_water_ml: reproductive_water_ml,
        },
        &config.macronutrients,
        &config.hydration,
    );

    if metabolic.is_some() || total_tdee_percent != 0.0 || reproductive_kcal > 0.0 {
        debug!(
            total_tdee_percent,
            carb_reduction_percent,
            reproductive_kcal,
            capped = raw_percent != total_tdee_percent,
            "applied metabolic modifiers"
        );
    }

    CalculatedMetrics {
        total_tdee,
        target_calories: target,
        macros: nutrition.macros,
        water_ml: nutrition.water_ml,
        fiber_g: nutrition.fiber_g,
        effective_timeline_weeks,
        modifiers: AppliedModifiers {
            metabolic,
            age_tdee_percent,
            total_tdee_percent,
            tdee_capped: raw_percent != total_tdee_percent,
            carb_reduction_percent,
            timeline_penalty_percent: penalty,
            reproductive_kcal,
            reproductive_water_ml,
            intensity_caution,
        },
        ..metrics.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;
    use crate::test_support::baseline_profile;
    use chrono::NaiveTime;
    use fitplan_core::models::Trimester;

    #[test]
    fn test_thyroid_beats_insulin_resistance() {
        let config = ModifierConfig::default();
        let adjustment = classify_conditions(
            &[MedicalCondition::Type2Diabetes, MedicalCondition::Hypothyroidism],
            &config,
        )
        .unwrap();
        assert_eq!(adjustment.condition(), &MedicalCondition::Hypothyroidism);
        assert!((adjustment.tdee_percent() + 10.0).abs() < f64::EPSILON);
        assert!(adjustment.carb_reduction_percent().abs() < f64::EPSILON);
    }

    #[test]
    fn test_priority_table_is_configurable() {
        let mut config = ModifierConfig::default();
        config.condition_priority = vec![
            ConditionClass::InsulinResistance,
            ConditionClass::Thyroid,
            ConditionClass::Cardiovascular,
        ];
        let adjustment = classify_conditions(
            &[MedicalCondition::Hypothyroidism, MedicalCondition::Pcos],
            &config,
        )
        .unwrap();
        assert_eq!(adjustment.condition(), &MedicalCondition::Pcos);
    }

    #[test]
    fn test_largest_effect_wins_within_class() {
        let config = ModifierConfig::default();
        let adjustment = classify_conditions(
            &[MedicalCondition::Pcos, MedicalCondition::Prediabetes],
            &config,
        )
        .unwrap();
        // PCOS: 5 + 25 = 30; prediabetes: 0 + 30 = 30; tie keeps the later maximum
        assert!((adjustment.magnitude() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unclassified_conditions_ignored() {
        let config = ModifierConfig::default();
        assert!(classify_conditions(
            &[
                MedicalCondition::Asthma,
                MedicalCondition::Other("migraine".to_owned())
            ],
            &config
        )
        .is_none());
    }

    #[test]
    fn test_age_bands() {
        let config = ModifierConfig::default();
        assert!(age_band_percent(49, &config).abs() < f64::EPSILON);
        assert!((age_band_percent(50, &config) + 2.0).abs() < f64::EPSILON);
        assert!((age_band_percent(65, &config) + 4.0).abs() < f64::EPSILON);
        assert!((age_band_percent(82, &config) + 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_combined_adjustment_capped() {
        let config = EngineConfig::default();
        let mut profile = baseline_profile();
        profile.age = 72;
        profile.medical_conditions = vec![MedicalCondition::Hypothyroidism];
        let base = compute(&profile, &config);
        let adjusted = adjust(&base, &profile, &config);

        assert!((adjusted.modifiers.total_tdee_percent + 15.0).abs() < f64::EPSILON);
        assert!(adjusted.modifiers.tdee_capped);
        assert!((adjusted.total_tdee - base.total_tdee * 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_timeline_penalty_does_not_touch_calories() {
        let config = EngineConfig::default();
        let mut profile = baseline_profile();
        profile.sleep_time = NaiveTime::from_hms_opt(1, 0, 0).unwrap();
        profile.wake_time = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
        profile.stress_level = StressLevel::High;
        let base = compute(&profile, &config);
        let adjusted = adjust(&base, &profile, &config);

        // 2 h debt x 10% + 10% stress
        assert!((adjusted.modifiers.timeline_penalty_percent - 30.0).abs() < 1e-9);
        assert_eq!(adjusted.effective_timeline_weeks, 26);
        assert!((adjusted.target_calories - base.target_calories).abs() < 1e-9);
        assert!((adjusted.weekly_rate_kg - base.weekly_rate_kg).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pregnancy_additions() {
        let config = EngineConfig::default();
        let mut profile = baseline_profile();
        profile.sex = fitplan_core::models::BiologicalSex::Female;
        profile.target_weight_kg = profile.current_weight_kg;
        profile.pregnancy_trimester = Some(Trimester::Third);
        profile.breastfeeding = false;
        let base = compute(&profile, &config);
        let adjusted = adjust(&base, &profile, &config);

        assert!((adjusted.target_calories - (base.target_calories + 452.0)).abs() < 1e-9);
        assert!((adjusted.water_ml - (base.water_ml + 300.0)).abs() < 1e-9);
    }

    #[test]
    fn test_adjust_is_idempotent() {
        let config = EngineConfig::default();
        let mut profile = baseline_profile();
        profile.age = 55;
        profile.medical_conditions = vec![MedicalCondition::Pcos];
        let base = compute(&profile, &config);
        let once = adjust(&base, &profile, &config);
        let twice = adjust(&once, &profile, &config);
        assert_eq!(once, twice);
    }
}
