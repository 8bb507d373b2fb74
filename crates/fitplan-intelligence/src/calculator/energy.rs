// ABOUTME: Energy expenditure formulas: Mifflin-St Jeor BMR, occupation TDEE, MET exercise burn
// ABOUTME: Also resolves goal direction and the weekly rate / daily energy delta
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Expenditure
//!
//! Base TDEE is scaled by the occupation tier only. Exercise expenditure is
//! computed separately from the MET table and added on top, so occupation and
//! training never double-count daily movement.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - Ainsworth, B.E., et al. (2011). Compendium of Physical Activities.
//!   *Medicine & Science in Sports & Exercise*, 43(8), 1575-1581.
//!   <https://doi.org/10.1249/MSS.0b013e31821ece12>

use fitplan_core::constants::physiology::time::{DAYS_PER_WEEK, MINUTES_PER_HOUR};
use fitplan_core::models::{FitnessGoal, Profile};

use crate::config::{BmrConfig, EngineConfig, EnergyConfig};
use crate::metrics::GoalDirection;

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
/// - Other: -78 (mean of the male and female outputs)
#[must_use]
pub fn calculate_bmr(profile: &Profile, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * profile.current_weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age);

    weight_component + height_component + age_component + config.sex_constant.get(profile.sex)
}

/// Body mass index for a weight and height
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Base TDEE: BMR x occupation multiplier
#[must_use]
pub fn calculate_base_tdee(bmr: f64, profile: &Profile, config: &EngineConfig) -> f64 {
    bmr * config.occupation_factors.factor(profile.occupation)
}

/// MET for the profile's intensity, averaged over the selected workout types
#[must_use]
pub fn average_met(profile: &Profile, config: &EngineConfig) -> f64 {
    if profile.workout_types.is_empty() {
        return config.exercise.general.get(profile.intensity);
    }
    let total: f64 = profile
        .workout_types
        .iter()
        .map(|workout_type| config.exercise.met(*workout_type, profile.intensity))
        .sum();
    total / profile.workout_types.len() as f64
}

/// Energy cost of one session (kcal)
///
/// Formula: MET x `weight_kg` x hours
#[must_use]
pub fn session_kcal(profile: &Profile, config: &EngineConfig) -> f64 {
    let hours = f64::from(profile.session_duration_minutes) / MINUTES_PER_HOUR;
    average_met(profile, config) * profile.current_weight_kg * hours
}

/// Weekly exercise expenditure amortized to a daily average (kcal/day)
#[must_use]
pub fn calculate_exercise_kcal_per_day(profile: &Profile, config: &EngineConfig) -> f64 {
    session_kcal(profile, config) * f64::from(profile.workout_frequency_per_week) / DAYS_PER_WEEK
}

/// Resolve goal direction from the goal set and the weight delta
///
/// Conflicting loss and gain goals make the direction indeterminate regardless
/// of the weight endpoints.
#[must_use]
pub fn resolve_goal_direction(profile: &Profile, config: &EnergyConfig) -> GoalDirection {
    if profile.has_goal(FitnessGoal::LoseWeight) && profile.has_goal(FitnessGoal::GainWeight) {
        return GoalDirection::Indeterminate;
    }
    let delta = profile.weight_delta_kg();
    if delta.abs() <= config.maintain_tolerance_kg {
        GoalDirection::Maintain
    } else if delta < 0.0 {
        GoalDirection::Loss
    } else {
        GoalDirection::Gain
    }
}

/// Weekly rate of change implied by the profile's endpoints and timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateResolution {
    /// Signed kg/week (negative for loss)
    pub weekly_rate_kg: f64,
    /// |rate| as a percentage of current weight
    pub weekly_rate_percent: f64,
    /// Daily energy deficit or surplus (kcal/day); zero unless the direction changes weight
    pub daily_energy_delta: f64,
}

/// Resolve weekly rate and the daily energy delta
///
/// Formula: delta = |rate| x `kcal_per_kg_tissue` / 7
#[must_use]
pub fn resolve_rate(profile: &Profile, direction: GoalDirection, config: &EnergyConfig) -> RateResolution {
    let weekly_rate_kg = profile.weight_delta_kg() / f64::from(profile.timeline_weeks.max(1));
    let weekly_rate_percent = weekly_rate_kg.abs() / profile.current_weight_kg * 100.0;
    let daily_energy_delta = if direction.changes_weight() {
        weekly_rate_kg.abs() * config.kcal_per_kg_tissue / DAYS_PER_WEEK
    } else {
        0.0
    };
    RateResolution {
        weekly_rate_kg,
        weekly_rate_percent,
        daily_energy_delta,
    }
}

/// Apply the energy delta to total TDEE in the direction of the goal
#[must_use]
pub fn target_calories(total_tdee: f64, direction: GoalDirection, daily_energy_delta: f64) -> f64 {
    let target = match direction {
        GoalDirection::Loss => total_tdee - daily_energy_delta,
        GoalDirection::Gain => total_tdee + daily_energy_delta,
        GoalDirection::Maintain | GoalDirection::Indeterminate => total_tdee,
    };
    target.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::baseline_profile;
    use fitplan_core::models::{BiologicalSex, WorkoutType};

    #[test]
    fn test_mifflin_male() {
        let profile = baseline_profile();
        let bmr = calculate_bmr(&profile, &BmrConfig::default());
        // 800 + 1125 - 150 + 5
        assert!((bmr - 1780.0).abs() < 1e-9);
    }

    #[test]
    fn test_mifflin_other_is_mean_of_binary_formulas() {
        let config = BmrConfig::default();
        let mut profile = baseline_profile();
        profile.sex = BiologicalSex::Male;
        let male = calculate_bmr(&profile, &config);
        profile.sex = BiologicalSex::Female;
        let female = calculate_bmr(&profile, &config);
        profile.sex = BiologicalSex::Other;
        let other = calculate_bmr(&profile, &config);
        assert!((other - (male + female) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_exercise_average_met() {
        let config = EngineConfig::default();
        let profile = baseline_profile();
        // (5.0 + 7.0) / 2 x 80 kg x 1 h x 4 / 7
        let expected = 6.0 * 80.0 * 4.0 / 7.0;
        assert!((calculate_exercise_kcal_per_day(&profile, &config) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_exercise_falls_back_to_general_met() {
        let config = EngineConfig::default();
        let mut profile = baseline_profile();
        profile.workout_types = Vec::<WorkoutType>::new();
        assert!((average_met(&profile, &config) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_direction() {
        let config = EnergyConfig::default();
        let mut profile = baseline_profile();
        assert_eq!(resolve_goal_direction(&profile, &config), GoalDirection::Loss);

        profile.target_weight_kg = 80.4;
        assert_eq!(resolve_goal_direction(&profile, &config), GoalDirection::Maintain);

        profile.target_weight_kg = 85.0;
        assert_eq!(resolve_goal_direction(&profile, &config), GoalDirection::Gain);

        profile.goals = vec![FitnessGoal::LoseWeight, FitnessGoal::GainWeight];
        assert_eq!(
            resolve_goal_direction(&profile, &config),
            GoalDirection::Indeterminate
        );
    }

    #[test]
    fn test_rate_resolution() {
        let config = EnergyConfig::default();
        let profile = baseline_profile();
        let rate = resolve_rate(&profile, GoalDirection::Loss, &config);
        assert!((rate.weekly_rate_kg + 0.5).abs() < 1e-9);
        assert!((rate.weekly_rate_percent - 0.625).abs() < 1e-9);
        assert!((rate.daily_energy_delta - 550.0).abs() < 1e-9);

        let none = resolve_rate(&profile, GoalDirection::Indeterminate, &config);
        assert!(none.daily_energy_delta.abs() < f64::EPSILON);
    }
}
