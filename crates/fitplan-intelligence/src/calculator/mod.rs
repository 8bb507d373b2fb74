// ABOUTME: Metric calculator turning a profile into unadjusted CalculatedMetrics
// ABOUTME: Total for any in-domain profile; implausible inputs are left for validation to reject
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric Calculator
//!
//! Pure functions from [`Profile`] to [`CalculatedMetrics`]. The result has no
//! modifiers applied; see [`crate::modifiers::adjust`].

pub mod body_fat;
pub mod energy;
pub mod heart_rate;
pub mod macros;
/// Diet-readiness score from habit flags
pub mod readiness;

pub use body_fat::{deurenberg_estimate, resolve_body_fat};
pub use energy::{
    average_met, calculate_base_tdee, calculate_bmi, calculate_bmr,
    calculate_exercise_kcal_per_day, resolve_goal_direction, resolve_rate, session_kcal,
    target_calories, RateResolution,
};
pub use heart_rate::{heart_rate_zones, tanaka_max_hr};
pub use macros::{derive_nutrition_targets, NutritionInputs, NutritionTargets};
pub use readiness::diet_readiness_score;

use fitplan_core::models::Profile;
use tracing::trace;

use crate::config::EngineConfig;
use crate::metrics::{CalculatedMetrics, GoalDirection};
use crate::modifiers::AppliedModifiers;

/// Compute unadjusted metrics for a profile
#[must_use]
pub fn compute(profile: &Profile, config: &EngineConfig) -> CalculatedMetrics {
    let bmr = calculate_bmr(profile, &config.bmr);
    let bmi = calculate_bmi(profile.current_weight_kg, profile.height_cm);
    let base_tdee = calculate_base_tdee(bmr, profile, config);
    let exercise_kcal_per_day = calculate_exercise_kcal_per_day(profile, config);
    let total_tdee = base_tdee + exercise_kcal_per_day;

    let goal_direction = resolve_goal_direction(profile, &config.energy);
    let rate = resolve_rate(profile, goal_direction, &config.energy);
    let target = target_calories(total_tdee, goal_direction, rate.daily_energy_delta);

    let weekly_exercise_minutes = profile.weekly_exercise_minutes();
    let nutrition = derive_nutrition_targets(
        &NutritionInputs {
            target_calories: target,
            weight_kg: profile.current_weight_kg,
            age: profile.age,
            direction: goal_direction,
            sessions_per_week: profile.workout_frequency_per_week,
            intensity: profile.intensity,
            carb_reduction_percent: 0.0,
            weekly_exercise_minutes,
            extra_water_ml: 0.0,
        },
        &config.macronutrients,
        &config.hydration,
    );

    trace!(bmr, base_tdee, exercise_kcal_per_day, target, "computed base metrics");

    CalculatedMetrics {
        bmr,
        bmi,
        target_bmi: calculate_bmi(profile.target_weight_kg, profile.height_cm),
        base_tdee,
        exercise_kcal_per_day,
        total_tdee,
        target_calories: target,
        weekly_rate_kg: rate.weekly_rate_kg,
        weekly_rate_percent: rate.weekly_rate_percent,
        daily_energy_delta: rate.daily_energy_delta,
        goal_direction,
        goal_direction_indeterminate: goal_direction == GoalDirection::Indeterminate,
        macros: nutrition.macros,
        water_ml: nutrition.water_ml,
        fiber_g: nutrition.fiber_g,
        body_fat: resolve_body_fat(profile, bmi, &config.body_fat),
        diet_readiness_score: diet_readiness_score(&profile.diet_habits, &config.readiness),
        sleep_hours: profile.sleep_hours(),
        weekly_exercise_minutes,
        waist_hip_ratio: profile
            .waist_cm
            .zip(profile.hip_cm)
            .map(|(waist, hip)| waist / hip),
        heart_rate: heart_rate_zones(profile.age),
        effective_timeline_weeks: profile.timeline_weeks,
        modifiers: AppliedModifiers::default(),
    }
}
