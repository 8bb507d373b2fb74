// ABOUTME: Diet-readiness score from weighted positive and negative habit flags
// ABOUTME: Raw signed sum renormalized from its theoretical range into 0-100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::models::DietHabits;

use crate::config::ReadinessConfig;

/// Signed weighted sum of habit flags
#[must_use]
pub fn raw_readiness(habits: &DietHabits, config: &ReadinessConfig) -> f64 {
    let weight = |flag: bool, value: f64| if flag { value } else { 0.0 };

    let positive = weight(habits.drinks_enough_water, config.drinks_enough_water)
        + weight(habits.eats_vegetables_daily, config.eats_vegetables_daily)
        + weight(habits.eats_home_cooked, config.eats_home_cooked)
        + weight(habits.regular_meal_times, config.regular_meal_times)
        + weight(habits.tracks_food, config.tracks_food)
        + weight(habits.protein_every_meal, config.protein_every_meal)
        + weight(habits.eats_whole_grains, config.eats_whole_grains)
        + weight(habits.limits_sugary_drinks, config.limits_sugary_drinks)
        + weight(habits.plans_meals, config.plans_meals)
        + weight(habits.mindful_eating, config.mindful_eating);

    let negative = weight(habits.frequent_fast_food, config.frequent_fast_food)
        + weight(habits.late_night_snacking, config.late_night_snacking)
        + weight(habits.skips_meals, config.skips_meals)
        + weight(habits.emotional_eating, config.emotional_eating);

    positive - negative
}

/// Diet-readiness score in [0, 100]
///
/// Formula: (raw - `raw_min`) / (`raw_max` - `raw_min`) x 100, clamped
#[must_use]
pub fn diet_readiness_score(habits: &DietHabits, config: &ReadinessConfig) -> f64 {
    let (min, max) = (config.raw_min(), config.raw_max());
    let span = max - min;
    if span <= 0.0 {
        return 0.0;
    }
    ((raw_readiness(habits, config) - min) / span * 100.0).clamp(0.0, 100.0)
}
