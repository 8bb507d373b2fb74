// ABOUTME: Macronutrient, water, and fiber targets derived from target calories
// ABOUTME: Shared by the calculator and the modifier pipeline so both re-derive identically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Targets
//!
//! Protein is allocated first (g/kg by goal direction, raised for older adults,
//! capped as a share of energy). The remaining energy is split between
//! carbohydrate and fat with a carbohydrate share that rises with training
//! frequency and intensity. A carbohydrate reduction moves the freed energy to
//! fat so total calories are preserved.
//!
//! # Scientific References
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>
//! - Burke, L.M., et al. (2011). Carbohydrates for training and competition.
//!   *Journal of Sports Sciences*, 29(sup1), S17-S27.
//!   <https://doi.org/10.1080/02640414.2011.585473>

use fitplan_core::constants::physiology::energy::{
    KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use fitplan_core::models::IntensityLevel;

use crate::config::{HydrationConfig, MacronutrientConfig};
use crate::metrics::{GoalDirection, MacroTargets};

/// Inputs that shape the nutrition targets
#[derive(Debug, Clone, Copy)]
pub struct NutritionInputs {
    /// Daily calorie target (kcal)
    pub target_calories: f64,
    /// Current body weight (kg)
    pub weight_kg: f64,
    /// Age in years
    pub age: u32,
    /// Direction of the requested change
    pub direction: GoalDirection,
    /// Planned sessions per week
    pub sessions_per_week: u32,
    /// Self-reported intensity tier
    pub intensity: IntensityLevel,
    /// Carbohydrate reduction from a medical modifier (%)
    pub carb_reduction_percent: f64,
    /// Weekly training minutes
    pub weekly_exercise_minutes: u32,
    /// Extra water from pregnancy or lactation (ml)
    pub extra_water_ml: f64,
}

/// Macro, water, and fiber targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionTargets {
    /// Macronutrient split
    pub macros: MacroTargets,
    /// Daily water (ml)
    pub water_ml: f64,
    /// Daily fiber (g)
    pub fiber_g: f64,
}

/// Protein factor (g/kg) for a goal direction and age
#[must_use]
pub fn protein_g_per_kg(direction: GoalDirection, age: u32, config: &MacronutrientConfig) -> f64 {
    let base = match direction {
        GoalDirection::Loss => config.protein_loss_g_per_kg,
        GoalDirection::Gain => config.protein_gain_g_per_kg,
        GoalDirection::Maintain | GoalDirection::Indeterminate => config.protein_maintain_g_per_kg,
    };
    if age >= config.older_adult_age {
        base + config.older_adult_bonus_g_per_kg
    } else {
        base
    }
}

/// Carbohydrate share (%) of non-protein energy
#[must_use]
pub fn carb_share_percent(
    sessions_per_week: u32,
    intensity: IntensityLevel,
    config: &MacronutrientConfig,
) -> f64 {
    let mut share = config.carb_base_percent;
    if sessions_per_week >= config.high_frequency_sessions {
        share += config.high_frequency_bonus_percent;
    }
    match intensity {
        IntensityLevel::Advanced => share += config.advanced_bonus_percent,
        IntensityLevel::Beginner => share -= config.beginner_penalty_percent,
        IntensityLevel::Intermediate => {}
    }
    share.clamp(config.carb_min_percent, config.carb_max_percent)
}

/// Derive macro, water, and fiber targets
#[must_use]
pub fn derive_nutrition_targets(
    inputs: &NutritionInputs,
    macros: &MacronutrientConfig,
    hydration: &HydrationConfig,
) -> NutritionTargets {
    let kcal = inputs.target_calories.max(0.0);

    let protein_cap_g = kcal * macros.protein_max_energy_share / KCAL_PER_G_PROTEIN;
    let protein_g = (protein_g_per_kg(inputs.direction, inputs.age, macros) * inputs.weight_kg)
        .min(protein_cap_g);

    let remaining_kcal = protein_g.mul_add(-KCAL_PER_G_PROTEIN, kcal).max(0.0);
    let share = carb_share_percent(inputs.sessions_per_week, inputs.intensity, macros) / 100.0;
    let carb_kcal = remaining_kcal * share * (1.0 - inputs.carb_reduction_percent / 100.0);
    let fat_kcal = remaining_kcal - carb_kcal;

    let daily_exercise_minutes = f64::from(inputs.weekly_exercise_minutes) / 7.0;
    let water_ml = hydration.ml_per_kg.mul_add(
        inputs.weight_kg,
        hydration.ml_per_exercise_minute * daily_exercise_minutes,
    ) + inputs.extra_water_ml;

    NutritionTargets {
        macros: MacroTargets {
            protein_g,
            carbs_g: carb_kcal / KCAL_PER_G_CARB,
            fat_g: fat_kcal / KCAL_PER_G_FAT,
        },
        water_ml,
        fiber_g: kcal / 1000.0 * hydration.fiber_g_per_1000_kcal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> NutritionInputs {
        NutritionInputs {
            target_calories: 2000.0,
            weight_kg: 80.0,
            age: 30,
            direction: GoalDirection::Loss,
            sessions_per_week: 4,
            intensity: IntensityLevel::Intermediate,
            carb_reduction_percent: 0.0,
            weekly_exercise_minutes: 210,
            extra_water_ml: 0.0,
        }
    }

    fn energy(macros: &MacroTargets) -> f64 {
        macros.protein_g * 4.0 + macros.carbs_g * 4.0 + macros.fat_g * 9.0
    }

    #[test]
    fn test_macros_preserve_energy() {
        let targets = derive_nutrition_targets(
            &inputs(),
            &MacronutrientConfig::default(),
            &HydrationConfig::default(),
        );
        assert!((targets.macros.protein_g - 160.0).abs() < 1e-9);
        assert!((energy(&targets.macros) - 2000.0).abs() < 1e-6);
        assert!((targets.fiber_g - 28.0).abs() < 1e-9);
        // 35 x 80 + 12 x 30
        assert!((targets.water_ml - 3160.0).abs() < 1e-9);
    }

    #[test]
    fn test_protein_capped_by_energy_share() {
        let mut low = inputs();
        low.target_calories = 1200.0;
        let targets = derive_nutrition_targets(
            &low,
            &MacronutrientConfig::default(),
            &HydrationConfig::default(),
        );
        assert!((targets.macros.protein_g - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_carb_reduction_moves_energy_to_fat() {
        let config = MacronutrientConfig::default();
        let hydration = HydrationConfig::default();
        let baseline = derive_nutrition_targets(&inputs(), &config, &hydration);
        let mut reduced_inputs = inputs();
        reduced_inputs.carb_reduction_percent = 30.0;
        let reduced = derive_nutrition_targets(&reduced_inputs, &config, &hydration);

        assert!((reduced.macros.carbs_g - baseline.macros.carbs_g * 0.7).abs() < 1e-9);
        assert!(reduced.macros.fat_g > baseline.macros.fat_g);
        assert!((energy(&reduced.macros) - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn test_carb_share_bounds() {
        let config = MacronutrientConfig::default();
        assert!((carb_share_percent(6, IntensityLevel::Advanced, &config) - 60.0).abs() < 1e-9);
        assert!((carb_share_percent(2, IntensityLevel::Beginner, &config) - 45.0).abs() < 1e-9);
        assert!(
            (protein_g_per_kg(GoalDirection::Maintain, 55, &config) - 1.8).abs() < 1e-9
        );
    }
}
