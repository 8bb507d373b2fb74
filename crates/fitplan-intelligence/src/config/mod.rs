// ABOUTME: Engine configuration root grouping every constant table used by the pipeline
// ABOUTME: Provides defaults, FITPLAN_* environment overrides, validation, and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Every formula constant, multiplier table, and threshold the engine uses lives
//! here. The tables are read-only for the lifetime of the process; callers may
//! either use the process-wide [`EngineConfig::global`] instance or pass an
//! explicit configuration (tests do the latter to stay hermetic).
//!
//! # Module Structure
//!
//! - `energy` - BMR, occupation multipliers, MET table, macros, body fat, readiness, hydration
//! - `policy` - modifier policy, rate bands, safety thresholds, alternative generation
//! - `error` - configuration validation errors

pub mod energy;
pub mod error;
pub mod policy;

pub use energy::{
    BmrConfig, BodyFatConfig, EnergyConfig, ExerciseConfig, HydrationConfig, IntensityMets,
    MacronutrientConfig, OccupationFactorsConfig, ReadinessConfig, SexSpecific,
};
pub use error::ConfigError;
pub use policy::{
    AgeBand, AlternativesConfig, ModifierConfig, MuscleGainConfig, RateBand, RateConfig,
    SafetyConfig,
};

use std::collections::HashSet;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use fitplan_core::models::ConditionClass;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Occupation multipliers for base TDEE
    pub occupation_factors: OccupationFactorsConfig,
    /// MET table for exercise expenditure
    pub exercise: ExerciseConfig,
    /// Energy balance constants
    pub energy: EnergyConfig,
    /// Macronutrient split policy
    pub macronutrients: MacronutrientConfig,
    /// Body-fat resolution policy
    pub body_fat: BodyFatConfig,
    /// Diet-readiness habit weights
    pub readiness: ReadinessConfig,
    /// Water and fiber targets
    pub hydration: HydrationConfig,
    /// Modifier pipeline policy
    pub modifiers: ModifierConfig,
    /// Weekly rate bands
    pub rates: RateConfig,
    /// Validation thresholds
    pub safety: SafetyConfig,
    /// Alternative generation parameters
    pub alternatives: AlternativesConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!("Engine configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        // BMR coefficients
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        // Occupation multipliers
        let factors = &self.occupation_factors;
        if factors.desk < 1.0 || factors.very_heavy > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Occupation factors must be between 1.0 and 2.5",
            ));
        }
        if factors.desk >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.heavy
            || factors.heavy >= factors.very_heavy
        {
            return Err(ConfigError::InvalidRange(
                "Occupation factors must be in ascending order",
            ));
        }

        if !self.exercise.rows_ascending() {
            return Err(ConfigError::InvalidRange(
                "MET values must be positive and ascend with intensity",
            ));
        }

        if self.energy.kcal_per_kg_tissue <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "kcal_per_kg_tissue must be positive",
            ));
        }

        self.validate_nutrition()?;
        self.validate_modifiers()?;
        self.validate_rates()?;
        self.validate_alternatives()?;

        Ok(())
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let macros = &self.macronutrients;
        for g_per_kg in [
            macros.protein_loss_g_per_kg,
            macros.protein_gain_g_per_kg,
            macros.protein_maintain_g_per_kg,
        ] {
            if !(0.5..=3.0).contains(&g_per_kg) {
                return Err(ConfigError::ValueOutOfRange(
                    "Protein recommendations must be between 0.5 and 3.0 g/kg",
                ));
            }
        }
        if !(0.0..=1.0).contains(&macros.protein_max_energy_share) {
            return Err(ConfigError::ValueOutOfRange(
                "protein_max_energy_share must be within 0-1",
            ));
        }
        if macros.carb_min_percent >= macros.carb_max_percent
            || macros.carb_min_percent < 0.0
            || macros.carb_max_percent > 100.0
        {
            return Err(ConfigError::InvalidRange(
                "carb_min_percent must be < carb_max_percent within 0-100",
            ));
        }

        let body_fat = &self.body_fat;
        if !(0.0..=1.0).contains(&body_fat.external_confidence_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "external_confidence_threshold must be within 0-1",
            ));
        }
        if body_fat.formula_min_percent >= body_fat.formula_max_percent {
            return Err(ConfigError::InvalidRange(
                "formula_min_percent must be < formula_max_percent",
            ));
        }

        if self.readiness.raw_max() <= self.readiness.raw_min() {
            return Err(ConfigError::InvalidWeights(
                "Readiness positive weights must outweigh penalties",
            ));
        }

        Ok(())
    }

    fn validate_modifiers(&self) -> Result<(), ConfigError> {
        let modifiers = &self.modifiers;

        if modifiers.condition_priority.is_empty() {
            return Err(ConfigError::MissingField("condition_priority"));
        }
        let unique: HashSet<ConditionClass> =
            modifiers.condition_priority.iter().copied().collect();
        if unique.len() != modifiers.condition_priority.len() {
            return Err(ConfigError::InvalidRange(
                "condition_priority must not contain duplicates",
            ));
        }

        for cap in [
            modifiers.max_tdee_adjustment_percent,
            modifiers.max_carb_reduction_percent,
            modifiers.max_timeline_penalty_percent,
        ] {
            if !(0.0..=50.0).contains(&cap) {
                return Err(ConfigError::ValueOutOfRange(
                    "Modifier caps must be within 0-50%",
                ));
            }
        }

        if modifiers
            .age_bands
            .windows(2)
            .any(|pair| pair[0].min_age >= pair[1].min_age)
        {
            return Err(ConfigError::InvalidRange(
                "age_bands must be ascending by min_age",
            ));
        }

        Ok(())
    }

    fn validate_rates(&self) -> Result<(), ConfigError> {
        if !self.rates.loss.is_ordered() {
            return Err(ConfigError::InvalidRange(
                "loss rates must satisfy 0 < optimal < aggressive < extreme",
            ));
        }
        if !self.rates.gain.is_ordered() {
            return Err(ConfigError::InvalidRange(
                "gain rates must satisfy 0 < optimal < aggressive < extreme",
            ));
        }

        let safety = &self.safety;
        if safety.severe_sleep_hours >= safety.recommended_sleep_hours {
            return Err(ConfigError::InvalidRange(
                "severe_sleep_hours must be < recommended_sleep_hours",
            ));
        }
        if safety.high_weekly_training_minutes >= safety.max_weekly_training_minutes {
            return Err(ConfigError::InvalidRange(
                "high_weekly_training_minutes must be < max_weekly_training_minutes",
            ));
        }
        if safety.perimenopause_ages.0 > safety.perimenopause_ages.1 {
            return Err(ConfigError::InvalidRange(
                "perimenopause age window must be ordered",
            ));
        }
        Ok(())
    }

    fn validate_alternatives(&self) -> Result<(), ConfigError> {
        let alternatives = &self.alternatives;
        if !(0.0..=1.0).contains(&alternatives.headroom_fraction) {
            return Err(ConfigError::ValueOutOfRange(
                "headroom_fraction must be within 0-1",
            ));
        }
        if !(0.0..=1.0).contains(&alternatives.increase_exercise_share)
            || !(0.0..=1.0).contains(&alternatives.balanced_exercise_share)
        {
            return Err(ConfigError::InvalidWeights(
                "Exercise shares must be within 0-1",
            ));
        }
        if alternatives.target_rounding_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "target_rounding_kg must be positive",
            ));
        }
        if alternatives.max_sessions_per_week == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_sessions_per_week must be at least 1",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Parse a comma-separated condition priority list
    fn parse_condition_priority(value: &str) -> Result<Vec<ConditionClass>, ConfigError> {
        value
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| {
                ConditionClass::parse(part).ok_or_else(|| {
                    ConfigError::Parse(format!(
                        "Invalid FITPLAN_CONDITION_PRIORITY entry: {}",
                        part.trim()
                    ))
                })
            })
            .collect()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Energy balance
        Self::apply_env_var(
            "FITPLAN_KCAL_PER_KG_TISSUE",
            &mut self.energy.kcal_per_kg_tissue,
        )?;
        Self::apply_env_var(
            "FITPLAN_MAINTAIN_TOLERANCE_KG",
            &mut self.energy.maintain_tolerance_kg,
        )?;

        // Rate bands
        Self::apply_env_var(
            "FITPLAN_LOSS_OPTIMAL_RATE",
            &mut self.rates.loss.optimal_percent,
        )?;
        Self::apply_env_var(
            "FITPLAN_LOSS_AGGRESSIVE_RATE",
            &mut self.rates.loss.aggressive_percent,
        )?;
        Self::apply_env_var(
            "FITPLAN_LOSS_EXTREME_RATE",
            &mut self.rates.loss.extreme_percent,
        )?;
        Self::apply_env_var(
            "FITPLAN_GAIN_OPTIMAL_RATE",
            &mut self.rates.gain.optimal_percent,
        )?;
        Self::apply_env_var(
            "FITPLAN_GAIN_AGGRESSIVE_RATE",
            &mut self.rates.gain.aggressive_percent,
        )?;
        Self::apply_env_var(
            "FITPLAN_GAIN_EXTREME_RATE",
            &mut self.rates.gain.extreme_percent,
        )?;

        // Modifier caps
        Self::apply_env_var(
            "FITPLAN_MAX_TDEE_ADJUSTMENT",
            &mut self.modifiers.max_tdee_adjustment_percent,
        )?;
        Self::apply_env_var(
            "FITPLAN_MAX_CARB_REDUCTION",
            &mut self.modifiers.max_carb_reduction_percent,
        )?;
        if let Ok(value) = env::var("FITPLAN_CONDITION_PRIORITY") {
            self.modifiers.condition_priority = Self::parse_condition_priority(&value)?;
        }

        // Body fat
        Self::apply_env_var(
            "FITPLAN_BODY_FAT_CONFIDENCE_THRESHOLD",
            &mut self.body_fat.external_confidence_threshold,
        )?;

        // Safety thresholds
        Self::apply_env_var(
            "FITPLAN_MAX_WEEKLY_TRAINING_MINUTES",
            &mut self.safety.max_weekly_training_minutes,
        )?;
        Self::apply_env_var(
            "FITPLAN_MIN_WEEKLY_EXERCISE_MINUTES",
            &mut self.safety.minimum_weekly_exercise_minutes,
        )?;
        Self::apply_env_var(
            "FITPLAN_UNDERWEIGHT_BMI",
            &mut self.safety.underweight_bmi,
        )?;

        // Alternatives
        Self::apply_env_var(
            "FITPLAN_HEADROOM_FRACTION",
            &mut self.alternatives.headroom_fraction,
        )?;
        Self::apply_env_var(
            "FITPLAN_MAX_ALTERNATIVES",
            &mut self.alternatives.max_alternatives,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_readiness_range_matches_documented_bounds() {
        let readiness = ReadinessConfig::default();
        assert!((readiness.raw_min() + 45.0).abs() < f64::EPSILON);
        assert!((readiness.raw_max() - 155.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unordered_rates_rejected() {
        let mut config = EngineConfig::default();
        config.rates.loss.aggressive_percent = 2.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_duplicate_priority_rejected() {
        let mut config = EngineConfig::default();
        config.modifiers.condition_priority =
            vec![ConditionClass::Thyroid, ConditionClass::Thyroid];
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_env_override_priority() {
        env::set_var(
            "FITPLAN_CONDITION_PRIORITY",
            "insulin_resistance,thyroid,cardiovascular",
        );
        let config = EngineConfig::load();
        env::remove_var("FITPLAN_CONDITION_PRIORITY");

        let config = config.unwrap();
        assert_eq!(
            config.modifiers.condition_priority[0],
            ConditionClass::InsulinResistance
        );
    }

    #[test]
    #[serial]
    fn test_env_override_parse_error() {
        env::set_var("FITPLAN_LOSS_EXTREME_RATE", "fast");
        let result = EngineConfig::load();
        env::remove_var("FITPLAN_LOSS_EXTREME_RATE");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
