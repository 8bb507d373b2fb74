// ABOUTME: Energy and nutrition constant tables used by the metric calculator
// ABOUTME: BMR coefficients, occupation multipliers, MET table, macro policy, body fat, readiness, hydration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy and Nutrition Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - MET values: Ainsworth et al. (2011) DOI: 10.1249/MSS.0b013e31821ece12
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
//! - Body fat from BMI: Deurenberg et al. (1991) DOI: 10.1079/BJN19910073
//! - Tissue energy density: Wishnofsky (1958), 7700 kcal/kg

use fitplan_core::constants::physiology::energy::KCAL_PER_KG_TISSUE;
use fitplan_core::models::{BiologicalSex, IntensityLevel, OccupationType, WorkoutType};
use serde::{Deserialize, Serialize};

/// A value with male, female, and other variants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SexSpecific<T> {
    /// Male value
    pub male: T,
    /// Female value
    pub female: T,
    /// Value for sexes outside the binary formula set
    pub other: T,
}

impl<T: Copy> SexSpecific<T> {
    /// Select the value for `sex`
    #[must_use]
    pub const fn get(&self, sex: BiologicalSex) -> T {
        match sex {
            BiologicalSex::Male => self.male,
            BiologicalSex::Female => self.female,
            BiologicalSex::Other => self.other,
        }
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Sex constants: male +5, female -161, other -78 (mean of both)
    pub sex_constant: SexSpecific<f64>,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            sex_constant: SexSpecific {
                male: 5.0,
                female: -161.0,
                other: -78.0,
            },
        }
    }
}

/// Occupation-tier multipliers for base TDEE
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupationFactorsConfig {
    /// Desk-bound: 1.2
    pub desk: f64,
    /// Light movement: 1.375
    pub light: f64,
    /// Moderate movement: 1.55
    pub moderate: f64,
    /// Heavy physical work: 1.725
    pub heavy: f64,
    /// Very physical work: 1.9
    pub very_heavy: f64,
}

impl OccupationFactorsConfig {
    /// Multiplier for an occupation tier
    #[must_use]
    pub const fn factor(&self, occupation: OccupationType) -> f64 {
        match occupation {
            OccupationType::Desk => self.desk,
            OccupationType::Light => self.light,
            OccupationType::Moderate => self.moderate,
            OccupationType::Heavy => self.heavy,
            OccupationType::VeryHeavy => self.very_heavy,
        }
    }
}

impl Default for OccupationFactorsConfig {
    fn default() -> Self {
        Self {
            desk: 1.2,
            light: 1.375,
            moderate: 1.55,
            heavy: 1.725,
            very_heavy: 1.9,
        }
    }
}

/// MET values for one workout category across intensity tiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IntensityMets {
    /// Beginner MET
    pub beginner: f64,
    /// Intermediate MET
    pub intermediate: f64,
    /// Advanced MET
    pub advanced: f64,
}

impl IntensityMets {
    const fn new(beginner: f64, intermediate: f64, advanced: f64) -> Self {
        Self {
            beginner,
            intermediate,
            advanced,
        }
    }

    /// MET for an intensity tier
    #[must_use]
    pub const fn get(&self, intensity: IntensityLevel) -> f64 {
        match intensity {
            IntensityLevel::Beginner => self.beginner,
            IntensityLevel::Intermediate => self.intermediate,
            IntensityLevel::Advanced => self.advanced,
        }
    }

    fn is_ascending(&self) -> bool {
        self.beginner > 0.0 && self.beginner <= self.intermediate && self.intermediate <= self.advanced
    }
}

/// MET table keyed by workout type and intensity tier
///
/// Reference: Ainsworth et al. (2011) Compendium of Physical Activities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseConfig {
    /// Resistance training
    pub strength: IntensityMets,
    /// Steady-state cardio
    pub cardio: IntensityMets,
    /// Interval training
    pub hiit: IntensityMets,
    /// Yoga, pilates, mobility
    pub flexibility: IntensityMets,
    /// Team and racket sports
    pub sports: IntensityMets,
    /// Used when no workout type was selected
    pub general: IntensityMets,
}

impl ExerciseConfig {
    /// MET value for a workout type at an intensity tier
    #[must_use]
    pub const fn met(&self, workout_type: WorkoutType, intensity: IntensityLevel) -> f64 {
        let row = match workout_type {
            WorkoutType::Strength => &self.strength,
            WorkoutType::Cardio => &self.cardio,
            WorkoutType::Hiit => &self.hiit,
            WorkoutType::Flexibility => &self.flexibility,
            WorkoutType::Sports => &self.sports,
        };
        row.get(intensity)
    }

    pub(crate) fn rows_ascending(&self) -> bool {
        [
            &self.strength,
            &self.cardio,
            &self.hiit,
            &self.flexibility,
            &self.sports,
            &self.general,
        ]
        .iter()
        .all(|row| row.is_ascending())
    }
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            strength: IntensityMets::new(3.5, 5.0, 6.0),
            cardio: IntensityMets::new(5.0, 7.0, 9.0),
            hiit: IntensityMets::new(6.0, 8.0, 10.0),
            flexibility: IntensityMets::new(2.5, 3.0, 4.0),
            sports: IntensityMets::new(5.0, 6.5, 8.0),
            general: IntensityMets::new(4.0, 5.0, 6.0),
        }
    }
}

/// Energy balance constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Energy density of mixed body tissue (kcal/kg)
    pub kcal_per_kg_tissue: f64,
    /// Weight difference treated as maintenance (kg)
    pub maintain_tolerance_kg: f64,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg_tissue: KCAL_PER_KG_TISSUE,
            maintain_tolerance_kg: 0.5,
        }
    }
}

/// Macronutrient policy
///
/// References:
/// - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
/// - Older adults: Bauer et al. (2013) PROT-AGE DOI: 10.1016/j.jamda.2013.05.021
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein during weight loss (g/kg): 2.0
    pub protein_loss_g_per_kg: f64,
    /// Protein during weight gain (g/kg): 1.8
    pub protein_gain_g_per_kg: f64,
    /// Protein at maintenance (g/kg): 1.6
    pub protein_maintain_g_per_kg: f64,
    /// Age from which the older-adult bonus applies
    pub older_adult_age: u32,
    /// Extra protein for older adults (g/kg): 0.2
    pub older_adult_bonus_g_per_kg: f64,
    /// Upper bound on protein share of target calories: 0.40
    pub protein_max_energy_share: f64,
    /// Baseline carbohydrate share of non-protein calories (%)
    pub carb_base_percent: f64,
    /// Weekly sessions from which the frequency bonus applies
    pub high_frequency_sessions: u32,
    /// Carb share bonus for high training frequency (%)
    pub high_frequency_bonus_percent: f64,
    /// Carb share bonus for advanced intensity (%)
    pub advanced_bonus_percent: f64,
    /// Carb share penalty for beginner intensity (%)
    pub beginner_penalty_percent: f64,
    /// Minimum carb share (%)
    pub carb_min_percent: f64,
    /// Maximum carb share (%)
    pub carb_max_percent: f64,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_loss_g_per_kg: 2.0,
            protein_gain_g_per_kg: 1.8,
            protein_maintain_g_per_kg: 1.6,
            older_adult_age: 50,
            older_adult_bonus_g_per_kg: 0.2,
            protein_max_energy_share: 0.40,
            carb_base_percent: 50.0,
            high_frequency_sessions: 5,
            high_frequency_bonus_percent: 5.0,
            advanced_bonus_percent: 5.0,
            beginner_penalty_percent: 5.0,
            carb_min_percent: 40.0,
            carb_max_percent: 65.0,
        }
    }
}

/// Body-fat resolution policy
///
/// Reference: Deurenberg, P., Weststrate, J.A., & Seidell, J.C. (1991). Body mass index as a
/// measure of body fatness. British Journal of Nutrition, 65(2), 105-114.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyFatConfig {
    /// Minimum confidence for an external estimate to be used
    pub external_confidence_threshold: f64,
    /// Deurenberg BMI coefficient (1.20)
    pub deurenberg_bmi_coef: f64,
    /// Deurenberg age coefficient (0.23)
    pub deurenberg_age_coef: f64,
    /// Deurenberg sex coefficient (10.8)
    pub deurenberg_sex_coef: f64,
    /// Deurenberg constant (5.4)
    pub deurenberg_constant: f64,
    /// Sex factor in the Deurenberg formula (male 1, female 0, other 0.5)
    pub deurenberg_sex_factor: SexSpecific<f64>,
    /// Minimum age for the formula (validated on adults only)
    pub formula_min_age: u32,
    /// Formula results below this are discarded
    pub formula_min_percent: f64,
    /// Formula results above this are discarded
    pub formula_max_percent: f64,
    /// Conservative default when nothing else is available
    pub default_percent: SexSpecific<f64>,
}

impl Default for BodyFatConfig {
    fn default() -> Self {
        Self {
            external_confidence_threshold: 0.7,
            deurenberg_bmi_coef: 1.20,
            deurenberg_age_coef: 0.23,
            deurenberg_sex_coef: 10.8,
            deurenberg_constant: 5.4,
            deurenberg_sex_factor: SexSpecific {
                male: 1.0,
                female: 0.0,
                other: 0.5,
            },
            formula_min_age: 18,
            formula_min_percent: 3.0,
            formula_max_percent: 60.0,
            default_percent: SexSpecific {
                male: 20.0,
                female: 28.0,
                other: 24.0,
            },
        }
    }
}

/// Diet-readiness habit weights
///
/// Positive habits add to the raw score and negative habits subtract; the raw
/// range is renormalized to 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Drinks adequate water
    pub drinks_enough_water: f64,
    /// Vegetables daily
    pub eats_vegetables_daily: f64,
    /// Home-cooked food
    pub eats_home_cooked: f64,
    /// Regular meal times
    pub regular_meal_times: f64,
    /// Tracks food
    pub tracks_food: f64,
    /// Protein every meal
    pub protein_every_meal: f64,
    /// Whole grains
    pub eats_whole_grains: f64,
    /// Limits sugary drinks
    pub limits_sugary_drinks: f64,
    /// Plans meals
    pub plans_meals: f64,
    /// Mindful eating
    pub mindful_eating: f64,
    /// Frequent fast food (penalty)
    pub frequent_fast_food: f64,
    /// Late-night snacking (penalty)
    pub late_night_snacking: f64,
    /// Skips meals (penalty)
    pub skips_meals: f64,
    /// Emotional eating (penalty)
    pub emotional_eating: f64,
}

impl ReadinessConfig {
    /// Theoretical minimum raw score (all penalties, no positives)
    #[must_use]
    pub fn raw_min(&self) -> f64 {
        -(self.frequent_fast_food
            + self.late_night_snacking
            + self.skips_meals
            + self.emotional_eating)
    }

    /// Theoretical maximum raw score (all positives, no penalties)
    #[must_use]
    pub fn raw_max(&self) -> f64 {
        self.drinks_enough_water
            + self.eats_vegetables_daily
            + self.eats_home_cooked
            + self.regular_meal_times
            + self.tracks_food
            + self.protein_every_meal
            + self.eats_whole_grains
            + self.limits_sugary_drinks
            + self.plans_meals
            + self.mindful_eating
    }
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            drinks_enough_water: 15.0,
            eats_vegetables_daily: 20.0,
            eats_home_cooked: 15.0,
            regular_meal_times: 15.0,
            tracks_food: 15.0,
            protein_every_meal: 20.0,
            eats_whole_grains: 10.0,
            limits_sugary_drinks: 15.0,
            plans_meals: 15.0,
            mindful_eating: 15.0,
            frequent_fast_food: 15.0,
            late_night_snacking: 10.0,
            skips_meals: 10.0,
            emotional_eating: 10.0,
        }
    }
}

/// Hydration and fiber targets
///
/// References:
/// - EFSA (2010) Dietary reference values for water DOI: 10.2903/j.efsa.2010.1459
/// - IOM (2005) Dietary fiber: 14 g per 1000 kcal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Baseline water (ml per kg body weight)
    pub ml_per_kg: f64,
    /// Additional water per daily-average exercise minute (ml)
    pub ml_per_exercise_minute: f64,
    /// Additional water during pregnancy (ml)
    pub pregnancy_ml: f64,
    /// Additional water while breastfeeding (ml)
    pub breastfeeding_ml: f64,
    /// Fiber per 1000 kcal of target calories (g)
    pub fiber_g_per_1000_kcal: f64,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            ml_per_kg: 35.0,
            ml_per_exercise_minute: 12.0,
            pregnancy_ml: 300.0,
            breastfeeding_ml: 700.0,
            fiber_g_per_1000_kcal: 14.0,
        }
    }
}
