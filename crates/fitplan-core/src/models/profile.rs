// ABOUTME: Onboarding profile model consumed by the metric calculator and validators
// ABOUTME: Demographics, body, lifestyle, goals, medical, workout capability, and meal flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile
//!
//! The profile is produced by the onboarding layer and handed to the engine by
//! value. The type deliberately permits states the engine will reject (all
//! meals disabled, conflicting goals) so that validation can explain *why* a
//! plan is not viable. Only numeric domain violations are faults; see
//! [`Profile::check_domain`].

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::constants::limits;
use crate::constants::physiology::time::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::errors::{AppError, AppResult};

/// Biological sex category used by sex-specific formulas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    /// Male formula set
    Male,
    /// Female formula set
    Female,
    /// Outside the binary formula set; formulas use the mean of both
    Other,
}

/// Occupation-derived baseline activity tier
///
/// This is the *only* source of the non-exercise activity multiplier.
/// A separately reported "activity level" is treated as an alias of this tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OccupationType {
    /// Desk-bound work, little daily movement
    Desk,
    /// Light movement (teaching, retail)
    Light,
    /// Moderate movement (nursing, hospitality)
    Moderate,
    /// Heavy physical work (construction, warehouse)
    Heavy,
    /// Very physical work (agriculture, forestry)
    VeryHeavy,
}

/// Self-reported stress tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    /// Low stress
    Low,
    /// Moderate stress
    Moderate,
    /// High stress
    High,
}

/// Fitness goal selected during onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Reduce body weight
    LoseWeight,
    /// Build muscle mass
    GainMuscle,
    /// Increase body weight
    GainWeight,
    /// Improve maximal strength
    ImproveStrength,
    /// Improve aerobic endurance
    ImproveEndurance,
    /// Improve flexibility and mobility
    ImproveFlexibility,
}

/// Family a medical condition belongs to for metabolic adjustment purposes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConditionClass {
    /// Thyroid disorders (direct metabolic-rate effect)
    Thyroid,
    /// Insulin-resistance disorders (carbohydrate handling)
    InsulinResistance,
    /// Cardiovascular caution flags (intensity caution)
    Cardiovascular,
}

impl ConditionClass {
    /// Parse from the configuration string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "thyroid" => Some(Self::Thyroid),
            "insulin_resistance" | "insulinresistance" => Some(Self::InsulinResistance),
            "cardiovascular" => Some(Self::Cardiovascular),
            _ => None,
        }
    }

    /// Configuration string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Thyroid => "thyroid",
            Self::InsulinResistance => "insulin_resistance",
            Self::Cardiovascular => "cardiovascular",
        }
    }
}

/// Medical condition reported during onboarding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MedicalCondition {
    /// Underactive thyroid
    Hypothyroidism,
    /// Overactive thyroid
    Hyperthyroidism,
    /// Polycystic ovary syndrome
    Pcos,
    /// Type 1 diabetes
    Type1Diabetes,
    /// Type 2 diabetes
    Type2Diabetes,
    /// Prediabetes
    Prediabetes,
    /// Diagnosed insulin resistance
    InsulinResistance,
    /// High blood pressure
    Hypertension,
    /// Coronary or structural heart disease
    HeartDisease,
    /// Elevated cholesterol
    HighCholesterol,
    /// Arthritis
    Arthritis,
    /// Chronic back pain
    BackPain,
    /// Current or past joint injury
    JointInjury,
    /// Asthma
    Asthma,
    /// Free-text condition
    Other(String),
}

impl MedicalCondition {
    /// Metabolic family of this condition, if it qualifies for an adjustment
    #[must_use]
    pub const fn class(&self) -> Option<ConditionClass> {
        match self {
            Self::Hypothyroidism | Self::Hyperthyroidism => Some(ConditionClass::Thyroid),
            Self::Pcos | Self::Type2Diabetes | Self::Prediabetes | Self::InsulinResistance => {
                Some(ConditionClass::InsulinResistance)
            }
            Self::Hypertension | Self::HeartDisease | Self::HighCholesterol => {
                Some(ConditionClass::Cardiovascular)
            }
            _ => None,
        }
    }

    /// Whether the condition limits high-impact or high-intensity training
    #[must_use]
    pub const fn is_physical_limitation(&self) -> bool {
        matches!(self, Self::Arthritis | Self::BackPain | Self::JointInjury)
    }

    /// Display label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Hypothyroidism => "hypothyroidism".to_owned(),
            Self::Hyperthyroidism => "hyperthyroidism".to_owned(),
            Self::Pcos => "PCOS".to_owned(),
            Self::Type1Diabetes => "type 1 diabetes".to_owned(),
            Self::Type2Diabetes => "type 2 diabetes".to_owned(),
            Self::Prediabetes => "prediabetes".to_owned(),
            Self::InsulinResistance => "insulin resistance".to_owned(),
            Self::Hypertension => "hypertension".to_owned(),
            Self::HeartDisease => "heart disease".to_owned(),
            Self::HighCholesterol => "high cholesterol".to_owned(),
            Self::Arthritis => "arthritis".to_owned(),
            Self::BackPain => "back pain".to_owned(),
            Self::JointInjury => "joint injury".to_owned(),
            Self::Asthma => "asthma".to_owned(),
            Self::Other(name) => name.clone(),
        }
    }
}

/// Pregnancy trimester
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Trimester {
    /// Weeks 1-13
    First,
    /// Weeks 14-27
    Second,
    /// Weeks 28-40
    Third,
}

/// Self-reported training intensity tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    /// New to structured training
    Beginner,
    /// Regular trainee
    Intermediate,
    /// Experienced, high-intensity trainee
    Advanced,
}

/// Workout type category used by the MET table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Resistance training
    Strength,
    /// Steady-state cardio
    Cardio,
    /// High-intensity interval training
    Hiit,
    /// Yoga, pilates, mobility
    Flexibility,
    /// Team and racket sports
    Sports,
}

/// Training equipment available to the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentAccess {
    /// No equipment
    BodyweightOnly,
    /// Dumbbells, bands, a bench
    HomeBasic,
    /// Full commercial gym
    FullGym,
}

/// Externally supplied body-fat estimate (e.g. photographic analysis)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyFatEstimate {
    /// Estimated body fat percentage
    pub percentage: f64,
    /// Estimator confidence (0-1)
    pub confidence: f64,
}

/// Diet habit flags feeding the diet-readiness score
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct DietHabits {
    /// Drinks adequate water daily
    pub drinks_enough_water: bool,
    /// Eats vegetables daily
    pub eats_vegetables_daily: bool,
    /// Mostly eats home-cooked food
    pub eats_home_cooked: bool,
    /// Keeps regular meal times
    pub regular_meal_times: bool,
    /// Tracks food intake
    pub tracks_food: bool,
    /// Includes protein at every meal
    pub protein_every_meal: bool,
    /// Prefers whole grains
    pub eats_whole_grains: bool,
    /// Limits sugary drinks
    pub limits_sugary_drinks: bool,
    /// Plans meals ahead
    pub plans_meals: bool,
    /// Practices mindful eating
    pub mindful_eating: bool,
    /// Eats fast food frequently
    pub frequent_fast_food: bool,
    /// Snacks late at night
    pub late_night_snacking: bool,
    /// Regularly skips meals
    pub skips_meals: bool,
    /// Eats in response to emotions
    pub emotional_eating: bool,
}

/// Which meal slots the plan may use
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MealSlots {
    /// Breakfast enabled
    pub breakfast: bool,
    /// Lunch enabled
    pub lunch: bool,
    /// Dinner enabled
    pub dinner: bool,
    /// Snacks enabled
    pub snacks: bool,
}

impl Default for MealSlots {
    fn default() -> Self {
        Self {
            breakfast: true,
            lunch: true,
            dinner: true,
            snacks: true,
        }
    }
}

impl MealSlots {
    /// Number of enabled meal slots
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        [self.breakfast, self.lunch, self.dinner, self.snacks]
            .into_iter()
            .filter(|enabled| *enabled)
            .count()
    }
}

/// Onboarding profile (immutable per computation)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    // Demographics
    /// Age in years
    pub age: u32,
    /// Biological sex category
    pub sex: BiologicalSex,
    /// Occupation-derived activity tier
    pub occupation: OccupationType,

    // Body
    /// Height in centimeters
    pub height_cm: f64,
    /// Current body weight in kilograms
    pub current_weight_kg: f64,
    /// Target body weight in kilograms
    pub target_weight_kg: f64,
    /// Requested timeline in weeks
    pub timeline_weeks: u32,
    /// User-entered body fat percentage
    #[serde(default)]
    pub body_fat_percentage: Option<f64>,
    /// Externally supplied body-fat estimate
    #[serde(default)]
    pub external_body_fat: Option<BodyFatEstimate>,
    /// Waist circumference (cm)
    #[serde(default)]
    pub waist_cm: Option<f64>,
    /// Hip circumference (cm)
    #[serde(default)]
    pub hip_cm: Option<f64>,
    /// Chest circumference (cm)
    #[serde(default)]
    pub chest_cm: Option<f64>,

    // Lifestyle
    /// Usual wake time
    pub wake_time: NaiveTime,
    /// Usual sleep time
    pub sleep_time: NaiveTime,
    /// Stress tier
    pub stress_level: StressLevel,
    /// Drinks alcohol regularly
    #[serde(default)]
    pub drinks_alcohol: bool,
    /// Uses tobacco
    #[serde(default)]
    pub uses_tobacco: bool,
    /// Diet habit flags
    #[serde(default)]
    pub diet_habits: DietHabits,

    // Goals
    /// Selected goals
    pub goals: Vec<FitnessGoal>,

    // Medical
    /// Reported conditions
    #[serde(default)]
    pub medical_conditions: Vec<MedicalCondition>,
    /// Reported medications (free text)
    #[serde(default)]
    pub medications: Vec<String>,
    /// Current pregnancy trimester, if pregnant
    #[serde(default)]
    pub pregnancy_trimester: Option<Trimester>,
    /// Currently breastfeeding
    #[serde(default)]
    pub breastfeeding: bool,

    // Workout capability
    /// Years of structured training
    pub experience_years: f64,
    /// Planned sessions per week
    pub workout_frequency_per_week: u32,
    /// Planned minutes per session
    pub session_duration_minutes: u32,
    /// Self-reported intensity tier
    pub intensity: IntensityLevel,
    /// Preferred workout types
    #[serde(default)]
    pub workout_types: Vec<WorkoutType>,
    /// Available equipment
    pub equipment: EquipmentAccess,
    /// Max consecutive push-ups
    #[serde(default)]
    pub pushup_count: Option<u32>,
    /// Minutes of continuous running
    #[serde(default)]
    pub run_endurance_minutes: Option<u32>,

    // Meals
    /// Enabled meal slots
    #[serde(default)]
    pub meals: MealSlots,
}

impl Profile {
    /// Whether the goal set contains `goal`
    #[must_use]
    pub fn has_goal(&self, goal: FitnessGoal) -> bool {
        self.goals.contains(&goal)
    }

    /// Whether the user is pregnant or breastfeeding
    #[must_use]
    pub const fn is_pregnant_or_lactating(&self) -> bool {
        self.pregnancy_trimester.is_some() || self.breastfeeding
    }

    /// Nightly sleep duration derived from sleep and wake times (wraps midnight)
    #[must_use]
    pub fn sleep_hours(&self) -> f64 {
        let mut minutes = self
            .wake_time
            .signed_duration_since(self.sleep_time)
            .num_minutes();
        if minutes < 0 {
            minutes += MINUTES_PER_DAY;
        }
        minutes as f64 / MINUTES_PER_HOUR
    }

    /// Planned training minutes per week
    #[must_use]
    pub const fn weekly_exercise_minutes(&self) -> u32 {
        self.workout_frequency_per_week
            .saturating_mul(self.session_duration_minutes)
    }

    /// Signed weight change requested (target - current), in kg
    #[must_use]
    pub fn weight_delta_kg(&self) -> f64 {
        self.target_weight_kg - self.current_weight_kg
    }

    /// Reject fields outside their declared numeric domain
    ///
    /// Structural completeness is the input layer's concern; this only checks
    /// that every numeric field is finite and within bounds so a caller can tell
    /// "your input is malformed" apart from "your plan is unsafe".
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` naming the first offending field
    pub fn check_domain(&self) -> AppResult<()> {
        check_range("age", f64::from(self.age), limits::AGE_YEARS)?;
        check_range("height_cm", self.height_cm, limits::HEIGHT_CM)?;
        check_range("current_weight_kg", self.current_weight_kg, limits::WEIGHT_KG)?;
        check_range("target_weight_kg", self.target_weight_kg, limits::WEIGHT_KG)?;
        check_range(
            "timeline_weeks",
            f64::from(self.timeline_weeks),
            limits::TIMELINE_WEEKS,
        )?;
        check_optional(
            "body_fat_percentage",
            self.body_fat_percentage,
            limits::BODY_FAT_PERCENT,
        )?;
        if let Some(estimate) = self.external_body_fat {
            check_range(
                "external_body_fat.percentage",
                estimate.percentage,
                limits::BODY_FAT_PERCENT,
            )?;
            check_range(
                "external_body_fat.confidence",
                estimate.confidence,
                limits::CONFIDENCE,
            )?;
        }
        check_optional("waist_cm", self.waist_cm, limits::CIRCUMFERENCE_CM)?;
        check_optional("hip_cm", self.hip_cm, limits::CIRCUMFERENCE_CM)?;
        check_optional("chest_cm", self.chest_cm, limits::CIRCUMFERENCE_CM)?;
        check_range(
            "experience_years",
            self.experience_years,
            limits::EXPERIENCE_YEARS,
        )?;
        check_range(
            "workout_frequency_per_week",
            f64::from(self.workout_frequency_per_week),
            limits::SESSIONS_PER_WEEK,
        )?;
        check_range(
            "session_duration_minutes",
            f64::from(self.session_duration_minutes),
            limits::SESSION_MINUTES,
        )?;
        Ok(())
    }
}

fn check_range(field: &str, value: f64, (min, max): (f64, f64)) -> AppResult<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(field, value, min, max))
    }
}

fn check_optional(field: &str, value: Option<f64>, bounds: (f64, f64)) -> AppResult<()> {
    value.map_or(Ok(()), |v| check_range(field, v, bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn profile() -> Profile {
        Profile {
            age: 30,
            sex: BiologicalSex::Male,
            occupation: OccupationType::Desk,
            height_cm: 180.0,
            current_weight_kg: 80.0,
            target_weight_kg: 75.0,
            timeline_weeks: 12,
            body_fat_percentage: None,
            external_body_fat: None,
            waist_cm: None,
            hip_cm: None,
            chest_cm: None,
            wake_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            sleep_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            stress_level: StressLevel::Low,
            drinks_alcohol: false,
            uses_tobacco: false,
            diet_habits: DietHabits::default(),
            goals: vec![FitnessGoal::LoseWeight],
            medical_conditions: Vec::new(),
            medications: Vec::new(),
            pregnancy_trimester: None,
            breastfeeding: false,
            experience_years: 1.0,
            workout_frequency_per_week: 3,
            session_duration_minutes: 45,
            intensity: IntensityLevel::Intermediate,
            workout_types: vec![WorkoutType::Strength],
            equipment: EquipmentAccess::FullGym,
            pushup_count: None,
            run_endurance_minutes: None,
            meals: MealSlots::default(),
        }
    }

    #[test]
    fn test_sleep_hours_wraps_midnight() {
        let p = profile();
        assert!((p.sleep_hours() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sleep_hours_same_day() {
        let mut p = profile();
        p.sleep_time = NaiveTime::from_hms_opt(1, 30, 0).unwrap();
        p.wake_time = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
        assert!((p.sleep_hours() - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_domain_accepts_baseline() {
        assert!(profile().check_domain().is_ok());
    }

    #[test]
    fn test_domain_rejects_negative_weight() {
        let mut p = profile();
        p.current_weight_kg = -5.0;
        let error = p.check_domain().unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.field(), Some("current_weight_kg"));
    }

    #[test]
    fn test_domain_rejects_nan_and_long_timeline() {
        let mut p = profile();
        p.height_cm = f64::NAN;
        assert_eq!(p.check_domain().unwrap_err().field(), Some("height_cm"));

        let mut p = profile();
        p.timeline_weeks = 105;
        assert_eq!(p.check_domain().unwrap_err().field(), Some("timeline_weeks"));
    }

    #[test]
    fn test_condition_classes() {
        assert_eq!(
            MedicalCondition::Pcos.class(),
            Some(ConditionClass::InsulinResistance)
        );
        assert_eq!(MedicalCondition::Asthma.class(), None);
        assert!(MedicalCondition::JointInjury.is_physical_limitation());
        assert_eq!(
            ConditionClass::parse(" Insulin_Resistance "),
            Some(ConditionClass::InsulinResistance)
        );
    }

    #[test]
    fn test_meal_slots_count() {
        let mut slots = MealSlots::default();
        assert_eq!(slots.enabled_count(), 4);
        slots.snacks = false;
        slots.breakfast = false;
        assert_eq!(slots.enabled_count(), 2);
    }
}
