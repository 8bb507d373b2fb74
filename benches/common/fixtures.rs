// ABOUTME: Benchmark fixtures generating onboarding profiles across the input domain
// ABOUTME: Provides deterministic profile generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating onboarding profiles.
//!
//! Profiles cycle through sexes, occupations, timelines, and conditions so a
//! batch mixes safe plans, advisory-heavy plans, and blocked plans that
//! trigger alternative generation.

use chrono::NaiveTime;
use fitplan::models::{
    BiologicalSex, DietHabits, EquipmentAccess, FitnessGoal, IntensityLevel, MealSlots,
    MedicalCondition, OccupationType, Profile, StressLevel, WorkoutType,
};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum ProfileBatchSize {
    /// Small batch (10 profiles)
    Small,
    /// Medium batch (100 profiles)
    Medium,
}

impl ProfileBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
        }
    }
}

fn time(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default()
}

/// Safe 10 kg loss over 20 weeks
#[must_use]
pub fn safe_profile() -> Profile {
    Profile {
        age: 30,
        sex: BiologicalSex::Male,
        occupation: OccupationType::Desk,
        height_cm: 180.0,
        current_weight_kg: 80.0,
        target_weight_kg: 70.0,
        timeline_weeks: 20,
        body_fat_percentage: None,
        external_body_fat: None,
        waist_cm: None,
        hip_cm: None,
        chest_cm: None,
        wake_time: time(7),
        sleep_time: time(23),
        stress_level: StressLevel::Low,
        drinks_alcohol: false,
        uses_tobacco: false,
        diet_habits: DietHabits::default(),
        goals: vec![FitnessGoal::LoseWeight],
        medical_conditions: Vec::new(),
        medications: Vec::new(),
        pregnancy_trimester: None,
        breastfeeding: false,
        experience_years: 2.0,
        workout_frequency_per_week: 4,
        session_duration_minutes: 60,
        intensity: IntensityLevel::Intermediate,
        workout_types: vec![WorkoutType::Strength, WorkoutType::Cardio],
        equipment: EquipmentAccess::FullGym,
        pushup_count: None,
        run_endurance_minutes: None,
        meals: MealSlots::default(),
    }
}

/// 20 kg loss in 8 weeks; blocked with alternatives
#[must_use]
pub fn blocked_profile() -> Profile {
    Profile {
        target_weight_kg: 60.0,
        timeline_weeks: 8,
        ..safe_profile()
    }
}

/// Generate a deterministic batch of varied profiles
#[must_use]
pub fn generate_profiles(size: ProfileBatchSize) -> Vec<Profile> {
    let sexes = [BiologicalSex::Male, BiologicalSex::Female, BiologicalSex::Other];
    let occupations = [
        OccupationType::Desk,
        OccupationType::Light,
        OccupationType::Moderate,
        OccupationType::Heavy,
        OccupationType::VeryHeavy,
    ];
    let conditions = [
        None,
        Some(MedicalCondition::Hypothyroidism),
        Some(MedicalCondition::Type2Diabetes),
        Some(MedicalCondition::Hypertension),
    ];

    (0..size.count())
        .map(|index| {
            let current = 60.0 + (index * 7 % 50) as f64;
            let delta = (index * 3 % 25) as f64 - 8.0;
            Profile {
                age: 18 + (index * 11 % 60) as u32,
                sex: sexes[index % sexes.len()],
                occupation: occupations[index % occupations.len()],
                current_weight_kg: current,
                target_weight_kg: current + delta,
                timeline_weeks: 4 + (index * 13 % 60) as u32,
                sleep_time: time(if index % 5 == 0 { 2 } else { 23 }),
                medical_conditions: conditions[index % conditions.len()]
                    .clone()
                    .into_iter()
                    .collect(),
                ..safe_profile()
            }
        })
        .collect()
}
