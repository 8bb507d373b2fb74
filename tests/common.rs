// ABOUTME: Shared test utilities and profile fixtures for integration tests
// ABOUTME: Provides quiet logging setup and the canonical onboarding profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitplan`
//!
//! Every fixture starts from [`baseline_profile`] and changes only the fields
//! that make the scenario interesting.

use std::sync::Once;

use chrono::NaiveTime;
use fitplan::models::{
    BiologicalSex, DietHabits, EquipmentAccess, FitnessGoal, IntensityLevel, MealSlots,
    OccupationType, Profile, StressLevel, Trimester, WorkoutType,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Clock time helper
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// 30-year-old desk worker, 180 cm, 80 kg -> 70 kg in 20 weeks, 4 x 60 min
pub fn baseline_profile() -> Profile {
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
        wake_time: time(7, 0),
        sleep_time: time(23, 0),
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

/// 80 kg -> 60 kg in 8 weeks
pub fn extreme_loss_profile() -> Profile {
    Profile {
        target_weight_kg: 60.0,
        timeline_weeks: 8,
        ..baseline_profile()
    }
}

/// Second-trimester pregnancy with a requested loss
pub fn pregnant_loss_profile() -> Profile {
    Profile {
        sex: BiologicalSex::Female,
        height_cm: 165.0,
        current_weight_kg: 70.0,
        target_weight_kg: 65.0,
        pregnancy_trimester: Some(Trimester::Second),
        ..baseline_profile()
    }
}

/// Goal set with both loss and gain
pub fn conflicting_goals_profile() -> Profile {
    Profile {
        goals: vec![FitnessGoal::LoseWeight, FitnessGoal::GainWeight],
        ..baseline_profile()
    }
}

/// 70 kg -> 74 kg in 20 weeks with a muscle goal
pub fn muscle_gain_profile() -> Profile {
    Profile {
        current_weight_kg: 70.0,
        target_weight_kg: 74.0,
        goals: vec![FitnessGoal::GainMuscle],
        ..baseline_profile()
    }
}
