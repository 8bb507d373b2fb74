// ABOUTME: Core data models for the fitplan engine
// ABOUTME: Re-exports the onboarding profile and its categorical field types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Onboarding profile and categorical field enums
pub mod profile;

pub use profile::{
    BiologicalSex, BodyFatEstimate, ConditionClass, DietHabits, EquipmentAccess, FitnessGoal,
    IntensityLevel, MealSlots, MedicalCondition, OccupationType, Profile, StressLevel, Trimester,
    WorkoutType,
};
