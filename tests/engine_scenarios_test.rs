// ABOUTME: End-to-end scenarios for the PlanEngine facade
// ABOUTME: Safe loss, extreme timeline, pregnancy, goal conflict, and engine-wide properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    baseline_profile, conflicting_goals_profile, extreme_loss_profile, init_test_logging,
    pregnant_loss_profile,
};
use fitplan::engine::PlanEngine;
use fitplan::errors::ErrorCode;
use fitplan::alternatives::ProfileField;
use fitplan::models::{BiologicalSex, FitnessGoal, MedicalCondition, Profile};
use fitplan::{AlternativeStrategy, EngineConfig, FindingCode, GoalDirection};

fn engine() -> PlanEngine {
    init_test_logging();
    PlanEngine::new(EngineConfig::default())
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_safe_loss_proceeds() {
    let result = engine().evaluate(&baseline_profile()).unwrap();

    assert!(result.may_proceed);
    assert!(result.blocking.is_empty());
    assert!(result.alternatives.is_empty());
    assert_eq!(result.metrics.goal_direction, GoalDirection::Loss);
    assert!((result.metrics.weekly_rate_kg + 0.5).abs() < 1e-9);
    assert!((result.metrics.bmr - 1780.0).abs() < 1e-9);
}

#[test]
fn test_extreme_timeline_blocks_with_alternatives() {
    let result = engine().evaluate(&extreme_loss_profile()).unwrap();

    assert!(!result.may_proceed);
    assert!(result.has_code(FindingCode::ExtremeRate));
    assert!(result.advisory.is_empty());
    assert_eq!(
        result.blocking_codes(),
        vec![
            FindingCode::TargetBelowBmr,
            FindingCode::TargetBelowCalorieFloor,
            FindingCode::ExtremeRate,
        ]
    );

    assert!(!result.alternatives.is_empty());
    assert!(result.alternatives.len() <= 4);

    let extend = result
        .alternatives
        .iter()
        .find(|plan| plan.strategy == AlternativeStrategy::ExtendTimeline)
        .expect("extend-timeline alternative");
    assert!(extend.profile.timeline_weeks >= 26);
    assert_eq!(extend.profile.timeline_weeks, 50);
    assert!((extend.profile.target_weight_kg - 60.0).abs() < f64::EPSILON);
}

#[test]
fn test_pregnancy_deficit_blocks_without_alternatives() {
    let result = engine().evaluate(&pregnant_loss_profile()).unwrap();

    assert!(!result.may_proceed);
    assert!(result.has_code(FindingCode::PregnancyDeficit));
    assert!(result.alternatives.is_empty());
}

#[test]
fn test_goal_conflict_blocks_regardless_of_other_fields() {
    let engine = engine();

    for profile in [
        conflicting_goals_profile(),
        Profile {
            target_weight_kg: 60.0,
            timeline_weeks: 8,
            ..conflicting_goals_profile()
        },
        Profile {
            target_weight_kg: 90.0,
            sex: BiologicalSex::Other,
            ..conflicting_goals_profile()
        },
    ] {
        let result = engine.evaluate(&profile).unwrap();
        assert!(!result.may_proceed);
        assert!(result.has_code(FindingCode::GoalConflict));
        assert!(result.metrics.goal_direction_indeterminate);
        assert!(result.alternatives.is_empty());
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_evaluation_is_deterministic() {
    let engine = engine();
    for profile in [baseline_profile(), extreme_loss_profile(), pregnant_loss_profile()] {
        let first = engine.evaluate(&profile).unwrap();
        let second = engine.evaluate(&profile).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn test_longer_timeline_never_raises_rate() {
    let engine = engine();
    let mut previous = f64::INFINITY;
    for weeks in 4..=104 {
        let profile = Profile {
            timeline_weeks: weeks,
            ..extreme_loss_profile()
        };
        let rate = engine.compute(&profile).unwrap().weekly_rate_percent;
        assert!(rate <= previous, "rate rose at {weeks} weeks");
        previous = rate;
    }
}

#[test]
fn test_proceeding_plans_respect_calorie_floor() {
    let engine = engine();
    let config = EngineConfig::default();

    for sex in [BiologicalSex::Male, BiologicalSex::Female, BiologicalSex::Other] {
        for target in [50.0, 60.0, 70.0, 78.0, 85.0, 95.0] {
            for weeks in [4, 8, 12, 20, 40, 80] {
                let profile = Profile {
                    sex,
                    target_weight_kg: target,
                    timeline_weeks: weeks,
                    ..baseline_profile()
                };
                let result = engine.evaluate(&profile).unwrap();
                if result.may_proceed {
                    let floor = result
                        .metrics
                        .bmr
                        .max(config.safety.calorie_floor_kcal.get(sex));
                    assert!(
                        result.metrics.target_calories >= floor,
                        "{sex:?} {target} kg in {weeks} weeks"
                    );
                }
            }
        }
    }
}

#[test]
fn test_every_alternative_independently_proceeds() {
    let engine = engine();
    let profiles = [
        extreme_loss_profile(),
        Profile {
            target_weight_kg: 65.0,
            timeline_weeks: 6,
            ..baseline_profile()
        },
        Profile {
            sex: BiologicalSex::Female,
            height_cm: 165.0,
            current_weight_kg: 75.0,
            target_weight_kg: 60.0,
            timeline_weeks: 10,
            ..baseline_profile()
        },
    ];

    for profile in profiles {
        let result = engine.evaluate(&profile).unwrap();
        assert!(!result.may_proceed);
        assert!(!result.alternatives.is_empty());

        let mut last_strategy = None;
        for plan in &result.alternatives {
            let rerun = engine.evaluate(&plan.profile).unwrap();
            assert!(rerun.may_proceed, "{:?} did not proceed", plan.strategy);
            assert_eq!(rerun.metrics, plan.metrics);
            assert!(plan.profile.workout_frequency_per_week <= 7);
            assert!(!plan.changes.is_empty());

            let order = plan.strategy as u8;
            assert!(last_strategy.is_none_or(|last| last < order));
            last_strategy = Some(order);
        }
    }
}

#[test]
fn test_increase_exercise_survives_for_low_frequency_trainee() {
    // One 480 kcal session per week leaves room for six more
    let profile = Profile {
        target_weight_kg: 72.0,
        timeline_weeks: 12,
        workout_frequency_per_week: 1,
        ..baseline_profile()
    };
    let engine = engine();
    let result = engine.evaluate(&profile).unwrap();

    assert_eq!(
        result.blocking_codes(),
        vec![
            FindingCode::TargetBelowBmr,
            FindingCode::TargetBelowCalorieFloor,
            FindingCode::InsufficientExerciseForRate,
        ]
    );

    let plan = result
        .alternatives
        .iter()
        .find(|plan| plan.strategy == AlternativeStrategy::IncreaseExercise)
        .expect("increase-exercise alternative");
    assert_eq!(plan.profile.workout_frequency_per_week, 7);
    assert_eq!(plan.profile.timeline_weeks, 12);
    assert_eq!(plan.changes.len(), 1);
    assert_eq!(plan.changes[0].field, ProfileField::WorkoutFrequencyPerWeek);
    assert!((plan.changes[0].to - 7.0).abs() < f64::EPSILON);

    let rerun = engine.evaluate(&plan.profile).unwrap();
    assert!(rerun.may_proceed);
    assert!(rerun.metrics.target_calories >= rerun.metrics.bmr);
    assert_eq!(result.alternatives.len(), 4);
}

#[test]
fn test_adjusted_target_never_collapses_into_maintenance() {
    let engine = engine();
    let short_gain = Profile {
        current_weight_kg: 67.0,
        target_weight_kg: 91.0,
        timeline_weeks: 4,
        goals: vec![FitnessGoal::GainMuscle],
        ..baseline_profile()
    };
    let result = engine.evaluate(&short_gain).unwrap();
    assert_eq!(result.blocking_codes(), vec![FindingCode::ExtremeRate]);
    // 0.25 %/week for 4 weeks rounds to a 0.5 kg change, inside the maintain band
    assert!(result.alternatives.is_empty());

    for current in [55.0, 67.0, 90.0] {
        for weeks in 4..=12 {
            let profile = Profile {
                current_weight_kg: current,
                target_weight_kg: current + 24.0,
                timeline_weeks: weeks,
                ..short_gain.clone()
            };
            let result = engine.evaluate(&profile).unwrap();
            for plan in &result.alternatives {
                assert_eq!(plan.metrics.goal_direction, GoalDirection::Gain);
                assert!(plan.metrics.daily_energy_delta > 0.0);
            }
        }
    }
}

#[test]
fn test_multiple_conditions_never_stack() {
    let engine = engine();
    let profile = Profile {
        age: 75,
        medical_conditions: vec![
            MedicalCondition::Type2Diabetes,
            MedicalCondition::Pcos,
            MedicalCondition::Hypothyroidism,
            MedicalCondition::Hypertension,
        ],
        ..baseline_profile()
    };
    let metrics = engine.compute(&profile).unwrap();
    let modifiers = &metrics.modifiers;

    assert!(modifiers.total_tdee_percent.abs() <= 15.0);
    assert!(modifiers.tdee_capped);
    assert_eq!(
        modifiers.metabolic.as_ref().unwrap().condition(),
        &MedicalCondition::Hypothyroidism
    );
    assert!(modifiers.carb_reduction_percent.abs() < f64::EPSILON);
    let unadjusted = metrics.base_tdee + metrics.exercise_kcal_per_day;
    assert!((metrics.total_tdee - unadjusted * 0.85).abs() < 1e-6);
}

// ============================================================================
// Fault channel
// ============================================================================

#[test]
fn test_out_of_domain_profile_is_rejected() {
    let engine = engine();

    let short = Profile {
        height_cm: 90.0,
        ..baseline_profile()
    };
    let error = engine.evaluate(&short).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.field(), Some("height_cm"));

    let rushed = Profile {
        timeline_weeks: 3,
        ..baseline_profile()
    };
    let error = engine.compute(&rushed).unwrap_err();
    assert_eq!(error.field(), Some("timeline_weeks"));

    let nan = Profile {
        current_weight_kg: f64::NAN,
        ..baseline_profile()
    };
    assert!(engine.evaluate(&nan).unwrap_err().code.is_input_rejection());
}

#[test]
fn test_global_engine_matches_defaults_without_overrides() {
    init_test_logging();
    let global = PlanEngine::from_global();
    let local = PlanEngine::default();
    let profile = baseline_profile();
    assert_eq!(
        global.compute(&profile).unwrap(),
        local.compute(&profile).unwrap()
    );
}
