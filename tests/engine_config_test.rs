// ABOUTME: Integration tests for engine configuration loading and environment overrides
// ABOUTME: Verifies FITPLAN_* overrides reach the engine and invalid overrides are rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;

use common::{baseline_profile, extreme_loss_profile, init_test_logging};
use fitplan::engine::PlanEngine;
use fitplan::errors::{AppError, ErrorCode};
use fitplan::models::{MedicalCondition, Profile};
use fitplan::{EngineConfig, FindingCode};
use serial_test::serial;

const OVERRIDES: &[&str] = &[
    "FITPLAN_MAX_ALTERNATIVES",
    "FITPLAN_CONDITION_PRIORITY",
    "FITPLAN_LOSS_AGGRESSIVE_RATE",
    "FITPLAN_MIN_WEEKLY_EXERCISE_MINUTES",
    "FITPLAN_HEADROOM_FRACTION",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    init_test_logging();
    clear_overrides();

    let loaded = EngineConfig::load().unwrap();
    let defaults = EngineConfig::default();
    assert_eq!(
        serde_json::to_value(&loaded).unwrap(),
        serde_json::to_value(&defaults).unwrap()
    );
}

#[test]
#[serial]
fn test_max_alternatives_override_limits_result() {
    init_test_logging();
    clear_overrides();
    env::set_var("FITPLAN_MAX_ALTERNATIVES", "1");

    let engine = PlanEngine::new(EngineConfig::load().unwrap());
    let result = engine.evaluate(&extreme_loss_profile()).unwrap();

    clear_overrides();
    assert_eq!(result.alternatives.len(), 1);
}

#[test]
#[serial]
fn test_priority_override_changes_dominant_condition() {
    init_test_logging();
    clear_overrides();
    env::set_var(
        "FITPLAN_CONDITION_PRIORITY",
        "insulin_resistance, thyroid, cardiovascular",
    );

    let engine = PlanEngine::new(EngineConfig::load().unwrap());
    let metrics = engine
        .compute(&Profile {
            medical_conditions: vec![MedicalCondition::Hypothyroidism, MedicalCondition::Pcos],
            ..baseline_profile()
        })
        .unwrap();

    clear_overrides();
    let adjustment = metrics.modifiers.metabolic.unwrap();
    assert_eq!(adjustment.condition(), &MedicalCondition::Pcos);
    assert!((metrics.modifiers.carb_reduction_percent - 25.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_threshold_override_changes_findings() {
    init_test_logging();
    clear_overrides();
    env::set_var("FITPLAN_MIN_WEEKLY_EXERCISE_MINUTES", "300");

    let engine = PlanEngine::new(EngineConfig::load().unwrap());
    let result = engine
        .evaluate(&Profile {
            drinks_alcohol: true,
            ..baseline_profile()
        })
        .unwrap();

    clear_overrides();
    // 240 minutes now counts as a lifestyle risk alongside alcohol and readiness
    assert!(result.has_code(FindingCode::MultipleLifestyleRisks));
}

#[test]
#[serial]
fn test_unordered_rate_override_is_rejected() {
    init_test_logging();
    clear_overrides();
    env::set_var("FITPLAN_LOSS_AGGRESSIVE_RATE", "2.0");

    let error = EngineConfig::load().unwrap_err();
    clear_overrides();

    let app_error: AppError = error.into();
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
    assert!(app_error.message.contains("loss rates"));
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    init_test_logging();
    clear_overrides();
    env::set_var("FITPLAN_HEADROOM_FRACTION", "most");

    let error = EngineConfig::load().unwrap_err();
    clear_overrides();

    let app_error: AppError = error.into();
    assert_eq!(app_error.code, ErrorCode::ConfigError);
    assert!(app_error.message.contains("FITPLAN_HEADROOM_FRACTION"));
}
