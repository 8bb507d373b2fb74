// ABOUTME: Declared numeric domain of profile fields
// ABOUTME: Values outside these bounds are input faults, not unsafe plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Age bounds (years)
pub const AGE_YEARS: (f64, f64) = (13.0, 100.0);

/// Height bounds (cm)
pub const HEIGHT_CM: (f64, f64) = (100.0, 250.0);

/// Body weight bounds (kg), applied to current and target weight
pub const WEIGHT_KG: (f64, f64) = (30.0, 300.0);

/// Timeline bounds (weeks)
pub const TIMELINE_WEEKS: (f64, f64) = (4.0, 104.0);

/// Body fat percentage bounds
pub const BODY_FAT_PERCENT: (f64, f64) = (3.0, 70.0);

/// Confidence bounds for externally supplied estimates
pub const CONFIDENCE: (f64, f64) = (0.0, 1.0);

/// Circumference bounds (cm) for waist, hip and chest
pub const CIRCUMFERENCE_CM: (f64, f64) = (20.0, 250.0);

/// Training experience bounds (years)
pub const EXPERIENCE_YEARS: (f64, f64) = (0.0, 60.0);

/// Sessions per week bounds
pub const SESSIONS_PER_WEEK: (f64, f64) = (0.0, 14.0);

/// Session duration bounds (minutes)
pub const SESSION_MINUTES: (f64, f64) = (0.0, 300.0);
