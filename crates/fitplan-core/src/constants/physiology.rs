// ABOUTME: Physiological constants used by the metric calculator
// ABOUTME: Energy densities, heart-rate zone bounds, and time conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on nutrition and exercise science research
//!
//! These values are fixed facts rather than policy; thresholds that a domain
//! expert may want to tune are exposed through `EngineConfig` instead.

/// Energy content of macronutrients and body tissue
///
/// References:
/// - Atwater general factors (USDA Handbook No. 74)
/// - Wishnofsky, M. (1958). Caloric equivalents of gained or lost weight.
///   *American Journal of Clinical Nutrition*, 6(5), 542-546.
pub mod energy {
    /// Energy density of mixed body tissue (kcal per kg gained or lost)
    pub const KCAL_PER_KG_TISSUE: f64 = 7700.0;

    /// Protein energy (kcal per gram)
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

    /// Carbohydrate energy (kcal per gram)
    pub const KCAL_PER_G_CARB: f64 = 4.0;

    /// Fat energy (kcal per gram)
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Heart rate zone boundaries as fractions of maximum heart rate
///
/// Reference: ACSM Guidelines for Exercise Testing and Prescription, 11th Edition
pub mod heart_rate {
    /// Lower/upper bounds of the five training zones (50-100% of max HR)
    pub const ZONE_BOUNDS: [f64; 6] = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

    /// Tanaka intercept (208 - 0.7 x age)
    /// Reference: Tanaka, H. et al. (2001). Age-predicted maximal heart rate revisited.
    pub const TANAKA_INTERCEPT: f64 = 208.0;

    /// Tanaka age slope
    pub const TANAKA_AGE_SLOPE: f64 = 0.7;
}

/// Time conversions
pub mod time {
    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;

    /// Average weeks per month (52 / 12)
    pub const WEEKS_PER_MONTH: f64 = 4.345;

    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;

    /// Minutes per day
    pub const MINUTES_PER_DAY: i64 = 24 * 60;
}
