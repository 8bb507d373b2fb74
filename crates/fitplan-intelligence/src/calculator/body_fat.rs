// ABOUTME: Body-fat resolution across user entry, external estimate, formula, and default tiers
// ABOUTME: Each tier is tagged with a confidence label for downstream quality warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body-fat resolution follows a strict priority order:
//!
//! 1. User-entered value
//! 2. External estimate with confidence at or above the threshold
//! 3. Deurenberg formula: `1.20 x BMI + 0.23 x age - 10.8 x sex - 5.4` (adults only)
//! 4. Conservative sex-specific default

use fitplan_core::models::Profile;

use crate::config::BodyFatConfig;
use crate::metrics::{BodyFatResolution, BodyFatSource, EstimateConfidence};

/// Deurenberg estimate, if the profile qualifies and the result is plausible
#[must_use]
pub fn deurenberg_estimate(profile: &Profile, bmi: f64, config: &BodyFatConfig) -> Option<f64> {
    if profile.age < config.formula_min_age {
        return None;
    }
    let estimate = config.deurenberg_bmi_coef * bmi + config.deurenberg_age_coef * f64::from(profile.age)
        - config.deurenberg_sex_coef * config.deurenberg_sex_factor.get(profile.sex)
        - config.deurenberg_constant;
    (config.formula_min_percent..=config.formula_max_percent)
        .contains(&estimate)
        .then_some(estimate)
}

/// Resolve body fat by priority tier
#[must_use]
pub fn resolve_body_fat(profile: &Profile, bmi: f64, config: &BodyFatConfig) -> BodyFatResolution {
    if let Some(percentage) = profile.body_fat_percentage {
        return BodyFatResolution {
            percentage,
            source: BodyFatSource::UserEntered,
            confidence: EstimateConfidence::High,
        };
    }

    if let Some(estimate) = profile
        .external_body_fat
        .filter(|estimate| estimate.confidence >= config.external_confidence_threshold)
    {
        return BodyFatResolution {
            percentage: estimate.percentage,
            source: BodyFatSource::ExternalEstimate,
            confidence: EstimateConfidence::Medium,
        };
    }

    deurenberg_estimate(profile, bmi, config).map_or_else(
        || BodyFatResolution {
            percentage: config.default_percent.get(profile.sex),
            source: BodyFatSource::ConservativeDefault,
            confidence: EstimateConfidence::VeryLow,
        },
        |percentage| BodyFatResolution {
            percentage,
            source: BodyFatSource::FormulaEstimate,
            confidence: EstimateConfidence::Low,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::baseline_profile;
    use fitplan_core::models::BodyFatEstimate;

    #[test]
    fn test_user_value_wins() {
        let mut profile = baseline_profile();
        profile.body_fat_percentage = Some(15.0);
        profile.external_body_fat = Some(BodyFatEstimate {
            percentage: 22.0,
            confidence: 0.95,
        });
        let resolved = resolve_body_fat(&profile, 24.7, &BodyFatConfig::default());
        assert_eq!(resolved.source, BodyFatSource::UserEntered);
        assert!((resolved.percentage - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_low_confidence_estimate_skipped() {
        let mut profile = baseline_profile();
        profile.external_body_fat = Some(BodyFatEstimate {
            percentage: 22.0,
            confidence: 0.5,
        });
        let resolved = resolve_body_fat(&profile, 24.69, &BodyFatConfig::default());
        assert_eq!(resolved.source, BodyFatSource::FormulaEstimate);
        // 1.2 x 24.69 + 0.23 x 30 - 10.8 - 5.4
        assert!((resolved.percentage - 20.328).abs() < 1e-9);
        assert_eq!(resolved.confidence, EstimateConfidence::Low);

        profile.external_body_fat = Some(BodyFatEstimate {
            percentage: 22.0,
            confidence: 0.7,
        });
        let resolved = resolve_body_fat(&profile, 24.69, &BodyFatConfig::default());
        assert_eq!(resolved.source, BodyFatSource::ExternalEstimate);
    }

    #[test]
    fn test_adolescent_uses_default() {
        let mut profile = baseline_profile();
        profile.age = 16;
        let resolved = resolve_body_fat(&profile, 21.0, &BodyFatConfig::default());
        assert_eq!(resolved.source, BodyFatSource::ConservativeDefault);
        assert!((resolved.percentage - 20.0).abs() < f64::EPSILON);
        assert_eq!(resolved.confidence, EstimateConfidence::VeryLow);
    }
}
