// ABOUTME: Age-predicted maximum heart rate (Tanaka) and five training zones
// ABOUTME: Zones span 50-100% of maximum in 10% steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Scientific References
//!
//! - Tanaka, H. et al. (2001). "Age-predicted maximal heart rate revisited." *J Am Coll Cardiol*, 37(1), 153-156.

use fitplan_core::constants::physiology::heart_rate::{
    TANAKA_AGE_SLOPE, TANAKA_INTERCEPT, ZONE_BOUNDS,
};

use crate::metrics::{HeartRateZone, HeartRateZones};

/// Tanaka formula: 208 - 0.7 x age
#[must_use]
pub fn tanaka_max_hr(age: u32) -> f64 {
    TANAKA_AGE_SLOPE.mul_add(-f64::from(age), TANAKA_INTERCEPT)
}

/// Maximum heart rate and zones for an age
#[must_use]
pub fn heart_rate_zones(age: u32) -> HeartRateZones {
    let max_hr = tanaka_max_hr(age);
    let zones = std::array::from_fn(|i| HeartRateZone {
        zone: (i + 1) as u8,
        min_bpm: (max_hr * ZONE_BOUNDS[i]).round(),
        max_bpm: (max_hr * ZONE_BOUNDS[i + 1]).round(),
    });
    HeartRateZones { max_hr, zones }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tanaka_at_forty() {
        assert!((tanaka_max_hr(40) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_zones_are_contiguous() {
        let hr = heart_rate_zones(30);
        assert_eq!(hr.zones[0].zone, 1);
        assert_eq!(hr.zones[4].zone, 5);
        for pair in hr.zones.windows(2) {
            assert!((pair[0].max_bpm - pair[1].min_bpm).abs() < f64::EPSILON);
        }
        assert!((hr.zones[4].max_bpm - hr.max_hr.round()).abs() < f64::EPSILON);
    }
}
