//! Astronomical model - moon phase and simplified sky position
//!
//! This module provides the constants and pure functions that turn a Julian
//! Date into the quantities the installation sonifies. The position model is
//! deliberately non-perturbative: visually plausible and cheap rather than
//! positionally precise, so the engine stays deterministic and free of
//! ephemeris tables.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Mean synodic month length in days (new moon to new moon)
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Julian Date of a reference new moon (2000-01-06 18:14 UT)
pub const REFERENCE_NEW_MOON_JD: f64 = 2451550.1;

/// Culmination altitude midpoint in degrees (seasonal swing is added on top)
pub const BASE_CULMINATION_DEG: f64 = 40.0;

/// Seasonal swing of the culmination altitude in degrees
pub const SEASONAL_SWING_DEG: f64 = 25.0;

const TAU: f64 = std::f64::consts::TAU;

// ============================================================================
// Helper Functions
// ============================================================================

/// Normalize an angle in degrees into [0, 360)
pub fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

/// Wrap an angle in degrees into [-180, 180)
pub fn wrap_degrees_signed(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Moon phase fraction for a Julian Date
///
/// Returns a value in [0, 1) where 0 is new moon and 0.5 is full moon,
/// anchored to [`REFERENCE_NEW_MOON_JD`] with period [`SYNODIC_MONTH`].
/// Uses a true modulo so dates before the reference epoch wrap correctly.
pub fn phase_fraction(jd: f64) -> f64 {
    (jd - REFERENCE_NEW_MOON_JD).rem_euclid(SYNODIC_MONTH) / SYNODIC_MONTH
}

// ============================================================================
// SkyPosition
// ============================================================================

/// Apparent sky position in horizontal coordinates
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SkyPosition {
    /// Azimuth in degrees, always in [0, 360)
    pub azimuth_deg: f64,
    /// Altitude in degrees; negative means below the horizon
    pub altitude_deg: f64,
}

/// Simplified moon position for a Julian Date, calendar month, and hour
///
/// Heuristics, documented rather than derived:
/// - Azimuth sweeps linearly through 360 degrees per 24 hours, plus a
///   lunar-age drift of `phase * 360` degrees so the moon rises later each
///   night through the synodic month.
/// - Altitude is a cosine of the hour angle peaking at local midnight
///   (hour 0), with a culmination amplitude keyed to the month: about 65
///   degrees in January, about 15 in July, matching the seasonal swing of
///   the full moon's altitude at mid-high latitudes.
///
/// Continuous in `hour`, periodic over 24 hours, azimuth normalized to
/// [0, 360). Altitude is not clamped; visibility is decided downstream.
pub fn simplified_position(jd: f64, month: u32, hour: u32) -> SkyPosition {
    let day_angle = f64::from(hour) / 24.0 * TAU;
    let lunar_drift = phase_fraction(jd) * TAU;
    let azimuth_deg = normalize_degrees((day_angle + lunar_drift).to_degrees());

    let seasonal = (TAU * (f64::from(month) - 1.0) / 12.0).cos();
    let culmination = BASE_CULMINATION_DEG + SEASONAL_SWING_DEG * seasonal;
    let altitude_deg = culmination * day_angle.cos();

    SkyPosition {
        azimuth_deg,
        altitude_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_at_reference_epoch() {
        assert!(phase_fraction(REFERENCE_NEW_MOON_JD) < 1e-9);
    }

    #[test]
    fn test_phase_full_at_half_period() {
        let phase = phase_fraction(REFERENCE_NEW_MOON_JD + SYNODIC_MONTH / 2.0);
        assert!((phase - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_phase_periodic() {
        let jd = 2460451.541667;
        let a = phase_fraction(jd);
        let b = phase_fraction(jd + SYNODIC_MONTH);
        assert!((a - b).abs() < 1e-7);
    }

    #[test]
    fn test_phase_wraps_before_epoch() {
        // A quarter period before the reference new moon is a waning phase
        let phase = phase_fraction(REFERENCE_NEW_MOON_JD - SYNODIC_MONTH / 4.0);
        assert!((phase - 0.75).abs() < 1e-9);
        // Any pre-epoch date still lands in [0, 1)
        let old = phase_fraction(2400000.0);
        assert!((0.0..1.0).contains(&old));
    }

    #[test]
    fn test_phase_range() {
        for i in 0..1000 {
            let phase = phase_fraction(2451550.1 + f64::from(i) * 1.7);
            assert!((0.0..1.0).contains(&phase));
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(0.0) - 0.0).abs() < 1e-12);
        assert!((normalize_degrees(360.0) - 0.0).abs() < 1e-12);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-12);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_degrees_signed() {
        assert!((wrap_degrees_signed(0.0) - 0.0).abs() < 1e-12);
        assert!((wrap_degrees_signed(190.0) + 170.0).abs() < 1e-12);
        assert!((wrap_degrees_signed(-190.0) - 170.0).abs() < 1e-12);
        assert!((wrap_degrees_signed(120.0 - 180.0) + 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_altitude_peaks_at_midnight() {
        let jd = 2460000.5;
        let midnight = simplified_position(jd, 1, 0);
        for hour in 1..24 {
            let pos = simplified_position(jd, 1, hour);
            assert!(pos.altitude_deg <= midnight.altitude_deg);
        }
    }

    #[test]
    fn test_altitude_below_horizon_at_midday() {
        let pos = simplified_position(2460000.5, 6, 12);
        assert!(pos.altitude_deg < 0.0);
    }

    #[test]
    fn test_winter_culminates_higher_than_summer() {
        let jd = 2460000.5;
        let january = simplified_position(jd, 1, 0);
        let july = simplified_position(jd, 7, 0);
        assert!(january.altitude_deg > july.altitude_deg);
        assert!(january.altitude_deg > 60.0);
        assert!(july.altitude_deg < 20.0);
    }

    #[test]
    fn test_azimuth_sweeps_monotonically() {
        // Successive hours advance azimuth by about 15 degrees (mod 360)
        let jd = 2460000.5;
        for hour in 0..23 {
            let a = simplified_position(jd, 3, hour).azimuth_deg;
            let b = simplified_position(jd, 3, hour + 1).azimuth_deg;
            let step = (b - a).rem_euclid(360.0);
            assert!(step > 10.0 && step < 20.0, "hour {hour}: step {step}");
        }
    }

    #[test]
    fn test_azimuth_normalized() {
        for hour in 0..24 {
            for month in 1..=12 {
                let pos = simplified_position(2460123.4, month, hour);
                assert!((0.0..360.0).contains(&pos.azimuth_deg));
                assert!(pos.altitude_deg.abs() <= 90.0);
            }
        }
    }

    #[test]
    fn test_position_periodic_over_24h() {
        // Same hour on the same julian date reproduces the same position
        let a = simplified_position(2460200.25, 9, 5);
        let b = simplified_position(2460200.25, 9, 5);
        assert_eq!(a.azimuth_deg, b.azimuth_deg);
        assert_eq!(a.altitude_deg, b.altitude_deg);
    }
}
