//! Property tests for the astronomical and geometric invariants

use proptest::prelude::*;

use lunatone::core::astronomy::{
    phase_fraction, simplified_position, wrap_degrees_signed, SkyPosition, SYNODIC_MONTH,
};
use lunatone::core::calendar::CalendarTime;
use lunatone::render::projection::ScreenProjector;
use lunatone::render::shape::MoonShapeMask;

proptest! {
    /// Phase fraction always lands in [0, 1), before or after the epoch.
    #[test]
    fn phase_always_in_unit_interval(jd in 2.0e6f64..2.6e6f64) {
        let phase = phase_fraction(jd);
        prop_assert!((0.0..1.0).contains(&phase));
    }

    /// Phase fraction is periodic over the synodic month.
    #[test]
    fn phase_periodic_over_synodic_month(jd in 2.4e6f64..2.5e6f64) {
        let a = phase_fraction(jd);
        let b = phase_fraction(jd + SYNODIC_MONTH);
        // Compare on the circle: 0.0 and 1.0-epsilon are the same phase
        let diff = (a - b).abs();
        prop_assert!(diff < 1e-6 || diff > 1.0 - 1e-6);
    }

    /// Julian date grows with any positive wall-clock delta within a day.
    #[test]
    fn julian_date_monotonic(
        year in 1900i32..2200,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..23,
        minute in 0u32..=59,
        second in 0u32..=58,
    ) {
        let t1 = CalendarTime { year, month, day, hour, minute, second, utc_offset_hours: -3.0 };
        let t2 = CalendarTime { second: second + 1, ..t1 };
        let t3 = CalendarTime { hour: hour + 1, ..t1 };
        prop_assert!(t2.to_julian_date() > t1.to_julian_date());
        prop_assert!(t3.to_julian_date() > t1.to_julian_date());
    }

    /// Simplified position keeps azimuth normalized and altitude bounded.
    #[test]
    fn position_stays_in_domain(
        jd in 2.45e6f64..2.47e6f64,
        month in 1u32..=12,
        hour in 0u32..=23,
    ) {
        let pos = simplified_position(jd, month, hour);
        prop_assert!((0.0..360.0).contains(&pos.azimuth_deg));
        prop_assert!(pos.altitude_deg.abs() <= 90.0);
    }

    /// Mask mirror symmetry: mask(p) is mask(1-p) flipped horizontally.
    #[test]
    fn mask_mirror_symmetry(phase in 0.0f64..=1.0, half in 2u32..=16) {
        let diameter = half * 2;
        let mask = MoonShapeMask::generate(phase, diameter);
        let mirror = MoonShapeMask::generate(1.0 - phase, diameter);
        for y in 0..diameter {
            for x in 0..diameter {
                prop_assert_eq!(mask.pixel(x, y), mirror.pixel(diameter - 1 - x, y));
            }
        }
    }

    /// Visibility is exactly the horizon-and-window predicate when the
    /// object radius adds no margin.
    #[test]
    fn visibility_matches_predicate(
        view in 0.0f64..360.0,
        fov in 10.0f64..=180.0,
        azimuth in 0.0f64..360.0,
        altitude in -90.0f64..=90.0,
    ) {
        let projector = ScreenProjector::new(view, fov, 1000.0, 1000.0, 0.0).unwrap();
        let point = projector.project(&SkyPosition { azimuth_deg: azimuth, altitude_deg: altitude });
        let offset = wrap_degrees_signed(azimuth - view);
        let expected = altitude > 0.0 && offset.abs() <= fov / 2.0;
        prop_assert_eq!(point.visible, expected);
    }

    /// Projection maps the window edges onto the canvas edges.
    #[test]
    fn projection_x_spans_canvas(offset_frac in -1.0f64..=1.0) {
        let projector = ScreenProjector::new(180.0, 120.0, 800.0, 600.0, 0.0).unwrap();
        let azimuth = 180.0 + offset_frac * 60.0;
        let point = projector.project(&SkyPosition { azimuth_deg: azimuth, altitude_deg: 45.0 });
        prop_assert!(point.x >= -1e-9 && point.x <= 800.0 + 1e-9);
    }
}
