//! Calendar time and Julian Date conversion
//!
//! A `CalendarTime` is an immutable wall-clock snapshot at the installation's
//! fixed observation point. Conversion to a continuous Julian Date is the
//! entry point for every astronomical quantity in the engine.

use serde::{Deserialize, Serialize};

/// Wall-clock snapshot with a fixed numeric UTC offset
///
/// Fields are not validated or normalized: an out-of-range day such as
/// April 31 converts arithmetically to whatever the Julian Day formula
/// yields. The installation always feeds sane clock readings; calendar
/// sanity checking is a deliberate non-goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Fixed offset from UTC in hours (negative = west of Greenwich)
    pub utc_offset_hours: f64,
}

impl CalendarTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours: 0.0,
        }
    }

    /// Same snapshot with a different fixed UTC offset
    pub fn with_utc_offset(mut self, hours: f64) -> Self {
        self.utc_offset_hours = hours;
        self
    }

    /// Convert to a continuous Julian Date
    ///
    /// Standard Julian Day algorithm with the Gregorian century correction.
    /// January and February are treated as months 13 and 14 of the preceding
    /// year. The UTC offset is subtracted as fractional days first, so a
    /// local reading west of Greenwich maps to a later UT instant.
    pub fn to_julian_date(&self) -> f64 {
        let (mut y, mut m) = (f64::from(self.year), f64::from(self.month));
        if self.month <= 2 {
            y -= 1.0;
            m += 12.0;
        }

        let day_fraction = (f64::from(self.hour)
            + f64::from(self.minute) / 60.0
            + f64::from(self.second) / 3600.0
            - self.utc_offset_hours)
            / 24.0;

        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor()
            + f64::from(self.day)
            + day_fraction
            + b
            - 1524.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_epoch() {
        // J2000.0: 2000-01-01 12:00 UT = JD 2451545.0
        let t = CalendarTime::new(2000, 1, 1, 12, 0, 0);
        assert!((t.to_julian_date() - 2451545.0).abs() < 1e-9);
    }

    #[test]
    fn test_midnight_half_day() {
        // Civil midnight falls half a day before the Julian day boundary
        let t = CalendarTime::new(2000, 1, 1, 0, 0, 0);
        assert!((t.to_julian_date() - 2451544.5).abs() < 1e-9);
    }

    #[test]
    fn test_utc_offset_shifts_forward() {
        // 22:00 at UTC-3 is 01:00 UT the next day
        let local = CalendarTime::new(2024, 5, 20, 22, 0, 0).with_utc_offset(-3.0);
        let ut = CalendarTime::new(2024, 5, 21, 1, 0, 0);
        assert!((local.to_julian_date() - ut.to_julian_date()).abs() < 1e-9);
    }

    #[test]
    fn test_contiguous_across_month_boundary() {
        let feb = CalendarTime::new(2023, 2, 28, 12, 0, 0);
        let mar = CalendarTime::new(2023, 3, 1, 12, 0, 0);
        assert!((mar.to_julian_date() - feb.to_julian_date() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_over_a_day() {
        let mut prev = CalendarTime::new(2024, 5, 20, 0, 0, 0).to_julian_date();
        for hour in 1..24 {
            let jd = CalendarTime::new(2024, 5, 20, hour, 0, 0).to_julian_date();
            assert!(jd > prev);
            prev = jd;
        }
        let next_day = CalendarTime::new(2024, 5, 21, 0, 0, 0).to_julian_date();
        assert!(next_day > prev);
    }

    #[test]
    fn test_out_of_range_day_converts_arithmetically() {
        // April 31 is not rejected; it lands on the same instant as May 1
        let overflow = CalendarTime::new(2024, 4, 31, 0, 0, 0);
        let may_first = CalendarTime::new(2024, 5, 1, 0, 0, 0);
        assert!((overflow.to_julian_date() - may_first.to_julian_date()).abs() < 1e-9);
    }
}
