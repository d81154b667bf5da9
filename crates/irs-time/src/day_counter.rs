//! `DayCounter` trait and the Actual/360 convention.
//!
//! A day counter computes the **day count fraction** — the fraction of a year
//! between two dates — used when discounting or accruing interest. The swap
//! model uses a single convention: the literal count of calendar days divided
//! by a fixed 360-day year.

use crate::date::Date;
use irs_core::{Real, Time};

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/360"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    /// Negative if `d2 < d1`.
    fn day_count(&self, d1: Date, d2: Date) -> i64;

    /// Fraction of a year between `d1` and `d2`. Negative if `d2 < d1`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

/// Actual/360 day counter.
///
/// `year_fraction = actual_days / 360`
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual360;

impl DayCounter for Actual360 {
    fn name(&self) -> &str {
        "Actual/360"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        (d2.serial() - d1.serial()) as i64
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn actual360_half_year() {
        let dc = Actual360;
        assert_eq!(dc.name(), "Actual/360");
        let d1 = date(2024, 1, 1);
        let d2 = date(2024, 7, 1);
        // Jan..Jun of a leap year = 31+29+31+30+31+30 = 182 days
        assert_eq!(dc.day_count(d1, d2), 182);
        assert_abs_diff_eq!(dc.year_fraction(d1, d2), 182.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn actual360_full_year() {
        let dc = Actual360;
        let d1 = date(2023, 1, 1);
        let d2 = date(2024, 1, 1);
        // 365 actual days over a 360-day basis
        assert_abs_diff_eq!(dc.year_fraction(d1, d2), 365.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn reversed_pair_is_negative() {
        let dc = Actual360;
        let d1 = date(2024, 1, 1);
        let d2 = date(2024, 7, 1);
        assert_eq!(dc.day_count(d2, d1), -182);
        assert!(dc.year_fraction(d2, d1) < 0.0);
    }

    #[test]
    fn same_date_is_zero() {
        let dc = Actual360;
        let d = date(2024, 6, 15);
        assert_eq!(dc.day_count(d, d), 0);
        assert_abs_diff_eq!(dc.year_fraction(d, d), 0.0, epsilon = 1e-15);
    }
}
