//! Integration tests for the `Date` type, with property tests for the
//! month-stepping arithmetic.

use irs_time::date::{days_in_month, is_leap_year};
use irs_time::Date;
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Month stepping ───────────────────────────────────────────────────────────

#[test]
fn month_end_clamping() {
    let cases = [
        // (from, months, expected)
        ((2023, 1, 31), 1, (2023, 2, 28)),
        ((2024, 1, 31), 1, (2024, 2, 29)),
        ((2024, 1, 31), 3, (2024, 4, 30)),
        ((2024, 8, 31), 1, (2024, 9, 30)),
        ((2024, 10, 31), 4, (2025, 2, 28)),
        ((2100, 1, 31), 1, (2100, 2, 28)), // century, not leap
        ((2000, 1, 31), 1, (2000, 2, 29)), // 400-year rule, leap
    ];
    for ((y1, m1, d1), n, (y2, m2, d2)) in cases {
        assert_eq!(
            date(y1, m1, d1).add_months(n).unwrap(),
            date(y2, m2, d2),
            "{y1}-{m1:02}-{d1:02} + {n} months"
        );
    }
}

#[test]
fn twelve_months_is_one_year() {
    for (y, m, d) in [(2023, 3, 15), (2024, 2, 29), (2024, 6, 1), (2150, 12, 31)] {
        let from = date(y, m, d);
        let to = from.add_months(12).unwrap();
        assert_eq!(to.month(), m);
        // Feb 29 clamps to Feb 28 in the following (non-leap) year
        let expected_day = d.min(days_in_month(y + 1, m));
        assert_eq!(to.day_of_month(), expected_day);
        assert_eq!(to.year(), y + 1);
    }
}

#[test]
fn negative_steps_reverse_positive_ones() {
    let d = date(2024, 6, 15);
    assert_eq!(d.add_months(7).unwrap().add_months(-7).unwrap(), d);
    assert_eq!(d.add_months(-18).unwrap(), date(2022, 12, 15));
}

// ─── Serial arithmetic ────────────────────────────────────────────────────────

#[test]
fn serial_is_contiguous_across_month_and_year_ends() {
    assert_eq!(date(2024, 2, 29) - date(2024, 2, 28), 1);
    assert_eq!(date(2024, 3, 1) - date(2024, 2, 29), 1);
    assert_eq!(date(2025, 1, 1) - date(2024, 12, 31), 1);
    assert_eq!(date(2025, 1, 1) - date(2024, 1, 1), 366); // 2024 is leap
    assert_eq!(date(2024, 1, 1) - date(2023, 1, 1), 365);
}

#[test]
fn leap_rule() {
    assert!(is_leap_year(2024));
    assert!(is_leap_year(2000));
    assert!(is_leap_year(1904));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert!(!is_leap_year(2199));
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    /// `add_months` never yields an invalid calendar date, and its result
    /// round-trips through from_ymd.
    #[test]
    fn add_months_yields_valid_dates(
        y in 1950u16..2150,
        m in 1u8..=12,
        d in 1u8..=31,
        n in -600i32..600,
    ) {
        let d = d.min(days_in_month(y, m));
        let from = Date::from_ymd(y, m, d).unwrap();
        let to = from.add_months(n).unwrap();
        prop_assert!(to.day_of_month() <= days_in_month(to.year(), to.month()));
        let rebuilt = Date::from_ymd(to.year(), to.month(), to.day_of_month()).unwrap();
        prop_assert_eq!(rebuilt, to);
    }

    /// Serial round-trip: decompose then rebuild.
    #[test]
    fn ymd_roundtrip(y in 1900u16..=2199, m in 1u8..=12, d in 1u8..=31) {
        let d = d.min(days_in_month(y, m));
        let built = Date::from_ymd(y, m, d).unwrap();
        prop_assert_eq!(built.year(), y);
        prop_assert_eq!(built.month(), m);
        prop_assert_eq!(built.day_of_month(), d);
    }

    /// A positive month step strictly advances the date.
    #[test]
    fn positive_step_advances(
        y in 1950u16..2150,
        m in 1u8..=12,
        d in 1u8..=31,
        n in 1i32..120,
    ) {
        let d = d.min(days_in_month(y, m));
        let from = Date::from_ymd(y, m, d).unwrap();
        let to = from.add_months(n).unwrap();
        prop_assert!(to > from);
    }
}
