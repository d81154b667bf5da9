//! `Date` type.
//!
//! Dates are represented as a serial number of days since an epoch:
//! serial 1 = January 1, 1900. The valid range is 1900-01-01 to 2199-12-31.
//!
//! The only calendar arithmetic a swap schedule needs is whole-day and
//! whole-month stepping. Month stepping clamps the day-of-month to the length
//! of the target month (Jan 31 + 1 month = Feb 28/29), so no invalid calendar
//! date can ever be produced.

use irs_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days. Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Advance by `n` calendar months (`n` may be negative).
    ///
    /// The target year and month are obtained by flooring division of the
    /// zero-based month index; the day-of-month is clamped to the last valid
    /// day of the target month, so `Jan 31 + 1 month` yields `Feb 28` (or
    /// `Feb 29` in a leap year) rather than an error.
    pub fn add_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = ymd_from_serial(self.0);
        let total = m as i32 - 1 + n;
        let year = y as i32 + total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u8;
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1900, 2199]")));
        }
        let year = year as u16;
        let day = d.min(days_in_month(year, month));
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year under the Gregorian rule.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 1900-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap years in [1900, year) — 1900 itself is not a leap year
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    // Days in months 1..m of the current year
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    // Days in the current month
    serial += d;
    serial
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate the year, then adjust until the serial falls within it
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        let start_of_year = serial_from_ymd(y, 1, 1);
        if serial < start_of_year {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let start_of_year = serial_from_ymd(y, 1, 1);
    let doy = serial - start_of_year + 1; // 1-based
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d, Date::MIN);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2024, 1, 1),
            (2023, 6, 15),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert!(Date::from_ymd(2023, 2, 29).is_err()); // not a leap year
        assert!(Date::from_ymd(1900, 2, 29).is_err()); // century, not leap
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 4, 31).is_err());
        assert!(Date::from_ymd(2024, 1, 0).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
        assert!(Date::from_ymd(1899, 12, 31).is_err());
    }

    #[test]
    fn test_add_months_clamps_day() {
        // Jan 31 + 1 month = Feb 28 in a non-leap year
        let d = Date::from_ymd(2023, 1, 31).unwrap();
        let next = d.add_months(1).unwrap();
        assert_eq!(next, Date::from_ymd(2023, 2, 28).unwrap());

        // ... and Feb 29 in a leap year
        let d = Date::from_ymd(2024, 1, 31).unwrap();
        let next = d.add_months(1).unwrap();
        assert_eq!(next, Date::from_ymd(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_add_twelve_months_is_one_year() {
        let d = Date::from_ymd(2024, 3, 15).unwrap();
        let next = d.add_months(12).unwrap();
        assert_eq!(next, Date::from_ymd(2025, 3, 15).unwrap());
    }

    #[test]
    fn test_add_months_across_year_end() {
        let d = Date::from_ymd(2024, 11, 30).unwrap();
        assert_eq!(d.add_months(3).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
        // Negative steps use flooring division
        let d = Date::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(d.add_months(-2).unwrap(), Date::from_ymd(2023, 11, 30).unwrap());
    }

    #[test]
    fn test_add_months_out_of_range() {
        let d = Date::from_ymd(2199, 10, 1).unwrap();
        assert!(d.add_months(6).is_err());
        let d = Date::from_ymd(1900, 2, 1).unwrap();
        assert!(d.add_months(-2).is_err());
    }

    #[test]
    fn test_day_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2, Date::from_ymd(2023, 2, 1).unwrap());
        assert_eq!(d2 - d, 31);
        assert_eq!(d.days_between(d2), 31);
        assert_eq!(d2.days_between(d), -31);
        assert_eq!(d2 - 31, d);
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_display() {
        let d = Date::from_ymd(2024, 7, 1).unwrap();
        assert_eq!(d.to_string(), "2024-07-01");
        assert_eq!(format!("{d:?}"), "Date(2024-07-01)");
    }
}
