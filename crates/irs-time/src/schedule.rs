//! `Schedule` — an ordered sequence of coupon dates.
//!
//! A `Schedule` generates the payment/accrual dates for a swap given a start
//! date, end date, and coupon interval in months.

use crate::date::Date;
use irs_core::ensure;
use irs_core::errors::Result;

/// An ordered sequence of coupon dates.
///
/// The first date is the accrual start, the last the termination date; each
/// adjacent pair delimits one coupon period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    dates: Vec<Date>,
    is_regular: Vec<bool>,
}

impl Schedule {
    /// Return all dates in the schedule.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of dates.
    pub fn size(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Return the `i`-th date.
    pub fn date(&self, i: usize) -> Date {
        self.dates[i]
    }

    /// Return the start (effective) date.
    pub fn start_date(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Return the end (termination) date.
    pub fn end_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Return `true` if the period at index `i` spans a full coupon interval.
    ///
    /// Only the final period can be irregular: when month-stepping overshoots
    /// the termination date, the last period is a short stub clamped to it.
    pub fn is_regular(&self, i: usize) -> bool {
        self.is_regular.get(i).copied().unwrap_or(true)
    }

    /// Build a schedule from an explicit list of dates.
    pub fn from_dates(dates: Vec<Date>) -> Self {
        let n = if dates.len() > 1 { dates.len() - 1 } else { 0 };
        Self {
            is_regular: vec![true; n],
            dates,
        }
    }
}

/// Builder for [`Schedule`].
#[derive(Debug, Clone, Copy)]
pub struct ScheduleBuilder {
    effective_date: Date,
    termination_date: Date,
    frequency_months: u32,
}

impl ScheduleBuilder {
    /// Begin building a schedule.
    pub fn new(effective_date: Date, termination_date: Date, frequency_months: u32) -> Self {
        Self {
            effective_date,
            termination_date,
            frequency_months,
        }
    }

    /// Build the `Schedule`.
    ///
    /// Dates are generated forward from the effective date, each obtained by
    /// adding `frequency_months` calendar months to the *previous* generated
    /// date (so day-of-month clamping carries forward: a schedule seeded on
    /// Jan 31 continues on the 28th after crossing February). Generation
    /// stops at the termination date; if stepping overshoots it, the final
    /// date is clamped to the termination date and the last period is a
    /// short stub.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if the effective date is not strictly
    /// before the termination date or if `frequency_months` is zero.
    pub fn build(self) -> Result<Schedule> {
        let start = self.effective_date;
        let end = self.termination_date;

        ensure!(
            start < end,
            "effective date {start} must be before termination date {end}"
        );
        ensure!(
            self.frequency_months >= 1,
            "frequency must be at least one month"
        );

        let mut dates = vec![start];
        let mut is_regular = Vec::new();

        let mut d = start;
        while d < end {
            match d.add_months(self.frequency_months as i32) {
                Ok(next) if next < end => {
                    dates.push(next);
                    is_regular.push(true);
                    d = next;
                }
                Ok(next) => {
                    // Clamp to the termination date; the period is regular
                    // only if the step landed on it exactly.
                    dates.push(end);
                    is_regular.push(next == end);
                    break;
                }
                // Stepping past the calendar range can only overshoot the
                // termination date, which is itself a valid Date.
                Err(_) => {
                    dates.push(end);
                    is_regular.push(false);
                    break;
                }
            }
        }

        Ok(Schedule { dates, is_regular })
    }
}
