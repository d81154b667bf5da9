//! Fixed-rate coupons and the fixed leg builder.

use crate::cashflow::{CashFlow, Leg};
use crate::coupon::Coupon;
use irs_core::{Rate, Real, Time};
use irs_time::{Actual360, Date, DayCounter, Schedule};

/// A coupon paying a fixed interest rate.
///
/// `amount = nominal * rate * accrual_period`
#[derive(Debug, Clone)]
pub struct FixedRateCoupon {
    /// Notional (face) amount.
    nominal: Real,
    /// Payment date (the period's end date).
    payment_date: Date,
    /// The fixed annual rate.
    rate: Rate,
    /// Accrual start date.
    accrual_start: Date,
    /// Accrual end date.
    accrual_end: Date,
    /// Accrual period (year fraction, cached at construction).
    accrual_period: Time,
}

impl FixedRateCoupon {
    /// Create a new fixed-rate coupon paying at the accrual end date.
    pub fn new(
        payment_date: Date,
        nominal: Real,
        rate: Rate,
        accrual_start: Date,
        accrual_end: Date,
    ) -> Self {
        let accrual_period = Actual360.year_fraction(accrual_start, accrual_end);
        Self {
            nominal,
            payment_date,
            rate,
            accrual_start,
            accrual_end,
            accrual_period,
        }
    }
}

impl CashFlow for FixedRateCoupon {
    fn date(&self) -> Date {
        self.payment_date
    }

    fn amount(&self) -> Real {
        self.nominal * self.rate * self.accrual_period
    }
}

impl Coupon for FixedRateCoupon {
    fn nominal(&self) -> Real {
        self.nominal
    }

    fn accrual_start_date(&self) -> Date {
        self.accrual_start
    }

    fn accrual_end_date(&self) -> Date {
        self.accrual_end
    }

    fn accrual_period(&self) -> Time {
        self.accrual_period
    }

    fn rate(&self) -> Rate {
        self.rate
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed leg builder
// ────────────────────────────────────────────────────────────────────────────

/// Build a fixed-rate leg from a schedule and rate.
///
/// One coupon is produced per consecutive pair of schedule dates, paying on
/// the period's end date.
pub struct FixedLegBuilder<'a> {
    schedule: &'a Schedule,
    notional: Real,
    rate: Rate,
}

impl<'a> FixedLegBuilder<'a> {
    /// Create a new builder from a schedule.
    pub fn new(schedule: &'a Schedule) -> Self {
        Self {
            schedule,
            notional: 1.0,
            rate: 0.0,
        }
    }

    /// Set the notional.
    pub fn with_notional(mut self, notional: Real) -> Self {
        self.notional = notional;
        self
    }

    /// Set the coupon rate.
    pub fn with_rate(mut self, rate: Rate) -> Self {
        self.rate = rate;
        self
    }

    /// Build the leg.
    pub fn build(self) -> Leg {
        let dates = self.schedule.dates();
        let n = dates.len().saturating_sub(1); // number of periods
        let mut leg: Leg = Vec::with_capacity(n);

        for i in 0..n {
            let start = dates[i];
            let end = dates[i + 1];
            leg.push(Box::new(FixedRateCoupon::new(
                end,
                self.notional,
                self.rate,
                start,
                end,
            )));
        }

        leg
    }
}
