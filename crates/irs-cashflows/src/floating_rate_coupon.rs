//! Floating-rate coupons and the floating leg builder.

use crate::cashflow::{CashFlow, Leg};
use crate::coupon::Coupon;
use irs_core::{Rate, Real, Spread, Time};
use irs_termstructures::ForwardCurve;
use irs_time::{Actual360, Date, DayCounter, Schedule};

/// A coupon paying a forward rate plus a spread.
///
/// `amount = nominal * (forward_rate + spread) * accrual_period`
///
/// The forward rate is resolved when the leg is built (see
/// [`FloatingLegBuilder`]); the coupon itself carries the resolved value.
#[derive(Debug, Clone)]
pub struct FloatingRateCoupon {
    /// Notional (face) amount.
    nominal: Real,
    /// Payment date (the period's end date).
    payment_date: Date,
    /// The forward rate fixed for this period.
    forward_rate: Rate,
    /// Additive spread.
    spread: Spread,
    /// Accrual start date.
    accrual_start: Date,
    /// Accrual end date.
    accrual_end: Date,
    /// Accrual period (year fraction, cached at construction).
    accrual_period: Time,
}

impl FloatingRateCoupon {
    /// Create a new floating-rate coupon paying at the accrual end date.
    pub fn new(
        payment_date: Date,
        nominal: Real,
        forward_rate: Rate,
        spread: Spread,
        accrual_start: Date,
        accrual_end: Date,
    ) -> Self {
        let accrual_period = Actual360.year_fraction(accrual_start, accrual_end);
        Self {
            nominal,
            payment_date,
            forward_rate,
            spread,
            accrual_start,
            accrual_end,
            accrual_period,
        }
    }

    /// The forward rate resolved for this period (spread excluded).
    pub fn forward_rate(&self) -> Rate {
        self.forward_rate
    }

    /// The additive spread.
    pub fn spread(&self) -> Spread {
        self.spread
    }
}

impl CashFlow for FloatingRateCoupon {
    fn date(&self) -> Date {
        self.payment_date
    }

    fn amount(&self) -> Real {
        self.nominal * (self.forward_rate + self.spread) * self.accrual_period
    }
}

impl Coupon for FloatingRateCoupon {
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
        self.forward_rate + self.spread
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Floating leg builder
// ────────────────────────────────────────────────────────────────────────────

/// Build a floating-rate leg from a schedule and a forward curve.
///
/// For each period the forward rate is looked up in the curve at the
/// period's end date; when the curve has no quote for that date, the
/// builder's fallback rate applies (see [`ForwardCurve::rate_or`]). A
/// missing quote is a documented policy, not an error.
pub struct FloatingLegBuilder<'a> {
    schedule: &'a Schedule,
    curve: &'a ForwardCurve,
    notional: Real,
    spread: Spread,
    fallback_rate: Rate,
}

impl<'a> FloatingLegBuilder<'a> {
    /// Create a new builder from a schedule and a forward curve.
    pub fn new(schedule: &'a Schedule, curve: &'a ForwardCurve) -> Self {
        Self {
            schedule,
            curve,
            notional: 1.0,
            spread: 0.0,
            fallback_rate: 0.0,
        }
    }

    /// Set the notional.
    pub fn with_notional(mut self, notional: Real) -> Self {
        self.notional = notional;
        self
    }

    /// Set the additive spread applied on top of each forward rate.
    pub fn with_spread(mut self, spread: Spread) -> Self {
        self.spread = spread;
        self
    }

    /// Set the rate used for periods whose end date has no quote on the
    /// forward curve (conventionally the swap's fixed rate).
    pub fn with_fallback_rate(mut self, rate: Rate) -> Self {
        self.fallback_rate = rate;
        self
    }

    /// Build the leg.
    pub fn build(self) -> Leg {
        let dates = self.schedule.dates();
        let n = dates.len().saturating_sub(1);
        let mut leg: Leg = Vec::with_capacity(n);

        for i in 0..n {
            let start = dates[i];
            let end = dates[i + 1];
            let forward = self.curve.rate_or(end, self.fallback_rate);
            leg.push(Box::new(FloatingRateCoupon::new(
                end,
                self.notional,
                forward,
                self.spread,
                start,
                end,
            )));
        }

        leg
    }
}
