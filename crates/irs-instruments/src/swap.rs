//! The plain-vanilla interest-rate swap.
//!
//! A `Swap` holds immutable contract parameters; every derived quantity
//! (coupon schedule, leg cash flows, discount curve, present value) is
//! recomputed from them on each call. The forward curve and the flat zero
//! rate are supplied per valuation call and are not owned by the swap.

use irs_cashflows::{cashflows, FixedLegBuilder, FloatingLegBuilder, Leg};
use irs_core::errors::{Error, Result};
use irs_core::{ensure, Rate, Real, Spread};
use irs_currencies::Currency;
use irs_termstructures::{DiscountCurve, ForwardCurve};
use irs_time::{Actual360, Date, DayCounter, Schedule, ScheduleBuilder};

// ────────────────────────────────────────────────────────────────────────────
// Leg slots
// ────────────────────────────────────────────────────────────────────────────

/// One of the swap's two leg slots.
///
/// The contract names which slot carries the fixed rate and which slot the
/// holder pays; the slots themselves are just labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegId {
    /// The first leg slot.
    Leg1,
    /// The second leg slot.
    Leg2,
}

impl std::fmt::Display for LegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LegId::Leg1 => write!(f, "leg 1"),
            LegId::Leg2 => write!(f, "leg 2"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Swap
// ────────────────────────────────────────────────────────────────────────────

/// A fixed-for-floating interest-rate swap.
///
/// Constructed through [`SwapBuilder`], which validates all parameter
/// invariants up front; the instrument itself is immutable.
#[derive(Debug, Clone)]
pub struct Swap {
    start_date: Date,
    end_date: Date,
    frequency_months: u32,
    notional: Real,
    rate: Rate,
    leg1_currency: &'static Currency,
    leg2_currency: &'static Currency,
    fixed_leg: LegId,
    float_leg: LegId,
    pay_leg: LegId,
    receive_leg: LegId,
    float_spread: Spread,
}

impl Swap {
    /// Begin building a swap. See [`SwapBuilder`] for the defaults.
    pub fn builder(
        start_date: Date,
        end_date: Date,
        frequency_months: u32,
        notional: Real,
        rate: Rate,
        leg1_currency: &'static Currency,
        leg2_currency: &'static Currency,
    ) -> SwapBuilder {
        SwapBuilder::new(
            start_date,
            end_date,
            frequency_months,
            notional,
            rate,
            leg1_currency,
            leg2_currency,
        )
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The swap's effective (accrual start) date.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// The swap's termination date.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Coupon interval in months.
    pub fn frequency_months(&self) -> u32 {
        self.frequency_months
    }

    /// Notional principal; scales coupon amounts, never itself exchanged.
    pub fn notional(&self) -> Real {
        self.notional
    }

    /// The fixed-leg annual rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Currency of the first leg slot (informational only).
    pub fn leg1_currency(&self) -> &'static Currency {
        self.leg1_currency
    }

    /// Currency of the second leg slot (informational only).
    pub fn leg2_currency(&self) -> &'static Currency {
        self.leg2_currency
    }

    /// Which leg slot carries the fixed rate.
    pub fn fixed_leg(&self) -> LegId {
        self.fixed_leg
    }

    /// Which leg slot carries the floating rate.
    pub fn float_leg(&self) -> LegId {
        self.float_leg
    }

    /// Which leg slot the holder pays.
    pub fn pay_leg(&self) -> LegId {
        self.pay_leg
    }

    /// Which leg slot the holder receives.
    pub fn receive_leg(&self) -> LegId {
        self.receive_leg
    }

    /// Additive spread applied to floating-leg forward rates.
    pub fn float_spread(&self) -> Spread {
        self.float_spread
    }

    // ── Derived quantities ────────────────────────────────────────────────────

    /// The coupon date schedule, from the start date to the end date at the
    /// swap's coupon interval.
    pub fn coupon_dates(&self) -> Result<Schedule> {
        ScheduleBuilder::new(self.start_date, self.end_date, self.frequency_months).build()
    }

    /// The fixed-leg cash flows: one coupon per period paying
    /// `notional * rate * accrual` on the period's end date.
    pub fn fixed_leg_flows(&self) -> Result<Leg> {
        let schedule = self.coupon_dates()?;
        Ok(FixedLegBuilder::new(&schedule)
            .with_notional(self.notional)
            .with_rate(self.rate)
            .build())
    }

    /// The floating-leg cash flows: one coupon per period paying
    /// `notional * (forward + spread) * accrual` on the period's end date.
    ///
    /// Forward rates are looked up at each period's end date; a date absent
    /// from `forward_curve` falls back to the swap's fixed rate.
    pub fn floating_leg_flows(&self, forward_curve: &ForwardCurve) -> Result<Leg> {
        let schedule = self.coupon_dates()?;
        Ok(FloatingLegBuilder::new(&schedule, forward_curve)
            .with_notional(self.notional)
            .with_spread(self.float_spread)
            .with_fallback_rate(self.rate)
            .build())
    }

    /// The discount curve implied by a flat zero rate: one simple discount
    /// factor per coupon date, excluding the start date.
    pub fn discount_curve(&self, zero_rate: Rate) -> Result<DiscountCurve> {
        let schedule = self.coupon_dates()?;
        DiscountCurve::flat(self.start_date, zero_rate, schedule.dates())
    }

    /// Present value of the fixed leg.
    pub fn fixed_leg_pv(&self, zero_rate: Rate) -> Result<Real> {
        let curve = self.discount_curve(zero_rate)?;
        cashflows::npv(&self.fixed_leg_flows()?, &curve)
    }

    /// Present value of the floating leg.
    pub fn floating_leg_pv(&self, zero_rate: Rate, forward_curve: &ForwardCurve) -> Result<Real> {
        let curve = self.discount_curve(zero_rate)?;
        cashflows::npv(&self.floating_leg_flows(forward_curve)?, &curve)
    }

    /// Net present value to the holder: `pv_receive - pv_pay`.
    ///
    /// Each leg PV is the sum of its discounted cash flows; both legs are
    /// built from the identical coupon schedule, so every cash-flow date is
    /// guaranteed a discount factor. The pay/receive sides are resolved from
    /// the leg-slot assignments validated at construction.
    pub fn present_value(&self, zero_rate: Rate, forward_curve: &ForwardCurve) -> Result<Real> {
        let curve = self.discount_curve(zero_rate)?;
        let pv_fixed = cashflows::npv(&self.fixed_leg_flows()?, &curve)?;
        let pv_float = cashflows::npv(&self.floating_leg_flows(forward_curve)?, &curve)?;

        let pv_pay = if self.pay_leg == self.fixed_leg {
            pv_fixed
        } else {
            pv_float
        };
        let pv_receive = if self.receive_leg == self.float_leg {
            pv_float
        } else {
            pv_fixed
        };
        Ok(pv_receive - pv_pay)
    }

    /// The fixed rate that makes the two leg PVs equal, computed in closed
    /// form from the fixed-leg annuity.
    ///
    /// A swap re-built with this rate (all else equal) has zero present
    /// value.
    pub fn fair_rate(&self, zero_rate: Rate, forward_curve: &ForwardCurve) -> Result<Rate> {
        let schedule = self.coupon_dates()?;
        let curve = DiscountCurve::flat(self.start_date, zero_rate, schedule.dates())?;
        let dc = Actual360;

        let mut annuity = 0.0;
        for w in schedule.dates().windows(2) {
            let df = match curve.factor(w[1]) {
                Some(df) => df,
                // Unreachable: curve and periods come from the same schedule
                None => {
                    return Err(Error::Runtime(format!("no discount factor for {}", w[1])))
                }
            };
            annuity += self.notional * dc.year_fraction(w[0], w[1]) * df;
        }
        if annuity == 0.0 {
            return Err(Error::Domain(
                "fair rate undefined for a zero fixed-leg annuity".into(),
            ));
        }

        let pv_float = cashflows::npv(&self.floating_leg_flows(forward_curve)?, &curve)?;
        Ok(pv_float / annuity)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Builder
// ────────────────────────────────────────────────────────────────────────────

/// Builder for [`Swap`].
///
/// Defaults follow market convention: leg 1 fixed and paid, leg 2 floating
/// and received, zero floating spread.
#[derive(Debug, Clone)]
pub struct SwapBuilder {
    start_date: Date,
    end_date: Date,
    frequency_months: u32,
    notional: Real,
    rate: Rate,
    leg1_currency: &'static Currency,
    leg2_currency: &'static Currency,
    fixed_leg: LegId,
    float_leg: LegId,
    pay_leg: LegId,
    receive_leg: LegId,
    float_spread: Spread,
}

impl SwapBuilder {
    /// Begin building a swap.
    pub fn new(
        start_date: Date,
        end_date: Date,
        frequency_months: u32,
        notional: Real,
        rate: Rate,
        leg1_currency: &'static Currency,
        leg2_currency: &'static Currency,
    ) -> Self {
        Self {
            start_date,
            end_date,
            frequency_months,
            notional,
            rate,
            leg1_currency,
            leg2_currency,
            fixed_leg: LegId::Leg1,
            float_leg: LegId::Leg2,
            pay_leg: LegId::Leg1,
            receive_leg: LegId::Leg2,
            float_spread: 0.0,
        }
    }

    /// Assign the fixed-rate slot.
    pub fn with_fixed_leg(mut self, leg: LegId) -> Self {
        self.fixed_leg = leg;
        self
    }

    /// Assign the floating-rate slot.
    pub fn with_float_leg(mut self, leg: LegId) -> Self {
        self.float_leg = leg;
        self
    }

    /// Assign the slot the holder pays.
    pub fn with_pay_leg(mut self, leg: LegId) -> Self {
        self.pay_leg = leg;
        self
    }

    /// Assign the slot the holder receives.
    pub fn with_receive_leg(mut self, leg: LegId) -> Self {
        self.receive_leg = leg;
        self
    }

    /// Set the additive spread on floating-leg forward rates.
    pub fn with_float_spread(mut self, spread: Spread) -> Self {
        self.float_spread = spread;
        self
    }

    /// Build the `Swap`, validating all parameter invariants.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if the start date is not strictly
    /// before the end date, the frequency is zero, the fixed and floating
    /// slots coincide, or the pay and receive slots coincide. (With two leg
    /// slots, the latter two checks make `{pay, receive}` always equal
    /// `{fixed, float}` as a set.)
    pub fn build(self) -> Result<Swap> {
        ensure!(
            self.start_date < self.end_date,
            "start date {} must be before end date {}",
            self.start_date,
            self.end_date
        );
        ensure!(
            self.frequency_months >= 1,
            "frequency must be at least one month"
        );
        ensure!(
            self.fixed_leg != self.float_leg,
            "fixed and floating legs must be distinct slots, both are {}",
            self.fixed_leg
        );
        ensure!(
            self.pay_leg != self.receive_leg,
            "pay and receive legs must be distinct slots, both are {}",
            self.pay_leg
        );

        Ok(Swap {
            start_date: self.start_date,
            end_date: self.end_date,
            frequency_months: self.frequency_months,
            notional: self.notional,
            rate: self.rate,
            leg1_currency: self.leg1_currency,
            leg2_currency: self.leg2_currency,
            fixed_leg: self.fixed_leg,
            float_leg: self.float_leg,
            pay_leg: self.pay_leg,
            receive_leg: self.receive_leg,
            float_spread: self.float_spread,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irs_cashflows::CashFlow;
    use irs_currencies::{EUR, USD};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn one_year_swap() -> Swap {
        Swap::builder(
            date(2024, 1, 1),
            date(2025, 1, 1),
            6,
            1_000_000.0,
            0.05,
            &USD,
            &USD,
        )
        .build()
        .unwrap()
    }

    #[test]
    fn builder_defaults() {
        let swap = one_year_swap();
        assert_eq!(swap.start_date(), date(2024, 1, 1));
        assert_eq!(swap.end_date(), date(2025, 1, 1));
        assert_eq!(swap.frequency_months(), 6);
        assert_eq!(swap.notional(), 1_000_000.0);
        assert_eq!(swap.rate(), 0.05);
        assert_eq!(swap.fixed_leg(), LegId::Leg1);
        assert_eq!(swap.float_leg(), LegId::Leg2);
        assert_eq!(swap.pay_leg(), LegId::Leg1);
        assert_eq!(swap.receive_leg(), LegId::Leg2);
        assert_eq!(swap.float_spread(), 0.0);
        assert_eq!(swap.leg1_currency().code, "USD");
        assert_eq!(swap.leg2_currency().code, "USD");
    }

    #[test]
    fn invalid_parameters_rejected() {
        let build = |start: Date, end: Date, freq: u32| {
            Swap::builder(start, end, freq, 1_000_000.0, 0.05, &USD, &EUR).build()
        };
        assert!(build(date(2025, 1, 1), date(2024, 1, 1), 6).is_err());
        assert!(build(date(2024, 1, 1), date(2024, 1, 1), 6).is_err());
        assert!(build(date(2024, 1, 1), date(2025, 1, 1), 0).is_err());
    }

    #[test]
    fn inconsistent_leg_slots_rejected() {
        let base = || {
            Swap::builder(
                date(2024, 1, 1),
                date(2025, 1, 1),
                6,
                1_000_000.0,
                0.05,
                &USD,
                &USD,
            )
        };
        assert!(base().with_float_leg(LegId::Leg1).build().is_err());
        assert!(base().with_receive_leg(LegId::Leg1).build().is_err());
        assert!(base()
            .with_fixed_leg(LegId::Leg2)
            .with_float_leg(LegId::Leg1)
            .with_pay_leg(LegId::Leg2)
            .with_receive_leg(LegId::Leg1)
            .build()
            .is_ok());
    }

    #[test]
    fn coupon_dates_match_schedule() {
        let swap = one_year_swap();
        let sched = swap.coupon_dates().unwrap();
        assert_eq!(
            sched.dates(),
            &[date(2024, 1, 1), date(2024, 7, 1), date(2025, 1, 1)]
        );
    }

    #[test]
    fn legs_share_the_coupon_dates() {
        let swap = one_year_swap();
        let sched = swap.coupon_dates().unwrap();
        let curve = ForwardCurve::new().with_rate(date(2024, 7, 1), 0.04);

        let fixed_dates: Vec<Date> = swap
            .fixed_leg_flows()
            .unwrap()
            .iter()
            .map(|cf| cf.date())
            .collect();
        let float_dates: Vec<Date> = swap
            .floating_leg_flows(&curve)
            .unwrap()
            .iter()
            .map(|cf| cf.date())
            .collect();

        assert_eq!(fixed_dates, sched.dates()[1..].to_vec());
        assert_eq!(float_dates, fixed_dates);
    }

    #[test]
    fn discount_curve_excludes_start_date() {
        let swap = one_year_swap();
        let curve = swap.discount_curve(0.05).unwrap();
        assert_eq!(curve.len(), 2);
        assert!(curve.factor(date(2024, 1, 1)).is_none());
        assert!(curve.factor(date(2024, 7, 1)).is_some());
    }
}
