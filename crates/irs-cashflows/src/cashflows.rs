//! Leg-level analysis functions.
//!
//! Utility functions that operate on a `Leg`:
//! - `npv` — present value against a discount curve
//! - `bps` — sensitivity to a one-basis-point parallel shift
//! - `maturity_date`, `previous_cashflow_date`, `next_cashflow_date`

use crate::cashflow::{CashFlow, Leg};
use irs_core::errors::Result;
use irs_core::{fail, Real};
use irs_termstructures::DiscountCurve;
use irs_time::Date;

// ── Leg queries ──────────────────────────────────────────────────────────────

/// The maturity (last payment) date of a leg.
pub fn maturity_date(leg: &Leg) -> Option<Date> {
    leg.iter().map(|cf| cf.date()).max()
}

/// The date of the last cash flow on or before `ref_date`.
pub fn previous_cashflow_date(leg: &Leg, ref_date: Date) -> Option<Date> {
    leg.iter()
        .filter(|cf| cf.date() <= ref_date)
        .map(|cf| cf.date())
        .max()
}

/// The date of the next cash flow strictly after `ref_date`.
pub fn next_cashflow_date(leg: &Leg, ref_date: Date) -> Option<Date> {
    leg.iter()
        .filter(|cf| cf.date() > ref_date)
        .map(|cf| cf.date())
        .min()
}

// ── Present value ────────────────────────────────────────────────────────────

/// Net present value of a leg against a discount curve.
///
/// # Errors
/// Every cash-flow date must carry a factor on the curve; a leg and curve
/// derived from the same coupon schedule satisfy this by construction.
pub fn npv(leg: &Leg, curve: &DiscountCurve) -> Result<Real> {
    let mut result = 0.0;
    for cf in leg {
        let df = match curve.factor(cf.date()) {
            Some(df) => df,
            None => fail!("no discount factor for cash flow at {}", cf.date()),
        };
        result += cf.amount() * df;
    }
    Ok(result)
}

/// Sensitivity of a leg's present value to a one-basis-point parallel shift
/// of the discounting rate, approximated as `sum_i(t_i * df_i * amount_i) * 0.0001`.
pub fn bps(leg: &Leg, curve: &DiscountCurve) -> Result<Real> {
    let mut result = 0.0;
    for cf in leg {
        let df = match curve.factor(cf.date()) {
            Some(df) => df,
            None => fail!("no discount factor for cash flow at {}", cf.date()),
        };
        let t = curve.year_fraction(cf.date());
        result += t * df * cf.amount();
    }
    Ok(result * 0.0001)
}
