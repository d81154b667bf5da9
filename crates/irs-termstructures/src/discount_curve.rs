//! `DiscountCurve` — per-date discount factors from a flat zero rate.
//!
//! Discounting is simple (non-compounded): `df(d) = 1 / (1 + r * t)` with
//! `t` the Actual/360 year fraction from the reference date to `d`. This is
//! a deliberate modelling simplification, matching the accrual convention
//! used on the legs.

use irs_core::errors::{Error, Result};
use irs_core::{DiscountFactor, Rate, Time};
use irs_time::{Actual360, Date, DayCounter};
use std::collections::BTreeMap;

/// A mapping from coupon date to discount factor.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountCurve {
    reference_date: Date,
    factors: BTreeMap<Date, DiscountFactor>,
}

impl DiscountCurve {
    /// Build a curve from a flat annualized zero rate over the given dates.
    ///
    /// One factor is produced per date strictly after `reference_date`;
    /// the reference date itself (conventionally the first schedule date)
    /// carries no factor.
    ///
    /// # Errors
    /// Returns `Error::Domain` if `1 + zero_rate * t` is not strictly
    /// positive for some date — a simple-discounting factor is undefined
    /// there.
    pub fn flat(reference_date: Date, zero_rate: Rate, dates: &[Date]) -> Result<Self> {
        let dc = Actual360;
        let mut factors = BTreeMap::new();
        for &d in dates {
            if d <= reference_date {
                continue;
            }
            let t = dc.year_fraction(reference_date, d);
            let denominator = 1.0 + zero_rate * t;
            if denominator <= 0.0 {
                return Err(Error::Domain(format!(
                    "simple discount factor undefined at {d}: 1 + {zero_rate} * {t} = {denominator}"
                )));
            }
            factors.insert(d, 1.0 / denominator);
        }
        Ok(Self {
            reference_date,
            factors,
        })
    }

    /// The curve's reference date.
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// The discount factor for `date`, if the curve has one.
    pub fn factor(&self, date: Date) -> Option<DiscountFactor> {
        self.factors.get(&date).copied()
    }

    /// Year fraction from the reference date to `date` under the curve's
    /// day-count convention.
    pub fn year_fraction(&self, date: Date) -> Time {
        Actual360.year_fraction(self.reference_date, date)
    }

    /// Number of dates carrying a factor.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Return `true` if the curve carries no factors.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Iterate over the (date, factor) pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, DiscountFactor)> + '_ {
        self.factors.iter().map(|(&d, &f)| (d, f))
    }
}
