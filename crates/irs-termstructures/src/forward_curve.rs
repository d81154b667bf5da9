//! `ForwardCurve` — an externally-supplied mapping from coupon date to
//! forward rate.
//!
//! The curve is an input to floating-leg pricing; how it is built
//! (bootstrapping, interpolation) is outside the scope of this library.

use irs_core::Rate;
use irs_time::Date;
use std::collections::BTreeMap;

/// An ordered mapping from date to annualized forward rate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForwardCurve {
    rates: BTreeMap<Date, Rate>,
}

impl ForwardCurve {
    /// Create an empty curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or overwrite) the forward rate for a date.
    pub fn insert(&mut self, date: Date, rate: Rate) {
        self.rates.insert(date, rate);
    }

    /// Builder-style insertion.
    pub fn with_rate(mut self, date: Date, rate: Rate) -> Self {
        self.insert(date, rate);
        self
    }

    /// The forward rate quoted for `date`, if any.
    pub fn forward_rate(&self, date: Date) -> Option<Rate> {
        self.rates.get(&date).copied()
    }

    /// The forward rate for `date`, falling back to `fallback` when the
    /// curve has no quote for that exact date.
    ///
    /// This is the documented lookup policy for floating-leg pricing: a
    /// missing pillar is not an error, it resolves to the caller-supplied
    /// fallback rate (conventionally the swap's fixed rate).
    pub fn rate_or(&self, date: Date, fallback: Rate) -> Rate {
        self.forward_rate(date).unwrap_or(fallback)
    }

    /// Number of quoted dates.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Return `true` if the curve has no quotes.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterate over the quoted (date, rate) pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, Rate)> + '_ {
        self.rates.iter().map(|(&d, &r)| (d, r))
    }
}

impl FromIterator<(Date, Rate)> for ForwardCurve {
    fn from_iter<I: IntoIterator<Item = (Date, Rate)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}
