//! `CashFlow` trait — the base for all cash-flow types.
//!
//! A cash flow is an amount of money paid or received at a specific date.

use irs_core::Real;
use irs_time::Date;
use std::fmt;

/// Base trait for all cash flows.
///
/// A cash flow knows its payment date and can compute the amount paid on
/// that date. For coupons, the amount depends on a rate; for simple cash
/// flows, it is a fixed value.
pub trait CashFlow: fmt::Debug + Send + Sync {
    /// The date on which this cash flow is paid.
    fn date(&self) -> Date;

    /// The amount of cash paid on the payment date.
    fn amount(&self) -> Real;

    /// Whether this cash flow has already occurred relative to `ref_date`.
    /// Uses a strict "less-than" comparison: a flow on `ref_date` has NOT
    /// yet occurred.
    fn has_occurred(&self, ref_date: Date) -> bool {
        self.date() < ref_date
    }
}

/// A `Leg` is a sequence of cash flows.
pub type Leg = Vec<Box<dyn CashFlow>>;

/// A simple cash flow: a fixed amount at a fixed date.
#[derive(Debug, Clone)]
pub struct SimpleCashFlow {
    /// The payment amount.
    pub amount: Real,
    /// The payment date.
    pub date: Date,
}

impl SimpleCashFlow {
    /// Create a new simple cash flow.
    pub fn new(amount: Real, date: Date) -> Self {
        Self { amount, date }
    }
}

impl CashFlow for SimpleCashFlow {
    fn date(&self) -> Date {
        self.date
    }

    fn amount(&self) -> Real {
        self.amount
    }
}
