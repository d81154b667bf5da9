//! `Coupon` trait — cash flows that accrue interest over a period.

use crate::cashflow::CashFlow;
use irs_core::{Rate, Real, Time};
use irs_time::Date;

/// A cash flow accruing interest on a notional over an accrual period.
pub trait Coupon: CashFlow {
    /// Notional (face) amount the coupon accrues on.
    fn nominal(&self) -> Real;

    /// Accrual start date.
    fn accrual_start_date(&self) -> Date;

    /// Accrual end date.
    fn accrual_end_date(&self) -> Date;

    /// Accrual period as a year fraction.
    fn accrual_period(&self) -> Time;

    /// The effective annualized rate the coupon pays.
    fn rate(&self) -> Rate;
}
