//! # irs-cashflows
//!
//! Cash flows, coupons, and leg builders for swap legs, plus leg-level
//! analysis helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CashFlow` trait, `Leg`, and simple cash flows.
pub mod cashflow;

/// Leg-level analysis functions (`npv`, `bps`, date queries).
pub mod cashflows;

/// `Coupon` trait — accrual-bearing cash flows.
pub mod coupon;

/// Fixed-rate coupons and leg builder.
pub mod fixed_rate_coupon;

/// Floating-rate coupons and leg builder.
pub mod floating_rate_coupon;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cashflow::{CashFlow, Leg, SimpleCashFlow};
pub use cashflows::{bps, maturity_date, next_cashflow_date, npv, previous_cashflow_date};
pub use coupon::Coupon;
pub use fixed_rate_coupon::{FixedLegBuilder, FixedRateCoupon};
pub use floating_rate_coupon::{FloatingLegBuilder, FloatingRateCoupon};
