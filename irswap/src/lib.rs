//! # irswap
//!
//! A plain-vanilla interest-rate swap pricing library: coupon schedule
//! generation, fixed and floating leg cash flows, simple zero-rate
//! discounting, and netted present value.
//!
//! This crate is a **façade** that re-exports the underlying workspace
//! crates. Application code should depend on this crate rather than the
//! individual `irs-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! irswap = "0.1"
//! ```
//!
//! ```rust
//! use irswap::currencies::USD;
//! use irswap::instruments::Swap;
//! use irswap::termstructures::ForwardCurve;
//! use irswap::time::Date;
//!
//! let swap = Swap::builder(
//!     Date::from_ymd(2024, 1, 1)?,
//!     Date::from_ymd(2025, 1, 1)?,
//!     6,           // semi-annual coupons
//!     1_000_000.0, // notional
//!     0.05,        // fixed rate
//!     &USD,
//!     &USD,
//! )
//! .build()?;
//!
//! // An empty forward curve falls back to the fixed rate on every period,
//! // so the two legs cancel exactly.
//! let npv = swap.present_value(0.05, &ForwardCurve::new())?;
//! assert_eq!(npv, 0.0);
//! # Ok::<(), irswap::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use irs_core as core;

/// Date, day counter, and schedule types.
pub use irs_time as time;

/// Currency definitions.
pub use irs_currencies as currencies;

/// Forward and discount curves.
pub use irs_termstructures as termstructures;

/// Cash flows and coupons.
pub use irs_cashflows as cashflows;

/// The swap instrument.
pub use irs_instruments as instruments;
