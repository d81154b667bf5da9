//! # irs-instruments
//!
//! The plain-vanilla interest-rate swap instrument.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The `Swap` instrument and its valuation.
pub mod swap;

pub use swap::{LegId, Swap, SwapBuilder};
