//! # irs-termstructures
//!
//! Curve types for swap valuation: the externally-supplied forward curve and
//! the simple zero-rate discount curve.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Date → discount factor mapping under simple discounting.
pub mod discount_curve;

/// Date → forward rate mapping.
pub mod forward_curve;

pub use discount_curve::DiscountCurve;
pub use forward_curve::ForwardCurve;
