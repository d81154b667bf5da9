//! # irs-time
//!
//! Date, day counter, and coupon schedule types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `DayCounter` trait and the Actual/360 convention.
pub mod day_counter;

/// `Schedule` — an ordered sequence of coupon dates.
pub mod schedule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use day_counter::{Actual360, DayCounter};
pub use schedule::{Schedule, ScheduleBuilder};
