//! Error types for irswap.
//!
//! All fallible operations in the workspace share a single `thiserror`-derived
//! enum. Parameter validation goes through the `ensure!` macro; unconditional
//! failures deep in a computation go through `fail!`.

use thiserror::Error;

/// The top-level error type used throughout irswap.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Invalid argument supplied at construction or call time.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Date-related error (out-of-range arithmetic, invalid calendar date).
    #[error("date error: {0}")]
    Date(String),

    /// A computation left its mathematical domain (e.g. a non-positive
    /// discounting denominator).
    #[error("domain error: {0}")]
    Domain(String),
}

/// Shorthand `Result` type used throughout irswap.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate an argument, returning `Err(Error::InvalidArgument(...))` if
/// `$cond` is false.
///
/// # Example
/// ```
/// use irs_core::{ensure, errors::Error};
/// fn positive(x: f64) -> irs_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use irs_core::{fail, errors::Error};
/// fn always_err() -> irs_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
