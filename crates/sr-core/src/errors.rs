//! Error types for shortrate-rs.
//!
//! All fallible operations in the workspace return [`Result`] with a single
//! `thiserror`-derived enum.  Parameter validation goes through the `ensure!`
//! macro; unconditional failures through `fail!`.  Calibration failures get
//! their own variant so callers can tell an invalid input apart from a fit
//! that did not reach the requested accuracy.

use thiserror::Error;

/// The top-level error type used throughout shortrate-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (invalid parameter or input).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// A lattice could not be fitted to the target curve within tolerance.
    #[error("calibration failed: {0}")]
    Calibration(String),
}

/// Shorthand `Result` type used throughout shortrate-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a precondition, returning `Err(Error::Precondition(...))` if
/// `$cond` is false.
///
/// # Example
/// ```
/// use sr_core::{ensure, errors::Error};
/// fn positive(x: f64) -> sr_core::errors::Result<f64> {
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
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use sr_core::{fail, errors::Error};
/// fn always_err() -> sr_core::errors::Result<()> {
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
