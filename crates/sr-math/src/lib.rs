//! # sr-math
//!
//! Mathematical utilities: the binomial distribution (via statrs), a
//! weighted statistics accumulator, floating-point comparison helpers, and
//! 1D interpolation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability distributions.
pub mod distributions;

/// 1D interpolation schemes.
pub mod interpolations;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use distributions::BinomialDistribution;
pub use interpolations::{Interpolation1D, LinearInterpolation, LogLinearInterpolation};
pub use statistics::Statistics;
