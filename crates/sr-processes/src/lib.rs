//! # sr-processes
//!
//! Stochastic process definitions.
//!
//! The lattice builder consumes a one-dimensional process through the
//! [`StochasticProcess1D`] trait; [`OrnsteinUhlenbeckProcess`] supplies the
//! mean-reverting Gaussian dynamics behind the short-rate state variable.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `StochasticProcess1D` trait.
pub mod stochastic_process;

/// Ornstein-Uhlenbeck mean-reverting process.
pub mod ornstein_uhlenbeck;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use ornstein_uhlenbeck::OrnsteinUhlenbeckProcess;
pub use stochastic_process::StochasticProcess1D;
