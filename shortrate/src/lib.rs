//! # shortrate
//!
//! Short-rate lattice construction and discount-curve calibration.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `sr-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use shortrate::methods::ShortRateBinomialTree;
//! use shortrate::models::CalibratedShortRateTree;
//! use shortrate::termstructures::FlatForward;
//! use shortrate::time::{Actual365Fixed, Date};
//!
//! // A 20-step lattice over 10 calendar days for a mean-reverting state
//! // variable with speed 0.9 and volatility 1.5.
//! let dt = 10.0 / 365.0 / 20.0;
//! let tree = ShortRateBinomialTree::mean_reverting(0.9, 1.5, dt, 20).unwrap();
//!
//! // Fit it to a flat 1% curve.
//! let as_of = Date::from_ymd(2026, 1, 2).unwrap();
//! let curve = FlatForward::new(as_of, 0.01, Actual365Fixed);
//! let fitted = CalibratedShortRateTree::fit(&tree, &curve, 1e-12).unwrap();
//!
//! // Every layer reproduces the curve's one-period forward discount factor.
//! let mean_z = fitted.mean_discount_factor(5);
//! assert!((mean_z - (-0.01_f64 * dt).exp()).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use sr_core as core;

/// Date and day-counter types.
pub use sr_time as time;

/// Distributions, statistics, and interpolation utilities.
pub use sr_math as math;

/// Discount-curve term structures.
pub use sr_termstructures as termstructures;

/// Stochastic process definitions.
pub use sr_processes as processes;

/// Lattice methods.
pub use sr_methods as methods;

/// Short-rate models and lattice calibration.
pub use sr_models as models;
