//! # sr-models
//!
//! Short-rate models and lattice calibration.
//!
//! [`HullWhite`] holds the model parameters and the target term structure;
//! [`CalibratedShortRateTree`] is its lattice representation, fitted so the
//! tree reproduces the curve's one-period forward discount factors.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Hull-White (extended Vasicek) model.
pub mod hull_white;

/// Fitting a state lattice to a discount curve.
pub mod tree_fit;

pub use hull_white::HullWhite;
pub use tree_fit::CalibratedShortRateTree;
