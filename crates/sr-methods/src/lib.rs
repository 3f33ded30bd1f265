//! # sr-methods
//!
//! Numerical methods: recombining lattices for short-rate state variables.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Lattice methods.
pub mod lattice;

pub use lattice::{ShortRateBinomialTree, TimeGrid};
