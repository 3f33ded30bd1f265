//! # sr-termstructures
//!
//! Yield / discount term structures.
//!
//! A [`YieldTermStructure`] is the read-only collaborator a lattice is
//! calibrated against: it maps a time to maturity (or a date) to a discount
//! factor.  Two concrete curves are provided — a flat continuously-compounded
//! curve and a curve interpolated through discount-factor pillars.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `TermStructure` base trait.
pub mod term_structure;

/// `YieldTermStructure` trait.
pub mod yield_term_structure;

/// Flat (constant-rate) curve.
pub mod flat_forward;

/// Curve interpolated through discount-factor pillars.
pub mod interpolated_discount_curve;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use flat_forward::FlatForward;
pub use interpolated_discount_curve::{
    InterpolatedDiscountCurve, InterpolationBuilder, Linear, LogLinear,
};
pub use term_structure::TermStructure;
pub use yield_term_structure::{YieldTermStructure, YieldTermStructureData};
