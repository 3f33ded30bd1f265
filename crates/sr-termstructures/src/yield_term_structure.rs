//! `YieldTermStructure` — yield / interest-rate term structures.
//!
//! This module defines the `YieldTermStructure` trait together with the three
//! fundamental quantities any yield curve must provide:
//!
//! * **discount factor** — `P(0,t)`
//! * **zero rate** — the continuously-compounded zero rate for maturity *t*
//! * **forward rate** — the instantaneous forward rate at a time

use crate::term_structure::TermStructure;
use sr_core::{DiscountFactor, Rate, Time};
use sr_time::{Date, DayCounter};
use std::sync::Arc;

/// A yield (interest-rate) term structure.
///
/// Implementors must provide **exactly one** of the three low-level methods:
///
/// * [`discount_impl`](YieldTermStructure::discount_impl)
/// * [`zero_rate_impl`](YieldTermStructure::zero_rate_impl)
/// * [`forward_rate_impl`](YieldTermStructure::forward_rate_impl)
///
/// Default implementations of the other two are provided via the
/// mathematical relationships that connect them.
pub trait YieldTermStructure: TermStructure {
    // ── Low-level impl hooks (override exactly one) ──────────────────────

    /// Return the discount factor for a given time `t`.
    ///
    /// Default: computed from `zero_rate_impl`.
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        if t == 0.0 {
            return 1.0;
        }
        let r = self.zero_rate_impl(t);
        (-r * t).exp()
    }

    /// Return the continuously-compounded zero rate for time `t`.
    ///
    /// Default: computed from `discount_impl`.
    fn zero_rate_impl(&self, t: Time) -> Rate {
        if t == 0.0 {
            // Use the instantaneous forward rate at t=0 as the limit
            return self.forward_rate_impl(0.0);
        }
        let df = self.discount_impl(t);
        -df.ln() / t
    }

    /// Return the instantaneous forward rate at time `t`.
    ///
    /// Default: computed via the negative derivative of log discount,
    /// using a central difference approximation of `∂ ln P / ∂t`.
    fn forward_rate_impl(&self, t: Time) -> Rate {
        let dt = 1.0e-4_f64;
        let t1 = (t - dt / 2.0).max(0.0);
        let t2 = t + dt / 2.0;
        let df1 = self.discount_impl(t1);
        let df2 = self.discount_impl(t2);
        (df1.ln() - df2.ln()) / (t2 - t1)
    }

    // ── Public interface ─────────────────────────────────────────────────

    /// Discount factor for a time.
    fn discount(&self, t: Time) -> DiscountFactor {
        self.discount_impl(t)
    }

    /// Discount factor for a date.
    fn discount_date(&self, date: Date) -> DiscountFactor {
        self.discount_impl(self.time_from_reference(date))
    }

    /// One-period forward discount factor between `t1` and `t2`:
    /// `P(t2) / P(t1)`.
    fn forward_discount(&self, t1: Time, t2: Time) -> DiscountFactor {
        self.discount_impl(t2) / self.discount_impl(t1)
    }
}

// ── Helpers for concrete term structures ──────────────────────────────────────

/// Common data shared by most yield-curve implementations.
#[derive(Debug)]
pub struct YieldTermStructureData {
    /// Reference date.
    pub reference_date: Date,
    /// Day counter for time calculations.
    pub day_counter: Arc<dyn DayCounter>,
}

impl YieldTermStructureData {
    /// Create a new data bundle.
    pub fn new(reference_date: Date, day_counter: impl DayCounter + 'static) -> Self {
        Self {
            reference_date,
            day_counter: Arc::new(day_counter),
        }
    }
}
