//! `FlatForward` — a yield term structure with a constant forward rate.
//!
//! The simplest possible yield curve: a constant continuously-compounded
//! rate that applies for all maturities.  The rate may be negative.

use crate::term_structure::TermStructure;
use crate::yield_term_structure::{YieldTermStructure, YieldTermStructureData};
use sr_core::{Rate, Time};
use sr_time::{Date, DayCounter};

/// A flat (constant) forward-rate yield term structure.
///
/// Discount factors are computed as `P(t) = exp(-r * t)` where `r` is the
/// continuously-compounded flat rate.
#[derive(Debug)]
pub struct FlatForward {
    data: YieldTermStructureData,
    /// The continuously-compounded flat rate.
    rate: Rate,
}

impl FlatForward {
    /// Create a flat-forward curve from a continuously-compounded rate.
    pub fn new(
        reference_date: Date,
        rate: Rate,
        day_counter: impl DayCounter + 'static,
    ) -> Self {
        Self {
            data: YieldTermStructureData::new(reference_date, day_counter),
            rate,
        }
    }

    /// The continuously-compounded flat rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl TermStructure for FlatForward {
    fn reference_date(&self) -> Date {
        self.data.reference_date
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.data.day_counter
    }

    fn max_date(&self) -> Date {
        Date::MAX
    }
}

impl YieldTermStructure for FlatForward {
    fn discount_impl(&self, t: Time) -> f64 {
        (-self.rate * t).exp()
    }

    fn zero_rate_impl(&self, _t: Time) -> Rate {
        self.rate
    }

    fn forward_rate_impl(&self, _t: Time) -> Rate {
        self.rate
    }
}
