//! `InterpolatedDiscountCurve` — a yield term structure bootstrapped from
//! discount factors.
//!
//! The curve stores (date, discount-factor) pairs and interpolates them as a
//! function of time.  Zero rates and forward rates are derived from `P(t)`.

use crate::term_structure::TermStructure;
use crate::yield_term_structure::{YieldTermStructure, YieldTermStructureData};
use sr_core::{errors::Result, DiscountFactor, Real, Time};
use sr_math::Interpolation1D;
use sr_time::{Date, DayCounter};
use std::sync::Arc;

/// Trait for creating an interpolation from `(xs, ys)` slices.
///
/// This lets callers choose the interpolation method (linear, log-linear)
/// without the curve needing to know the concrete type.
pub trait InterpolationBuilder: std::fmt::Debug {
    /// Build an interpolation from the given x and y values.
    fn build(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation1D>>;
}

/// Linear interpolation builder.
#[derive(Debug, Clone, Copy)]
pub struct Linear;

impl InterpolationBuilder for Linear {
    fn build(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation1D>> {
        Ok(Box::new(sr_math::LinearInterpolation::new(xs, ys)?))
    }
}

/// Log-linear interpolation builder.
#[derive(Debug, Clone, Copy)]
pub struct LogLinear;

impl InterpolationBuilder for LogLinear {
    fn build(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation1D>> {
        Ok(Box::new(sr_math::LogLinearInterpolation::new(xs, ys)?))
    }
}

/// A yield curve defined by discount factors at known dates.
///
/// Log-linear interpolation on discounts gives piecewise-constant forward
/// rates; linear interpolation on discounts is also commonly used.
#[derive(Debug)]
pub struct InterpolatedDiscountCurve {
    data: YieldTermStructureData,
    dates: Vec<Date>,
    times: Vec<Real>,
    discounts: Vec<DiscountFactor>,
    interp: Box<dyn Interpolation1D>,
    max_date: Date,
}

impl InterpolatedDiscountCurve {
    /// Build a discount-factor curve from dates and corresponding discount factors.
    ///
    /// The first date must be the reference date with a discount factor of 1.0.
    /// Dates must be sorted in ascending order.
    ///
    /// # Arguments
    /// * `dates` — pillar dates (first entry = reference date)
    /// * `discounts` — discount factors at each date (first must be 1.0)
    /// * `day_counter` — used for date → time conversion
    /// * `builder` — interpolation strategy
    pub fn new(
        dates: &[Date],
        discounts: &[DiscountFactor],
        day_counter: impl DayCounter + 'static,
        builder: &dyn InterpolationBuilder,
    ) -> Result<Self> {
        sr_core::ensure!(
            dates.len() >= 2,
            "need at least 2 dates (reference + 1 pillar)"
        );
        sr_core::ensure!(
            dates.len() == discounts.len(),
            "dates and discounts must have the same length"
        );
        sr_core::ensure!(
            (discounts[0] - 1.0).abs() < 1e-12,
            "first discount factor must be 1.0"
        );
        sr_core::ensure!(
            dates.windows(2).all(|w| w[0] < w[1]),
            "pillar dates must be strictly ascending"
        );

        let reference_date = dates[0];
        let dc: Arc<dyn DayCounter> = Arc::new(day_counter);

        let times: Vec<Real> = dates
            .iter()
            .map(|&d| dc.year_fraction(reference_date, d))
            .collect();

        let interp = builder.build(&times, discounts)?;
        let max_date = *dates.last().unwrap();

        Ok(Self {
            data: YieldTermStructureData {
                reference_date,
                day_counter: dc,
            },
            dates: dates.to_vec(),
            times,
            discounts: discounts.to_vec(),
            interp,
            max_date,
        })
    }

    /// Return the pillar dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Return the pillar times.
    pub fn times(&self) -> &[Real] {
        &self.times
    }

    /// Return the pillar discount factors.
    pub fn discounts(&self) -> &[DiscountFactor] {
        &self.discounts
    }
}

impl TermStructure for InterpolatedDiscountCurve {
    fn reference_date(&self) -> Date {
        self.data.reference_date
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.data.day_counter
    }

    fn max_date(&self) -> Date {
        self.max_date
    }
}

impl YieldTermStructure for InterpolatedDiscountCurve {
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        if t == 0.0 {
            return 1.0;
        }
        self.interp.operator(t)
    }
}
