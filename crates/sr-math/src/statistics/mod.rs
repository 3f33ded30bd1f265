//! Weighted statistics accumulator.

use sr_core::Real;

/// Incremental weighted-sample statistics.
///
/// Accumulates weighted samples and computes mean, variance, standard
/// deviation, min, max, and count.  Weights are treated as probability
/// masses: `variance` is the population variance under the supplied
/// weights, with no small-sample correction.
#[derive(Debug, Clone)]
pub struct Statistics {
    count: usize,
    sum_w: Real,
    sum_wx: Real,
    sum_wx2: Real,
    min: Real,
    max: Real,
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            sum_w: 0.0,
            sum_wx: 0.0,
            sum_wx2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a single sample with weight 1.
    pub fn add(&mut self, x: Real) {
        self.add_weighted(x, 1.0);
    }

    /// Add a weighted sample.
    pub fn add_weighted(&mut self, x: Real, weight: Real) {
        self.count += 1;
        self.sum_w += weight;
        self.sum_wx += weight * x;
        self.sum_wx2 += weight * x * x;
        if x < self.min {
            self.min = x;
        }
        if x > self.max {
            self.max = x;
        }
    }

    /// Number of samples.
    pub fn samples(&self) -> usize {
        self.count
    }

    /// Sum of weights.
    pub fn sum_weights(&self) -> Real {
        self.sum_w
    }

    /// Weighted mean.  Returns `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        if self.sum_w == 0.0 {
            None
        } else {
            Some(self.sum_wx / self.sum_w)
        }
    }

    /// Weighted population variance.  Returns `None` if no samples have been
    /// added.
    pub fn variance(&self) -> Option<Real> {
        if self.sum_w == 0.0 {
            return None;
        }
        let m = self.sum_wx / self.sum_w;
        // Clamp: roundoff can take sum_wx2/sum_w - m² slightly negative
        Some((self.sum_wx2 / self.sum_w - m * m).max(0.0))
    }

    /// Weighted population standard deviation.  Returns `None` if no samples
    /// have been added.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(|v| v.sqrt())
    }

    /// Minimum sample value.  Returns `None` if no samples have been added.
    pub fn minimum(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Maximum sample value.  Returns `None` if no samples have been added.
    pub fn maximum(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }

    /// Reset the accumulator to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}
