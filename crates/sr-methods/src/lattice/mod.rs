//! Lattice methods.
//!
//! # Overview
//!
//! * [`ShortRateBinomialTree`] — recombining binomial lattice of a centered
//!   mean-reverting Gaussian state variable
//! * [`TimeGrid`] — grid of time points used by lattice methods

pub mod short_rate_tree;

pub use short_rate_tree::ShortRateBinomialTree;

use sr_core::{errors::Result, Real};

// ─── TimeGrid ─────────────────────────────────────────────────────────────────

/// A uniform grid of time points used by lattice methods.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    times: Vec<Real>,
    dt: Real,
}

impl TimeGrid {
    /// Create a uniform time grid of `steps` intervals of length `dt`.
    ///
    /// # Errors
    /// Fails if `dt` is not positive or `steps` is zero.
    pub fn uniform(dt: Real, steps: usize) -> Result<Self> {
        sr_core::ensure!(dt > 0.0, "step size must be positive, got {dt}");
        sr_core::ensure!(steps >= 1, "need at least one time step");
        let times: Vec<Real> = (0..=steps).map(|i| i as Real * dt).collect();
        Ok(Self { times, dt })
    }

    /// Number of time points (= steps + 1).
    pub fn size(&self) -> usize {
        self.times.len()
    }

    /// Number of steps (= time points − 1).
    pub fn steps(&self) -> usize {
        self.times.len() - 1
    }

    /// Time at index `i`.
    pub fn time(&self, i: usize) -> Real {
        self.times[i]
    }

    /// Time step length.
    pub fn dt(&self) -> Real {
        self.dt
    }

    /// Final time.
    pub fn end(&self) -> Real {
        *self.times.last().unwrap()
    }

    /// All time points.
    pub fn times(&self) -> &[Real] {
        &self.times
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
