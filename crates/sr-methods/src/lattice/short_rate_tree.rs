//! Recombining binomial lattice for a mean-reverting short-rate state
//! variable.
//!
//! The lattice discretizes a centered Gaussian state variable (the
//! "rate star" of a Hull-White style model, before any drift fitting) on a
//! binomial tree with equal branch probabilities.  Layer `k` carries the
//! `k + 1` reachable states at time `k·Δt`; node `(k, j)` is the state after
//! `j` up-moves and `k − j` down-moves.
//!
//! Node values are `(2j − k)·δ_k` with per-layer spacing
//! `δ_k = √(V(k)/k)`, where `V(k)` is the process's exact conditional
//! variance over `[0, kΔt]`.  Under Binomial(k, ½) path weights the layer
//! mean is zero and the layer variance is exactly `V(k)`; mean reversion
//! shows up as the spacing growing slower than the `√k` of a pure random
//! walk.

use crate::lattice::TimeGrid;
use sr_core::{errors::Result, Real, Time, Volatility};
use sr_math::{BinomialDistribution, Statistics};
use sr_processes::{OrnsteinUhlenbeckProcess, StochasticProcess1D};

/// A recombining binomial lattice of a centered mean-reverting Gaussian
/// state variable.
///
/// The tree has `steps + 1` layers, layer `k` having exactly `k + 1` nodes.
/// Node `(k, j)` branches to `(k+1, j)` (down) and `(k+1, j+1)` (up), each
/// with probability ½.  Only the per-layer spacings are stored; node values
/// are computed on demand.
#[derive(Debug, Clone)]
pub struct ShortRateBinomialTree {
    grid: TimeGrid,
    /// Node spacing per layer: node (k, j) sits at (2j − k)·spacing[k].
    spacing: Vec<Real>,
}

impl ShortRateBinomialTree {
    /// Build the lattice for a mean-reverting state variable with speed
    /// `speed` (κ ≥ 0) and volatility `volatility` (σ > 0).
    ///
    /// `speed = 0` degenerates to a pure Brownian random walk.
    pub fn mean_reverting(
        speed: Real,
        volatility: Volatility,
        dt: Time,
        steps: usize,
    ) -> Result<Self> {
        sr_core::ensure!(
            speed >= 0.0,
            "mean-reversion speed must be non-negative, got {speed}"
        );
        sr_core::ensure!(
            volatility > 0.0,
            "volatility must be positive, got {volatility}"
        );
        let process = OrnsteinUhlenbeckProcess::new_zero_level(speed, volatility, 0.0);
        Self::from_process(&process, dt, steps)
    }

    /// Build the lattice from a 1-D stochastic process.
    ///
    /// The process must have additive noise (diffusion independent of the
    /// state) and an exact, state-independent conditional variance from time
    /// zero — the Ornstein-Uhlenbeck process qualifies.  The process's own
    /// initial value and long-run level are ignored: the lattice is always
    /// centered at zero.
    pub fn from_process(
        process: &dyn StochasticProcess1D,
        dt: Time,
        steps: usize,
    ) -> Result<Self> {
        let grid = TimeGrid::uniform(dt, steps)?;

        let x0 = process.x0();
        let mut spacing = Vec::with_capacity(steps + 1);
        spacing.push(0.0); // root layer is the single state 0
        for k in 1..=steps {
            let t_k = grid.time(k);
            let var = process.variance(0.0, x0, t_k);
            sr_core::ensure!(
                var.is_finite() && var > 0.0,
                "process variance must be positive and finite at t = {t_k}, got {var}"
            );
            spacing.push((var / k as Real).sqrt());
        }

        Ok(Self { grid, spacing })
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Number of time steps.
    pub fn steps(&self) -> usize {
        self.grid.steps()
    }

    /// Time increment per step.
    pub fn dt(&self) -> Time {
        self.grid.dt()
    }

    /// Time at layer `k`.
    pub fn time(&self, k: usize) -> Time {
        self.grid.time(k)
    }

    /// The time grid underlying the lattice.
    pub fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Number of nodes at layer `k` (always `k + 1`).
    pub fn size(&self, k: usize) -> usize {
        k + 1
    }

    /// State value at node `(k, j)`.
    pub fn value(&self, k: usize, j: usize) -> Real {
        (2.0 * j as Real - k as Real) * self.spacing[k]
    }

    /// All state values of layer `k`, in node order.
    pub fn layer_values(&self, k: usize) -> Vec<Real> {
        (0..self.size(k)).map(|j| self.value(k, j)).collect()
    }

    /// Index of the descendant node at layer `k+1` for a given `branch`.
    ///
    /// `branch = 0` → down, `branch = 1` → up.
    pub fn descendant(&self, _k: usize, index: usize, branch: usize) -> usize {
        index + branch
    }

    /// Transition probability for `branch` (0 = down, 1 = up).  Both
    /// branches carry probability ½; mean reversion is absorbed into the
    /// per-layer spacing instead.
    pub fn probability(&self, _k: usize, _index: usize, _branch: usize) -> Real {
        0.5
    }

    /// Probability-weighted statistics of layer `k` under Binomial(k, ½)
    /// path weights.
    pub fn layer_statistics(&self, k: usize) -> Statistics {
        let dist = BinomialDistribution::new(0.5, k as u64);
        let mut stats = Statistics::new();
        for j in 0..self.size(k) {
            stats.add_weighted(self.value(k, j), dist.pmf(j as u64));
        }
        stats
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
