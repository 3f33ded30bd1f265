//! Fitting a short-rate state lattice to a discount curve.
//!
//! The state lattice is centered at zero; calibration shifts every node of
//! layer `k` by an additive drift adjustment `α_k` so that the lattice
//! reproduces the target curve.  Layer `k` holds the short rates observed at
//! time `kΔt`, each accruing the period `[kΔt, (k+1)Δt]`; its calibration
//! target is therefore the one-period forward discount factor
//! `P((k+1)Δt) / P(kΔt)`.
//!
//! Because the shift is common to all nodes of a layer, it factors out of
//! the probability-weighted layer mean and has the closed form
//!
//! ```text
//! α_k = ln(S_k / F_k) / Δt,   S_k = Σ_j pmf(k,j)·exp(−x(k,j)·Δt)
//! ```
//!
//! with `F_k` the target forward factor.  The fit is verified layer by
//! layer; a residual above tolerance (or a curve producing a non-positive
//! forward factor) is reported as a calibration error rather than returned
//! as an inaccurate lattice.

use sr_core::errors::{Error, Result};
use sr_core::{DiscountFactor, Rate, Real, Time};
use sr_math::{close, BinomialDistribution, Statistics};
use sr_methods::ShortRateBinomialTree;
use sr_termstructures::YieldTermStructure;

/// A short-rate lattice fitted to a discount curve.
///
/// Holds the full rate and discount-factor lattices in parallel: node
/// `(k, j)` carries the fitted short rate `r(k, j)` and its one-period
/// discount factor `z(k, j) = exp(−r(k, j)·Δt)` (the same floating-point
/// expression, reproducible bit for bit).  Immutable once built.
#[derive(Debug, Clone)]
pub struct CalibratedShortRateTree {
    dt: Time,
    /// Additive drift adjustment α_k per layer.
    drift: Vec<Real>,
    /// Fitted short rates r(k, j).
    rates: Vec<Vec<Rate>>,
    /// One-period discount factors z(k, j) = exp(−r(k, j)·Δt).
    discounts: Vec<Vec<DiscountFactor>>,
}

impl CalibratedShortRateTree {
    /// Fit a state lattice to a discount curve.
    ///
    /// Every layer's probability-weighted mean discount factor is required
    /// to reproduce the curve's one-period forward factor within
    /// `tolerance`; the curve must extend to `(steps + 1)·Δt`.
    ///
    /// # Errors
    /// * `Error::Precondition` if `tolerance` is not positive.
    /// * `Error::Calibration` if the curve yields a non-positive or
    ///   non-finite forward factor, or a layer's residual exceeds
    ///   `tolerance`.
    pub fn fit(
        tree: &ShortRateBinomialTree,
        curve: &dyn YieldTermStructure,
        tolerance: Real,
    ) -> Result<Self> {
        sr_core::ensure!(
            tolerance > 0.0,
            "tolerance must be positive, got {tolerance}"
        );

        let n = tree.steps();
        let dt = tree.dt();
        let mut drift = Vec::with_capacity(n + 1);
        let mut rates: Vec<Vec<Rate>> = Vec::with_capacity(n + 1);
        let mut discounts: Vec<Vec<DiscountFactor>> = Vec::with_capacity(n + 1);

        for k in 0..=n {
            let t_k = tree.time(k);
            let target = curve.forward_discount(t_k, t_k + dt);
            if !(target.is_finite() && target > 0.0) {
                return Err(Error::Calibration(format!(
                    "curve gives invalid forward discount factor {target} over \
                     [{t_k}, {}]",
                    t_k + dt
                )));
            }

            let weights = BinomialDistribution::new(0.5, k as u64).weights();
            let mut state_mean_discount = 0.0;
            for j in 0..tree.size(k) {
                state_mean_discount += weights[j] * (-tree.value(k, j) * dt).exp();
            }

            let alpha = (state_mean_discount / target).ln() / dt;
            if !alpha.is_finite() {
                return Err(Error::Calibration(format!(
                    "drift adjustment for layer {k} is not finite"
                )));
            }

            let layer_rates: Vec<Rate> =
                (0..tree.size(k)).map(|j| tree.value(k, j) + alpha).collect();
            let layer_discounts: Vec<DiscountFactor> =
                layer_rates.iter().map(|&r| (-r * dt).exp()).collect();

            let reconstructed: Real = layer_discounts
                .iter()
                .zip(&weights)
                .map(|(z, w)| w * z)
                .sum();
            if !close(reconstructed, target, tolerance) {
                return Err(Error::Calibration(format!(
                    "layer {k} reproduces {reconstructed} against target {target} \
                     (tolerance {tolerance})"
                )));
            }

            drift.push(alpha);
            rates.push(layer_rates);
            discounts.push(layer_discounts);
        }

        Ok(Self {
            dt,
            drift,
            rates,
            discounts,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Number of time steps.
    pub fn steps(&self) -> usize {
        self.rates.len() - 1
    }

    /// Time increment per step.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Number of nodes at layer `k` (always `k + 1`).
    pub fn size(&self, k: usize) -> usize {
        self.rates[k].len()
    }

    /// Additive drift adjustment applied to layer `k`.
    pub fn drift_adjustment(&self, k: usize) -> Real {
        self.drift[k]
    }

    /// Fitted short rate at node `(k, j)`.
    pub fn rate(&self, k: usize, j: usize) -> Rate {
        self.rates[k][j]
    }

    /// One-period discount factor at node `(k, j)`.
    pub fn discount_factor(&self, k: usize, j: usize) -> DiscountFactor {
        self.discounts[k][j]
    }

    /// All fitted short rates of layer `k`, in node order.
    pub fn layer_rates(&self, k: usize) -> &[Rate] {
        &self.rates[k]
    }

    /// All discount factors of layer `k`, in node order.
    pub fn layer_discount_factors(&self, k: usize) -> &[DiscountFactor] {
        &self.discounts[k]
    }

    /// Probability-weighted mean discount factor of layer `k`.
    ///
    /// By construction this reproduces the input curve's one-period forward
    /// discount factor for the period `[kΔt, (k+1)Δt]`.
    pub fn mean_discount_factor(&self, k: usize) -> DiscountFactor {
        let dist = BinomialDistribution::new(0.5, k as u64);
        self.discounts[k]
            .iter()
            .enumerate()
            .map(|(j, z)| dist.pmf(j as u64) * z)
            .sum()
    }

    /// Probability-weighted statistics of layer `k`'s fitted short rates.
    ///
    /// The additive drift preserves dispersion: standard deviation equals
    /// that of the unfitted state lattice.
    pub fn rate_statistics(&self, k: usize) -> Statistics {
        let dist = BinomialDistribution::new(0.5, k as u64);
        let mut stats = Statistics::new();
        for (j, &r) in self.rates[k].iter().enumerate() {
            stats.add_weighted(r, dist.pmf(j as u64));
        }
        stats
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
