//! Binomial distribution.
//!
//! Wraps the `statrs` crate's binomial implementation.  The PMF is evaluated
//! in log space internally, so weights stay finite for trial counts in the
//! thousands — the lattice layers this library weights go up that far.

use sr_core::Real;
use statrs::distribution::{Binomial, Discrete, DiscreteCDF};

/// Binomial distribution with `n` trials and success probability `p`.
///
/// `n = 0` is the one-point distribution concentrated at zero successes
/// (the root layer of a lattice).
#[derive(Debug, Clone)]
pub struct BinomialDistribution {
    dist: Binomial,
    n: u64,
    p: Real,
}

impl BinomialDistribution {
    /// Create a binomial distribution with `n` trials and probability `p`.
    ///
    /// # Panics
    /// Panics if `p` is not in `[0, 1]`.
    pub fn new(p: Real, n: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");
        Self {
            dist: Binomial::new(p, n).expect("invalid binomial parameters"),
            n,
            p,
        }
    }

    /// Number of trials.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> Real {
        self.p
    }

    /// Probability mass function P(X = k).
    pub fn pmf(&self, k: u64) -> Real {
        self.dist.pmf(k)
    }

    /// Cumulative distribution function P(X ≤ k).
    pub fn cdf(&self, k: u64) -> Real {
        self.dist.cdf(k)
    }

    /// Mean of the distribution (= np).
    pub fn mean(&self) -> Real {
        self.n as Real * self.p
    }

    /// Variance of the distribution (= np(1-p)).
    pub fn variance(&self) -> Real {
        self.n as Real * self.p * (1.0 - self.p)
    }

    /// All weights `P(X = 0) ..= P(X = n)` as a vector.
    ///
    /// Convenience for lattice-layer aggregation, where every node of a layer
    /// is visited with its path-count weight.
    pub fn weights(&self) -> Vec<Real> {
        (0..=self.n).map(|k| self.pmf(k)).collect()
    }
}
