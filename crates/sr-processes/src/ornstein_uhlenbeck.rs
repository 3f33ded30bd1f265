//! Ornstein-Uhlenbeck mean-reverting process.
//!
//! ```text
//! dX = speed·(level − X) dt + volatility·dW
//! ```
//!
//! The conditional distribution over any horizon is Gaussian with known
//! moments, so the Euler defaults of [`StochasticProcess1D`] are replaced
//! with exact expressions:
//!
//! ```text
//! E[X(t+τ) | X(t)]   = level + (X(t) − level)·e^{−speed·τ}
//! Var[X(t+τ) | X(t)] = volatility²·(1 − e^{−2·speed·τ}) / (2·speed)
//! ```
//!
//! Below [`MIN_SPEED`] the dynamics are driftless Brownian motion and the
//! variance takes its `speed → 0` limit `volatility²·τ`.

use crate::stochastic_process::StochasticProcess1D;
use sr_core::{Real, Time, Volatility};

/// Speeds below this threshold are treated as zero mean reversion.
pub const MIN_SPEED: Real = 1e-15;

/// An Ornstein-Uhlenbeck mean-reverting process.
///
/// The lattice builder relies on two properties of this process: the
/// diffusion is state-independent, and [`StochasticProcess1D::variance`]
/// is the exact conditional variance over the full horizon, not an Euler
/// step.
#[derive(Debug, Clone)]
pub struct OrnsteinUhlenbeckProcess {
    speed: Real,
    level: Real,
    volatility: Volatility,
    x0: Real,
}

impl OrnsteinUhlenbeckProcess {
    /// Create a process pulling toward `level` at rate `speed`.
    ///
    /// # Panics
    /// Panics if `speed` or `volatility` is negative.
    pub fn new(speed: Real, volatility: Volatility, x0: Real, level: Real) -> Self {
        assert!(
            speed >= 0.0,
            "mean-reversion speed must be non-negative, got {speed}"
        );
        assert!(
            volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        Self {
            speed,
            level,
            volatility,
            x0,
        }
    }

    /// Create a process reverting to zero.
    pub fn new_zero_level(speed: Real, volatility: Volatility, x0: Real) -> Self {
        Self::new(speed, volatility, x0, 0.0)
    }

    /// Speed of mean reversion.
    pub fn speed(&self) -> Real {
        self.speed
    }

    /// Long-run level.
    pub fn level(&self) -> Real {
        self.level
    }

    /// Volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }
}

impl StochasticProcess1D for OrnsteinUhlenbeckProcess {
    fn x0(&self) -> Real {
        self.x0
    }

    fn drift(&self, _t: Time, x: Real) -> Real {
        self.speed * (self.level - x)
    }

    fn diffusion(&self, _t: Time, _x: Real) -> Real {
        self.volatility
    }

    fn expectation(&self, _t: Time, x: Real, dt: Time) -> Real {
        let decay = (-self.speed * dt).exp();
        self.level + (x - self.level) * decay
    }

    fn std_deviation(&self, t: Time, x: Real, dt: Time) -> Real {
        self.variance(t, x, dt).sqrt()
    }

    fn variance(&self, _t: Time, _x: Real, dt: Time) -> Real {
        let sigma2 = self.volatility * self.volatility;
        if self.speed < MIN_SPEED {
            return sigma2 * dt;
        }
        sigma2 * (1.0 - (-2.0 * self.speed * dt).exp()) / (2.0 * self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reverting() -> OrnsteinUhlenbeckProcess {
        OrnsteinUhlenbeckProcess::new(0.9, 1.5, 0.25, 0.0)
    }

    #[test]
    fn accessors() {
        let p = OrnsteinUhlenbeckProcess::new(2.0, 0.3, 0.5, 1.0);
        assert_abs_diff_eq!(p.speed(), 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(p.level(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(p.volatility(), 0.3, epsilon = 1e-15);
        assert_abs_diff_eq!(p.x0(), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn drift_pulls_toward_level() {
        let p = OrnsteinUhlenbeckProcess::new(2.0, 0.3, 0.5, 1.0);
        assert!(p.drift(0.0, 0.5) > 0.0);
        assert!(p.drift(0.0, 1.5) < 0.0);
        assert_abs_diff_eq!(p.drift(0.0, 1.0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn diffusion_is_state_independent() {
        let p = reverting();
        assert_abs_diff_eq!(
            p.diffusion(0.0, -3.0),
            p.diffusion(0.0, 3.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn expectation_decays_exponentially() {
        let p = reverting();
        let e = p.expectation(0.0, 0.25, 2.0);
        assert_abs_diff_eq!(e, 0.25 * (-1.8_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn variance_matches_closed_form() {
        let p = reverting();
        let dt: f64 = 0.5;
        let expected = 1.5_f64.powi(2) * (1.0 - (-2.0 * 0.9 * dt).exp()) / (2.0 * 0.9);
        assert_abs_diff_eq!(p.variance(0.0, 0.0, dt), expected, epsilon = 1e-15);
        let s = p.std_deviation(0.0, 0.0, dt);
        assert_abs_diff_eq!(s * s, p.variance(0.0, 0.0, dt), epsilon = 1e-14);
    }

    #[test]
    fn variance_saturates_at_stationary_level() {
        let p = reverting();
        // stationary variance σ²/(2κ)
        let stationary = 1.5 * 1.5 / (2.0 * 0.9);
        assert!(p.variance(0.0, 0.0, 1e-3) < stationary);
        assert_abs_diff_eq!(p.variance(0.0, 0.0, 100.0), stationary, epsilon = 1e-12);
    }

    #[test]
    fn zero_speed_is_brownian() {
        let p = OrnsteinUhlenbeckProcess::new_zero_level(0.0, 0.3, 1.0);
        assert_abs_diff_eq!(p.expectation(0.0, 1.0, 0.25), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(p.variance(0.0, 1.0, 0.25), 0.09 * 0.25, epsilon = 1e-15);
    }

    #[test]
    fn evolve_with_zero_noise_is_expectation() {
        let p = reverting();
        assert_abs_diff_eq!(
            p.evolve(0.0, 0.25, 1.0, 0.0),
            p.expectation(0.0, 0.25, 1.0),
            epsilon = 1e-15
        );
    }

    #[test]
    #[should_panic(expected = "mean-reversion speed")]
    fn negative_speed_panics() {
        let _ = OrnsteinUhlenbeckProcess::new(-0.1, 0.2, 0.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "volatility")]
    fn negative_volatility_panics() {
        let _ = OrnsteinUhlenbeckProcess::new(0.9, -1.5, 0.0, 0.0);
    }
}
