//! Hull-White (extended Vasicek) model.
//!
//! ```text
//! dr = (θ(t) − a·r) dt + σ dW
//! ```
//!
//! The function `θ(t)` is chosen to exactly fit the initial yield curve.
//! Writing `r(t) = x(t) + α(t)` splits the short rate into a centered
//! mean-reverting state variable `x` (an Ornstein-Uhlenbeck process) and a
//! deterministic drift `α` — which is exactly how the lattice is built and
//! fitted: [`HullWhite::tree`] discretizes `x`, [`HullWhite::fitted_tree`]
//! solves for the per-layer drift.
//!
//! The analytic discount bond price is
//! `P(t,T) = A(t,T) exp(−B(t,T) r(t))`
//! with `B` as in Vasicek and `A` adjusted to fit the initial curve.

use crate::tree_fit::CalibratedShortRateTree;
use sr_core::{errors::Result, Rate, Real, Time, Volatility};
use sr_methods::ShortRateBinomialTree;
use sr_processes::OrnsteinUhlenbeckProcess;
use sr_termstructures::YieldTermStructure;
use std::sync::Arc;

/// Hull-White one-factor model.
#[derive(Debug, Clone)]
pub struct HullWhite {
    a: Real,
    sigma: Volatility,
    term_structure: Arc<dyn YieldTermStructure>,
}

impl HullWhite {
    /// Create a new Hull-White model.
    ///
    /// # Errors
    /// Fails if `a < 0` or `sigma <= 0`.
    pub fn new(
        term_structure: Arc<dyn YieldTermStructure>,
        a: Real,
        sigma: Volatility,
    ) -> Result<Self> {
        sr_core::ensure!(a >= 0.0, "mean-reversion speed must be non-negative, got {a}");
        sr_core::ensure!(sigma > 0.0, "volatility must be positive, got {sigma}");
        Ok(Self {
            a,
            sigma,
            term_structure,
        })
    }

    /// Mean-reversion speed.
    pub fn a(&self) -> Real {
        self.a
    }

    /// Volatility.
    pub fn sigma(&self) -> Volatility {
        self.sigma
    }

    /// The initial yield curve the model is fitted to.
    pub fn term_structure(&self) -> &Arc<dyn YieldTermStructure> {
        &self.term_structure
    }

    /// `B(t,T) = (1 - exp(-a(T-t)))/a`, with the `a → 0` limit `T - t`.
    pub fn b_function(&self, t: Time, big_t: Time) -> Real {
        let tau = big_t - t;
        if self.a.abs() < 1e-12 {
            tau
        } else {
            (1.0 - (-self.a * tau).exp()) / self.a
        }
    }

    /// `ln A(t,T)` using the initial yield curve for exact fitting.
    ///
    /// `ln A = ln(P(0,T)/P(0,t)) + B(t,T)·f(0,t) − σ²/(4a)·B²·(1−e^{−2at})`
    fn log_a(&self, t: Time, big_t: Time) -> Real {
        let b_val = self.b_function(t, big_t);
        let ts = &self.term_structure;

        let ln_pt = ts.discount(big_t).ln();
        let ln_p0 = ts.discount(t).ln();
        let f0t = ts.forward_rate_impl(t);
        let sigma2 = self.sigma * self.sigma;

        let variance_term = if self.a.abs() < 1e-12 {
            // lim a→0 of σ²/(4a)·B²·(1−e^{−2at}) = σ²·(T−t)²·t/2
            sigma2 * b_val * b_val * t / 2.0
        } else {
            sigma2 / (4.0 * self.a) * b_val * b_val * (1.0 - (-2.0 * self.a * t).exp())
        };

        (ln_pt - ln_p0) + b_val * f0t - variance_term
    }

    /// Analytic discount bond price `P(t,T)` given the short rate at `t`.
    pub fn discount_bond(&self, t: Time, big_t: Time, rate: Rate) -> Real {
        let b_val = self.b_function(t, big_t);
        (self.log_a(t, big_t) - b_val * rate).exp()
    }

    /// The centered state-variable dynamics `dx = −a·x dt + σ dW`.
    pub fn state_process(&self) -> OrnsteinUhlenbeckProcess {
        OrnsteinUhlenbeckProcess::new_zero_level(self.a, self.sigma, 0.0)
    }

    /// Build the recombining state lattice with `steps` intervals of `dt`.
    pub fn tree(&self, dt: Time, steps: usize) -> Result<ShortRateBinomialTree> {
        ShortRateBinomialTree::from_process(&self.state_process(), dt, steps)
    }

    /// Build the state lattice and fit it to the model's term structure.
    ///
    /// The curve must extend to `(steps + 1)·dt`.
    pub fn fitted_tree(
        &self,
        dt: Time,
        steps: usize,
        tolerance: Real,
    ) -> Result<CalibratedShortRateTree> {
        let tree = self.tree(dt, steps)?;
        CalibratedShortRateTree::fit(&tree, &*self.term_structure, tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sr_processes::StochasticProcess1D;
    use sr_termstructures::FlatForward;
    use sr_time::{Actual365Fixed, Date};

    fn flat_ts(rate: Real) -> Arc<dyn YieldTermStructure> {
        let ref_date = Date::from_ymd(2026, 1, 2).unwrap();
        Arc::new(FlatForward::new(ref_date, rate, Actual365Fixed))
    }

    #[test]
    fn hw_b_function() {
        let hw = HullWhite::new(flat_ts(0.05), 0.1, 0.01).unwrap();
        let b = hw.b_function(0.0, 10.0);
        let expected = (1.0 - (-1.0_f64).exp()) / 0.1;
        assert_abs_diff_eq!(b, expected, epsilon = 1e-10);
    }

    #[test]
    fn hw_b_function_zero_speed_limit() {
        let hw = HullWhite::new(flat_ts(0.05), 0.0, 0.01).unwrap();
        assert_abs_diff_eq!(hw.b_function(1.0, 4.0), 3.0, epsilon = 1e-15);
    }

    #[test]
    fn hw_discount_bond_at_zero_maturity() {
        let hw = HullWhite::new(flat_ts(0.05), 0.1, 0.01).unwrap();
        let p = hw.discount_bond(0.0, 0.0, 0.05);
        assert_abs_diff_eq!(p, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn hw_discount_bond_reproduces_initial_curve() {
        // At t = 0 with r(0) = f(0,0) the bond price must equal P(0,T)
        let hw = HullWhite::new(flat_ts(0.05), 0.1, 0.01).unwrap();
        for big_t in [0.5, 1.0, 5.0, 10.0] {
            let p = hw.discount_bond(0.0, big_t, 0.05);
            let expected = (-0.05 * big_t).exp();
            assert_abs_diff_eq!(p, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn hw_discount_bond_positive() {
        let hw = HullWhite::new(flat_ts(0.05), 0.1, 0.01).unwrap();
        let p = hw.discount_bond(0.0, 5.0, 0.05);
        assert!(p > 0.0);
        assert!(p < 1.0);
    }

    #[test]
    fn hw_state_process_is_centered() {
        let hw = HullWhite::new(flat_ts(0.05), 0.9, 1.5).unwrap();
        let process = hw.state_process();
        assert_abs_diff_eq!(process.x0(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(process.speed(), 0.9, epsilon = 1e-15);
        assert_abs_diff_eq!(process.volatility(), 1.5, epsilon = 1e-15);
    }

    #[test]
    fn hw_fitted_tree_round_trip() {
        let hw = HullWhite::new(flat_ts(0.02), 0.9, 1.5).unwrap();
        let dt = 10.0 / 365.0 / 20.0;
        let fitted = hw.fitted_tree(dt, 20, 1e-14).unwrap();
        assert_eq!(fitted.steps(), 20);
        let target = hw.term_structure().forward_discount(dt, 2.0 * dt);
        assert_abs_diff_eq!(fitted.mean_discount_factor(1), target, epsilon = 1e-14);
    }

    #[test]
    fn hw_invalid_parameters_rejected() {
        assert!(HullWhite::new(flat_ts(0.05), -0.1, 0.01).is_err());
        assert!(HullWhite::new(flat_ts(0.05), 0.1, 0.0).is_err());
        assert!(HullWhite::new(flat_ts(0.05), 0.1, -0.01).is_err());
    }
}
