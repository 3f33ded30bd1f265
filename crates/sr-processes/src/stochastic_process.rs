//! `StochasticProcess1D` — base trait for one-dimensional diffusions.
//!
//! A process `dX = μ(t,X) dt + σ(t,X) dW` is described by its drift (`μ`),
//! diffusion (`σ`), and conditional moments over a horizon.  The defaults
//! are first-order Euler approximations; processes with closed-form moments
//! override them.

use sr_core::{Real, Time};

/// A 1-dimensional stochastic process `dX = μ(t,X) dt + σ(t,X) dW`.
pub trait StochasticProcess1D: std::fmt::Debug + Send + Sync {
    /// Initial value of the process.
    fn x0(&self) -> Real;

    /// Drift `μ(t, x)`.
    fn drift(&self, t: Time, x: Real) -> Real;

    /// Diffusion `σ(t, x)`.
    fn diffusion(&self, t: Time, x: Real) -> Real;

    /// Expected value `E[x(t+Δt) | x(t) = x]`.
    ///
    /// Default: first-order Euler `x + μ(t,x)·Δt`.
    fn expectation(&self, t: Time, x: Real, dt: Time) -> Real {
        x + self.drift(t, x) * dt
    }

    /// Standard deviation of the process over `Δt`.
    ///
    /// Default: `σ(t,x) · √Δt`.
    fn std_deviation(&self, t: Time, x: Real, dt: Time) -> Real {
        self.diffusion(t, x) * dt.sqrt()
    }

    /// Variance of the process over `Δt`.
    ///
    /// Default: `σ(t,x)² · Δt`.
    fn variance(&self, t: Time, x: Real, dt: Time) -> Real {
        let s = self.diffusion(t, x);
        s * s * dt
    }

    /// Euler step: `E[x(t+Δt)|x] + σ·√Δt · dw`.
    fn evolve(&self, t: Time, x: Real, dt: Time, dw: Real) -> Real {
        self.expectation(t, x, dt) + self.std_deviation(t, x, dt) * dw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A simple test process: dX = 0.05·dt + 0.20·dW (constant drift & vol)
    #[derive(Debug)]
    struct ConstantProcess {
        x0: Real,
        mu: Real,
        sigma: Real,
    }

    impl StochasticProcess1D for ConstantProcess {
        fn x0(&self) -> Real {
            self.x0
        }

        fn drift(&self, _t: Time, _x: Real) -> Real {
            self.mu
        }

        fn diffusion(&self, _t: Time, _x: Real) -> Real {
            self.sigma
        }
    }

    #[test]
    fn euler_defaults() {
        let p = ConstantProcess { x0: 1.0, mu: 0.05, sigma: 0.20 };
        let dt = 1.0;
        // x + μ·Δt + σ·√Δt·0 = 1.05
        assert!((p.evolve(0.0, 1.0, dt, 0.0) - 1.05).abs() < 1e-12);
        // x + μ·Δt + σ·√Δt·1 = 1.25
        assert!((p.evolve(0.0, 1.0, dt, 1.0) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn euler_variance() {
        let p = ConstantProcess { x0: 1.0, mu: 0.05, sigma: 0.20 };
        let v = p.variance(0.0, 1.0, 0.25);
        // σ² · Δt = 0.04 * 0.25 = 0.01
        assert!((v - 0.01).abs() < 1e-15);
        let s = p.std_deviation(0.0, 1.0, 0.25);
        assert!((s * s - v).abs() < 1e-15);
    }
}
