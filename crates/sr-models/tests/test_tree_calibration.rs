//! End-to-end properties of the state lattice and its discount-curve fit.
//!
//! For each scenario the full property set is checked on every layer:
//!
//! 1. probability-weighted layer mean of state values is zero;
//! 2. probability-weighted layer std-dev matches the exact mean-reverting
//!    variance formula (Brownian limit when the speed is zero);
//! 3. every node's discount factor is `exp(−rate·Δt)`;
//! 4. the weighted mean discount factor of a layer reproduces the curve's
//!    one-period forward discount factor;
//! 5. the fitted-rate layer std-dev matches the state std-dev (the additive
//!    drift must not perturb dispersion beyond 5× the base tolerance).

use sr_core::Real;
use sr_methods::ShortRateBinomialTree;
use sr_models::CalibratedShortRateTree;
use sr_termstructures::{
    FlatForward, InterpolatedDiscountCurve, LogLinear, YieldTermStructure,
};
use sr_time::{Actual365Fixed, Date, DayCounter};

/// Exact mean-reverting standard deviation over [0, t], with the zero-speed
/// Brownian limit.
fn exact_std(speed: Real, sigma: Real, t: Real) -> Real {
    if speed == 0.0 {
        sigma * t.sqrt()
    } else {
        sigma * ((1.0 - (-2.0 * speed * t).exp()) / (2.0 * speed)).sqrt()
    }
}

/// Build the lattice, fit it, and assert the full property set.
fn check_lattice_and_fit(
    speed: Real,
    sigma: Real,
    dt: Real,
    steps: usize,
    tolerance: Real,
    curve: &dyn YieldTermStructure,
) {
    let tree = ShortRateBinomialTree::mean_reverting(speed, sigma, dt, steps).unwrap();
    let fitted = CalibratedShortRateTree::fit(&tree, curve, tolerance).unwrap();

    for k in 1..=steps {
        let stats = tree.layer_statistics(k);
        let mean = stats.mean().unwrap();
        let std = stats.std_dev().unwrap();
        let expected_std = exact_std(speed, sigma, k as Real * dt);

        assert!(
            mean.abs() <= tolerance,
            "layer {k}: state mean {mean} exceeds {tolerance}"
        );
        assert!(
            (std - expected_std).abs() <= tolerance,
            "layer {k}: state std {std} vs {expected_std}"
        );
    }

    for k in 0..=steps {
        // Node-level invariant: z = exp(−r·Δt)
        for j in 0..fitted.size(k) {
            let z = fitted.discount_factor(k, j);
            let expected = (-fitted.rate(k, j) * dt).exp();
            assert!(
                (z - expected).abs() <= 1e-15,
                "node ({k},{j}): {z} vs {expected}"
            );
        }

        // Layer mean reproduces the one-period forward discount factor
        let t_k = k as Real * dt;
        let target = curve.forward_discount(t_k, t_k + dt);
        let mean_z = fitted.mean_discount_factor(k);
        assert!(
            (mean_z - target).abs() <= tolerance,
            "layer {k}: mean discount {mean_z} vs {target}"
        );

        // The drift fit leaves dispersion intact
        if k >= 1 {
            let rate_std = fitted.rate_statistics(k).std_dev().unwrap();
            let expected_std = exact_std(speed, sigma, t_k);
            assert!(
                (rate_std - expected_std).abs() <= 5.0 * tolerance,
                "layer {k}: fitted-rate std {rate_std} vs {expected_std}"
            );
        }
    }
}

fn flat_curve(rate: Real) -> FlatForward {
    let ref_date = Date::from_ymd(2026, 1, 2).unwrap();
    FlatForward::new(ref_date, rate, Actual365Fixed)
}

#[test]
fn coarse_lattice_fits_flat_curve() {
    let dt = 10.0 / 365.0 / 20.0;
    check_lattice_and_fit(0.9, 1.5, dt, 20, 1e-15, &flat_curve(0.01));
}

#[test]
fn coarse_lattice_without_mean_reversion() {
    let dt = 10.0 / 365.0 / 20.0;
    check_lattice_and_fit(0.0, 1.5, dt, 20, 1e-15, &flat_curve(0.01));
}

#[test]
fn negative_rate_curve_fits() {
    let dt = 10.0 / 365.0 / 50.0;
    check_lattice_and_fit(0.9, 1.5, dt, 50, 1e-13, &flat_curve(-0.005));
}

#[test]
fn interpolated_pillar_curve_fits() {
    // Discount pillars sampled from a flat 2% curve; log-linear
    // interpolation reproduces the flat forwards between pillars exactly.
    let ref_date = Date::from_ymd(2026, 1, 2).unwrap();
    let dc = Actual365Fixed;
    let dates: Vec<Date> = [0, 4, 8, 12].iter().map(|&d| ref_date + d).collect();
    let discounts: Vec<Real> = dates
        .iter()
        .map(|&d| (-0.02 * dc.year_fraction(ref_date, d)).exp())
        .collect();
    let curve =
        InterpolatedDiscountCurve::new(&dates, &discounts, Actual365Fixed, &LogLinear)
            .unwrap();

    let dt = 10.0 / 365.0 / 50.0;
    check_lattice_and_fit(0.9, 1.5, dt, 50, 1e-13, &curve);
}

#[test]
fn stress_fine_discretization() {
    // κ = 0.9, σ = 1.5, n = 2000, Δt = 10/365/2000: the convergence scenario
    // at fine discretization, all properties simultaneously at 1e-10.
    let dt = 10.0 / 365.0 / 2000.0;
    check_lattice_and_fit(0.9, 1.5, dt, 2000, 1e-10, &flat_curve(0.01));
}

#[test]
fn stress_without_mean_reversion() {
    let dt = 10.0 / 365.0 / 2000.0;
    check_lattice_and_fit(0.0, 1.5, dt, 2000, 1e-10, &flat_curve(0.01));
}
