use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sr_methods::ShortRateBinomialTree;
use sr_models::CalibratedShortRateTree;
use sr_termstructures::FlatForward;
use sr_time::{Actual365Fixed, Date};

fn bench_tree_construction(c: &mut Criterion) {
    let dt = 10.0 / 365.0 / 2000.0;
    c.bench_function("tree_build_n2000", |b| {
        b.iter(|| {
            ShortRateBinomialTree::mean_reverting(
                black_box(0.9),
                black_box(1.5),
                dt,
                2000,
            )
            .unwrap()
        })
    });
}

fn bench_curve_fit(c: &mut Criterion) {
    let ref_date = Date::from_ymd(2026, 1, 2).unwrap();
    let curve = FlatForward::new(ref_date, 0.01, Actual365Fixed);
    let dt = 10.0 / 365.0 / 500.0;
    let tree = ShortRateBinomialTree::mean_reverting(0.9, 1.5, dt, 500).unwrap();

    c.bench_function("curve_fit_n500", |b| {
        b.iter(|| CalibratedShortRateTree::fit(black_box(&tree), &curve, 1e-10).unwrap())
    });
}

criterion_group!(benches, bench_tree_construction, bench_curve_fit);
criterion_main!(benches);
