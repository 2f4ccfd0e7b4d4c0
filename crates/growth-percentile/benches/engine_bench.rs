//! Benchmark for the multi-region percentile engine at its historical
//! production shape: 47 regions, a handful of age samples each.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use growth_curve::{CurveSet, ReferenceCurve};
use growth_percentile::estimate_regions;
use std::collections::HashMap;

fn reference(n_regions: usize) -> (CurveSet, HashMap<String, f64>) {
    let mut set = CurveSet::new();
    let mut measurements = HashMap::new();
    let ages: Vec<f64> = (0..12).map(|i| 24.0 + 2.0 * i as f64).collect();

    for r in 0..n_regions {
        let base = 50.0 + r as f64 * 10.0;
        let band = |offset: f64| -> Vec<f64> {
            ages.iter().map(|a| base + offset + (a - 24.0) * 3.0).collect()
        };
        let curve = ReferenceCurve::new(
            ages.clone(),
            band(-20.0),
            band(-10.0),
            band(0.0),
            band(10.0),
            band(20.0),
        )
        .unwrap();
        let region = format!("region_{r}");
        measurements.insert(region.clone(), base + 25.0);
        set.insert(region, curve);
    }
    (set, measurements)
}

fn bench_estimate_regions(c: &mut Criterion) {
    let (curves, measurements) = reference(47);

    c.bench_function("estimate_regions/47", |b| {
        b.iter(|| {
            estimate_regions(
                black_box(31.5),
                black_box(&measurements),
                black_box(&curves),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_estimate_regions);
criterion_main!(benches);
