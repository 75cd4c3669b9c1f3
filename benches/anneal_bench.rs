//! Criterion benchmarks for the tour annealer.
//!
//! Instances are points drawn uniformly from a 100x100 area with a fixed seed.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tour_anneal::sa::SaConfig;
use u_tour_anneal::tour::{random_points, search, total_distance};

fn bench_total_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_distance");

    for n in [20usize, 100, 1000] {
        let points = random_points(n, 100.0, 42).expect("valid extent");
        let tour: Vec<usize> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| total_distance(black_box(&points), black_box(&tour)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let mut group = c.benchmark_group("tour_search");
    group.sample_size(10);

    for (n, iters) in [(20usize, 100usize), (20, 1000), (50, 500)] {
        let points = random_points(n, 100.0, 42).expect("valid extent");
        let config = SaConfig::default()
            .with_initial_temperature(1000.0)
            .with_cooling_rate(0.95)
            .with_min_temperature(1.0)
            .with_iterations_per_temperature(iters)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::new(format!("n{n}"), iters),
            &iters,
            |b, _| b.iter(|| search(black_box(&points), black_box(&config)).expect("valid config")),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_total_distance, bench_search);
criterion_main!(benches);
