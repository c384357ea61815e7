//! Criterion benchmarks for tour evaluation and the annealing loop.
//!
//! Uses seeded random instances so timings are comparable across runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_anneal::sa::{SaConfig, SaRunner};
use tsp_anneal::tour::{random_tour, tour_length, Point};

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
            )
        })
        .collect()
}

fn bench_tour_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_length");

    for &n in &[100usize, 1_000, 10_000] {
        let points = random_points(n, 42);
        let tour: Vec<usize> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(points, tour), |b, (p, t)| {
            b.iter(|| black_box(tour_length(black_box(p), black_box(t))))
        });
    }
    group.finish();
}

fn bench_sa_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_run");
    group.sample_size(10);

    for &n in &[20usize, 50, 100] {
        let points = random_points(n, 42);
        let mut rng = StdRng::seed_from_u64(7);
        let initial = random_tour(n, &mut rng);
        let config = SaConfig::default()
            .with_max_iterations(200)
            .with_samples_per_temperature(30)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(points, initial, config),
            |b, (p, i, c)| {
                b.iter(|| {
                    let result = SaRunner::run(black_box(p), black_box(i), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_tour_length, bench_sa_run);
criterion_main!(benches);
