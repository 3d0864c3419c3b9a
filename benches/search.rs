//! Benchmarks for nearest-neighbor queries.
//!
//! Compares the linear scan with the projection index over uniformly random
//! points. Index construction is outside the measured loop.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use projection_nn::{NearestNeighborIndex, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const QUERIES: usize = 500;

fn random_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.gen_range(-1000.0..1000.0), rng.gen_range(-1000.0..1000.0)))
        .collect()
}

fn bench_find_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_nearest");
    group.throughput(Throughput::Elements(QUERIES as u64));

    for &size in &[1_000, 10_000, 50_000] {
        let points = random_points(size, 42);
        let queries = random_points(QUERIES, 123);
        let index = NearestNeighborIndex::new(points.clone());

        group.bench_with_input(BenchmarkId::new("brute_force", size), &size, |b, _| {
            b.iter(|| {
                for &q in &queries {
                    black_box(NearestNeighborIndex::find_nearest_brute_force(
                        black_box(q),
                        &points,
                    ));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("indexed", size), &size, |b, _| {
            b.iter(|| {
                for &q in &queries {
                    black_box(index.find_nearest(black_box(q)));
                }
            });
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &size in &[1_000, 10_000, 50_000] {
        let points = random_points(size, 7);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| NearestNeighborIndex::new(black_box(points.clone())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_nearest, bench_build);
criterion_main!(benches);
