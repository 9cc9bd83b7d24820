//! Benchmarks for chunk generation and full deposit queries.
//!
//! Run with: cargo bench --package orefinder-worldgen --bench find_deposits

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use orefinder_worldgen::prelude::*;

const SEED: i64 = 123_456_789;

fn benchmark_single_chunk(c: &mut Criterion) {
    let table = RuleTable::standard(VersionTag::V1_20).expect("standard table");
    let generator = ChunkGenerator::new(SEED, &table);

    c.bench_function("single_chunk_generation", |b| {
        let mut coord = 0i32;
        b.iter(|| {
            coord = coord.wrapping_add(1);
            black_box(generator.generate_chunk(ChunkCoord::new(coord, coord / 2)))
        });
    });
}

fn benchmark_find_by_radius(c: &mut Criterion) {
    let finder = DepositFinder::new(FinderConfig {
        cache_enabled: false,
        ..FinderConfig::default()
    })
    .expect("finder");

    let mut group = c.benchmark_group("find_deposits");
    for radius in [0, 1, 2, 4] {
        let side = 2 * u64::from(radius.unsigned_abs()) + 1;
        group.throughput(Throughput::Elements(side * side));
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| {
                black_box(finder.find_deposits(
                    SEED,
                    black_box(100),
                    black_box(200),
                    VersionTag::V1_20,
                    radius,
                    None,
                ))
            });
        });
    }
    group.finish();
}

fn benchmark_random_queries(c: &mut Criterion) {
    let finder = DepositFinder::new(FinderConfig {
        cache_enabled: false,
        ..FinderConfig::default()
    })
    .expect("finder");
    let mut rng = fastrand::Rng::with_seed(42);
    let points: Vec<(i64, i32, i32)> = (0..256)
        .map(|_| {
            (
                rng.i64(..),
                rng.i32(-30_000_000..30_000_000),
                rng.i32(-30_000_000..30_000_000),
            )
        })
        .collect();

    c.bench_function("random_query_radius_1", |b| {
        let mut index = 0usize;
        b.iter(|| {
            let (seed, x, z) = points[index % points.len()];
            index += 1;
            black_box(finder.find_deposits(seed, x, z, VersionTag::LATEST, 1, None))
        });
    });
}

fn benchmark_cached_query(c: &mut Criterion) {
    let finder = DepositFinder::new(FinderConfig::default()).expect("finder");
    let _ = finder.find_deposits(SEED, 100, 200, VersionTag::V1_20, 1, None);

    c.bench_function("cached_query_radius_1", |b| {
        b.iter(|| black_box(finder.find_deposits(SEED, 100, 200, VersionTag::V1_20, 1, None)));
    });
}

criterion_group!(
    benches,
    benchmark_single_chunk,
    benchmark_find_by_radius,
    benchmark_random_queries,
    benchmark_cached_query,
);
criterion_main!(benches);
