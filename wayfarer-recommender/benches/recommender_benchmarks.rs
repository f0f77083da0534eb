//! Criterion benchmarks for snapshot construction and query latency.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package wayfarer-recommender
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use wayfarer_core::TraitScores;
use wayfarer_recommender::{DEFAULT_ALPHA, DEFAULT_TOP_N, Snapshot, VibeRequest};


use bench_support::{BENCHMARK_SEED, generate_catalogue};

/// Catalogue sizes to benchmark.
const CATALOGUE_SIZES: &[usize] = &[100, 1_000, 5_000];

fn bench_snapshot_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_build");
    for &size in CATALOGUE_SIZES {
        let catalogue = generate_catalogue(size, BENCHMARK_SEED);
        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for small catalogue sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("destinations", size), &catalogue, |b, input| {
            b.iter(|| Snapshot::build(input.clone()));
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    for &size in CATALOGUE_SIZES {
        let snapshot = Snapshot::build(generate_catalogue(size, BENCHMARK_SEED))
            .expect("benchmark catalogue is not empty");
        let vibe = VibeRequest::from(TraitScores::from_array([5, 1, 4, 2, 3]));

        group.bench_with_input(BenchmarkId::new("text", size), &snapshot, |b, s| {
            b.iter(|| s.recommend_by_query("kyoto", DEFAULT_TOP_N).map(|r| r.len()));
        });
        group.bench_with_input(BenchmarkId::new("hybrid", size), &snapshot, |b, s| {
            b.iter(|| {
                s.recommend_hybrid("kyoto", DEFAULT_TOP_N, DEFAULT_ALPHA)
                    .map(|r| r.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("vibe", size), &snapshot, |b, s| {
            b.iter(|| s.recommend_by_vibe(&vibe, DEFAULT_TOP_N).map(|r| r.len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_snapshot_build, bench_queries);
criterion_main!(benches);
