//! Benchmark for the container types: Maybe, Either, and Validation.
//!
//! Measures transformation pipelines, error aggregation, and the
//! collection combinators.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use monars::container::{Either, Maybe, Validation};
use std::hint::black_box;

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn benchmark_maybe_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_pipeline");

    group.bench_function("map_filter_chain", |bencher| {
        bencher.iter(|| {
            let result = Maybe::present(black_box(21))
                .map(|n| n * 2)
                .filter(|n| *n > 0)
                .chain(|n| Maybe::present(n + 1))
                .get_or(0);
            black_box(result)
        });
    });

    group.bench_function("absent_short_circuit", |bencher| {
        bencher.iter(|| {
            let result = Maybe::<i32>::absent()
                .map(|n| n * 2)
                .filter(|n| *n > 0)
                .chain(|n| Maybe::present(n + 1))
                .get_or(0);
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_either_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either_pipeline");

    group.bench_function("map_chain_recover", |bencher| {
        bencher.iter(|| {
            let result: Either<String, i32> = Either::right(black_box(21))
                .map(|n| n * 2)
                .chain(|n| Either::right(n + 1))
                .recover(0);
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn benchmark_validation_concat(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("validation_concat");

    for count in [4_usize, 16, 64] {
        group.bench_with_input(
            BenchmarkId::new("failure_chain", count),
            &count,
            |bencher, &count| {
                bencher.iter(|| {
                    let mut report: Validation<usize, ()> = Validation::success(());
                    for index in 0..count {
                        report = report.concat(Validation::failure(black_box(index)));
                    }
                    black_box(report)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Collection Combinator Benchmarks
// =============================================================================

fn benchmark_collection_combinators(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collection_combinators");

    for size in [8, 64, 512] {
        group.bench_with_input(BenchmarkId::new("maybe_all", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let items = (0..size).map(Maybe::present);
                black_box(Maybe::all(items))
            });
        });

        group.bench_with_input(
            BenchmarkId::new("validation_failures_of", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let items = (0..size).map(|index| {
                        if index % 2 == 0 {
                            Validation::<i32, i32>::success(index)
                        } else {
                            Validation::failure(index)
                        }
                    });
                    black_box(Validation::failures_of(items))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_maybe_pipeline,
    benchmark_either_pipeline,
    benchmark_validation_concat,
    benchmark_collection_combinators
);
criterion_main!(benches);
