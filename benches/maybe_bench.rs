//! Benchmark for `Maybe` operator chains.
//!
//! Compares chained operators against hand-written `Option` code, and
//! measures the memoised sequence view used by `at`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use maybe_chain::{Maybe, some};
use std::collections::BTreeSet;
use std::hint::black_box;

// =============================================================================
// Transformation Benchmarks
// =============================================================================

fn benchmark_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_chain");

    group.bench_function("maybe_map_filter_flat_map", |bencher| {
        bencher.iter(|| {
            let result = some(black_box(42))
                .map(|x| x * 2)
                .filter(|x| x % 3 == 0)
                .flat_map(|x| x.checked_add(1));
            black_box(result)
        });
    });

    group.bench_function("option_map_filter_and_then", |bencher| {
        bencher.iter(|| {
            let result = Some(black_box(42))
                .map(|x| x * 2)
                .filter(|x| x % 3 == 0)
                .and_then(|x: i32| x.checked_add(1));
            black_box(result)
        });
    });

    group.bench_function("maybe_none_short_circuit", |bencher| {
        bencher.iter(|| {
            let result = black_box(Maybe::<i32>::none())
                .map(|x| x * 2)
                .filter(|x| x % 3 == 0)
                .flat_map(|x| x.checked_add(1));
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Coercion Benchmarks
// =============================================================================

fn benchmark_coercion(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("coercion");

    group.bench_function("trim_parse_int", |bencher| {
        bencher.iter(|| black_box(some(black_box("  8080  ")).trim().parse_int(10)));
    });

    group.bench_function("manual_trim_parse", |bencher| {
        bencher.iter(|| black_box(black_box("  8080  ").trim().parse::<i64>().ok()));
    });

    group.bench_function("to_fixed", |bencher| {
        bencher.iter(|| black_box(some(black_box(3.141_592_653)).to_fixed(4)));
    });

    group.bench_function("to_precision", |bencher| {
        bencher.iter(|| black_box(some(black_box(0.000_123_456)).to_precision(3)));
    });

    group.finish();
}

// =============================================================================
// Combinator Benchmarks
// =============================================================================

fn benchmark_combinators(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combinators");

    group.bench_function("all_tuple_of_four", |bencher| {
        bencher.iter(|| {
            let root = some(black_box(7));
            black_box(root.all((
                |root: &Maybe<i32>| root.clone().map(|x| x + 1),
                |root: &Maybe<i32>| root.clone().map(|x| x * 2),
                |root: &Maybe<i32>| root.clone().gt(0),
                |root: &Maybe<i32>| root.str(),
            )))
        });
    });

    group.bench_function("race_last_wins", |bencher| {
        bencher.iter(|| {
            let root = some(black_box(7));
            black_box(root.race((
                |root: &Maybe<i32>| root.clone().gt(100),
                |root: &Maybe<i32>| root.clone().lt(0),
                |root: &Maybe<i32>| root.clone(),
            )))
        });
    });

    group.finish();
}

// =============================================================================
// Indexed Access Benchmarks
// =============================================================================

fn benchmark_at(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("at_sequence_view");

    for size in [16_i32, 256, 4096] {
        let set: BTreeSet<i32> = (0..size).collect();
        group.throughput(Throughput::Elements(16));

        group.bench_with_input(BenchmarkId::new("memoised", size), &set, |bencher, set| {
            let container = some(set.clone());
            bencher.iter(|| {
                for index in 0..16 {
                    black_box(container.at(black_box(index)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("fresh_container", size), &set, |bencher, set| {
            bencher.iter(|| {
                for index in 0..16 {
                    let container = some(set.clone());
                    black_box(container.at(black_box(index)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map_chain,
    benchmark_coercion,
    benchmark_combinators,
    benchmark_at,
);

criterion_main!(benches);
