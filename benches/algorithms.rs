use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use parbench::data::ArrayGenerator;
use parbench::minmax::{min_max, par_min_max, pool_min_max};
use parbench::parallel::{ExecutionStrategy, ThreadTeam, build_pool};
use parbench::sort::{par_selection_sort, pool_selection_sort, selection_sort};

fn input(size: usize) -> Vec<i32> {
    ArrayGenerator::new(Some(42), 1, 10_000)
        .expect("valid range")
        .generate(size)
}

/// Benchmark min/max reduction variants
fn bench_min_max(c: &mut Criterion) {
    let workers = ExecutionStrategy::calculate_optimal_workers(0, 100);
    let team = ThreadTeam::new(workers);
    let pool = build_pool(workers).expect("thread pool");

    let mut group = c.benchmark_group("min_max");
    for size in [10_000, 1_000_000] {
        let arr = input(size);
        group.bench_with_input(BenchmarkId::new("sequential", size), &arr, |b, arr| {
            b.iter(|| min_max(black_box(arr)))
        });
        group.bench_with_input(BenchmarkId::new("team", size), &arr, |b, arr| {
            b.iter(|| par_min_max(black_box(arr), &team).expect("team"))
        });
        group.bench_with_input(BenchmarkId::new("pool", size), &arr, |b, arr| {
            b.iter(|| pool_min_max(black_box(arr), &pool))
        });
    }
    group.finish();
}

/// Benchmark selection sort variants
fn bench_selection_sort(c: &mut Criterion) {
    let workers = ExecutionStrategy::calculate_optimal_workers(0, 100);
    let team = ThreadTeam::new(workers);
    let pool = build_pool(workers).expect("thread pool");

    let mut group = c.benchmark_group("selection_sort");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for size in [1_000, 10_000] {
        let arr = input(size);
        group.bench_with_input(BenchmarkId::new("sequential", size), &arr, |b, arr| {
            b.iter(|| {
                let mut copy = arr.clone();
                selection_sort(&mut copy);
                copy
            })
        });
        group.bench_with_input(BenchmarkId::new("team", size), &arr, |b, arr| {
            b.iter(|| {
                let mut copy = arr.clone();
                par_selection_sort(&mut copy, &team).expect("team");
                copy
            })
        });
        group.bench_with_input(BenchmarkId::new("pool", size), &arr, |b, arr| {
            b.iter(|| {
                let mut copy = arr.clone();
                pool_selection_sort(&mut copy, &pool);
                copy
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_min_max, bench_selection_sort);
criterion_main!(benches);
