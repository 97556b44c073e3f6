use std::hint::black_box;

use bench::{apply_runtime_for_len, default_rng, random_u64s, random_words};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const BENCH_SIZES: [usize; 4] = [1024, 4096, 16384, 65536];
const DUPLICATE_HEAVY_MAX: u64 = 255;
const PROBES: usize = 256;
const WORD_WIDTH: usize = 8;

fn bench_sort(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("slice/sort");

    for &size in &BENCH_SIZES {
        apply_runtime_for_len(&mut group, size);
        let numbers = random_u64s(&mut rng, size, u64::MAX);
        let words = random_words(&mut rng, size, WORD_WIDTH);

        group.bench_function(BenchmarkId::new("sort_u64", size), |bencher| {
            bencher.iter(|| black_box(slice::sort(black_box(&numbers))))
        });
        group.bench_function(BenchmarkId::new("sort_by_u64_desc", size), |bencher| {
            bencher.iter(|| black_box(slice::sort_by(black_box(&numbers), |s, i, j| s[i] > s[j])))
        });
        group.bench_function(BenchmarkId::new("sort_words", size), |bencher| {
            bencher.iter(|| black_box(slice::sort(black_box(&words))))
        });
    }
    group.finish();
}

fn bench_sets(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("slice/sets");

    for &size in &BENCH_SIZES {
        apply_runtime_for_len(&mut group, size);
        let left = random_u64s(&mut rng, size, DUPLICATE_HEAVY_MAX);
        let right = random_u64s(&mut rng, size / 2, DUPLICATE_HEAVY_MAX);

        group.bench_function(BenchmarkId::new("unique", size), |bencher| {
            bencher.iter(|| black_box(slice::unique(black_box(&left))))
        });
        group.bench_function(BenchmarkId::new("subtract", size), |bencher| {
            bencher.iter(|| black_box(slice::subtract(black_box(&left), black_box(&right))))
        });
        group.bench_function(BenchmarkId::new("union", size), |bencher| {
            bencher.iter(|| black_box(slice::union(black_box(&left), black_box(&right))))
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("slice/lookup");

    for &size in &BENCH_SIZES {
        apply_runtime_for_len(&mut group, size);
        let data = slice::sort(&random_u64s(&mut rng, size, (size as u64) * 2));
        let probes = random_u64s(&mut rng, PROBES, (size as u64) * 2);

        group.bench_function(BenchmarkId::new("index", size), |bencher| {
            bencher.iter(|| {
                for probe in &probes {
                    black_box(slice::index(black_box(&data), probe));
                }
            })
        });
        group.bench_function(BenchmarkId::new("sorted_index", size), |bencher| {
            bencher.iter(|| {
                for probe in &probes {
                    black_box(slice::sorted_index(black_box(&data), probe));
                }
            })
        });
    }
    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("slice/transform");

    for &size in &BENCH_SIZES {
        apply_runtime_for_len(&mut group, size);
        let data = random_u64s(&mut rng, size, u64::MAX);

        group.bench_function(BenchmarkId::new("map", size), |bencher| {
            bencher.iter(|| black_box(slice::map(black_box(&data), |x| x.rotate_left(7))))
        });
        group.bench_function(BenchmarkId::new("select", size), |bencher| {
            bencher.iter(|| black_box(slice::select(black_box(&data), |x| x & 1 == 0)))
        });
        group.bench_function(BenchmarkId::new("reduce", size), |bencher| {
            bencher.iter(|| {
                black_box(slice::reduce(black_box(&data), 0_u64, |acc, _, x| {
                    acc.wrapping_add(*x)
                }))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort, bench_sets, bench_lookup, bench_transform);
criterion_main!(benches);
