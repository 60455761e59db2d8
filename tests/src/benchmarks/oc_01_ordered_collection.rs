//! # OC-01 Ordered Collection Benchmarks
//!
//! - Keyed lookup stays flat as the collection grows
//! - Keyless appends are amortized O(1)
//! - Sorts and splices scale with entry count

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use oc_01_ordered_collection::{Key, OrderedContainer, SortFlags};
use std::time::Duration;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Values in a fixed scrambled order
fn scrambled(len: usize) -> Vec<u64> {
    (0..len as u64).map(|i| (i * 7_919) % len as u64).collect()
}

fn named(len: usize) -> OrderedContainer<u64> {
    OrderedContainer::from_entries((0..len as u64).map(|i| (format!("key-{}", i), i)))
}

pub fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("oc-01/lookup");
    group.measurement_time(Duration::from_secs(5));

    for size in SIZES {
        let container = named(size);
        let probes: Vec<Key> = scrambled(size)
            .into_iter()
            .take(1_000)
            .map(|i| Key::from(format!("key-{}", i)))
            .collect();

        group.bench_with_input(BenchmarkId::new("string_key", size), &container, |b, c| {
            b.iter(|| {
                for key in &probes {
                    black_box(c.get(key));
                }
            })
        });
    }

    group.finish();
}

pub fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("oc-01/append");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("keyless", size), &size, |b, &size| {
            b.iter(|| {
                let mut container = OrderedContainer::new();
                black_box(container.append(0..size as u64).is_ok());
                black_box(container.len())
            })
        });
    }

    group.finish();
}

pub fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("oc-01/sort");
    group.measurement_time(Duration::from_secs(10));

    for size in SIZES {
        let container = OrderedContainer::from_values(scrambled(size));

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("asort_regular", size), &container, |b, c| {
            b.iter(|| {
                let mut c = c.clone();
                black_box(c.asort(Some(SortFlags::Regular)))
            })
        });
        group.bench_with_input(BenchmarkId::new("ksort_natural", size), &named(size), |b, c| {
            b.iter(|| {
                let mut c = c.clone();
                black_box(c.ksort(Some(SortFlags::Natural)))
            })
        });
    }

    group.finish();
}

pub fn bench_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("oc-01/splice");

    for size in SIZES {
        let container = OrderedContainer::from_values(0..size as u64);

        group.bench_with_input(BenchmarkId::new("middle", size), &container, |b, c| {
            b.iter(|| {
                let mut c = c.clone();
                black_box(c.splice(size as isize / 2, Some(10), [1, 2, 3]))
            })
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_lookup(c);
    bench_append(c);
    bench_sort(c);
    bench_splice(c);
}
