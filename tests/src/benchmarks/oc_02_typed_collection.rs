//! # OC-02 Typed Collection Benchmarks
//!
//! Cost of the admission check on the insert path.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use oc_01_ordered_collection::OrderedContainer;
use oc_02_typed_collection::{Capability, Object, Requirement, TypedContainer};

struct Point;

struct Points;

impl Capability for Points {
    type Element = Object;

    fn requirement() -> Option<Requirement<Object>> {
        Some(Requirement::instance_of::<Point>())
    }
}

pub fn bench_gated_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("oc-02/append");

    for size in [1_000usize, 10_000] {
        let objects: Vec<Object> = (0..size).map(|_| Object::new(Point)).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("ungated", size), &objects, |b, objects| {
            b.iter(|| {
                let mut c = OrderedContainer::new();
                black_box(c.append(objects.iter().cloned()).is_ok());
                black_box(c.len())
            })
        });
        group.bench_with_input(BenchmarkId::new("gated", size), &objects, |b, objects| {
            b.iter(|| {
                let Ok(mut c) = TypedContainer::<Points>::new() else {
                    return 0;
                };
                black_box(c.append(objects.iter().cloned()).is_ok());
                black_box(c.len())
            })
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_gated_append(c);
}
