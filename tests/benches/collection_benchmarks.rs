//! # Ordered-Collections Benchmarks
//!
//! | Crate | Claim |
//! |-------|-------|
//! | oc-01 Ordered Collection | O(1) keyed lookup, amortized O(1) append |
//! | oc-01 Ordered Collection | O(n log n) sorts, O(n) splice |
//! | oc-02 Typed Collection | Admission check adds O(1) per element |

use criterion::{criterion_group, criterion_main, Criterion};
use oc_tests::benchmarks::{oc_01_ordered_collection, oc_02_typed_collection};

fn bench_ordered_collection(c: &mut Criterion) {
    oc_01_ordered_collection::register_benchmarks(c);
}

fn bench_typed_collection(c: &mut Criterion) {
    oc_02_typed_collection::register_benchmarks(c);
}

criterion_group!(benches, bench_ordered_collection, bench_typed_collection);
criterion_main!(benches);
