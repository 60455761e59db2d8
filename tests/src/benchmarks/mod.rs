//! # Ordered-Collections Benchmarks
//!
//! Performance benchmarks per crate.

pub mod oc_01_ordered_collection;
pub mod oc_02_typed_collection;
