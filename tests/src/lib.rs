//! # Ordered-Collections Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks per crate
//! │   ├── oc_01_ordered_collection.rs
//! │   └── oc_02_typed_collection.rs
//! │
//! ├── integration/      # Cross-crate flows
//! │
//! └── support.rs        # Log capture and subscriber setup
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p oc-tests
//!
//! # With logs
//! RUST_LOG=debug cargo test -p oc-tests -- --nocapture
//!
//! # Benchmarks
//! cargo bench -p oc-tests
//! ```

pub mod benchmarks;
pub mod integration;
pub mod support;
