//! # Cross-Crate Integration Flows
//!
//! Exercises `oc-01-ordered-collection` and `oc-02-typed-collection`
//! together, including the log events each operation emits.

pub mod flows;
