//! # OC-02 Typed Collection
//!
//! Ordered collection that admits only elements satisfying a declared
//! capability.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`)
//!   - `Capability`: Type-level binding of the element type and requirement
//!   - `Requirement`: Admission predicate plus the capability's name
//!   - `Object`: Shared handle to a value of any type, for class-style checks
//!   - `TypedContainer`: Gated wrapper around `OrderedContainer`
//!
//! The array-like protocols (`ExternalIterator`, `IndexedAccess`,
//! `Countable`) come from `oc-01-ordered-collection`.
//!
//! ## Invariants
//!
//! - A capability without a requirement cannot back a container
//! - Every stored element passed the requirement when it was stored
//! - A rejected insert or batch leaves the container unchanged
//!
//! ## Usage Example
//!
//! ```ignore
//! use oc_02_typed_collection::{Capability, Object, Requirement, TypedContainer};
//!
//! struct Circles;
//!
//! impl Capability for Circles {
//!     type Element = Object;
//!
//!     fn requirement() -> Option<Requirement<Object>> {
//!         Some(Requirement::instance_of::<Circle>())
//!     }
//! }
//!
//! let mut circles = TypedContainer::<Circles>::new()?;
//! circles.push(Object::new(Circle { radius: 1.0 }))?;
//! assert!(circles.push(Object::new("not a circle")).is_err());
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{Capability, Describer, Object, Requirement, TypedContainer};
pub use error::{TypedCollectionError, TypedResult};
