//! # OC-01 Ordered Collection
//!
//! Order-preserving associative container with list/map hybrid semantics:
//! integer or string keys, insertion order preserved, auto-indexed appends,
//! bidirectional iteration, and array-style bulk and sort operations.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure container logic, no I/O
//!   - `OrderedContainer`: The container
//!   - `Key`: Integer-or-string entry key
//!   - `SortFlags`, `SortValue`: Flag-driven value ordering
//!   - `CollectionConfig`: Configuration with validation
//!   - `CollectionConfigBuilder`: Fluent builder for configuration
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `ExternalIterator`: Cursor protocol
//!   - `IndexedAccess`: Subscript protocol
//!   - `Countable`: Size protocol
//!
//! ## Invariants
//!
//! - Keys are unique; overwriting a key never moves it
//! - Keyless inserts take one past the largest integer key in use, and
//!   fail with `AutoIndexOccupied` once that key is taken
//! - Sort and splice either commit fully or leave the container unchanged
//!
//! ## Usage Example
//!
//! ```ignore
//! use oc_01_ordered_collection::{Key, OrderedContainer};
//!
//! let mut c = OrderedContainer::from_values(["a", "b", "c"]);
//! c.splice(1, Some(1), ["x", "y"]);
//! assert_eq!(c.values().copied().collect::<Vec<_>>(), ["a", "x", "y", "c"]);
//!
//! c.put("name", "z");
//! c.asort(None)?;
//! assert_eq!(c.first(), Some((&Key::Int(0), &"a")));
//! ```

pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for convenience
pub use domain::{
    compare_with_flags, natural, window, CollectionConfig, CollectionConfigBuilder, Key,
    OrderedContainer, SortFlags, SortValue, ToKey, MAX_INITIAL_CAPACITY,
};
pub use error::{CollectionError, CollectionResult, SortOperation};
pub use ports::{Countable, ExternalIterator, IndexedAccess};
