//! Domain Layer - Pure container logic
//!
//! This layer contains:
//! - Entry keys and key normalization
//! - The ordered container and its single-entry and bulk operations
//! - Positional operations (slice, splice, reverse, prepend)
//! - The sort family and sort flags
//! - Natural-order comparison
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Failed operations leave the container unchanged

pub mod config;
pub mod container;
pub mod key;
pub mod natural;
pub mod positional;
pub mod sorting;

pub use config::{CollectionConfig, CollectionConfigBuilder, MAX_INITIAL_CAPACITY};
pub use container::OrderedContainer;
pub use key::{Key, ToKey};
pub use positional::window;
pub use sorting::{compare_with_flags, SortFlags, SortValue};
