//! Collection configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use oc_01_ordered_collection::{CollectionConfigBuilder, SortFlags};
//!
//! let config = CollectionConfigBuilder::new()
//!     .initial_capacity(64)
//!     .default_sort_flags(SortFlags::Natural)
//!     .build()
//!     .expect("Valid config");
//! ```

use serde::{Deserialize, Serialize};

use super::sorting::SortFlags;
use crate::error::CollectionError;

/// Upper bound on the capacity reserved up front
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Collection configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Entries reserved when the collection is created
    pub initial_capacity: usize,
    /// Flags applied when a flag-taking sort is called with `None`
    pub default_sort_flags: SortFlags,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            default_sort_flags: SortFlags::Regular,
        }
    }
}

impl CollectionConfig {
    /// Create a new configuration with validation
    pub fn new(
        initial_capacity: usize,
        default_sort_flags: SortFlags,
    ) -> Result<Self, CollectionError> {
        let config = Self {
            initial_capacity,
            default_sort_flags,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration bounds
    pub fn validate(&self) -> Result<(), CollectionError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(CollectionError::InvalidConfig(format!(
                "initial_capacity {} exceeds maximum {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }

        Ok(())
    }

    /// Builder-style method to set the initial capacity
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Builder-style method to set the default sort flags
    pub fn with_default_sort_flags(mut self, flags: SortFlags) -> Self {
        self.default_sort_flags = flags;
        self
    }
}

/// Builder for CollectionConfig with validation
#[derive(Default)]
pub struct CollectionConfigBuilder {
    initial_capacity: Option<usize>,
    default_sort_flags: Option<SortFlags>,
}

impl CollectionConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of entries reserved up front
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Set the flags used by sorts called without explicit flags
    pub fn default_sort_flags(mut self, flags: SortFlags) -> Self {
        self.default_sort_flags = Some(flags);
        self
    }

    /// Build the CollectionConfig, validating all parameters
    pub fn build(self) -> Result<CollectionConfig, CollectionError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation (for internal use only)
    pub fn build_unchecked(self) -> CollectionConfig {
        let defaults = CollectionConfig::default();

        CollectionConfig {
            initial_capacity: self.initial_capacity.unwrap_or(defaults.initial_capacity),
            default_sort_flags: self
                .default_sort_flags
                .unwrap_or(defaults.default_sort_flags),
        }
    }
}
