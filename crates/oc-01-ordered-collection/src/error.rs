//! Error types for the ordered collection

use std::fmt;

use thiserror::Error;

/// Errors that can occur while operating on an ordered collection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("The call to {operation} on the collection failed: {reason}")]
    SortOperationFailed {
        operation: SortOperation,
        reason: String,
    },

    #[error("Cannot add element to the collection: next index {index} is already occupied")]
    AutoIndexOccupied { index: u64 },

    #[error("Invalid collection configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for collection operations
pub type CollectionResult<T> = Result<T, CollectionError>;

/// The sort-family operation that produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOperation {
    Sort,
    Rsort,
    Asort,
    Arsort,
    Ksort,
    Krsort,
    Natsort,
    Natcasesort,
    Usort,
    Uksort,
    Uasort,
}

impl SortOperation {
    /// Operation name as callers know it
    pub fn name(self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Rsort => "rsort",
            Self::Asort => "asort",
            Self::Arsort => "arsort",
            Self::Ksort => "ksort",
            Self::Krsort => "krsort",
            Self::Natsort => "natsort",
            Self::Natcasesort => "natcasesort",
            Self::Usort => "usort",
            Self::Uksort => "uksort",
            Self::Uasort => "uasort",
        }
    }
}

impl fmt::Display for SortOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
