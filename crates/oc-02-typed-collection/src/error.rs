//! Error types for the typed collection

use oc_01_ordered_collection::CollectionError;
use thiserror::Error;

/// Errors raised by a typed collection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypedCollectionError {
    /// An inserted or probed element does not satisfy the capability
    #[error("{container} was provided an invalid type of '{actual}'. Expected '{expected}'")]
    InvalidElementType {
        container: &'static str,
        actual: String,
        expected: String,
    },

    /// The capability never declared a requirement
    #[error("The collection '{container}' does not declare a required capability")]
    NoCapabilityDeclared { container: &'static str },

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// Result alias for typed collection operations
pub type TypedResult<T> = Result<T, TypedCollectionError>;
