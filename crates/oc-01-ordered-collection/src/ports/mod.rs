//! Ports Layer
//!
//! Defines the protocols (traits) through which callers drive a container:
//! - External iteration (cursor based)
//! - Indexed access
//! - Size

pub mod inbound;

pub use inbound::{Countable, ExternalIterator, IndexedAccess};
