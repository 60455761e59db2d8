//! Inbound Ports (Driving Ports)
//!
//! These traits define the array-like protocols that both the ordered and
//! the typed container expose.

use crate::domain::Key;

/// Forward-only cursor over a container's entries
///
/// `has_current` becomes false exactly when the cursor has advanced past
/// the last entry; `rewind` moves it back to the first.
pub trait ExternalIterator {
    type Value;

    /// Value at the cursor
    fn current(&self) -> Option<&Self::Value>;

    /// Key at the cursor
    fn current_key(&self) -> Option<&Key>;

    /// Move the cursor to the next entry
    fn advance(&mut self);

    /// Whether the cursor points at an entry
    fn has_current(&self) -> bool;

    /// Move the cursor back to the first entry
    fn rewind(&mut self);
}

/// Keyed access in the manner of array subscripts
pub trait IndexedAccess {
    type Value;
    type Error;

    /// Whether an entry exists under `key`
    fn has(&self, key: &Key) -> bool;

    /// Value under `key`, `None` when absent
    fn get(&self, key: &Key) -> Option<&Self::Value>;

    /// Store `value` under `key`, or under the auto-index when `None`
    fn set(&mut self, key: Option<Key>, value: Self::Value) -> Result<(), Self::Error>;

    /// Remove the entry under `key` if present
    fn unset(&mut self, key: &Key);
}

/// Element count
pub trait Countable {
    fn count(&self) -> usize;
}
