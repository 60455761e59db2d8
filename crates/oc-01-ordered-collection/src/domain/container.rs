//! # Ordered Container
//!
//! Order-preserving map from [`Key`] to values with list/map hybrid
//! semantics.
//!
//! ## Data Structures
//!
//! - `entries`: insertion-ordered hash map, O(1) lookup by key and by position
//! - `next_index`: auto-index, one past the largest integer key in use
//! - `cursor`: position of the external iteration protocol
//!
//! ## Invariants Enforced
//!
//! - Keys are unique; overwriting a key keeps its position
//! - Keyless inserts append at `next_index`, which starts at 0, and fail
//!   rather than overwrite when that key is already taken
//! - Order only changes through sort, reverse, splice or prepend

use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::config::CollectionConfig;
use super::key::{Key, ToKey};
use crate::error::{CollectionError, CollectionResult};
use crate::ports::{Countable, ExternalIterator, IndexedAccess};

/// Order-preserving associative container
#[derive(Clone)]
pub struct OrderedContainer<V> {
    /// Entries in iteration order
    pub(crate) entries: IndexMap<Key, V>,
    /// Next auto-index
    pub(crate) next_index: u64,
    /// External iteration position
    pub(crate) cursor: usize,
    /// Configuration
    config: CollectionConfig,
}

impl<V> OrderedContainer<V> {
    /// Creates an empty container with default configuration.
    pub fn new() -> Self {
        Self::from_config(CollectionConfig::default())
    }

    /// Creates an empty container with the given configuration.
    ///
    /// # Errors
    /// - `InvalidConfig` if the configuration fails validation
    pub fn with_config(config: CollectionConfig) -> CollectionResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    pub(crate) fn from_config(config: CollectionConfig) -> Self {
        Self {
            entries: IndexMap::with_capacity(config.initial_capacity),
            next_index: 0,
            cursor: 0,
            config,
        }
    }

    /// Creates a container holding `entries`, inserted in order.
    ///
    /// Duplicate keys keep the position of their first occurrence and the
    /// value of their last.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
    {
        let mut container = Self::new();
        container.extend(entries);
        container
    }

    /// Creates a container holding `values` under auto-indexed keys.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut container = Self::new();
        container.extend(values.into_iter().enumerate().map(|(i, v)| (i as u64, v)));
        container
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    // =========================================================================
    // LOOKUP
    // =========================================================================

    /// Gets the value stored under `key`, `None` when absent.
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&V> {
        self.entries.get(&key.into())
    }

    /// Gets a mutable reference to the value stored under `key`.
    pub fn get_mut<K: Into<Key>>(&mut self, key: K) -> Option<&mut V> {
        self.entries.get_mut(&key.into())
    }

    /// Gets the entry at `position` in iteration order.
    pub fn get_index(&self, position: usize) -> Option<(&Key, &V)> {
        self.entries.get_index(position)
    }

    /// Position of `key` in iteration order.
    pub fn position_of<K: Into<Key>>(&self, key: K) -> Option<usize> {
        self.entries.get_index_of(&key.into())
    }

    pub fn first(&self) -> Option<(&Key, &V)> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<(&Key, &V)> {
        self.entries.last()
    }

    /// Checks if an entry exists under `key`.
    pub fn contains_key<K: Into<Key>>(&self, key: K) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Checks if any entry holds a value equal to `value`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.values().any(|v| v == value)
    }

    /// Returns the number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the container holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key the next keyless insert will use.
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    // =========================================================================
    // SINGLE-ENTRY MUTATION
    // =========================================================================

    /// Inserts `value` under `key`, or under the auto-index when `key` is
    /// `None`. Returns the key the value was stored under.
    ///
    /// An existing key is overwritten in place; a new key is appended.
    ///
    /// # Errors
    /// - `AutoIndexOccupied` if `key` is `None` and the auto-index is taken
    pub fn insert(&mut self, key: Option<Key>, value: V) -> CollectionResult<Key> {
        let key = match key {
            Some(key) => key,
            None => {
                self.reserve_auto_indices(1)?;
                Key::Int(self.next_index)
            }
        };
        self.track_key(&key);
        self.entries.insert(key.clone(), value);
        Ok(key)
    }

    /// Inserts `value` under `key`, returning the previous value.
    pub fn put<K: Into<Key>>(&mut self, key: K, value: V) -> Option<V> {
        let key = key.into();
        self.track_key(&key);
        self.entries.insert(key, value)
    }

    /// Appends `value` under the auto-index and returns the assigned key.
    pub fn push(&mut self, value: V) -> CollectionResult<Key> {
        self.insert(None, value)
    }

    /// Removes the entry under `key`, returning its value. Absent keys are a
    /// no-op.
    pub fn remove<K: Into<Key>>(&mut self, key: K) -> Option<V> {
        let key = key.into();
        let (position, removed_key, value) = self.entries.shift_remove_full(&key)?;

        // Keep the cursor on the same entry
        if position < self.cursor {
            self.cursor -= 1;
        }
        if let Key::Int(i) = removed_key {
            if i.saturating_add(1) == self.next_index {
                self.recompute_next_index();
            }
        }
        Some(value)
    }

    // =========================================================================
    // BULK MUTATION
    // =========================================================================

    /// Snapshot of every entry in order.
    pub fn dump(&self) -> Vec<(Key, V)>
    where
        V: Clone,
    {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Removes every entry.
    pub fn wipe(&mut self) {
        self.entries.clear();
        self.next_index = 0;
        self.cursor = 0;
    }

    /// Replaces every entry with `entries`, inserted in order.
    pub fn overwrite<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
    {
        let previous = self.entries.len();
        self.wipe();
        self.extend(entries);
        debug!(
            previous = previous,
            current = self.entries.len(),
            "Collection overwritten"
        );
    }

    /// Assigns every `(key, value)` directly by key.
    ///
    /// Existing keys are overwritten in place and fresh keys are appended.
    /// Source keys are kept as they are, integer keys included.
    pub fn merge<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
    {
        let before = self.entries.len();
        let mut assigned = 0usize;
        for (key, value) in entries {
            let key = key.into();
            self.track_key(&key);
            self.entries.insert(key, value);
            assigned += 1;
        }
        debug!(
            assigned = assigned,
            added = self.entries.len() - before,
            "Entries merged"
        );
    }

    /// Appends every value under the auto-index.
    ///
    /// Either every value is appended or, when the auto-index range cannot
    /// hold them all, none is.
    pub fn append<I>(&mut self, values: I) -> CollectionResult<()>
    where
        I: IntoIterator<Item = V>,
    {
        let values: Vec<V> = values.into_iter().collect();
        self.reserve_auto_indices(values.len())?;
        for value in values {
            let key = Key::Int(self.next_index);
            self.track_key(&key);
            self.entries.insert(key, value);
        }
        Ok(())
    }

    // =========================================================================
    // DERIVED COLLECTIONS
    // =========================================================================

    /// New container mapping each value to its key.
    ///
    /// When several entries flip to the same key the last one wins, at the
    /// position of the first. Values with no key form are skipped.
    pub fn flip(&self) -> OrderedContainer<Key>
    where
        V: ToKey,
    {
        let mut flipped = OrderedContainer::from_config(self.config.clone());
        for (key, value) in &self.entries {
            match value.to_key() {
                Some(new_key) => {
                    flipped.put(new_key, key.clone());
                }
                None => {
                    warn!(key = %key, "Can only flip integer and string values, entry skipped");
                }
            }
        }
        flipped
    }

    /// New container holding every key, renumbered from 0.
    pub fn keys(&self) -> OrderedContainer<Key> {
        let mut keys = OrderedContainer::from_config(self.config.clone());
        keys.extend(
            self.entries
                .keys()
                .enumerate()
                .map(|(i, k)| (i as u64, k.clone())),
        );
        keys
    }

    // =========================================================================
    // ITERATION
    // =========================================================================

    /// Iterates entries in order; double-ended.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, V> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Key, V> {
        self.entries.iter_mut()
    }

    pub fn keys_iter(&self) -> indexmap::map::Keys<'_, Key, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, Key, V> {
        self.entries.values()
    }

    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, Key, V> {
        self.entries.values_mut()
    }

    pub fn into_values(self) -> indexmap::map::IntoValues<Key, V> {
        self.entries.into_values()
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    /// Advance the auto-index past an integer key about to be stored.
    ///
    /// The auto-index saturates at `u64::MAX`.
    pub(crate) fn track_key(&mut self, key: &Key) {
        if let Key::Int(i) = key {
            self.next_index = self.next_index.max(i.saturating_add(1));
        }
    }

    /// Check that `count` keyless inserts fit before the auto-index runs
    /// into an occupied key.
    pub(crate) fn reserve_auto_indices(&self, count: usize) -> CollectionResult<()> {
        if count == 0 {
            return Ok(());
        }
        let room = if self.entries.contains_key(&Key::Int(self.next_index)) {
            0
        } else {
            u128::from(u64::MAX - self.next_index) + 1
        };
        if count as u128 > room {
            warn!(
                next_index = self.next_index,
                requested = count,
                "Auto-index exhausted, insert refused"
            );
            return Err(CollectionError::AutoIndexOccupied {
                index: self.next_index,
            });
        }
        Ok(())
    }

    pub(crate) fn recompute_next_index(&mut self) {
        self.next_index = self
            .entries
            .keys()
            .filter_map(Key::as_int)
            .max()
            .map_or(0, |i| i.saturating_add(1));
    }

    /// Rebuild entries from an ordered list, renumbering integer keys from 0.
    ///
    /// String keys are kept. Resets the cursor.
    pub(crate) fn rebuild_renumbering_ints(&mut self, entries: Vec<(Key, V)>) {
        let mut rebuilt = IndexMap::with_capacity(entries.len());
        let mut next = 0u64;
        for (key, value) in entries {
            let key = match key {
                Key::Int(_) => {
                    let assigned = Key::Int(next);
                    next += 1;
                    assigned
                }
                Key::Str(s) => Key::Str(s),
            };
            rebuilt.insert(key, value);
        }
        self.entries = rebuilt;
        self.next_index = next;
        self.cursor = 0;
    }

    /// Reorder entries by `order`, a permutation of current positions.
    ///
    /// With `renumber` every key becomes its new position. Resets the cursor.
    pub(crate) fn apply_order(&mut self, order: Vec<usize>, renumber: bool) {
        let mut slots: Vec<Option<(Key, V)>> = std::mem::take(&mut self.entries)
            .into_iter()
            .map(Some)
            .collect();

        let mut reordered = IndexMap::with_capacity(slots.len());
        for (new_position, old_position) in order.into_iter().enumerate() {
            if let Some((key, value)) = slots.get_mut(old_position).and_then(Option::take) {
                let key = if renumber {
                    Key::Int(new_position as u64)
                } else {
                    key
                };
                reordered.insert(key, value);
            }
        }

        self.entries = reordered;
        self.recompute_next_index();
        self.cursor = 0;
    }
}

impl<V> Default for OrderedContainer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for OrderedContainer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

/// Equal when both hold the same entries in the same order.
impl<V: PartialEq> PartialEq for OrderedContainer<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl<V: Eq> Eq for OrderedContainer<V> {}

impl<K: Into<Key>, V> FromIterator<(K, V)> for OrderedContainer<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for OrderedContainer<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<V> IntoIterator for OrderedContainer<V> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a OrderedContainer<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = indexmap::map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// PORT IMPLEMENTATIONS
// =============================================================================

impl<V> ExternalIterator for OrderedContainer<V> {
    type Value = V;

    fn current(&self) -> Option<&V> {
        self.entries.get_index(self.cursor).map(|(_, v)| v)
    }

    fn current_key(&self) -> Option<&Key> {
        self.entries.get_index(self.cursor).map(|(k, _)| k)
    }

    fn advance(&mut self) {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
    }

    fn has_current(&self) -> bool {
        self.cursor < self.entries.len()
    }

    fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl<V> IndexedAccess for OrderedContainer<V> {
    type Value = V;
    type Error = CollectionError;

    fn has(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &Key) -> Option<&V> {
        self.entries.get(key)
    }

    fn set(&mut self, key: Option<Key>, value: V) -> CollectionResult<()> {
        self.insert(key, value).map(|_| ())
    }

    fn unset(&mut self, key: &Key) {
        self.remove(key);
    }
}

impl<V> Countable for OrderedContainer<V> {
    fn count(&self) -> usize {
        self.entries.len()
    }
}
