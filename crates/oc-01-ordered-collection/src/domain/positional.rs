//! Positional bulk operations
//!
//! These operate on positions in iteration order rather than on keys, and
//! each has its own key rule:
//!
//! - `slice`: string keys kept, integer keys renumbered unless preserved
//! - `splice`: string keys kept, every integer key renumbered afterwards
//! - `reverse`: string keys kept, integer keys renumbered in the new order
//! - `prepend`: existing keys untouched, new values take the auto-index
//!
//! `splice` and `reverse` renumber integer keys from 0, so only `prepend`
//! can run out of auto-indices.

use std::ops::Range;

use indexmap::IndexMap;
use tracing::debug;

use super::container::OrderedContainer;
use super::key::Key;
use crate::error::CollectionResult;

/// Resolve `offset`/`length` against a sequence of `len` entries.
///
/// - negative `offset` counts from the end, clamped to the start
/// - `offset` past the end yields an empty window at the end
/// - `None` length runs to the end
/// - negative `length` stops that many entries before the end
pub fn window(len: usize, offset: isize, length: Option<isize>) -> Range<usize> {
    let len = len as isize;
    let start = if offset < 0 {
        (len + offset).max(0)
    } else {
        offset.min(len)
    };
    let end = match length {
        None => len,
        Some(l) if l < 0 => (len + l).max(start),
        Some(l) => start.saturating_add(l).min(len),
    };
    start as usize..end.max(start) as usize
}

impl<V> OrderedContainer<V> {
    /// New container over the window selected by `offset` and `length`.
    ///
    /// String keys are always kept. Integer keys are renumbered from 0 in
    /// window order unless `preserve_keys` is set.
    pub fn slice(&self, offset: isize, length: Option<isize>, preserve_keys: bool) -> Self
    where
        V: Clone,
    {
        let range = window(self.entries.len(), offset, length);
        let mut sliced = Self::from_config(self.config().clone());
        let mut next = 0u64;

        for (key, value) in self.entries.iter().skip(range.start).take(range.len()) {
            let key = match key {
                Key::Int(_) if !preserve_keys => {
                    next += 1;
                    Key::Int(next - 1)
                }
                _ => key.clone(),
            };
            sliced.put(key, value.clone());
        }
        sliced
    }

    /// Removes the window selected by `offset` and `length` and inserts
    /// `replacement` in its place, returning the removed values.
    ///
    /// Afterwards every integer-keyed entry is renumbered from 0 in order;
    /// string keys are kept.
    pub fn splice<I>(
        &mut self,
        offset: isize,
        length: Option<isize>,
        replacement: I,
    ) -> Vec<V>
    where
        I: IntoIterator<Item = V>,
    {
        let range = window(self.entries.len(), offset, length);
        let mut entries: Vec<(Key, V)> = std::mem::take(&mut self.entries).into_iter().collect();

        // Replacement keys are placeholders, renumbered below
        let removed: Vec<V> = entries
            .splice(range.clone(), replacement.into_iter().map(|v| (Key::Int(0), v)))
            .map(|(_, v)| v)
            .collect();

        debug!(
            start = range.start,
            removed = removed.len(),
            remaining = entries.len(),
            "Collection spliced"
        );
        self.rebuild_renumbering_ints(entries);
        removed
    }

    /// Reverses entry order; integer keys are renumbered in the new order.
    pub fn reverse(&mut self) {
        let mut entries: Vec<(Key, V)> = std::mem::take(&mut self.entries).into_iter().collect();
        entries.reverse();
        self.rebuild_renumbering_ints(entries);
    }

    /// Places `values` at the front of the container.
    ///
    /// Values are placed at position 0 one at a time, so the incoming
    /// sequence ends up reversed unless `preserve_order` is set. Each value
    /// takes the auto-index when placed; existing keys are not renumbered.
    ///
    /// # Errors
    /// - `AutoIndexOccupied` if the auto-index range cannot hold every
    ///   value; nothing is placed
    pub fn prepend<I>(&mut self, values: I, preserve_order: bool) -> CollectionResult<()>
    where
        I: IntoIterator<Item = V>,
    {
        let mut incoming: Vec<V> = values.into_iter().collect();
        self.reserve_auto_indices(incoming.len())?;
        if preserve_order {
            incoming.reverse();
        }
        let added = incoming.len();

        let mut front: Vec<(Key, V)> = Vec::with_capacity(added);
        for value in incoming {
            let key = Key::Int(self.next_index);
            self.track_key(&key);
            front.push((key, value));
        }
        // Each placement goes to position 0, so the last placed comes first
        front.reverse();

        let mut entries = IndexMap::with_capacity(front.len() + self.entries.len());
        entries.extend(front);
        entries.extend(std::mem::take(&mut self.entries));
        self.entries = entries;
        self.cursor = 0;

        debug!(added = added, total = self.entries.len(), "Values prepended");
        Ok(())
    }
}
