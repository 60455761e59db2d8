//! Sort family
//!
//! Every sort computes the new order first and only then rewrites the
//! collection, so a failed comparison leaves the collection untouched.
//!
//! | operation       | orders by | keys        |
//! |-----------------|-----------|-------------|
//! | `sort`/`rsort`  | value     | renumbered  |
//! | `asort`/`arsort`| value     | kept        |
//! | `ksort`/`krsort`| key       | kept        |
//! | `natsort`       | value     | kept        |
//! | `natcasesort`   | value     | kept        |
//! | `usort`         | value     | renumbered  |
//! | `uasort`        | value     | kept        |
//! | `uksort`        | key       | kept        |
//!
//! All sorts are stable. The ordering pass is a merge sort that tolerates
//! comparators which are not a total order: such a comparator yields some
//! permutation of the entries, never a panic.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::container::OrderedContainer;
use super::key::Key;
use super::natural;
use crate::error::{CollectionError, CollectionResult, SortOperation};

/// How values (or keys) are compared by the flag-taking sorts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortFlags {
    /// The value's own ordering; an incomparable pair fails the sort
    #[default]
    Regular,
    /// Numeric view of each value; a value without one fails the sort
    Numeric,
    /// Text view, compared bytewise
    String,
    /// Text view, compared after lowercasing
    StringCaseInsensitive,
    /// Text view, natural order
    Natural,
    /// Text view, natural order ignoring case
    NaturalCaseInsensitive,
}

impl fmt::Display for SortFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Regular => "regular",
            Self::Numeric => "numeric",
            Self::String => "string",
            Self::StringCaseInsensitive => "case-insensitive string",
            Self::Natural => "natural",
            Self::NaturalCaseInsensitive => "case-insensitive natural",
        };
        f.write_str(name)
    }
}

/// Values that can be ordered by [`SortFlags`]
pub trait SortValue {
    /// Ordering under [`SortFlags::Regular`]; `None` when incomparable
    fn regular_cmp(&self, other: &Self) -> Option<Ordering>;

    /// Numeric view used by [`SortFlags::Numeric`]
    fn numeric(&self) -> Option<f64>;

    /// Text view used by string and natural ordering
    fn text(&self) -> Cow<'_, str>;
}

/// Compare two values under `flags`
pub fn compare_with_flags<T: SortValue + ?Sized>(
    a: &T,
    b: &T,
    flags: SortFlags,
) -> Option<Ordering> {
    match flags {
        SortFlags::Regular => a.regular_cmp(b),
        SortFlags::Numeric => a.numeric()?.partial_cmp(&b.numeric()?),
        SortFlags::String => Some(a.text().cmp(&b.text())),
        SortFlags::StringCaseInsensitive => {
            Some(a.text().to_lowercase().cmp(&b.text().to_lowercase()))
        }
        SortFlags::Natural => Some(natural::compare(&a.text(), &b.text())),
        SortFlags::NaturalCaseInsensitive => {
            Some(natural::compare_ignore_case(&a.text(), &b.text()))
        }
    }
}

/// Parse a numeric string (integer, decimal or exponent form)
fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty()
        || !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse().ok()
}

/// Numeric strings come first, by value and then bytewise; all other
/// strings follow, bytewise.
fn compare_text_regular(a: &str, b: &str) -> Ordering {
    match (parse_numeric(a), parse_numeric(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

macro_rules! integer_sort_value {
    ($($t:ty),*) => {
        $(
            impl SortValue for $t {
                fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }

                fn numeric(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

macro_rules! float_sort_value {
    ($($t:ty),*) => {
        $(
            impl SortValue for $t {
                fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
                    self.partial_cmp(other)
                }

                fn numeric(&self) -> Option<f64> {
                    Some(f64::from(*self))
                }

                fn text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

integer_sort_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
float_sort_value!(f32, f64);

impl SortValue for bool {
    fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn numeric(&self) -> Option<f64> {
        Some(if *self { 1.0 } else { 0.0 })
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

impl SortValue for char {
    fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn numeric(&self) -> Option<f64> {
        self.to_digit(10).map(f64::from)
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl SortValue for str {
    fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare_text_regular(self, other))
    }

    fn numeric(&self) -> Option<f64> {
        parse_numeric(self)
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl SortValue for String {
    fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare_text_regular(self, other))
    }

    fn numeric(&self) -> Option<f64> {
        parse_numeric(self)
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

/// Integer keys rank with numeric strings. On equal numeric value an
/// integer key comes before a string key.
impl SortValue for Key {
    fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
        let ordering = match (self, other) {
            (Key::Int(a), Key::Int(b)) => a.cmp(b),
            (Key::Str(a), Key::Str(b)) => compare_text_regular(a, b),
            (Key::Int(a), Key::Str(b)) => match parse_numeric(b) {
                Some(y) => (*a as f64).total_cmp(&y).then(Ordering::Less),
                None => Ordering::Less,
            },
            (Key::Str(_), Key::Int(_)) => return other.regular_cmp(self).map(Ordering::reverse),
        };
        Some(ordering)
    }

    fn numeric(&self) -> Option<f64> {
        match self {
            Key::Int(i) => Some(*i as f64),
            Key::Str(s) => parse_numeric(s),
        }
    }

    fn text(&self) -> Cow<'_, str> {
        Key::text(self)
    }
}

impl<T: SortValue + ?Sized> SortValue for &T {
    fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).regular_cmp(*other)
    }

    fn numeric(&self) -> Option<f64> {
        (**self).numeric()
    }

    fn text(&self) -> Cow<'_, str> {
        (**self).text()
    }
}

/// What happens to keys once the new order is committed
#[derive(Clone, Copy)]
enum KeyPolicy {
    Keep,
    Renumber,
}

impl<V> OrderedContainer<V> {
    /// Sort by value and renumber keys from 0
    pub fn sort(&mut self, flags: Option<SortFlags>) -> CollectionResult<()>
    where
        V: SortValue,
    {
        let flags = self.resolve_flags(flags);
        self.sort_with_flags(SortOperation::Sort, flags, false, KeyPolicy::Renumber)
    }

    /// Sort by value in descending order and renumber keys from 0
    pub fn rsort(&mut self, flags: Option<SortFlags>) -> CollectionResult<()>
    where
        V: SortValue,
    {
        let flags = self.resolve_flags(flags);
        self.sort_with_flags(SortOperation::Rsort, flags, true, KeyPolicy::Renumber)
    }

    /// Sort by value, keeping key association
    pub fn asort(&mut self, flags: Option<SortFlags>) -> CollectionResult<()>
    where
        V: SortValue,
    {
        let flags = self.resolve_flags(flags);
        self.sort_with_flags(SortOperation::Asort, flags, false, KeyPolicy::Keep)
    }

    /// Sort by value in descending order, keeping key association
    pub fn arsort(&mut self, flags: Option<SortFlags>) -> CollectionResult<()>
    where
        V: SortValue,
    {
        let flags = self.resolve_flags(flags);
        self.sort_with_flags(SortOperation::Arsort, flags, true, KeyPolicy::Keep)
    }

    /// Sort by key
    pub fn ksort(&mut self, flags: Option<SortFlags>) -> CollectionResult<()> {
        let flags = self.resolve_flags(flags);
        self.sort_keys_with_flags(SortOperation::Ksort, flags, false)
    }

    /// Sort by key in descending order
    pub fn krsort(&mut self, flags: Option<SortFlags>) -> CollectionResult<()> {
        let flags = self.resolve_flags(flags);
        self.sort_keys_with_flags(SortOperation::Krsort, flags, true)
    }

    /// Sort by value in natural order, keeping key association
    pub fn natsort(&mut self) -> CollectionResult<()>
    where
        V: SortValue,
    {
        self.sort_with_flags(
            SortOperation::Natsort,
            SortFlags::Natural,
            false,
            KeyPolicy::Keep,
        )
    }

    /// Sort by value in case-insensitive natural order, keeping key association
    pub fn natcasesort(&mut self) -> CollectionResult<()>
    where
        V: SortValue,
    {
        self.sort_with_flags(
            SortOperation::Natcasesort,
            SortFlags::NaturalCaseInsensitive,
            false,
            KeyPolicy::Keep,
        )
    }

    /// Sort by value with a comparator and renumber keys from 0
    pub fn usort<F>(&mut self, mut compare: F) -> CollectionResult<()>
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        self.try_usort(|a, b| Ok::<_, Infallible>(compare(a, b)))
    }

    /// Sort by key with a comparator
    pub fn uksort<F>(&mut self, mut compare: F) -> CollectionResult<()>
    where
        F: FnMut(&Key, &Key) -> Ordering,
    {
        self.try_uksort(|a, b| Ok::<_, Infallible>(compare(a, b)))
    }

    /// Sort by value with a comparator, keeping key association
    pub fn uasort<F>(&mut self, mut compare: F) -> CollectionResult<()>
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        self.try_uasort(|a, b| Ok::<_, Infallible>(compare(a, b)))
    }

    /// Like [`usort`](Self::usort), aborting on the first comparator error
    pub fn try_usort<F, E>(&mut self, mut compare: F) -> CollectionResult<()>
    where
        F: FnMut(&V, &V) -> Result<Ordering, E>,
        E: fmt::Display,
    {
        let order = self.sorted_order(|a, _, b, _| compare(a, b).map_err(|e| e.to_string()));
        self.commit_order(SortOperation::Usort, order, KeyPolicy::Renumber)
    }

    /// Like [`uksort`](Self::uksort), aborting on the first comparator error
    pub fn try_uksort<F, E>(&mut self, mut compare: F) -> CollectionResult<()>
    where
        F: FnMut(&Key, &Key) -> Result<Ordering, E>,
        E: fmt::Display,
    {
        let order = self.sorted_order(|_, a, _, b| compare(a, b).map_err(|e| e.to_string()));
        self.commit_order(SortOperation::Uksort, order, KeyPolicy::Keep)
    }

    /// Like [`uasort`](Self::uasort), aborting on the first comparator error
    pub fn try_uasort<F, E>(&mut self, mut compare: F) -> CollectionResult<()>
    where
        F: FnMut(&V, &V) -> Result<Ordering, E>,
        E: fmt::Display,
    {
        let order = self.sorted_order(|a, _, b, _| compare(a, b).map_err(|e| e.to_string()));
        self.commit_order(SortOperation::Uasort, order, KeyPolicy::Keep)
    }

    fn resolve_flags(&self, flags: Option<SortFlags>) -> SortFlags {
        flags.unwrap_or(self.config().default_sort_flags)
    }

    fn sort_with_flags(
        &mut self,
        operation: SortOperation,
        flags: SortFlags,
        descending: bool,
        keys: KeyPolicy,
    ) -> CollectionResult<()>
    where
        V: SortValue,
    {
        let order = self.sorted_order(|va, _, vb, _| {
            let ordering = compare_with_flags(va, vb, flags)
                .ok_or_else(|| format!("values are not comparable under {} ordering", flags))?;
            Ok(if descending { ordering.reverse() } else { ordering })
        });
        self.commit_order(operation, order, keys)
    }

    fn sort_keys_with_flags(
        &mut self,
        operation: SortOperation,
        flags: SortFlags,
        descending: bool,
    ) -> CollectionResult<()> {
        let order = self.sorted_order(|_, ka, _, kb| {
            let ordering = compare_with_flags(ka, kb, flags)
                .ok_or_else(|| format!("keys are not comparable under {} ordering", flags))?;
            Ok(if descending { ordering.reverse() } else { ordering })
        });
        self.commit_order(operation, order, KeyPolicy::Keep)
    }

    /// Stable sort of entry positions; the first comparison error wins
    fn sorted_order<F>(&self, mut compare: F) -> Result<Vec<usize>, String>
    where
        F: FnMut(&V, &Key, &V, &Key) -> Result<Ordering, String>,
    {
        let entries: Vec<(&Key, &V)> = self.iter().collect();
        merge_sort_positions(entries.len(), |a, b| {
            let (ka, va) = entries[a];
            let (kb, vb) = entries[b];
            compare(va, ka, vb, kb)
        })
    }

    fn commit_order(
        &mut self,
        operation: SortOperation,
        order: Result<Vec<usize>, String>,
        keys: KeyPolicy,
    ) -> CollectionResult<()> {
        match order {
            Ok(order) => {
                self.apply_order(order, matches!(keys, KeyPolicy::Renumber));
                Ok(())
            }
            Err(reason) => {
                warn!(
                    operation = %operation,
                    reason = %reason,
                    "Sort failed, collection left unchanged"
                );
                Err(CollectionError::SortOperationFailed { operation, reason })
            }
        }
    }
}

/// Bottom-up stable merge sort of the positions `0..len`.
///
/// Stops at the first comparator error. Every merge step consumes each
/// input exactly once, so an inconsistent comparator still yields a
/// permutation.
fn merge_sort_positions<E, F>(len: usize, mut compare: F) -> Result<Vec<usize>, E>
where
    F: FnMut(usize, usize) -> Result<Ordering, E>,
{
    let mut order: Vec<usize> = (0..len).collect();
    let mut merged: Vec<usize> = Vec::with_capacity(len);
    let mut width = 1;

    while width < len {
        merged.clear();
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);

            while left < mid && right < end {
                // Ties take the left run first
                if compare(order[right], order[left])? == Ordering::Less {
                    merged.push(order[right]);
                    right += 1;
                } else {
                    merged.push(order[left]);
                    left += 1;
                }
            }
            merged.extend_from_slice(&order[left..mid]);
            merged.extend_from_slice(&order[right..end]);
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }

    Ok(order)
}
