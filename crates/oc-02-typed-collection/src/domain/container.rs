//! # Typed Container
//!
//! An [`OrderedContainer`] that admits only elements satisfying the
//! requirement of its [`Capability`].
//!
//! ## Gated Paths
//!
//! Every path that stores a value validates it first: single inserts,
//! construction, `overwrite`, `merge`, `append`, `prepend` and `splice`
//! replacements. Batches are validated as a whole before anything is
//! stored, so a rejected batch leaves the container unchanged.
//!
//! Reads go through `Deref` to the inner container. There is no mutable
//! access to stored values, since that would bypass the gate.

use std::any::type_name;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use oc_01_ordered_collection::{
    CollectionConfig, Countable, ExternalIterator, IndexedAccess, Key, OrderedContainer,
    SortFlags, SortValue,
};
use tracing::debug;

use super::capability::{Capability, Requirement};
use crate::error::{TypedCollectionError, TypedResult};

/// Ordered container bound to the capability `C`
pub struct TypedContainer<C: Capability> {
    inner: OrderedContainer<C::Element>,
    requirement: Requirement<C::Element>,
    _capability: PhantomData<fn() -> C>,
}

impl<C: Capability> TypedContainer<C> {
    /// Creates an empty container.
    ///
    /// # Errors
    /// - `NoCapabilityDeclared` if `C` declares no requirement
    pub fn new() -> TypedResult<Self> {
        let requirement = Self::bound_requirement()?;
        Ok(Self::from_parts(OrderedContainer::new(), requirement))
    }

    /// Creates an empty container with the given configuration.
    ///
    /// # Errors
    /// - `NoCapabilityDeclared` if `C` declares no requirement
    /// - `Collection(InvalidConfig)` if the configuration fails validation
    pub fn with_config(config: CollectionConfig) -> TypedResult<Self> {
        let requirement = Self::bound_requirement()?;
        let inner = OrderedContainer::with_config(config)?;
        Ok(Self::from_parts(inner, requirement))
    }

    /// Creates a container holding `entries`, each inserted through the gate.
    ///
    /// The capability is checked before any entry is read.
    pub fn from_entries<I, K>(entries: I) -> TypedResult<Self>
    where
        I: IntoIterator<Item = (K, C::Element)>,
        K: Into<Key>,
    {
        let mut container = Self::new()?;
        for (key, value) in entries {
            container.insert(Some(key.into()), value)?;
        }
        Ok(container)
    }

    /// Creates a container holding `values` under auto-indexed keys.
    pub fn from_values<I>(values: I) -> TypedResult<Self>
    where
        I: IntoIterator<Item = C::Element>,
    {
        let mut container = Self::new()?;
        container.append(values)?;
        Ok(container)
    }

    fn from_parts(
        inner: OrderedContainer<C::Element>,
        requirement: Requirement<C::Element>,
    ) -> Self {
        Self {
            inner,
            requirement,
            _capability: PhantomData,
        }
    }

    fn bound_requirement() -> TypedResult<Requirement<C::Element>> {
        C::requirement().ok_or(TypedCollectionError::NoCapabilityDeclared {
            container: Self::container_name(),
        })
    }

    fn container_name() -> &'static str {
        type_name::<C>()
    }

    /// The requirement every element satisfies
    pub fn requirement(&self) -> &Requirement<C::Element> {
        &self.requirement
    }

    /// Unwraps the inner container, dropping the gate.
    pub fn into_inner(self) -> OrderedContainer<C::Element> {
        self.inner
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Checks `value` against the requirement.
    ///
    /// # Errors
    /// - `InvalidElementType` naming the actual and expected types
    pub fn validate(&self, value: &C::Element) -> TypedResult<()> {
        if self.requirement.admits(value) {
            return Ok(());
        }

        let actual = self.requirement.describe(value).into_owned();
        debug!(
            container = Self::container_name(),
            actual = %actual,
            expected = self.requirement.name(),
            "Element rejected"
        );
        Err(TypedCollectionError::InvalidElementType {
            container: Self::container_name(),
            actual,
            expected: self.requirement.name().to_string(),
        })
    }

    fn validate_all<'a, I>(&self, values: I) -> TypedResult<()>
    where
        I: IntoIterator<Item = &'a C::Element>,
        C::Element: 'a,
    {
        values.into_iter().try_for_each(|value| self.validate(value))
    }

    // =========================================================================
    // LOOKUP
    // =========================================================================

    /// Gets the value stored under `key`.
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&C::Element> {
        self.inner.get(key)
    }

    /// Checks if any entry holds `value`.
    ///
    /// Probing with a value that does not satisfy the requirement is an
    /// error rather than `false`.
    pub fn contains_value(&self, value: &C::Element) -> TypedResult<bool>
    where
        C::Element: PartialEq,
    {
        self.validate(value)?;
        Ok(self.inner.contains_value(value))
    }

    // =========================================================================
    // GATED MUTATION
    // =========================================================================

    /// Inserts `value` under `key`, or under the auto-index when `key` is
    /// `None`. Returns the key the value was stored under.
    pub fn insert(&mut self, key: Option<Key>, value: C::Element) -> TypedResult<Key> {
        self.validate(&value)?;
        Ok(self.inner.insert(key, value)?)
    }

    /// Inserts `value` under `key`, returning the previous value.
    pub fn put<K: Into<Key>>(
        &mut self,
        key: K,
        value: C::Element,
    ) -> TypedResult<Option<C::Element>> {
        self.validate(&value)?;
        Ok(self.inner.put(key, value))
    }

    /// Appends `value` under the auto-index.
    pub fn push(&mut self, value: C::Element) -> TypedResult<Key> {
        self.insert(None, value)
    }

    /// Replaces every entry with `entries`.
    pub fn overwrite<I, K>(&mut self, entries: I) -> TypedResult<()>
    where
        I: IntoIterator<Item = (K, C::Element)>,
        K: Into<Key>,
    {
        let entries: Vec<(K, C::Element)> = entries.into_iter().collect();
        self.validate_all(entries.iter().map(|(_, v)| v))?;
        self.inner.overwrite(entries);
        Ok(())
    }

    /// Assigns every `(key, value)` directly by key.
    pub fn merge<I, K>(&mut self, entries: I) -> TypedResult<()>
    where
        I: IntoIterator<Item = (K, C::Element)>,
        K: Into<Key>,
    {
        let entries: Vec<(K, C::Element)> = entries.into_iter().collect();
        self.validate_all(entries.iter().map(|(_, v)| v))?;
        self.inner.merge(entries);
        Ok(())
    }

    /// Appends every value under the auto-index.
    pub fn append<I>(&mut self, values: I) -> TypedResult<()>
    where
        I: IntoIterator<Item = C::Element>,
    {
        let values: Vec<C::Element> = values.into_iter().collect();
        self.validate_all(&values)?;
        Ok(self.inner.append(values)?)
    }

    /// Places `values` at the front; see [`OrderedContainer::prepend`].
    pub fn prepend<I>(&mut self, values: I, preserve_order: bool) -> TypedResult<()>
    where
        I: IntoIterator<Item = C::Element>,
    {
        let values: Vec<C::Element> = values.into_iter().collect();
        self.validate_all(&values)?;
        Ok(self.inner.prepend(values, preserve_order)?)
    }

    /// Replaces a window with `replacement`; see [`OrderedContainer::splice`].
    pub fn splice<I>(
        &mut self,
        offset: isize,
        length: Option<isize>,
        replacement: I,
    ) -> TypedResult<Vec<C::Element>>
    where
        I: IntoIterator<Item = C::Element>,
    {
        let replacement: Vec<C::Element> = replacement.into_iter().collect();
        self.validate_all(&replacement)?;
        Ok(self.inner.splice(offset, length, replacement))
    }

    // =========================================================================
    // UNGATED MUTATION
    // =========================================================================

    pub fn remove<K: Into<Key>>(&mut self, key: K) -> Option<C::Element> {
        self.inner.remove(key)
    }

    pub fn wipe(&mut self) {
        self.inner.wipe();
    }

    pub fn reverse(&mut self) {
        self.inner.reverse();
    }

    /// New typed container over a window; see [`OrderedContainer::slice`].
    pub fn slice(&self, offset: isize, length: Option<isize>, preserve_keys: bool) -> Self
    where
        C::Element: Clone,
    {
        Self::from_parts(
            self.inner.slice(offset, length, preserve_keys),
            self.requirement.clone(),
        )
    }

    // =========================================================================
    // SORTING
    // =========================================================================

    pub fn sort(&mut self, flags: Option<SortFlags>) -> TypedResult<()>
    where
        C::Element: SortValue,
    {
        Ok(self.inner.sort(flags)?)
    }

    pub fn rsort(&mut self, flags: Option<SortFlags>) -> TypedResult<()>
    where
        C::Element: SortValue,
    {
        Ok(self.inner.rsort(flags)?)
    }

    pub fn asort(&mut self, flags: Option<SortFlags>) -> TypedResult<()>
    where
        C::Element: SortValue,
    {
        Ok(self.inner.asort(flags)?)
    }

    pub fn arsort(&mut self, flags: Option<SortFlags>) -> TypedResult<()>
    where
        C::Element: SortValue,
    {
        Ok(self.inner.arsort(flags)?)
    }

    pub fn ksort(&mut self, flags: Option<SortFlags>) -> TypedResult<()> {
        Ok(self.inner.ksort(flags)?)
    }

    pub fn krsort(&mut self, flags: Option<SortFlags>) -> TypedResult<()> {
        Ok(self.inner.krsort(flags)?)
    }

    pub fn natsort(&mut self) -> TypedResult<()>
    where
        C::Element: SortValue,
    {
        Ok(self.inner.natsort()?)
    }

    pub fn natcasesort(&mut self) -> TypedResult<()>
    where
        C::Element: SortValue,
    {
        Ok(self.inner.natcasesort()?)
    }

    pub fn usort<F>(&mut self, compare: F) -> TypedResult<()>
    where
        F: FnMut(&C::Element, &C::Element) -> Ordering,
    {
        Ok(self.inner.usort(compare)?)
    }

    pub fn uksort<F>(&mut self, compare: F) -> TypedResult<()>
    where
        F: FnMut(&Key, &Key) -> Ordering,
    {
        Ok(self.inner.uksort(compare)?)
    }

    pub fn uasort<F>(&mut self, compare: F) -> TypedResult<()>
    where
        F: FnMut(&C::Element, &C::Element) -> Ordering,
    {
        Ok(self.inner.uasort(compare)?)
    }

    pub fn try_usort<F, E>(&mut self, compare: F) -> TypedResult<()>
    where
        F: FnMut(&C::Element, &C::Element) -> Result<Ordering, E>,
        E: fmt::Display,
    {
        Ok(self.inner.try_usort(compare)?)
    }

    pub fn try_uksort<F, E>(&mut self, compare: F) -> TypedResult<()>
    where
        F: FnMut(&Key, &Key) -> Result<Ordering, E>,
        E: fmt::Display,
    {
        Ok(self.inner.try_uksort(compare)?)
    }

    pub fn try_uasort<F, E>(&mut self, compare: F) -> TypedResult<()>
    where
        F: FnMut(&C::Element, &C::Element) -> Result<Ordering, E>,
        E: fmt::Display,
    {
        Ok(self.inner.try_uasort(compare)?)
    }
}

impl<C: Capability> Deref for TypedContainer<C> {
    type Target = OrderedContainer<C::Element>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<C: Capability> Clone for TypedContainer<C>
where
    C::Element: Clone,
{
    fn clone(&self) -> Self {
        Self::from_parts(self.inner.clone(), self.requirement.clone())
    }
}

impl<C: Capability> fmt::Debug for TypedContainer<C>
where
    C::Element: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedContainer")
            .field("requirement", &self.requirement.name())
            .field("entries", &self.inner)
            .finish()
    }
}

impl<C: Capability> PartialEq for TypedContainer<C>
where
    C::Element: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: Capability> IntoIterator for TypedContainer<C> {
    type Item = (Key, C::Element);
    type IntoIter = <OrderedContainer<C::Element> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, C: Capability> IntoIterator for &'a TypedContainer<C> {
    type Item = (&'a Key, &'a C::Element);
    type IntoIter = <&'a OrderedContainer<C::Element> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

// =============================================================================
// PORT IMPLEMENTATIONS
// =============================================================================

impl<C: Capability> ExternalIterator for TypedContainer<C> {
    type Value = C::Element;

    fn current(&self) -> Option<&C::Element> {
        self.inner.current()
    }

    fn current_key(&self) -> Option<&Key> {
        self.inner.current_key()
    }

    fn advance(&mut self) {
        self.inner.advance();
    }

    fn has_current(&self) -> bool {
        self.inner.has_current()
    }

    fn rewind(&mut self) {
        self.inner.rewind();
    }
}

impl<C: Capability> IndexedAccess for TypedContainer<C> {
    type Value = C::Element;
    type Error = TypedCollectionError;

    fn has(&self, key: &Key) -> bool {
        self.inner.contains_key(key)
    }

    fn get(&self, key: &Key) -> Option<&C::Element> {
        self.inner.get(key)
    }

    fn set(&mut self, key: Option<Key>, value: C::Element) -> TypedResult<()> {
        self.insert(key, value).map(|_| ())
    }

    fn unset(&mut self, key: &Key) {
        self.inner.remove(key);
    }
}

impl<C: Capability> Countable for TypedContainer<C> {
    fn count(&self) -> usize {
        self.inner.count()
    }
}
