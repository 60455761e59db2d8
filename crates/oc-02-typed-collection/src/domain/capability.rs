//! Capabilities and the requirements they bind
//!
//! A capability is a type implementing [`Capability`]. It fixes the element
//! type of every container bound to it and supplies the [`Requirement`]
//! each element must satisfy. The binding lives in the type, so all
//! containers of the same capability share it.
//!
//! ```ignore
//! struct Shapes;
//!
//! impl Capability for Shapes {
//!     type Element = Object;
//!
//!     fn requirement() -> Option<Requirement<Object>> {
//!         Some(Requirement::object("Shape", |o| o.is::<Circle>() || o.is::<Square>()))
//!     }
//! }
//! ```

use std::any::{type_name, Any};
use std::borrow::Cow;
use std::fmt;

use super::object::Object;

/// Type-level binding of a required capability
pub trait Capability {
    /// Element type stored by containers bound to this capability
    type Element;

    /// Requirement every element must satisfy, `None` if never declared
    fn requirement() -> Option<Requirement<Self::Element>> {
        None
    }
}

/// Names an element's actual type for error reporting
pub type Describer<E> = fn(&E) -> Cow<'_, str>;

/// Admission check for a capability
pub struct Requirement<E> {
    name: Cow<'static, str>,
    admits: fn(&E) -> bool,
    describe: Describer<E>,
}

impl<E> Requirement<E> {
    /// Requirement named `name` that admits elements passing `admits`
    pub fn new(name: impl Into<Cow<'static, str>>, admits: fn(&E) -> bool) -> Self {
        Self {
            name: name.into(),
            admits,
            describe: static_type_name::<E>,
        }
    }

    /// Requirement already guaranteed by the element type itself
    pub fn always(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, |_| true)
    }

    /// Replace the function naming an element's actual type
    pub fn describe_with(mut self, describe: Describer<E>) -> Self {
        self.describe = describe;
        self
    }

    /// Name of the required capability
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn admits(&self, element: &E) -> bool {
        (self.admits)(element)
    }

    /// Actual type of `element`
    pub fn describe<'a>(&self, element: &'a E) -> Cow<'a, str> {
        (self.describe)(element)
    }
}

impl Requirement<Object> {
    /// Requirement over `Object`s, reporting each element's wrapped type
    pub fn object(name: impl Into<Cow<'static, str>>, admits: fn(&Object) -> bool) -> Self {
        Self::new(name, admits).describe_with(object_type_name)
    }

    /// Admits only `Object`s wrapping a `T`
    pub fn instance_of<T: Any>() -> Self {
        Self::object(type_name::<T>(), Object::is::<T>)
    }
}

fn static_type_name<E>(_: &E) -> Cow<'_, str> {
    Cow::Borrowed(type_name::<E>())
}

fn object_type_name(object: &Object) -> Cow<'_, str> {
    Cow::Borrowed(object.type_name())
}

impl<E> Clone for Requirement<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            admits: self.admits,
            describe: self.describe,
        }
    }
}

impl<E> fmt::Debug for Requirement<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requirement")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
