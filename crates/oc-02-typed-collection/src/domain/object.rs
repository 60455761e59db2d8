//! Shared, dynamically typed element handle

use std::any::{type_name, Any};
use std::fmt;
use std::rc::Rc;

/// Shared handle to a value of any `'static` type
///
/// Cloning shares the value. Two handles are equal only when they share
/// the same value, so membership checks on a container of `Object`s are
/// identity checks.
#[derive(Clone)]
pub struct Object {
    inner: Rc<dyn Any>,
    type_name: &'static str,
}

impl Object {
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            inner: Rc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Whether the wrapped value is a `T`
    pub fn is<T: Any>(&self) -> bool {
        (*self.inner).is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.inner).downcast_ref::<T>()
    }

    /// Type name of the wrapped value
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether both handles share the same value
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.inner), Rc::as_ptr(&other.inner))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Object {}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Object").field(&self.type_name).finish()
    }
}
