//! Domain layer for the typed collection

pub mod capability;
pub mod container;
pub mod object;

pub use capability::{Capability, Describer, Requirement};
pub use container::TypedContainer;
pub use object::Object;
