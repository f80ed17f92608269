//! Filename entities.
//!
//! Provides:
//! - The seven fixed entity slots and their filename keys
//! - Component values (text labels or integer indices)
//! - The ordered entity set consumed by the filename builder

pub mod kind;
pub mod set;
pub mod value;

pub use kind::Entity;
pub use set::Entities;
pub use value::ComponentValue;

pub(crate) use value::check_types;
