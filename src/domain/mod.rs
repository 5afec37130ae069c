//! Domain value objects.
//!
//! Type-safe wrappers for the scalar fields of a contact: its name and its
//! phone numbers. Both are trimmed on construction and never change afterwards.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::{Phone, PHONE_LENGTH};
