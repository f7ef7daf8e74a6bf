//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact names and phone
//! numbers. These value objects validate and normalize their input at
//! construction time, so invalid data can never be stored in a record.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::{Phone, PHONE_DIGITS};
