//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Value object validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when changing or querying a record's phones.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Raw input did not validate as a phone number
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is already stored on the record
    #[error("Such number exists for contact: {0}")]
    DuplicatePhone(String),

    /// The phone number is not stored on the record
    #[error("Such number doesn't exist for contact: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur when changing or querying the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A record with the same normalized name already exists
    #[error("Such name already exists in address book: {0}")]
    DuplicateName(String),

    /// No record matches the name, or the name could not be parsed
    #[error("No such name in address book: {0}")]
    NameNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
