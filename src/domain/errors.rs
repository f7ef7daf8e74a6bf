//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or whitespace only.
    EmptyName,

    /// The provided name is not in "First Last" format.
    InvalidNameFormat(String),

    /// The provided phone number does not contain exactly 10 digits.
    InvalidPhoneDigitCount { input: String, digits: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name is empty"),
            Self::InvalidNameFormat(name) => write!(
                f,
                "Name must be in full format, for example 'Albert Einstein': {}",
                name
            ),
            Self::InvalidPhoneDigitCount { input, digits } => write!(
                f,
                "Phone must have 10 digits, got {} in: {}",
                digits, input
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
