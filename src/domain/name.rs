//! Name value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Exactly two ASCII-letter tokens of at least three letters, one space apart.
static FULL_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{3,} [A-Za-z]{3,}$").expect("full name pattern is valid")
});

/// A contact's full name in normalized "First Last" form.
///
/// Names are validated and normalized at construction time, so two names
/// that differ only in whitespace or letter case compare equal.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("  john   JOHNSON ").unwrap();
/// assert_eq!(name.as_str(), "John Johnson");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating and normalizing the input.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty after trimming
    /// - Internal whitespace runs are collapsed to a single space
    /// - Must be exactly two tokens of at least 3 ASCII letters each
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for blank input and
    /// `ValidationError::InvalidNameFormat` for anything else that is not
    /// a "First Last" name.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let collapsed = name.as_ref().split_whitespace().collect::<Vec<_>>().join(" ");

        if collapsed.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if !FULL_NAME.is_match(&collapsed) {
            return Err(ValidationError::InvalidNameFormat(collapsed));
        }

        let normalized = collapsed
            .split(' ')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Self(normalized))
    }

    /// Get the normalized name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_normalization() {
        assert_eq!(Name::new("john johnson").unwrap().as_str(), "John Johnson");
        assert_eq!(
            Name::new("  john   johnson  ").unwrap().as_str(),
            "John Johnson"
        );
        assert_eq!(
            Name::new("ALBERT EINSTEIN").unwrap().as_str(),
            "Albert Einstein"
        );
        assert_eq!(Name::new("mArY\tsHeLlEy").unwrap().as_str(), "Mary Shelley");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(Name::new(""), Err(ValidationError::EmptyName));
        assert_eq!(Name::new("   "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_validates_format() {
        for raw in [
            "Jo",
            "John",
            "John  ",
            "Jo n",
            "J  J",
            "John 1",
            "John_J",
            "John-Johnson",
            "John Ronald Tolkien",
            "Zoë Saldana",
        ] {
            assert!(
                matches!(Name::new(raw), Err(ValidationError::InvalidNameFormat(_))),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_name_format_error_carries_collapsed_input() {
        let err = Name::new("  no   such   person ").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidNameFormat("no such person".to_string())
        );
    }

    #[test]
    fn test_name_equality_after_normalization() {
        assert_eq!(
            Name::new("John Johnson").unwrap(),
            Name::new("john  johnson").unwrap()
        );
        assert_ne!(
            Name::new("John Johnson").unwrap(),
            Name::new("Jane Johnson").unwrap()
        );
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("jane johnson").unwrap();
        assert_eq!(format!("{}", name), "Jane Johnson");
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("jane johnson").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Jane Johnson\"");
    }

    #[test]
    fn test_name_deserialization_normalizes() {
        let name: Name = serde_json::from_str("\" JANE  johnson \"").unwrap();
        assert_eq!(name.as_str(), "Jane Johnson");
    }

    #[test]
    fn test_name_deserialization_invalid_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"Jane\"");
        assert!(result.is_err());
    }
}
