//! Phone value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits a normalized phone number carries.
pub const PHONE_DIGITS: usize = 10;

/// A phone number normalized to exactly ten ASCII digits.
///
/// Formatting characters in the input (spaces, dashes, parentheses, dots,
/// a leading '+') are stripped before the digit count is checked, so
/// `"(123) 456-7890"` and `"123.456.7890"` are the same phone.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("(123) 456-7890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone from raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneDigitCount` unless exactly
    /// ten digits remain once non-digit characters are removed.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() != PHONE_DIGITS {
            return Err(ValidationError::InvalidPhoneDigitCount {
                input: raw.to_string(),
                digits: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// Get the phone digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_normalization() {
        let cases = [
            ("1234567890", "1234567890"),
            (" 123 456 7890 ", "1234567890"),
            ("(123) 456-7890", "1234567890"),
            ("123.456.7890", "1234567890"),
            ("+1 (234) 567-890", "1234567890"),
        ];
        for (raw, expected) in cases {
            assert_eq!(Phone::new(raw).unwrap().as_str(), expected, "input {:?}", raw);
        }
    }

    #[test]
    fn test_phone_validates_digit_count() {
        for raw in ["", "abcdef", "123456789", "12345678901", "123-456-78 9O"] {
            assert!(
                matches!(
                    Phone::new(raw),
                    Err(ValidationError::InvalidPhoneDigitCount { .. })
                ),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_phone_error_reports_digit_count() {
        let err = Phone::new("555-1234").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidPhoneDigitCount {
                input: "555-1234".to_string(),
                digits: 7,
            }
        );
    }

    #[test]
    fn test_phone_equality_after_normalization() {
        assert_eq!(
            Phone::new("123 456 7890").unwrap(),
            Phone::new("(123)456-7890").unwrap()
        );
    }

    #[test]
    fn test_phone_display() {
        let phone = Phone::new("555.555.5555").unwrap();
        assert_eq!(format!("{}", phone), "5555555555");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("(987) 654-3210").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"9876543210\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"12345\"");
        assert!(result.is_err());
    }
}
