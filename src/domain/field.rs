//! Field: the common shape of every normalized contact value.

use super::errors::ValidationError;
use super::name::Name;
use super::phone::Phone;
use std::fmt;

/// A normalized scalar value stored on a contact record.
///
/// Equality first compares the variant, then the normalized value, so a
/// `Name` and a `Phone` are never equal even if their text happened to match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Name(Name),
    Phone(Phone),
}

impl Field {
    /// Parse raw input as a name field.
    pub fn name(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        Name::new(raw).map(Self::Name)
    }

    /// Parse raw input as a phone field.
    pub fn phone(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        Phone::new(raw).map(Self::Phone)
    }

    /// The normalized value as text.
    pub fn value(&self) -> &str {
        match self {
            Self::Name(name) => name.as_str(),
            Self::Phone(phone) => phone.as_str(),
        }
    }
}

impl From<Name> for Field {
    fn from(name: Name) -> Self {
        Self::Name(name)
    }
}

impl From<Phone> for Field {
    fn from(phone: Phone) -> Self {
        Self::Phone(phone)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_same_variant_equality() {
        assert_eq!(
            Field::name("John Johnson").unwrap(),
            Field::name("john  johnson").unwrap()
        );
        assert_eq!(
            Field::phone("123 456 7890").unwrap(),
            Field::phone("(123)456-7890").unwrap()
        );
    }

    #[test]
    fn test_field_cross_variant_is_not_equal() {
        let name = Field::from(Name::new("John Johnson").unwrap());
        let phone = Field::from(Phone::new("1234567890").unwrap());
        assert!(!(name == phone));
        assert!(!(phone == name));
    }

    #[test]
    fn test_field_value_and_display() {
        let field = Field::phone("(555) 555-5555").unwrap();
        assert_eq!(field.value(), "5555555555");
        assert_eq!(field.to_string(), "5555555555");

        let field = Field::name("jane johnson").unwrap();
        assert_eq!(field.value(), "Jane Johnson");
    }

    #[test]
    fn test_field_propagates_validation_errors() {
        assert_eq!(Field::name(" "), Err(ValidationError::EmptyName));
        assert!(Field::phone("123").is_err());
    }
}
