//! Record model: one contact with a name and a list of phones.

use crate::domain::{Field, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Placeholder rendered in place of the phone list when it is empty.
const NO_PHONES: &str = "—";

/// A contact in the address book.
///
/// The name is fixed at construction. Phones are kept in insertion order and
/// are unique by their normalized digits; they can only be changed through
/// the methods on this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if `name` is not a valid full name.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    /// The contact's normalized name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Every field of the record, name first.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        std::iter::once(Field::from(self.name.clone()))
            .chain(self.phones.iter().cloned().map(Field::from))
    }

    /// Append a phone to the end of the list.
    ///
    /// # Errors
    ///
    /// - `RecordError::Validation` if `phone` is not a 10-digit number
    /// - `RecordError::DuplicatePhone` if the number is already stored
    pub fn add_phone(&mut self, phone: impl AsRef<str>) -> RecordResult<()> {
        let phone = Phone::new(phone)?;
        if self.position(&phone).is_some() {
            return Err(RecordError::DuplicatePhone(phone.into_inner()));
        }

        tracing::debug!(name = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a stored phone.
    ///
    /// # Errors
    ///
    /// - `RecordError::Validation` if `phone` is not a 10-digit number
    /// - `RecordError::PhoneNotFound` if the number is not stored
    pub fn remove_phone(&mut self, phone: impl AsRef<str>) -> RecordResult<()> {
        let phone = Phone::new(phone)?;
        let index = self
            .position(&phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.as_str().to_string()))?;

        self.phones.remove(index);
        tracing::debug!(name = %self.name, phone = %phone, "Phone removed");
        Ok(())
    }

    /// Replace `old` with `new`. The new phone goes to the end of the list.
    ///
    /// Both inputs are validated before anything changes, and a failed edit
    /// leaves the phone list untouched. Editing a number to itself is
    /// rejected as a duplicate.
    ///
    /// # Errors
    ///
    /// - `RecordError::Validation` if either input is not a 10-digit number
    /// - `RecordError::PhoneNotFound` if `old` is not stored
    /// - `RecordError::DuplicatePhone` if `new` is already stored
    pub fn edit_phone(&mut self, old: impl AsRef<str>, new: impl AsRef<str>) -> RecordResult<()> {
        let old = Phone::new(old)?;
        let new = Phone::new(new)?;

        let index = self
            .position(&old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.as_str().to_string()))?;
        if self.position(&new).is_some() {
            return Err(RecordError::DuplicatePhone(new.into_inner()));
        }

        self.phones.remove(index);
        tracing::debug!(name = %self.name, old = %old, new = %new, "Phone edited");
        self.phones.push(new);
        Ok(())
    }

    /// Look up a stored phone, returning the stored instance itself.
    ///
    /// # Errors
    ///
    /// - `RecordError::Validation` if `phone` is not a 10-digit number
    /// - `RecordError::PhoneNotFound` if the number is not stored
    pub fn find_phone(&self, phone: impl AsRef<str>) -> RecordResult<&Phone> {
        let phone = Phone::new(phone)?;
        tracing::trace!(name = %self.name, phone = %phone, "Phone lookup");

        self.phones
            .iter()
            .find(|stored| **stored == phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.into_inner()))
    }

    fn position(&self, phone: &Phone) -> Option<usize> {
        self.phones.iter().position(|stored| stored == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            NO_PHONES.to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join("; ")
        };
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}

/// Wire shape of a record before its invariants are checked.
#[derive(Deserialize)]
struct RawRecord {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
}

// Serde support - rebuild through the public operations so duplicates are rejected
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawRecord::deserialize(deserializer)?;
        let mut record = Record::new(&raw.name).map_err(D::Error::custom)?;
        for phone in &raw.phones {
            record.add_phone(phone).map_err(D::Error::custom)?;
        }
        Ok(record)
    }
}
