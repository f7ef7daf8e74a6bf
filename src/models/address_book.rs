//! AddressBook model: records keyed by normalized contact name.

use super::record::Record;
use crate::domain::Name;
use crate::error::{BookError, BookResult};
use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// An in-memory collection of contact records.
///
/// Records are keyed by their normalized name, so there is at most one record
/// per person. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, keyed by its normalized name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateName` if a record with the same
    /// normalized name is already present.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        let key = record.name().as_str().to_string();
        if self.records.contains_key(&key) {
            return Err(BookError::DuplicateName(key));
        }

        tracing::debug!(name = %key, phones = record.phones().len(), "Record added");
        self.order.push(key.clone());
        self.records.insert(key, record);
        Ok(())
    }

    /// Find a record by name.
    ///
    /// The query is normalized like any other name, so `"john   johnson"`
    /// finds `"John Johnson"`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NameNotFound` if no record matches, including when
    /// `name` is not a valid full name at all.
    pub fn find(&self, name: impl AsRef<str>) -> BookResult<&Record> {
        let key = Self::key_for(name.as_ref())?;
        tracing::trace!(name = %key, "Record lookup");
        self.records.get(&key).ok_or(BookError::NameNotFound(key))
    }

    /// Find a record by name for modification.
    ///
    /// # Errors
    ///
    /// Same as [`AddressBook::find`].
    pub fn find_mut(&mut self, name: impl AsRef<str>) -> BookResult<&mut Record> {
        let key = Self::key_for(name.as_ref())?;
        tracing::trace!(name = %key, "Record lookup");
        self.records
            .get_mut(&key)
            .ok_or(BookError::NameNotFound(key))
    }

    /// Delete a record by name and hand it back to the caller.
    ///
    /// # Errors
    ///
    /// Same as [`AddressBook::find`].
    pub fn delete(&mut self, name: impl AsRef<str>) -> BookResult<Record> {
        let key = Self::key_for(name.as_ref())?;
        let record = self
            .records
            .remove(&key)
            .ok_or_else(|| BookError::NameNotFound(key.clone()))?;

        self.order.retain(|existing| *existing != key);
        tracing::debug!(name = %key, "Record deleted");
        Ok(record)
    }

    /// Whether a record with this name exists.
    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.find(name).is_ok()
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // An unparseable name can never be a key, so it is reported as absent.
    fn key_for(name: &str) -> BookResult<String> {
        Name::new(name)
            .map(Name::into_inner)
            .map_err(|_| BookError::NameNotFound(name.trim().to_string()))
    }
}

// Serde support - serialize as an array of records in insertion order
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for record in self.records() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

// Serde support - rebuild through add_record so duplicate names are rejected
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record).map_err(D::Error::custom)?;
        }
        Ok(book)
    }
}
