//! Address Book - an in-memory contact address book.
//!
//! This library stores contact records (a validated full name plus a list of
//! validated phone numbers) and provides create/find/delete operations on both
//! the book and each record's phones.
//!
//! # Architecture
//!
//! - **domain**: Value objects (`Name`, `Phone`, `Field`) and validation errors
//! - **models**: `Record` and `AddressBook`
//! - **error**: Error types for record, book, and configuration operations
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//! let mut john = Record::new("john johnson").unwrap();
//! john.add_phone("(123) 456-7890").unwrap();
//! book.add_record(john).unwrap();
//!
//! let found = book.find("John Johnson").unwrap();
//! assert_eq!(found.to_string(), "Contact name: John Johnson, phones: 1234567890");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::{Config, OutputFormat};
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{BookError, ConfigError, RecordError};
pub use models::{AddressBook, Record};
