//! Contact Book - an in-memory address book with validated fields.
//!
//! Contacts have a name, any number of 10-digit phone numbers and an
//! optional birthday. Every field is validated when it is created or
//! changed, so a book can never hold invalid data.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: `ContactRecord` and its phone management
//! - **book**: `ContactBook`, keyed by name, with batched iteration
//! - **clock**: Injectable source of the current date
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration for the demo binary

pub mod book;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use book::{Batches, ContactBook, DeleteOutcome};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{BirthdayDate, Field, FieldRule, PersonName, PhoneNumber, ValidationError};
pub use error::{ConfigError, ContactBookError, ContactBookResult};
pub use models::{AddPhoneOutcome, ContactRecord, RemovePhoneOutcome};
