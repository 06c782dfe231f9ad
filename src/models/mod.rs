//! Data models for the contact book.
//!
//! A [`ContactRecord`] aggregates the validated fields from
//! [`crate::domain`] and manages its phone list.

pub mod record;

pub use record::{AddPhoneOutcome, ContactRecord, RemovePhoneOutcome};
