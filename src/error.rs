//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by contact book and record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactBookError {
    /// A name, phone or birthday failed its rule
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An edit targeted a phone number the record does not have
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    /// Strict insert of a name that is already in the book
    #[error("Record {0} already exists")]
    DuplicateRecord(String),

    /// Pagination was asked for batches of zero records
    #[error("Invalid batch size {0}: must be a positive integer")]
    InvalidBatchSize(usize),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactBookError
pub type ContactBookResult<T> = Result<T, ContactBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
