//! The contact book: records keyed by name, in insertion order.

use crate::error::{ContactBookError, ContactBookResult};
use crate::models::ContactRecord;
use indexmap::IndexMap;
use std::fmt;
use std::iter::FusedIterator;
use tracing::{debug, warn};

/// Result of [`ContactBook::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was removed and is handed back.
    Deleted(ContactRecord),
    /// No record with that name.
    NotFound(String),
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted(_))
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deleted(record) => write!(f, "Record {} deleted successfully", record.name()),
            Self::NotFound(name) => write!(f, "Record {} not found", name),
        }
    }
}

/// An insertion-ordered collection of contacts, keyed by name.
///
/// Keys always equal the stored record's name: records enter only through
/// [`add_record`](Self::add_record) or [`insert`](Self::insert), and a
/// record's name cannot change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    records: IndexMap<String, ContactRecord>,
}

impl ContactBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    ///
    /// Returns the replaced record. A replaced record keeps its original
    /// position in iteration order.
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        let key = record.name().as_str().to_string();
        debug!(contact = %key, "Record added");
        self.records.insert(key, record)
    }

    /// Insert `record` only if its name is not already in the book.
    ///
    /// # Errors
    ///
    /// Returns `ContactBookError::DuplicateRecord` if the name is taken; the
    /// existing record is left untouched.
    pub fn insert(&mut self, record: ContactRecord) -> ContactBookResult<()> {
        let key = record.name().as_str();
        if self.records.contains_key(key) {
            warn!(contact = %key, "Duplicate record rejected");
            return Err(ContactBookError::DuplicateRecord(key.to_string()));
        }
        self.add_record(record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Mutable access for phone and birthday edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record named `name`, preserving the order of the rest.
    pub fn delete(&mut self, name: &str) -> DeleteOutcome {
        match self.records.shift_remove(name) {
            Some(record) => {
                debug!(contact = %name, "Record deleted");
                DeleteOutcome::Deleted(record)
            }
            None => DeleteOutcome::NotFound(name.to_string()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    /// Page through the records in batches of `batch_size`.
    ///
    /// The returned iterator is lazy and can be cloned to restart from the
    /// first batch. Every record appears in exactly one batch; only the last
    /// batch may be shorter than `batch_size`.
    ///
    /// # Errors
    ///
    /// Returns `ContactBookError::InvalidBatchSize` if `batch_size` is 0.
    pub fn iter_batches(&self, batch_size: usize) -> ContactBookResult<Batches<'_>> {
        if batch_size == 0 {
            return Err(ContactBookError::InvalidBatchSize(batch_size));
        }
        Ok(Batches {
            records: &self.records,
            batch_size,
            next: 0,
        })
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a ContactRecord;
    type IntoIter = indexmap::map::Values<'a, String, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

/// Batches of records produced by [`ContactBook::iter_batches`].
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    records: &'a IndexMap<String, ContactRecord>,
    batch_size: usize,
    next: usize,
}

impl<'a> Iterator for Batches<'a> {
    type Item = Vec<&'a ContactRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.records.len();
        if self.next >= total {
            return None;
        }
        let end = total.min(self.next + self.batch_size);
        let batch = (self.next..end)
            .filter_map(|i| self.records.get_index(i).map(|(_, record)| record))
            .collect();
        self.next = end;
        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len().saturating_sub(self.next);
        let batches = remaining.div_ceil(self.batch_size);
        (batches, Some(batches))
    }
}

impl ExactSizeIterator for Batches<'_> {}

impl FusedIterator for Batches<'_> {}
