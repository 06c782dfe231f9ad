//! Source of "today" for date arithmetic.
//!
//! Birthday calculations take the current date as an argument; a [`Clock`]
//! is only consulted at the outermost call site.

use chrono::{Local, NaiveDate};

/// Provides the current calendar date.
pub trait Clock {
    /// The current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date, for tests and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
