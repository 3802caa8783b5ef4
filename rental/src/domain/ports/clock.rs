//! Calendar port
//!
//! Availability queries ask the clock for "today" instead of reading the
//! system time, so the leased/unleased split can be evaluated for any date.

use chrono::NaiveDate;

/// Source of the current calendar date
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
