//! System calendar

use chrono::{Local, NaiveDate};

use crate::domain::ports::Clock;

/// Today's date in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
