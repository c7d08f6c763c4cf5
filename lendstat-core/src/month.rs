//! Calendar-month keys for month-scoped aggregation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, displayed as `<month>.<year>` in report rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub month: u32,
    pub year: i32,
}

impl MonthKey {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    /// The month before this one, rolling January back to December.
    pub fn pred(self) -> Self {
        if self.month > 1 {
            Self {
                month: self.month - 1,
                year: self.year,
            }
        } else {
            Self {
                month: 12,
                year: self.year - 1,
            }
        }
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        self.month == date.month() && self.year == date.year()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.month, self.year)
    }
}
