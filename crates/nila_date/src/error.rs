//! Error type for calendar-date parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing a `YYYY-MM-DD` date string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateError {
    /// Input is not of the form `YYYY-MM-DD`.
    InvalidFormat(String),
    /// Month component outside 1-12.
    InvalidMonth(u32),
    /// Day component outside the month's length.
    InvalidDay { year: i32, month: u32, day: u32 },
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "invalid date format: {s:?} (expected YYYY-MM-DD)"),
            Self::InvalidMonth(m) => write!(f, "invalid month: {m} (must be 1-12)"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid day {day} for month {year:04}-{month:02}")
            }
        }
    }
}

impl Error for DateError {}
