//! Calendar widget boundary.
//!
//! # Responsibility
//! - Lay out month grids and decorate days with markers.
//! - Turn day presses into selection events carrying an ISO date string.
//!
//! # Invariants
//! - Emitted date strings are always ISO `YYYY-MM-DD`.
//! - The selected-day override replaces any task marker for that day.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod grid;
pub mod view;

/// Date format for every calendar-day identifier.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar input errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Input is not a valid `YYYY-MM-DD` date.
    InvalidDate(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for CalendarError {}

/// Day-selection event emitted by the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySelection {
    date: NaiveDate,
    date_string: String,
}

impl DaySelection {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            date_string: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Parses a typed date, as hosts without a touch calendar receive them.
    pub fn parse(value: &str) -> Result<Self, CalendarError> {
        let trimmed = value.trim();
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self::from_date)
            .map_err(|_| CalendarError::InvalidDate(trimmed.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn date_string(&self) -> &str {
        &self.date_string
    }
}
