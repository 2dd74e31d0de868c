//! Task domain model.
//!
//! # Responsibility
//! - Define the `(text, date)` association stored by the task list.
//! - Validate input at construction time.
//!
//! # Invariants
//! - `text` and `date` are non-empty.
//! - Tasks carry no identity beyond their position in the store.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text is the empty string.
    EmptyText,
    /// No calendar day was given for the task.
    EmptyDate,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
            Self::EmptyDate => write!(f, "task date cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// One task bound to a calendar day.
///
/// `date` is a calendar-day identifier, normally ISO `YYYY-MM-DD` as emitted
/// by the calendar. Dates are compared by plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    text: String,
    date: String,
}

impl Task {
    /// Creates a task after checking both fields are non-empty.
    ///
    /// Whitespace-only text is accepted; only the empty string is rejected.
    pub fn new(
        text: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        let text = text.into();
        let date = date.into();
        if text.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        if date.is_empty() {
            return Err(TaskValidationError::EmptyDate);
        }
        Ok(Self { text, date })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Row label used by task lists, e.g. `Buy milk - 2024-06-01`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.text, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskValidationError};

    #[test]
    fn new_rejects_empty_fields() {
        assert_eq!(
            Task::new("", "2024-06-01").unwrap_err(),
            TaskValidationError::EmptyText
        );
        assert_eq!(
            Task::new("Gym", "").unwrap_err(),
            TaskValidationError::EmptyDate
        );
    }

    #[test]
    fn whitespace_text_is_accepted() {
        let task = Task::new("  ", "2024-06-01").expect("whitespace is not empty");
        assert_eq!(task.text(), "  ");
    }

    #[test]
    fn label_joins_text_and_date() {
        let task = Task::new("Buy milk", "2024-06-01").unwrap();
        assert_eq!(task.label(), "Buy milk - 2024-06-01");
    }
}
