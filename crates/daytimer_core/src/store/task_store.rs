//! Ordered task list with per-day filtering.
//!
//! # Responsibility
//! - Append validated tasks.
//! - Filter tasks by calendar day.
//! - Project the distinct task days into calendar markers.
//!
//! # Invariants
//! - Every stored task has a non-empty date and text.
//! - `by_date` keeps insertion order.
//! - `marked_dates` contains exactly the distinct stored dates.

use crate::model::marker::{DateMarker, MarkedDates, DEFAULT_DOT_COLOR};
use crate::model::task::{Task, TaskValidationError};
use log::{debug, info};

/// Append-only task list.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task, silently ignoring invalid input.
    ///
    /// Returns whether the task was appended. Identical calls append
    /// identical tasks.
    pub fn add(&mut self, text: impl Into<String>, date: impl Into<String>) -> bool {
        match self.try_add(text, date) {
            Ok(()) => true,
            Err(err) => {
                debug!("event=task_rejected module=store status=ignored reason=\"{err}\"");
                false
            }
        }
    }

    /// Appends a task or reports why the input was rejected.
    ///
    /// The store is left unchanged on error.
    pub fn try_add(
        &mut self,
        text: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<(), TaskValidationError> {
        let task = Task::new(text, date)?;
        info!(
            "event=task_added module=store status=ok date={} position={}",
            task.date(),
            self.tasks.len()
        );
        self.tasks.push(task);
        Ok(())
    }

    /// Returns every task whose date equals `date`, in insertion order.
    pub fn by_date(&self, date: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.date() == date).collect()
    }

    /// Marks every distinct task day with the default dot color.
    pub fn marked_dates(&self) -> MarkedDates {
        self.marked_dates_with_color(DEFAULT_DOT_COLOR)
    }

    /// Marks every distinct task day with `dot_color`.
    pub fn marked_dates_with_color(&self, dot_color: &str) -> MarkedDates {
        let mut marked = MarkedDates::new();
        for task in &self.tasks {
            if !marked.contains_key(task.date()) {
                marked.insert(task.date().to_string(), DateMarker::has_tasks(dot_color));
            }
        }
        marked
    }

    /// All tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;
    use crate::model::task::TaskValidationError;

    #[test]
    fn try_add_reports_rejection_without_mutation() {
        let mut store = TaskStore::new();
        assert_eq!(
            store.try_add("", "2024-06-01"),
            Err(TaskValidationError::EmptyText)
        );
        assert_eq!(store.try_add("Gym", ""), Err(TaskValidationError::EmptyDate));
        assert!(store.is_empty());
    }

    #[test]
    fn marked_dates_uses_requested_color() {
        let mut store = TaskStore::new();
        store.add("Gym", "2024-06-02");

        let marked = store.marked_dates_with_color("green");
        assert_eq!(marked["2024-06-02"].dot_color.as_deref(), Some("green"));
        assert!(marked["2024-06-02"].marked);
    }
}
