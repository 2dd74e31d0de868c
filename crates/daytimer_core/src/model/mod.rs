//! Domain model for the calendar task list.
//!
//! # Responsibility
//! - Define the task record and the calendar marker descriptors derived
//!   from it.
//!
//! # Invariants
//! - A task is immutable once created.
//! - Markers are projections of the task list, never stored on their own.

pub mod marker;
pub mod task;
