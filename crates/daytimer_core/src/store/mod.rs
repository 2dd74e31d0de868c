//! In-memory task storage.
//!
//! # Responsibility
//! - Own the ordered task list for one screen.
//! - Answer per-day queries and derive calendar markers.
//!
//! # Invariants
//! - Insertion order is preserved and nothing is deduplicated.
//! - Derived markers are recomputed on every read.

pub mod task_store;
