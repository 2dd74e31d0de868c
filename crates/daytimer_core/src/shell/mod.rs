//! Screen composition and its event loop.
//!
//! # Responsibility
//! - Own all screen state explicitly: tasks, selection, input, calendar and
//!   stopwatch.
//! - Serialize user events and timer ticks through one loop.
//!
//! # Invariants
//! - Markers and the visible task list are derived on every read.
//! - No screen state lives in module-level statics.

pub mod app_shell;
pub mod session;
