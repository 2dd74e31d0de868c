//! Elapsed-time stopwatch.
//!
//! # Responsibility
//! - Model the Stopped/Running state machine and its elapsed count.
//! - Drive periodic ticks from a cancellable background task.
//!
//! # Invariants
//! - At most one tick ticket is active per engine.
//! - Every transition out of Running cancels the active ticket before
//!   returning.

pub mod engine;
pub mod ticker;
