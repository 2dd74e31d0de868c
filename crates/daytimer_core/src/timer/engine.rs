//! Stopwatch state machine.
//!
//! # Responsibility
//! - Own elapsed seconds and the running flag.
//! - Hand out one cancellable tick ticket per run.
//!
//! # Invariants
//! - `elapsed_seconds` only decreases through `reset`.
//! - A tick is counted only when it carries the active, uncancelled ticket.
//! - Dropping the engine cancels the active ticket.

use log::{debug, info};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Observable stopwatch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimerState {
    pub elapsed_seconds: u64,
    pub running: bool,
}

impl TimerState {
    /// Display text, e.g. `42s`.
    pub fn display(&self) -> String {
        format!("{}s", self.elapsed_seconds)
    }
}

/// Handle for the one scheduled periodic tick of a run.
///
/// Cloned into the ticker task; cancelling any clone ends the schedule.
#[derive(Debug, Clone)]
pub struct TickTicket {
    generation: u64,
    cancel: CancellationToken,
}

impl TickTicket {
    /// Run number this ticket belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Resolves once the ticket has been cancelled.
    pub async fn cancelled(&self) {
        self.cancel.cancelled().await;
    }

    fn cancel(&self) {
        self.cancel.cancel();
    }
}

/// Stopwatch with explicit tick scheduling.
#[derive(Debug, Default)]
pub struct TimerEngine {
    elapsed_seconds: u64,
    active: Option<TickTicket>,
    last_generation: u64,
}

impl TimerEngine {
    /// Creates a stopped engine at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TimerState {
        TimerState {
            elapsed_seconds: self.elapsed_seconds,
            running: self.is_running(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Enters Running and returns the ticket the scheduler must tick with.
    ///
    /// Returns `None` when already running; the current schedule stays the
    /// only one.
    pub fn start(&mut self) -> Option<TickTicket> {
        if self.active.is_some() {
            debug!("event=timer_start module=timer status=ignored reason=already_running");
            return None;
        }

        self.last_generation += 1;
        let ticket = TickTicket {
            generation: self.last_generation,
            cancel: CancellationToken::new(),
        };
        self.active = Some(ticket.clone());
        info!(
            "event=timer_start module=timer status=ok generation={} elapsed={}",
            ticket.generation, self.elapsed_seconds
        );
        Some(ticket)
    }

    /// Leaves Running, keeping the elapsed count.
    ///
    /// Returns whether the engine was running.
    pub fn stop(&mut self) -> bool {
        let stopped = self.release();
        if stopped {
            info!(
                "event=timer_stop module=timer status=ok elapsed={}",
                self.elapsed_seconds
            );
        }
        stopped
    }

    /// Start when stopped, stop when running.
    pub fn toggle(&mut self) -> Option<TickTicket> {
        if self.stop() {
            None
        } else {
            self.start()
        }
    }

    /// Returns to Stopped at zero from any state.
    pub fn reset(&mut self) {
        self.release();
        self.elapsed_seconds = 0;
        info!("event=timer_reset module=timer status=ok");
    }

    /// Counts one elapsed second for `ticket`.
    ///
    /// Stale tickets (from a stopped or earlier run) are ignored and return
    /// `false`.
    pub fn tick(&mut self, ticket: &TickTicket) -> bool {
        match &self.active {
            Some(active) if active.generation == ticket.generation && !ticket.is_cancelled() => {
                self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
                true
            }
            _ => {
                debug!(
                    "event=timer_tick module=timer status=ignored generation={}",
                    ticket.generation
                );
                false
            }
        }
    }

    fn release(&mut self) -> bool {
        match self.active.take() {
            Some(ticket) => {
                ticket.cancel();
                true
            }
            None => false,
        }
    }
}

impl Drop for TimerEngine {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::TimerEngine;

    #[test]
    fn generations_increase_per_run() {
        let mut engine = TimerEngine::new();
        let first = engine.start().unwrap();
        engine.stop();
        let second = engine.start().unwrap();
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn drop_cancels_active_ticket() {
        let mut engine = TimerEngine::new();
        let ticket = engine.start().unwrap();
        drop(engine);
        assert!(ticket.is_cancelled());
    }

    #[test]
    fn display_appends_seconds_suffix() {
        let mut engine = TimerEngine::new();
        let ticket = engine.start().unwrap();
        engine.tick(&ticket);
        engine.tick(&ticket);
        assert_eq!(engine.state().display(), "2s");
    }
}
