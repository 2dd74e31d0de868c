//! Single-loop screen session.
//!
//! # Responsibility
//! - Run one [`AppShell`] on a tokio task and feed it events in order.
//! - Schedule stopwatch ticks back into the same queue.
//!
//! # Invariants
//! - Events and ticks are applied one at a time, never reentrantly.
//! - A reply requested after an event observes that event's effect.
//! - Ending the session releases the active tick ticket.

use super::app_shell::{AppShell, ScreenSnapshot, ShellEvent, TaskRow};
use crate::timer::engine::TickTicket;
use crate::timer::ticker::spawn_ticker;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, WeakUnboundedSender};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The loop has exited and accepts no more messages.
    Closed,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "screen session is closed"),
        }
    }
}

impl Error for SessionError {}

enum LoopMessage {
    Event(ShellEvent),
    Tick(TickTicket),
    Snapshot(oneshot::Sender<ScreenSnapshot>),
    Tracker(oneshot::Sender<Vec<TaskRow>>),
    Shutdown,
}

/// Handle to a running screen loop.
pub struct ShellSession {
    tx: UnboundedSender<LoopMessage>,
    task: JoinHandle<AppShell>,
}

impl ShellSession {
    /// Moves `shell` onto a new loop task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(shell: AppShell) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let period = shell.config().tick_interval;
        let task = tokio::spawn(run_loop(shell, rx, tx.downgrade(), period));
        Self { tx, task }
    }

    /// Queues one event.
    pub fn send(&self, event: ShellEvent) -> Result<(), SessionError> {
        self.post(LoopMessage::Event(event))
    }

    /// Snapshot taken after every previously sent event.
    pub async fn snapshot(&self) -> Result<ScreenSnapshot, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.post(LoopMessage::Snapshot(reply))?;
        rx.await.map_err(|_| SessionError::Closed)
    }

    /// Blocking variant of [`snapshot`](Self::snapshot) for non-async hosts.
    ///
    /// Must not be called from a runtime thread.
    pub fn blocking_snapshot(&self) -> Result<ScreenSnapshot, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.post(LoopMessage::Snapshot(reply))?;
        rx.blocking_recv().map_err(|_| SessionError::Closed)
    }

    /// Every stored task, in insertion order.
    pub async fn tracker(&self) -> Result<Vec<TaskRow>, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.post(LoopMessage::Tracker(reply))?;
        rx.await.map_err(|_| SessionError::Closed)
    }

    /// Blocking variant of [`tracker`](Self::tracker).
    pub fn blocking_tracker(&self) -> Result<Vec<TaskRow>, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.post(LoopMessage::Tracker(reply))?;
        rx.blocking_recv().map_err(|_| SessionError::Closed)
    }

    /// Processes queued events, tears the shell down and returns it.
    pub async fn shutdown(self) -> Result<AppShell, SessionError> {
        self.post(LoopMessage::Shutdown)?;
        self.task.await.map_err(|_| SessionError::Closed)
    }

    fn post(&self, message: LoopMessage) -> Result<(), SessionError> {
        self.tx.send(message).map_err(|_| SessionError::Closed)
    }
}

async fn run_loop(
    mut shell: AppShell,
    mut rx: UnboundedReceiver<LoopMessage>,
    ticks: WeakUnboundedSender<LoopMessage>,
    period: Duration,
) -> AppShell {
    info!("event=session_start module=session status=ok");
    while let Some(message) = rx.recv().await {
        match message {
            LoopMessage::Event(event) => {
                if let Some(ticket) = shell.dispatch(event) {
                    schedule_ticks(ticket, period, ticks.clone());
                }
            }
            LoopMessage::Tick(ticket) => {
                shell.on_tick(&ticket);
            }
            LoopMessage::Snapshot(reply) => {
                if reply.send(shell.snapshot()).is_err() {
                    warn!("event=snapshot_reply module=session status=dropped");
                }
            }
            LoopMessage::Tracker(reply) => {
                if reply.send(shell.tracker_rows()).is_err() {
                    warn!("event=tracker_reply module=session status=dropped");
                }
            }
            LoopMessage::Shutdown => break,
        }
    }

    shell.teardown();
    info!("event=session_stop module=session status=ok");
    shell
}

fn schedule_ticks(ticket: TickTicket, period: Duration, ticks: WeakUnboundedSender<LoopMessage>) {
    spawn_ticker(ticket, period, move |ticket| match ticks.upgrade() {
        Some(tx) => tx.send(LoopMessage::Tick(ticket)).is_ok(),
        None => false,
    });
}
