//! Periodic tick scheduling on tokio.
//!
//! [`spawn_ticker`] delivers a ticket every `period` until the ticket is
//! cancelled or the consumer stops accepting ticks. The first tick fires one
//! full period after spawning. Late ticks are delayed, not bursted, so no
//! drift compensation happens. A zero period falls back to
//! [`DEFAULT_TICK_INTERVAL`].

use super::engine::TickTicket;
use log::{debug, warn};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Default stopwatch resolution.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Spawns the periodic tick task for `ticket`.
///
/// `deliver` returns `false` when its consumer is gone, which ends the task.
/// Must be called from within a tokio runtime.
pub fn spawn_ticker<F>(ticket: TickTicket, period: Duration, mut deliver: F) -> JoinHandle<()>
where
    F: FnMut(TickTicket) -> bool + Send + 'static,
{
    let period = if period.is_zero() {
        warn!(
            "event=ticker_start module=timer status=fallback reason=zero_period period_ms={}",
            DEFAULT_TICK_INTERVAL.as_millis()
        );
        DEFAULT_TICK_INTERVAL
    } else {
        period
    };

    tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = ticket.cancelled() => break,
                _ = interval.tick() => {
                    if ticket.is_cancelled() || !deliver(ticket.clone()) {
                        break;
                    }
                }
            }
        }
        debug!(
            "event=ticker_exit module=timer status=ok generation={}",
            ticket.generation()
        );
    })
}
