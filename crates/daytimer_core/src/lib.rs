//! Core logic for the daytimer screen: a calendar task list and a stopwatch.
//! Hosts (FFI, CLI) hold no business rules of their own.

pub mod calendar;
pub mod config;
pub mod logging;
pub mod model;
pub mod shell;
pub mod store;
pub mod timer;

pub use calendar::view::{CalendarProps, CalendarSnapshot, CalendarTheme, CalendarView, DayCell};
pub use calendar::{CalendarError, DaySelection};
pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::marker::{DateMarker, MarkedDates};
pub use model::task::{Task, TaskValidationError};
pub use shell::app_shell::{AppShell, ScreenSnapshot, ShellEvent, TaskRow, TimerSnapshot};
pub use shell::session::{SessionError, ShellSession};
pub use store::task_store::TaskStore;
pub use timer::engine::{TickTicket, TimerEngine, TimerState};
pub use timer::ticker::spawn_ticker;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
