//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the screen's user actions as synchronous calls.
//! - Return flat view envelopes the UI can draw without further logic.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every screen call returns the state observed after the action.
//!
//! # See also
//! - crates/daytimer_core/src/shell/session.rs

use daytimer_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AppConfig, AppShell, DaySelection, ScreenSnapshot, ShellEvent, ShellSession, TaskRow,
};
use once_cell::sync::OnceCell;
use tokio::runtime::Runtime;

static SCREEN: OnceCell<Screen> = OnceCell::new();

struct Screen {
    session: ShellSession,
    _runtime: Runtime,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One calendar day cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDayItem {
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub day: u32,
    pub in_visible_month: bool,
    pub is_today: bool,
    pub marked: bool,
    pub dot_color: Option<String>,
    pub selected: bool,
    pub selected_color: Option<String>,
}

/// One task line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub text: String,
    pub date: String,
    pub label: String,
}

/// Whole-screen envelope returned by every screen call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    /// Whether the action reached the screen.
    pub ok: bool,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
    pub title: String,
    pub month_label: String,
    pub weekday_labels: Vec<String>,
    /// Seven cells per week.
    pub weeks: Vec<Vec<CalendarDayItem>>,
    pub today_text_color: String,
    pub selected_date: Option<String>,
    /// Input form is visible only while a day is selected.
    pub input_visible: bool,
    pub input_value: String,
    pub input_placeholder: String,
    pub add_button_label: String,
    pub tasks_heading: Option<String>,
    pub tasks: Vec<TaskItem>,
    pub timer_display: String,
    pub timer_running: bool,
    pub elapsed_seconds: u64,
    pub start_stop_label: String,
    pub reset_label: String,
}

impl ScreenView {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            title: String::new(),
            month_label: String::new(),
            weekday_labels: Vec::new(),
            weeks: Vec::new(),
            today_text_color: String::new(),
            selected_date: None,
            input_visible: false,
            input_value: String::new(),
            input_placeholder: String::new(),
            add_button_label: String::new(),
            tasks_heading: None,
            tasks: Vec::new(),
            timer_display: String::new(),
            timer_running: false,
            elapsed_seconds: 0,
            start_stop_label: String::new(),
            reset_label: String::new(),
        }
    }

    fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl From<ScreenSnapshot> for ScreenView {
    fn from(snapshot: ScreenSnapshot) -> Self {
        let weeks = snapshot
            .calendar
            .weeks
            .into_iter()
            .map(|week| {
                week.into_iter()
                    .map(|cell| {
                        let marker = cell.marker.unwrap_or_default();
                        CalendarDayItem {
                            date: cell.date,
                            day: cell.day,
                            in_visible_month: cell.in_visible_month,
                            is_today: cell.is_today,
                            marked: marker.marked,
                            dot_color: marker.dot_color,
                            selected: marker.selected,
                            selected_color: marker.selected_color,
                        }
                    })
                    .collect()
            })
            .collect();
        let (input_visible, input_value, input_placeholder, add_button_label) =
            match snapshot.input {
                Some(input) => (
                    true,
                    input.value,
                    input.placeholder.to_string(),
                    input.button_label.to_string(),
                ),
                None => (false, String::new(), String::new(), String::new()),
            };
        let (tasks_heading, tasks) = match snapshot.day_tasks {
            Some(day) => (
                Some(day.heading),
                day.rows.into_iter().map(TaskItem::from).collect(),
            ),
            None => (None, Vec::new()),
        };

        Self {
            ok: true,
            message: String::new(),
            title: snapshot.title,
            month_label: snapshot.calendar.month_label,
            weekday_labels: snapshot
                .calendar
                .weekday_labels
                .iter()
                .map(|label| (*label).to_string())
                .collect(),
            weeks,
            today_text_color: snapshot.calendar.theme.today_text_color,
            selected_date: snapshot.selected_date,
            input_visible,
            input_value,
            input_placeholder,
            add_button_label,
            tasks_heading,
            tasks,
            timer_display: snapshot.timer.display,
            timer_running: snapshot.timer.state.running,
            elapsed_seconds: snapshot.timer.state.elapsed_seconds,
            start_stop_label: snapshot.timer.start_stop_label.to_string(),
            reset_label: snapshot.timer.reset_label.to_string(),
        }
    }
}

impl From<TaskRow> for TaskItem {
    fn from(row: TaskRow) -> Self {
        Self {
            text: row.text,
            date: row.date,
            label: row.label,
        }
    }
}

/// Current screen state.
///
/// # FFI contract
/// - Sync call; starts the screen session on first use.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn app_snapshot() -> ScreenView {
    with_screen(|_| Ok(()))
}

/// Calendar day press with an ISO `YYYY-MM-DD` date.
///
/// Invalid dates leave the screen unchanged and set `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn app_select_date(date: String) -> ScreenView {
    match DaySelection::parse(date.as_str()) {
        Ok(selection) => with_screen(|session| send(session, ShellEvent::SelectDay(selection))),
        Err(err) => select_failure_message(with_screen(|_| Ok(())), err),
    }
}

/// Task input text changed.
#[flutter_rust_bridge::frb(sync)]
pub fn app_set_input(text: String) -> ScreenView {
    with_screen(|session| send(session, ShellEvent::InputChanged(text)))
}

/// Add Task button.
///
/// Empty input or no selected day is silently ignored, matching the screen.
#[flutter_rust_bridge::frb(sync)]
pub fn app_submit_task() -> ScreenView {
    with_screen(|session| send(session, ShellEvent::SubmitTask))
}

#[flutter_rust_bridge::frb(sync)]
pub fn app_show_next_month() -> ScreenView {
    with_screen(|session| send(session, ShellEvent::ShowNextMonth))
}

#[flutter_rust_bridge::frb(sync)]
pub fn app_show_previous_month() -> ScreenView {
    with_screen(|session| send(session, ShellEvent::ShowPreviousMonth))
}

/// Task Tracker envelope: every task with its date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTrackerView {
    pub ok: bool,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
    /// Insertion order.
    pub items: Vec<TaskItem>,
}

/// Every task with its date, in insertion order.
///
/// # FFI contract
/// - Never panics; failures set `ok = false` and `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn app_task_tracker() -> TaskTrackerView {
    let rows = screen().and_then(|screen| {
        screen
            .session
            .blocking_tracker()
            .map_err(|err| format!("app_task_tracker failed: {err}"))
    });
    match rows {
        Ok(rows) => TaskTrackerView {
            ok: true,
            message: String::new(),
            items: rows.into_iter().map(TaskItem::from).collect(),
        },
        Err(message) => {
            log::warn!("event=task_tracker module=ffi status=error");
            TaskTrackerView {
                ok: false,
                message,
                items: Vec::new(),
            }
        }
    }
}

/// Start/Stop Timer button.
#[flutter_rust_bridge::frb(sync)]
pub fn timer_toggle() -> ScreenView {
    with_screen(|session| send(session, ShellEvent::ToggleTimer))
}

#[flutter_rust_bridge::frb(sync)]
pub fn timer_start() -> ScreenView {
    with_screen(|session| send(session, ShellEvent::StartTimer))
}

#[flutter_rust_bridge::frb(sync)]
pub fn timer_stop() -> ScreenView {
    with_screen(|session| send(session, ShellEvent::StopTimer))
}

/// Reset Timer button.
#[flutter_rust_bridge::frb(sync)]
pub fn timer_reset() -> ScreenView {
    with_screen(|session| send(session, ShellEvent::ResetTimer))
}

// Screen startup failures take precedence over input errors.
fn select_failure_message(view: ScreenView, err: impl std::fmt::Display) -> ScreenView {
    if view.ok {
        view.with_message(format!("app_select_date failed: {err}"))
    } else {
        view
    }
}

fn send(session: &ShellSession, event: ShellEvent) -> Result<(), String> {
    session.send(event).map_err(|err| err.to_string())
}

fn with_screen(action: impl FnOnce(&ShellSession) -> Result<(), String>) -> ScreenView {
    let screen = match screen() {
        Ok(screen) => screen,
        Err(err) => return ScreenView::failure(err),
    };
    if let Err(err) = action(&screen.session) {
        return ScreenView::failure(err);
    }
    match screen.session.blocking_snapshot() {
        Ok(snapshot) => ScreenView::from(snapshot),
        Err(err) => ScreenView::failure(format!("screen snapshot failed: {err}")),
    }
}

fn screen() -> Result<&'static Screen, String> {
    SCREEN.get_or_try_init(|| {
        let config =
            AppConfig::from_env().map_err(|err| format!("screen config failed: {err}"))?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("daytimer-screen")
            .enable_time()
            .build()
            .map_err(|err| format!("screen runtime failed: {err}"))?;
        let today = chrono::Local::now().date_naive();
        let session = {
            let _guard = runtime.enter();
            ShellSession::spawn(AppShell::new(config, today))
        };
        log::info!("event=screen_start module=ffi status=ok");
        Ok(Screen {
            session,
            _runtime: runtime,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::{
        app_select_date, app_set_input, app_snapshot, app_submit_task, app_task_tracker,
        core_version, init_logging, ping, select_failure_message, timer_reset, timer_start,
        timer_stop, ScreenView,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn snapshot_draws_a_full_calendar() {
        let view = app_snapshot();
        assert!(view.ok, "{}", view.message);
        assert_eq!(view.weekday_labels.len(), 7);
        assert!(view.weeks.iter().all(|week| week.len() == 7));
        assert_eq!(view.today_text_color, "red");
    }

    #[test]
    fn select_then_submit_lists_task_for_that_day() {
        let view = app_select_date("2031-03-14".to_string());
        assert!(view.ok, "{}", view.message);
        assert!(view.input_visible);

        app_set_input("pi day".to_string());
        let view = app_submit_task();
        assert!(view.ok, "{}", view.message);
        assert_eq!(view.input_value, "");
        assert!(view.tasks.iter().any(|task| task.label == "pi day - 2031-03-14"));
        let tracker = app_task_tracker();
        assert!(tracker.ok, "{}", tracker.message);
        assert!(tracker.items.iter().any(|task| task.date == "2031-03-14"));
    }

    #[test]
    fn select_rejects_malformed_date_with_message() {
        let view = app_select_date("14/03/2031".to_string());
        assert!(view.ok);
        assert!(view.message.contains("invalid date"));
    }

    #[test]
    fn failure_view_keeps_its_own_message() {
        let view = ScreenView::failure("screen runtime failed: boom");
        assert!(!view.ok);
        let view = select_failure_message(view, "bad date");
        assert_eq!(view.message, "screen runtime failed: boom");
    }

    #[test]
    fn timer_buttons_update_labels() {
        let view = timer_start();
        assert!(view.timer_running);
        assert_eq!(view.start_stop_label, "Stop Timer");

        let view = timer_stop();
        assert!(!view.timer_running);
        assert_eq!(view.start_stop_label, "Start Timer");

        let view = timer_reset();
        assert_eq!(view.timer_display, "0s");
    }
}
