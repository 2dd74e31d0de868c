//! Composed task-calendar-stopwatch screen.
//!
//! # Responsibility
//! - Route calendar selections, task input and timer buttons to the owning
//!   components.
//! - Derive render snapshots from current state.
//!
//! # Invariants
//! - The input form and per-day task list exist only while a day is selected.
//! - Input is cleared only when a task was actually appended.

use crate::calendar::view::{CalendarProps, CalendarSnapshot, CalendarView};
use crate::calendar::DaySelection;
use crate::config::AppConfig;
use crate::model::marker::MarkedDates;
use crate::model::task::Task;
use crate::store::task_store::TaskStore;
use crate::timer::engine::{TickTicket, TimerEngine, TimerState};
use chrono::NaiveDate;
use log::info;
use serde::Serialize;

pub const INPUT_PLACEHOLDER: &str = "Enter task";
pub const ADD_TASK_LABEL: &str = "Add Task";
pub const START_TIMER_LABEL: &str = "Start Timer";
pub const STOP_TIMER_LABEL: &str = "Stop Timer";
pub const RESET_TIMER_LABEL: &str = "Reset Timer";

/// One task line in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub text: String,
    pub date: String,
    /// `{text} - {date}`.
    pub label: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            text: task.text().to_string(),
            date: task.date().to_string(),
            label: task.label(),
        }
    }
}

/// Task entry form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskInputSnapshot {
    pub value: String,
    pub placeholder: &'static str,
    pub button_label: &'static str,
}

/// Tasks for the selected day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTasksSnapshot {
    /// `Tasks for {date}:`.
    pub heading: String,
    pub rows: Vec<TaskRow>,
}

/// Stopwatch display state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerSnapshot {
    pub state: TimerState,
    pub display: String,
    pub start_stop_label: &'static str,
    pub reset_label: &'static str,
}

impl From<TimerState> for TimerSnapshot {
    fn from(state: TimerState) -> Self {
        Self {
            state,
            display: state.display(),
            start_stop_label: if state.running {
                STOP_TIMER_LABEL
            } else {
                START_TIMER_LABEL
            },
            reset_label: RESET_TIMER_LABEL,
        }
    }
}

/// Everything a host needs to draw the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenSnapshot {
    pub title: String,
    pub calendar: CalendarSnapshot,
    pub selected_date: Option<String>,
    pub input: Option<TaskInputSnapshot>,
    pub day_tasks: Option<DayTasksSnapshot>,
    pub timer: TimerSnapshot,
}

/// User-facing input to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    SelectDay(DaySelection),
    InputChanged(String),
    SubmitTask,
    ToggleTimer,
    StartTimer,
    StopTimer,
    ResetTimer,
    ShowNextMonth,
    ShowPreviousMonth,
}

/// Root screen state.
#[derive(Debug)]
pub struct AppShell {
    config: AppConfig,
    tasks: TaskStore,
    selected_date: Option<String>,
    input: String,
    calendar: CalendarView,
    timer: TimerEngine,
}

impl AppShell {
    /// Creates the screen with the calendar opened on `today`.
    pub fn new(config: AppConfig, today: NaiveDate) -> Self {
        let calendar = CalendarView::new(today, config.theme.clone());
        info!(
            "event=shell_mount module=shell status=ok app={} today={}",
            config.app_name, today
        );
        Self {
            config,
            tasks: TaskStore::new(),
            selected_date: None,
            input: String::new(),
            calendar,
            timer: TimerEngine::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn calendar(&self) -> &CalendarView {
        &self.calendar
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Applies one event.
    ///
    /// Returns a ticket when the event started the stopwatch; the caller owns
    /// scheduling ticks for it.
    pub fn dispatch(&mut self, event: ShellEvent) -> Option<TickTicket> {
        match event {
            ShellEvent::SelectDay(selection) => self.select_day(selection),
            ShellEvent::InputChanged(text) => self.set_input(text),
            ShellEvent::SubmitTask => {
                self.submit_task();
            }
            ShellEvent::ToggleTimer => return self.toggle_timer(),
            ShellEvent::StartTimer => return self.start_timer(),
            ShellEvent::StopTimer => {
                self.stop_timer();
            }
            ShellEvent::ResetTimer => self.reset_timer(),
            ShellEvent::ShowNextMonth => self.show_next_month(),
            ShellEvent::ShowPreviousMonth => self.show_previous_month(),
        }
        None
    }

    /// Handles a calendar day press.
    pub fn select_day(&mut self, selection: DaySelection) {
        if !crate::calendar::grid::same_month(selection.date(), self.calendar.visible_month()) {
            self.calendar.show_month_of(selection.date());
        }
        info!(
            "event=day_selected module=shell status=ok date={}",
            selection.date_string()
        );
        self.selected_date = Some(selection.date_string().to_string());
    }

    /// Replaces the input buffer.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Adds the buffered text to the selected day.
    ///
    /// Without a selection, or with empty input, nothing changes and `false`
    /// is returned.
    pub fn submit_task(&mut self) -> bool {
        let Some(date) = self.selected_date.as_deref() else {
            return false;
        };
        let added = self.tasks.add(self.input.as_str(), date);
        if added {
            self.input.clear();
        }
        added
    }

    /// Tasks for the selected day, empty when nothing is selected.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        match self.selected_date.as_deref() {
            Some(date) => self.tasks.by_date(date),
            None => Vec::new(),
        }
    }

    /// Task day markers with the configured dot color.
    pub fn marked_dates(&self) -> MarkedDates {
        self.tasks
            .marked_dates_with_color(self.config.marker_color.as_str())
    }

    /// Every task with its date, in insertion order.
    pub fn tracker_rows(&self) -> Vec<TaskRow> {
        self.tasks.iter().map(TaskRow::from).collect()
    }

    pub fn show_next_month(&mut self) {
        self.calendar.show_next_month();
    }

    pub fn show_previous_month(&mut self) {
        self.calendar.show_previous_month();
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    /// Starts the stopwatch; the returned ticket must be handed to a ticker.
    pub fn start_timer(&mut self) -> Option<TickTicket> {
        self.timer.start()
    }

    pub fn stop_timer(&mut self) -> bool {
        self.timer.stop()
    }

    /// Start/Stop button behavior.
    pub fn toggle_timer(&mut self) -> Option<TickTicket> {
        self.timer.toggle()
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    /// Applies one scheduled tick.
    pub fn on_tick(&mut self, ticket: &TickTicket) -> bool {
        self.timer.tick(ticket)
    }

    /// Releases the scheduled tick, if any, before the screen goes away.
    pub fn teardown(&mut self) {
        self.timer.stop();
        info!(
            "event=shell_unmount module=shell status=ok tasks={}",
            self.tasks.len()
        );
    }

    pub fn calendar_snapshot(&self) -> CalendarSnapshot {
        let marked_dates = self.marked_dates();
        self.calendar.render(CalendarProps {
            marked_dates: &marked_dates,
            selected: self.selected_date.as_deref(),
        })
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        let input = self.selected_date.as_ref().map(|_| TaskInputSnapshot {
            value: self.input.clone(),
            placeholder: INPUT_PLACEHOLDER,
            button_label: ADD_TASK_LABEL,
        });
        let day_tasks = self.selected_date.as_ref().map(|date| DayTasksSnapshot {
            heading: format!("Tasks for {date}:"),
            rows: self
                .tasks
                .by_date(date)
                .into_iter()
                .map(TaskRow::from)
                .collect(),
        });

        ScreenSnapshot {
            title: self.config.title.clone(),
            calendar: self.calendar_snapshot(),
            selected_date: self.selected_date.clone(),
            input,
            day_tasks,
            timer: TimerSnapshot::from(self.timer.state()),
        }
    }
}
