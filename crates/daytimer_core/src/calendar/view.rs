//! Calendar view state and rendering.
//!
//! # Responsibility
//! - Track the visible month and today's date.
//! - Merge task markers with the selected-day highlight.
//! - Produce a render-ready snapshot of the visible month.

use super::grid::{self, WEEKDAY_LABELS};
use super::DaySelection;
use super::DATE_FORMAT;
use crate::model::marker::{DateMarker, MarkedDates, DEFAULT_SELECTED_COLOR};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Default text color for today's cell.
pub const DEFAULT_TODAY_TEXT_COLOR: &str = "red";

/// Calendar colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarTheme {
    pub selected_day_background: String,
    pub today_text_color: String,
}

impl Default for CalendarTheme {
    fn default() -> Self {
        Self {
            selected_day_background: DEFAULT_SELECTED_COLOR.to_string(),
            today_text_color: DEFAULT_TODAY_TEXT_COLOR.to_string(),
        }
    }
}

/// Inputs the calendar receives from its owner.
#[derive(Debug, Clone, Copy)]
pub struct CalendarProps<'a> {
    pub marked_dates: &'a MarkedDates,
    /// Day to highlight, if any.
    pub selected: Option<&'a str>,
}

/// One rendered day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: String,
    pub day: u32,
    /// False for padding days from adjacent months.
    pub in_visible_month: bool,
    pub is_today: bool,
    pub marker: Option<DateMarker>,
}

/// Render-ready calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarSnapshot {
    /// e.g. `June 2024`.
    pub month_label: String,
    pub weekday_labels: [&'static str; 7],
    pub weeks: Vec<Vec<DayCell>>,
    pub theme: CalendarTheme,
}

impl CalendarSnapshot {
    /// Looks up one day among the rendered cells.
    pub fn cell(&self, date: &str) -> Option<&DayCell> {
        self.weeks.iter().flatten().find(|cell| cell.date == date)
    }
}

/// Month calendar with selection events.
#[derive(Debug, Clone)]
pub struct CalendarView {
    visible_month: NaiveDate,
    today: NaiveDate,
    theme: CalendarTheme,
}

impl CalendarView {
    /// Creates a calendar showing the month of `today`.
    pub fn new(today: NaiveDate, theme: CalendarTheme) -> Self {
        Self {
            visible_month: grid::first_of_month(today),
            today,
            theme,
        }
    }

    /// First day of the visible month.
    pub fn visible_month(&self) -> NaiveDate {
        self.visible_month
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn show_next_month(&mut self) {
        self.visible_month = grid::next_month(self.visible_month);
    }

    pub fn show_previous_month(&mut self) {
        self.visible_month = grid::previous_month(self.visible_month);
    }

    /// Moves the visible month to the one containing `date`.
    pub fn show_month_of(&mut self, date: NaiveDate) {
        self.visible_month = grid::first_of_month(date);
    }

    /// Emits the selection event for a pressed day.
    pub fn press(&self, date: NaiveDate) -> DaySelection {
        DaySelection::from_date(date)
    }

    /// Task markers plus the selected-day override.
    pub fn effective_markers(&self, props: CalendarProps<'_>) -> MarkedDates {
        let mut markers = props.marked_dates.clone();
        if let Some(selected) = props.selected {
            markers.insert(
                selected.to_string(),
                DateMarker::selected(self.theme.selected_day_background.as_str()),
            );
        }
        markers
    }

    /// Lays out the visible month with markers applied.
    pub fn render(&self, props: CalendarProps<'_>) -> CalendarSnapshot {
        let markers = self.effective_markers(props);
        let weeks = grid::month_weeks(self.visible_month)
            .into_iter()
            .map(|week| {
                week.into_iter()
                    .map(|date| {
                        let key = date.format(DATE_FORMAT).to_string();
                        let marker = markers.get(&key).cloned();
                        DayCell {
                            day: date.day(),
                            in_visible_month: grid::same_month(date, self.visible_month),
                            is_today: date == self.today,
                            marker,
                            date: key,
                        }
                    })
                    .collect()
            })
            .collect();

        CalendarSnapshot {
            month_label: self.visible_month.format("%B %Y").to_string(),
            weekday_labels: WEEKDAY_LABELS,
            weeks,
            theme: self.theme.clone(),
        }
    }
}
