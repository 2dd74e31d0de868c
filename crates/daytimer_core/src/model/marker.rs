//! Calendar marker descriptors.
//!
//! A marker tells the calendar how to decorate one day: a dot for days that
//! have tasks, a filled background for the selected day.

use serde::Serialize;
use std::collections::BTreeMap;

/// Dot color used for days with tasks when no color is configured.
pub const DEFAULT_DOT_COLOR: &str = "blue";
/// Background color used for the selected day when no color is configured.
pub const DEFAULT_SELECTED_COLOR: &str = "blue";

/// Marked days keyed by date string.
pub type MarkedDates = BTreeMap<String, DateMarker>;

/// Decoration for one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateMarker {
    /// Day has at least one task.
    pub marked: bool,
    pub dot_color: Option<String>,
    /// Day is the current selection.
    pub selected: bool,
    pub selected_color: Option<String>,
}

impl DateMarker {
    /// Marker for a day that has tasks.
    pub fn has_tasks(dot_color: impl Into<String>) -> Self {
        Self {
            marked: true,
            dot_color: Some(dot_color.into()),
            selected: false,
            selected_color: None,
        }
    }

    /// Highlight for the selected day.
    ///
    /// This descriptor replaces any task marker for the same day.
    pub fn selected(selected_color: impl Into<String>) -> Self {
        Self {
            marked: false,
            dot_color: None,
            selected: true,
            selected_color: Some(selected_color.into()),
        }
    }
}
