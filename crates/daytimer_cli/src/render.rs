//! Plain-text screen rendering.

use daytimer_core::{DayCell, ScreenSnapshot, TaskRow};
use std::fmt::Write;

pub fn render_screen(snapshot: &ScreenSnapshot) -> String {
    let mut out = String::new();
    let calendar = &snapshot.calendar;

    let _ = writeln!(out, "{}", snapshot.title);
    let _ = writeln!(out, "{:^28}", calendar.month_label);
    let labels = calendar
        .weekday_labels
        .iter()
        .map(|label| format!("{label:>4}"))
        .collect::<String>();
    let _ = writeln!(out, "{labels}");
    for week in &calendar.weeks {
        let row = week.iter().map(render_cell).collect::<String>();
        let _ = writeln!(out, "{}", row.trim_end());
    }
    let _ = writeln!(out, "  [x] selected  * has tasks  > today");

    if let Some(input) = &snapshot.input {
        let value = if input.value.is_empty() {
            format!("({})", input.placeholder)
        } else {
            input.value.clone()
        };
        let _ = writeln!(out, "\nTask: {value}  <{}>", input.button_label);
    }
    if let Some(day) = &snapshot.day_tasks {
        let _ = writeln!(out, "\n{}", day.heading);
        for row in &day.rows {
            let _ = writeln!(out, "  {}", row.label);
        }
    }

    let timer = &snapshot.timer;
    let _ = writeln!(
        out,
        "\nTimer  {}  <{}> <{}>",
        timer.display, timer.start_stop_label, timer.reset_label
    );
    out
}

pub fn render_tracker(rows: &[TaskRow]) -> String {
    let mut out = String::from("Task Tracker\n");
    if rows.is_empty() {
        out.push_str("  (no tasks)\n");
    }
    for row in rows {
        let _ = writeln!(out, "  {:<32} {}", row.text, row.date);
    }
    out
}

fn render_cell(cell: &DayCell) -> String {
    if !cell.in_visible_month {
        return "    ".to_string();
    }
    let marker = cell.marker.as_ref();
    if marker.is_some_and(|m| m.selected) {
        return format!("[{:>2}]", cell.day);
    }
    let prefix = if cell.is_today { '>' } else { ' ' };
    let suffix = if marker.is_some_and(|m| m.marked) {
        '*'
    } else {
        ' '
    };
    format!("{prefix}{:>2}{suffix}", cell.day)
}
