use chrono::NaiveDate;
use daytimer_core::{AppConfig, AppShell, DaySelection, ShellEvent};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
}

fn select(shell: &mut AppShell, date: &str) {
    shell.select_day(DaySelection::parse(date).unwrap());
}

#[test]
fn nothing_selected_hides_form_and_list() {
    let shell = AppShell::new(AppConfig::default(), today());
    let snapshot = shell.snapshot();

    assert_eq!(snapshot.title, "Time Management App");
    assert_eq!(snapshot.selected_date, None);
    assert!(snapshot.input.is_none());
    assert!(snapshot.day_tasks.is_none());
    assert_eq!(snapshot.timer.display, "0s");
    assert_eq!(snapshot.timer.start_stop_label, "Start Timer");
}

#[test]
fn submit_without_selection_is_ignored_and_keeps_input() {
    let mut shell = AppShell::new(AppConfig::default(), today());
    shell.set_input("Buy milk");

    assert!(!shell.submit_task());
    assert!(shell.tasks().is_empty());
    assert_eq!(shell.input(), "Buy milk");
}

#[test]
fn submit_adds_to_selected_day_and_clears_input() {
    let mut shell = AppShell::new(AppConfig::default(), today());
    select(&mut shell, "2024-06-01");
    shell.set_input("Buy milk");
    assert!(shell.submit_task());
    shell.set_input("Call Bob");
    assert!(shell.submit_task());
    select(&mut shell, "2024-06-02");
    shell.set_input("Gym");
    assert!(shell.submit_task());
    assert_eq!(shell.input(), "");

    select(&mut shell, "2024-06-01");
    let snapshot = shell.snapshot();
    let day_tasks = snapshot.day_tasks.unwrap();
    assert_eq!(day_tasks.heading, "Tasks for 2024-06-01:");
    let labels = day_tasks
        .rows
        .iter()
        .map(|row| row.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["Buy milk - 2024-06-01", "Call Bob - 2024-06-01"]);

    let marked = shell.marked_dates();
    assert_eq!(marked.len(), 2);
    assert!(marked.contains_key("2024-06-01"));
    assert!(marked.contains_key("2024-06-02"));
}

#[test]
fn empty_input_submit_is_ignored() {
    let mut shell = AppShell::new(AppConfig::default(), today());
    select(&mut shell, "2024-06-01");
    assert!(!shell.submit_task());
    assert!(shell.tasks().is_empty());
}

#[test]
fn input_form_shows_placeholder_and_value() {
    let mut shell = AppShell::new(AppConfig::default(), today());
    select(&mut shell, "2024-06-01");
    shell.set_input("draft");

    let input = shell.snapshot().input.unwrap();
    assert_eq!(input.value, "draft");
    assert_eq!(input.placeholder, "Enter task");
    assert_eq!(input.button_label, "Add Task");
}

#[test]
fn calendar_snapshot_merges_markers_and_selection() {
    let mut shell = AppShell::new(AppConfig::default(), today());
    select(&mut shell, "2024-06-01");
    shell.set_input("Buy milk");
    shell.submit_task();
    select(&mut shell, "2024-06-02");

    let calendar = shell.snapshot().calendar;
    let first = calendar.cell("2024-06-01").unwrap().marker.clone().unwrap();
    assert!(first.marked);
    let second = calendar.cell("2024-06-02").unwrap().marker.clone().unwrap();
    assert!(second.selected);
    assert!(!second.marked);
}

#[test]
fn selecting_other_month_moves_calendar() {
    let mut shell = AppShell::new(AppConfig::default(), today());
    select(&mut shell, "2024-09-15");
    assert_eq!(shell.snapshot().calendar.month_label, "September 2024");
}

#[test]
fn tracker_rows_list_every_task_in_order() {
    let mut shell = AppShell::new(AppConfig::default(), today());
    for (date, text) in [("2024-06-02", "Gym"), ("2024-06-01", "Buy milk")] {
        select(&mut shell, date);
        shell.set_input(text);
        shell.submit_task();
    }

    let rows = shell.tracker_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text, "Gym");
    assert_eq!(rows[1].date, "2024-06-01");
}

#[test]
fn dispatch_routes_timer_events() {
    let mut shell = AppShell::new(AppConfig::default(), today());
    let ticket = shell.dispatch(ShellEvent::ToggleTimer).unwrap();
    shell.on_tick(&ticket);
    assert_eq!(shell.snapshot().timer.start_stop_label, "Stop Timer");

    assert!(shell.dispatch(ShellEvent::StartTimer).is_none());
    assert!(shell.dispatch(ShellEvent::StopTimer).is_none());
    assert!(ticket.is_cancelled());
    assert_eq!(shell.timer_state().elapsed_seconds, 1);

    shell.dispatch(ShellEvent::ResetTimer);
    assert_eq!(shell.snapshot().timer.display, "0s");
}

#[test]
fn teardown_releases_running_ticket() {
    let mut shell = AppShell::new(AppConfig::default(), today());
    let ticket = shell.start_timer().unwrap();
    shell.teardown();
    assert!(ticket.is_cancelled());
    assert!(!shell.timer_state().running);
}

#[test]
fn configured_marker_color_is_used() {
    let config = AppConfig {
        marker_color: "green".to_string(),
        ..AppConfig::default()
    };
    let mut shell = AppShell::new(config, today());
    select(&mut shell, "2024-06-01");
    shell.set_input("Buy milk");
    shell.submit_task();

    assert_eq!(
        shell.marked_dates()["2024-06-01"].dot_color.as_deref(),
        Some("green")
    );
}
