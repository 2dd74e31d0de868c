//! Line commands accepted on stdin.

use daytimer_core::{DaySelection, ShellEvent};

pub const HELP: &str = "\
commands:
  select <YYYY-MM-DD>   press a calendar day
  type <text>           set the task input
  add [text]            add the input (or <text>) to the selected day
  start | stop | toggle | reset
  next | prev           change the visible month
  show                  redraw the screen
  tracker               list every task with its date
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Apply(Vec<ShellEvent>),
    Show,
    Tracker,
    Help,
    Quit,
    Empty,
}

/// Parses one input line.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "select" => {
            let selection = DaySelection::parse(rest).map_err(|err| err.to_string())?;
            Command::Apply(vec![ShellEvent::SelectDay(selection)])
        }
        "type" => Command::Apply(vec![ShellEvent::InputChanged(rest.to_string())]),
        "add" if rest.is_empty() => Command::Apply(vec![ShellEvent::SubmitTask]),
        "add" => Command::Apply(vec![
            ShellEvent::InputChanged(rest.to_string()),
            ShellEvent::SubmitTask,
        ]),
        "start" => Command::Apply(vec![ShellEvent::StartTimer]),
        "stop" => Command::Apply(vec![ShellEvent::StopTimer]),
        "toggle" => Command::Apply(vec![ShellEvent::ToggleTimer]),
        "reset" => Command::Apply(vec![ShellEvent::ResetTimer]),
        "next" => Command::Apply(vec![ShellEvent::ShowNextMonth]),
        "prev" => Command::Apply(vec![ShellEvent::ShowPreviousMonth]),
        "show" => Command::Show,
        "tracker" => Command::Tracker,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(command)
}
