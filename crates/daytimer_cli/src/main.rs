//! Terminal host for the daytimer screen.
//!
//! # Responsibility
//! - Mount the composed screen and feed it line commands from stdin.
//! - Keep all screen rules in `daytimer_core`; this binary only parses and
//!   draws.

mod command;
mod render;

use chrono::NaiveDate;
use clap::Parser;
use command::{parse_command, Command, HELP};
use daytimer_core::{default_log_level, init_logging, AppConfig, AppShell, ShellSession};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "daytimer", version, about = "Calendar task list with a stopwatch")]
struct Args {
    /// Log level for file logs (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Expo-style app.json providing the app name.
    #[arg(long)]
    app_json: Option<PathBuf>,

    /// Overrides today's date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_day)]
    today: Option<NaiveDate>,
}

fn parse_day(value: &str) -> Result<NaiveDate, String> {
    daytimer_core::DaySelection::parse(value)
        .map(|selection| selection.date())
        .map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("daytimer: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), String> {
    if let Some(log_dir) = &args.log_dir {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| format!("log dir `{}` is not UTF-8", log_dir.display()))?;
        init_logging(level, log_dir)?;
    }

    let config = load_config(args.app_json.as_deref())?;
    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    log::info!(
        "event=host_start module=cli status=ok app={}",
        config.app_name
    );
    let session = ShellSession::spawn(AppShell::new(config, today));
    print_screen(&session).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|err| format!("failed to read stdin: {err}"))?
    {
        match parse_command(&line) {
            Ok(Command::Apply(events)) => {
                for event in events {
                    session.send(event).map_err(|err| err.to_string())?;
                }
                print_screen(&session).await?;
            }
            Ok(Command::Show) => print_screen(&session).await?,
            Ok(Command::Tracker) => {
                let rows = session.tracker().await.map_err(|err| err.to_string())?;
                print!("{}", render::render_tracker(&rows));
            }
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Ok(Command::Empty) => {}
            Err(err) => println!("{err}"),
        }
    }

    let shell = session.shutdown().await.map_err(|err| err.to_string())?;
    println!(
        "{} tasks, timer at {}",
        shell.tasks().len(),
        shell.timer_state().display()
    );
    Ok(())
}

/// `--app-json` replaces `DAYTIMER_APP_JSON`; env overrides apply either way.
fn load_config(app_json: Option<&Path>) -> Result<AppConfig, String> {
    let config = match app_json {
        Some(path) => AppConfig::load_app_json(path).and_then(AppConfig::with_env_overrides),
        None => AppConfig::from_env(),
    };
    config.map_err(|err| err.to_string())
}

async fn print_screen(session: &ShellSession) -> Result<(), String> {
    let snapshot = session.snapshot().await.map_err(|err| err.to_string())?;
    println!("{}", render::render_screen(&snapshot));
    Ok(())
}
