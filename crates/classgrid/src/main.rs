//! classgrid - weekly class timetable in the terminal

mod cli;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use classgrid_core::{
    ClassgridPreferences, LoadReport, Locale, Schedule, ScheduleParser, ViewMode, ViewState,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// File names tried in the config directory when no schedule is given
const DEFAULT_SCHEDULE_FILES: [&str; 3] = ["schedule.yaml", "schedule.yml", "schedule.json"];

#[derive(Parser)]
#[command(
    name = "classgrid",
    version,
    about = "Weekly class timetable grid",
    long_about = "Displays a class schedule as a time grid (07:00-21:00, 15-minute slots)\n\
                  with day, compact week (Mon-Fri) and complete week (Mon-Sun) views.\n\
                  Sessions can be restricted to alternating A/B weeks.\n\
                  \n\
                  Examples:\n\
                    classgrid --schedule s.yaml             # Run TUI (default)\n\
                    classgrid --mode compact show           # Print this week as a table\n\
                    classgrid --date 2026-11-02 show --json # Grid layout as JSON\n\
                  \n\
                  Environment Variables:\n\
                    CLASSGRID_SCHEDULE               # Schedule file (JSON or YAML)\n\
                    CLASSGRID_LOG                    # Log filter (default: warn)\n\
                    CLASSGRID_NO_COLOR               # Disable ANSI colors"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Schedule file (default: schedule.yaml in the config directory)
    #[arg(long, short = 's', env = "CLASSGRID_SCHEDULE")]
    schedule: Option<PathBuf>,

    /// Date to display, YYYY-MM-DD (default: today)
    #[arg(long, short = 'd', value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// View mode: day, compact or complete (default: from preferences)
    #[arg(long, short = 'm')]
    mode: Option<ViewMode>,

    /// Month names in headers: en or fr (default: from preferences)
    #[arg(long, short = 'l')]
    locale: Option<Locale>,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long, env = "CLASSGRID_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run TUI interface (default)
    Tui,
    /// Print the grid for the selected date and exit
    Show {
        /// Output the full grid layout as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", s, e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);

    let to_stderr = matches!(command, Command::Show { .. });
    init_tracing(cli.log_file.as_deref(), to_stderr, cli.no_color)?;

    let preferences_dir = ClassgridPreferences::default_dir();
    let mut preferences = preferences_dir
        .as_deref()
        .map(ClassgridPreferences::load)
        .unwrap_or_default();
    if let Some(locale) = cli.locale {
        preferences.locale = locale;
    }

    let schedule_path = resolve_schedule_path(cli.schedule, preferences_dir.as_deref())?;
    let schedule = load_schedule(&schedule_path)?;

    let state = ViewState::new(cli.date.unwrap_or_else(|| Local::now().date_naive()))
        .with_mode(cli.mode.unwrap_or(preferences.default_mode));

    match command {
        Command::Tui => {
            let mut app = classgrid_tui::App::new(schedule, state, preferences)
                .with_schedule_path(schedule_path);
            if let Some(dir) = preferences_dir {
                app = app.with_preferences_dir(dir);
            }
            classgrid_tui::run(app)
        }
        Command::Show { json } => {
            cli::run_show(&schedule, &state, &preferences, json, cli.no_color)
        }
    }
}

/// Install the global subscriber
///
/// Filter comes from `CLASSGRID_LOG`. Without a log file, the TUI installs
/// nothing so the alternate screen stays clean.
fn init_tracing(log_file: Option<&Path>, to_stderr: bool, no_color: bool) -> Result<()> {
    let filter =
        || EnvFilter::try_from_env("CLASSGRID_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .with_ansi(!no_color)
            .init();
    }

    Ok(())
}

fn resolve_schedule_path(explicit: Option<PathBuf>, config_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let candidates = config_dir
        .into_iter()
        .flat_map(|dir| DEFAULT_SCHEDULE_FILES.iter().map(move |name| dir.join(name)));
    for candidate in candidates {
        if candidate.exists() {
            debug!(path = %candidate.display(), "Using default schedule");
            return Ok(candidate);
        }
    }

    bail!("No schedule file: pass --schedule or set CLASSGRID_SCHEDULE")
}

fn load_schedule(path: &Path) -> Result<Schedule> {
    let mut report = LoadReport::new();
    let schedule = ScheduleParser::new().load_reported(path, &mut report);

    if report.has_errors() {
        eprintln!("⚠ {}", report.summary());
        for error in &report.errors {
            eprintln!("  - {}", error);
        }
    }

    schedule.with_context(|| format!("Failed to load schedule {}", path.display()))
}
