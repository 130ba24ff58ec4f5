// leetdaily - daily LeetCode practice companion
// Entry point and command dispatch

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use leetdaily::commands;
use leetdaily::locale::Locale;
use leetdaily::services::AssistanceKind;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// leetdaily - one problem a day, with notes and AI help
#[derive(Parser)]
#[command(name = "leetdaily", version)]
#[command(about = "Daily LeetCode practice companion", long_about = None)]
struct Cli {
    /// Data directory (defaults to $LEETDAILY_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Act on this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's problem
    Today {
        /// Print the stored record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or replace today's notes
    Notes {
        #[command(subcommand)]
        command: NotesCommand,
    },
    /// Mark today's problem as completed
    Complete,
    /// Ask for three progressive hints
    Hint,
    /// Ask for a review of today's notes
    Review,
    /// Ask for related problems
    Similar,
    /// List past practice days
    History {
        /// Number of days to show
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        limit: Option<i64>,
    },
    /// List the problem catalog
    Problems,
    /// Reminder notifications
    Notify {
        #[command(subcommand)]
        command: NotifyCommand,
    },
    /// Application settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
    /// Version and data directory
    Info,
}

#[derive(Subcommand)]
enum NotesCommand {
    /// Print the notes
    Show,
    /// Replace the notes with TEXT, the contents of --file, or stdin
    Set {
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum NotifyCommand {
    /// Show notification state
    Status,
    /// Request permission and enable reminders
    On,
    /// Disable reminders
    Off,
    /// Set the reminder time (HH:MM)
    Time { time: String },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print all settings
    Show,
    /// Set the display language (en or zh)
    Locale { locale: Locale },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "leetdaily=debug,warn"
    } else {
        "leetdaily=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn read_notes(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read notes from {}", path.display()));
    }

    let mut notes = String::new();
    std::io::stdin()
        .read_to_string(&mut notes)
        .context("Failed to read notes from stdin")?;
    Ok(notes)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = leetdaily::app::resolve_data_dir(cli.data_dir)?;
    let state = leetdaily::app::setup(data_dir)
        .await
        .context("Failed to initialize leetdaily")?;

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!("Acting on {}", date);

    let output = match cli.command.unwrap_or(Commands::Today { json: false }) {
        Commands::Today { json } => commands::show_today(&state, date, json).await?,
        Commands::Notes { command } => match command {
            NotesCommand::Show => commands::show_notes(&state, date).await?,
            NotesCommand::Set { text, file } => {
                let notes = read_notes(text, file).await?;
                commands::set_notes(&state, date, notes).await?
            }
        },
        Commands::Complete => commands::complete(&state, date).await?,
        Commands::Hint => commands::ask(&state, date, AssistanceKind::Hints).await?,
        Commands::Review => commands::ask(&state, date, AssistanceKind::Review).await?,
        Commands::Similar => commands::ask(&state, date, AssistanceKind::Similar).await?,
        Commands::History { limit } => commands::history(&state, limit).await?,
        Commands::Problems => commands::list_problems(&state, date),
        Commands::Notify { command } => match command {
            NotifyCommand::Status => commands::notification_status(&state).await,
            NotifyCommand::On => commands::enable_notifications(&state).await?,
            NotifyCommand::Off => commands::disable_notifications(&state).await,
            NotifyCommand::Time { time } => commands::set_reminder_time(&state, &time).await?,
        },
        Commands::Settings { command } => match command {
            SettingsCommand::Show => commands::show_settings(&state).await?,
            SettingsCommand::Locale { locale } => commands::set_locale(&state, locale).await?,
        },
        Commands::Info => commands::app_info(&state),
    };

    println!("{}", output);
    Ok(())
}
