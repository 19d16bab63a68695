mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use cardtime_core::config::CardTimeConfig;
use cardtime_core::{EventDuration, Locale};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardtime")]
#[command(about = "Turn handwritten appointment cards into calendar files")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a card photo, review the result and write an .ics file
    Scan {
        image: PathBuf,

        /// Card language ("en" or "bg"); detected when omitted
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Appointment length in minutes (30, 60, 90, 120 or 180)
        #[arg(short, long)]
        duration: Option<EventDuration>,

        /// Where to write the .ics file (defaults to output_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Accept the extracted values without prompting
        #[arg(short, long)]
        yes: bool,
    },
    /// Extract appointment fields from already-recognized text (stdin if no file)
    Parse {
        file: Option<PathBuf>,

        #[arg(short, long)]
        locale: Option<Locale>,
    },
    /// Build an .ics file from explicit appointment details
    Event {
        /// Date (YYYY-MM-DD or the card form of the locale)
        #[arg(long)]
        date: Option<String>,

        /// Time (e.g. "14:30" or "2:30 pm")
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        artist: Option<String>,

        #[arg(long)]
        deposit: Option<String>,

        #[arg(long)]
        size: Option<String>,

        #[arg(short, long)]
        duration: Option<EventDuration>,

        #[arg(short, long)]
        locale: Option<Locale>,

        /// Print the calendar file instead of writing it
        #[arg(long)]
        stdout: bool,
    },
    /// Show which locale would be used and why
    Locale,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CardTimeConfig::load()?;

    match cli.command {
        Commands::Scan {
            image,
            locale,
            duration,
            out,
            yes,
        } => {
            commands::scan::run(
                &config,
                commands::scan::ScanArgs {
                    image,
                    locale,
                    duration,
                    out,
                    yes,
                },
            )
            .await
        }
        Commands::Parse { file, locale } => commands::parse::run(&config, file, locale).await,
        Commands::Event {
            date,
            time,
            artist,
            deposit,
            size,
            duration,
            locale,
            stdout,
        } => {
            commands::event::run(
                &config,
                commands::event::EventArgs {
                    date,
                    time,
                    artist,
                    deposit,
                    size,
                    duration,
                    locale,
                    stdout,
                },
            )
            .await
        }
        Commands::Locale => commands::locale::run(&config).await,
    }
}

/// Logs go to stderr so JSON and ICS on stdout stay clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
