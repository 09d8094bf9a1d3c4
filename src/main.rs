//! Seatplan - terminal seating chart for classrooms
//!
//! Without a subcommand this launches the interactive chart. The `archive` and
//! `config` subcommands give headless access to saved arrangements and settings.

use clap::{Parser, Subcommand};
use seatplan::cli::{ArchiveArgs, CliError, CliResult, ConfigArgs};
use seatplan::config::Config;
use seatplan::{logging, tui};
use std::path::PathBuf;

/// Seatplan - terminal seating chart for classrooms
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding saved arrangements and the log file
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect saved arrangements
    Archive(ArchiveArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Command::Archive(args)) => resolve_data_dir(&cli).and_then(|dir| args.execute(&dir)),
        Some(Command::Config(args)) => args.execute(),
        None => run_chart(&cli).map_err(CliError::from),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.code.code());
    }
}

fn load_config() -> CliResult<Config> {
    Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

fn resolve_data_dir(cli: &Cli) -> CliResult<PathBuf> {
    load_config()?
        .data_dir(cli.data_dir.as_deref())
        .map_err(|e| CliError::io(format!("{e:#}")))
}

fn run_chart(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load()?;
    let data_dir = config.data_dir(cli.data_dir.as_deref())?;
    let log_path = logging::init(&data_dir, cli.verbose)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_path.display(),
        "Starting seating chart"
    );

    tui::run_tui(&config, &data_dir)
}
