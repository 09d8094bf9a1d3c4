//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Show the welcome screen on startup (true or false)
    #[arg(long, value_name = "BOOL")]
    welcome: Option<bool>,

    /// Directory holding saved arrangements and the log file
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    data_dir: Option<String>,
    resolved_data_dir: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_welcome_on_startup: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let output = describe(&config)?;

        if self.json {
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                CliError::general(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.theme.is_none() && self.welcome.is_none() && self.data_dir.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --welcome, or --data-dir",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = ThemeMode::parse(theme).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }

        if let Some(welcome) = self.welcome {
            config.ui.show_welcome_on_startup = welcome;
        }

        if let Some(path) = &self.data_dir {
            config.paths.data_dir = Some(path.clone());
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e:#}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn describe(config: &Config) -> CliResult<ConfigOutput> {
    let config_file = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to locate config file: {e:#}")))?;
    let resolved = config
        .data_dir(None)
        .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e:#}")))?;

    Ok(ConfigOutput {
        config_file: config_file.display().to_string(),
        paths: PathsOutput {
            data_dir: config
                .paths
                .data_dir
                .as_ref()
                .map(|p| p.display().to_string()),
            resolved_data_dir: resolved.display().to_string(),
        },
        ui: UiOutput {
            theme: config.ui.theme_mode.as_str().to_string(),
            show_welcome_on_startup: config.ui.show_welcome_on_startup,
        },
    })
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("Seatplan Configuration");
    println!("======================");
    println!();
    println!("Config file: {}", output.config_file);
    println!();

    println!("Paths:");
    match &output.paths.data_dir {
        Some(dir) => println!("  Data Directory: {dir}"),
        None => println!("  Data Directory: (default)"),
    }
    println!("  Resolved:       {}", output.paths.resolved_data_dir);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", output.ui.theme);
    println!("  Welcome on Startup: {}", output.ui.show_welcome_on_startup);
    println!();
}
