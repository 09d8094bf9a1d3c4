//! Saved arrangement CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::models::{Arrangement, ArrangementArchive};
use crate::services::store::{self, JsonFileStore};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::Path;

/// Saved arrangement commands
#[derive(Args, Debug)]
pub struct ArchiveArgs {
    #[command(subcommand)]
    command: ArchiveCommand,
}

#[derive(Subcommand, Debug)]
enum ArchiveCommand {
    /// List saved arrangements
    List(ArchiveListArgs),
    /// Print the seat map of one saved arrangement
    Show(ArchiveShowArgs),
}

/// List saved arrangements
#[derive(Args, Debug)]
pub struct ArchiveListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Print the seat map of one saved arrangement
#[derive(Args, Debug)]
pub struct ArchiveShowArgs {
    /// Position in the archive, as printed by `archive list`
    #[arg(value_name = "INDEX")]
    index: usize,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct ListEntry<'a> {
    index: usize,
    name: &'a str,
    date: &'a str,
}

#[derive(Serialize, Debug)]
struct SeatOutput {
    position: String,
    label: String,
}

#[derive(Serialize, Debug)]
struct ShowOutput<'a> {
    index: usize,
    name: &'a str,
    date: &'a str,
    seats: Vec<SeatOutput>,
}

impl ArchiveArgs {
    /// Execute archive subcommand against the store in `data_dir`
    pub fn execute(&self, data_dir: &Path) -> CliResult<()> {
        let archive = load(data_dir)?;
        match &self.command {
            ArchiveCommand::List(args) => args.execute(&archive),
            ArchiveCommand::Show(args) => args.execute(&archive),
        }
    }
}

fn load(data_dir: &Path) -> CliResult<ArrangementArchive> {
    let store = JsonFileStore::in_dir(data_dir);
    store::load_archive(&store).map_err(|e| {
        CliError::io(format!(
            "Failed to load saved arrangements from {}: {e:#}",
            store.path().display()
        ))
    })
}

fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::general(format!("Failed to serialize JSON: {e}")))
}

impl ArchiveListArgs {
    /// Execute list command
    pub fn execute(&self, archive: &ArrangementArchive) -> CliResult<()> {
        if self.json {
            let entries: Vec<ListEntry> = archive
                .entries()
                .iter()
                .enumerate()
                .map(|(index, arrangement)| ListEntry {
                    index,
                    name: &arrangement.name,
                    date: &arrangement.date,
                })
                .collect();
            println!("{}", to_json(&entries)?);
            return Ok(());
        }

        if archive.is_empty() {
            println!("No saved arrangements.");
            return Ok(());
        }

        println!("Saved arrangements ({}):", archive.len());
        for (index, arrangement) in archive.entries().iter().enumerate() {
            println!("  {index:>3}  {}", arrangement.display_label());
        }
        Ok(())
    }
}

impl ArchiveShowArgs {
    /// Execute show command
    pub fn execute(&self, archive: &ArrangementArchive) -> CliResult<()> {
        let arrangement = archive.get(self.index).ok_or_else(|| {
            CliError::validation(format!(
                "No saved arrangement at index {} ({} saved)",
                self.index,
                archive.len()
            ))
        })?;

        if self.json {
            println!("{}", to_json(&show_output(self.index, arrangement))?);
        } else {
            println!("{}", arrangement.display_label());
            println!();
            for (position, label) in arrangement.seat_map() {
                println!("  {position}: {label}");
            }
        }
        Ok(())
    }
}

fn show_output(index: usize, arrangement: &Arrangement) -> ShowOutput<'_> {
    ShowOutput {
        index,
        name: &arrangement.name,
        date: &arrangement.date,
        seats: arrangement
            .seat_map()
            .into_iter()
            .map(|(position, label)| SeatOutput { position, label })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SEAT_COUNT;
    use crate::models::Seat;

    #[test]
    fn test_show_output_lists_every_seat() {
        let seats: Vec<Seat> = (0..SEAT_COUNT).map(Seat::empty).collect();
        let arrangement = Arrangement::capture("Monday", "2026-03-02 08:30:00", &seats);

        let output = show_output(4, &arrangement);
        assert_eq!(output.index, 4);
        assert_eq!(output.seats.len(), SEAT_COUNT);
        assert_eq!(output.seats[0].position, "1열 1번");
        assert_eq!(output.seats[0].label, "1번");
    }

    #[test]
    fn test_show_rejects_missing_index() {
        let args = ArchiveShowArgs {
            index: 0,
            json: false,
        };
        let err = args
            .execute(&ArrangementArchive::new())
            .expect_err("empty archive");
        assert_eq!(err.code, crate::cli::ExitCode::Validation);
    }
}
