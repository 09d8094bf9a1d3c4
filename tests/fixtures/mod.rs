//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)]

use seatplan::constants::SEAT_COUNT;
use seatplan::models::{Arrangement, ArrangementArchive, Seat};
use seatplan::services::store;
use seatplan::services::JsonFileStore;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the seatplan binary
pub fn seatplan_bin() -> String {
    std::env::var("CARGO_BIN_EXE_seatplan")
        .unwrap_or_else(|_| "target/debug/seatplan".to_string())
}

/// Isolated config and data directories for one test.
pub struct TestDirs {
    _root: TempDir,
    /// Directory used as `$SEATPLAN_CONFIG_DIR`
    pub config_dir: PathBuf,
    /// Directory used as `$SEATPLAN_DATA_DIR`
    pub data_dir: PathBuf,
}

impl TestDirs {
    /// Creates empty config and data directories.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let config_dir = root.path().join("config");
        let data_dir = root.path().join("data");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        Self {
            _root: root,
            config_dir,
            data_dir,
        }
    }

    /// Command for the binary with both directories isolated.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(seatplan_bin());
        cmd.env("SEATPLAN_CONFIG_DIR", &self.config_dir);
        cmd.env("SEATPLAN_DATA_DIR", &self.data_dir);
        cmd.env_remove("SEATPLAN_LOG");
        cmd.args(args);
        cmd
    }

    /// Path of the config file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }
}

/// Arrangement whose first seats hold `names` and the rest are empty.
pub fn arrangement(name: &str, date: &str, names: &[&str]) -> Arrangement {
    let seats: Vec<Seat> = (0..SEAT_COUNT)
        .map(|index| match names.get(index) {
            Some(student) => Seat::occupied_by(*student),
            None => Seat::empty(index),
        })
        .collect();
    Arrangement::capture(name, date, &seats)
}

/// Writes `arrangements` to the store in `data_dir`.
pub fn write_archive(data_dir: &Path, arrangements: Vec<Arrangement>) {
    let mut archive = ArrangementArchive::new();
    for arrangement in arrangements {
        archive.push(arrangement);
    }
    let mut store = JsonFileStore::in_dir(data_dir);
    store::persist_archive(&mut store, &archive).expect("Failed to write archive");
}
