//! CLI command handlers for Seatplan.
//!
//! This module provides headless, scriptable access to the saved arrangements
//! and the configuration, without starting the terminal UI.

pub mod archive;
pub mod common;
pub mod config;

// Re-export types used by main.rs and tests
pub use archive::ArchiveArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
