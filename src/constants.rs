//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed classroom geometry.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Seatplan";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "seatplan";

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "Seatplan";

/// Number of seat rows in the classroom grid.
pub const SEAT_ROWS: usize = 4;

/// Number of seat columns in the classroom grid.
pub const SEAT_COLS: usize = 6;

/// Total number of seats (and roster capacity).
pub const SEAT_COUNT: usize = SEAT_ROWS * SEAT_COLS;

/// Minimum number of characters in a student name (after trimming).
pub const MIN_NAME_CHARS: usize = 2;

/// Store key holding the serialized arrangement archive.
pub const ARCHIVE_STORE_KEY: &str = "classroomArrangements";

/// Prefix of placeholder roster names ("Student 1", "Student 2", ...).
pub const PLACEHOLDER_STUDENT_PREFIX: &str = "Student";
