//! End-to-end tests for `seatplan archive` commands.

mod fixtures;
use fixtures::*;

use std::fs;

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_archive_list_empty() {
    let dirs = TestDirs::new();
    let output = dirs
        .command(&["archive", "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "List should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No saved arrangements"));
}

#[test]
fn test_archive_list_shows_saved_entries() {
    let dirs = TestDirs::new();
    write_archive(
        &dirs.data_dir,
        vec![
            arrangement("Monday", "2026-03-02 08:30:00", &["Kim", "Lee"]),
            arrangement("Exam", "2026-03-05 09:00:00", &["Park"]),
        ],
    );

    let output = dirs
        .command(&["archive", "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Saved arrangements (2)"));
    assert!(stdout.contains("Monday (2026-03-02 08:30:00)"));
    assert!(stdout.contains("Exam (2026-03-05 09:00:00)"));
}

#[test]
fn test_archive_list_json() {
    let dirs = TestDirs::new();
    write_archive(
        &dirs.data_dir,
        vec![arrangement("Monday", "2026-03-02 08:30:00", &["Kim"])],
    );

    let output = dirs
        .command(&["archive", "list", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    let entries = result.as_array().expect("Should be an array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["index"], 0);
    assert_eq!(entries[0]["name"], "Monday");
    assert_eq!(entries[0]["date"], "2026-03-02 08:30:00");
}

#[test]
fn test_global_data_dir_flag_overrides_environment() {
    let dirs = TestDirs::new();
    let other = tempfile::TempDir::new().expect("Failed to create temp dir");
    write_archive(
        other.path(),
        vec![arrangement("Elsewhere", "2026-01-01 10:00:00", &[])],
    );

    let data_dir = other.path().to_string_lossy().to_string();
    let output = dirs
        .command(&["--data-dir", &data_dir, "archive", "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Elsewhere"));
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_archive_show_prints_seat_map() {
    let dirs = TestDirs::new();
    write_archive(
        &dirs.data_dir,
        vec![arrangement("Monday", "2026-03-02 08:30:00", &["Kim", "Lee"])],
    );

    let output = dirs
        .command(&["archive", "show", "0"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Monday"));
    assert!(stdout.contains("1열 1번: Kim"));
    assert!(stdout.contains("1열 2번: Lee"));
    assert!(stdout.contains("1열 3번: 3번"));
    assert!(stdout.contains("4열 6번: 24번"));
}

#[test]
fn test_archive_show_json() {
    let dirs = TestDirs::new();
    write_archive(
        &dirs.data_dir,
        vec![
            arrangement("Monday", "2026-03-02 08:30:00", &[]),
            arrangement("Exam", "2026-03-05 09:00:00", &["Park"]),
        ],
    );

    let output = dirs
        .command(&["archive", "show", "1", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["index"], 1);
    assert_eq!(result["name"], "Exam");
    let seats = result["seats"].as_array().expect("seats array");
    assert_eq!(seats.len(), 24);
    assert_eq!(seats[0]["position"], "1열 1번");
    assert_eq!(seats[0]["label"], "Park");
}

#[test]
fn test_archive_show_missing_index_is_validation_error() {
    let dirs = TestDirs::new();
    let output = dirs
        .command(&["archive", "show", "3"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No saved arrangement at index 3"));
}

#[test]
fn test_archive_corrupt_store_is_io_error() {
    let dirs = TestDirs::new();
    fs::write(
        dirs.data_dir.join("storage.json"),
        r#"{"classroomArrangements": "not json"}"#,
    )
    .expect("Failed to write store");

    let output = dirs
        .command(&["archive", "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load saved arrangements"));
    assert!(stderr.contains("storage.json"));
}
