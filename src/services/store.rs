//! Durable key-value storage for small text blobs.
//!
//! The controller only needs `get`/`set` on string values. [`JsonFileStore`] keeps
//! all keys in one JSON object on disk; [`MemoryStore`] is the in-process variant.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::ARCHIVE_STORE_KEY;
use crate::models::ArrangementArchive;

/// File name of the JSON store inside the data directory.
pub const STORE_FILE_NAME: &str = "storage.json";

/// Minimal key-value storage contract.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Key-value store backed by a single JSON object file.
///
/// Writes use temp file + rename so the file is never left half-written.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store named [`STORE_FILE_NAME`] inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(STORE_FILE_NAME))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read store file: {}", self.path.display()))?;

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse store file: {}", self.path.display()))
    }

    fn write_all(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(map).context("Failed to serialize store contents")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp store file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!("Failed to rename temp store file to: {}", self.path.display())
        })?;

        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.read_all()?;
        match map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(other) => anyhow::bail!(
                "Store entry '{key}' in {} is not a string: {other}",
                self.path.display()
            ),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_all()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_all(&map)?;
        tracing::debug!(key, path = %self.path.display(), "Store entry written");
        Ok(())
    }
}

/// In-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the arrangement archive; a missing key is an empty archive.
pub fn load_archive<S: KeyValueStore + ?Sized>(store: &S) -> Result<ArrangementArchive> {
    match store.get(ARCHIVE_STORE_KEY)? {
        Some(text) => ArrangementArchive::from_json(&text),
        None => Ok(ArrangementArchive::new()),
    }
}

/// Writes the whole arrangement archive.
pub fn persist_archive<S: KeyValueStore + ?Sized>(
    store: &mut S,
    archive: &ArrangementArchive,
) -> Result<()> {
    let text = archive.to_json()?;
    store.set(ARCHIVE_STORE_KEY, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Arrangement, Seat};
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp_dir.path());
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_file_store_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::in_dir(&temp_dir.path().join("nested"));

        store.set("a", "first").unwrap();
        store.set("b", "second").unwrap();
        store.set("a", "replaced").unwrap();

        let reopened = JsonFileStore::in_dir(&temp_dir.path().join("nested"));
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("replaced"));
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("second"));
        assert!(!temp_dir.path().join("nested/storage.json.tmp").exists());
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(STORE_FILE_NAME), "[1, 2").unwrap();
        let store = JsonFileStore::in_dir(temp_dir.path());
        assert!(store.get("a").is_err());
    }

    #[test]
    fn test_file_store_rejects_non_string_value() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(STORE_FILE_NAME), r#"{"a": 5}"#).unwrap();
        let store = JsonFileStore::in_dir(temp_dir.path());
        assert!(store.get("a").is_err());
    }

    #[test]
    fn test_archive_round_trip_through_store() {
        let mut store = MemoryStore::new();
        assert!(load_archive(&store).unwrap().is_empty());

        let seats: Vec<Seat> = (0..24).map(Seat::empty).collect();
        let mut archive = ArrangementArchive::new();
        archive.push(Arrangement::capture("Monday", "2026-01-05 08:30:00", &seats));
        persist_archive(&mut store, &archive).unwrap();

        assert_eq!(load_archive(&store).unwrap(), archive);
    }
}
