//! Saved seat arrangements and the archive that holds them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::seat::{placeholder_label, Seat, SeatPosition};
use crate::constants::SEAT_COUNT;

/// A named, timestamped snapshot of all seat labels.
///
/// The serialized form (`name`, `date`, `seats`) matches what earlier
/// versions of the classroom tool wrote to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrangement {
    /// User-given name
    pub name: String,
    /// Human-readable local timestamp of when it was saved
    pub date: String,
    /// Seat labels in row-major order, always `SEAT_COUNT` long
    pub seats: Vec<String>,
}

impl Arrangement {
    /// Snapshots the labels of `seats`.
    pub fn capture(name: impl Into<String>, date: impl Into<String>, seats: &[Seat]) -> Self {
        let mut arrangement = Self {
            name: name.into(),
            date: date.into(),
            seats: seats.iter().map(|seat| seat.label.clone()).collect(),
        };
        arrangement.normalize();
        arrangement
    }

    /// Label shown when choosing an arrangement to load.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.date)
    }

    /// Seat map entries (`"1열 1번"` -> label) in seat order.
    #[must_use]
    pub fn seat_map(&self) -> Vec<(String, String)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(index, label)| (SeatPosition::from_index(index).label(), label.clone()))
            .collect()
    }

    /// Forces the seat list to exactly `SEAT_COUNT` labels.
    ///
    /// Returns `true` if anything had to change.
    fn normalize(&mut self) -> bool {
        let original_len = self.seats.len();
        self.seats.truncate(SEAT_COUNT);
        while self.seats.len() < SEAT_COUNT {
            self.seats.push(placeholder_label(self.seats.len()));
        }
        original_len != SEAT_COUNT
    }
}

/// Append-only list of saved arrangements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrangementArchive {
    entries: Vec<Arrangement>,
}

impl ArrangementArchive {
    /// Creates an empty archive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an archive from its stored JSON text.
    ///
    /// Entries with the wrong number of seats are padded or truncated.
    pub fn from_json(text: &str) -> Result<Self> {
        let mut archive: Self =
            serde_json::from_str(text).context("Failed to parse saved arrangements")?;
        for entry in &mut archive.entries {
            if entry.normalize() {
                tracing::warn!(
                    name = %entry.name,
                    "Saved arrangement had the wrong number of seats and was normalized"
                );
            }
        }
        Ok(archive)
    }

    /// Serializes the archive to JSON text.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize saved arrangements")
    }

    /// Appends an arrangement.
    pub fn push(&mut self, arrangement: Arrangement) {
        self.entries.push(arrangement);
    }

    /// Arrangement at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arrangement> {
        self.entries.get(index)
    }

    /// All arrangements in save order.
    #[must_use]
    pub fn entries(&self) -> &[Arrangement] {
        &self.entries
    }

    /// Number of saved arrangements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been saved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_seats() -> Vec<Seat> {
        (0..SEAT_COUNT)
            .map(|i| {
                if i % 2 == 0 {
                    Seat::occupied_by(format!("Student {}", i + 1))
                } else {
                    Seat::empty(i)
                }
            })
            .collect()
    }

    #[test]
    fn test_capture_copies_labels_in_order() {
        let arrangement = Arrangement::capture("Math", "2026-03-02 09:00:00", &sample_seats());
        assert_eq!(arrangement.seats.len(), SEAT_COUNT);
        assert_eq!(arrangement.seats[0], "Student 1");
        assert_eq!(arrangement.seats[1], "2번");
        assert_eq!(arrangement.display_label(), "Math (2026-03-02 09:00:00)");
    }

    #[test]
    fn test_archive_json_shape() {
        let mut archive = ArrangementArchive::new();
        archive.push(Arrangement::capture("Math", "today", &sample_seats()));

        let json = archive.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["name"], "Math");
        assert_eq!(value[0]["date"], "today");
        assert_eq!(value[0]["seats"].as_array().unwrap().len(), SEAT_COUNT);
    }

    #[test]
    fn test_from_json_reads_legacy_entries() {
        let seats: Vec<String> = (1..=24).map(|i| format!("학생 {i}")).collect();
        let text = serde_json::json!([
            { "name": "발표수업 배치", "date": "2025. 3. 4. 오후 2:10:00", "seats": seats }
        ])
        .to_string();

        let archive = ArrangementArchive::from_json(&text).unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(archive.get(0).unwrap().seats[23], "학생 24");
    }

    #[test]
    fn test_from_json_normalizes_seat_count() {
        let text = r#"[{"name":"short","date":"d","seats":["A","B"]},
                       {"name":"long","date":"d","seats":["x","x","x","x","x","x","x","x","x","x",
                        "x","x","x","x","x","x","x","x","x","x","x","x","x","x","extra"]}]"#;
        let archive = ArrangementArchive::from_json(text).unwrap();
        assert_eq!(archive.entries()[0].seats.len(), SEAT_COUNT);
        assert_eq!(archive.entries()[0].seats[2], "3번");
        assert_eq!(archive.entries()[1].seats.len(), SEAT_COUNT);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(ArrangementArchive::from_json("{not json").is_err());
        assert!(ArrangementArchive::from_json(r#"{"name":"x"}"#).is_err());
    }

    #[test]
    fn test_seat_map_labels() {
        let arrangement = Arrangement::capture("Math", "d", &sample_seats());
        let map = arrangement.seat_map();
        assert_eq!(map.len(), SEAT_COUNT);
        assert_eq!(map[0], ("1열 1번".to_string(), "Student 1".to_string()));
        assert_eq!(map[6].0, "2열 1번");
    }
}
