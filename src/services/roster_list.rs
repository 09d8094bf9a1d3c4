//! Editable roster text and the rules for turning it into a roster.
//!
//! The roster manager edits a plain text buffer with one name per line. The
//! preview, the per-line remove action and the final submission all go through
//! [`parse_names`], so what the user sees is exactly what gets applied.

use std::collections::HashSet;

use crate::constants::SEAT_COUNT;
use crate::models::{Roster, Seat};

/// Splits `text` into names: one per line, trimmed, blank lines dropped.
#[must_use]
pub fn parse_names(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds the initial editor text.
///
/// Names of occupied seats come first in seat order, followed by roster names
/// that are not already listed.
#[must_use]
pub fn initial_text(seats: &[Seat], roster: &Roster) -> String {
    let mut names: Vec<String> = seats
        .iter()
        .filter(|seat| seat.occupied)
        .map(|seat| seat.label.clone())
        .collect();

    for name in roster.iter() {
        if !names.iter().any(|listed| listed == name) {
            names.push(name.to_string());
        }
    }

    names.join("\n")
}

/// Preview of the current buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterPreview {
    /// Names that would be applied (at most `SEAT_COUNT`)
    pub names: Vec<String>,
    /// Number of non-blank lines in the buffer
    pub total: usize,
}

impl RosterPreview {
    /// True when the buffer lists more names than there are seats.
    #[must_use]
    pub fn overflow(&self) -> bool {
        self.total > SEAT_COUNT
    }

    /// Warning shown above the preview when names will be dropped.
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        self.overflow().then(|| {
            format!(
                "{} names entered; only the first {SEAT_COUNT} will be applied.",
                self.total
            )
        })
    }
}

/// Text buffer edited in the roster manager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterListDraft {
    text: String,
}

impl RosterListDraft {
    /// Creates a draft holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Current buffer contents.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the buffer.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Re-parses the buffer for display.
    #[must_use]
    pub fn preview(&self) -> RosterPreview {
        let names = parse_names(&self.text);
        let total = names.len();
        RosterPreview {
            names: names.into_iter().take(SEAT_COUNT).collect(),
            total,
        }
    }

    /// Removes the `index`-th parsed name and re-serializes the buffer.
    ///
    /// Blank lines and surrounding whitespace are normalized away in the process.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        let mut names = parse_names(&self.text);
        if index >= names.len() {
            return None;
        }
        let removed = names.remove(index);
        self.text = names.join("\n");
        Some(removed)
    }
}

/// A roster list ready to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSubmission {
    /// First `SEAT_COUNT` parsed names, duplicates included
    pub names: Vec<String>,
    /// `names` with later duplicates removed, order preserved
    pub unique: Vec<String>,
}

impl RosterSubmission {
    /// Parses `text` and truncates before looking for duplicates.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let names: Vec<String> = parse_names(text).into_iter().take(SEAT_COUNT).collect();
        let mut seen = HashSet::new();
        let unique = names
            .iter()
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect();
        Self { names, unique }
    }

    /// True when no names were entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True when some name appears more than once.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.unique.len() != self.names.len()
    }

    /// Builds the roster, padding with placeholder names.
    #[must_use]
    pub fn into_roster(self) -> Roster {
        Roster::from_names(self.unique)
    }
}
