//! Student roster.

use serde::{Deserialize, Serialize};

use crate::constants::{PLACEHOLDER_STUDENT_PREFIX, SEAT_COUNT};

/// The canonical list of enrollable student names.
///
/// A roster always holds exactly [`SEAT_COUNT`] names. Shorter inputs are padded
/// with placeholder names, longer ones are truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Creates the default roster of placeholder names.
    #[must_use]
    pub fn placeholders() -> Self {
        Self::from_names(std::iter::empty::<String>())
    }

    /// Builds a roster from `names`, padding to capacity with placeholders.
    ///
    /// Callers are expected to pass unique names; the roster does not deduplicate.
    /// Placeholder numbers whose name is already on the list are skipped, so
    /// padding never repeats a name.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).take(SEAT_COUNT).collect();
        let mut number = names.len();
        while names.len() < SEAT_COUNT {
            let placeholder = placeholder_student(number);
            number += 1;
            if !names.contains(&placeholder) {
                names.push(placeholder);
            }
        }
        Self { names }
    }

    /// All names in roster order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Whether `name` is on the roster.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of names (always [`SEAT_COUNT`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::placeholders()
    }
}

/// Placeholder student name for 0-based position `index` (`"Student 1"`, ...).
#[must_use]
pub fn placeholder_student(index: usize) -> String {
    format!("{PLACEHOLDER_STUDENT_PREFIX} {}", index + 1)
}

/// A roster name tagged with whether some occupied seat shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    /// Student name
    pub name: String,
    /// True when an occupied seat carries this name
    pub assigned: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        let roster = Roster::placeholders();
        assert_eq!(roster.len(), SEAT_COUNT);
        assert_eq!(roster.get(0), Some("Student 1"));
        assert_eq!(roster.get(23), Some("Student 24"));
    }

    #[test]
    fn test_from_names_pads_after_real_names() {
        let roster = Roster::from_names(["Kim", "Lee", "Park"]);
        assert_eq!(roster.len(), SEAT_COUNT);
        assert_eq!(&roster.names()[..3], ["Kim", "Lee", "Park"]);
        assert_eq!(roster.get(3), Some("Student 4"));
        assert_eq!(roster.get(23), Some("Student 24"));
    }

    #[test]
    fn test_padding_skips_placeholders_already_listed() {
        let roster = Roster::from_names(["Student 3", "Kim"]);
        assert_eq!(roster.len(), SEAT_COUNT);
        assert_eq!(&roster.names()[..3], ["Student 3", "Kim", "Student 4"]);
        assert_eq!(roster.get(23), Some("Student 25"));
        assert_eq!(roster.iter().filter(|name| *name == "Student 3").count(), 1);
    }

    #[test]
    fn test_from_names_truncates() {
        let names: Vec<String> = (0..30).map(|i| format!("Name {i}")).collect();
        let roster = Roster::from_names(names);
        assert_eq!(roster.len(), SEAT_COUNT);
        assert_eq!(roster.get(23), Some("Name 23"));
    }

    #[test]
    fn test_contains() {
        let roster = Roster::from_names(["Kim"]);
        assert!(roster.contains("Kim"));
        assert!(roster.contains("Student 2"));
        assert!(!roster.contains("Student 1"));
        assert!(!roster.contains("kim"));
    }
}
