//! Seat data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{SEAT_COLS, SEAT_COUNT};

/// A single seat in the classroom grid.
///
/// Occupancy is tracked explicitly instead of being inferred from the label, so a
/// restored label that is not on the roster can be shown without counting as occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Whether a student currently sits here
    pub occupied: bool,
    /// Displayed text: a student name or the positional placeholder
    pub label: String,
}

impl Seat {
    /// Creates an empty seat showing the placeholder for `index`.
    #[must_use]
    pub fn empty(index: usize) -> Self {
        Self {
            occupied: false,
            label: placeholder_label(index),
        }
    }

    /// Creates an occupied seat for `name`.
    pub fn occupied_by(name: impl Into<String>) -> Self {
        Self {
            occupied: true,
            label: name.into(),
        }
    }

    /// Marks the seat as occupied by `name`.
    pub fn assign(&mut self, name: impl Into<String>) {
        self.label = name.into();
        self.occupied = true;
    }

    /// Empties the seat and restores the placeholder for `index`.
    pub fn vacate(&mut self, index: usize) {
        self.label = placeholder_label(index);
        self.occupied = false;
    }
}

/// Returns the placeholder label for an empty seat (`"1번"` .. `"24번"`).
#[must_use]
pub fn placeholder_label(index: usize) -> String {
    format!("{}번", index + 1)
}

/// Row/column coordinates of a seat (both 0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatPosition {
    /// Row index (0 = front)
    pub row: usize,
    /// Column index (0 = left)
    pub col: usize,
}

impl SeatPosition {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of the seat at row-major `index`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: index / SEAT_COLS,
            col: index % SEAT_COLS,
        }
    }

    /// Row-major index of this position, or `None` if outside the grid.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        let index = self.row * SEAT_COLS + self.col;
        if self.col < SEAT_COLS && index < SEAT_COUNT {
            Some(index)
        } else {
            None
        }
    }

    /// Human-readable label used by the seat map (`"2열 3번"`).
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}열 {}번", self.row + 1, self.col + 1)
    }
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Number of occupied and unoccupied seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeatCounts {
    /// Seats with a student
    pub occupied: usize,
    /// Remaining seats (`SEAT_COUNT - occupied`)
    pub unoccupied: usize,
}

impl SeatCounts {
    /// Counts occupancy across `seats`.
    #[must_use]
    pub fn of(seats: &[Seat]) -> Self {
        let occupied = seats.iter().filter(|seat| seat.occupied).count();
        Self {
            occupied,
            unoccupied: SEAT_COUNT.saturating_sub(occupied),
        }
    }
}
