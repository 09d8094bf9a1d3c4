//! Data models for seats, the roster and saved arrangements.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod arrangement;
pub mod roster;
pub mod seat;

// Re-export all model types
pub use arrangement::{Arrangement, ArrangementArchive};
pub use roster::{placeholder_student, Roster, RosterEntry};
pub use seat::{placeholder_label, Seat, SeatCounts, SeatPosition};
