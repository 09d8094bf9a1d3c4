//! Service layer for business logic.
//!
//! This module contains services that encapsulate the seating rules and
//! persistence, independent of how the chart is presented.

pub mod roster_list;
pub mod shuffle;
pub mod store;

// Re-export commonly used types and functions
pub use roster_list::{RosterListDraft, RosterPreview, RosterSubmission};
pub use shuffle::shuffled;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
