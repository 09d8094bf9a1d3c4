//! Presentation contract: what the controller pushes to the screen.

use anyhow::Result;

use crate::models::{RosterEntry, Seat, SeatCounts};

/// Input for the roster management modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEditRequest {
    /// Text the editor opens with
    pub text: String,
    /// Text restored by the editor's "reload current list" action
    pub current: String,
}

/// Grid of seats, roster list and roster modal host.
pub trait PresentationSurface {
    /// Shows all seats (row-major, `SEAT_COUNT` long).
    fn render_seats(&mut self, seats: &[Seat]) -> Result<()>;

    /// Rebuilds the roster list from scratch.
    fn render_roster(&mut self, entries: &[RosterEntry]) -> Result<()>;

    /// Shows occupied / unoccupied totals.
    fn render_counts(&mut self, counts: SeatCounts) -> Result<()>;

    /// Draws attention to the seat at `index`.
    fn highlight_seat(&mut self, index: usize) -> Result<()>;

    /// Opens the roster modal; returns the submitted text or `None` if closed.
    fn edit_roster(&mut self, request: &RosterEditRequest) -> Result<Option<String>>;
}
