//! Component trait pattern for TUI popups.
//!
//! Every modal in the chart is a self-contained component: it owns its state,
//! handles keyboard input, renders itself and emits an event when it is done.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component emits when it closes
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` once the component is finished; `None` while it
    /// handled the key internally.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within `area` (usually the whole frame).
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Outcome of a prompt-style component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent<T> {
    /// The user confirmed a value
    Submitted(T),
    /// The user backed out
    Cancelled,
}

impl<T> PromptEvent<T> {
    /// Converts into `Some(value)` for a submission.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Submitted(value) => Some(value),
            Self::Cancelled => None,
        }
    }
}
