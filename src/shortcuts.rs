//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions on the main chart screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Move the cursor up
    NavigateUp,
    /// Move the cursor down
    NavigateDown,
    /// Move the cursor left
    NavigateLeft,
    /// Move the cursor right
    NavigateRight,
    /// Switch between seat grid and roster list
    ToggleFocus,

    // === SEATS & ROSTER ===
    /// Activate the focused seat or roster entry
    Activate,
    /// Shuffle all seats
    Shuffle,
    /// Empty all seats
    Reset,
    /// Open the roster manager
    ManageRoster,
    /// Show the seat map
    ShowSeatMap,

    // === ARRANGEMENTS ===
    /// Save the current arrangement
    SaveArrangement,
    /// Load a saved arrangement
    LoadArrangement,

    // === HELP ===
    /// Open the help overlay
    ToggleHelp,

    // === GENERAL ===
    /// Leave the application
    Quit,
}

impl Action {
    /// Stable action identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::NavigateLeft => "navigate_left",
            Self::NavigateRight => "navigate_right",
            Self::ToggleFocus => "toggle_focus",
            Self::Activate => "activate",
            Self::Shuffle => "shuffle",
            Self::Reset => "reset",
            Self::ManageRoster => "manage_roster",
            Self::ShowSeatMap => "show_seat_map",
            Self::SaveArrangement => "save_arrangement",
            Self::LoadArrangement => "load_arrangement",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a `KeyEvent`.
    ///
    /// Shift is dropped for character keys since the character already carries it.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }
}

/// Maps key events to actions.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        // === NAVIGATION ===
        self.register(K::Up, M::NONE, Action::NavigateUp);
        self.register(K::Down, M::NONE, Action::NavigateDown);
        self.register(K::Left, M::NONE, Action::NavigateLeft);
        self.register(K::Right, M::NONE, Action::NavigateRight);
        self.register(K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(K::Char('l'), M::NONE, Action::NavigateRight);
        self.register(K::Tab, M::NONE, Action::ToggleFocus);
        self.register(K::BackTab, M::NONE, Action::ToggleFocus);
        self.register(K::BackTab, M::SHIFT, Action::ToggleFocus);

        // === SEATS & ROSTER ===
        self.register(K::Enter, M::NONE, Action::Activate);
        self.register(K::Char(' '), M::NONE, Action::Activate);
        self.register(K::Char('s'), M::NONE, Action::Shuffle);
        self.register(K::Char('s'), M::CONTROL, Action::Shuffle);
        self.register(K::Char('r'), M::NONE, Action::Reset);
        self.register(K::Char('r'), M::CONTROL, Action::Reset);
        self.register(K::Char('m'), M::NONE, Action::ManageRoster);
        self.register(K::Char('i'), M::NONE, Action::ShowSeatMap);

        // === ARRANGEMENTS ===
        self.register(K::Char('w'), M::NONE, Action::SaveArrangement);
        self.register(K::Char('k'), M::CONTROL, Action::SaveArrangement);
        self.register(K::Char('o'), M::NONE, Action::LoadArrangement);
        self.register(K::Char('l'), M::CONTROL, Action::LoadArrangement);

        // === HELP ===
        self.register(K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(K::Char('q'), M::NONE, Action::Quit);
        self.register(K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings
            .insert(KeyBinding::new(code, modifiers), action);
    }

    /// Look up the action for a key event.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }

    /// Check if a key event triggers a specific action.
    #[must_use]
    pub fn matches(&self, event: KeyEvent, action: Action) -> bool {
        self.lookup(event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
