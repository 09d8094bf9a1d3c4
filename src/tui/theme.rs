//! Theme system for consistent UI colors across dark and light modes.
//!
//! The theme follows the user's `ThemeMode`; `Auto` asks the OS through
//! `dark-light` and falls back to dark.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Borders, titles and emphasis
    pub primary: Color,
    /// Highlights, selections and focus
    pub accent: Color,
    /// Confirmations and success messages
    pub success: Color,
    /// Errors and destructive actions
    pub error: Color,
    /// Warnings and cautions
    pub warning: Color,

    // Text hierarchy
    /// Primary text content
    pub text: Color,
    /// Labels and less important content
    pub text_secondary: Color,
    /// Help text, disabled items and placeholders
    pub text_muted: Color,

    // Backgrounds
    /// Main background
    pub background: Color,
    /// Selection background
    pub highlight_bg: Color,
    /// Panels and elevated elements
    pub surface: Color,

    // Seats
    /// Label color of an occupied seat
    pub seat_occupied: Color,
    /// Label color of an empty seat
    pub seat_empty: Color,
    /// Background of a seat that just changed
    pub seat_flash: Color,
}

impl Theme {
    /// Resolves the theme for a user preference.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Detects the OS theme and returns the matching Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Light => Self::light(),
            // Dark and undetectable both fall back to dark
            _ => Self::dark(),
        }
    }

    /// Dark theme for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),

            seat_occupied: Color::White,
            seat_empty: Color::DarkGray,
            seat_flash: Color::Rgb(0, 95, 0),
        }
    }

    /// Light theme for light terminal backgrounds.
    ///
    /// Accent colors are darkened so they stay readable on white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),

            seat_occupied: Color::Black,
            seat_empty: Color::Rgb(150, 150, 150),
            seat_flash: Color::Rgb(200, 240, 200),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
