//! Help overlay listing features and keyboard shortcuts.
//!
//! Opened with `?`, and at startup as a welcome screen when
//! `ui.show_welcome_on_startup` is set.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::component::Component;
use super::{centered_rect, Theme};
use crate::constants::{APP_NAME, SEAT_COLS, SEAT_COUNT, SEAT_ROWS};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "NAVIGATION",
        &[
            ("Arrow Keys / hjkl", "Move the cursor"),
            ("Tab", "Switch between seats and roster"),
            ("Enter / Space", "Open the focused seat or student"),
        ],
    ),
    (
        "SEATS",
        &[
            ("s / Ctrl+S", "Shuffle every seat"),
            ("r / Ctrl+R", "Empty every seat"),
            ("i", "Show the seat map"),
        ],
    ),
    (
        "ARRANGEMENTS",
        &[
            ("w / Ctrl+K", "Save the current arrangement"),
            ("o / Ctrl+L", "Load a saved arrangement"),
        ],
    ),
    (
        "ROSTER",
        &[
            ("m", "Manage the roster (one name per line)"),
            ("Ctrl+S (in manager)", "Apply the list"),
            ("Ctrl+D (in manager)", "Remove the name under the cursor"),
            ("Ctrl+R (in manager)", "Reload the current list"),
            ("Ctrl+X (in manager)", "Clear the list"),
        ],
    ),
    (
        "SYSTEM",
        &[
            ("?", "Toggle this help"),
            ("Esc", "Close the current dialog"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

/// Events emitted by the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpOverlayEvent {
    /// The overlay was dismissed
    Closed,
}

/// Scrollable help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    /// Current scroll offset (line number)
    scroll_offset: usize,
    /// Total number of content lines
    total_lines: usize,
    /// Show the welcome header
    welcome: bool,
}

impl HelpOverlay {
    /// Plain help overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_header(false)
    }

    /// Help overlay with the welcome header shown at startup.
    #[must_use]
    pub fn welcome() -> Self {
        Self::with_header(true)
    }

    fn with_header(welcome: bool) -> Self {
        let total_lines = content(&Theme::dark(), welcome).len();
        Self {
            scroll_offset: 0,
            total_lines,
            welcome,
        }
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    fn page_down(&mut self, visible_height: usize) {
        self.scroll_offset =
            (self.scroll_offset + visible_height).min(self.total_lines.saturating_sub(1));
    }

    const fn page_up(&mut self, visible_height: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height);
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

fn content(theme: &Theme, welcome: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if welcome {
        lines.push(Line::from(Span::styled(
            format!("Welcome to {APP_NAME}!"),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        for feature in [
            format!("• {SEAT_COUNT} seats in {SEAT_ROWS} rows of {SEAT_COLS}, filled from the roster"),
            "• Shuffle for a random seating, or fill seats one by one".to_string(),
            "• Save arrangements by name and bring them back later".to_string(),
            "• Paste a class list into the roster manager".to_string(),
        ] {
            lines.push(Line::from(Span::styled(
                feature,
                Style::default().fg(theme.text),
            )));
        }
        lines.push(Line::from(""));
    }

    for (title, bindings) in SECTIONS {
        lines.push(Line::from(Span::styled(
            format!("═══ {title} ═══"),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        for (keys, action) in *bindings {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{keys:<22}"), Style::default().fg(theme.success)),
                Span::styled(*action, Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines
}

impl Component for HelpOverlay {
    type Event = HelpOverlayEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') => {
                return Some(HelpOverlayEvent::Closed)
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(10),
            KeyCode::PageDown => self.page_down(10),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::End => self.scroll_offset = self.total_lines.saturating_sub(1),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(70, 80, area);
        f.render_widget(Clear, area);

        let title = if self.welcome { " Welcome " } else { " Help " };
        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let lines = content(theme, self.welcome);
        let scroll = u16::try_from(self.scroll_offset).unwrap_or(u16::MAX);
        f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), chunks[0]);

        let mut scrollbar_state = ScrollbarState::new(self.total_lines).position(self.scroll_offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            chunks[0],
            &mut scrollbar_state,
        );

        let footer = Line::from(vec![
            Span::styled(
                "↑↓/PgUp/PgDn",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Scroll  "),
            Span::styled(
                "Esc/?",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Close"),
        ]);
        f.render_widget(
            Paragraph::new(footer).style(Style::default().fg(theme.text_muted)),
            chunks[1],
        );
    }
}
