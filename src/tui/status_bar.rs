//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{ChartView, Focus, Theme};

const SEAT_HINTS: &[(&str, &str)] = &[
    ("Enter", "Edit seat"),
    ("s", "Shuffle"),
    ("r", "Reset"),
    ("w", "Save"),
    ("o", "Load"),
];

const ROSTER_HINTS: &[(&str, &str)] = &[
    ("Enter", "Find seat"),
    ("m", "Manage roster"),
    ("i", "Seat map"),
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: status message (or hints) above the help line
    pub fn render(f: &mut Frame, area: Rect, view: &ChartView, theme: &Theme) {
        let first_line = view.status.as_ref().map_or_else(
            || Self::hints_line(view.focus, theme),
            |status| {
                Line::from(Span::styled(
                    status.clone(),
                    Style::default().fg(theme.success),
                ))
            },
        );

        let status = Paragraph::new(vec![first_line, Self::help_line(theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn hints_line(focus: Focus, theme: &Theme) -> Line<'static> {
        let hints = match focus {
            Focus::Seats => SEAT_HINTS,
            Focus::Roster => ROSTER_HINTS,
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }

    fn help_line(theme: &Theme) -> Line<'static> {
        let mut spans = vec![Span::styled("Help: ", Style::default().fg(theme.primary))];
        for (i, (key, action)) in [("Tab", "Switch panel"), ("?", "Help"), ("q", "Quit")]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action));
        }
        Line::from(spans)
    }
}
