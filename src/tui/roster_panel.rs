//! Roster list with assignment markers and seat totals.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{ChartView, Focus, Theme};

/// Roster panel widget
pub struct RosterPanel;

impl RosterPanel {
    /// Render the roster list above the occupancy counts
    pub fn render(f: &mut Frame, area: Rect, view: &ChartView, theme: &Theme) {
        let focused = view.focus == Focus::Roster;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(4)])
            .split(area);

        let assigned = view.roster.iter().filter(|entry| entry.assigned).count();
        let items: Vec<ListItem> = view
            .roster
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let (marker, style) = if entry.assigned {
                    ("✓ ", Style::default().fg(theme.success))
                } else {
                    ("  ", Style::default().fg(theme.text))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(theme.text_muted)),
                    Span::styled(marker, Style::default().fg(theme.success)),
                    Span::styled(entry.name.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" Roster ({assigned}/{}) ", view.roster.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if focused {
                        theme.primary
                    } else {
                        theme.text_muted
                    })),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        if focused && !view.roster.is_empty() {
            state.select(Some(view.roster_cursor.min(view.roster.len() - 1)));
        }
        f.render_stateful_widget(list, chunks[0], &mut state);

        let counts = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Occupied:   ", Style::default().fg(theme.text_secondary)),
                Span::styled(
                    view.counts.occupied.to_string(),
                    Style::default()
                        .fg(theme.seat_occupied)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Unoccupied: ", Style::default().fg(theme.text_secondary)),
                Span::styled(
                    view.counts.unoccupied.to_string(),
                    Style::default().fg(theme.text_muted),
                ),
            ]),
        ])
        .block(Block::default().title(" Seats ").borders(Borders::ALL));
        f.render_widget(counts, chunks[1]);
    }
}
