//! Seat grid widget for rendering the classroom layout

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::{ChartView, Focus, Theme};
use crate::constants::{SEAT_COLS, SEAT_ROWS};

/// Width of one seat cell, borders excluded.
const CELL_WIDTH: u16 = 12;

/// Seat grid widget renders the seats row by row, front row first
pub struct SeatGrid;

impl SeatGrid {
    /// Render the seat grid
    pub fn render(f: &mut Frame, area: Rect, view: &ChartView, theme: &Theme) {
        let focused = view.focus == Focus::Seats;
        let block = Block::default()
            .title(" Seats ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                theme.primary
            } else {
                theme.text_muted
            }));

        if view.seats.is_empty() {
            f.render_widget(Paragraph::new("No seats").block(block), area);
            return;
        }

        let inner = block.inner(area);
        f.render_widget(block, area);

        // Front of the room sits above the first row
        let board = Paragraph::new(Line::from(Span::styled(
            "[ front ]",
            Style::default().fg(theme.text_muted),
        )))
        .alignment(Alignment::Center);
        f.render_widget(board, Rect { height: inner.height.min(1), ..inner });

        let table_area = Rect {
            y: inner.y.saturating_add(2),
            height: inner.height.saturating_sub(2),
            ..inner
        };

        let rows: Vec<Row> = (0..SEAT_ROWS)
            .map(|row| {
                let cells: Vec<Cell> = (0..SEAT_COLS)
                    .map(|col| {
                        let index = row * SEAT_COLS + col;
                        Self::seat_cell(view, index, focused, theme)
                    })
                    .collect();
                Row::new(cells).height(2)
            })
            .collect();

        let table = Table::new(rows, vec![Constraint::Length(CELL_WIDTH); SEAT_COLS])
            .column_spacing(1);
        f.render_widget(table, table_area);
    }

    fn seat_cell<'a>(view: &'a ChartView, index: usize, focused: bool, theme: &Theme) -> Cell<'a> {
        let Some(seat) = view.seats.get(index) else {
            return Cell::from("");
        };

        let label = Self::format_label(&seat.label);
        let mut style = if seat.occupied {
            Style::default()
                .fg(theme.seat_occupied)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.seat_empty)
        };

        if view.is_flashing(index) {
            style = style.bg(theme.seat_flash);
        }
        if focused && index == view.seat_cursor {
            style = Style::default().fg(theme.background).bg(theme.accent);
        }

        Cell::from(format!("[{label:^width$}]", width = usize::from(CELL_WIDTH) - 2)).style(style)
    }

    /// Truncate a label to fit one cell
    fn format_label(label: &str) -> String {
        let max = usize::from(CELL_WIDTH) - 2;
        if label.chars().count() <= max {
            return label.to_string();
        }
        let mut short: String = label.chars().take(max - 1).collect();
        short.push('…');
        short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_label_truncates_long_names() {
        assert_eq!(SeatGrid::format_label("Kim"), "Kim");
        assert_eq!(SeatGrid::format_label("Bartholomew Smith"), "Bartholom…");
        assert_eq!(SeatGrid::format_label("Bartholomew Smith").chars().count(), 10);
    }
}
