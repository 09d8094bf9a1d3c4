//! Roster manager: a multi-line name editor with a live preview.
//!
//! The editor works on lines and a character cursor; every edit is mirrored
//! into a [`RosterListDraft`] so the preview and the per-line remove action see
//! exactly what will be submitted.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::component::Component;
use super::{centered_rect, Theme};
use crate::constants::SEAT_COUNT;
use crate::controller::RosterEditRequest;
use crate::services::RosterListDraft;

/// Events emitted by the roster manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterManagerEvent {
    /// Submit the buffer as the new roster
    Apply(String),
    /// Close without applying
    Closed,
}

/// Roster manager component state.
#[derive(Debug, Clone)]
pub struct RosterManager {
    lines: Vec<String>,
    row: usize,
    col: usize,
    draft: RosterListDraft,
    current: String,
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

impl RosterManager {
    /// Opens the editor on `request.text`, cursor at the end.
    #[must_use]
    pub fn new(request: &RosterEditRequest) -> Self {
        let mut manager = Self {
            lines: Vec::new(),
            row: 0,
            col: 0,
            draft: RosterListDraft::default(),
            current: request.current.clone(),
        };
        manager.load_text(&request.text);
        manager.row = manager.lines.len() - 1;
        manager.col = char_len(&manager.lines[manager.row]);
        manager
    }

    /// Buffer contents as they would be submitted.
    #[must_use]
    pub fn text(&self) -> &str {
        self.draft.text()
    }

    /// Cursor position as (line, character).
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    fn load_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.row = self.row.min(self.lines.len() - 1);
        self.col = self.col.min(char_len(&self.lines[self.row]));
        self.sync();
    }

    fn sync(&mut self) {
        self.draft.set_text(self.lines.join("\n"));
    }

    fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.row];
        let at = byte_index(line, self.col);
        line.insert(at, c);
        self.col += 1;
        self.sync();
    }

    fn split_line(&mut self) {
        let line = &mut self.lines[self.row];
        let at = byte_index(line, self.col);
        let rest = line.split_off(at);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
        self.sync();
    }

    fn backspace(&mut self) {
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let at = byte_index(line, self.col - 1);
            line.remove(at);
            self.col -= 1;
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&line);
        } else {
            return;
        }
        self.sync();
    }

    fn delete(&mut self) {
        let len = char_len(&self.lines[self.row]);
        if self.col < len {
            let line = &mut self.lines[self.row];
            let at = byte_index(line, self.col);
            line.remove(at);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        } else {
            return;
        }
        self.sync();
    }

    fn move_vertical(&mut self, down: bool) {
        if down && self.row + 1 < self.lines.len() {
            self.row += 1;
        } else if !down && self.row > 0 {
            self.row -= 1;
        }
        self.col = self.col.min(char_len(&self.lines[self.row]));
    }

    fn move_horizontal(&mut self, right: bool) {
        let len = char_len(&self.lines[self.row]);
        if right {
            if self.col < len {
                self.col += 1;
            } else if self.row + 1 < self.lines.len() {
                self.row += 1;
                self.col = 0;
            }
        } else if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
        }
    }

    /// Removes the name on the cursor line; blank lines are left alone.
    fn remove_current_name(&mut self) {
        if self.lines[self.row].trim().is_empty() {
            return;
        }
        let index = self.lines[..self.row]
            .iter()
            .filter(|line| !line.trim().is_empty())
            .count();
        if let Some(name) = self.draft.remove(index) {
            tracing::debug!(%name, "Removed name from roster draft");
            let text = self.draft.text().to_string();
            self.col = 0;
            self.load_text(&text);
        }
    }
}

impl Component for RosterManager {
    type Event = RosterManagerEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Some(RosterManagerEvent::Closed),
            KeyCode::F(2) => return Some(RosterManagerEvent::Apply(self.text().to_string())),
            KeyCode::Char('s') if ctrl => {
                return Some(RosterManagerEvent::Apply(self.text().to_string()))
            }
            KeyCode::Char('d') if ctrl => self.remove_current_name(),
            KeyCode::Char('r') if ctrl => {
                let current = self.current.clone();
                self.load_text(&current);
            }
            KeyCode::Char('x') if ctrl => {
                self.draft.clear();
                self.lines = vec![String::new()];
                self.row = 0;
                self.col = 0;
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert_char(c);
            }
            KeyCode::Enter => self.split_line(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Up => self.move_vertical(false),
            KeyCode::Down => self.move_vertical(true),
            KeyCode::Left => self.move_horizontal(false),
            KeyCode::Right => self.move_horizontal(true),
            KeyCode::Home => self.col = 0,
            KeyCode::End => self.col = char_len(&self.lines[self.row]),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(80, 80, area);
        f.render_widget(Clear, area);

        let outer = Block::default()
            .title(" Manage Roster ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(inner);
        let columns = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[0]);

        self.render_editor(f, columns[0], theme);
        self.render_preview(f, columns[1], theme);

        let key = |k: &'static str| {
            Span::styled(
                k,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let help = vec![
            Line::from(vec![
                key("Ctrl+S/F2"),
                Span::raw(" Apply  "),
                key("Ctrl+D"),
                Span::raw(" Remove line  "),
                key("Ctrl+R"),
                Span::raw(" Reload current  "),
                key("Ctrl+X"),
                Span::raw(" Clear  "),
                key("Esc"),
                Span::raw(" Close"),
            ]),
            Line::from(format!(
                "One name per line. Blank lines are ignored; at most {SEAT_COUNT} names are used."
            )),
        ];
        f.render_widget(
            Paragraph::new(help).style(Style::default().fg(theme.text_muted)),
            rows[1],
        );
    }
}

impl RosterManager {
    fn render_editor(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" Names ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let visible = usize::from(inner.height.max(1));
        let first = (self.row + 1).saturating_sub(visible);
        let cursor_style = Style::default()
            .fg(theme.background)
            .bg(theme.accent);

        let lines: Vec<Line> = self
            .lines
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .map(|(i, line)| {
                if i != self.row {
                    return Line::from(Span::styled(line.as_str(), Style::default().fg(theme.text)));
                }
                let at = byte_index(line, self.col);
                let (before, rest) = line.split_at(at);
                let mut chars = rest.chars();
                let under = chars.next().map_or_else(|| " ".to_string(), String::from);
                Line::from(vec![
                    Span::styled(before, Style::default().fg(theme.text)),
                    Span::styled(under, cursor_style),
                    Span::styled(chars.as_str(), Style::default().fg(theme.text)),
                ])
            })
            .collect();
        f.render_widget(Paragraph::new(lines), inner);
    }

    fn render_preview(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let preview = self.draft.preview();
        let block = Block::default()
            .title(format!(" Preview ({}/{SEAT_COUNT}) ", preview.names.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let warning = preview.warning();
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if warning.is_some() { 2 } else { 0 }),
                Constraint::Min(1),
            ])
            .split(inner);

        if let Some(warning) = warning {
            f.render_widget(
                Paragraph::new(warning)
                    .style(Style::default().fg(theme.warning))
                    .wrap(Wrap { trim: true }),
                chunks[0],
            );
        }

        if preview.names.is_empty() {
            f.render_widget(
                Paragraph::new("No names entered").style(Style::default().fg(theme.text_muted)),
                chunks[1],
            );
            return;
        }

        let items: Vec<ListItem> = preview
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(theme.text_muted)),
                    Span::styled(name.clone(), Style::default().fg(theme.text)),
                ]))
            })
            .collect();
        f.render_widget(List::new(items), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str) -> RosterEditRequest {
        RosterEditRequest {
            text: text.to_string(),
            current: "Kim\nLee".to_string(),
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(manager: &mut RosterManager, text: &str) {
        for c in text.chars() {
            manager.handle_input(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut manager = RosterManager::new(&request("Kim"));
        assert_eq!(manager.cursor(), (0, 3));

        manager.handle_input(press(KeyCode::Enter));
        type_str(&mut manager, "박지우");
        assert_eq!(manager.text(), "Kim\n박지우");
        assert_eq!(manager.cursor(), (1, 3));

        manager.handle_input(press(KeyCode::Left));
        manager.handle_input(press(KeyCode::Backspace));
        assert_eq!(manager.text(), "Kim\n박우");
    }

    #[test]
    fn test_backspace_at_line_start_joins_lines() {
        let mut manager = RosterManager::new(&request("Ann\nBo"));
        manager.handle_input(press(KeyCode::Home));
        manager.handle_input(press(KeyCode::Backspace));
        assert_eq!(manager.text(), "AnnBo");
        assert_eq!(manager.cursor(), (0, 3));
    }

    #[test]
    fn test_remove_current_name_skips_blank_lines() {
        let mut manager = RosterManager::new(&request("Ann\n\nBo\nCy"));
        manager.handle_input(press(KeyCode::Up));
        assert_eq!(manager.cursor().0, 2);

        manager.handle_input(ctrl('d'));
        assert_eq!(manager.text(), "Ann\nCy");
        assert_eq!(manager.cursor(), (1, 0));

        // Blank line: nothing to remove
        let mut manager = RosterManager::new(&request("Ann\n\nBo"));
        manager.handle_input(press(KeyCode::Up));
        manager.handle_input(ctrl('d'));
        assert_eq!(manager.text(), "Ann\n\nBo");
    }

    #[test]
    fn test_reload_and_clear() {
        let mut manager = RosterManager::new(&request("Draft"));
        manager.handle_input(ctrl('r'));
        assert_eq!(manager.text(), "Kim\nLee");

        manager.handle_input(ctrl('x'));
        assert_eq!(manager.text(), "");
        assert_eq!(manager.cursor(), (0, 0));
    }

    #[test]
    fn test_apply_and_close_events() {
        let mut manager = RosterManager::new(&request("Ann"));
        assert_eq!(
            manager.handle_input(ctrl('s')),
            Some(RosterManagerEvent::Apply("Ann".to_string()))
        );
        assert_eq!(
            manager.handle_input(press(KeyCode::F(2))),
            Some(RosterManagerEvent::Apply("Ann".to_string()))
        );
        assert_eq!(
            manager.handle_input(press(KeyCode::Esc)),
            Some(RosterManagerEvent::Closed)
        );
    }
}
