//! Modal prompt components backing the terminal dialog service.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::component::{Component, PromptEvent};
use super::{centered_box, Theme};
use crate::controller::{
    Confirmation, ConfirmPrompt, Notice, NoticeLevel, SelectPrompt, TextPrompt, Tone,
};

/// True for plain or shifted characters, i.e. text input.
fn is_text_key(key: &KeyEvent) -> bool {
    !key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn key_hint(key: &'static str, label: &'static str, theme: &Theme) -> [Span<'static>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(label),
    ]
}

fn frame_block(title: &str, border: Color, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.background))
}

fn body_height(text: &str) -> u16 {
    u16::try_from(text.lines().count().max(1)).unwrap_or(u16::MAX)
}

// === Confirm ===

/// Confirm / deny / cancel prompt.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    prompt: ConfirmPrompt,
    selected: usize,
    scroll: u16,
}

impl ConfirmDialog {
    /// Creates the dialog with the confirm button focused.
    #[must_use]
    pub const fn new(prompt: ConfirmPrompt) -> Self {
        Self {
            prompt,
            selected: 0,
            scroll: 0,
        }
    }

    fn buttons(&self) -> Vec<(&str, Confirmation)> {
        let mut buttons = vec![(self.prompt.confirm_label.as_str(), Confirmation::Confirmed)];
        if let Some(deny) = &self.prompt.deny_label {
            buttons.push((deny.as_str(), Confirmation::Denied));
        }
        buttons.push((self.prompt.cancel_label.as_str(), Confirmation::Dismissed));
        buttons
    }

    /// Label of the focused button.
    #[must_use]
    pub fn selected_label(&self) -> &str {
        self.buttons()[self.selected].0
    }
}

impl Component for ConfirmDialog {
    type Event = Confirmation;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        let count = self.buttons().len();
        match key.code {
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
                self.selected = (self.selected + count - 1) % count;
            }
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                self.selected = (self.selected + 1) % count;
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.scroll + 1 < body_height(&self.prompt.text) {
                    self.scroll += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => return Some(self.buttons()[self.selected].1),
            KeyCode::Esc => return Some(Confirmation::Dismissed),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border = match self.prompt.tone {
            Tone::Question => theme.primary,
            Tone::Warning => theme.warning,
        };
        let dialog_area = centered_box(60, body_height(&self.prompt.text) + 6, area);

        f.render_widget(Clear, dialog_area);
        let block = frame_block(&self.prompt.title, border, theme);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Body
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Buttons
                Constraint::Length(1), // Help
            ])
            .split(inner);

        let body = Paragraph::new(self.prompt.text.as_str())
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        f.render_widget(body, chunks[0]);

        let mut spans = Vec::new();
        for (i, (label, _)) in self.buttons().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if i == self.selected {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            spans.push(Span::styled(format!("[ {label} ]"), style));
        }
        f.render_widget(
            Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center),
            chunks[2],
        );

        let mut help = Vec::new();
        help.extend(key_hint("←→", " Choose  ", theme));
        help.extend(key_hint("Enter", " Select  ", theme));
        help.extend(key_hint("Esc", " Cancel", theme));
        f.render_widget(
            Paragraph::new(Line::from(help)).style(Style::default().fg(theme.text_muted)),
            chunks[3],
        );
    }
}

// === Text input ===

/// Single-line text input with inline validation.
#[derive(Debug, Clone)]
pub struct TextInputDialog {
    prompt: TextPrompt,
    input: String,
    error: Option<String>,
}

impl TextInputDialog {
    /// Creates the dialog prefilled with the prompt's initial value.
    #[must_use]
    pub fn new(prompt: TextPrompt) -> Self {
        let input = prompt.initial.clone();
        Self {
            prompt,
            input,
            error: None,
        }
    }

    /// Current input buffer.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Validation message from the last rejected submission.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Component for TextInputDialog {
    type Event = PromptEvent<String>;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                self.error = None;
            }
            KeyCode::Char(c) if is_text_key(&key) => {
                self.input.push(c);
                self.error = None;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
            }
            KeyCode::Enter => match self.prompt.validate(&self.input) {
                Ok(()) => return Some(PromptEvent::Submitted(self.input.clone())),
                Err(message) => self.error = Some(message),
            },
            KeyCode::Esc => return Some(PromptEvent::Cancelled),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_box(60, 11, area);

        f.render_widget(Clear, dialog_area);
        let block = frame_block(&self.prompt.title, theme.primary, theme);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Label
                Constraint::Length(3), // Input
                Constraint::Length(2), // Error
                Constraint::Length(1), // Help
            ])
            .split(inner);

        f.render_widget(
            Paragraph::new(self.prompt.label.as_str()).style(Style::default().fg(theme.text)),
            chunks[0],
        );

        let input_line = if self.input.is_empty() {
            Line::from(vec![
                Span::styled("█", Style::default().fg(theme.accent)),
                Span::styled(
                    self.prompt.placeholder.as_str(),
                    Style::default().fg(theme.text_muted),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled(self.input.as_str(), Style::default().fg(theme.text)),
                Span::styled("█", Style::default().fg(theme.accent)),
            ])
        };
        let input = Paragraph::new(input_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        );
        f.render_widget(input, chunks[1]);

        if let Some(error) = &self.error {
            f.render_widget(
                Paragraph::new(error.as_str())
                    .style(Style::default().fg(theme.error))
                    .wrap(Wrap { trim: true }),
                chunks[2],
            );
        }

        let mut help = Vec::new();
        help.extend(key_hint("Enter", " ", theme));
        help.push(Span::raw(format!("{}  ", self.prompt.confirm_label)));
        help.extend(key_hint("Ctrl+U", " Clear  ", theme));
        help.extend(key_hint("Esc", " Cancel", theme));
        f.render_widget(
            Paragraph::new(Line::from(help)).style(Style::default().fg(theme.text_muted)),
            chunks[3],
        );
    }
}

// === Select ===

/// Single-select list over the prompt's options.
#[derive(Debug, Clone)]
pub struct SelectDialog<T> {
    prompt: SelectPrompt<T>,
    list_state: ListState,
}

impl<T: Clone> SelectDialog<T> {
    /// Creates the dialog with the first option selected.
    #[must_use]
    pub fn new(prompt: SelectPrompt<T>) -> Self {
        let mut list_state = ListState::default();
        if !prompt.options.is_empty() {
            list_state.select(Some(0));
        }
        Self { prompt, list_state }
    }

    /// Index of the highlighted option.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn step(&mut self, forward: bool) {
        let count = self.prompt.options.len();
        if count == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.list_state.select(Some(next));
    }
}

impl<T: Clone> Component for SelectDialog<T> {
    type Event = PromptEvent<T>;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.step(false),
            KeyCode::Down | KeyCode::Char('j') => self.step(true),
            KeyCode::Home => {
                let first = (!self.prompt.options.is_empty()).then_some(0);
                self.list_state.select(first);
            }
            KeyCode::End => {
                let last = self.prompt.options.len().checked_sub(1);
                self.list_state.select(last);
            }
            KeyCode::Enter => {
                let chosen = self
                    .selected()
                    .and_then(|i| self.prompt.options.get(i))
                    .map(|option| option.value.clone());
                if let Some(value) = chosen {
                    return Some(PromptEvent::Submitted(value));
                }
            }
            KeyCode::Esc => return Some(PromptEvent::Cancelled),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = u16::try_from(self.prompt.options.len()).unwrap_or(u16::MAX);
        let dialog_area = centered_box(60, rows.saturating_add(5).max(8), area);

        f.render_widget(Clear, dialog_area);
        let block = frame_block(&self.prompt.title, theme.primary, theme);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Hint
                Constraint::Min(1),    // Options
                Constraint::Length(1), // Help
            ])
            .split(inner);

        f.render_widget(
            Paragraph::new(self.prompt.placeholder.as_str())
                .style(Style::default().fg(theme.text_secondary)),
            chunks[0],
        );

        let items: Vec<ListItem> = self
            .prompt
            .options
            .iter()
            .map(|option| ListItem::new(Line::from(format!("  {}", option.label))))
            .collect();
        let list = List::new(items)
            .style(Style::default().fg(theme.text))
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("► ");
        let mut list_state = self.list_state.clone();
        f.render_stateful_widget(list, chunks[1], &mut list_state);

        let mut help = Vec::new();
        help.extend(key_hint("↑↓", " Navigate  ", theme));
        help.extend(key_hint("Enter", " ", theme));
        help.push(Span::raw(format!("{}  ", self.prompt.confirm_label)));
        help.extend(key_hint("Esc", " Cancel", theme));
        f.render_widget(
            Paragraph::new(Line::from(help)).style(Style::default().fg(theme.text_muted)),
            chunks[2],
        );
    }
}

// === Notice ===

/// Acknowledged message (info or warning).
#[derive(Debug, Clone)]
pub struct NoticeDialog {
    notice: Notice,
    scroll: u16,
}

impl NoticeDialog {
    /// Creates the dialog.
    #[must_use]
    pub const fn new(notice: Notice) -> Self {
        Self { notice, scroll: 0 }
    }
}

impl Component for NoticeDialog {
    type Event = ();

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.scroll + 1 < body_height(&self.notice.text) {
                    self.scroll += 1;
                }
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => return Some(()),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border = match self.notice.level {
            NoticeLevel::Success => theme.success,
            NoticeLevel::Info => theme.primary,
            NoticeLevel::Warning => theme.warning,
        };
        let dialog_area = centered_box(60, body_height(&self.notice.text) + 4, area);

        f.render_widget(Clear, dialog_area);
        let block = frame_block(&self.notice.title, border, theme);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        f.render_widget(
            Paragraph::new(self.notice.text.as_str())
                .style(Style::default().fg(theme.text))
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            chunks[0],
        );

        let mut help = Vec::new();
        help.extend(key_hint("↑↓", " Scroll  ", theme));
        help.extend(key_hint("Enter/Esc", " Close", theme));
        f.render_widget(
            Paragraph::new(Line::from(help)).style(Style::default().fg(theme.text_muted)),
            chunks[1],
        );
    }
}
