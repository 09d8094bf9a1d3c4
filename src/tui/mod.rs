//! Terminal user interface for the seating chart.
//!
//! This module contains the main TUI loop, the [`ChartView`] rendered on every
//! frame, and the adapters that let the controller drive the terminal: a
//! [`TerminalSurface`] for the grid and roster, and [`TerminalDialogs`] for
//! modal prompts. Both adapters share one [`Screen`]; modals run their own
//! nested event loop on it until they produce a result.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod component;
pub mod dialogs;
pub mod help_overlay;
pub mod roster_manager;
pub mod roster_panel;
pub mod seat_grid;
pub mod status_bar;
pub mod theme;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::cell::{Ref, RefCell};
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use crate::config::Config;
use crate::constants::{APP_NAME, SEAT_COLS, SEAT_COUNT, SEAT_ROWS};
use crate::controller::{
    ConfirmPrompt, Confirmation, DialogService, Notice, NoticeLevel, PresentationSurface,
    RosterEditRequest, SeatingController, SelectPrompt, TextPrompt,
};
use crate::models::{RosterEntry, Seat, SeatCounts};
use crate::services::{JsonFileStore, KeyValueStore};
use crate::shortcuts::{Action, ShortcutRegistry};

pub use component::{Component, PromptEvent};
pub use dialogs::{ConfirmDialog, NoticeDialog, SelectDialog, TextInputDialog};
pub use help_overlay::{HelpOverlay, HelpOverlayEvent};
pub use roster_manager::{RosterManager, RosterManagerEvent};
pub use roster_panel::RosterPanel;
pub use seat_grid::SeatGrid;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Frames a changed seat stays highlighted.
pub const FLASH_FRAMES: u8 = 8;

/// Event poll timeout; also the flash animation tick.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The seat grid
    #[default]
    Seats,
    /// The roster list
    Roster,
}

/// Everything the main screen shows.
#[derive(Debug, Clone, Default)]
pub struct ChartView {
    /// Seats in row-major order
    pub seats: Vec<Seat>,
    /// Roster entries with assignment markers
    pub roster: Vec<RosterEntry>,
    /// Occupancy totals
    pub counts: SeatCounts,
    /// Focused panel
    pub focus: Focus,
    /// Cursor in the seat grid (row-major index)
    pub seat_cursor: usize,
    /// Cursor in the roster list
    pub roster_cursor: usize,
    /// Seats currently highlighted, with remaining frames
    flashes: Vec<(usize, u8)>,
    /// Last success message
    pub status: Option<String>,
    /// Error shown in the overlay until dismissed
    pub error: Option<String>,
}

impl ChartView {
    /// Replaces the seats, flashing every seat whose contents changed.
    pub fn show_seats(&mut self, seats: &[Seat]) {
        if self.seats.len() == seats.len() {
            let changed: Vec<usize> = self
                .seats
                .iter()
                .zip(seats)
                .enumerate()
                .filter(|(_, (old, new))| old != new)
                .map(|(index, _)| index)
                .collect();
            for index in changed {
                self.flash(index);
            }
        }
        self.seats = seats.to_vec();
    }

    /// Replaces the roster list, keeping the cursor in range.
    pub fn show_roster(&mut self, entries: &[RosterEntry]) {
        self.roster = entries.to_vec();
        self.roster_cursor = self.roster_cursor.min(self.roster.len().saturating_sub(1));
    }

    /// Highlights the seat at `index` for [`FLASH_FRAMES`] frames.
    pub fn flash(&mut self, index: usize) {
        self.flashes.retain(|(seat, _)| *seat != index);
        self.flashes.push((index, FLASH_FRAMES));
    }

    /// True while the seat at `index` is highlighted.
    #[must_use]
    pub fn is_flashing(&self, index: usize) -> bool {
        self.flashes.iter().any(|(seat, _)| *seat == index)
    }

    /// Advances the flash animation by one frame.
    pub fn tick(&mut self) {
        for (_, frames) in &mut self.flashes {
            *frames = frames.saturating_sub(1);
        }
        self.flashes.retain(|(_, frames)| *frames > 0);
    }

    /// Switches between the seat grid and the roster list.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Seats => Focus::Roster,
            Focus::Roster => Focus::Seats,
        };
    }

    /// Moves the cursor of the focused panel; the cursor stops at the edges.
    pub fn move_cursor(&mut self, action: Action) {
        match self.focus {
            Focus::Seats => {
                let (row, col) = (self.seat_cursor / SEAT_COLS, self.seat_cursor % SEAT_COLS);
                let (row, col) = match action {
                    Action::NavigateUp => (row.saturating_sub(1), col),
                    Action::NavigateDown => ((row + 1).min(SEAT_ROWS - 1), col),
                    Action::NavigateLeft => (row, col.saturating_sub(1)),
                    Action::NavigateRight => (row, (col + 1).min(SEAT_COLS - 1)),
                    _ => (row, col),
                };
                self.seat_cursor = (row * SEAT_COLS + col).min(SEAT_COUNT - 1);
            }
            Focus::Roster => {
                let last = self.roster.len().saturating_sub(1);
                match action {
                    Action::NavigateUp => self.roster_cursor = self.roster_cursor.saturating_sub(1),
                    Action::NavigateDown => self.roster_cursor = (self.roster_cursor + 1).min(last),
                    _ => {}
                }
            }
        }
    }
}

/// Source of terminal events.
pub trait EventSource {
    /// Waits up to `timeout` for the next event.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Reads events from the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll terminal events")? {
            return event::read()
                .map(Some)
                .context("Failed to read terminal event");
        }
        Ok(None)
    }
}

/// Terminal, view state and input shared by the main loop and every modal.
pub struct Screen<B: Backend> {
    terminal: Terminal<B>,
    view: ChartView,
    theme: Theme,
    events: Box<dyn EventSource>,
}

impl<B: Backend> Screen<B> {
    /// Creates a screen with an empty view.
    pub fn new(terminal: Terminal<B>, theme: Theme, events: Box<dyn EventSource>) -> Self {
        Self {
            terminal,
            view: ChartView::default(),
            theme,
            events,
        }
    }

    /// Current view state.
    #[must_use]
    pub const fn view(&self) -> &ChartView {
        &self.view
    }

    /// Mutable view state.
    pub fn view_mut(&mut self) -> &mut ChartView {
        &mut self.view
    }

    /// Underlying terminal.
    #[must_use]
    pub const fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Draws the chart.
    pub fn draw(&mut self) -> Result<()> {
        let Self {
            terminal,
            view,
            theme,
            ..
        } = self;
        terminal
            .draw(|f| render(f, view, theme))
            .context("Failed to draw frame")?;
        Ok(())
    }

    /// Draws the chart with `component` on top.
    fn draw_with<C: Component>(&mut self, component: &C) -> Result<()> {
        let Self {
            terminal,
            view,
            theme,
            ..
        } = self;
        terminal
            .draw(|f| {
                render(f, view, theme);
                let area = f.area();
                component.render(f, area, theme);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    /// Next key press, or `None` if the poll timed out or the event was not a press.
    pub fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        match self.events.next_event(POLL_INTERVAL)? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    /// Runs `component` until it emits an event.
    pub fn run_modal<C: Component>(&mut self, component: &mut C) -> Result<C::Event> {
        loop {
            self.view.tick();
            self.draw_with(component)?;
            if let Some(key) = self.next_key()? {
                if let Some(event) = component.handle_input(key) {
                    return Ok(event);
                }
            }
        }
    }
}

/// Seat grid and roster list backed by the shared screen.
pub struct TerminalSurface<B: Backend> {
    screen: Rc<RefCell<Screen<B>>>,
}

impl<B: Backend> TerminalSurface<B> {
    /// Creates a surface drawing on `screen`.
    pub const fn new(screen: Rc<RefCell<Screen<B>>>) -> Self {
        Self { screen }
    }
}

impl<B: Backend> PresentationSurface for TerminalSurface<B> {
    fn render_seats(&mut self, seats: &[Seat]) -> Result<()> {
        self.screen.borrow_mut().view.show_seats(seats);
        Ok(())
    }

    fn render_roster(&mut self, entries: &[RosterEntry]) -> Result<()> {
        self.screen.borrow_mut().view.show_roster(entries);
        Ok(())
    }

    fn render_counts(&mut self, counts: SeatCounts) -> Result<()> {
        self.screen.borrow_mut().view.counts = counts;
        Ok(())
    }

    fn highlight_seat(&mut self, index: usize) -> Result<()> {
        self.screen.borrow_mut().view.flash(index);
        Ok(())
    }

    fn edit_roster(&mut self, request: &RosterEditRequest) -> Result<Option<String>> {
        let mut manager = RosterManager::new(request);
        match self.screen.borrow_mut().run_modal(&mut manager)? {
            RosterManagerEvent::Apply(text) => Ok(Some(text)),
            RosterManagerEvent::Closed => Ok(None),
        }
    }
}

/// Modal prompts backed by the shared screen.
///
/// Success notices go to the status line without blocking; everything else is
/// a modal the user has to close.
pub struct TerminalDialogs<B: Backend> {
    screen: Rc<RefCell<Screen<B>>>,
}

impl<B: Backend> TerminalDialogs<B> {
    /// Creates a dialog service drawing on `screen`.
    pub const fn new(screen: Rc<RefCell<Screen<B>>>) -> Self {
        Self { screen }
    }
}

impl<B: Backend> DialogService for TerminalDialogs<B> {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<Confirmation> {
        self.screen
            .borrow_mut()
            .run_modal(&mut ConfirmDialog::new(prompt.clone()))
    }

    fn input_text(&mut self, prompt: &TextPrompt) -> Result<Option<String>> {
        self.screen
            .borrow_mut()
            .run_modal(&mut TextInputDialog::new(prompt.clone()))
            .map(PromptEvent::into_option)
    }

    fn select<T: Clone>(&mut self, prompt: &SelectPrompt<T>) -> Result<Option<T>> {
        self.screen
            .borrow_mut()
            .run_modal(&mut SelectDialog::new(prompt.clone()))
            .map(PromptEvent::into_option)
    }

    fn notify(&mut self, notice: &Notice) -> Result<()> {
        let mut screen = self.screen.borrow_mut();
        if notice.level == NoticeLevel::Success {
            screen.view.status = Some(format!("{}: {}", notice.title, notice.text));
            return Ok(());
        }
        screen.run_modal(&mut NoticeDialog::new(notice.clone()))
    }
}

/// Seating controller wired to the terminal.
pub type TerminalController<B, S> = SeatingController<TerminalSurface<B>, TerminalDialogs<B>, S>;

/// Main application: shortcut dispatch on top of the controller.
pub struct App<B: Backend, S: KeyValueStore> {
    screen: Rc<RefCell<Screen<B>>>,
    controller: TerminalController<B, S>,
    shortcuts: ShortcutRegistry,
    show_welcome: bool,
    should_quit: bool,
}

impl<B: Backend, S: KeyValueStore> App<B, S> {
    /// Builds the controller on `screen`; fails if the saved arrangements can't be read.
    pub fn new(screen: Screen<B>, store: S, show_welcome: bool) -> Result<Self> {
        let screen = Rc::new(RefCell::new(screen));
        let controller = SeatingController::new(
            TerminalSurface::new(Rc::clone(&screen)),
            TerminalDialogs::new(Rc::clone(&screen)),
            store,
        )?;
        Ok(Self {
            screen,
            controller,
            shortcuts: ShortcutRegistry::new(),
            show_welcome,
            should_quit: false,
        })
    }

    /// The seating controller.
    #[must_use]
    pub const fn controller(&self) -> &TerminalController<B, S> {
        &self.controller
    }

    /// The shared screen.
    pub fn screen(&self) -> Ref<'_, Screen<B>> {
        self.screen.borrow()
    }

    /// Runs until the user quits.
    pub fn run(&mut self) -> Result<()> {
        if self.show_welcome {
            self.show_welcome = false;
            self.screen
                .borrow_mut()
                .run_modal(&mut HelpOverlay::welcome())?;
        }

        while !self.should_quit {
            let key = {
                let mut screen = self.screen.borrow_mut();
                screen.view.tick();
                screen.draw()?;
                screen.next_key()?
            };
            if let Some(key) = key {
                self.handle_key(key);
            }
        }

        tracing::info!("Leaving seating chart");
        Ok(())
    }

    /// Handles one key press on the main screen.
    fn handle_key(&mut self, key: KeyEvent) {
        {
            let mut screen = self.screen.borrow_mut();
            // Error overlay blocks all other input until dismissed
            if screen.view.error.is_some() {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    screen.view.error = None;
                }
                return;
            }
        }

        let Some(action) = self.shortcuts.lookup(key) else {
            return;
        };
        tracing::debug!(action = action.id(), "Dispatching action");

        if let Err(err) = self.dispatch(action) {
            tracing::error!("{err:#}");
            self.screen.borrow_mut().view.error = Some(format!("{err:#}"));
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => {
                self.screen
                    .borrow_mut()
                    .run_modal(&mut HelpOverlay::new())?;
            }
            Action::Shuffle => self.controller.shuffle()?,
            Action::Reset => self.controller.reset()?,
            Action::ManageRoster => self.controller.manage_roster()?,
            Action::ShowSeatMap => {
                self.controller.show_seat_map()?;
            }
            Action::SaveArrangement => self.controller.save_arrangement()?,
            Action::LoadArrangement => self.controller.load_arrangement()?,
            Action::Activate => {
                let (focus, seat, entry) = {
                    let screen = self.screen.borrow();
                    (
                        screen.view.focus,
                        screen.view.seat_cursor,
                        screen.view.roster_cursor,
                    )
                };
                match focus {
                    Focus::Seats => self.controller.click_seat(seat)?,
                    Focus::Roster => self.controller.click_roster_entry(entry)?,
                }
            }
            Action::ToggleFocus => self.screen.borrow_mut().view.toggle_focus(),
            Action::NavigateUp
            | Action::NavigateDown
            | Action::NavigateLeft
            | Action::NavigateRight => self.screen.borrow_mut().view.move_cursor(action),
        }
        Ok(())
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )
    .context("Failed to leave alternate screen")?;
    Ok(())
}

/// Runs the interactive chart with arrangements stored under `data_dir`.
pub fn run_tui(config: &Config, data_dir: &Path) -> Result<()> {
    let store = JsonFileStore::in_dir(data_dir);
    tracing::info!(path = %store.path().display(), "Using arrangement store");
    let theme = Theme::from_mode(config.ui.theme_mode);

    let terminal = setup_terminal()?;
    let screen = Screen::new(terminal, theme, Box::new(CrosstermEvents));
    let result = App::new(screen, store, config.ui.show_welcome_on_startup)
        .and_then(|mut app| app.run());

    // Restore the terminal even when the chart failed
    restore_terminal()?;
    result
}

/// Render the chart from current view state
fn render(f: &mut Frame, view: &ChartView, theme: &Theme) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title bar and toolbar
            Constraint::Min(10),   // Seats and roster
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], view, theme);

    let main = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(chunks[1]);
    SeatGrid::render(f, main[0], view, theme);
    RosterPanel::render(f, main[1], view, theme);

    StatusBar::render(f, chunks[2], view, theme);

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = view.error {
        render_error_overlay(f, error, theme);
    }
}

/// Key hints shown under the title.
const TOOLBAR: [(&str, &str); 6] = [
    ("s", "Shuffle"),
    ("r", "Reset"),
    ("w", "Save"),
    ("o", "Load"),
    ("m", "Roster"),
    ("i", "Seat map"),
];

/// Render title bar with occupancy summary
fn render_title_bar(f: &mut Frame, area: Rect, view: &ChartView, theme: &Theme) {
    let title = Line::from(Span::styled(
        format!(" {APP_NAME} - {}/{SEAT_COUNT} seated", view.counts.occupied),
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    ));

    let mut toolbar = vec![Span::raw(" ")];
    for (key, label) in TOOLBAR {
        toolbar.push(Span::styled(
            format!("[{key}]"),
            Style::default().fg(theme.accent),
        ));
        toolbar.push(Span::styled(
            format!(" {label}  "),
            Style::default().fg(theme.text_secondary),
        ));
    }

    let title_widget = Paragraph::new(vec![title, Line::from(toolbar)])
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Centered rectangle with a fixed height, clamped to `r`
pub(crate) fn centered_box(percent_x: u16, height: u16, r: Rect) -> Rect {
    let width = (u32::from(r.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
