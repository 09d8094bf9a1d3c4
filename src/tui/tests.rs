use std::collections::VecDeque;

use anyhow::{anyhow, bail, Result};
use crossterm::event::{KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;

use super::*;
use crate::services::MemoryStore;

/// Replays a fixed list of events; errors once the script runs out so a
/// test can never wait for input forever.
struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            events: keys.into_iter().map(Event::Key).collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        self.events
            .pop_front()
            .map(Some)
            .ok_or_else(|| anyhow!("scripted input exhausted"))
    }
}

/// Store whose writes always fail.
#[derive(Default)]
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        bail!("disk is read-only")
    }
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn chars(text: &str) -> Vec<KeyEvent> {
    text.chars().map(|c| press(KeyCode::Char(c))).collect()
}

fn screen(keys: Vec<KeyEvent>) -> Screen<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(120, 40)).expect("test terminal");
    Screen::new(terminal, Theme::dark(), Box::new(ScriptedEvents::new(keys)))
}

fn app_with<S: KeyValueStore>(keys: Vec<KeyEvent>, store: S) -> App<TestBackend, S> {
    App::new(screen(keys), store, false).expect("app starts")
}

fn app(keys: Vec<KeyEvent>) -> App<TestBackend, MemoryStore> {
    app_with(keys, MemoryStore::new())
}

fn buffer_text(app: &App<TestBackend, impl KeyValueStore>) -> String {
    let screen = app.screen();
    let buffer = screen.terminal().backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_quit_draws_chart() {
    let mut app = app(vec![press(KeyCode::Char('q'))]);
    app.run().expect("run");

    let text = buffer_text(&app);
    assert!(text.contains(APP_NAME));
    assert!(text.contains("Roster"));
    assert!(text.contains("Student 1"));
    assert!(text.contains("[s] Shuffle"));
    assert!(text.contains("24/24 seated"));
}

#[test]
fn test_welcome_overlay_is_shown_first() {
    let keys = vec![press(KeyCode::Char('q')), press(KeyCode::Char('q'))];
    let mut app = App::new(screen(keys), MemoryStore::new(), true).expect("app starts");

    // First 'q' closes the welcome overlay, the second quits
    app.run().expect("run");
}

#[test]
fn test_exhausted_input_ends_run_with_error() {
    let mut app = app(vec![press(KeyCode::Right)]);
    assert!(app.run().is_err());
    assert_eq!(app.screen().view().seat_cursor, 1);
}

#[test]
fn test_shuffle_fills_every_seat() {
    let keys = vec![
        press(KeyCode::Char('s')),
        press(KeyCode::Enter),
        press(KeyCode::Char('q')),
    ];
    let mut app = app(keys);
    app.run().expect("run");

    assert_eq!(app.controller().counts().occupied, SEAT_COUNT);
    let screen = app.screen();
    assert_eq!(screen.view().counts.occupied, SEAT_COUNT);
    assert!(screen
        .view()
        .status
        .as_deref()
        .is_some_and(|status| status.contains("shuffled")));
}

#[test]
fn test_dismissed_shuffle_changes_nothing() {
    let keys = vec![
        press(KeyCode::Char('s')),
        press(KeyCode::Esc),
        press(KeyCode::Char('q')),
    ];
    let mut app = app(keys);
    app.run().expect("run");

    assert_eq!(app.controller().seats()[0].label, "Student 1");
    assert_eq!(app.controller().seats()[SEAT_COUNT - 1].label, "Student 24");
    assert!(app.screen().view().status.is_none());
}

#[test]
fn test_type_name_into_seat() {
    let mut keys = vec![
        press(KeyCode::Char('r')),
        press(KeyCode::Enter), // confirm reset
        press(KeyCode::Down),
        press(KeyCode::Right),
        press(KeyCode::Enter), // seat menu
        press(KeyCode::Enter), // "Type a name"
    ];
    keys.extend(chars("Kim Minjun"));
    keys.push(press(KeyCode::Enter));
    keys.push(press(KeyCode::Char('q')));

    let mut app = app(keys);
    app.run().expect("run");

    let seat = &app.controller().seats()[SEAT_COLS + 1];
    assert!(seat.occupied);
    assert_eq!(seat.label, "Kim Minjun");
    assert!(app.screen().view().is_flashing(SEAT_COLS + 1));
}

#[test]
fn test_pick_from_roster_assigns_selected_student() {
    let keys = vec![
        press(KeyCode::Char('r')),
        press(KeyCode::Enter), // confirm reset
        press(KeyCode::Enter),
        press(KeyCode::Right), // "Pick from roster"
        press(KeyCode::Enter),
        press(KeyCode::Down), // second available student
        press(KeyCode::Enter),
        press(KeyCode::Char('q')),
    ];
    let mut app = app(keys);
    app.run().expect("run");

    assert_eq!(app.controller().seats()[0].label, "Student 2");
    assert!(app.controller().seats()[0].occupied);
}

#[test]
fn test_save_failure_shows_error_overlay() {
    let mut keys = vec![press(KeyCode::Char('w'))];
    keys.extend(chars("Monday"));
    keys.push(press(KeyCode::Enter));
    // Blocked by the overlay, then dismissed, then quit
    keys.push(press(KeyCode::Char('q')));
    keys.push(press(KeyCode::Esc));
    keys.push(press(KeyCode::Char('q')));

    let mut app = app_with(keys, ReadOnlyStore);
    app.run().expect("run");

    assert!(app.controller().archive().is_empty());
    assert!(app.screen().view().error.is_none());
}

#[test]
fn test_error_overlay_blocks_other_keys() {
    let mut keys = vec![press(KeyCode::Char('w'))];
    keys.extend(chars("Monday"));
    keys.push(press(KeyCode::Enter));
    keys.push(press(KeyCode::Char('q')));

    let mut app = app_with(keys, ReadOnlyStore);
    assert!(app.run().is_err());

    let error = app.screen().view().error.clone().expect("error shown");
    assert!(error.contains("Failed to save arrangement"));
    assert!(buffer_text(&app).contains("ERROR"));
}

#[test]
fn test_roster_manager_replaces_roster() {
    let mut keys = vec![press(KeyCode::Char('m')), ctrl('x')];
    keys.extend(chars("Ann"));
    keys.push(press(KeyCode::Enter));
    keys.extend(chars("Bo"));
    keys.push(ctrl('s'));
    keys.push(press(KeyCode::Enter)); // confirm the list
    keys.push(press(KeyCode::Char('q')));

    let mut app = app(keys);
    app.run().expect("run");

    let roster = app.controller().roster();
    assert_eq!(roster.get(0), Some("Ann"));
    assert_eq!(roster.get(1), Some("Bo"));
    assert_eq!(app.screen().view().roster[0].name, "Ann");
}

#[test]
fn test_focus_and_roster_navigation() {
    let keys = vec![
        press(KeyCode::Tab),
        press(KeyCode::Down),
        press(KeyCode::Down),
        press(KeyCode::Up),
        press(KeyCode::Left),
        press(KeyCode::BackTab),
        press(KeyCode::Char('q')),
    ];
    let mut app = app(keys);
    app.run().expect("run");

    let screen = app.screen();
    assert_eq!(screen.view().focus, Focus::Seats);
    assert_eq!(screen.view().roster_cursor, 1);
    assert_eq!(screen.view().seat_cursor, 0);
}

#[test]
fn test_roster_entry_highlights_assigned_seat() {
    let mut keys = vec![press(KeyCode::Char('s')), press(KeyCode::Enter)];
    // Unbound keys let the shuffle flashes run out
    keys.extend((0..FLASH_FRAMES).map(|_| press(KeyCode::F(5))));
    keys.extend([
        press(KeyCode::Tab),
        press(KeyCode::Enter),
        press(KeyCode::Char('q')),
    ]);
    let mut app = app(keys);
    app.run().expect("run");

    let seat = app
        .controller()
        .seats()
        .iter()
        .position(|seat| seat.label == "Student 1")
        .expect("student seated");
    let screen = app.screen();
    assert!(screen.view().is_flashing(seat));
    assert_eq!(
        (0..SEAT_COUNT).filter(|&i| screen.view().is_flashing(i)).count(),
        1
    );
}

#[test]
fn test_key_release_is_ignored() {
    let release = KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    let mut app = app(vec![release]);
    // Release does not quit; the script then runs dry
    assert!(app.run().is_err());
}

#[test]
fn test_occupied_seat_can_be_vacated() {
    let keys = vec![
        press(KeyCode::Enter),
        press(KeyCode::Right), // "Vacate"
        press(KeyCode::Enter),
        press(KeyCode::Char('q')),
    ];
    let mut app = app(keys);
    app.run().expect("run");

    let seat = &app.controller().seats()[0];
    assert!(!seat.occupied);
    assert_eq!(seat.label, "1번");
    assert_eq!(app.screen().view().counts.unoccupied, 1);
}

#[test]
fn test_flash_expires_after_frames() {
    let mut view = ChartView::default();
    view.flash(3);
    for _ in 0..FLASH_FRAMES - 1 {
        view.tick();
    }
    assert!(view.is_flashing(3));
    view.tick();
    assert!(!view.is_flashing(3));
}

#[test]
fn test_show_seats_flashes_only_changes() {
    let mut view = ChartView::default();
    let mut seats: Vec<Seat> = (0..SEAT_COUNT).map(Seat::empty).collect();
    view.show_seats(&seats);
    assert!((0..SEAT_COUNT).all(|i| !view.is_flashing(i)));

    seats[5].assign("Ann");
    view.show_seats(&seats);
    assert!(view.is_flashing(5));
    assert!(!view.is_flashing(4));
}

#[test]
fn test_seat_cursor_stops_at_edges() {
    let mut view = ChartView::default();
    view.move_cursor(Action::NavigateUp);
    view.move_cursor(Action::NavigateLeft);
    assert_eq!(view.seat_cursor, 0);

    for _ in 0..10 {
        view.move_cursor(Action::NavigateDown);
        view.move_cursor(Action::NavigateRight);
    }
    assert_eq!(view.seat_cursor, SEAT_COUNT - 1);
}

#[test]
fn test_centered_box_is_clamped() {
    let area = Rect::new(0, 0, 100, 10);
    let rect = centered_box(60, 20, area);
    assert_eq!(rect.width, 60);
    assert_eq!(rect.height, 10);
    assert_eq!(rect.x, 20);
    assert_eq!(rect.y, 0);
}
