use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use textpad::app::{App, SessionConfig, SessionOutcome};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn text(s: &str) -> impl Iterator<Item = Event> + '_ {
    s.chars().map(|c| key(KeyCode::Char(c)))
}

fn run_session(content: &str, width: u16, height: u16, events: Vec<Event>) -> SessionOutcome {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut events: VecDeque<Event> = events.into();
    let config = SessionConfig::new(content)
        .with_file_name("session.txt")
        .with_exit_pause(Duration::ZERO);
    App::new(config).run_with(&mut terminal, &mut events).unwrap()
}

#[test]
fn test_split_line_scenario() {
    let mut events = vec![key(KeyCode::Right); 3];
    events.extend([key(KeyCode::Enter), ctrl('w')]);
    let outcome = run_session("abc\ndefgh", 40, 10, events);
    assert_eq!(outcome.lines, vec!["abc", "", "defgh"]);
    assert!(outcome.save);
}

#[test]
fn test_quit_without_save_returns_last_edit() {
    let mut events: Vec<Event> = text("hello").collect();
    events.push(key(KeyCode::Backspace));
    events.push(ctrl('q'));
    let outcome = run_session("", 40, 10, events);
    assert_eq!(outcome.lines, vec!["hell"]);
    assert!(!outcome.save);
}

#[test]
fn test_release_events_are_ignored() {
    let release = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('x'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    let outcome = run_session("", 40, 10, vec![key(KeyCode::Char('x')), release, ctrl('c')]);
    assert_eq!(outcome.lines, vec!["x"]);
}

#[test]
fn test_help_screen_blocks_edits_until_closed() {
    let mut events = vec![ctrl('g')];
    events.extend(text("ignored"));
    events.push(key(KeyCode::F(1)));
    events.extend(text("ok"));
    events.push(ctrl('w'));
    let outcome = run_session("", 40, 10, events);
    assert_eq!(outcome.lines, vec!["ok"]);
}

#[test]
fn test_long_line_edit_in_narrow_terminal() {
    let line: String = ('a'..='z').collect();
    let mut events = vec![key(KeyCode::Right); 26];
    events.extend(text("!"));
    events.push(ctrl('c'));
    let outcome = run_session(&line, 11, 5, events);
    assert_eq!(outcome.lines, vec![format!("{line}!")]);
}

#[test]
fn test_carriage_return_is_ordinary_text() {
    let outcome = run_session("a\r\nb", 40, 10, vec![key(KeyCode::Delete), ctrl('c')]);
    assert_eq!(outcome.lines, vec!["\r", "b"]);
}

#[test]
fn test_session_saves_over_many_lines() {
    let content = (0..100)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let mut events = vec![key(KeyCode::Down); 60];
    events.push(key(KeyCode::Delete));
    events.push(ctrl('w'));
    let outcome = run_session(&content, 40, 10, events);
    assert_eq!(outcome.lines.len(), 100);
    assert_eq!(outcome.lines[60], "ine 60");
    assert!(outcome.save);
}
