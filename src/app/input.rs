use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Message;
use crate::editor::Direction;

/// Resolve a terminal event into a [`Message`].
///
/// Returns `None` for events that only need a redraw (resize, focus, mouse,
/// key releases); the loop re-queries the terminal size before rendering.
pub fn message_for_event(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(message_for_key(*key)),
        _ => None,
    }
}

/// Resolve a key press into a [`Message`].
pub fn message_for_key(key: KeyEvent) -> Message {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('w' | 'W') => Message::SaveAndQuit,
            KeyCode::Char('c' | 'C' | 'q' | 'Q') => Message::Quit,
            KeyCode::Char('g' | 'G') => Message::ToggleHelp,
            _ => Message::Unrecognized,
        };
    }

    match key.code {
        KeyCode::Enter => Message::LineBreak,
        KeyCode::Delete => Message::DeleteForward,
        KeyCode::Backspace => Message::DeleteBackward,
        KeyCode::Up => Message::Move(Direction::Up),
        KeyCode::Down => Message::Move(Direction::Down),
        KeyCode::Left => Message::Move(Direction::Left),
        KeyCode::Right => Message::Move(Direction::Right),
        KeyCode::F(1) => Message::ToggleHelp,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) && !c.is_control() => {
            Message::Insert(c)
        }
        _ => Message::Unrecognized,
    }
}
