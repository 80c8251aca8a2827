use crate::app::Model;
use crate::app::model::{Flow, Mode};
use crate::editor::{BufferError, Direction};

/// Every input the editor reacts to, resolved once from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Insert a printable character at the cursor
    Insert(char),
    /// Split the line at the cursor (Enter)
    LineBreak,
    /// Delete the character at the cursor (Delete)
    DeleteForward,
    /// Delete the character before the cursor (Backspace)
    DeleteBackward,
    /// Move the cursor one step
    Move(Direction),
    /// Show or hide the key help
    ToggleHelp,
    /// End the session and ask the caller to save
    SaveAndQuit,
    /// End the session without saving
    Quit,
    /// A key with no binding
    Unrecognized,
}

/// Apply one message to the model.
///
/// Returns [`Flow::Stop`] once the session has ended.
///
/// # Errors
///
/// Returns a [`BufferError`] only if the cursor was left outside the buffer,
/// which the movement rules here never do.
pub fn update(model: &mut Model, msg: Message) -> Result<Flow, BufferError> {
    match model.mode {
        Mode::Terminated => {}
        Mode::Help => match msg {
            Message::ToggleHelp => model.mode = Mode::Editing,
            Message::SaveAndQuit => terminate(model, true),
            Message::Quit => terminate(model, false),
            _ => {}
        },
        Mode::Editing => {
            handle_editing(model, msg)?;
            model.rescroll_horizontal();
        }
    }

    Ok(if model.is_terminated() {
        Flow::Stop
    } else {
        Flow::Continue
    })
}

fn handle_editing(model: &mut Model, msg: Message) -> Result<(), BufferError> {
    match msg {
        Message::LineBreak | Message::Insert('\n') => {
            model.buffer.split(&model.cursor)?;
            step(model, Direction::Right);
        }
        Message::Insert(ch) => {
            let mut utf8 = [0; 4];
            model.buffer.insert(&model.cursor, ch.encode_utf8(&mut utf8))?;
            // One char is one column wide.
            step(model, Direction::Right);
        }
        Message::DeleteForward => model.buffer.delete(&model.cursor)?,
        Message::DeleteBackward => {
            if model.cursor.row() != 0 || model.cursor.col() != 0 {
                step(model, Direction::Left);
                model.buffer.delete(&model.cursor)?;
            }
        }
        Message::Move(direction) => step(model, direction),
        Message::ToggleHelp => model.mode = Mode::Help,
        Message::SaveAndQuit => terminate(model, true),
        Message::Quit => terminate(model, false),
        Message::Unrecognized => {}
    }
    Ok(())
}

/// Move the cursor one step and scroll the window after it.
fn step(model: &mut Model, direction: Direction) {
    model.cursor.move_in(direction, &model.buffer);
    match direction {
        Direction::Up | Direction::Left => model.window.scroll_up(&model.cursor),
        Direction::Down | Direction::Right => {
            model.window.scroll_down(&model.buffer, &model.cursor);
        }
    }
}

fn terminate(model: &mut Model, save: bool) {
    if save {
        model.save_on_exit = true;
    }
    model.mode = Mode::Terminated;
    tracing::debug!(save = model.save_on_exit, "session terminated");
}
