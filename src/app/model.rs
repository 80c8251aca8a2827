use ratatui::layout::Size;

use crate::editor::{Buffer, Cursor};
use crate::ui::window::Window;

use super::{SessionConfig, SessionOutcome};

/// Which screen the editor is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal editing with a visible cursor.
    Editing,
    /// Key help; movement and edits are ignored.
    Help,
    /// The session is over.
    Terminated,
}

/// Whether the session loop should keep going after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// The complete editor state.
///
/// All state lives here - no global or scattered state. The model is the
/// only writer of the cursor and window; the buffer changes only through its
/// own primitives.
#[derive(Debug)]
pub struct Model {
    /// The text being edited
    pub buffer: Buffer,
    /// Logical cursor position
    pub cursor: Cursor,
    /// Viewport onto the buffer
    pub window: Window,
    /// Current screen
    pub mode: Mode,
    /// Set by save-and-quit; read by the caller after the session ends
    pub save_on_exit: bool,
    /// Name shown in the status line
    pub file_name: Option<String>,
    /// Whether to show cursor/window metrics in the status line
    pub debug: bool,
    /// Columns of the previous page kept visible after a horizontal jump
    pub left_margin: usize,
    /// Columns reserved at the right edge of each horizontal page
    pub right_margin: usize,
    /// Duration of the last frame draw, for debug metrics
    pub frame_ms: Option<f64>,
}

impl Model {
    /// Create a model for a session on a terminal of the given size.
    pub fn new(config: &SessionConfig, terminal_size: Size) -> Self {
        Self {
            buffer: Buffer::from_text(&config.content),
            cursor: Cursor::new(),
            window: Window::for_terminal(terminal_size.height, terminal_size.width),
            mode: Mode::Editing,
            save_on_exit: false,
            file_name: config.file_name.clone(),
            debug: config.debug,
            left_margin: config.left_margin,
            right_margin: config.right_margin,
            frame_ms: None,
        }
    }

    /// Follow a terminal size change, keeping the cursor on screen.
    pub fn resize(&mut self, terminal_size: Size) {
        if self
            .window
            .update_size(terminal_size.height, terminal_size.width, &mut self.cursor)
        {
            self.rescroll_horizontal();
        }
    }

    /// Re-page the window horizontally around the cursor.
    pub fn rescroll_horizontal(&mut self) {
        self.window
            .horizontal_scroll(&self.cursor, self.left_margin, self.right_margin);
    }

    /// Whether the help screen is up.
    pub fn help_visible(&self) -> bool {
        self.mode == Mode::Help
    }

    /// Whether the session has ended.
    pub fn is_terminated(&self) -> bool {
        self.mode == Mode::Terminated
    }

    /// Consume the model, yielding the edited lines and the save flag.
    pub fn into_outcome(self) -> SessionOutcome {
        SessionOutcome {
            lines: self.buffer.lines(),
            save: self.save_on_exit,
        }
    }
}
