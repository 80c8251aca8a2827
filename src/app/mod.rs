//! Editor state and the session loop.
//!
//! This module follows The Elm Architecture (TEA):
//! - [`Model`]: The complete editor state
//! - [`Message`]: Every input the editor reacts to
//! - [`update`]: One state transition per message
//! - [`App::run`]: Render, block for one event, dispatch, repeat

mod event_loop;
mod input;
mod model;
mod update;

pub use event_loop::{EventSource, TerminalEvents};
pub use input::{message_for_event, message_for_key};
pub use model::{Flow, Mode, Model};
pub use update::{Message, update};

use std::time::Duration;

/// Columns of the previous page kept visible after a horizontal jump.
pub const DEFAULT_LEFT_MARGIN: usize = 1;
/// Columns reserved at the right edge of each horizontal page.
pub const DEFAULT_RIGHT_MARGIN: usize = 2;
/// How long the exit message stays up before the terminal is handed back.
pub const DEFAULT_EXIT_PAUSE: Duration = Duration::from_millis(500);

/// Everything a session needs, fixed when the editor is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Initial text, split into lines on `\n`
    pub content: String,
    /// Name shown in the status line
    pub file_name: Option<String>,
    /// Show cursor/window metrics in the status line
    pub debug: bool,
    pub left_margin: usize,
    pub right_margin: usize,
    pub exit_pause: Duration,
}

impl SessionConfig {
    /// Create a config for the given initial text with default settings.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            file_name: None,
            debug: false,
            left_margin: DEFAULT_LEFT_MARGIN,
            right_margin: DEFAULT_RIGHT_MARGIN,
            exit_pause: DEFAULT_EXIT_PAUSE,
        }
    }

    /// Set the name shown in the status line.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Enable or disable debug metrics.
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the horizontal scroll margins.
    pub const fn with_margins(mut self, left: usize, right: usize) -> Self {
        self.left_margin = left;
        self.right_margin = right;
        self
    }

    /// Set how long the exit message is shown.
    pub const fn with_exit_pause(mut self, pause: Duration) -> Self {
        self.exit_pause = pause;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// What a finished session hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// The buffer's lines at the moment the session stopped
    pub lines: Vec<String>,
    /// Whether the user asked for the lines to be saved
    pub save: bool,
}

/// Rewrites or swallows a message before it reaches [`update`].
pub type KeyFilter = Box<dyn FnMut(Message) -> Option<Message>>;

/// Owns the session configuration and runs the editor loop.
pub struct App {
    config: SessionConfig,
    key_filter: Option<KeyFilter>,
}

impl App {
    /// Create an application for the given session.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            key_filter: None,
        }
    }

    /// Install a filter that sees every message first; returning `None`
    /// drops the message.
    pub fn with_key_filter(
        mut self,
        filter: impl FnMut(Message) -> Option<Message> + 'static,
    ) -> Self {
        self.key_filter = Some(Box::new(filter));
        self
    }

    fn filter(&mut self, msg: Message) -> Option<Message> {
        match self.key_filter.as_mut() {
            Some(filter) => filter(msg),
            None => Some(msg),
        }
    }
}
