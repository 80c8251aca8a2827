// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. buffer::BufferError)
    clippy::module_name_repetitions
)]

//! # Textpad
//!
//! A small full-screen terminal text editor.
//!
//! Textpad edits one buffer of lines with:
//! - Arrow-key movement that remembers the preferred column
//! - Insert, line split and forward/backward delete
//! - One-line vertical scrolling and paged horizontal scrolling
//! - Continuation markers on lines wider than the screen
//!
//! ## Architecture
//!
//! Textpad uses The Elm Architecture (TEA) pattern:
//! - **Model**: Buffer, cursor, window and mode
//! - **Message**: Key events resolved to editor actions
//! - **Update**: One state transition per message
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Editor state, dispatch and the session loop
//! - [`editor`]: Text buffer and cursor
//! - [`ui`]: Window, rendering and the status line
//! - [`config`]: Command-line and rc-file flags
//! - [`perf`]: Debug event log

pub mod app;
pub mod config;
pub mod editor;
pub mod perf;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, SessionConfig, SessionOutcome};
    pub use crate::editor::{Buffer, Cursor, Direction};
    pub use crate::ui::window::Window;
}
