//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`window`]: Viewport origin, size and scrolling
//! - render planning and drawing with ratatui
//! - the status line and help screen

pub mod window;

mod render;
mod status;

pub use render::{RenderPlan, clip_line, plan, render, render_exit_message};
pub use status::{HELP_TEXT, status_text};

/// Marks a line that continues past the left edge.
pub const CONTINUES_LEFT: char = '«';
/// Marks a line that continues past the right edge.
pub const CONTINUES_RIGHT: char = '»';
