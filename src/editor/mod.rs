//! Editing engine: line storage and cursor movement.
//!
//! The [`Buffer`] owns the text and exposes the only mutation primitives;
//! the [`Cursor`] tracks a position in it and knows how to move against it.

mod buffer;
mod cursor;

pub use buffer::{Buffer, BufferError};
pub use cursor::{Cursor, Direction};
