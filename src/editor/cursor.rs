use super::Buffer;

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Cursor position in a [`Buffer`].
///
/// `col_hint` remembers the last column the user chose on purpose. Vertical
/// moves clamp the visible column to the line length but keep the hint, so
/// crossing a short line does not lose the horizontal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    row: usize,
    col: usize,
    col_hint: usize,
}

impl Cursor {
    /// Create a cursor at row 0, column 0.
    pub const fn new() -> Self {
        Self {
            row: 0,
            col: 0,
            col_hint: 0,
        }
    }

    /// Create a cursor at a specific position.
    pub const fn at(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            col_hint: col,
        }
    }

    /// Zero-based line index.
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column, in chars.
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Remembered column for vertical movement.
    pub const fn col_hint(&self) -> usize {
        self.col_hint
    }

    /// Set the column on purpose; the hint follows.
    pub const fn set_col(&mut self, col: usize) {
        self.col = col;
        self.col_hint = col;
    }

    /// Pull the visible column back inside the current line, restoring the
    /// hint where the line is long enough. The hint is left alone.
    pub fn clamp_col_to_line(&mut self, buffer: &Buffer) {
        self.col = self.col_hint.min(buffer.line_len(self.row));
    }

    /// Cap the visible column at `max` without touching the hint.
    pub const fn limit_col(&mut self, max: usize) {
        if self.col > max {
            self.col = max;
        }
    }

    /// Move the cursor in the given direction.
    pub fn move_in(&mut self, direction: Direction, buffer: &Buffer) {
        match direction {
            Direction::Up => self.up(buffer),
            Direction::Down => self.down(buffer),
            Direction::Left => self.left(buffer),
            Direction::Right => self.right(buffer),
        }
    }

    pub fn up(&mut self, buffer: &Buffer) {
        if self.row > 0 {
            self.row -= 1;
            self.clamp_col_to_line(buffer);
        }
    }

    pub fn down(&mut self, buffer: &Buffer) {
        if self.row < buffer.bottom() {
            self.row += 1;
            self.clamp_col_to_line(buffer);
        }
    }

    /// Step one column left, wrapping to the end of the previous line.
    pub fn left(&mut self, buffer: &Buffer) {
        if self.col > 0 {
            self.set_col(self.col - 1);
        } else if self.row > 0 {
            self.row -= 1;
            self.set_col(buffer.line_len(self.row));
        }
    }

    /// Step one column right, wrapping to the start of the next line.
    pub fn right(&mut self, buffer: &Buffer) {
        if self.col < buffer.line_len(self.row) {
            self.set_col(self.col + 1);
        } else if self.row < buffer.bottom() {
            self.row += 1;
            self.set_col(0);
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
