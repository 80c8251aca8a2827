//! Viewport management for scrolling.
//!
//! The [`Window`] tracks which part of the buffer is on screen. Vertical
//! scrolling follows the cursor one line at a time; horizontal scrolling
//! jumps a page at a time.

use std::ops::Range;

use crate::editor::{Buffer, Cursor};

/// The visible portion of a buffer.
///
/// The window tracks:
/// - Origin (`row`, `col`) of its top-left cell in buffer coordinates
/// - Size (`n_rows`, `n_cols`) in display cells, which is the terminal
///   size minus the status row and one reserved column
///
/// # Example
///
/// ```
/// use textpad::editor::Cursor;
/// use textpad::ui::window::Window;
///
/// let mut win = Window::new(23, 79);
/// let cursor = Cursor::at(0, 100);
/// win.horizontal_scroll(&cursor, 1, 2);
/// assert_eq!(win.col(), 74);
/// assert_eq!(win.translate(&cursor), (0, 26));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    row: usize,
    col: usize,
    n_rows: usize,
    n_cols: usize,
}

impl Window {
    /// Create a window of the given size at the buffer origin.
    pub const fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            row: 0,
            col: 0,
            n_rows,
            n_cols,
        }
    }

    /// Create a window sized for a terminal, reserving the last row and column.
    pub const fn for_terminal(terminal_rows: u16, terminal_cols: u16) -> Self {
        Self::new(
            terminal_rows.saturating_sub(1) as usize,
            terminal_cols.saturating_sub(1) as usize,
        )
    }

    /// First buffer row on screen.
    pub const fn row(&self) -> usize {
        self.row
    }

    /// First buffer column on screen.
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Number of text rows.
    pub const fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of text columns.
    pub const fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Last buffer row on screen.
    pub const fn bottom(&self) -> usize {
        (self.row + self.n_rows).saturating_sub(1)
    }

    /// Buffer rows covered by the window, clamped to the buffer.
    pub fn visible_rows(&self, buffer: &Buffer) -> Range<usize> {
        let start = self.row.min(buffer.line_count());
        let end = (self.row + self.n_rows).min(buffer.line_count());
        start..end
    }

    /// Recompute the size from the terminal and keep the cursor in view.
    ///
    /// A height change re-anchors the top row on the cursor. A width change
    /// that leaves the cursor past the right edge pulls its column back.
    /// Returns `true` if the size changed.
    pub fn update_size(
        &mut self,
        terminal_rows: u16,
        terminal_cols: u16,
        cursor: &mut Cursor,
    ) -> bool {
        let n_rows = terminal_rows.saturating_sub(1) as usize;
        let n_cols = terminal_cols.saturating_sub(1) as usize;
        let rows_changed = n_rows != self.n_rows;
        let cols_changed = n_cols != self.n_cols;
        self.n_rows = n_rows;
        self.n_cols = n_cols;

        if rows_changed || cursor.row() < self.row || cursor.row() > self.bottom() {
            self.row = cursor.row();
        }
        // The reserved column still counts as on screen.
        if cols_changed && cursor.col() > self.col + self.n_cols {
            cursor.limit_col(self.col + self.n_cols);
        }
        rows_changed || cols_changed
    }

    /// Scroll up one line when the cursor has just left the top edge.
    pub const fn scroll_up(&mut self, cursor: &Cursor) {
        if self.row > 0 && cursor.row() + 1 == self.row {
            self.row -= 1;
        }
    }

    /// Scroll down one line when the cursor has just left the bottom edge.
    pub fn scroll_down(&mut self, buffer: &Buffer, cursor: &Cursor) {
        if cursor.row() == self.bottom() + 1 && self.bottom() < buffer.bottom() {
            self.row += 1;
        }
    }

    /// Page the window horizontally so the cursor's column is on screen.
    ///
    /// Pages are `n_cols - right_margin` wide. The window starts
    /// `left_margin + right_margin` columns before the cursor's page so some
    /// of the previous page stays visible.
    pub const fn horizontal_scroll(
        &mut self,
        cursor: &Cursor,
        left_margin: usize,
        right_margin: usize,
    ) {
        let page_width = self.page_width(right_margin);
        let page = cursor.col() / page_width;
        self.col = (page * page_width).saturating_sub(right_margin + left_margin);
    }

    /// Cursor position relative to the window's origin.
    pub const fn translate(&self, cursor: &Cursor) -> (usize, usize) {
        (
            cursor.row().saturating_sub(self.row),
            cursor.col().saturating_sub(self.col),
        )
    }

    const fn page_width(&self, right_margin: usize) -> usize {
        let width = self.n_cols.saturating_sub(right_margin);
        if width == 0 { 1 } else { width }
    }
}
