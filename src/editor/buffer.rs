use ropey::Rope;
use thiserror::Error;

use super::Cursor;

/// A cursor position that a [`Buffer`] primitive refused to act on.
///
/// The dispatcher always clamps the cursor before touching the buffer, so
/// seeing one of these means a caller broke the position contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("row {row} is past the last line ({bottom})")]
    RowOutOfRange { row: usize, bottom: usize },
    #[error("column {col} is past the end of line {row} (length {len})")]
    ColumnOutOfRange { row: usize, col: usize, len: usize },
    #[error("inserted text must not contain a line break")]
    EmbeddedLineBreak,
}

/// Ordered lines of text backed by a rope.
///
/// Only `\n` separates lines. The buffer always holds at least one line,
/// possibly empty, and columns are counted in `char`s.
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    /// Create a buffer by splitting `text` on line breaks.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Create a buffer holding a single empty line.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Total number of lines, never zero.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Index of the last line.
    pub fn bottom(&self) -> usize {
        self.line_count() - 1
    }

    /// Get the content of a line (without its line break).
    pub fn line_at(&self, row: usize) -> Option<String> {
        if row > self.bottom() {
            return None;
        }
        let mut line = self.rope.line(row).to_string();
        if row < self.bottom() {
            line.pop();
        }
        Some(line)
    }

    /// Length of a line in chars (without its line break).
    pub fn line_len(&self, row: usize) -> usize {
        if row > self.bottom() {
            return 0;
        }
        let len = self.rope.line(row).len_chars();
        if row < self.bottom() { len - 1 } else { len }
    }

    /// All lines, in order.
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|row| self.line_at(row))
            .collect()
    }

    /// The full text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Splice `text` into the cursor's line at the cursor's column.
    ///
    /// # Errors
    ///
    /// Fails if the cursor is outside the buffer or `text` holds a line break.
    pub fn insert(&mut self, cursor: &Cursor, text: &str) -> Result<(), BufferError> {
        if text.contains('\n') {
            return Err(BufferError::EmbeddedLineBreak);
        }
        let idx = self.char_idx(cursor)?;
        self.rope.insert(idx, text);
        Ok(())
    }

    /// Split the cursor's line in two at the cursor's column.
    ///
    /// # Errors
    ///
    /// Fails if the cursor is outside the buffer.
    pub fn split(&mut self, cursor: &Cursor) -> Result<(), BufferError> {
        let idx = self.char_idx(cursor)?;
        self.rope.insert_char(idx, '\n');
        Ok(())
    }

    /// Delete the character under the cursor, joining with the next line
    /// when the cursor sits at the end of a line.
    ///
    /// Does nothing at the very end of the buffer.
    ///
    /// # Errors
    ///
    /// Fails if the cursor is outside the buffer.
    pub fn delete(&mut self, cursor: &Cursor) -> Result<(), BufferError> {
        let idx = self.char_idx(cursor)?;
        if cursor.row() == self.bottom() && cursor.col() == self.line_len(cursor.row()) {
            return Ok(());
        }
        // At end of line the char at `idx` is the line break itself.
        self.rope.remove(idx..=idx);
        Ok(())
    }

    /// Convert a cursor position to a rope char index, checking bounds.
    fn char_idx(&self, cursor: &Cursor) -> Result<usize, BufferError> {
        let (row, col) = (cursor.row(), cursor.col());
        if row > self.bottom() {
            return Err(BufferError::RowOutOfRange {
                row,
                bottom: self.bottom(),
            });
        }
        let len = self.line_len(row);
        if col > len {
            return Err(BufferError::ColumnOutOfRange { row, col, len });
        }
        Ok(self.rope.line_to_char(row) + col)
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Construction and basic queries ---

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = Buffer::empty();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.bottom(), 0);
        assert_eq!(buf.line_at(0), Some(String::new()));
    }

    #[test]
    fn test_from_text_splits_on_newlines() {
        let buf = Buffer::from_text("hello\nworld");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_at(0), Some("hello".to_string()));
        assert_eq!(buf.line_at(1), Some("world".to_string()));
    }

    #[test]
    fn test_from_text_trailing_newline_adds_empty_line() {
        let buf = Buffer::from_text("hello\n");
        assert_eq!(buf.lines(), vec!["hello", ""]);
    }

    #[test]
    fn test_carriage_return_is_not_a_line_break() {
        let buf = Buffer::from_text("a\r\nb\rc");
        assert_eq!(buf.lines(), vec!["a\r", "b\rc"]);
        assert_eq!(buf.line_len(1), 3);
    }

    #[test]
    fn test_line_at_out_of_bounds_returns_none() {
        let buf = Buffer::from_text("hello");
        assert_eq!(buf.line_at(1), None);
    }

    #[test]
    fn test_line_len_counts_chars() {
        let buf = Buffer::from_text("café\nhi");
        assert_eq!(buf.line_len(0), 4);
        assert_eq!(buf.line_len(1), 2);
    }

    #[test]
    fn test_text_roundtrip() {
        let content = "line one\nline two\n\nline four";
        let buf = Buffer::from_text(content);
        assert_eq!(buf.text(), content);
    }

    // --- insert ---

    #[test]
    fn test_insert_in_middle() {
        let mut buf = Buffer::from_text("hllo");
        buf.insert(&Cursor::at(0, 1), "e").unwrap();
        assert_eq!(buf.lines(), vec!["hello"]);
    }

    #[test]
    fn test_insert_string_at_end_of_second_line() {
        let mut buf = Buffer::from_text("abc\nde");
        buf.insert(&Cursor::at(1, 2), "fgh").unwrap();
        assert_eq!(buf.lines(), vec!["abc", "defgh"]);
    }

    #[test]
    fn test_insert_multibyte_char() {
        let mut buf = Buffer::from_text("caf");
        buf.insert(&Cursor::at(0, 3), "é").unwrap();
        buf.insert(&Cursor::at(0, 4), "!").unwrap();
        assert_eq!(buf.lines(), vec!["café!"]);
    }

    #[test]
    fn test_insert_rejects_line_break() {
        let mut buf = Buffer::from_text("abc");
        let err = buf.insert(&Cursor::at(0, 1), "x\ny").unwrap_err();
        assert_eq!(err, BufferError::EmbeddedLineBreak);
        assert_eq!(buf.lines(), vec!["abc"]);
    }

    #[test]
    fn test_insert_rejects_column_past_end() {
        let mut buf = Buffer::from_text("abc");
        let err = buf.insert(&Cursor::at(0, 4), "x").unwrap_err();
        assert_eq!(
            err,
            BufferError::ColumnOutOfRange {
                row: 0,
                col: 4,
                len: 3
            }
        );
    }

    // --- split ---

    #[test]
    fn test_split_at_end_of_line() {
        let mut buf = Buffer::from_text("abc\ndefgh");
        buf.split(&Cursor::at(0, 3)).unwrap();
        assert_eq!(buf.lines(), vec!["abc", "", "defgh"]);
    }

    #[test]
    fn test_split_at_start_of_line() {
        let mut buf = Buffer::from_text("hello");
        buf.split(&Cursor::at(0, 0)).unwrap();
        assert_eq!(buf.lines(), vec!["", "hello"]);
    }

    #[test]
    fn test_split_in_middle() {
        let mut buf = Buffer::from_text("hello world");
        buf.split(&Cursor::at(0, 5)).unwrap();
        assert_eq!(buf.lines(), vec!["hello", " world"]);
    }

    #[test]
    fn test_split_rejects_row_past_bottom() {
        let mut buf = Buffer::from_text("hello");
        let err = buf.split(&Cursor::at(1, 0)).unwrap_err();
        assert_eq!(err, BufferError::RowOutOfRange { row: 1, bottom: 0 });
        assert_eq!(buf.line_count(), 1);
    }

    // --- delete ---

    #[test]
    fn test_delete_at_end_of_buffer_is_noop() {
        let mut buf = Buffer::from_text("ab");
        buf.delete(&Cursor::at(0, 2)).unwrap();
        assert_eq!(buf.lines(), vec!["ab"]);
    }

    #[test]
    fn test_delete_removes_char_under_cursor() {
        let mut buf = Buffer::from_text("hello");
        buf.delete(&Cursor::at(0, 0)).unwrap();
        assert_eq!(buf.lines(), vec!["ello"]);
    }

    #[test]
    fn test_delete_at_end_of_line_joins_next() {
        let mut buf = Buffer::from_text("hello\nworld\n!");
        buf.delete(&Cursor::at(0, 5)).unwrap();
        assert_eq!(buf.lines(), vec!["helloworld", "!"]);
    }

    #[test]
    fn test_delete_last_char_leaves_one_empty_line() {
        let mut buf = Buffer::from_text("x");
        buf.delete(&Cursor::at(0, 0)).unwrap();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
        buf.delete(&Cursor::at(0, 0)).unwrap();
        assert_eq!(buf.line_count(), 1);
    }

    #[test]
    fn test_delete_joins_empty_lines() {
        let mut buf = Buffer::from_text("\n\n");
        buf.delete(&Cursor::at(1, 0)).unwrap();
        assert_eq!(buf.lines(), vec!["", ""]);
    }

    #[test]
    fn test_delete_rejects_out_of_range_cursor() {
        let mut buf = Buffer::from_text("ab\ncd");
        assert!(buf.delete(&Cursor::at(2, 0)).is_err());
        assert!(buf.delete(&Cursor::at(0, 3)).is_err());
        assert_eq!(buf.lines(), vec!["ab", "cd"]);
    }

    // --- Combined sequences ---

    #[test]
    fn test_split_then_delete_restores_line() {
        let mut buf = Buffer::from_text("helloworld");
        buf.split(&Cursor::at(0, 5)).unwrap();
        assert_eq!(buf.lines(), vec!["hello", "world"]);
        buf.delete(&Cursor::at(0, 5)).unwrap();
        assert_eq!(buf.lines(), vec!["helloworld"]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Insert(String),
            Split,
            Delete,
        }

        fn op() -> impl Strategy<Value = (Op, usize, usize)> {
            let kind = prop_oneof![
                "[a-z]{0,4}".prop_map(Op::Insert),
                Just(Op::Split),
                Just(Op::Delete),
            ];
            (kind, any::<usize>(), any::<usize>())
        }

        proptest! {
            #[test]
            fn never_becomes_empty(
                start in "[a-z]{0,8}",
                ops in proptest::collection::vec(op(), 0..64),
            ) {
                let mut buf = Buffer::from_text(&start);
                for (op, row_seed, col_seed) in ops {
                    let row = row_seed % buf.line_count();
                    let col = col_seed % (buf.line_len(row) + 1);
                    let cursor = Cursor::at(row, col);
                    match op {
                        Op::Insert(text) => buf.insert(&cursor, &text).unwrap(),
                        Op::Split => buf.split(&cursor).unwrap(),
                        Op::Delete => buf.delete(&cursor).unwrap(),
                    }
                    prop_assert!(buf.line_count() >= 1);
                }
            }

            #[test]
            fn split_then_delete_is_identity(line in "[ -~]{0,40}", col_seed in any::<usize>()) {
                let col = col_seed % (line.chars().count() + 1);
                let mut buf = Buffer::from_text(&line);
                buf.split(&Cursor::at(0, col)).unwrap();
                prop_assert_eq!(buf.line_count(), 2);
                buf.delete(&Cursor::at(0, col)).unwrap();
                prop_assert_eq!(buf.lines(), vec![line]);
            }

            #[test]
            fn insert_then_delete_is_identity(
                line in "[ -~]{0,40}",
                text in "[a-zé]{1,6}",
                col_seed in any::<usize>(),
            ) {
                let col = col_seed % (line.chars().count() + 1);
                let mut buf = Buffer::from_text(&line);
                let cursor = Cursor::at(0, col);
                buf.insert(&cursor, &text).unwrap();
                for _ in text.chars() {
                    buf.delete(&cursor).unwrap();
                }
                prop_assert_eq!(buf.lines(), vec![line]);
            }
        }
    }
}
