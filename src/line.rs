//! Editable query line for the interactive host

use unicode_width::UnicodeWidthStr;

/// A single line of query text with a cursor
#[derive(Debug, Clone, Default)]
pub struct QueryLine {
    /// The text content
    text: String,
    /// Cursor byte offset, always on a char boundary
    cursor: usize,
}

impl QueryLine {
    /// Create a new empty line
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor byte offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor
    pub fn cursor_col(&self) -> usize {
        self.text[..self.cursor].width()
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.text.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let next = self.next_boundary();
        self.text.replace_range(self.cursor..next, "");
        true
    }

    /// Move one character left
    pub fn left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    /// Move one character right
    pub fn right(&mut self) {
        self.cursor = self.next_boundary();
    }

    /// Move to beginning of line
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Move to end of line
    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Take the text, leaving the line empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(idx, _)| idx)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map_or(self.cursor, |ch| self.cursor + ch.len_utf8())
    }
}
