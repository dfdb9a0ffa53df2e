//! Single-line edit buffer.
//!
//! Backs the search and min-employees inputs. Pure data: the view
//! feeds key events in, the state layer reads the text out. The cursor
//! is a character index, never inside a UTF-8 sequence.

/// A line of text plus a cursor position (in characters).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineEditor {
    text: String,
    cursor: usize,
}

impl LineEditor {
    /// Empty editor, cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor pre-filled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte offset of the cursor into the text, for slicing.
    pub fn byte_cursor(&self) -> usize {
        self.byte_index(self.cursor)
    }

    /// Insert a character at the cursor and advance it.
    pub fn insert(&mut self, ch: char) {
        let byte_index = self.byte_index(self.cursor);
        self.text.insert(byte_index, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor, if any.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte_index = self.byte_index(self.cursor - 1);
        self.text.remove(byte_index);
        self.cursor -= 1;
    }

    /// Move the cursor one character left (saturating).
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right (saturating at the end).
    pub fn move_right(&mut self) {
        let len = self.text.chars().count();
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
