//! Pending input text and submission.

use crate::message::{IdAllocator, Message};

/// Text being composed, with a cursor.
///
/// The cursor is a character index, not a byte index, so editing stays on
/// char boundaries for any input.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    text: String,
    cursor: usize,
}

impl Composer {
    /// Create an empty composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pending text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether there is no pending text at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether a submission would produce a message.
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Replace the pending text and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_len();
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor.
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Insert a literal line break.
    pub fn insert_newline(&mut self) {
        self.insert('\n');
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Turn the pending text into a user message.
    ///
    /// Whitespace-only input is left untouched and yields `None`. Otherwise
    /// the text is taken verbatim (not trimmed) and the composer is cleared.
    pub fn submit(&mut self, ids: &mut IdAllocator) -> Option<Message> {
        if !self.can_submit() {
            return None;
        }
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        Some(Message::user(ids.next_id(), text))
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }
}
