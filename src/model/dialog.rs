//! Find/replace dialog state
//!
//! The dialog is created on first use and then only shown or hidden, so the
//! inputs keep whatever the user typed last.

use crate::util::text::{next_boundary, prev_boundary};

/// A single-line text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    /// Byte offset of the cursor in `text`
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input with text, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters before the cursor (for drawing the caret)
    pub fn cursor_char_index(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = prev_boundary(self.text.as_bytes(), self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn delete_forward(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        let end = next_boundary(self.text.as_bytes(), self.cursor);
        self.text.replace_range(self.cursor..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_boundary(self.text.as_bytes(), self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = next_boundary(self.text.as_bytes(), self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Place the cursor before the character at `char_index` (mouse clicks)
    pub fn set_cursor_char_index(&mut self, char_index: usize) {
        self.cursor = self
            .text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset);
    }
}

/// Which dialog input receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogField {
    #[default]
    Search,
    Replace,
}

impl DialogField {
    pub fn next(self) -> Self {
        match self {
            DialogField::Search => DialogField::Replace,
            DialogField::Replace => DialogField::Search,
        }
    }
}

/// The find/replace dialog singleton
#[derive(Debug, Clone, Default)]
pub struct FindDialog {
    /// Text to look for
    pub search: TextInput,
    /// Text to substitute on "Replace"
    pub replacement: TextInput,
    /// Focused input
    pub focus: DialogField,
    /// Whether the dialog window is currently shown
    pub visible: bool,
}

impl FindDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused input
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            DialogField::Search => &mut self.search,
            DialogField::Replace => &mut self.replacement,
        }
    }

    pub fn input(&self, field: DialogField) -> &TextInput {
        match field {
            DialogField::Search => &self.search,
            DialogField::Replace => &self.replacement,
        }
    }

    pub fn input_mut(&mut self, field: DialogField) -> &mut TextInput {
        match field {
            DialogField::Search => &mut self.search,
            DialogField::Replace => &mut self.replacement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete() {
        let mut input = TextInput::new();
        input.insert_char('a');
        input.insert_char('é');
        input.insert_char('b');
        assert_eq!(input.text(), "aéb");

        input.move_left();
        input.delete_backward();
        assert_eq!(input.text(), "ab");
        assert_eq!(input.cursor(), 1);

        input.delete_forward();
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn test_delete_at_edges_is_noop() {
        let mut input = TextInput::with_text("x");
        input.delete_forward();
        assert_eq!(input.text(), "x");
        input.move_home();
        input.delete_backward();
        assert_eq!(input.text(), "x");
    }

    #[test]
    fn test_cursor_char_index() {
        let mut input = TextInput::with_text("héllo");
        assert_eq!(input.cursor_char_index(), 5);
        input.set_cursor_char_index(2);
        assert_eq!(input.cursor(), 3);
        assert_eq!(input.cursor_char_index(), 2);
        input.set_cursor_char_index(42);
        assert_eq!(input.cursor(), input.text().len());
    }

    #[test]
    fn test_focused_input_mut_follows_focus() {
        let mut dialog = FindDialog::new();
        dialog.focused_input_mut().insert_str("needle");
        dialog.focus = dialog.focus.next();
        dialog.focused_input_mut().insert_str("thread");
        assert_eq!(dialog.search.text(), "needle");
        assert_eq!(dialog.replacement.text(), "thread");
    }
}
