//! Editor state - cursor and viewport for the single text area

use super::document::Document;
use crate::util::text::{
    byte_col_to_visual_col, next_boundary, prev_boundary, snap_to_boundary, visual_col_to_byte_col,
};

/// Viewport state - what portion of the document is visible
#[derive(Debug, Clone)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// First visible visual column (for horizontal scrolling)
    pub left_column: usize,
    /// Number of lines that fit in the viewport
    pub visible_lines: usize,
    /// Number of columns that fit in the viewport
    pub visible_columns: usize,
}

impl Viewport {
    /// Create a new viewport with the given dimensions
    pub fn new(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            top_line: 0,
            left_column: 0,
            visible_lines,
            visible_columns,
        }
    }
}

/// Cursor and scroll state for the text area
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Cursor position as a byte offset, always on a character boundary
    pub cursor: usize,
    /// Visual column to aim for when moving vertically across short lines
    pub desired_column: Option<usize>,
    pub viewport: Viewport,
    /// Lines kept between the cursor and the viewport edge when scrolling
    pub scroll_padding: usize,
}

impl EditorState {
    pub fn with_viewport(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            cursor: 0,
            desired_column: None,
            viewport: Viewport::new(visible_lines, visible_columns),
            scroll_padding: 1,
        }
    }

    /// Cursor as `(line, visual column)`
    pub fn cursor_line_visual_col(&self, document: &Document) -> (usize, usize) {
        let (line, byte_col) = document.offset_to_line_col(self.cursor);
        let text = document.line(line).unwrap_or_default();
        (line, byte_col_to_visual_col(text, byte_col))
    }

    /// Place the cursor at a byte offset, clamped and snapped to a boundary
    pub fn set_cursor(&mut self, document: &Document, offset: usize) {
        self.cursor = snap_to_boundary(document.bytes(), offset);
        self.desired_column = None;
    }

    /// Place the cursor at a line and visual column (mouse clicks)
    pub fn set_cursor_visual(&mut self, document: &Document, line: usize, visual_col: usize) {
        let line = line.min(document.line_count() - 1);
        let text = document.line(line).unwrap_or_default();
        let byte_col = visual_col_to_byte_col(text, visual_col);
        self.cursor = document.line_start(line) + byte_col;
        self.desired_column = None;
    }

    pub fn move_left(&mut self, document: &Document) {
        self.cursor = prev_boundary(document.bytes(), self.cursor);
        self.desired_column = None;
    }

    pub fn move_right(&mut self, document: &Document) {
        self.cursor = next_boundary(document.bytes(), self.cursor);
        self.desired_column = None;
    }

    /// Move up (negative) or down (positive) by `lines`, keeping the column
    pub fn move_vertical(&mut self, document: &Document, lines: isize) {
        let (line, visual_col) = self.cursor_line_visual_col(document);
        let target_col = *self.desired_column.get_or_insert(visual_col);

        let last_line = document.line_count() - 1;
        let target_line = if lines < 0 {
            line.saturating_sub(lines.unsigned_abs())
        } else {
            (line + lines as usize).min(last_line)
        };

        if target_line == line {
            // Top/bottom edge: jump to the start/end of the line
            self.cursor = if lines < 0 {
                document.line_start(line)
            } else {
                document.line_end(line)
            };
            return;
        }

        let text = document.line(target_line).unwrap_or_default();
        self.cursor = document.line_start(target_line) + visual_col_to_byte_col(text, target_col);
    }

    pub fn move_line_start(&mut self, document: &Document) {
        let (line, _) = document.offset_to_line_col(self.cursor);
        self.cursor = document.line_start(line);
        self.desired_column = None;
    }

    pub fn move_line_end(&mut self, document: &Document) {
        let (line, _) = document.offset_to_line_col(self.cursor);
        self.cursor = document.line_end(line);
        self.desired_column = None;
    }

    pub fn move_document_start(&mut self) {
        self.cursor = 0;
        self.desired_column = None;
    }

    pub fn move_document_end(&mut self, document: &Document) {
        self.cursor = document.len();
        self.desired_column = None;
    }

    pub fn resize_viewport(&mut self, visible_lines: usize, visible_columns: usize) {
        self.viewport.visible_lines = visible_lines;
        self.viewport.visible_columns = visible_columns;
    }

    /// Scroll the viewport vertically by `delta` lines, clamped to the document
    pub fn scroll(&mut self, document: &Document, delta: i32) {
        let max_top = document
            .line_count()
            .saturating_sub(self.viewport.visible_lines.max(1));
        let top = self.viewport.top_line as i64 + delta as i64;
        self.viewport.top_line = top.clamp(0, max_top as i64) as usize;
    }

    /// Scroll the viewport horizontally by `delta` columns
    pub fn scroll_horizontal(&mut self, delta: i32) {
        let left = self.viewport.left_column as i64 + delta as i64;
        self.viewport.left_column = left.max(0) as usize;
    }

    /// Ensure the cursor is inside the viewport with padding (minimal scroll)
    pub fn ensure_cursor_visible(&mut self, document: &Document) {
        let (line, visual_col) = self.cursor_line_visual_col(document);
        let vp = &mut self.viewport;

        if vp.visible_lines > 0 {
            let padding = self.scroll_padding.min(vp.visible_lines.saturating_sub(1) / 2);
            if line < vp.top_line + padding {
                vp.top_line = line.saturating_sub(padding);
            } else if line + padding >= vp.top_line + vp.visible_lines {
                vp.top_line = (line + padding + 1).saturating_sub(vp.visible_lines);
            }
            let max_top = document.line_count().saturating_sub(vp.visible_lines);
            vp.top_line = vp.top_line.min(max_top.max(line.saturating_sub(vp.visible_lines - 1)));
        }

        if vp.visible_columns > 0 {
            if visual_col < vp.left_column {
                vp.left_column = visual_col;
            } else if visual_col >= vp.left_column + vp.visible_columns {
                vp.left_column = visual_col + 1 - vp.visible_columns;
            }
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::with_viewport(25, 80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_cursor_snaps_out_of_three_byte_char() {
        let doc = Document::with_text("€x");
        let mut editor = EditorState::with_viewport(10, 40);
        editor.set_cursor(&doc, 2);
        assert_eq!(editor.cursor, 0);
        editor.set_cursor(&doc, 3);
        assert_eq!(editor.cursor, 3);
    }

    #[test]
    fn test_move_right_over_multibyte() {
        let doc = Document::with_text("aé b");
        let mut editor = EditorState::default();
        editor.move_right(&doc);
        assert_eq!(editor.cursor, 1);
        editor.move_right(&doc);
        assert_eq!(editor.cursor, 3);
        editor.move_left(&doc);
        assert_eq!(editor.cursor, 1);
    }

    #[test]
    fn test_vertical_move_keeps_desired_column() {
        let doc = Document::with_text("hello world\nhi\nanother line");
        let mut editor = EditorState::default();
        editor.set_cursor(&doc, 8);

        editor.move_vertical(&doc, 1);
        assert_eq!(doc.offset_to_line_col(editor.cursor), (1, 2));

        editor.move_vertical(&doc, 1);
        assert_eq!(doc.offset_to_line_col(editor.cursor), (2, 8));
    }

    #[test]
    fn test_vertical_move_at_edges() {
        let doc = Document::with_text("abc\ndef");
        let mut editor = EditorState::default();
        editor.set_cursor(&doc, 2);
        editor.move_vertical(&doc, -1);
        assert_eq!(editor.cursor, 0);

        editor.set_cursor(&doc, 5);
        editor.move_vertical(&doc, 1);
        assert_eq!(editor.cursor, 7);
    }

    #[test]
    fn test_set_cursor_snaps_to_boundary() {
        let doc = Document::with_text("é");
        let mut editor = EditorState::default();
        editor.set_cursor(&doc, 1);
        assert_eq!(editor.cursor, 0);
        editor.set_cursor(&doc, 99);
        assert_eq!(editor.cursor, 2);
    }

    #[test]
    fn test_ensure_cursor_visible_scrolls_down() {
        let text = (0..100).map(|i| format!("line {}\n", i)).collect::<String>();
        let doc = Document::with_text(&text);
        let mut editor = EditorState::with_viewport(10, 40);
        editor.set_cursor(&doc, doc.line_start(50));
        editor.ensure_cursor_visible(&doc);

        let top = editor.viewport.top_line;
        assert!(top <= 50 && 50 < top + 10);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let doc = Document::with_text("a\nb\nc");
        let mut editor = EditorState::with_viewport(2, 40);
        editor.scroll(&doc, 10);
        assert_eq!(editor.viewport.top_line, 1);
        editor.scroll(&doc, -10);
        assert_eq!(editor.viewport.top_line, 0);
    }
}
