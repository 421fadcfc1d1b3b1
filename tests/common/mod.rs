//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use jot::config::EditorConfig;
use jot::messages::{DialogMsg, Msg};
use jot::model::{AppModel, Document, Viewport};
use jot::theme::Theme;
use jot::update::update;

/// Create a test model with given text and the cursor at a byte offset
pub fn test_model(text: &str, cursor: usize) -> AppModel {
    let mut model = AppModel::from_parts(
        Document::with_text(text),
        EditorConfig::default(),
        Theme::default(),
        (800, 600),
    );
    model.editor.viewport = Viewport {
        top_line: 0,
        left_column: 0,
        visible_lines: 25,
        visible_columns: 80,
    };
    model.editor.scroll_padding = 1;
    model.editor.set_cursor(&model.document, cursor);
    model
}

/// Create a test model with the cursor at a line and byte column
pub fn test_model_at(text: &str, line: usize, column: usize) -> AppModel {
    let document = Document::with_text(text);
    let offset = document.line_col_to_offset(line, column);
    test_model(text, offset)
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.document.text_lossy()
}

/// Cursor as `(line, byte column)`
pub fn cursor_line_col(model: &AppModel) -> (usize, usize) {
    model.document.offset_to_line_col(model.editor.cursor)
}

/// Open the find dialog and type the search and replacement texts
pub fn open_dialog_with(model: &mut AppModel, search: &str, replacement: &str) {
    update(model, Msg::Dialog(DialogMsg::Open));
    let dialog = model
        .find_dialog
        .as_mut()
        .expect("dialog exists after Open");
    dialog.search.set_text(search);
    dialog.replacement.set_text(replacement);
}
