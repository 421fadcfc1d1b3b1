//! Text editing tests - insert and delete at the cursor

mod common;

use common::{buffer_to_string, cursor_line_col, test_model, test_model_at};
use jot::messages::{DocumentMsg, Msg};
use jot::update::update;

// ========================================================================
// InsertChar tests
// ========================================================================

#[test]
fn test_insert_char_at_start() {
    let mut model = test_model("hello", 0);
    update(&mut model, Msg::Document(DocumentMsg::InsertChar('X')));

    assert_eq!(buffer_to_string(&model), "Xhello");
    assert_eq!(model.editor.cursor, 1);
}

#[test]
fn test_insert_char_at_middle() {
    let mut model = test_model("hello", 2);
    update(&mut model, Msg::Document(DocumentMsg::InsertChar('X')));

    assert_eq!(buffer_to_string(&model), "heXllo");
    assert_eq!(model.editor.cursor, 3);
}

#[test]
fn test_insert_char_at_end() {
    let mut model = test_model("hello", 5);
    update(&mut model, Msg::Document(DocumentMsg::InsertChar('X')));

    assert_eq!(buffer_to_string(&model), "helloX");
    assert_eq!(model.editor.cursor, 6);
}

#[test]
fn test_insert_multiple_chars_consecutively() {
    let mut model = test_model("hello", 5);
    for ch in " world".chars() {
        update(&mut model, Msg::Document(DocumentMsg::InsertChar(ch)));
    }

    assert_eq!(buffer_to_string(&model), "hello world");
    assert_eq!(model.editor.cursor, 11);
}

#[test]
fn test_insert_multibyte_char_advances_by_its_length() {
    let mut model = test_model("ab", 1);
    update(&mut model, Msg::Document(DocumentMsg::InsertChar('€')));

    assert_eq!(buffer_to_string(&model), "a€b");
    assert_eq!(model.editor.cursor, 1 + '€'.len_utf8());
}

#[test]
fn test_insert_marks_document_modified() {
    let mut model = test_model("", 0);
    assert!(!model.document.is_modified);
    update(&mut model, Msg::Document(DocumentMsg::InsertChar('a')));
    assert!(model.document.is_modified);
}

// ========================================================================
// Newline and Tab
// ========================================================================

#[test]
fn test_insert_newline_splits_line() {
    let mut model = test_model("helloworld", 5);
    update(&mut model, Msg::Document(DocumentMsg::InsertNewline));

    assert_eq!(buffer_to_string(&model), "hello\nworld");
    assert_eq!(cursor_line_col(&model), (1, 0));
    assert_eq!(model.document.line_count(), 2);
}

#[test]
fn test_insert_tab_is_literal() {
    let mut model = test_model("ab", 1);
    update(&mut model, Msg::Document(DocumentMsg::InsertTab));

    assert_eq!(buffer_to_string(&model), "a\tb");
    assert_eq!(model.editor.cursor, 2);
}

// ========================================================================
// DeleteBackward tests
// ========================================================================

#[test]
fn test_delete_backward_middle() {
    let mut model = test_model("hello", 3);
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert_eq!(buffer_to_string(&model), "helo");
    assert_eq!(model.editor.cursor, 2);
}

#[test]
fn test_delete_backward_at_start_does_nothing() {
    let mut model = test_model("hello", 0);
    let cmd = update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert!(cmd.is_none());
    assert_eq!(buffer_to_string(&model), "hello");
    assert!(!model.document.is_modified);
}

#[test]
fn test_delete_backward_joins_lines() {
    let mut model = test_model_at("hello\nworld", 1, 0);
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert_eq!(buffer_to_string(&model), "helloworld");
    assert_eq!(cursor_line_col(&model), (0, 5));
}

#[test]
fn test_delete_backward_removes_whole_multibyte_char() {
    let mut model = test_model("aéb", 3);
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert_eq!(buffer_to_string(&model), "ab");
    assert_eq!(model.editor.cursor, 1);
}

// ========================================================================
// DeleteForward tests
// ========================================================================

#[test]
fn test_delete_forward_middle() {
    let mut model = test_model("hello", 1);
    update(&mut model, Msg::Document(DocumentMsg::DeleteForward));

    assert_eq!(buffer_to_string(&model), "hllo");
    assert_eq!(model.editor.cursor, 1);
}

#[test]
fn test_delete_forward_at_end_does_nothing() {
    let mut model = test_model("hello", 5);
    let cmd = update(&mut model, Msg::Document(DocumentMsg::DeleteForward));

    assert!(cmd.is_none());
    assert_eq!(buffer_to_string(&model), "hello");
}

#[test]
fn test_delete_forward_joins_lines() {
    let mut model = test_model("ab\ncd", 2);
    update(&mut model, Msg::Document(DocumentMsg::DeleteForward));
    assert_eq!(buffer_to_string(&model), "abcd");
}

#[test]
fn test_delete_forward_over_invalid_byte() {
    let mut model = test_model("", 0);
    model.document.set_content(vec![b'a', 0xFF, b'b']);
    model.editor.set_cursor(&model.document, 1);

    update(&mut model, Msg::Document(DocumentMsg::DeleteForward));
    assert_eq!(model.document.bytes(), b"ab");
}
