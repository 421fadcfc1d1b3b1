//! Document update functions for text editing

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;
use crate::util::{next_boundary, prev_boundary};

/// Handle document messages (text editing)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertChar(ch) => {
            let mut buf = [0u8; 4];
            insert_at_cursor(model, ch.encode_utf8(&mut buf).as_bytes());
        }

        DocumentMsg::InsertNewline => insert_at_cursor(model, b"\n"),
        DocumentMsg::InsertTab => insert_at_cursor(model, b"\t"),

        DocumentMsg::DeleteBackward => {
            let cursor = model.editor.cursor;
            if cursor == 0 {
                return None;
            }
            let start = prev_boundary(model.document.bytes(), cursor);
            model.document.delete(start..cursor);
            model.editor.cursor = start;
        }

        DocumentMsg::DeleteForward => {
            let cursor = model.editor.cursor;
            if cursor >= model.document.len() {
                return None;
            }
            let end = next_boundary(model.document.bytes(), cursor);
            model.document.delete(cursor..end);
        }
    }

    model.editor.desired_column = None;
    model.ensure_cursor_visible();
    model.reset_cursor_blink();
    Some(Cmd::Redraw)
}

fn insert_at_cursor(model: &mut AppModel, bytes: &[u8]) {
    let cursor = model.editor.cursor;
    model.document.insert(cursor, bytes);
    model.editor.cursor = cursor + bytes.len();
}
