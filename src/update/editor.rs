//! Editor update functions for cursor movement and viewport scrolling.

use crate::commands::Cmd;
use crate::messages::{Direction, EditorMsg};
use crate::model::AppModel;

/// Handle editor messages (cursor movement, viewport scrolling)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    let AppModel {
        document, editor, ..
    } = model;

    match msg {
        EditorMsg::MoveCursor(direction) => match direction {
            Direction::Up => editor.move_vertical(document, -1),
            Direction::Down => editor.move_vertical(document, 1),
            Direction::Left => editor.move_left(document),
            Direction::Right => editor.move_right(document),
        },

        EditorMsg::MoveCursorLineStart => editor.move_line_start(document),
        EditorMsg::MoveCursorLineEnd => editor.move_line_end(document),
        EditorMsg::MoveCursorDocumentStart => editor.move_document_start(),
        EditorMsg::MoveCursorDocumentEnd => editor.move_document_end(document),

        EditorMsg::PageUp => {
            let page = editor.viewport.visible_lines.saturating_sub(1).max(1);
            editor.move_vertical(document, -(page as isize));
        }

        EditorMsg::PageDown => {
            let page = editor.viewport.visible_lines.saturating_sub(1).max(1);
            editor.move_vertical(document, page as isize);
        }

        EditorMsg::SetCursorPosition { line, visual_col } => {
            editor.set_cursor_visual(document, line, visual_col);
        }

        // Scrolling leaves the cursor where it is
        EditorMsg::Scroll(delta) => {
            editor.scroll(document, delta);
            return Some(Cmd::Redraw);
        }

        EditorMsg::ScrollHorizontal(delta) => {
            editor.scroll_horizontal(delta);
            return Some(Cmd::Redraw);
        }
    }

    model.ensure_cursor_visible();
    model.reset_cursor_blink();
    Some(Cmd::Redraw)
}
