//! Find/replace dialog handlers
//!
//! Find and Replace read the inputs at the moment the button is pressed and
//! operate on the one shared document.

use crate::commands::Cmd;
use crate::messages::DialogMsg;
use crate::model::{AppModel, DialogField, FindDialog};
use crate::search;

pub const FIND_TITLE: &str = "Find";

/// Handle dialog messages
pub fn update_dialog(model: &mut AppModel, msg: DialogMsg) -> Option<Cmd> {
    match msg {
        DialogMsg::Open => {
            model.ui.close_menu();
            let created = model.find_dialog.is_none();
            let dialog = model.find_dialog.get_or_insert_with(FindDialog::new);
            dialog.visible = true;
            dialog.focus = DialogField::Search;
            if created {
                tracing::debug!("Created find/replace dialog");
            }
            Some(Cmd::ShowFindDialog)
        }

        DialogMsg::Close => {
            let dialog = model.find_dialog.as_mut().filter(|d| d.visible)?;
            dialog.visible = false;
            Some(Cmd::HideFindDialog)
        }

        DialogMsg::Find => Some(find(model)),
        DialogMsg::Replace => Some(replace(model)),

        DialogMsg::Focus(field) => {
            dialog_mut(model)?.focus = field;
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        DialogMsg::FocusNext => {
            let dialog = dialog_mut(model)?;
            dialog.focus = dialog.focus.next();
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        DialogMsg::ClickInput { field, column } => {
            let dialog = dialog_mut(model)?;
            dialog.focus = field;
            dialog.input_mut(field).set_cursor_char_index(column);
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        DialogMsg::InsertText(text) => edit_focused(model, |input| input.insert_str(&text)),
        DialogMsg::DeleteBackward => edit_focused(model, |input| input.delete_backward()),
        DialogMsg::DeleteForward => edit_focused(model, |input| input.delete_forward()),
        DialogMsg::MoveCursorLeft => edit_focused(model, |input| input.move_left()),
        DialogMsg::MoveCursorRight => edit_focused(model, |input| input.move_right()),
        DialogMsg::MoveCursorHome => edit_focused(model, |input| input.move_home()),
        DialogMsg::MoveCursorEnd => edit_focused(model, |input| input.move_end()),
    }
}

/// The dialog, if it has been created and is showing
fn dialog_mut(model: &mut AppModel) -> Option<&mut FindDialog> {
    model.find_dialog.as_mut().filter(|d| d.visible)
}

fn edit_focused(
    model: &mut AppModel,
    edit: impl FnOnce(&mut crate::model::TextInput),
) -> Option<Cmd> {
    edit(dialog_mut(model)?.focused_input_mut());
    model.reset_cursor_blink();
    Some(Cmd::Redraw)
}

/// Locate the search text, move the cursor there, and report the offset
fn find(model: &mut AppModel) -> Cmd {
    let term = model
        .find_dialog
        .as_ref()
        .map(|d| d.search.text().to_owned())
        .unwrap_or_default();

    match search::find(model.document.bytes(), term.as_bytes()) {
        Some(pos) => {
            model.editor.set_cursor(&model.document, pos);
            model.ensure_cursor_visible();
            model.reset_cursor_blink();
            model.ui.set_status(format!("Found at position {}", pos));
            Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::info(FIND_TITLE, format!("Text found at position: {}", pos)),
            ])
        }
        None => {
            model.ui.set_status("Text not found");
            Cmd::batch(vec![Cmd::Redraw, Cmd::info(FIND_TITLE, "Text not found.")])
        }
    }
}

/// Replace every occurrence of the search text in the document
fn replace(model: &mut AppModel) -> Cmd {
    let Some(dialog) = model.find_dialog.as_ref() else {
        return Cmd::None;
    };
    let term = dialog.search.text().as_bytes();
    let replacement = dialog.replacement.text().as_bytes();

    let result = search::replace_all_counted(model.document.bytes(), term, replacement);
    if result.count == 0 {
        model.ui.set_status("No occurrences to replace");
        return Cmd::Redraw;
    }

    model.document.set_content(result.text);
    model.document.is_modified = true;
    // Content shifted; keep the cursor in bounds and on a boundary
    let cursor = model.editor.cursor;
    model.editor.set_cursor(&model.document, cursor);
    model.ensure_cursor_visible();

    let noun = if result.count == 1 {
        "occurrence"
    } else {
        "occurrences"
    };
    model
        .ui
        .set_status(format!("Replaced {} {}", result.count, noun));
    tracing::info!(count = result.count, "Replaced all occurrences");
    Cmd::Redraw
}
