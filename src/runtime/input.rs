//! Keyboard input handling
//!
//! Maps winit keys to messages for whichever window has focus:
//! - Main window: shortcuts, navigation, and typing into the document
//! - Find dialog: typing into the focused field, Enter to find, Tab to switch

use winit::keyboard::{Key, ModifiersState, NamedKey};

use jot::commands::Cmd;
use jot::messages::{Direction, DialogMsg, DocumentMsg, EditorMsg, MenuMsg, Msg};
use jot::model::{AppModel, MenuItem};
use jot::update::update;

/// Ctrl on Linux/Windows, Cmd on macOS
fn is_primary(mods: ModifiersState) -> bool {
    mods.control_key() || mods.super_key()
}

/// Menu item bound to a Ctrl/Cmd shortcut letter
fn shortcut_item(key: &Key) -> Option<MenuItem> {
    let Key::Character(s) = key else {
        return None;
    };
    match s.to_ascii_lowercase().as_str() {
        "o" => Some(MenuItem::Open),
        "s" => Some(MenuItem::Save),
        "f" => Some(MenuItem::Find),
        _ => None,
    }
}

/// Handle a key press in the main window
pub fn handle_main_key(model: &mut AppModel, key: Key, mods: ModifiersState) -> Option<Cmd> {
    let primary = is_primary(mods);

    if primary {
        if let Some(item) = shortcut_item(&key) {
            return update(model, Msg::Menu(MenuMsg::Activate(item)));
        }
    }

    // An open dropdown swallows Escape
    if model.ui.open_menu.is_some() && key == Key::Named(NamedKey::Escape) {
        return update(model, Msg::Menu(MenuMsg::Close));
    }

    let msg = match key {
        Key::Named(NamedKey::ArrowLeft) => Msg::move_cursor(Direction::Left),
        Key::Named(NamedKey::ArrowRight) => Msg::move_cursor(Direction::Right),
        Key::Named(NamedKey::ArrowUp) => Msg::move_cursor(Direction::Up),
        Key::Named(NamedKey::ArrowDown) => Msg::move_cursor(Direction::Down),

        Key::Named(NamedKey::Home) if primary => Msg::Editor(EditorMsg::MoveCursorDocumentStart),
        Key::Named(NamedKey::End) if primary => Msg::Editor(EditorMsg::MoveCursorDocumentEnd),
        Key::Named(NamedKey::Home) => Msg::Editor(EditorMsg::MoveCursorLineStart),
        Key::Named(NamedKey::End) => Msg::Editor(EditorMsg::MoveCursorLineEnd),
        Key::Named(NamedKey::PageUp) => Msg::Editor(EditorMsg::PageUp),
        Key::Named(NamedKey::PageDown) => Msg::Editor(EditorMsg::PageDown),

        Key::Named(NamedKey::Enter) => Msg::Document(DocumentMsg::InsertNewline),
        Key::Named(NamedKey::Tab) => Msg::Document(DocumentMsg::InsertTab),
        Key::Named(NamedKey::Backspace) => Msg::Document(DocumentMsg::DeleteBackward),
        Key::Named(NamedKey::Delete) => Msg::Document(DocumentMsg::DeleteForward),
        Key::Named(NamedKey::Space) if !primary => Msg::insert_char(' '),

        // Regular typing
        Key::Character(ref s) if !primary => {
            let mut cmd = None;
            for ch in s.chars() {
                cmd = update(model, Msg::insert_char(ch)).or(cmd);
            }
            return cmd;
        }

        _ => return None,
    };

    update(model, msg)
}

/// Handle a key press in the find/replace dialog
pub fn handle_dialog_key(model: &mut AppModel, key: Key, mods: ModifiersState) -> Option<Cmd> {
    let primary = is_primary(mods);

    let msg = match key {
        Key::Named(NamedKey::Escape) => DialogMsg::Close,
        Key::Named(NamedKey::Enter) => DialogMsg::Find,
        Key::Named(NamedKey::Tab) => DialogMsg::FocusNext,
        Key::Named(NamedKey::Backspace) => DialogMsg::DeleteBackward,
        Key::Named(NamedKey::Delete) => DialogMsg::DeleteForward,
        Key::Named(NamedKey::ArrowLeft) => DialogMsg::MoveCursorLeft,
        Key::Named(NamedKey::ArrowRight) => DialogMsg::MoveCursorRight,
        Key::Named(NamedKey::Home) => DialogMsg::MoveCursorHome,
        Key::Named(NamedKey::End) => DialogMsg::MoveCursorEnd,
        Key::Named(NamedKey::Space) if !primary => DialogMsg::InsertText(" ".to_string()),
        Key::Character(s) if !primary => DialogMsg::InsertText(s.to_string()),
        _ => return None,
    };

    update(model, Msg::Dialog(msg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jot::commands::Cmd;
    use jot::config::EditorConfig;
    use jot::model::{DialogField, Document};
    use jot::theme::Theme;

    fn model_with(text: &str) -> AppModel {
        AppModel::from_parts(
            Document::with_text(text),
            EditorConfig::default(),
            Theme::default(),
            (600, 400),
        )
    }

    fn ch(s: &str) -> Key {
        Key::Character(s.into())
    }

    #[test]
    fn test_typing_inserts_characters() {
        let mut model = model_with("");
        handle_main_key(&mut model, ch("h"), ModifiersState::empty());
        handle_main_key(&mut model, ch("i"), ModifiersState::empty());
        handle_main_key(&mut model, Key::Named(NamedKey::Space), ModifiersState::empty());
        assert_eq!(model.document.bytes(), b"hi ");
        assert!(model.document.is_modified);
    }

    #[test]
    fn test_ctrl_letter_does_not_type() {
        let mut model = model_with("");
        handle_main_key(&mut model, ch("x"), ModifiersState::CONTROL);
        assert!(model.document.is_empty());
    }

    #[test]
    fn test_ctrl_o_requests_open_dialog() {
        let mut model = model_with("");
        let cmd = handle_main_key(&mut model, ch("o"), ModifiersState::CONTROL);
        let Some(Cmd::Batch(cmds)) = cmd else {
            panic!("expected a batch, got {:?}", cmd);
        };
        assert!(cmds
            .iter()
            .any(|c| matches!(c, Cmd::ShowOpenFileDialog { .. })));
    }

    #[test]
    fn test_ctrl_f_opens_find_dialog() {
        let mut model = model_with("");
        handle_main_key(&mut model, ch("F"), ModifiersState::CONTROL);
        assert!(model.find_dialog.as_ref().is_some_and(|d| d.visible));
    }

    #[test]
    fn test_escape_closes_open_menu() {
        let mut model = model_with("");
        model.ui.open_menu = Some(jot::model::MenuId::File);
        handle_main_key(&mut model, Key::Named(NamedKey::Escape), ModifiersState::empty());
        assert_eq!(model.ui.open_menu, None);
    }

    #[test]
    fn test_backspace_and_navigation() {
        let mut model = model_with("ab");
        handle_main_key(&mut model, Key::Named(NamedKey::End), ModifiersState::empty());
        handle_main_key(&mut model, Key::Named(NamedKey::Backspace), ModifiersState::empty());
        assert_eq!(model.document.bytes(), b"a");
        assert_eq!(model.editor.cursor, 1);
    }

    #[test]
    fn test_dialog_keys_edit_focused_field() {
        let mut model = model_with("one two");
        handle_main_key(&mut model, ch("f"), ModifiersState::CONTROL);

        handle_dialog_key(&mut model, ch("two"), ModifiersState::empty());
        handle_dialog_key(&mut model, Key::Named(NamedKey::Tab), ModifiersState::empty());
        handle_dialog_key(&mut model, ch("2"), ModifiersState::empty());

        let dialog = model.find_dialog.as_ref().unwrap();
        assert_eq!(dialog.search.text(), "two");
        assert_eq!(dialog.replacement.text(), "2");
        assert_eq!(dialog.focus, DialogField::Replace);
    }

    #[test]
    fn test_dialog_enter_finds() {
        let mut model = model_with("one two");
        handle_main_key(&mut model, ch("f"), ModifiersState::CONTROL);
        handle_dialog_key(&mut model, ch("two"), ModifiersState::empty());
        handle_dialog_key(&mut model, Key::Named(NamedKey::Enter), ModifiersState::empty());
        assert_eq!(model.editor.cursor, 4);
    }

    #[test]
    fn test_dialog_escape_hides() {
        let mut model = model_with("");
        handle_main_key(&mut model, ch("f"), ModifiersState::CONTROL);
        let cmd = handle_dialog_key(&mut model, Key::Named(NamedKey::Escape), ModifiersState::empty());
        assert_eq!(cmd, Some(Cmd::HideFindDialog));
        assert!(!model.find_dialog.as_ref().unwrap().visible);
    }
}
