//! Find/replace dialog lifecycle: a single lazily created dialog whose
//! inputs survive being hidden and shown again

mod common;

use common::{buffer_to_string, test_model};
use jot::commands::Cmd;
use jot::messages::{DialogMsg, Msg};
use jot::model::{DialogField, ShellState};
use jot::update::update;

fn type_text(model: &mut jot::AppModel, text: &str) {
    update(model, Msg::Dialog(DialogMsg::InsertText(text.to_string())));
}

#[test]
fn test_dialog_created_lazily() {
    let mut model = test_model("", 0);
    assert!(model.find_dialog.is_none());

    let cmd = update(&mut model, Msg::Dialog(DialogMsg::Open));

    assert_eq!(cmd, Some(Cmd::ShowFindDialog));
    assert!(model.find_dialog.is_some());
    assert_eq!(model.shell_state(), ShellState::FindDialogOpen);
}

#[test]
fn test_reopen_keeps_typed_text() {
    let mut model = test_model("", 0);
    update(&mut model, Msg::Dialog(DialogMsg::Open));
    type_text(&mut model, "needle");
    update(&mut model, Msg::Dialog(DialogMsg::FocusNext));
    type_text(&mut model, "thread");

    let cmd = update(&mut model, Msg::Dialog(DialogMsg::Close));
    assert_eq!(cmd, Some(Cmd::HideFindDialog));
    assert_eq!(model.shell_state(), ShellState::MainOnly);

    update(&mut model, Msg::Dialog(DialogMsg::Open));
    let dialog = model.find_dialog.as_ref().unwrap();
    assert_eq!(dialog.search.text(), "needle");
    assert_eq!(dialog.replacement.text(), "thread");
    // Reopening focuses the search field again
    assert_eq!(dialog.focus, DialogField::Search);
}

#[test]
fn test_open_twice_keeps_single_dialog() {
    let mut model = test_model("", 0);
    update(&mut model, Msg::Dialog(DialogMsg::Open));
    type_text(&mut model, "abc");
    update(&mut model, Msg::Dialog(DialogMsg::Open));

    assert_eq!(model.find_dialog.as_ref().unwrap().search.text(), "abc");
}

#[test]
fn test_close_when_hidden_is_noop() {
    let mut model = test_model("", 0);
    assert_eq!(update(&mut model, Msg::Dialog(DialogMsg::Close)), None);

    update(&mut model, Msg::Dialog(DialogMsg::Open));
    update(&mut model, Msg::Dialog(DialogMsg::Close));
    assert_eq!(update(&mut model, Msg::Dialog(DialogMsg::Close)), None);
}

#[test]
fn test_typing_ignored_while_hidden() {
    let mut model = test_model("", 0);
    update(&mut model, Msg::Dialog(DialogMsg::Open));
    update(&mut model, Msg::Dialog(DialogMsg::Close));

    assert_eq!(
        update(
            &mut model,
            Msg::Dialog(DialogMsg::InsertText("x".to_string()))
        ),
        None
    );
    assert_eq!(model.find_dialog.as_ref().unwrap().search.text(), "");
}

#[test]
fn test_focus_cycles_between_fields() {
    let mut model = test_model("", 0);
    update(&mut model, Msg::Dialog(DialogMsg::Open));

    update(&mut model, Msg::Dialog(DialogMsg::FocusNext));
    assert_eq!(
        model.find_dialog.as_ref().unwrap().focus,
        DialogField::Replace
    );
    update(&mut model, Msg::Dialog(DialogMsg::FocusNext));
    assert_eq!(
        model.find_dialog.as_ref().unwrap().focus,
        DialogField::Search
    );
}

#[test]
fn test_click_input_focuses_and_places_caret() {
    let mut model = test_model("", 0);
    update(&mut model, Msg::Dialog(DialogMsg::Open));
    type_text(&mut model, "héllo");

    update(
        &mut model,
        Msg::Dialog(DialogMsg::ClickInput {
            field: DialogField::Search,
            column: 2,
        }),
    );
    type_text(&mut model, "X");

    assert_eq!(model.find_dialog.as_ref().unwrap().search.text(), "héXllo");
}

#[test]
fn test_input_editing_keys() {
    let mut model = test_model("", 0);
    update(&mut model, Msg::Dialog(DialogMsg::Open));
    type_text(&mut model, "abcd");

    update(&mut model, Msg::Dialog(DialogMsg::MoveCursorHome));
    update(&mut model, Msg::Dialog(DialogMsg::DeleteForward));
    update(&mut model, Msg::Dialog(DialogMsg::MoveCursorEnd));
    update(&mut model, Msg::Dialog(DialogMsg::DeleteBackward));
    update(&mut model, Msg::Dialog(DialogMsg::MoveCursorLeft));
    type_text(&mut model, "-");
    update(&mut model, Msg::Dialog(DialogMsg::MoveCursorRight));
    type_text(&mut model, "!");

    assert_eq!(model.find_dialog.as_ref().unwrap().search.text(), "b-c!");
}

#[test]
fn test_document_edits_between_dialog_uses() {
    let mut model = test_model("red green", 0);
    update(&mut model, Msg::Dialog(DialogMsg::Open));
    type_text(&mut model, "green");
    update(&mut model, Msg::Dialog(DialogMsg::FocusNext));
    type_text(&mut model, "blue");
    update(&mut model, Msg::Dialog(DialogMsg::Close));

    // The shared document is edited while the dialog is hidden
    update(
        &mut model,
        Msg::Editor(jot::messages::EditorMsg::MoveCursorDocumentEnd),
    );
    for ch in " green".chars() {
        update(&mut model, Msg::insert_char(ch));
    }

    update(&mut model, Msg::Dialog(DialogMsg::Open));
    update(&mut model, Msg::Dialog(DialogMsg::Replace));
    assert_eq!(buffer_to_string(&model), "red blue blue");
}

#[test]
fn test_open_closes_menu() {
    let mut model = test_model("", 0);
    model.ui.open_menu = Some(jot::model::MenuId::Edit);
    update(&mut model, Msg::Dialog(DialogMsg::Open));
    assert_eq!(model.ui.open_menu, None);
}
