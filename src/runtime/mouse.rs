//! Mouse event handling on top of the layout hit-tests
//!
//! Button presses arm a button; the action fires on release over the same
//! button, like native push buttons.

use jot::commands::Cmd;
use jot::layout::{self, DialogButton, DialogHit, MainHit};
use jot::messages::{DialogMsg, EditorMsg, MenuMsg, Msg};
use jot::model::{AppModel, DialogField};
use jot::update::update;

/// Lines scrolled per wheel notch
pub const SCROLL_LINES: i32 = 3;

/// Pressed-but-not-released buttons in either window
#[derive(Debug, Default, Clone, Copy)]
pub struct PressState {
    pub find_button: bool,
    pub dialog_button: Option<DialogButton>,
}

fn main_hit(model: &AppModel, x: f64, y: f64) -> MainHit {
    layout::hit_test_main(
        model.metrics(),
        model.window_size,
        model.ui.open_menu,
        x as f32,
        y as f32,
    )
}

/// Left button pressed in the main window
pub fn main_press(model: &mut AppModel, press: &mut PressState, x: f64, y: f64) -> Option<Cmd> {
    match main_hit(model, x, y) {
        MainHit::MenuTitle(menu) => update(model, Msg::Menu(MenuMsg::Toggle(menu))),
        MainHit::MenuItem(item) => update(model, Msg::Menu(MenuMsg::Activate(item))),
        MainHit::Dropdown => None,

        // Clicking away from an open dropdown only dismisses it
        _ if model.ui.open_menu.is_some() => update(model, Msg::Menu(MenuMsg::Close)),

        MainHit::FindButton => {
            press.find_button = true;
            Some(Cmd::Redraw)
        }
        MainHit::TextArea { row, column } => {
            let viewport = &model.editor.viewport;
            let line = viewport.top_line + row;
            let visual_col = viewport.left_column + column;
            update(
                model,
                Msg::Editor(EditorMsg::SetCursorPosition { line, visual_col }),
            )
        }
        MainHit::Toolbar | MainHit::None => None,
    }
}

/// Left button released in the main window
pub fn main_release(model: &mut AppModel, press: &mut PressState, x: f64, y: f64) -> Option<Cmd> {
    if !std::mem::take(&mut press.find_button) {
        return None;
    }
    if main_hit(model, x, y) == MainHit::FindButton {
        update(model, Msg::Dialog(DialogMsg::Open))
    } else {
        Some(Cmd::Redraw)
    }
}

/// Pointer moved in the main window
pub fn main_hover(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    let open = model.ui.open_menu?;
    match main_hit(model, x, y) {
        MainHit::MenuItem(item) => update(model, Msg::Menu(MenuMsg::Hover(Some(item)))),
        // Sliding across the bar switches the open menu
        MainHit::MenuTitle(menu) if menu != open => {
            update(model, Msg::Menu(MenuMsg::Toggle(menu)))
        }
        _ => update(model, Msg::Menu(MenuMsg::Hover(None))),
    }
}

/// Whether the pointer is over the toolbar's Find button
pub fn over_find_button(model: &AppModel, x: f64, y: f64) -> bool {
    main_hit(model, x, y) == MainHit::FindButton
}

/// Wheel scroll in the main window, in lines (positive scrolls down)
pub fn main_scroll(model: &mut AppModel, lines_x: i32, lines_y: i32) -> Option<Cmd> {
    let mut cmd = None;
    if lines_y != 0 {
        cmd = update(model, Msg::Editor(EditorMsg::Scroll(lines_y)));
    }
    if lines_x != 0 {
        cmd = update(model, Msg::Editor(EditorMsg::ScrollHorizontal(lines_x))).or(cmd);
    }
    cmd
}

/// Left button pressed in the dialog window
pub fn dialog_press(model: &mut AppModel, press: &mut PressState, x: f64, y: f64) -> Option<Cmd> {
    let metrics = model.metrics();
    let geometry = layout::dialog_layout(metrics);
    let dialog = model.find_dialog.as_ref()?;

    let (field, rect, column) = match layout::hit_test_dialog(metrics, x as f32, y as f32) {
        DialogHit::SearchInput { column } => (DialogField::Search, geometry.find_input, column),
        DialogHit::ReplaceInput { column } => {
            (DialogField::Replace, geometry.replace_input, column)
        }
        DialogHit::Button(button) => {
            press.dialog_button = Some(button);
            return Some(Cmd::Redraw);
        }
        DialogHit::None => return None,
    };

    // Columns are relative to the scrolled input
    let cursor = dialog.input(field).cursor_char_index();
    let column = column + layout::input_scroll_offset(metrics, rect, cursor);
    update(model, Msg::Dialog(DialogMsg::ClickInput { field, column }))
}

/// Left button released in the dialog window
pub fn dialog_release(
    model: &mut AppModel,
    press: &mut PressState,
    x: f64,
    y: f64,
) -> Option<Cmd> {
    let armed = press.dialog_button.take()?;
    match dialog_button_at(model, x, y) {
        Some(button) if button == armed => {
            let msg = match button {
                DialogButton::Find => DialogMsg::Find,
                DialogButton::Replace => DialogMsg::Replace,
                DialogButton::Close => DialogMsg::Close,
            };
            update(model, Msg::Dialog(msg))
        }
        _ => Some(Cmd::Redraw),
    }
}

/// Dialog button under the pointer, if any
pub fn dialog_button_at(model: &AppModel, x: f64, y: f64) -> Option<DialogButton> {
    match layout::hit_test_dialog(model.metrics(), x as f32, y as f32) {
        DialogHit::Button(button) => Some(button),
        _ => None,
    }
}
