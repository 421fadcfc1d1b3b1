//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod dialog;
mod document;
mod editor;
mod menu;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::StateSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use dialog::{update_dialog, FIND_TITLE};
pub use document::update_document;
pub use editor::update_editor;
pub use menu::update_menu;
pub use ui::{update_ui, CURSOR_BLINK_INTERVAL};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::Menu(m) => menu::update_menu(model, m),
        Msg::Dialog(m) => dialog::update_dialog(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after state and logs diffs for debugging.
/// Filters out noisy messages like BlinkCursor from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::BlinkCursor));
    if is_noisy {
        return update_inner(model, msg);
    }

    // Named up front: the message is consumed by the update
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let before = StateSnapshot::from_model(model);
    let result = update_inner(model, msg);
    let after = StateSnapshot::from_model(model);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "state", %diff, "state changed");
    }
    StateSnapshot::assert_invariants(model, &msg_name);

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Editor::MoveCursor(Up)`
/// - `Document::InsertChar('x')`
/// - `App::Resize(1920, 1080)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::AppMsg;

    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Menu(m) => format!("Menu::{:?}", m),
        Msg::Dialog(m) => format!("Dialog::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        // Keep file contents out of the log
        Msg::App(AppMsg::FileLoaded { path, result }) => format!(
            "App::FileLoaded({}, {})",
            path.display(),
            match result {
                Ok(bytes) => format!("{} bytes", bytes.len()),
                Err(e) => e.to_string(),
            }
        ),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
