//! UI message handlers (status bar, cursor blink)

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Cursor blink half-period
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Handle UI messages (status bar, cursor blink)
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::SetStatus(message) => {
            model.ui.set_status(message);
            Some(Cmd::Redraw)
        }

        UiMsg::BlinkCursor => {
            if model.ui.update_cursor_blink(CURSOR_BLINK_INTERVAL) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
