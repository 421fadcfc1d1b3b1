//! Menu bar handlers

use crate::commands::Cmd;
use crate::messages::{AppMsg, DialogMsg, MenuMsg};
use crate::model::{AppModel, MenuItem};

use super::{update_app, update_dialog};

/// Handle menu bar messages
pub fn update_menu(model: &mut AppModel, msg: MenuMsg) -> Option<Cmd> {
    match msg {
        MenuMsg::Toggle(menu) => {
            if model.ui.open_menu == Some(menu) {
                model.ui.close_menu();
            } else {
                model.ui.open_menu = Some(menu);
                model.ui.hovered_item = None;
            }
            Some(Cmd::Redraw)
        }

        MenuMsg::Hover(item) => {
            if model.ui.open_menu.is_none() || model.ui.hovered_item == item {
                return None;
            }
            model.ui.hovered_item = item;
            Some(Cmd::Redraw)
        }

        MenuMsg::Close => {
            model.ui.open_menu?;
            model.ui.close_menu();
            Some(Cmd::Redraw)
        }

        MenuMsg::Activate(item) => {
            model.ui.close_menu();
            tracing::debug!(?item, "Menu item activated");
            let cmd = match item {
                MenuItem::Open => update_app(model, AppMsg::OpenFileDialog),
                MenuItem::Save => update_app(model, AppMsg::SaveFileDialog),
                MenuItem::Find => update_dialog(model, DialogMsg::Open),
            };
            // The dropdown was just closed, so the main window repaints too
            Some(Cmd::batch(vec![Cmd::Redraw, Cmd::from(cmd)]))
        }
    }
}
