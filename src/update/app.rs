//! App message handlers (file operations, window events)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, Document, EditorState};

/// Handle app messages (file operations, window events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            model.ensure_cursor_visible();
            Some(Cmd::Redraw)
        }

        AppMsg::OpenFileDialog => {
            let start_dir = model
                .document
                .file_path
                .as_deref()
                .and_then(|p| p.parent())
                .map(|p| p.to_path_buf());
            Some(Cmd::ShowOpenFileDialog { start_dir })
        }

        AppMsg::OpenFileDialogResult { path } => {
            // Cancelled dialogs change nothing
            let path = path?;
            model.ui.set_status(format!("Loading {}...", path.display()));
            Some(Cmd::LoadFile { path })
        }

        AppMsg::SaveFileDialog => Some(Cmd::ShowSaveFileDialog {
            suggested_path: model.document.file_path.clone(),
        }),

        AppMsg::SaveFileDialogResult { path } => {
            let path = path?;
            model.ui.set_status(format!("Saving {}...", path.display()));
            Some(Cmd::SaveFile {
                path,
                content: model.document.bytes().to_vec(),
                atomic: model.config.atomic_save,
            })
        }

        AppMsg::FileLoaded { path, result } => match result {
            Ok(content) => {
                let mut document = Document::from_bytes(content);
                document.file_path = Some(path.clone());
                model.document = document;

                let lines = model.editor.viewport.visible_lines;
                let columns = model.editor.viewport.visible_columns;
                model.editor = EditorState::with_viewport(lines, columns);
                model.reset_cursor_blink();
                model.ui.set_status(format!("Loaded: {}", path.display()));
                Some(Cmd::Redraw)
            }
            Err(e) => {
                // The current document stays as it was
                tracing::error!("{}", e);
                model.ui.set_status(e.user_message());
                Some(Cmd::batch(vec![
                    Cmd::Redraw,
                    Cmd::error("Open File", e.to_string()),
                ]))
            }
        },

        AppMsg::SaveCompleted { path, result } => match result {
            Ok(()) => {
                model.document.file_path = Some(path.clone());
                model.document.is_modified = false;
                model.ui.set_status(format!("Saved: {}", path.display()));
                Some(Cmd::Redraw)
            }
            Err(e) => {
                tracing::error!("{}", e);
                model.ui.set_status(e.user_message());
                Some(Cmd::batch(vec![
                    Cmd::Redraw,
                    Cmd::error("Save File", e.to_string()),
                ]))
            }
        },

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
