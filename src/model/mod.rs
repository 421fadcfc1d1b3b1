//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod dialog;
pub mod document;
pub mod editor;
pub mod ui;

pub use dialog::{DialogField, FindDialog, TextInput};
pub use document::Document;
pub use editor::{EditorState, Viewport};
pub use ui::{MenuId, MenuItem, UiState};

use crate::cli::StartupConfig;
use crate::config::EditorConfig;
use crate::file_io;
use crate::layout::{self, Metrics};
use crate::theme::{load_theme, Theme};

/// Which windows are showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// Only the main window
    MainOnly,
    /// The find/replace dialog is visible alongside the main window
    FindDialogOpen,
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The single open document
    pub document: Document,
    /// Cursor and scroll position in the text area
    pub editor: EditorState,
    /// UI state (menus, status bar, cursor blink)
    pub ui: UiState,
    /// Find/replace dialog, created on first use and never dropped
    pub find_dialog: Option<FindDialog>,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Main window dimensions
    pub window_size: (u32, u32),
    /// Line height in pixels
    pub line_height: usize,
    /// Character width in pixels (monospace)
    pub char_width: f32,
}

impl AppModel {
    /// Create the model for a fresh session
    ///
    /// Loads the configuration and theme from disk and opens the file named on
    /// the command line, if any. A path that does not exist yet starts an
    /// empty document that will be saved there.
    pub fn new(window_width: u32, window_height: u32, startup: &StartupConfig) -> Self {
        EditorConfig::ensure_config_dirs();
        let config = EditorConfig::load();

        let theme_id = startup.theme.as_deref().unwrap_or(&config.theme);
        let theme = load_theme(theme_id).unwrap_or_else(|e| {
            tracing::warn!("Failed to load theme '{}': {}, using default", theme_id, e);
            Theme::default()
        });

        let (document, status) = match &startup.path {
            None => (Document::new(), String::new()),
            Some(path) if !path.exists() => (
                Document::new_with_path(path.clone()),
                format!("New file: {}", path.display()),
            ),
            Some(path) => match file_io::open(path) {
                Ok(bytes) => {
                    let mut document = Document::from_bytes(bytes);
                    document.file_path = Some(path.clone());
                    (document, format!("Loaded: {}", path.display()))
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    (Document::new(), e.user_message())
                }
            },
        };

        let mut model = Self::from_parts(document, config, theme, (window_width, window_height));
        model.ui.set_status(status);
        model
    }

    /// Assemble a model without touching the filesystem
    pub fn from_parts(
        document: Document,
        config: EditorConfig,
        theme: Theme,
        window_size: (u32, u32),
    ) -> Self {
        // Corrected by the renderer once the real font metrics are known
        let line_height = 20;
        let char_width = 10.0;

        let (visible_lines, visible_columns) =
            layout::visible_text_size(Metrics::new(line_height, char_width), window_size);

        Self {
            document,
            editor: EditorState::with_viewport(visible_lines, visible_columns),
            ui: UiState::new(),
            find_dialog: None,
            theme,
            config,
            window_size,
            line_height,
            char_width,
        }
    }

    #[inline]
    pub fn metrics(&self) -> Metrics {
        Metrics::new(self.line_height, self.char_width)
    }

    pub fn shell_state(&self) -> ShellState {
        match &self.find_dialog {
            Some(dialog) if dialog.visible => ShellState::FindDialogOpen,
            _ => ShellState::MainOnly,
        }
    }

    /// Main window title, e.g. `Jot - notes.txt*`
    pub fn window_title(&self) -> String {
        let modified = if self.document.is_modified { "*" } else { "" };
        format!("Jot - {}{}", self.document.display_name(), modified)
    }

    /// Update viewport dimensions after window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
        self.refresh_viewport();
    }

    /// Update line height and char width from actual font metrics
    pub fn set_metrics(&mut self, line_height: usize, char_width: f32) {
        self.line_height = line_height.max(1);
        self.char_width = char_width.max(1.0);
        self.refresh_viewport();
    }

    fn refresh_viewport(&mut self) {
        let (lines, columns) = layout::visible_text_size(self.metrics(), self.window_size);
        self.editor.resize_viewport(lines, columns);
    }

    /// Ensure cursor is visible in viewport (minimal scroll)
    pub fn ensure_cursor_visible(&mut self) {
        self.editor.ensure_cursor_visible(&self.document);
    }

    /// Reset cursor blink timer
    pub fn reset_cursor_blink(&mut self) {
        self.ui.reset_cursor_blink();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn model(text: &str) -> AppModel {
        AppModel::from_parts(
            Document::with_text(text),
            EditorConfig::default(),
            Theme::default(),
            (600, 400),
        )
    }

    #[test]
    fn test_shell_state_follows_dialog_visibility() {
        let mut model = model("");
        assert_eq!(model.shell_state(), ShellState::MainOnly);

        model.find_dialog = Some(FindDialog {
            visible: true,
            ..FindDialog::new()
        });
        assert_eq!(model.shell_state(), ShellState::FindDialogOpen);

        if let Some(dialog) = model.find_dialog.as_mut() {
            dialog.visible = false;
        }
        assert_eq!(model.shell_state(), ShellState::MainOnly);
    }

    #[test]
    fn test_window_title() {
        let mut model = model("");
        assert_eq!(model.window_title(), "Jot - Untitled");

        model.document.file_path = Some(PathBuf::from("/tmp/a.txt"));
        model.document.is_modified = true;
        assert_eq!(model.window_title(), "Jot - a.txt*");
    }

    #[test]
    fn test_set_metrics_recomputes_viewport() {
        let mut model = model("");
        let before = model.editor.viewport.visible_columns;
        model.set_metrics(20, 5.0);
        assert!(model.editor.viewport.visible_columns > before);
    }
}
