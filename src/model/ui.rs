//! UI state - open menu, status message, and cursor blink

use std::time::{Duration, Instant};

/// Menus in the menu bar, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuId {
    File,
    Edit,
}

impl MenuId {
    pub const ALL: [MenuId; 2] = [MenuId::File, MenuId::Edit];

    pub fn title(self) -> &'static str {
        match self {
            MenuId::File => "File",
            MenuId::Edit => "Edit",
        }
    }

    /// Items in this menu's dropdown, top to bottom
    pub fn items(self) -> &'static [MenuItem] {
        match self {
            MenuId::File => &[MenuItem::Open, MenuItem::Save],
            MenuId::Edit => &[MenuItem::Find],
        }
    }
}

/// Activatable menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Open,
    Save,
    Find,
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Open => "Open...",
            MenuItem::Save => "Save...",
            MenuItem::Find => "Find...",
        }
    }

    /// Shortcut hint drawn right-aligned in the dropdown
    pub fn shortcut(self) -> &'static str {
        match self {
            MenuItem::Open => "Ctrl+O",
            MenuItem::Save => "Ctrl+S",
            MenuItem::Find => "Ctrl+F",
        }
    }
}

/// UI state - status messages and cursor animation
#[derive(Debug, Clone)]
pub struct UiState {
    /// Message displayed in the status bar
    pub status_message: String,
    /// Menu whose dropdown is open, if any
    pub open_menu: Option<MenuId>,
    /// Dropdown item under the mouse
    pub hovered_item: Option<MenuItem>,
    /// Whether the cursor is currently visible (for blinking)
    pub cursor_visible: bool,
    /// Timestamp of last cursor blink state change
    pub last_cursor_blink: Instant,
}

impl UiState {
    pub fn new() -> Self {
        Self::with_status(String::new())
    }

    /// Create a UI state with an initial status message
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            open_menu: None,
            hovered_item: None,
            cursor_visible: true,
            last_cursor_blink: Instant::now(),
        }
    }

    /// Reset cursor blink timer (call after user input)
    pub fn reset_cursor_blink(&mut self) {
        self.cursor_visible = true;
        self.last_cursor_blink = Instant::now();
    }

    /// Update cursor blink state based on elapsed time
    /// Returns true if the state changed (needs redraw)
    pub fn update_cursor_blink(&mut self, blink_interval: Duration) -> bool {
        if self.last_cursor_blink.elapsed() >= blink_interval {
            self.cursor_visible = !self.cursor_visible;
            self.last_cursor_blink = Instant::now();
            true
        } else {
            false
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub fn close_menu(&mut self) {
        self.open_menu = None;
        self.hovered_item = None;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
