//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::file_io::FileIoError;
use crate::model::{DialogField, MenuId, MenuItem};

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement, viewport scrolling)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to start of line (Home key)
    MoveCursorLineStart,
    /// Move cursor to end of line (End key)
    MoveCursorLineEnd,
    /// Move cursor to start of document (Ctrl+Home)
    MoveCursorDocumentStart,
    /// Move cursor to end of document (Ctrl+End)
    MoveCursorDocumentEnd,
    PageUp,
    PageDown,
    /// Set cursor from a mouse click (document line, visual column)
    SetCursorPosition { line: usize, visual_col: usize },
    /// Scroll viewport vertically (positive = down, negative = up)
    Scroll(i32),
    /// Scroll viewport horizontally (positive = right, negative = left)
    ScrollHorizontal(i32),
}

/// Document-specific messages (text editing)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert a character at cursor
    InsertChar(char),
    /// Insert a newline at cursor
    InsertNewline,
    /// Insert a literal tab at cursor
    InsertTab,
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character at cursor (Delete)
    DeleteForward,
}

/// Menu bar messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMsg {
    /// Open a menu's dropdown, or close it if it is already open
    Toggle(MenuId),
    /// Mouse moved over a dropdown item (or off all items)
    Hover(Option<MenuItem>),
    /// Run a menu item and close the dropdown
    Activate(MenuItem),
    /// Close any open dropdown
    Close,
}

/// Find/replace dialog messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMsg {
    /// Show the dialog, creating it on first use
    Open,
    /// Hide the dialog; its inputs are kept
    Close,
    /// Look for the search text ("Find" button or Enter)
    Find,
    /// Replace every occurrence of the search text ("Replace" button)
    Replace,
    /// Give keyboard focus to an input
    Focus(DialogField),
    /// Move focus to the other input (Tab)
    FocusNext,
    /// Place the caret in an input from a mouse click
    ClickInput { field: DialogField, column: usize },
    /// Insert text into the focused input
    InsertText(String),
    DeleteBackward,
    DeleteForward,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
}

/// UI-specific messages (status bar, cursor blink)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    /// Set status bar message
    SetStatus(String),
    /// Toggle cursor blink state
    BlinkCursor,
}

/// Application-level messages (file operations, window events)
#[derive(Debug)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// User requested "Open..." (menu or Ctrl+O)
    OpenFileDialog,
    /// Open dialog returned a path (or None if cancelled)
    OpenFileDialogResult { path: Option<PathBuf> },
    /// User requested "Save..." (menu or Ctrl+S)
    SaveFileDialog,
    /// Save dialog returned a path (or None if cancelled)
    SaveFileDialogResult { path: Option<PathBuf> },
    /// File read finished
    FileLoaded {
        path: PathBuf,
        result: Result<Vec<u8>, FileIoError>,
    },
    /// File write finished
    SaveCompleted {
        path: PathBuf,
        result: Result<(), FileIoError>,
    },
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug)]
pub enum Msg {
    /// Editor messages (cursor, viewport)
    Editor(EditorMsg),
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// Menu bar messages
    Menu(MenuMsg),
    /// Find/replace dialog messages
    Dialog(DialogMsg),
    /// UI messages (status, animation)
    Ui(UiMsg),
    /// App messages (file I/O, window)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a cursor movement message
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Editor(EditorMsg::MoveCursor(direction))
    }

    /// Create an insert character message
    pub fn insert_char(ch: char) -> Self {
        Msg::Document(DocumentMsg::InsertChar(ch))
    }

    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}
