//! Side-effect commands returned from update
//!
//! The runtime executes these synchronously on the UI thread and feeds any
//! result back in as a [`Msg`](crate::messages::Msg).

use std::path::PathBuf;

/// Severity of a message box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of every visible window
    Redraw,
    /// Show native open file dialog
    ShowOpenFileDialog {
        /// Starting directory for the dialog
        start_dir: Option<PathBuf>,
    },
    /// Show native save file dialog
    ShowSaveFileDialog {
        /// Suggested file path (for pre-filling name/directory)
        suggested_path: Option<PathBuf>,
    },
    /// Read a file; answered with `AppMsg::FileLoaded`
    LoadFile { path: PathBuf },
    /// Write a file; answered with `AppMsg::SaveCompleted`
    SaveFile {
        path: PathBuf,
        content: Vec<u8>,
        /// Write through a temporary file and rename
        atomic: bool,
    },
    /// Show a blocking message box
    ShowMessage {
        level: MessageLevel,
        title: String,
        text: String,
    },
    /// Show the find/replace window, creating it if needed
    ShowFindDialog,
    /// Hide the find/replace window
    HideFindDialog,
    /// Request application exit
    Quit,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Cmd::ShowMessage {
            level: MessageLevel::Info,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Cmd::ShowMessage {
            level: MessageLevel::Error,
            title: title.into(),
            text: text.into(),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Dialogs trigger messages when done, which redraw as needed
            Cmd::ShowOpenFileDialog { .. } => false,
            Cmd::ShowSaveFileDialog { .. } => false,
            Cmd::LoadFile { .. } => true,
            Cmd::SaveFile { .. } => true,
            Cmd::ShowMessage { .. } => false,
            Cmd::ShowFindDialog => true,
            Cmd::HideFindDialog => false,
            Cmd::Quit => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::Redraw.needs_redraw());
        assert!(!Cmd::info("Find", "Text not found.").needs_redraw());
        assert!(Cmd::LoadFile {
            path: PathBuf::from("a.txt")
        }
        .needs_redraw());
    }

    #[test]
    fn test_batch_needs_redraw_if_any() {
        let batch = Cmd::batch(vec![Cmd::HideFindDialog, Cmd::Redraw]);
        assert!(batch.needs_redraw());
        let batch = Cmd::batch(vec![Cmd::HideFindDialog, Cmd::None]);
        assert!(!batch.needs_redraw());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Cmd::from(None), Cmd::None);
        assert_eq!(Cmd::from(Some(Cmd::Redraw)), Cmd::Redraw);
    }
}
