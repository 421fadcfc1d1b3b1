//! Logging setup and debug-build state snapshots
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=search=debug,file_io=info` - scoped filtering
//! - `RUST_LOG=jot::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/jot-editor/logs/jot.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of document and cursor state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub len: usize,
    pub line_count: usize,
    pub cursor: usize,
    pub is_modified: bool,
    pub dialog_visible: bool,
}

impl StateSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            len: model.document.len(),
            line_count: model.document.line_count(),
            cursor: model.editor.cursor,
            is_modified: model.document.is_modified,
            dialog_visible: model.find_dialog.as_ref().is_some_and(|d| d.visible),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.len != other.len || self.line_count != other.line_count {
            changes.push(format!(
                "document: {}B/{}L → {}B/{}L",
                self.len, self.line_count, other.len, other.line_count
            ));
        }
        if self.cursor != other.cursor {
            changes.push(format!("cursor: {} → {}", self.cursor, other.cursor));
        }
        if self.is_modified != other.is_modified {
            changes.push(format!("modified: {}", other.is_modified));
        }
        if self.dialog_visible != other.dialog_visible {
            changes.push(format!("find dialog visible: {}", other.dialog_visible));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }

    /// Panic if the cursor is outside the document (debug builds)
    pub fn assert_invariants(model: &AppModel, context: &str) {
        let bytes = model.document.bytes();
        let cursor = model.editor.cursor;
        assert!(
            cursor <= bytes.len(),
            "[{}] cursor {} beyond document length {}",
            context,
            cursor,
            bytes.len()
        );
        assert!(
            crate::util::is_boundary(bytes, cursor),
            "[{}] cursor {} is not on a character boundary",
            context,
            cursor
        );
    }
}
