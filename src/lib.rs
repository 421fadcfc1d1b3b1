//! Jot - a small Elm-style text editor
//!
//! This crate provides the core types and logic for the editor: the document
//! model, message handlers, find/replace search, file I/O and configuration.
//! The `jot` binary adds windowing and rendering on top.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod file_io;
pub mod layout;
pub mod messages;
pub mod model;
pub mod search;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
