//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management and command execution
//! - `input` - Keyboard event to message mapping
//! - `mouse` - Mouse event handling on top of the layout hit-tests

pub mod app;
pub mod input;
pub mod mouse;

pub use app::App;
