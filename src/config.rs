//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/jot-editor/config.yaml`. Every key
//! is optional; anything missing takes its default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Selected theme id (e.g., "default-dark", "default-light")
    pub theme: String,
    /// Font size in points, before scaling for the display
    pub font_size: f32,
    /// Monospace TTF/OTF to render with; system fonts are tried when unset
    pub font_path: Option<PathBuf>,
    /// Initial main window width in logical pixels
    pub window_width: u32,
    /// Initial main window height in logical pixels
    pub window_height: u32,
    /// Write saves to a temporary file and rename it into place
    pub atomic_save: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: "default-dark".to_string(),
            font_size: 14.0,
            font_path: None,
            window_width: 600,
            window_height: 400,
            atomic_save: false,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        // An empty file deserializes to `null`
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    /// Ensure config directories exist
    pub fn ensure_config_dirs() {
        crate::config_paths::ensure_all_config_dirs();
    }
}
