//! Theme system for the editor
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/jot-editor/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

/// UI theme colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub editor: EditorThemeData,
    pub menu_bar: MenuBarThemeData,
    pub status_bar: StatusBarThemeData,
    pub dialog: DialogThemeData,
    pub input: InputThemeData,
    pub button: ButtonThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorThemeData {
    pub background: String,
    pub foreground: String,
    pub current_line_background: String,
    pub cursor_color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuBarThemeData {
    pub background: String,
    pub foreground: String,
    pub hover_background: String,
    pub dropdown_background: String,
    #[serde(default)]
    pub shortcut_foreground: Option<String>,
    pub border: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarThemeData {
    pub background: String,
    pub foreground: String,
    #[serde(default)]
    pub border: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DialogThemeData {
    pub background: String,
    pub foreground: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputThemeData {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub focus_border: String,
    pub cursor_color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ButtonThemeData {
    pub background: String,
    pub background_hover: String,
    pub background_pressed: String,
    pub foreground: String,
    pub border: String,
    pub focus_ring: String,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub editor: EditorTheme,
    pub menu_bar: MenuBarTheme,
    pub status_bar: StatusBarTheme,
    pub dialog: DialogTheme,
    pub input: InputTheme,
    pub button: ButtonTheme,
}

#[derive(Debug, Clone)]
pub struct EditorTheme {
    pub background: Color,
    pub foreground: Color,
    pub current_line_background: Color,
    pub cursor_color: Color,
}

#[derive(Debug, Clone)]
pub struct MenuBarTheme {
    pub background: Color,
    pub foreground: Color,
    pub hover_background: Color,
    pub dropdown_background: Color,
    pub shortcut_foreground: Color,
    pub border: Color,
}

/// Bottom toolbar holding the Find button and status message
#[derive(Debug, Clone)]
pub struct StatusBarTheme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct DialogTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct InputTheme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub focus_border: Color,
    pub cursor_color: Color,
}

#[derive(Debug, Clone)]
pub struct ButtonTheme {
    pub background: Color,
    pub background_hover: Color,
    pub background_pressed: Color,
    pub foreground: Color,
    pub border: Color,
    pub focus_ring: Color,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let ui = data.ui;
        let hex = Color::from_hex;

        let menu_foreground = hex(&ui.menu_bar.foreground)?;
        let status_background = hex(&ui.status_bar.background)?;

        Ok(Theme {
            name: data.name,
            editor: EditorTheme {
                background: hex(&ui.editor.background)?,
                foreground: hex(&ui.editor.foreground)?,
                current_line_background: hex(&ui.editor.current_line_background)?,
                cursor_color: hex(&ui.editor.cursor_color)?,
            },
            menu_bar: MenuBarTheme {
                background: hex(&ui.menu_bar.background)?,
                foreground: menu_foreground,
                hover_background: hex(&ui.menu_bar.hover_background)?,
                dropdown_background: hex(&ui.menu_bar.dropdown_background)?,
                shortcut_foreground: ui
                    .menu_bar
                    .shortcut_foreground
                    .as_deref()
                    .map(hex)
                    .transpose()?
                    .unwrap_or(menu_foreground),
                border: hex(&ui.menu_bar.border)?,
            },
            status_bar: StatusBarTheme {
                background: status_background,
                foreground: hex(&ui.status_bar.foreground)?,
                border: ui
                    .status_bar
                    .border
                    .as_deref()
                    .map(hex)
                    .transpose()?
                    .unwrap_or(status_background),
            },
            dialog: DialogTheme {
                background: hex(&ui.dialog.background)?,
                foreground: hex(&ui.dialog.foreground)?,
            },
            input: InputTheme {
                background: hex(&ui.input.background)?,
                foreground: hex(&ui.input.foreground)?,
                border: hex(&ui.input.border)?,
                focus_border: hex(&ui.input.focus_border)?,
                cursor_color: hex(&ui.input.cursor_color)?,
            },
            button: ButtonTheme {
                background: hex(&ui.button.background)?,
                background_hover: hex(&ui.button.background_hover)?,
                background_pressed: hex(&ui.button.background_pressed)?,
                foreground: hex(&ui.button.foreground)?,
                border: hex(&ui.button.border)?,
                focus_ring: hex(&ui.button.focus_ring)?,
            },
        })
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        Theme::from_yaml(DEFAULT_DARK_YAML).unwrap_or_else(|e| {
            tracing::error!("Embedded dark theme is invalid: {}", e);
            Self::fallback()
        })
    }

    /// Hardcoded colors used if the embedded YAML ever fails to parse
    fn fallback() -> Self {
        let bg = Color::rgb(0x1E, 0x1E, 0x1E);
        let fg = Color::rgb(0xD4, 0xD4, 0xD4);
        let chrome = Color::rgb(0x2D, 0x2D, 0x30);
        let border = Color::rgb(0x45, 0x45, 0x45);
        let accent = Color::rgb(0x00, 0x7A, 0xCC);
        Theme {
            name: "Fallback Dark".to_string(),
            editor: EditorTheme {
                background: bg,
                foreground: fg,
                current_line_background: Color::rgb(0x2A, 0x2A, 0x2A),
                cursor_color: Color::rgb(0xFF, 0xFF, 0xFF),
            },
            menu_bar: MenuBarTheme {
                background: chrome,
                foreground: fg,
                hover_background: border,
                dropdown_background: chrome,
                shortcut_foreground: fg,
                border,
            },
            status_bar: StatusBarTheme {
                background: chrome,
                foreground: fg,
                border,
            },
            dialog: DialogTheme {
                background: chrome,
                foreground: fg,
            },
            input: InputTheme {
                background: bg,
                foreground: fg,
                border,
                focus_border: accent,
                cursor_color: fg,
            },
            button: ButtonTheme {
                background: border,
                background_hover: Color::rgb(0x55, 0x55, 0x55),
                background_pressed: chrome,
                foreground: fg,
                border,
                focus_ring: accent,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}
