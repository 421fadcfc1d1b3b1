//! Configuration system tests
//!
//! Tests for config paths and editor config loading.

use jot::config::EditorConfig;
use jot::config_paths;
use tempfile::tempdir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("jot-editor"));
    }
}

#[test]
fn test_config_file_is_yaml_in_config_dir() {
    let (Some(dir), Some(file)) = (config_paths::config_dir(), config_paths::config_file()) else {
        return;
    };
    assert_eq!(file.parent(), Some(dir.as_path()));
    assert_eq!(file.extension().and_then(|e| e.to_str()), Some("yaml"));
}

#[test]
fn test_themes_and_logs_live_under_config_dir() {
    let Some(dir) = config_paths::config_dir() else {
        return;
    };
    assert!(config_paths::themes_dir().unwrap().starts_with(&dir));
    assert!(config_paths::logs_dir().unwrap().starts_with(&dir));
}

// ========================================================================
// EditorConfig Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = EditorConfig::default();
    assert_eq!(config.theme, "default-dark");
    assert_eq!((config.window_width, config.window_height), (600, 400));
    assert!(!config.atomic_save);
    assert!(config.font_path.is_none());
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("config.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_invalid_yaml_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "font_size: [not, a, number]").unwrap();

    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "").unwrap();

    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_load_full_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "theme: default-light\n\
         font_size: 16.0\n\
         font_path: /usr/share/fonts/Mono.ttf\n\
         window_width: 1024\n\
         window_height: 768\n\
         atomic_save: true\n",
    )
    .unwrap();

    let expected = EditorConfig {
        theme: "default-light".to_string(),
        font_size: 16.0,
        font_path: Some("/usr/share/fonts/Mono.ttf".into()),
        window_width: 1024,
        window_height: 768,
        atomic_save: true,
    };
    assert_eq!(EditorConfig::load_from(&path), expected);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = EditorConfig::from_yaml("theme: default-light\nsome_future_option: 3\n").unwrap();
    assert_eq!(config.theme, "default-light");
}
