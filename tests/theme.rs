//! Theme loading tests

use jot::theme::{from_file, Color, Theme, BUILTIN_THEMES, DEFAULT_DARK_YAML, DEFAULT_LIGHT_YAML};
use tempfile::tempdir;

#[test]
fn test_color_from_hex_6() {
    let color = Color::from_hex("#1E1E1E").unwrap();
    assert_eq!((color.r, color.g, color.b, color.a), (0x1E, 0x1E, 0x1E, 255));
}

#[test]
fn test_color_from_hex_8() {
    let color = Color::from_hex("#1E1E1E80").unwrap();
    assert_eq!(color.a, 0x80);
}

#[test]
fn test_color_from_hex_invalid() {
    assert!(Color::from_hex("#12").is_err());
    assert!(Color::from_hex("#GGGGGG").is_err());
}

#[test]
fn test_color_to_argb_u32() {
    assert_eq!(Color::rgb(0x1E, 0x1E, 0x1E).to_argb_u32(), 0xFF1E1E1E);
}

#[test]
fn test_builtin_ids() {
    let ids: Vec<&str> = BUILTIN_THEMES.iter().map(|t| t.id).collect();
    assert_eq!(ids, ["default-dark", "default-light"]);
}

#[test]
fn test_dark_and_light_differ() {
    let dark = Theme::from_yaml(DEFAULT_DARK_YAML).unwrap();
    let light = Theme::from_yaml(DEFAULT_LIGHT_YAML).unwrap();
    assert_ne!(dark.editor.background, light.editor.background);
}

#[test]
fn test_default_is_dark() {
    assert_eq!(
        Theme::default().editor.background,
        Theme::from_builtin("default-dark").unwrap().editor.background
    );
}

#[test]
fn test_user_theme_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.yaml");
    let yaml = DEFAULT_DARK_YAML.replace("#1E1E1E", "#102030");
    std::fs::write(&path, yaml).unwrap();

    let theme = from_file(&path).unwrap();
    assert_eq!(theme.editor.background, Color::rgb(0x10, 0x20, 0x30));
}

#[test]
fn test_theme_file_with_bad_color_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    let yaml = DEFAULT_DARK_YAML.replace("#1E1E1E", "not-a-color");
    std::fs::write(&path, yaml).unwrap();

    assert!(from_file(&path).is_err());
}

#[test]
fn test_missing_theme_file_is_error() {
    let dir = tempdir().unwrap();
    assert!(from_file(&dir.path().join("nope.yaml")).is_err());
}
