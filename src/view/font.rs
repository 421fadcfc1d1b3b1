//! Monospace font discovery
//!
//! Jot ships no font of its own. The configured `font_path` wins; otherwise
//! the first well-known system monospace font that exists is used.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings};

/// System font locations tried in order when no font is configured
fn system_candidates() -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    #[cfg(target_os = "windows")]
    {
        candidates.push(PathBuf::from(r"C:\Windows\Fonts\consola.ttf"));
        candidates.push(PathBuf::from(r"C:\Windows\Fonts\cour.ttf"));
    }

    #[cfg(target_os = "macos")]
    {
        candidates.push(PathBuf::from("/System/Library/Fonts/Menlo.ttc"));
        candidates.push(PathBuf::from("/System/Library/Fonts/Monaco.ttf"));
        candidates.push(PathBuf::from(
            "/System/Library/Fonts/Supplemental/Courier New.ttf",
        ));
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        candidates.push(PathBuf::from(
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        ));
        candidates.push(PathBuf::from("/usr/share/fonts/TTF/DejaVuSansMono.ttf"));
        candidates.push(PathBuf::from(
            "/usr/share/fonts/dejavu-sans-mono-fonts/DejaVuSansMono.ttf",
        ));
        candidates.push(PathBuf::from(
            "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
        ));
        candidates.push(PathBuf::from(
            "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
        ));
        candidates.push(PathBuf::from(
            "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf",
        ));
        candidates.push(PathBuf::from(
            "/usr/share/fonts/truetype/freefont/FreeMono.ttf",
        ));
    }

    candidates
}

/// Candidate paths, configured font first
pub fn font_candidates(configured: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = configured {
        candidates.push(path.to_path_buf());
    }
    candidates.extend(system_candidates());
    candidates
}

/// Parse a font file into a fontdue font
pub fn load_font_file(path: &Path) -> Result<Font> {
    let bytes = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow!("Failed to parse font {}: {}", path.display(), e))
}

/// Load the first usable font from [`font_candidates`]
pub fn load_font(configured: Option<&Path>) -> Result<Font> {
    for path in font_candidates(configured) {
        if !path.exists() {
            continue;
        }
        match load_font_file(&path) {
            Ok(font) => {
                tracing::info!("Using font {}", path.display());
                return Ok(font);
            }
            Err(e) => tracing::warn!("{:#}", e),
        }
    }

    Err(anyhow!(
        "No usable monospace font found; set `font_path` in {}",
        jot::config_paths::config_file()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "config.yaml".to_string())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_font_comes_first() {
        let configured = PathBuf::from("/opt/fonts/Custom.ttf");
        let candidates = font_candidates(Some(&configured));
        assert_eq!(candidates[0], configured);
        assert_eq!(candidates.len(), system_candidates().len() + 1);
    }

    #[test]
    fn test_no_configured_font() {
        assert_eq!(font_candidates(None), system_candidates());
    }

    #[test]
    fn test_unparseable_font_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        fs::write(&path, b"not a font").unwrap();
        assert!(load_font_file(&path).is_err());
    }

    #[test]
    fn test_missing_font_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_font_file(&dir.path().join("missing.ttf")).is_err());
    }
}
