//! Command-line argument parsing for the editor

use clap::Parser;
use std::path::PathBuf;

/// A minimal text editor
#[derive(Parser, Debug)]
#[command(name = "jot", version, about = "A minimal text editor")]
pub struct CliArgs {
    /// File to open (created on first save if it does not exist)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Theme id to use for this session instead of the configured one
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// File to open at startup
    pub path: Option<PathBuf>,
    /// Theme override
    pub theme: Option<String>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(path) = &self.path {
            if path.is_dir() {
                return Err(format!("{} is a directory", path.display()));
            }
        }

        Ok(StartupConfig {
            path: self.path,
            theme: self.theme.filter(|id| !id.trim().is_empty()),
        })
    }
}
