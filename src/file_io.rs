//! Whole-file load and save
//!
//! Bytes go through untouched: no encoding detection, no newline conversion.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while reading or writing a document
#[derive(Debug, Error)]
pub enum FileIoError {
    /// The file could not be read (missing, unreadable, a directory)
    #[error("Error opening file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file could not be written
    #[error("Error saving file {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileIoError {
    /// Path the failed operation was targeting
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Save { path, .. } => path,
        }
    }

    /// Underlying I/O error kind
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Open { source, .. } | Self::Save { source, .. } => source.kind(),
        }
    }

    /// Short message suitable for the status bar
    pub fn user_message(&self) -> String {
        let name = filename_for_display(self.path());
        let reason = match self.kind() {
            io::ErrorKind::NotFound => "file not found".to_string(),
            io::ErrorKind::PermissionDenied => "permission denied".to_string(),
            _ => match self {
                Self::Open { source, .. } | Self::Save { source, .. } => source.to_string(),
            },
        };
        match self {
            Self::Open { .. } => format!("Could not open {}: {}", name, reason),
            Self::Save { .. } => format!("Could not save {}: {}", name, reason),
        }
    }
}

/// Read the entire file at `path`
pub fn open(path: &Path) -> Result<Vec<u8>, FileIoError> {
    let open_err = |source| FileIoError::Open {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(open_err)?;
    if metadata.is_dir() {
        return Err(open_err(io::Error::other("is a directory")));
    }

    let content = fs::read(path).map_err(open_err)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "loaded file");
    Ok(content)
}

/// Write `content` to `path`, creating or truncating it
///
/// A failure part-way through can leave a partially written file behind.
pub fn save(path: &Path, content: &[u8]) -> Result<(), FileIoError> {
    fs::write(path, content).map_err(|source| FileIoError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "saved file");
    Ok(())
}

/// Write `content` to a temp file next to `path`, then rename it into place
///
/// Either the old file or the complete new file is left at `path`.
pub fn save_atomic(path: &Path, content: &[u8]) -> Result<(), FileIoError> {
    let save_err = |source| FileIoError::Save {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(save_err)?;
    temp.write_all(content).map_err(save_err)?;
    temp.as_file().sync_all().map_err(save_err)?;
    temp.persist(path).map_err(|e| save_err(e.error))?;

    tracing::info!(path = %path.display(), bytes = content.len(), "saved file atomically");
    Ok(())
}

/// File name for display in titles and messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
