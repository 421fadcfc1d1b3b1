//! Document model - the text buffer and file state
//!
//! The buffer is raw bytes so that a file can be opened and saved without
//! any encoding conversion. A line index is kept alongside for rendering and
//! cursor movement.

use std::ops::Range;
use std::path::PathBuf;

use crate::file_io::filename_for_display;

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    buffer: Vec<u8>,
    /// Byte offset where each line starts; always contains at least `0`
    line_starts: Vec<usize>,
    /// Path the document was loaded from or last saved to
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::from_bytes(Vec::new())
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes().to_vec())
    }

    /// Create a document from raw bytes
    pub fn from_bytes(buffer: Vec<u8>) -> Self {
        let line_starts = compute_line_starts(&buffer);
        Self {
            buffer,
            line_starts,
            file_path: None,
            is_modified: false,
        }
    }

    /// Create an empty document that will be saved to `path`
    ///
    /// Used when the command line names a file that does not exist yet.
    pub fn new_with_path(path: PathBuf) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new()
        }
    }

    /// The full document content
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// The content decoded for display or tests (invalid bytes become U+FFFD)
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.buffer).into_owned()
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the whole content
    pub fn set_content(&mut self, content: Vec<u8>) {
        self.buffer = content;
        self.line_starts = compute_line_starts(&self.buffer);
    }

    /// Insert bytes at `offset` (clamped to the end of the buffer)
    pub fn insert(&mut self, offset: usize, bytes: &[u8]) {
        let offset = offset.min(self.buffer.len());
        self.buffer.splice(offset..offset, bytes.iter().copied());
        self.line_starts = compute_line_starts(&self.buffer);
        self.is_modified = true;
    }

    /// Remove a byte range (clamped to the buffer)
    pub fn delete(&mut self, range: Range<usize>) {
        let end = range.end.min(self.buffer.len());
        let start = range.start.min(end);
        if start == end {
            return;
        }
        self.buffer.drain(start..end);
        self.line_starts = compute_line_starts(&self.buffer);
        self.is_modified = true;
    }

    /// Get the number of lines in the document
    ///
    /// An empty document has one (empty) line, and a trailing newline starts
    /// a new empty line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where `line_idx` starts
    pub fn line_start(&self, line_idx: usize) -> usize {
        self.line_starts
            .get(line_idx)
            .copied()
            .unwrap_or(self.buffer.len())
    }

    /// Byte offset where `line_idx` ends, excluding its newline
    pub fn line_end(&self, line_idx: usize) -> usize {
        match self.line_starts.get(line_idx + 1) {
            Some(&next) => next - 1,
            None => self.buffer.len(),
        }
    }

    /// Line content without the trailing newline
    pub fn line(&self, line_idx: usize) -> Option<&[u8]> {
        if line_idx >= self.line_count() {
            return None;
        }
        Some(&self.buffer[self.line_start(line_idx)..self.line_end(line_idx)])
    }

    /// Line length in bytes, excluding the newline
    pub fn line_length(&self, line_idx: usize) -> usize {
        self.line(line_idx).map_or(0, <[u8]>::len)
    }

    /// Convert a byte offset to `(line, byte column)`
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.buffer.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        (line, offset - self.line_starts[line])
    }

    /// Convert `(line, byte column)` to a byte offset, clamping both
    pub fn line_col_to_offset(&self, line: usize, byte_col: usize) -> usize {
        let line = line.min(self.line_count() - 1);
        self.line_start(line) + byte_col.min(self.line_length(line))
    }

    /// Get the display name for this document
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .map(filename_for_display)
            .unwrap_or_else(|| "Untitled".to_string())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn compute_line_starts(buffer: &[u8]) -> Vec<usize> {
    std::iter::once(0)
        .chain(
            buffer
                .iter()
                .enumerate()
                .filter_map(|(i, &b)| (b == b'\n').then_some(i + 1)),
        )
        .collect()
}
