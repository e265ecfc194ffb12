//! Per-file formatting result

use std::path::PathBuf;

/// Outcome of formatting a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path of the formatted file
    pub path: PathBuf,
    /// Content as read from disk
    pub original: String,
    /// Canonical content
    pub formatted: String,
    /// Whether the canonical content was written back
    pub written: bool,
}

impl FileReport {
    /// Create a report; nothing is written yet
    pub fn new(path: impl Into<PathBuf>, original: String, formatted: String) -> Self {
        Self {
            path: path.into(),
            original,
            formatted,
            written: false,
        }
    }

    /// Returns true if the file was not already canonical
    pub fn changed(&self) -> bool {
        self.original != self.formatted
    }
}
