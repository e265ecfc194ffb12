//! Readme content type detection

use std::fmt;
use std::path::Path;

/// Content type of a long description file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Markdown,
    ReStructuredText,
    PlainText,
}

impl ContentType {
    /// Detects the content type from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("md" | "markdown") => ContentType::Markdown,
            Some("rst") => ContentType::ReStructuredText,
            _ => ContentType::PlainText,
        }
    }

    /// MIME type written to `long_description_content_type`
    pub fn mime_type(&self) -> &'static str {
        match self {
            ContentType::Markdown => "text/markdown",
            ContentType::ReStructuredText => "text/x-rst",
            ContentType::PlainText => "text/plain",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime_type())
    }
}
