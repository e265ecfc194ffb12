//! Document serialization and file I/O

use super::ConfigDocument;
use crate::error::DocumentError;
use std::fs;
use std::path::Path;

/// Serializes a document to canonical text.
///
/// Each section is written as `[name]` followed by `key = value` lines.
/// Multi-line values continue on lines indented by four spaces, sections are
/// separated by one blank line, trailing whitespace is removed from every
/// line and the text ends with exactly one newline.
pub fn serialize(doc: &ConfigDocument) -> String {
    let mut out = String::new();
    for (name, entries) in doc.iter() {
        out.push_str(&format!("[{}]\n", name));
        for (key, value) in entries {
            out.push_str(&format!("{} = {}\n", key, value.replace('\n', "\n\t")));
        }
        out.push('\n');
    }

    let expanded = out.trim().replace('\t', "    ");
    let mut text = expanded
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    text
}

/// Read a setup.cfg file content
pub fn read_document(path: &Path) -> Result<String, DocumentError> {
    fs::read_to_string(path).map_err(|e| DocumentError::read_error(path, e))
}

/// Write content to a setup.cfg file
pub fn write_document(path: &Path, content: &str) -> Result<(), DocumentError> {
    fs::write(path, content).map_err(|e| DocumentError::write_error(path, e))
}
