//! setup.cfg document model
//!
//! This module provides:
//! - ConfigDocument, an ordered section -> key -> value mapping
//! - A configparser-compatible reader and writer
//! - Schema-driven section and key ordering
//! - Helpers for the two list layouts used in setup.cfg values

mod layout;
mod reader;
mod writer;

pub use layout::{reorder, KEYS_ORDER};
pub use writer::{read_document, serialize, write_document};

use crate::error::DocumentError;
use indexmap::IndexMap;

/// Ordered entries of a single section
pub type Section = IndexMap<String, String>;

/// An INI document with section and key order preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: IndexMap<String, Section>,
}

impl ConfigDocument {
    /// Creates an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses INI text.
    ///
    /// Errors carry the line number but no path; callers attach one with
    /// [`DocumentError::with_path`].
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        Ok(Self {
            sections: reader::parse_sections(text)?,
        })
    }

    /// Returns true if the section exists
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Returns the entries of a section
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Section names in document order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Iterates over sections in document order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Section)> {
        self.sections.iter()
    }

    /// Adds an empty section at the end if it does not exist yet
    pub fn add_section(&mut self, name: impl Into<String>) {
        self.sections.entry(name.into()).or_default();
    }

    /// Replaces (or appends) a whole section
    pub fn insert_section(&mut self, name: impl Into<String>, entries: Section) {
        self.sections.insert(name.into(), entries);
    }

    /// Removes a section, keeping the order of the others
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.shift_remove(name)
    }

    /// Looks up a value
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Looks up a value, treating a missing section or key as empty
    pub fn get_or_empty(&self, section: &str, key: &str) -> &str {
        self.get(section, key).unwrap_or("")
    }

    /// Returns true if the key exists in the section
    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Sets a value, creating the section if needed.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    /// Removes a key, keeping the order of the remaining keys
    pub fn remove(&mut self, section: &str, key: &str) -> Option<String> {
        self.sections
            .get_mut(section)
            .and_then(|entries| entries.shift_remove(key))
    }

    /// Drops empty values, then sections left without entries
    pub fn clean_empty(&mut self) {
        for entries in self.sections.values_mut() {
            entries.retain(|_, value| !value.is_empty());
        }
        self.sections.retain(|_, entries| !entries.is_empty());
    }

    /// Returns true if the document has no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Splits a list value into its lines, ignoring surrounding blank lines
pub fn parse_list(value: &str) -> Vec<String> {
    value.trim().lines().map(String::from).collect()
}

/// Formats a list as an indented block, even for a single item
pub fn format_list_always<S: AsRef<str>>(items: &[S]) -> String {
    items.iter().fold(String::new(), |mut out, item| {
        out.push('\n');
        out.push_str(item.as_ref());
        out
    })
}

/// Formats a single item inline and several items as an indented block
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [single] => single.as_ref().to_string(),
        _ => format_list_always(items),
    }
}
