//! Discovery of files that sit next to setup.cfg
//!
//! This module provides:
//! - Case-insensitive lookup of README and LICENSE files
//! - Readme content type detection
//! - License identification behind the LicenseIdentifier trait
//! - Reading the tox environment list

mod license;
mod readme;
mod tox;

pub use license::{identify_license_file, SpdxIdentifier, LicenseIdentifier};
pub use readme::ContentType;
pub use tox::tox_envlist;

use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

/// Glob prefix for readme files
pub const README_PREFIX: &str = "readme";

/// Glob prefix for license files (`LICENSE`, `licence.txt`, ...)
pub const LICENSE_PREFIX: &str = "licen[sc]e";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Returns the directory holding `path`, `.` for a bare file name
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Finds the first regular file in `dir` whose name matches `<prefix>*`,
/// ignoring case.
///
/// Candidates are ordered by name with AsciiDoc files (`.adoc`, `.asciidoc`)
/// last; directories never match.
pub fn first_file(dir: &Path, prefix: &str) -> Option<PathBuf> {
    let pattern = Pattern::new(&format!("{}*", prefix)).ok()?;
    let entries = fs::read_dir(dir).ok()?;

    let mut candidates: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().to_str().map(String::from))
        .filter(|name| pattern.matches_with(name, MATCH_OPTIONS))
        .collect();
    candidates.sort_by_cached_key(|name| (is_asciidoc(name), name.clone()));

    candidates
        .into_iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

fn is_asciidoc(name: &str) -> bool {
    name.ends_with(".adoc") || name.ends_with(".asciidoc")
}
