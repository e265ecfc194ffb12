//! License identification
//!
//! The default identifier scores the whole license text against the SPDX
//! license list and only accepts a close match. Texts that add or drop
//! clauses (a license plus an extra condition, two licenses in one file) are
//! left unidentified.

use crate::error::DocumentError;
use regex::Regex;
use spdx::detection::{Store, TextData};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

static COPYRIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*(Copyright|\(C\)) .*$").unwrap());

static STORE: LazyLock<Option<Store>> = LazyLock::new(|| match Store::load_inline() {
    Ok(store) => Some(store),
    Err(e) => {
        warn!("failed to load the SPDX license store: {}", e);
        None
    }
});

// Lowest similarity score accepted as a match
const MIN_SCORE: f32 = 0.9;

/// Maps license text to an SPDX identifier
pub trait LicenseIdentifier {
    /// Returns the SPDX id of the license, if recognized
    fn identify(&self, text: &str) -> Option<String>;
}

/// Identifies licenses by comparing the full text with the SPDX license list
#[derive(Debug, Clone, Copy, Default)]
pub struct SpdxIdentifier;

impl SpdxIdentifier {
    pub fn new() -> Self {
        Self
    }
}

impl LicenseIdentifier for SpdxIdentifier {
    fn identify(&self, text: &str) -> Option<String> {
        let text = COPYRIGHT_RE.replace_all(text, "");
        if text.trim().is_empty() {
            return None;
        }

        let store = STORE.as_ref()?;
        let matched = store.analyze(&TextData::new(&text));
        debug!("closest license {} (score {:.3})", matched.name, matched.score);

        (matched.score >= MIN_SCORE).then(|| license_id(matched.name))
    }
}

// GNU ids carry an -only/-or-later suffix the classifier table does not use
fn license_id(name: &str) -> String {
    name.strip_suffix("-only")
        .or_else(|| name.strip_suffix("-or-later"))
        .unwrap_or(name)
        .to_string()
}

/// Reads a license file and identifies it.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn identify_license_file(
    identifier: &dyn LicenseIdentifier,
    path: &Path,
) -> Result<Option<String>, DocumentError> {
    let bytes = fs::read(path).map_err(|e| DocumentError::read_error(path, e))?;
    Ok(identifier.identify(&String::from_utf8_lossy(&bytes)))
}
