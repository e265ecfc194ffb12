//! Formatter configuration
//!
//! This module provides the FormatOptions struct that carries every
//! setting of a formatting run.

use crate::domain::Version;

/// Lowest Python version assumed when none is declared
pub const DEFAULT_MIN_PY_VERSION: (u32, u32) = (3, 9);

/// Highest Python version classifiers are generated for
pub const DEFAULT_MAX_PY_VERSION: (u32, u32) = (3, 13);

/// Settings for a formatting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Keep `Programming Language :: Python :: X.Y` classifiers
    pub include_version_classifiers: bool,
    /// Minimum supported Python version; `python_requires` is never lower
    pub min_py_version: Version,
    /// Maximum Python version classifiers are generated for. Minor versions
    /// are only generated within its major, so a `4.x` ceiling yields no
    /// `3.x` classifiers.
    pub max_py_version: Version,
    /// Compute results without writing files
    pub dry_run: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        let (min_major, min_minor) = DEFAULT_MIN_PY_VERSION;
        let (max_major, max_minor) = DEFAULT_MAX_PY_VERSION;
        Self {
            include_version_classifiers: false,
            min_py_version: Version::major_minor(min_major, min_minor),
            max_py_version: Version::major_minor(max_major, max_minor),
            dry_run: false,
        }
    }
}

impl FormatOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether version classifiers are kept
    pub fn with_include_version_classifiers(mut self, include: bool) -> Self {
        self.include_version_classifiers = include;
        self
    }

    /// Set the minimum supported Python version
    pub fn with_min_py_version(mut self, version: Version) -> Self {
        self.min_py_version = version;
        self
    }

    /// Set the maximum Python version
    pub fn with_max_py_version(mut self, version: Version) -> Self {
        self.max_py_version = version;
        self
    }

    /// Set dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
