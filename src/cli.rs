//! CLI argument parsing module for setup-cfg-fmt

use crate::domain::{parse_version, Version};
use crate::error::ConfigError;
use crate::format::{FormatOptions, DEFAULT_MAX_PY_VERSION, DEFAULT_MIN_PY_VERSION};
use crate::output::OutputConfig;
use clap::Parser;
use std::path::PathBuf;

/// Printed when the deprecated `--min-py3-version` flag is used
pub const MIN_PY3_VERSION_WARNING: &str =
    "WARNING: setup-cfg-fmt will replace --min-py3-version with --min-py-version in a future release";

/// Parse a Python version argument of the form `3.X`
pub fn parse_py_version(s: &str) -> Result<Version, ConfigError> {
    let version = parse_version(s).ok().filter(|v| v.len() == 2).ok_or_else(|| {
        ConfigError::MalformedPyVersion {
            value: s.to_string(),
        }
    })?;

    if version.major() < 3 {
        return Err(ConfigError::PyVersionTooOld {
            value: s.to_string(),
        });
    }

    Ok(version)
}

/// Parse the classifier ceiling; only Python 3 versions are generated
pub fn parse_max_py_version(s: &str) -> Result<Version, ConfigError> {
    let version = parse_py_version(s)?;
    if version.major() > 3 {
        return Err(ConfigError::PyVersionTooNew {
            value: s.to_string(),
        });
    }

    Ok(version)
}

/// Normalizes setup.cfg packaging metadata
#[derive(Parser, Debug, Clone)]
#[command(
    name = "setup-cfg-fmt",
    version,
    about = "Normalizes setup.cfg packaging metadata"
)]
pub struct CliArgs {
    /// setup.cfg files to format
    pub filenames: Vec<PathBuf>,

    /// Keep `Programming Language :: Python :: 3.X` classifiers
    #[arg(long)]
    pub include_version_classifiers: bool,

    /// Deprecated alias for --min-py-version
    #[arg(long, hide = true, value_parser = parse_py_version)]
    pub min_py3_version: Option<Version>,

    /// Minimum supported Python version
    #[arg(long, value_parser = parse_py_version, default_value_t = default_min_py_version())]
    pub min_py_version: Version,

    /// Maximum Python version to generate classifiers for (a 3.X version)
    #[arg(long, value_parser = parse_max_py_version, default_value_t = default_max_py_version())]
    pub max_py_version: Version,

    // General options
    /// Dry run mode - report files that would be rewritten without changing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show changes in diff format
    #[arg(long)]
    pub diff: bool,
}

fn default_min_py_version() -> Version {
    let (major, minor) = DEFAULT_MIN_PY_VERSION;
    Version::major_minor(major, minor)
}

fn default_max_py_version() -> Version {
    let (major, minor) = DEFAULT_MAX_PY_VERSION;
    Version::major_minor(major, minor)
}

impl CliArgs {
    /// The minimum Python version, honoring the deprecated flag first
    pub fn effective_min_py_version(&self) -> &Version {
        self.min_py3_version.as_ref().unwrap_or(&self.min_py_version)
    }

    /// Warning to print for deprecated flags, if any were used
    pub fn deprecation_warning(&self) -> Option<&'static str> {
        self.min_py3_version.as_ref().map(|_| MIN_PY3_VERSION_WARNING)
    }

    /// Build the formatter options
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::new()
            .with_include_version_classifiers(self.include_version_classifiers)
            .with_min_py_version(self.effective_min_py_version().clone())
            .with_max_py_version(self.max_py_version.clone())
            .with_dry_run(self.dry_run)
    }

    /// Build the output configuration
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::from_cli(self.json, self.diff, self.verbose, self.quiet, self.dry_run)
    }
}
