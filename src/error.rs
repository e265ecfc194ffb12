//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: Version or constraint strings of an unrecognized shape
//! - DocumentError: Issues reading, parsing or writing a setup.cfg file
//! - ConfigError: Invalid CLI version arguments, reported through clap

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Document related errors
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// A version string or constraint that does not match a recognized shape.
///
/// Callers treat this as "leave the original value untouched".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("unknown version: '{value}'")]
    UnknownVersion { value: String },
}

impl VersionError {
    /// Creates a new UnknownVersion error
    pub fn unknown(value: impl Into<String>) -> Self {
        VersionError::UnknownVersion {
            value: value.into(),
        }
    }
}

/// Errors related to configuration documents
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Failed to read the file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the file
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// INI syntax error
    #[error("failed to parse {path} at line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A section the formatter relies on is absent
    #[error("missing section [{section}] in {path}")]
    MissingSection { path: PathBuf, section: String },

    /// A key the formatter relies on is absent
    #[error("missing key '{key}' in section [{section}] of {path}")]
    MissingKey {
        path: PathBuf,
        section: String,
        key: String,
    },
}

/// Errors related to configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Version argument is not of the `#.#` shape
    #[error("expected #.#, got '{value}'")]
    MalformedPyVersion { value: String },

    /// Version argument names a Python older than 3
    #[error("must be at least 3, got '{value}'")]
    PyVersionTooOld { value: String },

    /// Classifier ceiling outside Python 3
    #[error("must be a Python 3 version, got '{value}'")]
    PyVersionTooNew { value: String },
}

impl DocumentError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocumentError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocumentError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Parse error
    pub fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        DocumentError::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Creates a new MissingSection error
    pub fn missing_section(path: impl Into<PathBuf>, section: impl Into<String>) -> Self {
        DocumentError::MissingSection {
            path: path.into(),
            section: section.into(),
        }
    }

    /// Creates a new MissingKey error
    pub fn missing_key(
        path: impl Into<PathBuf>,
        section: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        DocumentError::MissingKey {
            path: path.into(),
            section: section.into(),
            key: key.into(),
        }
    }

    /// Re-targets a path-less error at the file it came from
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match self {
            DocumentError::ReadError { source, .. } => DocumentError::ReadError { path, source },
            DocumentError::WriteError { source, .. } => DocumentError::WriteError { path, source },
            DocumentError::Parse { line, message, .. } => DocumentError::Parse {
                path,
                line,
                message,
            },
            DocumentError::MissingSection { section, .. } => {
                DocumentError::MissingSection { path, section }
            }
            DocumentError::MissingKey { section, key, .. } => {
                DocumentError::MissingKey { path, section, key }
            }
        }
    }
}
