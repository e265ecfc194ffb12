//! Run orchestrator for formatting every requested file
//!
//! This module provides:
//! - Sequential processing of the target files in argument order
//! - Dry-run mode support
//! - Abort on the first failing file, keeping the reports gathered so far

use crate::cli::CliArgs;
use crate::error::AppError;
use crate::format::{FileReport, Formatter};
use std::path::PathBuf;
use tracing::debug;

/// Orchestrator for coordinating a formatting run
pub struct Orchestrator {
    /// Files to format, in order
    files: Vec<PathBuf>,
    /// Formatter applied to each file
    formatter: Formatter,
}

/// Result of running the orchestrator
#[derive(Debug)]
pub struct OrchestratorResult {
    /// Reports for every file processed successfully
    pub reports: Vec<FileReport>,
    /// Whether files were left untouched
    pub dry_run: bool,
    /// The error that stopped the run, if any
    pub error: Option<AppError>,
}

impl OrchestratorResult {
    /// Returns true if any file was (or would be) rewritten
    pub fn has_changes(&self) -> bool {
        self.reports.iter().any(FileReport::changed)
    }

    /// Number of files that were (or would be) rewritten
    pub fn changed_count(&self) -> usize {
        self.reports.iter().filter(|r| r.changed()).count()
    }

    /// Returns true if every file was processed
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Self {
        let formatter = Formatter::new(args.format_options());
        Self::with_formatter(args.filenames, formatter)
    }

    /// Create an orchestrator with a custom formatter (for testing)
    pub fn with_formatter(files: Vec<PathBuf>, formatter: Formatter) -> Self {
        Self { files, formatter }
    }

    /// Run the formatter over every file
    pub fn run(&self) -> OrchestratorResult {
        let mut result = OrchestratorResult {
            reports: Vec::with_capacity(self.files.len()),
            dry_run: self.formatter.options().dry_run,
            error: None,
        };

        for path in &self.files {
            debug!("formatting {}", path.display());
            match self.formatter.format_file(path) {
                Ok(report) => {
                    if !report.changed() {
                        debug!("{} already formatted", path.display());
                    }
                    result.reports.push(report);
                }
                Err(e) => {
                    result.error = Some(e.into());
                    break;
                }
            }
        }

        result
    }
}
