//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of run results
//! - Structured file-by-file change information

use crate::format::FileReport;
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    fn file(&self, report: &FileReport) -> JsonFile {
        JsonFile {
            path: report.path.display().to_string(),
            changed: report.changed(),
            written: report.written,
            formatted: (self.verbosity == Verbosity::Verbose && report.changed())
                .then(|| report.formatted.clone()),
        }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput {
    /// Whether this was a dry-run
    dry_run: bool,
    /// Summary statistics
    summary: JsonSummary,
    /// Per-file results
    files: Vec<JsonFile>,
    /// The error that stopped the run
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Number of files processed
    files: usize,
    /// Number of files rewritten (or that would be)
    rewritten: usize,
}

/// JSON representation of a file result
#[derive(Serialize)]
struct JsonFile {
    /// Path to the file
    path: String,
    /// Whether the file was not canonical
    changed: bool,
    /// Whether the file was written
    written: bool,
    /// New content (verbose mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            dry_run: result.dry_run,
            summary: JsonSummary {
                files: result.reports.len(),
                rewritten: result.changed_count(),
            },
            files: result.reports.iter().map(|r| self.file(r)).collect(),
            error: result.error.as_ref().map(|e| e.to_string()),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
