//! Diff output formatter for showing changes
//!
//! This module provides:
//! - Unified diff of each rewritten file against its original content

use crate::format::FileReport;
use crate::orchestrator::OrchestratorResult;
use crate::output::OutputFormatter;
use similar::TextDiff;
use std::io::Write;

/// Diff formatter for showing file rewrites
pub struct DiffFormatter {
    /// Whether this is a dry-run
    dry_run: bool,
}

impl DiffFormatter {
    /// Create a new diff formatter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> &'static str {
        if self.dry_run {
            "(dry-run) "
        } else {
            ""
        }
    }

    fn outcome(&self) -> &'static str {
        if self.dry_run {
            "would be rewritten"
        } else {
            "rewritten"
        }
    }

    fn format_report(&self, report: &FileReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if !report.changed() {
            return Ok(());
        }

        let path = report.path.display().to_string();
        let diff = TextDiff::from_lines(&report.original, &report.formatted);
        let unified = diff
            .unified_diff()
            .context_radius(3)
            .header(&format!("a/{}", path), &format!("b/{}", path))
            .to_string();

        write!(writer, "{}", unified)?;
        if !unified.ends_with('\n') {
            writeln!(writer)?;
        }

        Ok(())
    }
}

impl OutputFormatter for DiffFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for report in &result.reports {
            self.format_report(report, writer)?;
        }

        writeln!(
            writer,
            "{}# {} file(s) {}",
            self.dry_run_prefix(),
            result.changed_count(),
            self.outcome()
        )?;

        Ok(())
    }
}
