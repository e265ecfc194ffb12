//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One `Rewriting <file>` line per changed file
//! - Unchanged files in verbose mode
//! - A closing summary in verbose mode

use crate::format::FileReport;
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether this is a dry-run
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, dry_run: bool, color: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color,
        }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> String {
        if self.dry_run {
            if self.color {
                format!("{} ", "(dry-run)".cyan())
            } else {
                "(dry-run) ".to_string()
            }
        } else {
            String::new()
        }
    }

    fn label(&self, text: &str, changed: bool) -> String {
        match (self.color, changed) {
            (false, _) => text.to_string(),
            (true, true) => text.yellow().bold().to_string(),
            (true, false) => text.dimmed().to_string(),
        }
    }

    fn format_report(&self, report: &FileReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        if report.changed() {
            writeln!(
                writer,
                "{}{} {}",
                self.dry_run_prefix(),
                self.label("Rewriting", true),
                report.path.display()
            )?;
        } else if self.verbosity == Verbosity::Verbose {
            writeln!(
                writer,
                "{} {}",
                self.label("Unchanged", false),
                report.path.display()
            )?;
        }

        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for report in &result.reports {
            self.format_report(report, writer)?;
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(
                writer,
                "{}{} file(s) checked, {} rewritten",
                self.dry_run_prefix(),
                result.reports.len(),
                result.changed_count()
            )?;
        }

        Ok(())
    }
}
