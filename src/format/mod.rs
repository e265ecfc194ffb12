//! setup.cfg formatting pipeline
//!
//! This module provides:
//! - Formatter, which rewrites a single setup.cfg into canonical form
//! - FormatOptions for the Python version range and output behavior
//! - FileReport describing what happened to a file
//!
//! Steps, in order: strip empty values, normalize the name, infer readme and
//! license metadata, resolve `python_requires`, normalize requirements,
//! derive and sort classifiers, reorder, serialize.

mod metadata;
mod options;
mod python;
mod report;

pub use options::{FormatOptions, DEFAULT_MAX_PY_VERSION, DEFAULT_MIN_PY_VERSION};
pub use python::resolve_python_requires;
pub use report::FileReport;

use crate::document::{
    format_list_always, parse_list, read_document, reorder, serialize, write_document,
    ConfigDocument,
};
use crate::domain::classifier::{derive_from_constraint, implementation_classifiers, trim};
use crate::domain::{natural_sort, normalize_block, ConstraintParse};
use crate::error::DocumentError;
use crate::probe::{parent_dir, tox_envlist, SpdxIdentifier, LicenseIdentifier};
use std::path::Path;
use tracing::{debug, info};

const OPTIONS: &str = "options";
const EXTRAS_REQUIRE: &str = "options.extras_require";
const REQUIRES_KEYS: [&str; 2] = ["install_requires", "setup_requires"];

/// Rewrites setup.cfg files into canonical form
pub struct Formatter {
    options: FormatOptions,
    identifier: Box<dyn LicenseIdentifier>,
}

impl Formatter {
    /// Create a formatter using the built-in license identifier
    pub fn new(options: FormatOptions) -> Self {
        Self::with_identifier(options, Box::new(SpdxIdentifier::new()))
    }

    /// Create a formatter with a custom license identifier
    pub fn with_identifier(options: FormatOptions, identifier: Box<dyn LicenseIdentifier>) -> Self {
        Self {
            options,
            identifier,
        }
    }

    /// Returns the options this formatter runs with
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Formats the file at `path`, writing it back when it changed (unless dry-run)
    pub fn format_file(&self, path: &Path) -> Result<FileReport, DocumentError> {
        let original = read_document(path)?;
        let formatted = self.format_contents(&original, path)?;
        let mut report = FileReport::new(path, original, formatted);

        if report.changed() && !self.options.dry_run {
            write_document(path, &report.formatted)?;
            report.written = true;
            info!("rewrote {}", path.display());
        }

        Ok(report)
    }

    /// Computes the canonical content for `text`, the content of the file at
    /// `path`.
    ///
    /// Files next to `path` (readme, license, tox.ini) are consulted; nothing
    /// is written.
    pub fn format_contents(&self, text: &str, path: &Path) -> Result<String, DocumentError> {
        let dir = parent_dir(path);
        let mut doc = ConfigDocument::parse(text).map_err(|e| e.with_path(path))?;
        doc.clean_empty();

        metadata::normalize_name(&mut doc, path)?;
        metadata::apply_readme(&mut doc, dir);

        let mut classifiers = parse_list(doc.get_or_empty("metadata", "classifiers"));
        metadata::apply_license(&mut doc, dir, self.identifier.as_ref(), &mut classifiers)?;

        let envs = tox_envlist(dir)?;
        let requires = resolve_python_requires(
            doc.get_or_empty(OPTIONS, "python_requires"),
            &parse_list(doc.get_or_empty("metadata", "classifiers")),
            &envs,
            &self.options.min_py_version,
        );
        debug!("python_requires for {}: {:?}", path.display(), requires);
        if let Some(ref requires) = requires {
            doc.set(OPTIONS, "python_requires", requires.as_str());
        }

        normalize_requirements(&mut doc);

        let constraint = requires.as_deref().map(ConstraintParse::from_value);
        let parsed = constraint.as_ref().and_then(ConstraintParse::requires);
        if let Some(parsed) = parsed {
            classifiers.extend(derive_from_constraint(parsed, &self.options.max_py_version));
        }
        classifiers.extend(implementation_classifiers(&envs));

        if !classifiers.is_empty() {
            let classifiers = trim(
                natural_sort(&classifiers),
                parsed,
                &self.options.max_py_version,
                self.options.include_version_classifiers,
            );
            if classifiers.is_empty() {
                doc.remove("metadata", "classifiers");
            } else {
                doc.set("metadata", "classifiers", format_list_always(&classifiers));
            }
        }

        Ok(serialize(&reorder(doc)))
    }
}

/// Normalizes `install_requires`, `setup_requires` and every extras group
fn normalize_requirements(doc: &mut ConfigDocument) {
    for key in REQUIRES_KEYS {
        let requirements = parse_list(doc.get_or_empty(OPTIONS, key));
        if !requirements.is_empty() {
            doc.set(OPTIONS, key, format_list_always(&normalize_block(&requirements)));
        }
    }

    let extras: Vec<String> = doc
        .section(EXTRAS_REQUIRE)
        .map(|section| section.keys().cloned().collect())
        .unwrap_or_default();
    for extra in extras {
        let requirements = parse_list(doc.get_or_empty(EXTRAS_REQUIRE, &extra));
        doc.set(
            EXTRAS_REQUIRE,
            &extra,
            format_list_always(&normalize_block(&requirements)),
        );
    }
}
