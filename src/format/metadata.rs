//! `[metadata]` fields inferred from adjacent files

use crate::document::{format_list, parse_list, ConfigDocument};
use crate::domain::license_classifier;
use crate::error::DocumentError;
use crate::probe::{
    first_file, identify_license_file, ContentType, LicenseIdentifier, LICENSE_PREFIX,
    README_PREFIX,
};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

const METADATA: &str = "metadata";

/// Replaces `-` with `_` in `metadata.name`
pub fn normalize_name(doc: &mut ConfigDocument, path: &Path) -> Result<(), DocumentError> {
    let name = match doc.get(METADATA, "name") {
        Some(name) => name.replace('-', "_"),
        None if doc.has_section(METADATA) => {
            return Err(DocumentError::missing_key(path, METADATA, "name"))
        }
        None => return Err(DocumentError::missing_section(path, METADATA)),
    };
    doc.set(METADATA, "name", name);
    Ok(())
}

/// Points `long_description` at the readme next to the file, if any
pub fn apply_readme(doc: &mut ConfigDocument, dir: &Path) {
    let Some(readme) = first_file(dir, README_PREFIX) else {
        return;
    };
    let Some(file_name) = readme.file_name().and_then(|n| n.to_str()) else {
        return;
    };

    let content_type = ContentType::from_path(&readme);
    debug!("readme: {} ({})", file_name, content_type);

    doc.set(METADATA, "long_description", format!("file: {}", file_name));
    doc.set(METADATA, "long_description_content_type", content_type.mime_type());
}

/// Merges `license_file`, `license_files` and the license file next to the
/// document into a sorted `license_files`.
///
/// A recognized license also sets `license` and appends its classifier to
/// `classifiers`.
pub fn apply_license(
    doc: &mut ConfigDocument,
    dir: &Path,
    identifier: &dyn LicenseIdentifier,
    classifiers: &mut Vec<String>,
) -> Result<(), DocumentError> {
    let mut licenses = parse_list(doc.get_or_empty(METADATA, "license_files"));
    if let Some(legacy) = doc.remove(METADATA, "license_file") {
        licenses.extend(parse_list(&legacy));
    }

    if let Some(license_path) = first_file(dir, LICENSE_PREFIX) {
        if let Some(file_name) = license_path.file_name().and_then(|n| n.to_str()) {
            licenses.push(file_name.to_string());
        }

        let license_id = identify_license_file(identifier, &license_path)?;
        debug!("license {}: {:?}", license_path.display(), license_id);

        if let Some(id) = license_id {
            if let Some(classifier) = license_classifier(&id) {
                classifiers.push(classifier.to_string());
            }
            doc.set(METADATA, "license", id);
        }
    }

    if !licenses.is_empty() {
        let unique: Vec<String> = licenses.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        doc.set(METADATA, "license_files", format_list(&unique));
    }

    Ok(())
}
