//! Trove classifier derivation and ordering
//!
//! This module provides:
//! - Python version classifiers derived from a `python_requires` constraint
//! - Trimming of version classifiers that fall outside the supported range
//! - Implementation classifiers (CPython/PyPy) from tox environment names
//! - License classifiers for recognized SPDX identifiers
//! - Natural sorting, so `3.9` sorts before `3.10`

use super::version::{PythonRequires, Version};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Prefix shared by every Python version classifier
pub const PYTHON_CLASSIFIER_PREFIX: &str = "Programming Language :: Python :: ";

/// Marks a project as Python 3 only
pub const PYTHON_3_ONLY: &str = "Programming Language :: Python :: 3 :: Only";

const CPYTHON: &str = "Programming Language :: Python :: Implementation :: CPython";
const PYPY: &str = "Programming Language :: Python :: Implementation :: PyPy";

static LICENSE_CLASSIFIERS: &[(&str, &str)] = &[
    ("0BSD", "License :: OSI Approved :: BSD License"),
    ("AFL-3.0", "License :: OSI Approved :: Academic Free License (AFL)"),
    ("AGPL-3.0", "License :: OSI Approved :: GNU Affero General Public License v3"),
    ("Apache-2.0", "License :: OSI Approved :: Apache Software License"),
    ("Artistic-2.0", "License :: OSI Approved :: Artistic License"),
    ("BSD-2-Clause", "License :: OSI Approved :: BSD License"),
    ("BSD-3-Clause", "License :: OSI Approved :: BSD License"),
    ("BSD-3-Clause-Clear", "License :: OSI Approved :: BSD License"),
    ("BSL-1.0", "License :: OSI Approved :: Boost Software License 1.0 (BSL-1.0)"),
    ("CC0-1.0", "License :: CC0 1.0 Universal (CC0 1.0) Public Domain Dedication"),
    ("EPL-1.0", "License :: OSI Approved :: Eclipse Public License 1.0 (EPL-1.0)"),
    ("EPL-2.0", "License :: OSI Approved :: Eclipse Public License 2.0 (EPL-2.0)"),
    ("EUPL-1.1", "License :: OSI Approved :: European Union Public Licence 1.1 (EUPL 1.1)"),
    ("EUPL-1.2", "License :: OSI Approved :: European Union Public Licence 1.2 (EUPL 1.2)"),
    ("GPL-2.0", "License :: OSI Approved :: GNU General Public License v2 (GPLv2)"),
    ("GPL-3.0", "License :: OSI Approved :: GNU General Public License v3 (GPLv3)"),
    ("ISC", "License :: OSI Approved :: ISC License (ISCL)"),
    ("LGPL-2.1", "License :: OSI Approved :: GNU Lesser General Public License v2 (LGPLv2)"),
    ("LGPL-3.0", "License :: OSI Approved :: GNU Lesser General Public License v3 (LGPLv3)"),
    ("MIT", "License :: OSI Approved :: MIT License"),
    ("MPL-2.0", "License :: OSI Approved :: Mozilla Public License 2.0 (MPL 2.0)"),
    ("NCSA", "License :: OSI Approved :: University of Illinois/NCSA Open Source License"),
    ("OFL-1.1", "License :: OSI Approved :: SIL Open Font License 1.1 (OFL-1.1)"),
    ("PostgreSQL", "License :: OSI Approved :: PostgreSQL License"),
    ("UPL-1.0", "License :: OSI Approved :: Universal Permissive License (UPL)"),
    ("Zlib", "License :: OSI Approved :: zlib/libpng License"),
];

/// Looks up the trove classifier for an SPDX license identifier
pub fn license_classifier(spdx_id: &str) -> Option<&'static str> {
    LICENSE_CLASSIFIERS
        .iter()
        .find(|(id, _)| *id == spdx_id)
        .map(|(_, classifier)| *classifier)
}

/// Formats the classifier for a Python version, e.g. `3.9` or `3`
pub fn python_classifier(version: &Version) -> String {
    format!("{}{}", PYTHON_CLASSIFIER_PREFIX, version)
}

/// Expands a constraint into the Python version classifiers it implies.
///
/// Every minor version from the minimum up to `max_version` that is not
/// excluded contributes both its `major.minor` and bare `major` classifier;
/// `3 :: Only` is always appended. Without a minimum nothing is derived.
/// Enumeration stays within the major series of `max_version`.
pub fn derive_from_constraint(requires: &PythonRequires, max_version: &Version) -> Vec<String> {
    let Some(minimum) = requires.minimum.as_ref() else {
        return Vec::new();
    };

    let mut versions = BTreeSet::new();
    let mut candidate = minimum.truncate(2);
    while candidate <= *max_version && candidate.major() == max_version.major() {
        if !requires.is_excluded(&candidate) {
            versions.insert(candidate.truncate(1));
            versions.insert(candidate.clone());
        }
        candidate = candidate.next_minor();
    }

    let mut classifiers: Vec<String> = versions.iter().map(python_classifier).collect();
    classifiers.push(PYTHON_3_ONLY.to_string());
    classifiers
}

/// Drops Python version classifiers that do not apply to the constraint.
///
/// A `Programming Language :: Python :: X[.Y]` classifier survives when it is
/// at least Python 3, not excluded, and either a bare major version or (with
/// `include_version_classifiers`) within `[minimum, max_version]` compared at
/// its own depth. Without a minimum every classifier is kept.
pub fn trim(
    classifiers: Vec<String>,
    requires: Option<&PythonRequires>,
    max_version: &Version,
    include_version_classifiers: bool,
) -> Vec<String> {
    let Some(requires) = requires else {
        return classifiers;
    };
    let Some(minimum) = requires.minimum.as_ref() else {
        return classifiers;
    };

    classifiers
        .into_iter()
        .filter(|classifier| {
            let Some(version) = classifier_version(classifier) else {
                return true;
            };
            let size = version.len();
            version >= Version::new(vec![3])
                && !requires.is_excluded(&version)
                && (size == 1
                    || (include_version_classifiers
                        && minimum.truncate(size) <= version
                        && version <= max_version.truncate(size)))
        })
        .collect()
}

/// Parses the version out of `Programming Language :: Python :: X[.Y]`.
///
/// Classifiers with more or fewer ` :: ` parts (like `3 :: Only`) and
/// non-numeric trailers yield `None`.
fn classifier_version(classifier: &str) -> Option<Version> {
    if !classifier.starts_with(PYTHON_CLASSIFIER_PREFIX) {
        return None;
    }
    let parts: Vec<&str> = classifier.split(" :: ").collect();
    if parts.len() != 3 {
        return None;
    }
    parts[2]
        .trim()
        .split('.')
        .map(|p| p.parse::<u32>().ok())
        .collect::<Option<Vec<_>>>()
        .map(Version::new)
}

/// Implementation classifiers for tox environments (`py39` -> CPython, `pypy3` -> PyPy)
pub fn implementation_classifiers<S: AsRef<str>>(envs: &[S]) -> Vec<String> {
    let classifiers: BTreeSet<&str> = envs
        .iter()
        .filter_map(|env| match env.as_ref().trim_end_matches(|c: char| c.is_ascii_digit()) {
            "py" => Some(CPYTHON),
            "pypy" => Some(PYPY),
            _ => None,
        })
        .collect();
    classifiers.into_iter().map(String::from).collect()
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortPart {
    Text(String),
    // (significant digit count, digits) orders like the integer value
    Number(usize, String),
}

fn natural_key(s: &str) -> Vec<SortPart> {
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            let mut digits = String::from(c);
            while let Some(&next) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                digits.push(next);
                chars.next();
            }
            parts.push(SortPart::Text(std::mem::take(&mut text).to_lowercase()));
            let significant = digits.trim_start_matches('0').to_string();
            parts.push(SortPart::Number(significant.len(), significant));
        } else {
            text.push(c);
        }
    }
    parts.push(SortPart::Text(text.to_lowercase()));
    parts
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b)).then_with(|| a.cmp(b))
}

/// Deduplicates and sorts strings, comparing digit runs numerically and
/// other text case-insensitively
pub fn natural_sort<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let unique: BTreeSet<&str> = items.iter().map(|s| s.as_ref()).collect();
    let mut sorted: Vec<String> = unique.into_iter().map(String::from).collect();
    sorted.sort_by(|a, b| natural_cmp(a, b));
    sorted
}
