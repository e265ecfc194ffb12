//! `python_requires` resolution

use crate::domain::{format_constraint, parse_version, ConstraintParse, Version};
use regex::Regex;
use std::sync::LazyLock;

static TOX_ENV_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^py3(\d+)").unwrap());

const PYTHON_3_PREFIX: &str = "Programming Language :: Python :: 3";

/// Computes the `python_requires` value for a document.
///
/// An existing value of an unrecognized shape is returned unchanged.
/// Otherwise the minimum is lowered to the oldest Python 3 named by a tox
/// environment (`py37`) or a version classifier, then raised to at least
/// `min_py_version`. Exclusions are kept. Returns `None` when no minimum is
/// known at all.
pub fn resolve_python_requires(
    current: &str,
    classifiers: &[String],
    envs: &[String],
    min_py_version: &Version,
) -> Option<String> {
    let requires = match ConstraintParse::from_value(current) {
        ConstraintParse::Parsed(requires) => requires,
        ConstraintParse::Unrecognized(value) => return Some(value),
    };

    let mut minimum = requires.minimum.clone();
    let declared = envs
        .iter()
        .filter_map(|env| tox_env_version(env))
        .chain(classifiers.iter().filter_map(|c| classifier_version(c)));
    for version in declared {
        if minimum.as_ref().map_or(true, |m| version < m.truncate(2)) {
            minimum = Some(version);
        }
    }

    let minimum = minimum?;
    let minimum = if *min_py_version > minimum {
        min_py_version.clone()
    } else {
        minimum
    };
    Some(format_constraint(&minimum, &requires.excluded))
}

fn tox_env_version(env: &str) -> Option<Version> {
    let caps = TOX_ENV_RE.captures(env)?;
    parse_version(&format!("3.{}", &caps[1])).ok()
}

fn classifier_version(classifier: &str) -> Option<Version> {
    if !classifier.starts_with(PYTHON_3_PREFIX) {
        return None;
    }
    let last = classifier.split_whitespace().last()?;
    if !last.contains('.') {
        return None;
    }
    parse_version(last).ok()
}
