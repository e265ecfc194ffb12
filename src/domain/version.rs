//! Version tuples and `python_requires` constraints
//!
//! Handles:
//! - Versions: `3.9`, `3.6.1`, `3.*` (wildcard segments are dropped)
//! - Constraints: `>=3.6, !=3.7.*` (a minimum plus excluded versions)
//! - Anything else (`~=3.6`, `>=3`) is reported as unrecognized and left alone

use crate::error::VersionError;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// An ordered tuple of non-negative integers, e.g. `(3, 9)` or `(3, 6, 1)`.
///
/// Ordering is lexicographic by position; a prefix sorts before its extensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(Vec<u32>);

impl Version {
    /// Creates a version from its numeric parts
    pub fn new(parts: Vec<u32>) -> Self {
        Self(parts)
    }

    /// Creates a `major.minor` version
    pub fn major_minor(major: u32, minor: u32) -> Self {
        Self(vec![major, minor])
    }

    /// Returns the numeric parts
    pub fn parts(&self) -> &[u32] {
        &self.0
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First component, or 0 for an empty version
    pub fn major(&self) -> u32 {
        self.0.first().copied().unwrap_or(0)
    }

    /// Projection onto the first `n` parts
    pub fn truncate(&self, n: usize) -> Version {
        Version(self.0.iter().take(n).copied().collect())
    }

    /// The next minor release in the same major series (`3.9` -> `3.10`)
    pub fn next_minor(&self) -> Version {
        let minor = self.0.get(1).copied().unwrap_or(0);
        Version(vec![self.major(), minor.saturating_add(1)])
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Splits on `.`, drops `*` segments and requires at least two numeric parts
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').filter(|part| *part != "*").collect();
        if parts.len() < 2 {
            return Err(VersionError::unknown(s));
        }

        parts
            .iter()
            .map(|part| part.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map(Version)
            .map_err(|_| VersionError::unknown(s))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Parses a version string such as `3.9` or `3.6.*`
pub fn parse_version(s: &str) -> Result<Version, VersionError> {
    s.parse()
}

/// A `python_requires` value: an optional minimum and a set of excluded versions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PythonRequires {
    /// Lowest supported version (`>=`)
    pub minimum: Option<Version>,
    /// Versions excluded with `!=`
    pub excluded: BTreeSet<Version>,
}

impl PythonRequires {
    /// Creates a constraint with the given minimum and exclusions
    pub fn new(minimum: Option<Version>, excluded: impl IntoIterator<Item = Version>) -> Self {
        Self {
            minimum,
            excluded: excluded.into_iter().collect(),
        }
    }

    /// Returns true if `version` is listed as excluded
    pub fn is_excluded(&self, version: &Version) -> bool {
        self.excluded.contains(version)
    }
}

/// Parses a comma separated constraint made only of `>=` and `!=` clauses.
///
/// A blank string yields an empty constraint.
pub fn parse_constraint(s: &str) -> Result<PythonRequires, VersionError> {
    let mut requires = PythonRequires::default();
    if s.trim().is_empty() {
        return Ok(requires);
    }

    for clause in s.split(',') {
        let clause = clause.trim();
        if let Some(version) = clause.strip_prefix(">=") {
            requires.minimum = Some(version.parse()?);
        } else if let Some(version) = clause.strip_prefix("!=") {
            requires.excluded.insert(version.parse()?);
        } else {
            return Err(VersionError::unknown(s));
        }
    }

    Ok(requires)
}

/// Formats `>=minimum` followed by `, !=v.*` for each excluded version, ascending
pub fn format_constraint(minimum: &Version, excluded: &BTreeSet<Version>) -> String {
    std::iter::once(format!(">={}", minimum))
        .chain(excluded.iter().map(|v| format!("!={}.*", v)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of reading a `python_requires` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintParse {
    /// The value was understood
    Parsed(PythonRequires),
    /// The value has a shape we do not rewrite; it is kept verbatim
    Unrecognized(String),
}

impl ConstraintParse {
    /// Classifies a raw `python_requires` value
    pub fn from_value(s: &str) -> Self {
        match parse_constraint(s) {
            Ok(requires) => ConstraintParse::Parsed(requires),
            Err(_) => ConstraintParse::Unrecognized(s.to_string()),
        }
    }

    /// The parsed constraint, if any
    pub fn requires(&self) -> Option<&PythonRequires> {
        match self {
            ConstraintParse::Parsed(requires) => Some(requires),
            ConstraintParse::Unrecognized(_) => None,
        }
    }

    /// The parsed minimum, if the value was understood and has one
    pub fn minimum(&self) -> Option<&Version> {
        self.requires().and_then(|r| r.minimum.as_ref())
    }
}
