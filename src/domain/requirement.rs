//! Dependency requirement normalization
//!
//! Rewrites requirement lines such as `req14 <=2, >= 1` into a canonical,
//! whitespace-free form (`req14>=1,<=2`) and sorts requirement blocks.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Longest leading run that is not a comparator symbol or whitespace
static BASE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^!=><\s@~]+").unwrap());
static CLAUSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(===|==|!=|~=|>=?|<=?|@)\s*([^,]+)").unwrap());

/// A single parsed requirement line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Package name with `_` replaced by `-`
    pub name: String,
    /// Comparator clauses in canonical order, e.g. `!=1`, `<=2`
    pub clauses: Vec<String>,
    /// Environment marker after `;`, trimmed
    pub marker: Option<String>,
}

impl Requirement {
    /// Parses a requirement line like `foo_bar >= 1, <2 ; python_version < "3.8"`
    pub fn parse(line: &str) -> Self {
        let (lib, marker) = match line.split_once(';') {
            Some((lib, marker)) => (lib, marker.trim()),
            None => (line, ""),
        };

        let mut clauses: Vec<String> = CLAUSE_RE
            .captures_iter(lib)
            .map(|caps| format!("{}{}", &caps[1], caps[2].trim_end()))
            .collect();
        // `<` bearing clauses go last; otherwise plain string order
        clauses.sort_by(|a, b| (a.contains('<'), a).cmp(&(b.contains('<'), b)));

        Self {
            name: base_name(lib),
            clauses,
            marker: (!marker.is_empty()).then(|| marker.to_string()),
        }
    }

    /// Returns true if the requirement carries an environment marker
    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.clauses.join(","))?;
        if let Some(ref marker) = self.marker {
            write!(f, ";{}", marker)?;
        }
        Ok(())
    }
}

/// Extracts the package name at the start of `lib`, `_` normalized to `-`
pub fn base_name(lib: &str) -> String {
    BASE_NAME_RE
        .find(lib)
        .map(|m| m.as_str().replace('_', "-"))
        .unwrap_or_default()
}

/// Normalizes a single requirement line
pub fn normalize(line: &str) -> String {
    Requirement::parse(line).to_string()
}

/// Normalizes every line of a requirement block and sorts the result.
///
/// Lines without a marker come first, then by base name, then by the full
/// normalized string. The base name is taken from the normalized line, so for
/// marker lines it runs into the marker text.
pub fn normalize_block<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut normalized: Vec<String> = lines.iter().map(|l| normalize(l.as_ref())).collect();
    normalized.sort_by_cached_key(|req| (req.contains(';'), base_name(req), req.clone()));
    normalized
}
