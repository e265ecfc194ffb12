//! INI reader compatible with Python's configparser (raw, strict mode)
//!
//! Rules:
//! - `#` and `;` lines are comments
//! - `[name]` opens a section; content before the first section is an error
//! - `key = value` or `key: value`, split at the first delimiter
//! - Lines indented deeper than their key line continue the value
//! - Duplicate sections and duplicate keys are errors

use super::Section;
use crate::error::DocumentError;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

const COMMENT_PREFIXES: [&str; 2] = ["#", ";"];

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[(.+)\]").unwrap());
static OPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*([=:])\s*(.*)$").unwrap());

/// Parses INI text into ordered sections
pub(crate) fn parse_sections(text: &str) -> Result<IndexMap<String, Section>, DocumentError> {
    // Values are collected line by line and joined once the whole text is read
    let mut raw: IndexMap<String, IndexMap<String, Vec<String>>> = IndexMap::new();
    let mut section: Option<String> = None;
    let mut option: Option<String> = None;
    let mut indent_level = 0usize;

    for (index, line) in text.lines().enumerate() {
        let lineno = index + 1;
        let stripped = line.trim();
        let is_comment = COMMENT_PREFIXES.iter().any(|p| stripped.starts_with(p));

        if stripped.is_empty() || is_comment {
            // Blank lines belong to the value being read; comments vanish
            if !is_comment {
                if let Some(lines) = current_value(&mut raw, &section, &option) {
                    lines.push(String::new());
                }
            }
            continue;
        }

        let cur_indent = line.len() - line.trim_start().len();
        if cur_indent > indent_level {
            if let Some(lines) = current_value(&mut raw, &section, &option) {
                lines.push(stripped.to_string());
                continue;
            }
        }

        indent_level = cur_indent;

        if let Some(caps) = SECTION_RE.captures(stripped) {
            let name = caps[1].to_string();
            if raw.contains_key(&name) {
                return Err(DocumentError::parse(
                    "",
                    lineno,
                    format!("duplicate section [{}]", name),
                ));
            }
            raw.insert(name.clone(), IndexMap::new());
            section = Some(name);
            option = None;
            continue;
        }

        let Some(section_name) = section.as_deref() else {
            return Err(DocumentError::parse(
                "",
                lineno,
                "file contains no section headers",
            ));
        };

        let Some(caps) = OPTION_RE.captures(stripped) else {
            return Err(DocumentError::parse(
                "",
                lineno,
                format!("expected 'key = value', got '{}'", stripped),
            ));
        };

        let key = caps[1].trim_end().to_string();
        if key.is_empty() {
            return Err(DocumentError::parse("", lineno, "option without a name"));
        }

        let entries = raw.entry(section_name.to_string()).or_default();
        if entries.contains_key(&key) {
            return Err(DocumentError::parse(
                "",
                lineno,
                format!("duplicate option '{}' in section [{}]", key, section_name),
            ));
        }
        entries.insert(key.clone(), vec![caps[3].trim().to_string()]);
        option = Some(key);
    }

    Ok(raw
        .into_iter()
        .map(|(name, entries)| {
            let entries = entries
                .into_iter()
                .map(|(key, lines)| (key, lines.join("\n").trim_end().to_string()))
                .collect();
            (name, entries)
        })
        .collect())
}

fn current_value<'a>(
    raw: &'a mut IndexMap<String, IndexMap<String, Vec<String>>>,
    section: &Option<String>,
    option: &Option<String>,
) -> Option<&'a mut Vec<String>> {
    let (section, option) = (section.as_ref()?, option.as_ref()?);
    raw.get_mut(section)?.get_mut(option)
}
