//! tox environment list

use crate::document::{read_document, ConfigDocument};
use crate::error::DocumentError;
use std::path::Path;
use tracing::debug;

/// Reads `[tox] envlist` from `tox.ini` in `dir`.
///
/// Entries are split on commas and cut at the first `-`, so `py39-django`
/// yields `py39`. A missing file yields an empty list.
pub fn tox_envlist(dir: &Path) -> Result<Vec<String>, DocumentError> {
    let path = dir.join("tox.ini");
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = read_document(&path)?;
    let doc = ConfigDocument::parse(&content).map_err(|e| e.with_path(&path))?;

    let envs: Vec<String> = doc
        .get_or_empty("tox", "envlist")
        .split(',')
        .map(|env| env.trim())
        .map(|env| env.split_once('-').map_or(env, |(name, _)| name))
        .filter(|env| !env.is_empty())
        .map(String::from)
        .collect();

    debug!("tox envlist in {}: {:?}", path.display(), envs);
    Ok(envs)
}
