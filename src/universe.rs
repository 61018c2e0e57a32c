//! Item-universe supplier.
//!
//! The engine treats item identifiers as opaque strings; this module is the
//! thin collaborator that produces them from a newline-delimited list file
//! (or stdin, via `-`). Paths are normalized to absolute form so the same
//! file always yields the same identifier, and duplicates are dropped while
//! preserving first-seen order, since a stable list keeps uniform sampling
//! simple.

use anyhow::{Context, Result};
use path_absolutize::Absolutize;
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read item identifiers from `path`, or from stdin when `path` is `-`.
/// Blank lines and `#` comments are skipped.
pub fn load_universe(path: &Path) -> Result<Vec<String>> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read item list from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read item list {}", path.display()))?
    };

    Ok(parse_universe(&raw))
}

/// Parse a newline-delimited item list into normalized, deduplicated
/// identifiers.
#[must_use]
pub fn parse_universe(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let id = normalize_id(line);
        if seen.insert(id.clone()) {
            items.push(id);
        }
    }

    log::debug!("Loaded {} items into the universe.", items.len());
    items
}

/// Normalize a path-like identifier to absolute form. Identifiers that
/// cannot be absolutized (exotic platforms, empty prefixes) pass through
/// unchanged; equality stays exact either way.
#[must_use]
pub fn normalize_id(id: &str) -> String {
    Path::new(id)
        .absolutize()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| id.to_string())
}
