// src/core/header_sets.rs

use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::core::models::{HeaderCategory, HeaderScanError, HeaderSet, ReferenceSets, Result};

/// Parses the contents of a header list.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Everything else is lower-cased, so duplicates differing only in case
/// collapse into one entry.
pub fn parse_header_list(text: &str) -> HeaderSet {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Reads and parses a header list file.
pub fn load_header_set(path: &Path) -> Result<HeaderSet> {
    let text = std::fs::read_to_string(path).map_err(|source| HeaderScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse_header_list(&text);
    debug!(path = %path.display(), entries = set.len(), "Loaded header list.");
    Ok(set)
}

/// Loads all four reference lists, stopping at the first one that fails.
pub fn load_reference_sets(config: &ScanConfig) -> Result<ReferenceSets> {
    let mut sets = ReferenceSets::default();
    for category in HeaderCategory::iter() {
        let path = config.list_path(category);
        debug!(%category, path = %path.display(), "Loading reference list.");
        *sets.get_mut(category) = load_header_set(&path)?;
    }
    info!(
        missing = sets.missing.len(),
        insecure = sets.insecure.len(),
        security = sets.security.len(),
        fingerprint = sets.fingerprint.len(),
        "Reference header lists loaded."
    );
    Ok(sets)
}
