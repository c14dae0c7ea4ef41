//! Node-id stream helpers.

use eyre::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Iterate newline-delimited node ids: trimmed, blank lines skipped.
pub fn read_ids<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => {
            let id = line.trim();
            if id.is_empty() {
                None
            } else {
                Some(Ok(id.to_string()))
            }
        }
        Err(err) => Some(Err(err)),
    })
}

/// Read an id-list file into an ordered set.
///
/// Unlike edge sets and buckets, explicit file arguments are expected to
/// exist; an unreadable file is an error.
pub fn read_id_file(path: &Path) -> Result<BTreeSet<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read id list {}", path.display()))?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect())
}

/// Ordered set union of two id-list files.
pub fn union(lhs: &Path, rhs: &Path) -> Result<BTreeSet<String>> {
    let mut ids = read_id_file(lhs)?;
    ids.extend(read_id_file(rhs)?);
    Ok(ids)
}
