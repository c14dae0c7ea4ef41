//! Edge set loading and direction-aware adjacency.

use eyre::{Context, Result};
use log::debug;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Separator token inside an edge entry name: `u:v`.
pub const EDGE_SEPARATOR: char = ':';

/// Which end of an edge a query follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Outgoing,
    Incoming,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outgoing" => Ok(Direction::Outgoing),
            "incoming" => Ok(Direction::Incoming),
            other => Err(format!("unknown direction '{other}' (expected 'outgoing' or 'incoming')")),
        }
    }
}

/// A named collection of directed edges, loaded wholesale per invocation.
///
/// Edges are ordered pairs of node identifiers with set semantics: the backing
/// storage cannot hold two identically-named entries, so duplicates collapse.
/// The ordered set keeps neighbor sequences and rendered output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSet {
    edges: BTreeSet<(String, String)>,
}

impl EdgeSet {
    /// Load the named edge set from the edge-set root.
    ///
    /// A missing directory is an empty set, not an error: a fresh node simply
    /// has no relationships yet. Entry names that do not split into exactly
    /// two components on [`EDGE_SEPARATOR`] are skipped; directories may
    /// contain unrelated filesystem artifacts.
    pub fn load(edge_root: &Path, name: &str) -> Result<Self> {
        let dir = edge_root.join(name);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("Edge set '{}' has no backing directory, treating as empty", name);
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read edge set directory {}", dir.display()));
            }
        };

        let mut edges = BTreeSet::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to read edge set directory {}", dir.display()))?;
            let encoded = entry.file_name();
            let Some(encoded) = encoded.to_str() else {
                continue;
            };
            let mut parts = encoded.split(EDGE_SEPARATOR);
            if let (Some(u), Some(v), None) = (parts.next(), parts.next(), parts.next()) {
                edges.insert((u.to_string(), v.to_string()));
            }
        }

        debug!("Loaded {} edge(s) from set '{}'", edges.len(), name);
        Ok(Self { edges })
    }

    /// Neighbors of `node` along `direction`, in lexicographic order.
    ///
    /// Linear scan of the whole set. No index is built; a personal task graph
    /// stays small enough that O(E) per call is fine.
    pub fn neighbors<'a>(&'a self, node: &'a str, direction: Direction) -> impl Iterator<Item = &'a str> {
        self.edges.iter().filter_map(move |(u, v)| match direction {
            Direction::Outgoing if u == node => Some(v.as_str()),
            Direction::Incoming if v == node => Some(u.as_str()),
            _ => None,
        })
    }

    /// True iff `node` has at least one neighbor along `direction`.
    pub fn has_adjacent(&self, node: &str, direction: Direction) -> bool {
        self.neighbors(node, direction).next().is_some()
    }

    /// Iterate all edges as `(u, v)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().map(|(u, v)| (u.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl FromIterator<(String, String)> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}
