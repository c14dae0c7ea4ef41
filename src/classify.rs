//! Topological classification of nodes.

use crate::edges::{Direction, EdgeSet};

/// Edge set consulted by the dependency classifications.
pub const DEPENDENCIES: &str = "dependencies";

/// Edge set consulted by the context classifications.
pub const CONTEXTS: &str = "contexts";

/// The closed set of classification queries.
///
/// Each variant names the edge set it consults and the adjacency predicate it
/// applies. An isolated node (no dependency edges at all) is both a root and
/// a leaf: isolation is the degenerate case of having no dependents and no
/// dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No incoming dependency edge.
    Root,
    /// No outgoing dependency edge.
    Leaf,
    /// Both incoming and outgoing dependency edges.
    Project,
    /// No incoming context edge.
    Unassigned,
    /// At least one outgoing context edge.
    Context,
}

impl Classification {
    /// Name of the edge set this classification consults.
    pub fn edge_set(&self) -> &'static str {
        match self {
            Classification::Root | Classification::Leaf | Classification::Project => DEPENDENCIES,
            Classification::Unassigned | Classification::Context => CONTEXTS,
        }
    }

    /// Apply the predicate to one node against a loaded edge set.
    pub fn matches(&self, node: &str, edges: &EdgeSet) -> bool {
        match self {
            Classification::Root => !edges.has_adjacent(node, Direction::Incoming),
            Classification::Leaf => !edges.has_adjacent(node, Direction::Outgoing),
            Classification::Project => {
                edges.has_adjacent(node, Direction::Incoming)
                    && edges.has_adjacent(node, Direction::Outgoing)
            }
            Classification::Unassigned => !edges.has_adjacent(node, Direction::Incoming),
            Classification::Context => edges.has_adjacent(node, Direction::Outgoing),
        }
    }
}
