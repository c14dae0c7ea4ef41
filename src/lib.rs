//! Lattice: batch graph queries over a filesystem-backed task tracker.
//!
//! Tasks live as directories under a node-attribute root; relationships are
//! encoded as specially-named entries under an edge-set root. Lattice loads
//! those edge sets, walks them with cycle detection, classifies nodes
//! topologically, and renders Graphviz descriptions — one full scan per
//! invocation, no caches between runs.
//!
//! # Example
//!
//! ```no_run
//! use lattice::{Direction, EdgeSet, reachable};
//! use std::collections::BTreeSet;
//! use std::path::Path;
//!
//! let edges = EdgeSet::load(Path::new("/data/state"), "dependencies").unwrap();
//!
//! // Everything the inbox task transitively depends on
//! let mut seen = BTreeSet::new();
//! for node in reachable("inbox-42", &edges, Direction::Outgoing, &mut seen).unwrap() {
//!     println!("{node}");
//! }
//! ```

mod bucket;
mod classify;
mod config;
mod dot;
mod edges;
mod ids;
mod node;
mod traverse;

// Re-export public API
pub use bucket::bucket_members;
pub use classify::{CONTEXTS, Classification, DEPENDENCIES};
pub use config::{BUCKET_DIR_ENV, EDGE_DIR_ENV, NODE_DIR_ENV, Roots};
pub use dot::{CLUSTER_BUCKETS, GraphRenderer};
pub use edges::{Direction, EDGE_SEPARATOR, EdgeSet};
pub use ids::{read_id_file, read_ids, union};
pub use node::{Datum, NodeStore, PLACEHOLDER, State};
pub use traverse::{CycleError, expand, reachable};
