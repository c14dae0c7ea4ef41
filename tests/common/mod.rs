//! Shared test infrastructure for lattice integration tests.
//!
//! Provides TestEnv helper that materializes the three storage roots
//! (edge sets, node attributes, buckets) inside one temp directory.

#![allow(dead_code)]

use lattice::{EdgeSet, NodeStore};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with automatic cleanup.
pub struct TestEnv {
    pub temp_dir: TempDir,
}

impl TestEnv {
    /// Create a new environment with empty storage roots.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for root in ["edges", "nodes", "buckets"] {
            fs::create_dir_all(temp_dir.path().join(root)).expect("Failed to create storage root");
        }
        Self { temp_dir }
    }

    pub fn edge_dir(&self) -> PathBuf {
        self.temp_dir.path().join("edges")
    }

    pub fn node_dir(&self) -> PathBuf {
        self.temp_dir.path().join("nodes")
    }

    pub fn bucket_dir(&self) -> PathBuf {
        self.temp_dir.path().join("buckets")
    }

    /// Encode an edge as an entry name under the named edge set.
    pub fn add_edge(&self, edge_set: &str, from: &str, to: &str) {
        self.add_edge_entry(edge_set, &format!("{from}:{to}"));
    }

    /// Write a raw (possibly malformed) entry under the named edge set.
    pub fn add_edge_entry(&self, edge_set: &str, entry: &str) {
        let dir = self.edge_dir().join(edge_set);
        fs::create_dir_all(&dir).expect("Failed to create edge set directory");
        fs::write(dir.join(entry), b"").expect("Failed to write edge entry");
    }

    /// Create a node with contents and state attributes.
    pub fn add_node(&self, id: &str, contents: &str, state: &str) {
        let dir = self.node_dir().join(id);
        fs::create_dir_all(&dir).expect("Failed to create node directory");
        fs::write(dir.join("contents"), contents).expect("Failed to write contents");
        fs::write(dir.join("state"), state).expect("Failed to write state");
    }

    /// Create a node directory with no attribute files.
    pub fn add_bare_node(&self, id: &str) {
        fs::create_dir_all(self.node_dir().join(id)).expect("Failed to create node directory");
    }

    /// Add a member id to a bucket.
    pub fn add_bucket_member(&self, bucket: &str, id: &str) {
        let dir = self.bucket_dir().join(bucket);
        fs::create_dir_all(&dir).expect("Failed to create bucket directory");
        fs::write(dir.join(id), b"").expect("Failed to write bucket member");
    }

    /// Load an edge set from this environment's edge root.
    pub fn load_edges(&self, name: &str) -> EdgeSet {
        EdgeSet::load(&self.edge_dir(), name).expect("Failed to load edge set")
    }

    /// Fresh node store over this environment's node root.
    pub fn node_store(&self) -> NodeStore {
        NodeStore::new(self.node_dir())
    }

    /// Write an id-list file somewhere under the temp dir and return its path.
    pub fn write_id_file(&self, name: &str, ids: &[&str]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, ids.join("\n")).expect("Failed to write id list");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
