//! Storage-root configuration.
//!
//! Three directory roots locate the external flat-file collaborators: the
//! edge-set root, the node-attribute root, and the bucket root. Each resolves
//! from an explicit override (CLI flag) falling back to an environment
//! variable; a command that needs an unresolved root fails with a hint.

use eyre::{Result, eyre};
use std::env;
use std::path::{Path, PathBuf};

pub const EDGE_DIR_ENV: &str = "LATTICE_EDGE_DIR";
pub const NODE_DIR_ENV: &str = "LATTICE_NODE_DIR";
pub const BUCKET_DIR_ENV: &str = "LATTICE_BUCKET_DIR";

/// Resolved storage roots for one invocation.
#[derive(Debug, Clone, Default)]
pub struct Roots {
    edge_dir: Option<PathBuf>,
    node_dir: Option<PathBuf>,
    bucket_dir: Option<PathBuf>,
}

impl Roots {
    /// Resolve roots from explicit overrides, falling back to the environment.
    pub fn resolve(
        edge_dir: Option<PathBuf>,
        node_dir: Option<PathBuf>,
        bucket_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            edge_dir: edge_dir.or_else(|| env_dir(EDGE_DIR_ENV)),
            node_dir: node_dir.or_else(|| env_dir(NODE_DIR_ENV)),
            bucket_dir: bucket_dir.or_else(|| env_dir(BUCKET_DIR_ENV)),
        }
    }

    /// Edge-set root, required by adjacency, traversal, and classification.
    pub fn edge_dir(&self) -> Result<&Path> {
        self.edge_dir
            .as_deref()
            .ok_or_else(|| eyre!("No edge-set root configured (set {EDGE_DIR_ENV} or pass --edge-dir)"))
    }

    /// Node-attribute root, required by state filters and rendering.
    pub fn node_dir(&self) -> Result<&Path> {
        self.node_dir
            .as_deref()
            .ok_or_else(|| eyre!("No node-attribute root configured (set {NODE_DIR_ENV} or pass --node-dir)"))
    }

    /// Bucket root, required by bucket listing and rendering.
    pub fn bucket_dir(&self) -> Result<&Path> {
        self.bucket_dir
            .as_deref()
            .ok_or_else(|| eyre!("No bucket root configured (set {BUCKET_DIR_ENV} or pass --bucket-dir)"))
    }
}

fn env_dir(var: &str) -> Option<PathBuf> {
    env::var_os(var).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_override_wins() {
        // Only this test touches the lattice env vars, so the unsafe set is
        // not racing any other reader.
        unsafe {
            env::set_var(EDGE_DIR_ENV, "/from-env/edges");
        }

        let roots = Roots::resolve(Some(PathBuf::from("/explicit/edges")), None, None);
        assert_eq!(roots.edge_dir().unwrap(), Path::new("/explicit/edges"));

        let roots = Roots::resolve(None, None, None);
        assert_eq!(roots.edge_dir().unwrap(), Path::new("/from-env/edges"));

        unsafe {
            env::remove_var(EDGE_DIR_ENV);
        }
    }

    #[test]
    fn test_unresolved_root_is_an_error() {
        let roots = Roots::resolve(Some(PathBuf::from("/edges")), None, None);
        assert!(roots.edge_dir().is_ok());
        assert!(roots.node_dir().is_err());
        assert!(roots.bucket_dir().is_err());
    }
}
