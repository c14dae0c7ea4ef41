//! Bucket groupings used for display clustering.

use eyre::{Context, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// List a bucket's member node ids in lexicographic order.
///
/// Buckets are unrelated to edges: a member is just an entry name under the
/// bucket's directory. A missing directory is an empty bucket, not an error.
pub fn bucket_members(bucket_root: &Path, name: &str) -> Result<Vec<String>> {
    let dir = bucket_root.join(name);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("Bucket '{}' has no backing directory, treating as empty", name);
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read bucket directory {}", dir.display()));
        }
    };

    let mut members = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read bucket directory {}", dir.display()))?;
        if let Some(member) = entry.file_name().to_str() {
            members.push(member.to_string());
        }
    }
    members.sort();
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_missing_bucket_is_empty() {
        let root = TempDir::new().unwrap();
        let members = bucket_members(root.path(), "cur").unwrap();
        assert!(members.is_empty());
    }

    #[test]
    fn test_members_sorted() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("cur");
        fs::create_dir(&dir).unwrap();
        File::create(dir.join("zeta")).unwrap();
        File::create(dir.join("alpha")).unwrap();
        File::create(dir.join("mid")).unwrap();

        let members = bucket_members(root.path(), "cur").unwrap();
        assert_eq!(members, vec!["alpha", "mid", "zeta"]);
    }
}
