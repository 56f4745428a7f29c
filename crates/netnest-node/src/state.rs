//! Persistent node state management.
//!
//! Maintains a local JSON index of all created nodes, enabling
//! daemon-less inspection of the topology between invocations.

use std::path::Path;

use netnest_common::error::{NetnestError, Result};
use netnest_common::types::{NodeId, NodeKind};
use serde::{Deserialize, Serialize};

/// Persistent record of a node in the topology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node identifier.
    pub id: NodeId,
    /// Kind of node.
    pub kind: NodeKind,
    /// ISO-8601 timestamp of creation.
    pub created_at: String,
}

impl NodeRecord {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            kind,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Loads the node index from disk.
///
/// A missing index file means no nodes have been created yet and yields
/// an empty list.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_state(path: &Path) -> Result<Vec<NodeRecord>> {
    tracing::debug!(path = %path.display(), "loading node index");
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path).map_err(|e| NetnestError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Persists the node index to disk atomically.
///
/// Writes to a sibling temp file and renames it into place so readers
/// never observe a partially written index.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_state(path: &Path, records: &[NodeRecord]) -> Result<()> {
    tracing::debug!(path = %path.display(), count = records.len(), "saving node index");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| NetnestError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let json = serde_json::to_string_pretty(records)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json).map_err(|e| NetnestError::Io {
        path: tmp.clone(),
        source: e,
    })?;
    std::fs::rename(&tmp, path).map_err(|e| NetnestError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_state_missing_file_returns_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let records = load_state(&dir.path().join("state.json")).expect("load");
        assert!(records.is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        let records = vec![
            NodeRecord::new(NodeId::new("ThreadNode"), NodeKind::Namespace),
            NodeRecord::new(NodeId::new("localhost"), NodeKind::Local),
        ];
        save_state(&path, &records).expect("save");

        let loaded = load_state(&path).expect("load");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, NodeId::new("ThreadNode"));
        assert_eq!(loaded[1].kind, NodeKind::Local);
    }

    #[test]
    fn save_creates_parent_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("state.json");
        save_state(&path, &[]).expect("save");
        assert!(path.exists());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        save_state(&path, &[]).expect("save");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupt_index_is_a_serialization_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").expect("write");
        assert!(matches!(
            load_state(&path),
            Err(NetnestError::Serialization { .. })
        ));
    }
}
