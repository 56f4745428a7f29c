//! Capture-file path resolution.
//!
//! The launcher redirects each traced process's streams to well-known
//! files under the run directory. The registry recomputes those paths
//! from `(tag, node)` alone: resolution is pure and never touches the
//! filesystem, so a path is returned whether or not the file exists yet.

use std::path::{Path, PathBuf};

use netnest_common::constants::{LOCAL_NODE, OUTPUT_EXTENSION, TRACE_EXTENSION};
use netnest_common::types::{NodeId, ProcessTag};

/// Resolves per-process capture-file paths within a run directory.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    run_dir: PathBuf,
}

impl NodeRegistry {
    /// Creates a registry rooted at the given run directory.
    #[must_use]
    pub fn new(run_dir: impl Into<PathBuf>) -> Self {
        Self {
            run_dir: run_dir.into(),
        }
    }

    /// Creates a registry rooted at the session default run directory.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::new(netnest_common::constants::run_dir().clone())
    }

    /// Returns the base run directory.
    #[must_use]
    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }

    /// Returns the directory holding capture files for a node.
    ///
    /// A `None` node resolves to the `localhost` scope.
    #[must_use]
    pub fn node_dir(&self, node: Option<&NodeId>) -> PathBuf {
        let scope = node.map_or(LOCAL_NODE, NodeId::as_str);
        self.run_dir.join(scope)
    }

    /// Returns the strace capture file for a process on a node.
    #[must_use]
    pub fn trace_file(&self, tag: &ProcessTag, node: Option<&NodeId>) -> PathBuf {
        self.node_dir(node)
            .join(format!("{}.{TRACE_EXTENSION}", tag.as_str()))
    }

    /// Returns the stdout/stderr capture file for a process on a node.
    #[must_use]
    pub fn output_file(&self, tag: &ProcessTag, node: Option<&NodeId>) -> PathBuf {
        self.node_dir(node)
            .join(format!("{}.{OUTPUT_EXTENSION}", tag.as_str()))
    }
}
