//! Domain primitive types used across the netnest workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a virtual network namespace ("node") in the test topology.
///
/// Call sites that accept an optional node take `Option<&NodeId>`; the
/// absent case resolves to the `localhost` scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a new node ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-assigned name identifying a process launched on a node.
///
/// A tag is required wherever a capture file is resolved; an empty tag is
/// a precondition violation and is rejected before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessTag(String);

impl ProcessTag {
    /// Creates a tag from a string value.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the input is empty or
    /// whitespace-only.
    pub fn new(tag: impl Into<String>) -> crate::error::Result<Self> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(crate::error::NetnestError::Config {
                message: "missing process tag".to_string(),
            });
        }
        Ok(Self(tag))
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of a node in the topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// The host itself, outside any created namespace.
    Local,
    /// An isolated virtual network namespace.
    Namespace,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Namespace => write!(f, "namespace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_tag_accepts_normal_names() {
        let tag = ProcessTag::new("ContinuousPing").expect("valid tag");
        assert_eq!(tag.as_str(), "ContinuousPing");
    }

    #[test]
    fn process_tag_rejects_empty() {
        assert!(ProcessTag::new("").is_err());
    }

    #[test]
    fn process_tag_rejects_whitespace_only() {
        assert!(ProcessTag::new("   ").is_err());
    }

    #[test]
    fn node_kind_displays_lowercase() {
        assert_eq!(NodeKind::Namespace.to_string(), "namespace");
    }
}
