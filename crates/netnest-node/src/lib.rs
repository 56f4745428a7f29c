//! # netnest-node
//!
//! The node side of the harness: a persistent index of created nodes and
//! the deterministic mapping from `(tag, node)` to the on-disk capture
//! files written for processes launched inside those nodes.

pub mod registry;
pub mod state;

pub use registry::NodeRegistry;
