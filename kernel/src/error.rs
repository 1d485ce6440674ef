//! Typed kernel errors.
//!
//! Every variant is a caller contract violation. Graph construction never
//! ignores a bad edge silently.

use thiserror::Error;

/// Contract violation while building a [`crate::graph::ConstraintGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint is not a valid node index.
    #[error("node index {node} out of range for a graph of {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },
    /// An edge connects a node to itself.
    #[error("self-loop on node {node}")]
    SelfLoop { node: usize },
}
