//! Runtime error types

use crate::tree::NodeId;
use filtree_core::CoreError;
use thiserror::Error;

/// Runtime error
///
/// Evaluation never produces errors. These cover editing a tree in a way its
/// current state cannot support.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A node needed for mutation is still borrowed by a traversal
    #[error("Node {node} is borrowed by an in-progress traversal")]
    TreeBusy { node: NodeId },

    /// A leaf-only operation was applied to a branch
    #[error("Node {node} is not a leaf")]
    NotALeaf { node: NodeId },

    /// Invalid editor input
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
