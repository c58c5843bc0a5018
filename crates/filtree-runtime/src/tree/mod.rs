//! Filter expression tree
//!
//! A [`FilterNode`] is either a leaf holding one [`Condition`] bound to a
//! variable, or an AND/OR branch over child nodes. Nodes are shared handles:
//! cloning a `FilterNode` clones the handle, not the node, and a handle keeps
//! pointing at the same node even when that node changes shape (a leaf turned
//! into a branch by [`FilterNode::insert_new_parent`], or a branch collapsed
//! into its last child).
//!
//! # Deferred edits
//!
//! Renderers traverse the tree once per frame and let the user restructure it
//! while doing so. Edits that would change a child list being iterated are
//! queued on the owning branch instead and applied by
//! [`FilterNode::drain_pending_edits`], which must be called on the root
//! before the next traversal:
//!
//! ```
//! use filtree_runtime::{Condition, FilterNode, ComparisonOperator};
//!
//! let root = FilterNode::and(vec![
//!     FilterNode::leaf("a", Condition::new(ComparisonOperator::Equal, 1)),
//!     FilterNode::leaf("b", Condition::new(ComparisonOperator::Equal, 2)),
//! ]);
//!
//! root.walk(&mut |node, _depth| {
//!     if node.variable_id().as_deref() == Some("a") {
//!         node.remove_and_collapse_if_orphaned();
//!     }
//! });
//! assert_eq!(root.child_count(), 2);
//!
//! root.drain_pending_edits().unwrap();
//! assert!(root.is_leaf());
//! assert_eq!(root.variable_id().as_deref(), Some("b"));
//! ```
//!
//! [`Condition`]: filtree_core::Condition

mod edits;
mod evaluation;
mod node;
mod trace;

pub use evaluation::UNRESOLVED_LABEL;
pub use node::{BranchKind, FilterNode, NodeId, NodeKind};
pub use trace::ConditionTrace;
