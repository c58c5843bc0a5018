//! Filtree Runtime - filter tree evaluation and editing
//!
//! This crate provides the filter expression tree built on top of
//! `filtree-core` conditions:
//! - Variable sources that resolve named values from a data sample
//! - `FilterNode`, a tree of AND/OR branches over leaf conditions
//! - Evaluation, human-readable description and evaluation traces
//! - Deferred structural edits that are safe to request mid-traversal

pub mod error;
pub mod tree;
pub mod variable;

// Re-export main types
pub use error::{Result, RuntimeError};
pub use tree::{BranchKind, ConditionTrace, FilterNode, NodeId, NodeKind, UNRESOLVED_LABEL};
pub use variable::{
    ConstVariable, FieldVariable, GetterVariable, Variable, VariableSet, VariableSource,
};

// Re-export commonly used types from core
pub use filtree_core::{ComparisonOperator, Condition, Value, ValueType};
