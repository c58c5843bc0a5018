//! Filtree SDK
//!
//! High-level API for building, editing and evaluating filter trees.

pub mod builder;
pub mod config;
pub mod editor;
pub mod error;

// Re-export main types
pub use builder::{FilterBuilder, FilterEditorBuilder};
pub use config::FilterConfig;
pub use editor::{EditAction, FilterEditor, ValueInput};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use filtree_core::{ComparisonOperator, Condition, Value, ValueType};
pub use filtree_runtime::{
    BranchKind, ConditionTrace, ConstVariable, FieldVariable, FilterNode, GetterVariable,
    NodeKind, Variable, VariableSet, VariableSource,
};
