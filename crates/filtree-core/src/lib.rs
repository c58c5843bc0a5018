//! Filtree Core - value and condition types for the Filtree filter engine
//!
//! This crate provides the leaf-level building blocks shared by the rest of
//! the workspace:
//! - Value types for runtime data and the coercion rules between them
//! - Comparison operators
//! - The value comparator (`Condition`) evaluated at every tree leaf
//! - Error types

pub mod condition;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use condition::{ComparisonOperator, Condition};
pub use error::{CoreError, Result};
pub use types::{Value, ValueType};
