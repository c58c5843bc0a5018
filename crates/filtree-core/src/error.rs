//! Error types for Filtree Core

use crate::types::ValueType;
use thiserror::Error;

/// Core error type
///
/// Comparisons never fail: mismatched or uncoercible operands evaluate to
/// `false`. Errors only come from parsing editor input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid literal '{text}': expected {expected}")]
    InvalidLiteral { text: String, expected: ValueType },
}

pub type Result<T> = std::result::Result<T, CoreError>;
