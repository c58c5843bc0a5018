//! Value type tags
//!
//! A `ValueType` names one non-null variant of [`Value`](super::Value). Variables
//! declare the type they produce and comparators remember the type their
//! reference value should be parsed into when edited.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag of a non-null value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Boolean type
    Bool,
    /// Number type (int or float)
    Number,
    /// String type
    String,
    /// Date and time without timezone
    Date,
    /// Array type
    Array,
}

impl ValueType {
    /// Lowercase name used in messages and configuration
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Date => "date",
            ValueType::Array => "array",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
