//! Comparison operators for conditions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator comparing a runtime argument with a condition's reference value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOperator {
    /// Equal (==)
    #[default]
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessOrEqual,
    /// Text starts with
    StartsWith,
    /// Text ends with
    EndsWith,
    /// Text contains
    Contains,
    /// Inclusive range between the first and the second reference value
    Between,
}

impl ComparisonOperator {
    /// All operators in the order editors list them
    pub const ALL: [ComparisonOperator; 10] = [
        ComparisonOperator::Equal,
        ComparisonOperator::NotEqual,
        ComparisonOperator::GreaterThan,
        ComparisonOperator::GreaterOrEqual,
        ComparisonOperator::LessThan,
        ComparisonOperator::LessOrEqual,
        ComparisonOperator::StartsWith,
        ComparisonOperator::EndsWith,
        ComparisonOperator::Contains,
        ComparisonOperator::Between,
    ];

    /// Symbol used in expression descriptions
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "==",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterOrEqual => ">=",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessOrEqual => "<=",
            ComparisonOperator::StartsWith => "starts with",
            ComparisonOperator::EndsWith => "ends with",
            ComparisonOperator::Contains => "contains",
            ComparisonOperator::Between => "is between",
        }
    }

    /// Name shown in operator pickers
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonOperator::StartsWith => "Starts with",
            ComparisonOperator::EndsWith => "Ends with",
            ComparisonOperator::Contains => "Contains",
            ComparisonOperator::Between => "Between",
            other => other.symbol(),
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
