//! The value comparator evaluated at every tree leaf

use super::operator::ComparisonOperator;
use crate::error::Result;
use crate::types::{parse_literal, Value, ValueType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Compares the stored reference value with the argument of [`Condition::evaluate`]
/// using the selected operator, optionally negating the result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Condition {
    /// Comparison operator
    pub operator: ComparisonOperator,

    /// Reference value compared with the argument
    pub value: Value,

    /// Upper bound, only used by `Between`
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value2: Value,

    /// Negate the result of the comparison
    #[serde(default)]
    pub negate: bool,

    /// Type that edited text is parsed into; evaluation ignores it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<ValueType>,
}

impl Condition {
    /// Create a condition with the given operator and reference value
    pub fn new(operator: ComparisonOperator, value: impl Into<Value>) -> Self {
        Self {
            operator,
            value: value.into(),
            ..Self::default()
        }
    }

    /// Create an inclusive range condition `low <= arg <= high`
    pub fn between(low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Self {
            operator: ComparisonOperator::Between,
            value: low.into(),
            value2: high.into(),
            ..Self::default()
        }
    }

    /// Set negation
    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    /// Set the declared type used when editing
    pub fn with_declared_type(mut self, declared_type: ValueType) -> Self {
        self.declared_type = Some(declared_type);
        self
    }

    /// Check whether `arg` passes this condition.
    pub fn evaluate(&self, arg: &Value) -> bool {
        self.compare(arg) != self.negate
    }

    fn compare(&self, arg: &Value) -> bool {
        match (arg, &self.value) {
            // only a direct equality check between nulls succeeds
            (Value::Null, Value::Null) => return self.operator == ComparisonOperator::Equal,
            (Value::Null, _) | (_, Value::Null) => {
                log::trace!("Null comparison: {} {} {}, returning false", arg, self.operator, self.value);
                return false;
            }
            _ => {}
        }

        let Some(arg) = arg.coerce_like(&self.value) else {
            log::trace!(
                "Cannot coerce {} to {:?}, returning false",
                arg,
                self.value.value_type()
            );
            return false;
        };
        let arg: &Value = &arg;

        match self.operator {
            ComparisonOperator::Equal => *arg == self.value,
            ComparisonOperator::NotEqual => *arg != self.value,
            ComparisonOperator::GreaterThan => arg.compare(&self.value) == Some(Ordering::Greater),
            ComparisonOperator::GreaterOrEqual => matches!(
                arg.compare(&self.value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            ComparisonOperator::LessThan => arg.compare(&self.value) == Some(Ordering::Less),
            ComparisonOperator::LessOrEqual => matches!(
                arg.compare(&self.value),
                Some(Ordering::Less | Ordering::Equal)
            ),
            ComparisonOperator::StartsWith => self.compare_text(arg, |a, r| a.starts_with(r)),
            ComparisonOperator::EndsWith => self.compare_text(arg, |a, r| a.ends_with(r)),
            ComparisonOperator::Contains => self.compare_text(arg, |a, r| a.contains(r)),
            ComparisonOperator::Between => self.in_range(arg),
        }
    }

    fn compare_text(&self, arg: &Value, test: impl Fn(&str, &str) -> bool) -> bool {
        match (arg.as_text(), self.value.as_text()) {
            (Some(a), Some(r)) => test(&a, &r),
            _ => false,
        }
    }

    fn in_range(&self, arg: &Value) -> bool {
        let Some(high) = self.value2.coerce_like(&self.value) else {
            return false;
        };
        matches!(
            arg.compare(&self.value),
            Some(Ordering::Greater | Ordering::Equal)
        ) && matches!(
            arg.compare(&high),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// Human-readable form with `arg_label` standing for the argument,
    /// e.g. `x == "hello"` or `!(x > 3)`.
    pub fn describe(&self, arg_label: &str) -> String {
        let text = match self.operator {
            ComparisonOperator::Between => format!(
                "{} {} {} and {}",
                arg_label,
                self.operator.symbol(),
                self.value,
                self.value2
            ),
            op => format!("{} {} {}", arg_label, op.symbol(), self.value),
        };

        if self.negate {
            format!("!({})", text)
        } else {
            text
        }
    }

    /// Parse `text` into the declared type and store it as the reference value.
    ///
    /// On failure the previous value is kept. Without a declared type the
    /// text is stored as a string.
    pub fn set_value_from_text(&mut self, text: &str) -> Result<()> {
        self.value = self.parse_text(text)?;
        Ok(())
    }

    /// Same as [`set_value_from_text`](Self::set_value_from_text) for the `Between` upper bound
    pub fn set_value2_from_text(&mut self, text: &str) -> Result<()> {
        self.value2 = self.parse_text(text)?;
        Ok(())
    }

    fn parse_text(&self, text: &str) -> Result<Value> {
        parse_literal(text, self.declared_type.unwrap_or(ValueType::String))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("x"))
    }
}
