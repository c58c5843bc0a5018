//! Text field state for editing reference values

use filtree_core::{Condition, Value};

/// A value text field: the text being typed plus whether the last commit failed.
///
/// The condition keeps its previous value while the field is invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueInput {
    text: String,
    invalid: bool,
}

impl ValueInput {
    /// Field showing `value` (empty for null)
    pub fn from_value(value: &Value) -> Self {
        let text = match value {
            Value::Null => String::new(),
            Value::Array(_) => serde_json::to_string(value).unwrap_or_default(),
            other => other.as_text().unwrap_or_default(),
        };
        Self {
            text,
            invalid: false,
        }
    }

    /// Field showing the condition's reference value
    pub fn for_condition(condition: &Condition) -> Self {
        Self::from_value(&condition.value)
    }

    /// Field showing the condition's `Between` upper bound
    pub fn for_upper_bound(condition: &Condition) -> Self {
        Self::from_value(&condition.value2)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Parse the text into the condition's reference value; returns whether it took
    pub fn commit(&mut self, condition: &mut Condition) -> bool {
        self.invalid = condition.set_value_from_text(&self.text).is_err();
        !self.invalid
    }

    /// Like [`commit`](Self::commit) for the `Between` upper bound
    pub fn commit_upper_bound(&mut self, condition: &mut Condition) -> bool {
        self.invalid = condition.set_value2_from_text(&self.text).is_err();
        !self.invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filtree_core::{ComparisonOperator, ValueType};

    #[test]
    fn test_from_value() {
        assert_eq!(ValueInput::from_value(&Value::Null).text(), "");
        assert_eq!(ValueInput::from_value(&Value::Number(2.5)).text(), "2.5");
        assert_eq!(ValueInput::from_value(&Value::from("abc")).text(), "abc");
        assert_eq!(
            ValueInput::from_value(&Value::Array(vec![Value::Number(1.0), Value::from("a")])).text(),
            "[1.0,\"a\"]"
        );
    }

    #[test]
    fn test_commit_flags_invalid_text() {
        let mut condition =
            Condition::new(ComparisonOperator::Equal, 3).with_declared_type(ValueType::Number);
        let mut input = ValueInput::for_condition(&condition);
        assert_eq!(input.text(), "3");

        input.set_text("three");
        assert!(!input.commit(&mut condition));
        assert!(input.is_invalid());
        assert_eq!(condition.value, Value::Number(3.0));

        input.set_text("4");
        assert!(input.commit(&mut condition));
        assert!(!input.is_invalid());
        assert_eq!(condition.value, Value::Number(4.0));
    }

    #[test]
    fn test_commit_upper_bound() {
        let mut condition = Condition::between(1, 5).with_declared_type(ValueType::Number);
        let mut input = ValueInput::for_upper_bound(&condition);
        assert_eq!(input.text(), "5");

        input.set_text("10");
        assert!(input.commit_upper_bound(&mut condition));
        assert_eq!(condition.value2, Value::Number(10.0));
    }
}
