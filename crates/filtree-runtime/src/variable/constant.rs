//! Variables holding a fixed value

use super::Variable;
use filtree_core::{Value, ValueType};

/// Always returns the value stored inside, ignoring the sample.
///
/// Useful for tests and for parameters that do not come from the data.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstVariable {
    pub id: String,
    pub display_name: String,
    pub value_type: ValueType,
    pub value: Value,
}

impl ConstVariable {
    /// Create a constant variable; the type is taken from the value (string for null)
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            id: id.into(),
            display_name: display_name.into(),
            value_type: value.value_type().unwrap_or(ValueType::String),
            value,
        }
    }

    /// Override the declared type
    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }
}

impl<S: ?Sized> Variable<S> for ConstVariable {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn value(&self, _sample: &S) -> Option<Value> {
        match self.value {
            Value::Null => None,
            ref value => Some(value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_variable_ignores_sample() {
        let var = ConstVariable::new("limit", "Limit", 10);
        assert_eq!(Variable::<str>::value(&var, "anything"), Some(Value::Number(10.0)));
        assert_eq!(Variable::<()>::value_type(&var), ValueType::Number);
    }

    #[test]
    fn test_const_variable_null_is_absent() {
        let var = ConstVariable::new("n", "Nothing", Value::Null).with_value_type(ValueType::Date);
        assert_eq!(Variable::<()>::value(&var, &()), None);
        assert_eq!(Variable::<()>::value_type(&var), ValueType::Date);
    }
}
