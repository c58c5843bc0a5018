//! Field Lookup Variables
//!
//! Variables reading a dot-notation path out of a JSON document sample.

use super::Variable;
use filtree_core::{Value, ValueType};
use serde_json::Value as JsonValue;

/// Reads the value at a dot-separated path (e.g. `user.profile.age`) of a JSON sample.
///
/// A missing key or a non-object along the way yields an absent value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldVariable {
    id: String,
    display_name: String,
    value_type: ValueType,
    path: Vec<String>,
}

impl FieldVariable {
    /// Create a field variable; the id doubles as the path
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, value_type: ValueType) -> Self {
        let id = id.into();
        let path = split_path(&id);
        Self {
            id,
            display_name: display_name.into(),
            value_type,
            path,
        }
    }

    /// Read from a different path than the id
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = split_path(path);
        self
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }
}

impl Variable<JsonValue> for FieldVariable {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn value(&self, sample: &JsonValue) -> Option<Value> {
        match get_nested_value(sample, &self.path) {
            Some(JsonValue::Null) | None => None,
            Some(found) => Some(Value::from(found.clone())),
        }
    }
}

fn split_path(path: &str) -> Vec<String> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Get nested value from a JSON document following a path
///
/// Returns `None` if any part of the path is not found or an intermediate
/// value is not an object.
fn get_nested_value<'a>(data: &'a JsonValue, path: &[String]) -> Option<&'a JsonValue> {
    let (key, remaining) = path.split_first()?;

    let value = match data {
        JsonValue::Object(map) => match map.get(key) {
            Some(v) => v,
            None => {
                tracing::trace!("Field not found: {}", key);
                return None;
            }
        },
        _ => {
            tracing::trace!("Cannot access field {} on non-object", key);
            return None;
        }
    };

    if remaining.is_empty() {
        Some(value)
    } else {
        get_nested_value(value, remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_data() -> JsonValue {
        json!({
            "name": "Alice",
            "user": {
                "id": 123,
                "email": "alice@example.com",
                "profile": { "age": 30 }
            },
            "tags": ["a", "b"],
            "deleted_at": null
        })
    }

    fn path(p: &str) -> Vec<String> {
        split_path(p)
    }

    #[test]
    fn test_get_nested_value_simple() {
        let data = create_test_data();
        assert_eq!(get_nested_value(&data, &path("name")), Some(&json!("Alice")));
    }

    #[test]
    fn test_get_nested_value_deep_nested() {
        let data = create_test_data();
        assert_eq!(
            get_nested_value(&data, &path("user.profile.age")),
            Some(&json!(30))
        );
    }

    #[test]
    fn test_get_nested_value_not_found() {
        let data = create_test_data();
        assert_eq!(get_nested_value(&data, &path("nonexistent")), None);
        assert_eq!(get_nested_value(&data, &path("user.nonexistent")), None);
        assert_eq!(get_nested_value(&data, &path("name.first")), None);
        assert_eq!(get_nested_value(&data, &[]), None);
    }

    #[test]
    fn test_field_variable_value() {
        let data = create_test_data();

        let age = FieldVariable::new("user.profile.age", "Age", ValueType::Number);
        assert_eq!(age.value(&data), Some(Value::Number(30.0)));

        let tags = FieldVariable::new("tags", "Tags", ValueType::Array);
        assert_eq!(
            tags.value(&data),
            Some(Value::Array(vec![Value::from("a"), Value::from("b")]))
        );

        let deleted = FieldVariable::new("deleted_at", "Deleted", ValueType::Date);
        assert_eq!(deleted.value(&data), None);
    }

    #[test]
    fn test_field_variable_custom_path() {
        let data = create_test_data();
        let email = FieldVariable::new("email", "E-mail", ValueType::String).with_path("user.email");
        assert_eq!(email.path(), ["user".to_string(), "email".to_string()]);
        assert_eq!(email.value(&data), Some(Value::from("alice@example.com")));
    }
}
