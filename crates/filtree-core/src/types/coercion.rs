//! Coercion between value types
//!
//! Comparisons coerce the runtime argument into the reference value's type on a
//! best-effort basis. Coercion is total: it returns `None` instead of failing.
//! Editor input goes through [`parse_literal`], which does report failures.

use super::value::{Value, DATE_FORMAT};
use super::value_type::ValueType;
use crate::error::{CoreError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::borrow::Cow;

impl Value {
    /// Convert this value into the given type, `None` when no conversion exists.
    ///
    /// Null never converts. A value already of the target type is cloned.
    pub fn coerce_to(&self, target: ValueType) -> Option<Value> {
        if self.value_type() == Some(target) {
            return Some(self.clone());
        }

        match (self, target) {
            (Value::Null, _) => None,
            (_, ValueType::String) => self.as_text().map(Value::String),
            (Value::String(s), ValueType::Number) => parse_number(s).map(Value::Number),
            (Value::Bool(b), ValueType::Number) => Some(Value::Number(if *b { 1.0 } else { 0.0 })),
            (Value::String(s), ValueType::Bool) => parse_bool(s).map(Value::Bool),
            (Value::Number(n), ValueType::Bool) => Some(Value::Bool(*n != 0.0)),
            (Value::String(s), ValueType::Date) => parse_date(s).map(Value::Date),
            _ => None,
        }
    }

    /// Coerce this value into the type of `reference`, borrowing when the types already match.
    pub fn coerce_like(&self, reference: &Value) -> Option<Cow<'_, Value>> {
        let target = reference.value_type()?;
        if self.value_type() == Some(target) {
            return Some(Cow::Borrowed(self));
        }
        self.coerce_to(target).map(Cow::Owned)
    }

    /// Plain text form of a scalar value (unquoted), `None` for null and arrays.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::Null | Value::Array(_) => None,
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Date(d) => Some(d.format(DATE_FORMAT).to_string()),
            Value::String(s) => Some(s.clone()),
        }
    }
}

/// Parse user-entered text into a value of the given type.
///
/// Strings are taken verbatim, arrays are read as a JSON array.
pub fn parse_literal(text: &str, expected: ValueType) -> Result<Value> {
    let parsed = match expected {
        ValueType::String => Some(Value::String(text.to_string())),
        ValueType::Number => parse_number(text).map(Value::Number),
        ValueType::Bool => parse_bool(text).map(Value::Bool),
        ValueType::Date => parse_date(text).map(Value::Date),
        ValueType::Array => match serde_json::from_str::<serde_json::Value>(text) {
            Ok(json @ serde_json::Value::Array(_)) => Some(Value::from(json)),
            _ => None,
        },
    };

    parsed.ok_or_else(|| CoreError::InvalidLiteral {
        text: text.to_string(),
        expected,
    })
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_coerce_same_type_is_identity() {
        let val = Value::from("abc");
        assert_eq!(val.coerce_to(ValueType::String), Some(val.clone()));
    }

    #[test]
    fn test_coerce_null_never_converts() {
        assert_eq!(Value::Null.coerce_to(ValueType::String), None);
        assert_eq!(Value::Null.coerce_to(ValueType::Number), None);
    }

    #[test]
    fn test_coerce_to_string() {
        assert_eq!(Value::Number(1.0).coerce_to(ValueType::String), Some(Value::from("1")));
        assert_eq!(Value::Bool(true).coerce_to(ValueType::String), Some(Value::from("true")));
        assert_eq!(
            Value::Date(midnight(2024, 3, 1)).coerce_to(ValueType::String),
            Some(Value::from("2024-03-01T00:00:00"))
        );
        assert_eq!(Value::Array(vec![]).coerce_to(ValueType::String), None);
    }

    #[test]
    fn test_coerce_to_number() {
        assert_eq!(Value::from(" 42 ").coerce_to(ValueType::Number), Some(Value::Number(42.0)));
        assert_eq!(Value::from("4.5e1").coerce_to(ValueType::Number), Some(Value::Number(45.0)));
        assert_eq!(Value::Bool(true).coerce_to(ValueType::Number), Some(Value::Number(1.0)));
        assert_eq!(Value::from("forty").coerce_to(ValueType::Number), None);
        assert_eq!(Value::from("NaN").coerce_to(ValueType::Number), None);
    }

    #[test]
    fn test_coerce_to_bool() {
        assert_eq!(Value::from("TRUE").coerce_to(ValueType::Bool), Some(Value::Bool(true)));
        assert_eq!(Value::Number(0.0).coerce_to(ValueType::Bool), Some(Value::Bool(false)));
        assert_eq!(Value::from("yes").coerce_to(ValueType::Bool), None);
    }

    #[test]
    fn test_coerce_to_date() {
        assert_eq!(
            Value::from("2024-03-01").coerce_to(ValueType::Date),
            Some(Value::Date(midnight(2024, 3, 1)))
        );
        assert_eq!(
            Value::from("2024-03-01T00:00:00Z").coerce_to(ValueType::Date),
            Some(Value::Date(midnight(2024, 3, 1)))
        );
        assert_eq!(
            Value::from("2024-03-01 00:00:00").coerce_to(ValueType::Date),
            Some(Value::Date(midnight(2024, 3, 1)))
        );
        assert_eq!(Value::Number(1.0).coerce_to(ValueType::Date), None);
    }

    #[test]
    fn test_coerce_like_borrows_matching_type() {
        let arg = Value::Number(3.0);
        let coerced = arg.coerce_like(&Value::Number(1.0)).unwrap();
        assert!(matches!(coerced, Cow::Borrowed(_)));

        let coerced = arg.coerce_like(&Value::from("x")).unwrap();
        assert_eq!(coerced.into_owned(), Value::from("3"));

        assert!(arg.coerce_like(&Value::Null).is_none());
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(parse_literal("12.5", ValueType::Number), Ok(Value::Number(12.5)));
        assert_eq!(parse_literal("False", ValueType::Bool), Ok(Value::Bool(false)));
        assert_eq!(parse_literal(" spaced ", ValueType::String), Ok(Value::from(" spaced ")));
        assert_eq!(
            parse_literal("[1, \"a\"]", ValueType::Array),
            Ok(Value::Array(vec![Value::Number(1.0), Value::from("a")]))
        );
        assert_eq!(
            parse_literal("2024-03-01", ValueType::Date),
            Ok(Value::Date(midnight(2024, 3, 1)))
        );
    }

    #[test]
    fn test_parse_literal_failures() {
        let err = parse_literal("abc", ValueType::Number).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidLiteral {
                text: "abc".to_string(),
                expected: ValueType::Number,
            }
        );
        assert!(parse_literal("", ValueType::Number).is_err());
        assert!(parse_literal("{\"a\": 1}", ValueType::Array).is_err());
        assert!(parse_literal("31/12/2024", ValueType::Date).is_err());
    }
}
