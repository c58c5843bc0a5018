//! Leaf-level conditions
//!
//! A [`Condition`] compares a runtime argument against a stored reference
//! value using one [`ComparisonOperator`], optionally negating the result.
//!
//! # Semantics
//!
//! - Null equals only null; any other comparison involving null is `false`
//! - An argument of a different type than the reference value is coerced into
//!   the reference type first (`"42"` becomes `42`); if that fails the
//!   comparison is `false`
//! - `starts with`, `ends with` and `contains` compare the text forms
//! - `between` is inclusive on both ends
//! - Negation flips the final result, including the `false` produced by null
//!   and type mismatches
//!
//! Evaluation never fails; only parsing editor text does.
//!
//! # Example
//!
//! ```
//! use filtree_core::{ComparisonOperator, Condition, Value};
//!
//! let cond = Condition::new(ComparisonOperator::StartsWith, Value::from("he"));
//! assert!(cond.evaluate(&Value::from("hello")));
//! assert_eq!(cond.describe("greeting"), "greeting starts with \"he\"");
//! ```

mod comparator;
mod operator;

pub use comparator::Condition;
pub use operator::ComparisonOperator;
