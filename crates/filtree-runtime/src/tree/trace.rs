//! Evaluation tracing for filter debugging
//!
//! Records, for every node, what was compared and what came out.

use super::evaluation::{leaf_label, resolve_value};
use super::node::{FilterNode, NodeContent};
use crate::variable::VariableSource;
use filtree_core::Value;
use serde::{Deserialize, Serialize};

/// Trace of a single node evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionTrace {
    /// The condition as described to users (e.g. "Age > 30")
    pub expression: String,

    /// The variable value the condition was applied to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_value: Option<Value>,

    /// The operator symbol (e.g. ">", "contains")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    /// The reference value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_value: Option<Value>,

    /// The evaluation result, negation included
    pub result: bool,

    /// Child traces of a branch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<Vec<ConditionTrace>>,

    /// "and" or "or" for a branch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
}

impl ConditionTrace {
    /// Create a binary condition trace with left/right values
    pub fn binary(
        expression: String,
        left_value: Value,
        operator: &str,
        right_value: Value,
        result: bool,
    ) -> Self {
        Self {
            expression,
            left_value: Some(left_value),
            operator: Some(operator.to_string()),
            right_value: Some(right_value),
            result,
            nested: None,
            group_type: None,
        }
    }

    /// Create a logical group trace (and/or)
    pub fn group(group_type: &str, nested: Vec<ConditionTrace>, result: bool) -> Self {
        Self {
            expression: format!("{}:[...]", group_type),
            left_value: None,
            operator: None,
            right_value: None,
            result,
            nested: Some(nested),
            group_type: Some(group_type.to_string()),
        }
    }

    /// Number of leaf traces below (and including) this one
    pub fn leaf_count(&self) -> usize {
        match &self.nested {
            Some(nested) => nested.iter().map(ConditionTrace::leaf_count).sum(),
            None => 1,
        }
    }
}

impl FilterNode {
    /// Evaluate like [`evaluate`](Self::evaluate) and record a trace.
    ///
    /// Every child is evaluated so the trace is complete; the result is the
    /// same as the short-circuiting evaluation.
    pub fn evaluate_with_trace<V: VariableSource + ?Sized>(
        &self,
        variables: &V,
        sample: &V::Sample,
    ) -> (bool, ConditionTrace) {
        let content = self.content();
        match &*content {
            NodeContent::Leaf {
                condition,
                variable_id,
            } => {
                let value = resolve_value(variables, variable_id.as_deref(), sample);
                let result = condition.evaluate(&value);
                let label = leaf_label(variables, variable_id.as_deref(), "", super::UNRESOLVED_LABEL);
                let trace = ConditionTrace::binary(
                    condition.describe(&label),
                    value,
                    condition.operator.symbol(),
                    condition.value.clone(),
                    result,
                );
                (result, trace)
            }
            NodeContent::And(children) => {
                let nested: Vec<ConditionTrace> = children
                    .iter()
                    .map(|child| child.evaluate_with_trace(variables, sample).1)
                    .collect();
                let result = nested.iter().all(|t| t.result);
                (result, ConditionTrace::group("and", nested, result))
            }
            NodeContent::Or(children) => {
                let nested: Vec<ConditionTrace> = children
                    .iter()
                    .map(|child| child.evaluate_with_trace(variables, sample).1)
                    .collect();
                let result = nested.iter().any(|t| t.result);
                (result, ConditionTrace::group("or", nested, result))
            }
        }
    }
}
