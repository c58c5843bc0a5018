//! Tree evaluation and description

use super::node::{FilterNode, NodeContent};
use crate::variable::VariableSource;
use filtree_core::Value;

/// Label used in descriptions for a leaf whose variable is unset or unknown
pub const UNRESOLVED_LABEL: &str = "<none>";

impl FilterNode {
    /// Decide whether `sample` passes the filter.
    ///
    /// A leaf applies its condition to its variable's value, reading null
    /// when the variable is unset, unknown or yields nothing. An AND branch
    /// passes when every child passes (true when empty), an OR branch when
    /// any child passes (false when empty).
    pub fn evaluate<V: VariableSource + ?Sized>(&self, variables: &V, sample: &V::Sample) -> bool {
        let content = self.content();
        match &*content {
            NodeContent::Leaf {
                condition,
                variable_id,
            } => condition.evaluate(&resolve_value(variables, variable_id.as_deref(), sample)),
            NodeContent::And(children) => children.iter().all(|c| c.evaluate(variables, sample)),
            NodeContent::Or(children) => children.iter().any(|c| c.evaluate(variables, sample)),
        }
    }

    /// Human-readable rendering, e.g. `(Age > 30) AND (Name contains "x")`
    pub fn describe<V: VariableSource + ?Sized>(&self, variables: &V) -> String {
        self.describe_with(variables, "", UNRESOLVED_LABEL)
    }

    /// [`describe`](Self::describe) with a prefix before every variable name
    /// and a custom label for unresolved variables
    pub fn describe_with<V: VariableSource + ?Sized>(
        &self,
        variables: &V,
        prefix: &str,
        unresolved_label: &str,
    ) -> String {
        let content = self.content();
        match &*content {
            NodeContent::Leaf {
                condition,
                variable_id,
            } => condition.describe(&leaf_label(
                variables,
                variable_id.as_deref(),
                prefix,
                unresolved_label,
            )),
            NodeContent::And(children) => join(children, " AND ", variables, prefix, unresolved_label),
            NodeContent::Or(children) => join(children, " OR ", variables, prefix, unresolved_label),
        }
    }
}

fn join<V: VariableSource + ?Sized>(
    children: &[FilterNode],
    separator: &str,
    variables: &V,
    prefix: &str,
    unresolved_label: &str,
) -> String {
    children
        .iter()
        .map(|c| format!("({})", c.describe_with(variables, prefix, unresolved_label)))
        .collect::<Vec<_>>()
        .join(separator)
}

pub(super) fn leaf_label<V: VariableSource + ?Sized>(
    variables: &V,
    variable_id: Option<&str>,
    prefix: &str,
    unresolved_label: &str,
) -> String {
    let name = variable_id
        .and_then(|id| variables.variable(id))
        .map_or(unresolved_label, |v| v.display_name());
    format!("{}{}", prefix, name)
}

pub(super) fn resolve_value<V: VariableSource + ?Sized>(
    variables: &V,
    variable_id: Option<&str>,
    sample: &V::Sample,
) -> Value {
    let Some(id) = variable_id else {
        return Value::Null;
    };
    match variables.variable(id) {
        Some(variable) => variable.value(sample).unwrap_or(Value::Null),
        None => {
            tracing::trace!("Variable not found: {}, using null", id);
            Value::Null
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::{ConstVariable, VariableSet};
    use filtree_core::{ComparisonOperator, Condition};

    fn vars() -> VariableSet<()> {
        VariableSet::new()
            .with(ConstVariable::new("age", "Age", 42))
            .with(ConstVariable::new("name", "Name", "Bob"))
    }

    #[test]
    fn test_empty_branches() {
        assert!(FilterNode::and(vec![]).evaluate(&vars(), &()));
        assert!(!FilterNode::or(vec![]).evaluate(&vars(), &()));
        assert_eq!(FilterNode::and(vec![]).describe(&vars()), "");
    }

    #[test]
    fn test_unknown_variable_reads_null() {
        let leaf = FilterNode::leaf("missing", Condition::new(ComparisonOperator::Equal, Value::Null));
        assert!(leaf.evaluate(&vars(), &()));
        assert_eq!(leaf.describe(&vars()), "<none> == null");

        let unbound = FilterNode::unbound_leaf(Condition::new(ComparisonOperator::Equal, 1));
        assert!(!unbound.evaluate(&vars(), &()));
    }

    #[test]
    fn test_describe_nested() {
        let root = FilterNode::and(vec![
            FilterNode::leaf("age", Condition::new(ComparisonOperator::GreaterThan, 30)),
            FilterNode::or(vec![
                FilterNode::leaf("name", Condition::new(ComparisonOperator::StartsWith, "B")),
                FilterNode::unbound_leaf(Condition::new(ComparisonOperator::Equal, 1)),
            ]),
        ]);

        assert_eq!(
            root.describe(&vars()),
            "(Age > 30) AND ((Name starts with \"B\") OR (<none> == 1))"
        );
        assert_eq!(
            root.describe_with(&vars(), "row.", "?"),
            "(row.Age > 30) AND ((row.Name starts with \"B\") OR (row.? == 1))"
        );
        assert!(root.evaluate(&vars(), &()));
    }
}
