//! Builder pattern for filter trees and editors

use crate::config::FilterConfig;
use crate::editor::FilterEditor;
use crate::error::Result;
use filtree_runtime::{
    BranchKind, ComparisonOperator, Condition, FilterNode, Value, Variable, VariableSet,
};
use std::path::PathBuf;

/// Fluent construction of a filter tree
///
/// # Example
///
/// ```
/// use filtree_sdk::{ComparisonOperator, FilterBuilder};
///
/// let root = FilterBuilder::or()
///     .compare("name", ComparisonOperator::StartsWith, "he")
///     .group(
///         FilterBuilder::and()
///             .compare("name", ComparisonOperator::Equal, "hello")
///             .compare("count", ComparisonOperator::Equal, 42),
///     )
///     .build();
///
/// assert_eq!(root.child_count(), 2);
/// ```
pub struct FilterBuilder {
    kind: BranchKind,
    children: Vec<FilterNode>,
}

impl FilterBuilder {
    /// Start a branch of the given kind
    pub fn new(kind: BranchKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn and() -> Self {
        Self::new(BranchKind::And)
    }

    pub fn or() -> Self {
        Self::new(BranchKind::Or)
    }

    /// Add a leaf with a prepared condition
    pub fn leaf(mut self, variable_id: impl Into<String>, condition: Condition) -> Self {
        self.children.push(FilterNode::leaf(variable_id, condition));
        self
    }

    /// Add a leaf comparing `variable_id` with `value`
    pub fn compare(
        self,
        variable_id: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<Value>,
    ) -> Self {
        self.leaf(variable_id, Condition::new(operator, value))
    }

    /// Add a negated comparison
    pub fn compare_not(
        self,
        variable_id: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<Value>,
    ) -> Self {
        self.leaf(variable_id, Condition::new(operator, value).with_negate(true))
    }

    /// Add a nested branch
    pub fn group(mut self, builder: FilterBuilder) -> Self {
        self.children.push(builder.build());
        self
    }

    /// Add an existing detached node
    pub fn node(mut self, node: FilterNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn build(self) -> FilterNode {
        FilterNode::branch(self.kind, self.children)
    }
}

/// Builder for FilterEditor
///
/// Without a root the editor starts from an AND branch holding one unbound
/// leaf.
pub struct FilterEditorBuilder<S: ?Sized> {
    config: FilterConfig,
    config_file: Option<PathBuf>,
    variables: VariableSet<S>,
    root: Option<FilterNode>,
}

impl<S: ?Sized> FilterEditorBuilder<S> {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: FilterConfig::default(),
            config_file: None,
            variables: VariableSet::new(),
            root: None,
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: FilterConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file when building; overrides [`with_config`](Self::with_config)
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Add a variable
    pub fn add_variable(mut self, variable: impl Variable<S> + 'static) -> Self {
        self.variables.push(variable);
        self
    }

    /// Use a prepared variable set, replacing variables added so far
    pub fn with_variables(mut self, variables: VariableSet<S>) -> Self {
        self.variables = variables;
        self
    }

    /// Set the tree to edit
    pub fn with_root(mut self, root: FilterNode) -> Self {
        self.root = Some(root);
        self
    }

    /// Build the editor
    pub fn build(self) -> Result<FilterEditor<S>> {
        let config = match &self.config_file {
            Some(path) => FilterConfig::from_file(path)?,
            None => self.config,
        };
        let root = self
            .root
            .unwrap_or_else(|| FilterNode::and(vec![FilterNode::unbound_leaf(Condition::default())]));

        tracing::debug!(
            variables = self.variables.len(),
            drain_before_evaluate = config.drain_before_evaluate,
            "Building filter editor"
        );
        Ok(FilterEditor::new(root, self.variables).with_config(config))
    }
}

impl<S: ?Sized> Default for FilterEditorBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filtree_runtime::{ConstVariable, NodeKind};

    #[test]
    fn test_filter_builder_nesting() {
        let root = FilterBuilder::or()
            .compare("a", ComparisonOperator::Equal, 1)
            .group(FilterBuilder::and().compare_not("b", ComparisonOperator::LessThan, 3))
            .build();

        assert_eq!(root.kind(), NodeKind::Or);
        let inner = root.child(1).unwrap();
        assert_eq!(inner.kind(), NodeKind::And);
        assert_eq!(inner.parent(), Some(root.clone()));
        assert!(inner.child(0).unwrap().condition().unwrap().negate);
    }

    #[test]
    fn test_editor_builder_defaults() {
        let editor: FilterEditor<()> = FilterEditorBuilder::new()
            .add_variable(ConstVariable::new("a", "A", 1))
            .build()
            .unwrap();

        assert_eq!(editor.root().kind(), NodeKind::And);
        assert_eq!(editor.root().child_count(), 1);
        assert_eq!(editor.variables().len(), 1);
        assert_eq!(editor.describe().unwrap(), "(<none> == null)");
    }

    #[test]
    fn test_editor_builder_with_config() {
        let editor: FilterEditor<()> = FilterEditorBuilder::new()
            .with_config(FilterConfig::new().with_unresolved_label("-"))
            .with_root(FilterBuilder::and().compare("x", ComparisonOperator::Equal, 1).build())
            .build()
            .unwrap();

        assert_eq!(editor.describe().unwrap(), "(- == 1)");
    }
}
