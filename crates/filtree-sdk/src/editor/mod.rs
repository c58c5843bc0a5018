//! Filter editing sessions
//!
//! A [`FilterEditor`] owns a filter tree, the variables its leaves refer to
//! and the editor configuration. Front ends drive it in passes: each pass
//! first applies the edits requested during the previous one, then walks the
//! tree so the front end can show every node and request new edits.

mod input;

pub use input::ValueInput;

use crate::config::FilterConfig;
use crate::error::{Result, SdkError};
use filtree_runtime::{BranchKind, ConditionTrace, FilterNode, VariableSet};

/// Edit controls offered for a leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditAction {
    /// Add a fresh leaf for the same variable right after this one
    AddSibling,
    /// Put the leaf under a new AND branch together with a fresh leaf
    WrapInAnd,
    /// Put the leaf under a new OR branch together with a fresh leaf
    WrapInOr,
    /// Remove the leaf, collapsing a parent left with one child
    Remove,
}

/// Filter editing session over samples of type `S`
pub struct FilterEditor<S: ?Sized> {
    root: FilterNode,
    variables: VariableSet<S>,
    config: FilterConfig,
}

impl<S: ?Sized> FilterEditor<S> {
    /// Create an editor with the default configuration
    pub fn new(root: FilterNode, variables: VariableSet<S>) -> Self {
        Self {
            root,
            variables,
            config: FilterConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FilterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn root(&self) -> &FilterNode {
        &self.root
    }

    /// Replace the edited tree
    pub fn set_root(&mut self, root: FilterNode) {
        self.root = root;
    }

    pub fn variables(&self) -> &VariableSet<S> {
        &self.variables
    }

    /// Variables can be added or removed between passes; leaves look them up by id
    pub fn variables_mut(&mut self) -> &mut VariableSet<S> {
        &mut self.variables
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Apply all pending edits
    pub fn drain(&self) -> Result<()> {
        self.root.drain_pending_edits()?;
        Ok(())
    }

    /// Run one editing pass: drain, then visit every node with its depth.
    ///
    /// The visitor may call [`apply`](Self::apply) on the node it is given;
    /// the resulting edits show from the next pass on.
    pub fn pass(&self, mut visitor: impl FnMut(&FilterNode, usize)) -> Result<()> {
        self.drain()?;
        self.root.walk(&mut visitor);
        Ok(())
    }

    /// Controls to show for `node`
    pub fn actions(&self, node: &FilterNode) -> Vec<EditAction> {
        if !node.is_leaf() {
            return Vec::new();
        }

        let mut actions = Vec::with_capacity(4);
        if !node.is_root() {
            actions.push(EditAction::AddSibling);
        }
        actions.push(EditAction::WrapInAnd);
        actions.push(EditAction::WrapInOr);
        if !node.is_only_child() {
            actions.push(EditAction::Remove);
        }
        actions
    }

    /// Request `action` on `node`, returning the leaf it adds, if any.
    ///
    /// Wrapping is applied at once, additions and removals are queued until
    /// the next drain.
    pub fn apply(&self, node: &FilterNode, action: EditAction) -> Result<Option<FilterNode>> {
        tracing::debug!(node = %node.id(), ?action, "Edit requested");
        let added = match action {
            EditAction::AddSibling => node.duplicate_as_sibling(),
            EditAction::WrapInAnd => node.insert_new_parent(BranchKind::And)?.duplicate_as_sibling(),
            EditAction::WrapInOr => node.insert_new_parent(BranchKind::Or)?.duplicate_as_sibling(),
            EditAction::Remove => {
                node.remove_and_collapse_if_orphaned();
                None
            }
        };
        Ok(added)
    }

    /// Bind the leaf `node` to the variable `id` from this editor's set
    pub fn select_variable(&self, node: &FilterNode, id: &str) -> Result<()> {
        let variable = self
            .variables
            .get(id)
            .ok_or_else(|| SdkError::UnknownVariable(id.to_string()))?;
        node.select_variable(variable)?;
        Ok(())
    }

    /// Commit a value field to the leaf `node`; returns whether the text parsed
    pub fn commit_value(&self, node: &FilterNode, input: &mut ValueInput) -> Result<bool> {
        Ok(node.update_condition(|condition| input.commit(condition))?)
    }

    /// `(id, display name)` of every variable, in order
    pub fn variable_choices(&self) -> Vec<(&str, &str)> {
        self.variables
            .iter()
            .map(|v| (v.id(), v.display_name()))
            .collect()
    }

    /// Decide whether `sample` passes the filter
    pub fn evaluate(&self, sample: &S) -> Result<bool> {
        if self.config.trace_evaluations {
            return Ok(self.evaluate_with_trace(sample)?.0);
        }
        self.prepare()?;
        Ok(self.root.evaluate(&self.variables, sample))
    }

    /// Evaluate and return the trace of every node
    pub fn evaluate_with_trace(&self, sample: &S) -> Result<(bool, ConditionTrace)> {
        self.prepare()?;
        let (result, trace) = self.root.evaluate_with_trace(&self.variables, sample);
        if self.config.trace_evaluations {
            tracing::debug!(result, leaves = trace.leaf_count(), trace = ?trace, "Filter evaluated");
        }
        Ok((result, trace))
    }

    /// Describe the filter using the configured prefix and unresolved label
    pub fn describe(&self) -> Result<String> {
        self.prepare()?;
        Ok(self.root.describe_with(
            &self.variables,
            &self.config.variable_prefix,
            &self.config.unresolved_label,
        ))
    }

    fn prepare(&self) -> Result<()> {
        if self.config.drain_before_evaluate {
            self.drain()?;
        }
        Ok(())
    }
}
