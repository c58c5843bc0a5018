//! Structural edits
//!
//! Sibling insertion and removal are queued on the parent and applied by
//! [`FilterNode::drain_pending_edits`]. Wrapping a node in a new parent is
//! applied immediately since it only rewrites the node itself.

use super::node::{BranchKind, FilterNode, NodeContent};
use crate::error::{Result, RuntimeError};
use filtree_core::Condition;
use std::collections::VecDeque;

/// A queued structural change, applied to the node owning the queue
#[derive(Debug)]
pub(super) enum PendingEdit {
    /// Insert `node` right after `anchor`, or after `index_hint` if the
    /// anchor has left the child list in the meantime
    InsertAfter {
        anchor: FilterNode,
        index_hint: Option<usize>,
        node: FilterNode,
    },
    /// Detach `node` from the child list
    Remove { node: FilterNode },
    /// Replace this branch by its only remaining child, if it has exactly one
    CollapseIfSingle,
}

impl FilterNode {
    /// Queue `node` for insertion right after this node in its parent.
    ///
    /// `node` must be detached. Returns it back, or `None` when this node is
    /// a root and therefore has no siblings.
    pub fn add_new_sibling(&self, node: FilterNode) -> Option<FilterNode> {
        let parent = self.parent()?;
        let index_hint = parent.index_of(self);

        node.set_parent(Some(&parent));
        tracing::debug!(parent = %parent.id(), anchor = %self.id(), node = %node.id(), "Queued sibling insertion");
        parent.enqueue(PendingEdit::InsertAfter {
            anchor: self.clone(),
            index_hint,
            node: node.clone(),
        });
        Some(node)
    }

    /// Queue a fresh leaf after this node, bound to the same variable.
    ///
    /// The new leaf keeps the variable and its declared type but starts from
    /// a default condition. Returns `None` for a root.
    pub fn duplicate_as_sibling(&self) -> Option<FilterNode> {
        if self.is_root() {
            return None;
        }

        let mut condition = Condition::default();
        condition.declared_type = self.condition().and_then(|c| c.declared_type);
        let node = match self.variable_id() {
            Some(id) => FilterNode::leaf(id, condition),
            None => FilterNode::unbound_leaf(condition),
        };
        self.add_new_sibling(node)
    }

    /// Queue removal of this node from its parent.
    ///
    /// When the parent is left with a single child, the parent is queued to
    /// take that child's place as well. Removals already queued on the parent
    /// count as done. Returns whether anything was queued: a root, a node
    /// already queued for removal, the last child not queued for removal or
    /// a node not yet inserted is left alone.
    pub fn remove_and_collapse_if_orphaned(&self) -> bool {
        let Some(parent) = self.parent() else {
            return false;
        };
        let content = parent.content();
        let Some(children) = content.children() else {
            return false;
        };
        if !children.contains(self) {
            return false;
        }

        let mut pending = parent.0.pending.borrow_mut();
        if is_queued_for_removal(&pending, self) {
            return false;
        }
        let remaining = children
            .iter()
            .filter(|child| !is_queued_for_removal(&pending, child))
            .count();
        if remaining == 1 {
            return false;
        }

        pending.push_back(PendingEdit::Remove { node: self.clone() });
        if remaining == 2 {
            pending.push_back(PendingEdit::CollapseIfSingle);
        }
        tracing::debug!(parent = %parent.id(), node = %self.id(), remaining = remaining - 1, "Queued removal");
        true
    }

    /// Turn this node into a `kind` branch whose only child carries this
    /// node's former content.
    ///
    /// Applied immediately: the handle, id and parent link of this node stay
    /// the same, the returned child is a new node that takes over the former
    /// content, children and queued edits. Fails with
    /// [`RuntimeError::TreeBusy`] if a traversal is inside this node's subtree.
    pub fn insert_new_parent(&self, kind: BranchKind) -> Result<FilterNode> {
        let mut content = self.content_mut()?;
        let mut pending = self
            .0
            .pending
            .try_borrow_mut()
            .map_err(|_| RuntimeError::TreeBusy { node: self.id() })?;

        let former = std::mem::replace(&mut *content, NodeContent::branch(kind, Vec::new()));
        let child = FilterNode::from_content(former);
        *child.0.pending.borrow_mut() = std::mem::take(&mut *pending);
        child.set_parent(Some(self));
        if let Some(children) = content.children_mut() {
            children.push(child.clone());
        }

        tracing::debug!(node = %self.id(), child = %child.id(), kind = kind.keyword(), "Inserted new parent");
        Ok(child)
    }

    /// Apply every queued edit in this subtree.
    ///
    /// Insertions and removals run in request order per node, a requested
    /// collapse runs after the rest of the node's batch, then the children
    /// are drained. Edits carried over by a collapse run in the same pass. Call on the
    /// root between traversals; on [`RuntimeError::TreeBusy`] the unapplied
    /// edits stay queued.
    pub fn drain_pending_edits(&self) -> Result<()> {
        loop {
            // fail before taking anything if a traversal holds this node
            drop(self.content_mut()?);

            let mut batch = std::mem::take(
                &mut *self
                    .0
                    .pending
                    .try_borrow_mut()
                    .map_err(|_| RuntimeError::TreeBusy { node: self.id() })?,
            );
            if batch.is_empty() {
                break;
            }

            tracing::trace!(node = %self.id(), edits = batch.len(), "Applying pending edits");
            let mut collapse = false;
            while let Some(edit) = batch.front() {
                collapse |= matches!(edit, PendingEdit::CollapseIfSingle);
                match self.apply_edit(edit) {
                    Ok(()) => {
                        batch.pop_front();
                    }
                    Err(err) => {
                        if collapse {
                            batch.push_back(PendingEdit::CollapseIfSingle);
                        }
                        self.requeue_front(batch);
                        return Err(err);
                    }
                }
            }

            if collapse {
                if let Err(err) = self.collapse_into_only_child() {
                    self.requeue_front(VecDeque::from([PendingEdit::CollapseIfSingle]));
                    return Err(err);
                }
            }
        }

        for child in self.children() {
            child.drain_pending_edits()?;
        }
        Ok(())
    }

    /// Number of edits queued on this node itself
    pub fn pending_edit_count(&self) -> usize {
        self.0.pending.borrow().len()
    }

    fn enqueue(&self, edit: PendingEdit) {
        self.0.pending.borrow_mut().push_back(edit);
    }

    /// Put unapplied edits back ahead of anything queued since
    fn requeue_front(&self, mut edits: VecDeque<PendingEdit>) {
        let mut pending = self.0.pending.borrow_mut();
        edits.append(&mut pending);
        *pending = edits;
    }

    fn apply_edit(&self, edit: &PendingEdit) -> Result<()> {
        match edit {
            PendingEdit::InsertAfter {
                anchor,
                index_hint,
                node,
            } => {
                let mut content = self.content_mut()?;
                let Some(children) = content.children_mut() else {
                    tracing::debug!(node = %self.id(), "Dropping insertion into a leaf");
                    node.set_parent(None);
                    return Ok(());
                };
                let index = children
                    .iter()
                    .position(|c| c == anchor)
                    .or(*index_hint)
                    .map_or(children.len(), |i| i + 1)
                    .min(children.len());
                children.insert(index, node.clone());
                node.set_parent(Some(self));
            }
            PendingEdit::Remove { node } => {
                let mut content = self.content_mut()?;
                if let Some(children) = content.children_mut() {
                    if let Some(index) = children.iter().position(|c| c == node) {
                        children.remove(index);
                        node.set_parent(None);
                    }
                }
            }
            // applied by the drain once the rest of the batch is done
            PendingEdit::CollapseIfSingle => {}
        }
        Ok(())
    }

    /// Take over the content of the only child, keeping this node's handle,
    /// id and parent link
    fn collapse_into_only_child(&self) -> Result<()> {
        let survivor = match self.content().children() {
            Some(children) if children.len() == 1 => children[0].clone(),
            _ => return Ok(()),
        };

        let acquired = match &mut *survivor.content_mut()? {
            NodeContent::Leaf {
                condition,
                variable_id,
            } => NodeContent::Leaf {
                condition: condition.clone(),
                variable_id: variable_id.clone(),
            },
            NodeContent::And(children) => NodeContent::And(std::mem::take(children)),
            NodeContent::Or(children) => NodeContent::Or(std::mem::take(children)),
        };
        let carried = std::mem::take(&mut *survivor.0.pending.borrow_mut());

        *self.content_mut()? = acquired;
        survivor.set_parent(None);
        self.adopt_children();
        self.0.pending.borrow_mut().extend(carried);

        tracing::debug!(node = %self.id(), survivor = %survivor.id(), "Collapsed branch into its only child");
        Ok(())
    }
}

fn is_queued_for_removal(pending: &VecDeque<PendingEdit>, node: &FilterNode) -> bool {
    pending
        .iter()
        .any(|edit| matches!(edit, PendingEdit::Remove { node: queued } if queued == node))
}
