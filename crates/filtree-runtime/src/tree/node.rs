//! Filter tree nodes

use super::edits::PendingEdit;
use crate::error::{Result, RuntimeError};
use crate::variable::Variable;
use filtree_core::{ComparisonOperator, Condition, Value};
use std::cell::{Ref, RefCell, RefMut};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use uuid::Uuid;

/// Process-unique node identifier, stable for the node's lifetime
pub type NodeId = Uuid;

/// Shape of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Single condition bound to a variable, no children
    Leaf,
    /// All children must pass
    And,
    /// At least one child must pass
    Or,
}

/// Shape of a branch node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchKind {
    And,
    Or,
}

impl BranchKind {
    pub fn node_kind(&self) -> NodeKind {
        match self {
            BranchKind::And => NodeKind::And,
            BranchKind::Or => NodeKind::Or,
        }
    }

    /// Connective used between children in descriptions
    pub fn keyword(&self) -> &'static str {
        match self {
            BranchKind::And => "AND",
            BranchKind::Or => "OR",
        }
    }
}

#[derive(Debug)]
pub(super) enum NodeContent {
    Leaf {
        condition: Condition,
        variable_id: Option<String>,
    },
    And(Vec<FilterNode>),
    Or(Vec<FilterNode>),
}

impl NodeContent {
    pub(super) fn branch(kind: BranchKind, children: Vec<FilterNode>) -> Self {
        match kind {
            BranchKind::And => NodeContent::And(children),
            BranchKind::Or => NodeContent::Or(children),
        }
    }

    pub(super) fn kind(&self) -> NodeKind {
        match self {
            NodeContent::Leaf { .. } => NodeKind::Leaf,
            NodeContent::And(_) => NodeKind::And,
            NodeContent::Or(_) => NodeKind::Or,
        }
    }

    pub(super) fn children(&self) -> Option<&Vec<FilterNode>> {
        match self {
            NodeContent::Leaf { .. } => None,
            NodeContent::And(children) | NodeContent::Or(children) => Some(children),
        }
    }

    pub(super) fn children_mut(&mut self) -> Option<&mut Vec<FilterNode>> {
        match self {
            NodeContent::Leaf { .. } => None,
            NodeContent::And(children) | NodeContent::Or(children) => Some(children),
        }
    }
}

pub(super) struct NodeInner {
    pub(super) id: NodeId,
    pub(super) parent: RefCell<Weak<NodeInner>>,
    pub(super) content: RefCell<NodeContent>,
    pub(super) pending: RefCell<VecDeque<PendingEdit>>,
}

/// Handle to a node of a filter tree.
///
/// Cloning the handle does not clone the node; equality is identity.
/// The parent exclusively owns its children, the child only keeps a weak
/// back-reference to its parent.
#[derive(Clone)]
pub struct FilterNode(pub(super) Rc<NodeInner>);

impl FilterNode {
    pub(super) fn from_content(content: NodeContent) -> Self {
        let node = FilterNode(Rc::new(NodeInner {
            id: Uuid::new_v4(),
            parent: RefCell::new(Weak::new()),
            content: RefCell::new(content),
            pending: RefCell::new(VecDeque::new()),
        }));
        node.adopt_children();
        node
    }

    /// Create a leaf comparing the variable `variable_id` with `condition`
    pub fn leaf(variable_id: impl Into<String>, condition: Condition) -> Self {
        Self::from_content(NodeContent::Leaf {
            condition,
            variable_id: Some(variable_id.into()),
        })
    }

    /// Create a leaf from its parts
    pub fn new_leaf(
        variable_id: Option<String>,
        operator: ComparisonOperator,
        value: impl Into<Value>,
        negate: bool,
    ) -> Self {
        Self::from_content(NodeContent::Leaf {
            condition: Condition::new(operator, value).with_negate(negate),
            variable_id,
        })
    }

    /// Create a leaf with no variable selected; it evaluates against null
    pub fn unbound_leaf(condition: Condition) -> Self {
        Self::from_content(NodeContent::Leaf {
            condition,
            variable_id: None,
        })
    }

    /// Create an AND branch. Children must be detached nodes.
    pub fn and(children: Vec<FilterNode>) -> Self {
        Self::branch(BranchKind::And, children)
    }

    /// Create an OR branch. Children must be detached nodes.
    pub fn or(children: Vec<FilterNode>) -> Self {
        Self::branch(BranchKind::Or, children)
    }

    pub fn branch(kind: BranchKind, children: Vec<FilterNode>) -> Self {
        Self::from_content(NodeContent::branch(kind, children))
    }

    pub fn id(&self) -> NodeId {
        self.0.id
    }

    pub fn kind(&self) -> NodeKind {
        self.content().kind()
    }

    pub fn is_leaf(&self) -> bool {
        self.kind() == NodeKind::Leaf
    }

    /// Branch shape, `None` for a leaf
    pub fn branch_kind(&self) -> Option<BranchKind> {
        match self.kind() {
            NodeKind::Leaf => None,
            NodeKind::And => Some(BranchKind::And),
            NodeKind::Or => Some(BranchKind::Or),
        }
    }

    pub fn parent(&self) -> Option<FilterNode> {
        self.0.parent.borrow().upgrade().map(FilterNode)
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Snapshot of the child handles (empty for a leaf)
    pub fn children(&self) -> Vec<FilterNode> {
        self.content().children().cloned().unwrap_or_default()
    }

    pub fn child_count(&self) -> usize {
        self.content().children().map_or(0, Vec::len)
    }

    pub fn child(&self, index: usize) -> Option<FilterNode> {
        self.content().children()?.get(index).cloned()
    }

    /// Position of `child` among this node's children
    pub fn index_of(&self, child: &FilterNode) -> Option<usize> {
        self.content().children()?.iter().position(|c| c == child)
    }

    /// True for a root, or when the parent has no other child
    pub fn is_only_child(&self) -> bool {
        match self.parent() {
            Some(parent) => parent.child_count() == 1,
            None => true,
        }
    }

    /// Copy of the leaf's condition
    pub fn condition(&self) -> Option<Condition> {
        match &*self.content() {
            NodeContent::Leaf { condition, .. } => Some(condition.clone()),
            _ => None,
        }
    }

    pub fn variable_id(&self) -> Option<String> {
        match &*self.content() {
            NodeContent::Leaf { variable_id, .. } => variable_id.clone(),
            _ => None,
        }
    }

    /// Edit the leaf's condition in place
    pub fn update_condition<R>(&self, edit: impl FnOnce(&mut Condition) -> R) -> Result<R> {
        match &mut *self.content_mut()? {
            NodeContent::Leaf { condition, .. } => Ok(edit(condition)),
            _ => Err(RuntimeError::NotALeaf { node: self.id() }),
        }
    }

    /// Bind the leaf to another variable id, or to none
    pub fn set_variable_id(&self, id: Option<String>) -> Result<()> {
        match &mut *self.content_mut()? {
            NodeContent::Leaf { variable_id, .. } => {
                *variable_id = id;
                Ok(())
            }
            _ => Err(RuntimeError::NotALeaf { node: self.id() }),
        }
    }

    /// Bind the leaf to `variable` and retype its condition to the variable's type
    pub fn select_variable<S: ?Sized>(&self, variable: &dyn Variable<S>) -> Result<()> {
        match &mut *self.content_mut()? {
            NodeContent::Leaf {
                condition,
                variable_id,
            } => {
                *variable_id = Some(variable.id().to_string());
                condition.declared_type = Some(variable.value_type());
                Ok(())
            }
            _ => Err(RuntimeError::NotALeaf { node: self.id() }),
        }
    }

    /// Parse editor text into the leaf condition's reference value.
    ///
    /// The stored value is left untouched when parsing fails.
    pub fn set_value_from_text(&self, text: &str) -> Result<()> {
        self.update_condition(|condition| condition.set_value_from_text(text))??;
        Ok(())
    }

    /// Compare content recursively, ignoring ids and parents
    pub fn same_structure(&self, other: &FilterNode) -> bool {
        let (mine, theirs) = (self.content(), other.content());
        match (&*mine, &*theirs) {
            (
                NodeContent::Leaf {
                    condition: c1,
                    variable_id: v1,
                },
                NodeContent::Leaf {
                    condition: c2,
                    variable_id: v2,
                },
            ) => c1 == c2 && v1 == v2,
            (NodeContent::And(a), NodeContent::And(b)) | (NodeContent::Or(a), NodeContent::Or(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_structure(y))
            }
            _ => false,
        }
    }

    /// Visit this node and its descendants depth-first, parents before children.
    ///
    /// Only shared borrows are held, so the visitor may request deferred edits
    /// and call [`insert_new_parent`](Self::insert_new_parent) on the node it
    /// is given.
    pub fn walk(&self, visitor: &mut dyn FnMut(&FilterNode, usize)) {
        self.walk_at(0, visitor);
    }

    fn walk_at(&self, depth: usize, visitor: &mut dyn FnMut(&FilterNode, usize)) {
        visitor(self, depth);

        let content = self.content();
        if let Some(children) = content.children() {
            for child in children {
                child.walk_at(depth + 1, visitor);
            }
        }
    }

    pub fn ptr_eq(&self, other: &FilterNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(super) fn content(&self) -> Ref<'_, NodeContent> {
        self.0.content.borrow()
    }

    pub(super) fn content_mut(&self) -> Result<RefMut<'_, NodeContent>> {
        self.0
            .content
            .try_borrow_mut()
            .map_err(|_| RuntimeError::TreeBusy { node: self.id() })
    }

    pub(super) fn set_parent(&self, parent: Option<&FilterNode>) {
        *self.0.parent.borrow_mut() = parent.map_or_else(Weak::new, |p| Rc::downgrade(&p.0));
    }

    /// Point the parent link of every child at this node
    pub(super) fn adopt_children(&self) {
        if let Some(children) = self.content().children() {
            for child in children {
                child.set_parent(Some(self));
            }
        }
    }
}

impl PartialEq for FilterNode {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for FilterNode {}

impl fmt::Debug for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("FilterNode");
        s.field("id", &self.0.id);
        match self.0.content.try_borrow() {
            Ok(content) => s.field("content", &*content),
            Err(_) => s.field("content", &"<borrowed>"),
        };
        s.finish()
    }
}
