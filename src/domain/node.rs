//! Decision tree nodes.
//!
//! A tree is a closed union of decision nodes and leaves. Every parent owns its
//! children exclusively, in insertion order.

use std::fmt;

use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::iter::PreOrderIter;
use crate::domain::visitor::NodeVisitor;

/// Discriminant of a [`Node`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Decision,
    Leaf,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Decision => write!(f, "DecisionNode"),
            NodeKind::Leaf => write!(f, "LeafNode"),
        }
    }
}

/// Internal node holding an ordered list of children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionNode {
    children: Vec<Node>,
}

impl DecisionNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `node` after the existing children.
    pub fn add_child(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_decision(self)
    }
}

impl fmt::Display for DecisionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", NodeKind::Decision)
    }
}

/// Terminal node carrying a classification label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    label: String,
}

impl LeafNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_leaf(self)
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> '{}'", NodeKind::Leaf, self.label)
    }
}

/// A node of the decision tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Decision(DecisionNode),
    Leaf(LeafNode),
}

impl Node {
    /// Creates a decision node without children.
    pub fn decision() -> Self {
        Node::Decision(DecisionNode::new())
    }

    pub fn leaf(label: impl Into<String>) -> Self {
        Node::Leaf(LeafNode::new(label))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Decision(_) => NodeKind::Decision,
            Node::Leaf(_) => NodeKind::Leaf,
        }
    }

    /// Double dispatch: hands `self` to the visitor handler matching its variant.
    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Decision(node) => node.accept(visitor),
            Node::Leaf(node) => node.accept(visitor),
        }
    }

    pub fn as_decision(&self) -> Option<&DecisionNode> {
        match self {
            Node::Decision(node) => Some(node),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafNode> {
        match self {
            Node::Leaf(node) => Some(node),
            Node::Decision(_) => None,
        }
    }

    /// Appends a child. Only decision nodes accept children.
    #[instrument(level = "trace", skip(self, child), fields(kind = %self.kind()))]
    pub fn add_child(&mut self, child: Node) -> DomainResult<()> {
        if let Node::Decision(node) = self {
            node.add_child(child);
            return Ok(());
        }
        Err(self.invalid("add_child"))
    }

    /// Consuming form of [`Node::add_child`] for building trees inline.
    pub fn with_child(mut self, child: Node) -> DomainResult<Self> {
        self.add_child(child)?;
        Ok(self)
    }

    pub fn children(&self) -> DomainResult<&[Node]> {
        self.as_decision()
            .map(DecisionNode::children)
            .ok_or_else(|| self.invalid("children"))
    }

    pub fn label(&self) -> DomainResult<&str> {
        self.as_leaf()
            .map(LeafNode::label)
            .ok_or_else(|| self.invalid("label"))
    }

    /// Pre-order walk starting at this node.
    pub fn iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(Some(self))
    }

    /// Total number of nodes (decision and leaf) in this subtree.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    fn invalid(&self, operation: &'static str) -> DomainError {
        DomainError::InvalidOperation {
            operation,
            kind: self.kind(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Decision(node) => node.fmt(f),
            Node::Leaf(node) => node.fmt(f),
        }
    }
}

impl From<DecisionNode> for Node {
    fn from(node: DecisionNode) -> Self {
        Node::Decision(node)
    }
}

impl From<LeafNode> for Node {
    fn from(node: LeafNode) -> Self {
        Node::Leaf(node)
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = PreOrderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
