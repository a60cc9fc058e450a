//! Operations over the tree, kept apart from the node types.
//!
//! Each visitor has one handler per node variant and is entered through
//! [`Node::accept`](crate::domain::Node::accept). New operations are new visitors;
//! a new node variant means a new handler in every visitor.

use termtree::Tree;
use tracing::{debug, instrument};

use crate::domain::node::{DecisionNode, LeafNode};

pub trait NodeVisitor {
    type Output;

    fn visit_decision(&mut self, node: &DecisionNode) -> Self::Output;

    fn visit_leaf(&mut self, node: &LeafNode) -> Self::Output;
}

/// Human-readable log a visitor keeps of the nodes it passed through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narration {
    lines: Vec<String>,
}

impl Narration {
    fn record(&mut self, line: String) {
        debug!("{}", line);
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

/// Computes the number of levels of a tree. A leaf counts as one level.
#[derive(Debug, Default)]
pub struct DepthVisitor {
    narration: Narration,
}

impl DepthVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn narration(&self) -> &[String] {
        self.narration.lines()
    }

    pub fn take_narration(&mut self) -> Vec<String> {
        self.narration.take()
    }
}

impl NodeVisitor for DepthVisitor {
    type Output = usize;

    #[instrument(level = "trace", skip_all)]
    fn visit_decision(&mut self, node: &DecisionNode) -> usize {
        self.narration
            .record(format!("DepthVisitor: computing depth at {node}."));
        let mut deepest = 0;
        for child in node.children() {
            deepest = deepest.max(child.accept(self));
        }
        1 + deepest
    }

    fn visit_leaf(&mut self, node: &LeafNode) -> usize {
        self.narration
            .record(format!("DepthVisitor: reached the bottom of the tree at {node}."));
        1
    }
}

/// Counts the leaves reachable from a node.
#[derive(Debug, Default)]
pub struct CountLeavesVisitor {
    narration: Narration,
}

impl CountLeavesVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn narration(&self) -> &[String] {
        self.narration.lines()
    }

    pub fn take_narration(&mut self) -> Vec<String> {
        self.narration.take()
    }
}

impl NodeVisitor for CountLeavesVisitor {
    type Output = usize;

    #[instrument(level = "trace", skip_all)]
    fn visit_decision(&mut self, node: &DecisionNode) -> usize {
        self.narration.record(format!(
            "CountLeavesVisitor: walking through {node} looking for leaves."
        ));
        let mut leaves = 0;
        for child in node.children() {
            leaves += child.accept(self);
        }
        leaves
    }

    fn visit_leaf(&mut self, node: &LeafNode) -> usize {
        self.narration
            .record(format!("CountLeavesVisitor: found leaf {node}."));
        1
    }
}

/// Collects leaf labels from left to right.
#[derive(Debug, Default)]
pub struct LeafLabelsVisitor;

impl NodeVisitor for LeafLabelsVisitor {
    type Output = Vec<String>;

    fn visit_decision(&mut self, node: &DecisionNode) -> Vec<String> {
        let mut labels = Vec::new();
        for child in node.children() {
            labels.extend(child.accept(self));
        }
        labels
    }

    fn visit_leaf(&mut self, node: &LeafNode) -> Vec<String> {
        vec![node.label().to_string()]
    }
}

/// Converts the hierarchy into a box-drawing tree for display.
#[derive(Debug, Default)]
pub struct RenderVisitor;

impl NodeVisitor for RenderVisitor {
    type Output = Tree<String>;

    fn visit_decision(&mut self, node: &DecisionNode) -> Tree<String> {
        let leaves: Vec<_> = node
            .children()
            .iter()
            .map(|child| child.accept(&mut *self))
            .collect();
        Tree::new(node.to_string()).with_leaves(leaves)
    }

    fn visit_leaf(&mut self, node: &LeafNode) -> Tree<String> {
        Tree::new(node.to_string())
    }
}
