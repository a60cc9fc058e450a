use tracing::instrument;

use crate::domain::node::Node;

/// Pre-order walk (node before descendants, siblings left to right).
///
/// Uses an explicit stack instead of recursion. A new iterator restarts the walk;
/// the tree is never mutated.
#[derive(Debug, Clone)]
pub struct PreOrderIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrderIter<'a> {
    #[instrument(level = "trace", skip(root))]
    pub fn new(root: Option<&'a Node>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = root {
            stack.push(root);
        }
        Self { stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        if let Node::Decision(node) = current {
            // Push children in reverse order for left-to-right traversal
            self.stack.extend(node.children().iter().rev());
        }
        Some(current)
    }
}

/// Post-order walk (children left to right, then the parent).
#[derive(Debug, Clone)]
pub struct PostOrderIter<'a> {
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> PostOrderIter<'a> {
    #[instrument(level = "trace", skip(root))]
    pub fn new(root: Option<&'a Node>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = root {
            stack.push((root, false));
        }
        Self { stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, expanded)) = self.stack.pop() {
            match current {
                Node::Decision(node) if !expanded => {
                    self.stack.push((current, true));
                    for child in node.children().iter().rev() {
                        self.stack.push((child, false));
                    }
                }
                _ => return Some(current),
            }
        }
        None
    }
}
