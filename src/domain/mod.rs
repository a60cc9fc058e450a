//! Domain layer: tree nodes, visitors, traversal and the construction lifecycle
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod error;
pub mod iter;
pub mod node;
pub mod phase;
pub mod visitor;

pub use builder::{Advance, TreeBuilder};
pub use error::{DomainError, DomainResult};
pub use iter::{PostOrderIter, PreOrderIter};
pub use node::{DecisionNode, LeafNode, Node, NodeKind};
pub use phase::Phase;
pub use visitor::{
    CountLeavesVisitor, DepthVisitor, LeafLabelsVisitor, NodeVisitor, RenderVisitor,
};
