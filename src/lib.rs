//! Decision-tree walkthrough of four design patterns.
//!
//! - Composite: [`domain::Node`] is a closed union of decision nodes and leaves.
//! - Visitor: [`domain::NodeVisitor`] computes depth and leaf counts by double dispatch.
//! - Iterator: [`domain::PreOrderIter`] walks the tree with an explicit stack.
//! - State: [`domain::TreeBuilder`] steps through the construction [`domain::Phase`]s.
//!
//! Splitting, pruning and information gain are narrated placeholders; no model is
//! trained.

pub mod cli;
pub mod config;
pub mod demo;
pub mod domain;
pub mod exitcode;
pub mod util;
