//! The four demonstrations printed by the `dtree` binary.
//!
//! Each demonstration stands alone: the ones that need a tree build their own copy
//! of the sample tree.

use std::io::Write;

use tracing::{debug, instrument};

use crate::cli::output;
use crate::cli::{CliResult, Demo};
use crate::config::Settings;
use crate::domain::{
    CountLeavesVisitor, DepthVisitor, DomainResult, Node, RenderVisitor, TreeBuilder,
};

/// Builds the sample tree, reporting each construction step to `narrate`.
///
/// ```text
/// DecisionNode
/// ├── DecisionNode
/// │   ├── LeafNode -> 'Folha 2'
/// │   └── LeafNode -> 'Folha 3'
/// └── LeafNode -> 'Folha 1'
/// ```
pub fn build_sample_tree(mut narrate: impl FnMut(String)) -> DomainResult<Node> {
    let mut root = Node::decision();
    narrate(format!("Root node created: {root}"));

    let mut child = Node::decision();
    let leaf2 = Node::leaf("Folha 2");
    let leaf3 = Node::leaf("Folha 3");
    let added = format!("Added leaves {leaf2} and {leaf3} to the child decision node.");
    child.add_child(leaf2)?;
    child.add_child(leaf3)?;
    narrate(added);

    narrate(format!("Added child decision node: {child}"));
    root.add_child(child)?;

    let leaf1 = Node::leaf("Folha 1");
    narrate(format!("Added child leaf: {leaf1}"));
    root.add_child(leaf1)?;

    Ok(root)
}

/// The sample tree without narration.
pub fn sample_tree() -> DomainResult<Node> {
    build_sample_tree(|_| {})
}

/// Runs the selected demonstrations in order, separated by a rule line.
#[instrument(level = "debug", skip(out, settings))]
pub fn run<W: Write>(out: &mut W, settings: &Settings, demos: &[Demo]) -> CliResult<()> {
    for demo in demos {
        debug!("running {:?}", demo);
        match demo {
            Demo::State => state(out, settings)?,
            Demo::Composite => {
                composite(out, settings)?;
            }
            Demo::Iterator => iterator(out, settings)?,
            Demo::Visitor => visitor(out, settings)?,
        }
        output::line(out, "")?;
        output::line(out, &settings.rule())?;
        output::line(out, "")?;
    }
    Ok(())
}

/// Drives a builder through every phase, then advances once more on the
/// terminal phase.
pub fn state<W: Write>(out: &mut W, settings: &Settings) -> CliResult<()> {
    output::header(out, "State pattern demonstration:", settings.color)?;
    output::line(out, "")?;

    let mut builder = TreeBuilder::new();
    for _ in 0..3 {
        builder.advance();
    }
    for line in builder.take_narration() {
        output::line(out, &line)?;
    }
    Ok(())
}

pub fn composite<W: Write>(out: &mut W, settings: &Settings) -> CliResult<Node> {
    output::header(out, "Composite pattern demonstration:", settings.color)?;
    output::line(out, "")?;

    let mut lines = Vec::new();
    let root = build_sample_tree(|line| lines.push(line))?;
    for line in &lines {
        output::line(out, line)?;
    }

    if settings.render_tree {
        output::line(out, "")?;
        output::line(out, &root.accept(&mut RenderVisitor))?;
    }
    Ok(root)
}

pub fn iterator<W: Write>(out: &mut W, settings: &Settings) -> CliResult<()> {
    output::header(
        out,
        "Iterator pattern demonstration (pre-order walk):",
        settings.color,
    )?;
    output::line(out, "")?;

    let root = sample_tree()?;
    output::line(out, "Walking the tree in pre-order (root -> children):")?;
    for node in &root {
        output::item(out, &format!("Visiting: {node}"))?;
    }
    Ok(())
}

pub fn visitor<W: Write>(out: &mut W, settings: &Settings) -> CliResult<()> {
    output::header(out, "Visitor pattern demonstration:", settings.color)?;
    output::line(out, "")?;

    let root = sample_tree()?;

    output::line(out, "Running DepthVisitor")?;
    let mut depth_visitor = DepthVisitor::new();
    let depth = root.accept(&mut depth_visitor);
    for line in depth_visitor.take_narration() {
        output::line(out, &line)?;
    }
    output::result(out, "Depth", &depth, settings.color)?;
    output::line(out, "")?;

    output::line(out, "Running CountLeavesVisitor")?;
    let mut count_visitor = CountLeavesVisitor::new();
    let leaves = root.accept(&mut count_visitor);
    for line in count_visitor.take_narration() {
        output::line(out, &line)?;
    }
    output::result(out, "Leaves", &leaves, settings.color)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Settings {
        Settings {
            color: false,
            ..Default::default()
        }
    }

    #[test]
    fn given_sample_tree_when_built_then_narrates_four_steps() {
        let mut lines = Vec::new();
        let root = build_sample_tree(|line| lines.push(line)).unwrap();

        assert_eq!(root.node_count(), 5);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Root node created: DecisionNode");
        assert_eq!(lines[3], "Added child leaf: LeafNode -> 'Folha 1'");
    }

    #[test]
    fn given_render_setting_when_running_composite_then_prints_diagram() {
        let settings = Settings {
            render_tree: true,
            ..plain()
        };
        let mut out = Vec::new();
        composite(&mut out, &settings).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("└── LeafNode -> 'Folha 1'"));
    }
}
