//! Tests for the depth and leaf-count visitors

use rstest::rstest;

use dtree::demo::sample_tree;
use dtree::domain::{
    CountLeavesVisitor, DecisionNode, DepthVisitor, LeafLabelsVisitor, LeafNode, Node,
    NodeKind, NodeVisitor,
};
use dtree::util::testing;

fn depth(node: &Node) -> usize {
    node.accept(&mut DepthVisitor::new())
}

fn leaves(node: &Node) -> usize {
    node.accept(&mut CountLeavesVisitor::new())
}

//        root
//       /    \
//      a      e
//     / \
//    b   c
//        |
//        d
fn uneven() -> Node {
    let c = Node::decision().with_child(Node::leaf("d")).unwrap();
    let a = Node::decision()
        .with_child(Node::leaf("b"))
        .and_then(|n| n.with_child(c))
        .unwrap();
    Node::decision()
        .with_child(a)
        .and_then(|n| n.with_child(Node::leaf("e")))
        .unwrap()
}

#[test]
fn given_sample_tree_when_visiting_then_depth_three_and_three_leaves() {
    testing::init_test_setup();
    let root = sample_tree().unwrap();

    assert_eq!(depth(&root), 3);
    assert_eq!(leaves(&root), 3);
}

#[rstest]
#[case::single_leaf(Node::leaf("x"), 1, 1)]
#[case::empty_decision(Node::decision(), 1, 0)]
#[case::uneven(uneven(), 4, 3)]
fn given_tree_when_visiting_then_expected_depth_and_leaves(
    #[case] root: Node,
    #[case] expected_depth: usize,
    #[case] expected_leaves: usize,
) {
    assert_eq!(depth(&root), expected_depth);
    assert_eq!(leaves(&root), expected_leaves);
}

#[test]
fn given_any_tree_when_measuring_depth_then_one_more_than_deepest_child() {
    for root in [sample_tree().unwrap(), uneven()] {
        let deepest_child = root
            .children()
            .unwrap()
            .iter()
            .map(depth)
            .max()
            .unwrap_or(0);
        assert_eq!(depth(&root), 1 + deepest_child);
    }
}

#[test]
fn given_any_tree_when_counting_leaves_then_matches_leaf_nodes_in_walk() {
    for root in [sample_tree().unwrap(), uneven()] {
        let walked = root.iter().filter(|n| n.kind() == NodeKind::Leaf).count();
        assert_eq!(leaves(&root), walked);
    }
}

#[test]
fn given_sample_tree_when_collecting_labels_then_left_to_right() {
    let root = sample_tree().unwrap();
    assert_eq!(
        root.accept(&mut LeafLabelsVisitor),
        vec!["Folha 2", "Folha 3", "Folha 1"]
    );
}

#[test]
fn given_count_visitor_when_visiting_sample_then_narrates_every_node() {
    let root = sample_tree().unwrap();
    let mut visitor = CountLeavesVisitor::new();
    root.accept(&mut visitor);

    let narration = visitor.narration();
    assert_eq!(narration.len(), 5);
    assert_eq!(
        narration[0],
        "CountLeavesVisitor: walking through DecisionNode looking for leaves."
    );
    assert_eq!(
        narration[4],
        "CountLeavesVisitor: found leaf LeafNode -> 'Folha 1'."
    );
}

/// A visitor defined outside the crate needs no change to the node types.
struct DecisionCounter;

impl NodeVisitor for DecisionCounter {
    type Output = usize;

    fn visit_decision(&mut self, node: &DecisionNode) -> usize {
        1 + node
            .children()
            .iter()
            .map(|child| child.accept(&mut *self))
            .sum::<usize>()
    }

    fn visit_leaf(&mut self, _node: &LeafNode) -> usize {
        0
    }
}

#[test]
fn given_external_visitor_when_accepted_then_dispatches_by_variant() {
    let root = sample_tree().unwrap();
    assert_eq!(root.accept(&mut DecisionCounter), 2);
    assert_eq!(Node::leaf("x").accept(&mut DecisionCounter), 0);
}
