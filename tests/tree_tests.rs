//! Integration tests for the zipper-based search tree, exercised only
//! through its public API.

use connect_four_mcts::{ConnectFourError, Node, Zipper};

fn opening_tree() -> Node {
    let mut root = Node::new(vec![]);
    root.children = (0..7).map(|c| Node::new(vec![c])).collect();
    root
}

#[test]
fn fresh_zipper_is_at_root() {
    let zipper = Zipper::new(opening_tree());
    assert!(zipper.at_root());
    assert_eq!(zipper.focus().state, Vec::<u8>::new());
}

#[test]
fn descending_and_ascending_is_a_no_op_on_the_whole_tree() {
    let original = opening_tree();
    let mut zipper = Zipper::new(original.clone());
    for i in 0..7 {
        zipper.down(i).unwrap();
        zipper.up().unwrap();
    }
    assert_eq!(zipper.focus(), &original);
}

#[test]
fn two_level_descent_reaches_the_expected_state() {
    let mut root = opening_tree();
    root.children[3].children = vec![Node::new(vec![3, 5])];
    let mut zipper = Zipper::new(root);
    zipper.down(3).unwrap();
    zipper.down(0).unwrap();
    assert_eq!(zipper.focus().state, vec![3, 5]);
    assert!(!zipper.at_root());
}

#[test]
fn updates_at_the_focus_survive_a_round_trip_to_a_sibling() {
    let mut zipper = Zipper::new(opening_tree());
    zipper.down(4).unwrap();
    zipper.update_focus(|n| n.visits = 10);
    zipper.up().unwrap();
    zipper.down(2).unwrap();
    assert_eq!(zipper.focus().visits, 0);
    zipper.up().unwrap();
    zipper.down(4).unwrap();
    assert_eq!(zipper.focus().visits, 10);
}

#[test]
fn out_of_bounds_descent_is_reported_as_an_error() {
    let mut zipper = Zipper::new(opening_tree());
    assert_eq!(
        zipper.down(7).unwrap_err(),
        ConnectFourError::OutOfBounds { index: 7, len: 7 }
    );
}
