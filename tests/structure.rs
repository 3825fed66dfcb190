//! Tests for structural edits and the text format together.

use bitreena::text::{parse_bare, parse_keyed, render_bare, render_keyed};
use bitreena::{Direction, Traversal, Tree, TreeError};

const SAMPLE: &str = "[(root,1),(left,2),(left-left,3),null,null,null,(right,4),null,null]";

fn preorder_keys(tree: &Tree<(String, i32)>) -> Vec<&str> {
    tree.iter(Traversal::PREORDER)
        .map(|(key, _)| key.as_str())
        .collect()
}

#[test]
fn graft_parsed_subtree() {
    let mut tree = parse_keyed::<String, i32>(SAMPLE).expect("valid input");
    let donor = parse_keyed::<String, i32>("[(new,5),null,(new-right,6),null,null]")
        .expect("valid input");
    let left = tree
        .root(Traversal::PREORDER)
        .first_child(Direction::LeftFirst)
        .ok()
        .and_then(|c| c.id())
        .expect("the root has a left child");

    let detached = tree
        .replace_child(Direction::RightFirst, left, donor)
        .expect("left is alive");
    assert!(detached.is_empty());
    assert_eq!(
        render_keyed(&tree),
        "[(root,1),(left,2),(left-left,3),null,null,(new,5),null,(new-right,6),null,null,(right,4),null,null]"
    );
    assert_eq!(tree.depth(), 4);
    assert_eq!(tree.len(), 6);
}

#[test]
fn detach_and_reattach_elsewhere() {
    let mut tree = parse_keyed::<String, i32>(SAMPLE).expect("valid input");
    let root = tree.root_id().expect("not empty");

    let left = tree
        .replace_child(Direction::LeftFirst, root, Tree::new())
        .expect("root is alive");
    assert_eq!(preorder_keys(&left), ["left", "left-left"]);
    assert_eq!(preorder_keys(&tree), ["root", "right"]);

    let right = tree
        .cursor(root, Traversal::PREORDER)
        .and_then(|c| c.second_child(Direction::LeftFirst).ok())
        .and_then(|c| c.id())
        .expect("the root has a right child");
    let previous = tree
        .replace_child(Direction::LeftFirst, right, left)
        .expect("right is alive");
    assert!(previous.is_empty());
    assert_eq!(
        render_keyed(&tree),
        "[(root,1),null,(right,4),(left,2),(left-left,3),null,null,null,null]"
    );
}

#[test]
fn replace_child_is_idempotent_for_empty() {
    let mut tree = parse_keyed::<String, i32>(SAMPLE).expect("valid input");
    let root = tree.root_id().expect("not empty");

    let first = tree
        .replace_child(Direction::RightFirst, root, Tree::new())
        .expect("root is alive");
    assert_eq!(preorder_keys(&first), ["right"]);
    let snapshot = tree.clone();

    let second = tree
        .replace_child(Direction::RightFirst, root, Tree::new())
        .expect("root is alive");
    assert!(second.is_empty());
    assert!(tree.shape_eq(&snapshot));
}

#[test]
fn stale_ids_are_rejected() {
    let mut tree = parse_keyed::<String, i32>(SAMPLE).expect("valid input");
    let root = tree.root_id().expect("not empty");
    let left = tree
        .cursor(root, Traversal::PREORDER)
        .and_then(|c| c.first_child(Direction::LeftFirst).ok())
        .and_then(|c| c.id())
        .expect("the root has a left child");
    let left_left = tree
        .cursor(left, Traversal::PREORDER)
        .and_then(|c| c.first_child(Direction::LeftFirst).ok())
        .and_then(|c| c.id())
        .expect("left has a left child");

    let removed = tree.remove(left).expect("left is alive");
    assert_eq!(removed.len(), 2);
    assert_eq!(
        tree.new_child(Direction::LeftFirst, left_left, (String::new(), 0)),
        Err(TreeError::PreconditionViolated)
    );
    assert!(tree.cursor(left_left, Traversal::PREORDER).is_none());
}

#[test]
fn set_root_discards_content() {
    let mut tree = parse_bare::<i64>("[1,2,null,null,3,null,null]").expect("valid input");
    assert_eq!(tree.len(), 3);
    tree.set_root(10);
    assert_eq!(tree.len(), 1);
    assert_eq!(render_bare(&tree), "[10,null,null]");
}

#[test]
fn taken_tree_leaves_empty() {
    let mut tree = parse_bare::<i64>("[1,2,null,null,3,null,null]").expect("valid input");
    let taken = tree.take();
    assert!(tree.is_empty());
    assert_eq!(render_bare(&tree), "[null]");
    assert_eq!(taken.iter(Traversal::INORDER).copied().collect::<Vec<_>>(), [2, 1, 3]);
}
