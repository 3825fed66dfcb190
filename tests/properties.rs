//! Property-based tests over randomly built trees.

use bitreena::text::{parse_bare, parse_keyed, render_bare, render_keyed};
use bitreena::{Direction, Traversal, Tree};
use proptest::prelude::*;
use proptest::sample::Index;

/// Builds a tree by attaching each node under a random existing node.
///
/// The value of a node is `value(n)`, where `n` is the number of nodes
/// already in the tree. Insertions into occupied slots are skipped.
fn build<T>(ops: Vec<(Index, bool)>, mut value: impl FnMut(usize) -> T) -> Tree<T> {
    let mut tree = Tree::new();
    let mut ids = Vec::new();
    for (at, right) in ops {
        if ids.is_empty() {
            ids.push(tree.set_root(value(0)));
            continue;
        }
        let direction = if right {
            Direction::RightFirst
        } else {
            Direction::LeftFirst
        };
        let parent = ids[at.index(ids.len())];
        if let Ok(id) = tree.new_child(direction, parent, value(ids.len())) {
            ids.push(id);
        }
    }
    tree
}

/// Builds a tree whose nodes take `values` in insertion order.
fn build_from<T: Clone>(ops: Vec<(Index, bool, T)>) -> Tree<T> {
    let (shape, values): (Vec<_>, Vec<_>) = ops
        .into_iter()
        .map(|(at, right, value)| ((at, right), value))
        .unzip();
    build(shape, |n| values[n].clone())
}

/// Printable ASCII, including delimiters and spaces.
fn text_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,8}"
}

fn text_tree_strategy() -> impl Strategy<Value = Tree<String>> {
    prop::collection::vec((any::<Index>(), any::<bool>(), text_strategy()), 0..40)
        .prop_map(build_from)
}

fn keyed_tree_strategy() -> impl Strategy<Value = Tree<(String, i64)>> {
    prop::collection::vec(
        (any::<Index>(), any::<bool>(), (text_strategy(), any::<i64>())),
        0..40,
    )
    .prop_map(build_from)
}

/// Tree whose values are `0..len` in insertion order.
fn numbered_tree_strategy() -> impl Strategy<Value = Tree<usize>> {
    prop::collection::vec((any::<Index>(), any::<bool>()), 0..40)
        .prop_map(|ops| build(ops, |n| n))
}

proptest! {
    #[test]
    fn bare_round_trip(tree in text_tree_strategy()) {
        let text = render_bare(&tree);
        let parsed = parse_bare::<String>(&text).expect("rendered text must parse");
        prop_assert!(parsed.shape_eq(&tree), "{}", text);
    }

    #[test]
    fn keyed_round_trip(tree in keyed_tree_strategy()) {
        let text = render_keyed(&tree);
        let parsed = parse_keyed::<String, i64>(&text).expect("rendered text must parse");
        prop_assert!(parsed.shape_eq(&tree), "{}", text);
        prop_assert_eq!(render_keyed(&parsed), text);
    }

    #[test]
    fn traversals_visit_every_node_once(tree in numbered_tree_strategy()) {
        for traversal in Traversal::all() {
            let mut seen = tree.iter(traversal).copied().collect::<Vec<_>>();
            prop_assert_eq!(seen.len(), tree.len());
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..tree.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn backward_is_inverse_forward(tree in numbered_tree_strategy()) {
        for traversal in Traversal::all() {
            let backward = tree.iter(traversal).rev().collect::<Vec<_>>();
            let inverse = tree.iter(traversal.inverse()).collect::<Vec<_>>();
            prop_assert_eq!(backward, inverse);
        }
    }

    #[test]
    fn retreat_undoes_advance(tree in numbered_tree_strategy()) {
        for traversal in Traversal::all() {
            let mut cursor = tree.begin(traversal);
            while !cursor.is_end() {
                let mut probe = cursor;
                probe.advance().expect("not at the end");
                probe.retreat().expect("there is a node before");
                prop_assert_eq!(probe, cursor);
                cursor.advance().expect("not at the end");
            }
            let mut last = tree.end(traversal);
            if tree.is_empty() {
                prop_assert!(last.retreat().is_err());
            } else {
                last.retreat().expect("a non-empty tree has a last node");
                prop_assert_eq!(last.value(), tree.iter(traversal).next_back());
            }
        }
    }

    #[test]
    fn clone_keeps_shape(tree in numbered_tree_strategy()) {
        let cloned = tree.clone();
        prop_assert!(cloned.shape_eq(&tree));
        prop_assert_eq!(cloned.depth(), tree.depth());
    }
}
