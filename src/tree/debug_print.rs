//! Debug printer.

use core::fmt;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::direction::Direction;
use crate::id::NodeId;
use crate::tree::Tree;

/// Tree printer for debugging.
///
/// This is provided mainly for debugging purpose. Note that the output format
/// is not guaranteed to be stable, and any format changes won't be considered
/// as breaking changes.
pub struct DebugPrint<'a, T> {
    /// Tree to print.
    tree: &'a Tree<T>,
    /// Order of children in the output.
    direction: Direction,
}

impl<'a, T> DebugPrint<'a, T> {
    /// Creates a new `DebugPrint` object for the tree.
    #[inline]
    pub(super) fn new(tree: &'a Tree<T>, direction: Direction) -> Self {
        Self { tree, direction }
    }

    /// Writes the tree, using `write_value` for the values.
    fn write_with<F>(&self, f: &mut fmt::Formatter<'_>, write_value: F) -> fmt::Result
    where
        F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        let root = match self.tree.root_id() {
            Some(v) => v,
            None => return f.write_str("(empty)"),
        };
        write_value(self.value(root), f)?;

        // Each item is a child slot, the length of the prefix of its line,
        // and whether it is the last child.
        let mut prefix = String::new();
        let mut stack = vec![];
        self.push_children(&mut stack, root, 0);
        while let Some((node, prefix_len, is_last)) = stack.pop() {
            prefix.truncate(prefix_len);
            f.write_str("\n")?;
            f.write_str(&prefix)?;
            f.write_str(if is_last { "`-- " } else { "|-- " })?;
            let node = match node {
                Some(v) => v,
                None => {
                    f.write_str("(null)")?;
                    continue;
                }
            };
            write_value(self.value(node), f)?;
            prefix.push_str(if is_last { "    " } else { "|   " });
            self.push_children(&mut stack, node, prefix.len());
        }

        Ok(())
    }

    /// Pushes the child slots of `node` so that the first child is popped
    /// first. Leaves push nothing.
    fn push_children(
        &self,
        stack: &mut Vec<(Option<NodeId>, usize, bool)>,
        node: NodeId,
        prefix_len: usize,
    ) {
        let links = self.tree.hierarchy().live(node);
        let first = links.first_child(self.direction);
        let second = links.second_child(self.direction);
        if first.is_none() && second.is_none() {
            return;
        }
        stack.push((second, prefix_len, true));
        stack.push((first, prefix_len, false));
    }

    /// Returns the value of a node in the tree.
    fn value(&self, id: NodeId) -> &'a T {
        self.tree
            .value(id)
            .expect("[consistency] the node must be the part of the tree")
    }
}

impl<T: fmt::Display> fmt::Display for DebugPrint<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, fmt::Display::fmt)
    }
}

impl<T: fmt::Debug> fmt::Debug for DebugPrint<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, fmt::Debug::fmt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn empty_and_single() {
        assert_eq!(
            Tree::<i32>::new().debug_print(Direction::LeftFirst).to_string(),
            "(empty)"
        );
        assert_eq!(
            format!("{:?}", Tree::with_root("a").debug_print(Direction::LeftFirst)),
            "\"a\""
        );
    }

    #[test]
    fn right_first_lists_right_child_first() {
        let mut tree = Tree::with_root(0);
        let root = tree.root_id().unwrap();
        let l = tree.new_child(Direction::LeftFirst, root, 1).unwrap();
        tree.new_child(Direction::LeftFirst, l, 2).unwrap();
        tree.new_child(Direction::RightFirst, root, 3).unwrap();

        let expected = "\
0
|-- 3
`-- 1
    |-- (null)
    `-- 2";
        assert_eq!(tree.debug_print(Direction::RightFirst).to_string(), expected);
    }
}
