//! Tree builder.

use crate::direction::Direction;
use crate::id::NodeId;
use crate::tree::Tree;

/// Tree builder.
///
/// `TreeBuilder` remembers "the current node".
///
/// * [`TreeBuilder::first()`][`TreeBuilder::first`] creates the first child
///   (per the builder's direction) of the current node.
/// * [`TreeBuilder::second()`][`TreeBuilder::second`] creates the second
///   child of the current node.
/// * [`TreeBuilder::parent()`][`TreeBuilder::parent`] makes the parent the new current node.
///
/// Creating a child makes it the current node.
///
/// # Examples
///
/// ```
/// use bitreena::{Direction, Traversal, Tree, TreeBuilder};
///
/// let mut tree = Tree::new();
/// let root = TreeBuilder::new(&mut tree, Direction::LeftFirst, "root")
///     .first("0")
///     .first("0-0")
///     .parent()
///     .second("0-1")
///     .parent()
///     .parent()
///     .second("1")
///     .root_id();
///
/// // Tree:
/// //  root
/// //  |-- 0
/// //  |   |-- 0-0
/// //  |   `-- 0-1
/// //  `-- 1
///
/// assert_eq!(tree.root_id(), Some(root));
/// assert_eq!(
///     tree.iter(Traversal::INORDER).copied().collect::<Vec<_>>(),
///     ["0-0", "0", "0-1", "root", "1"]
/// );
/// ```
#[derive(Debug)]
pub struct TreeBuilder<'a, T> {
    /// Target tree.
    tree: &'a mut Tree<T>,
    /// Which child slot is "first".
    direction: Direction,
    /// Node ID of the root node.
    root: NodeId,
    /// Current node.
    current: NodeId,
}

impl<'a, T> TreeBuilder<'a, T> {
    /// Replaces the content of the tree with a root node, and creates the
    /// builder for it.
    pub fn new(tree: &'a mut Tree<T>, direction: Direction, root_data: T) -> Self {
        let root = tree.set_root(root_data);
        Self {
            tree,
            direction,
            root,
            current: root,
        }
    }

    /// Returns a reference to the tree.
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &Tree<T> {
        self.tree
    }

    /// Returns the node ID of the root node.
    #[inline]
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Returns the node ID of the current node.
    #[inline]
    #[must_use]
    pub fn current_id(&self) -> NodeId {
        self.current
    }

    /// Creates the first child of the current node, and changes the current
    /// node to it.
    ///
    /// # Panics
    ///
    /// Panics if the current node already has the first child.
    pub fn first(&mut self, data: T) -> &mut Self {
        self.create_child(self.direction, data)
    }

    /// Creates the second child of the current node, and changes the current
    /// node to it.
    ///
    /// # Panics
    ///
    /// Panics if the current node already has the second child.
    pub fn second(&mut self, data: T) -> &mut Self {
        self.create_child(self.direction.inverse(), data)
    }

    /// Tries to change the current node to the parent of the current node.
    pub fn try_parent(&mut self) -> Option<&mut Self> {
        let parent = self.tree.parent_of(Some(self.current)).ok()?;
        self.current = parent;
        Some(self)
    }

    /// Changes the current node to the parent of the current node.
    ///
    /// # Panics
    ///
    /// Panics if the current node is the root of the tree.
    pub fn parent(&mut self) -> &mut Self {
        let parent = self
            .tree
            .parent_of(Some(self.current))
            .expect("[precondition] the current node should not be the root");
        self.current = parent;
        self
    }

    /// Creates the first child per `direction` of the current node.
    fn create_child(&mut self, direction: Direction, data: T) -> &mut Self {
        let new = self
            .tree
            .new_child(direction, self.current, data)
            .expect("[precondition] the child slot of the current node should be empty");
        self.current = new;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec::Vec;

    use crate::traverse::Traversal;

    #[test]
    fn right_first_builder_mirrors_slots() {
        let mut tree = Tree::new();
        TreeBuilder::new(&mut tree, Direction::RightFirst, 'r')
            .first('a')
            .parent()
            .second('b');
        assert_eq!(
            tree.iter(Traversal::INORDER).collect::<Vec<_>>(),
            [&'b', &'r', &'a']
        );
    }

    #[test]
    fn try_parent_stops_at_root() {
        let mut tree = Tree::new();
        let mut builder = TreeBuilder::new(&mut tree, Direction::LeftFirst, 0);
        assert!(builder.try_parent().is_none());
        builder.first(1);
        let root = builder.root_id();
        let current = builder.try_parent().map(|b| b.current_id());
        assert_eq!(current, Some(root));
    }

    #[test]
    #[should_panic(expected = "[precondition] the child slot of the current node should be empty")]
    fn occupied_slot_panics() {
        let mut tree = Tree::new();
        TreeBuilder::new(&mut tree, Direction::LeftFirst, 0)
            .first(1)
            .parent()
            .first(2);
    }
}
