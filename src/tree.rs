//! Binary tree.

mod builder;
mod cursor;
mod debug_print;
mod iter;

use core::fmt;
use core::mem;

use alloc::vec;
use alloc::vec::Vec;

use crate::direction::{Direction, Side};
use crate::error::TreeError;
use crate::hierarchy::traverse::{first_node, next_node};
use crate::hierarchy::Hierarchy;
use crate::id::NodeId;
use crate::traverse::Traversal;

pub use self::builder::TreeBuilder;
pub use self::cursor::{Cursor, CursorMut};
pub use self::debug_print::DebugPrint;
pub use self::iter::Iter;

/// Binary tree.
///
/// The tree owns all of its nodes. Nodes are referred to by [`NodeId`] or
/// through [cursors][`Cursor`]. Subtrees move between trees by value, with
/// [`replace_child`][`Self::replace_child`] as the basic structural edit.
///
/// Two trees are equal when their left-first preorder sequences of values
/// are equal. Use [`shape_eq`][`Self::shape_eq`] to compare the positions of
/// the nodes as well.
pub struct Tree<T> {
    /// Links between nodes.
    hierarchy: Hierarchy,
    /// Data.
    ///
    /// `None` is used for vacant slots.
    data: Vec<Option<T>>,
    /// Root node.
    root: Option<NodeId>,
}

impl<T> Tree<T> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreena::Tree;
    ///
    /// let tree = Tree::<i32>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.depth(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree with a single root node.
    #[must_use]
    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        tree.set_root(value);
        tree
    }

    /// Returns true if the tree has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.hierarchy.len()
    }

    /// Removes all nodes.
    pub fn clear(&mut self) {
        self.hierarchy.clear();
        self.data.clear();
        self.root = None;
    }

    /// Returns the node ID of the root.
    #[inline]
    #[must_use]
    pub fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns a reference to the value of the node.
    ///
    /// Returns `None` if the node is not in this tree.
    #[inline]
    #[must_use]
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.data.get(id.index()).and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the value of the node.
    ///
    /// Returns `None` if the node is not in this tree.
    #[inline]
    #[must_use]
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.data.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Discards the current content and creates a single root node.
    ///
    /// Returns the node ID of the new root.
    pub fn set_root(&mut self, value: T) -> NodeId {
        if !self.is_empty() {
            tracing::trace!(discarded = self.len(), "resetting the root");
        }
        self.clear();
        let root = self.create_node(value);
        self.root = Some(root);
        root
    }

    /// Creates a node as the first child (per `direction`) of `at`.
    ///
    /// Returns the node ID of the new node.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] if `at` is not a node of
    /// this tree, or if the child slot is already occupied. The tree is left
    /// unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreena::{Direction, Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.set_root("root");
    /// let right = tree.new_child(Direction::RightFirst, root, "right")?;
    /// assert_eq!(tree.value(right), Some(&"right"));
    ///
    /// assert_eq!(
    ///     tree.new_child(Direction::RightFirst, root, "again"),
    ///     Err(TreeError::PreconditionViolated)
    /// );
    /// # Ok::<_, TreeError>(())
    /// ```
    pub fn new_child(
        &mut self,
        direction: Direction,
        at: NodeId,
        value: T,
    ) -> Result<NodeId, TreeError> {
        let links = self
            .hierarchy
            .links(at)
            .ok_or(TreeError::PreconditionViolated)?;
        if links.first_child(direction).is_some() {
            return Err(TreeError::PreconditionViolated);
        }
        let child = self.create_node(value);
        self.hierarchy.connect(at, direction.first(), child);
        tracing::trace!(parent = ?at, ?child, ?direction, "created a child");

        Ok(child)
    }

    /// Replaces the first child (per `direction`) of `at` with `subtree`.
    ///
    /// Whatever occupied the slot is detached and returned as an independent
    /// tree, which is empty if the slot was empty. An empty `subtree` leaves
    /// the slot empty, so this is also how a child is deleted.
    ///
    /// ```text
    /// Before:                      After:
    ///
    /// at                           at
    /// |-- (first) old              |-- (first) new
    /// |   `-- ...                  |   `-- ...
    /// `-- (second) ...             `-- (second) ...
    ///
    /// subtree: new                 returned: old
    ///          `-- ...                       `-- ...
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] if `at` is not a node of
    /// this tree. The tree is left unchanged in that case.
    pub fn replace_child(
        &mut self,
        direction: Direction,
        at: NodeId,
        subtree: Tree<T>,
    ) -> Result<Tree<T>, TreeError> {
        if !self.hierarchy.is_alive(at) {
            return Err(TreeError::PreconditionViolated);
        }
        Ok(self.transplant(at, direction.first(), subtree))
    }

    /// Replaces the subtree rooted at `at` with `subtree`, and returns the
    /// replaced subtree.
    ///
    /// If `at` is the root, the whole content is swapped.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] if `at` is not a node of
    /// this tree. The tree is left unchanged in that case.
    pub fn replace_subtree(&mut self, at: NodeId, subtree: Tree<T>) -> Result<Tree<T>, TreeError> {
        if !self.hierarchy.is_alive(at) {
            return Err(TreeError::PreconditionViolated);
        }
        match self.hierarchy.position(at) {
            Some((parent, side)) => Ok(self.transplant(parent, side, subtree)),
            None => {
                debug_assert_eq!(self.root, Some(at), "[consistency] a parentless node is the root");
                tracing::trace!(replaced = self.len(), "replacing the whole tree");
                Ok(mem::replace(self, subtree))
            }
        }
    }

    /// Detaches the subtree rooted at `at` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] if `at` is not a node of
    /// this tree.
    #[inline]
    pub fn remove(&mut self, at: NodeId) -> Result<Tree<T>, TreeError> {
        self.replace_subtree(at, Tree::new())
    }

    /// Moves the whole content out, leaving `self` empty.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Tree<T> {
        mem::take(self)
    }

    /// Returns the depth of the tree.
    ///
    /// An empty tree has depth 0 and a tree with only a root has depth 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreena::{Direction, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.depth(), 0);
    /// let root = tree.set_root(0);
    /// assert_eq!(tree.depth(), 1);
    /// let child = tree.new_child(Direction::LeftFirst, root, 1).unwrap();
    /// tree.new_child(Direction::RightFirst, child, 2).unwrap();
    /// assert_eq!(tree.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let root = match self.root {
            Some(v) => v,
            None => return 0,
        };
        let mut max = 0;
        let mut stack = vec![(root, 1)];
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);
            let links = self.hierarchy.live(id);
            for side in [Side::Left, Side::Right] {
                if let Some(child) = links.child(side) {
                    stack.push((child, depth + 1));
                }
            }
        }
        max
    }

    /// Returns true if both trees have the same shape and equal values at
    /// the same positions.
    #[must_use]
    pub fn shape_eq(&self, other: &Tree<T>) -> bool
    where
        T: PartialEq,
    {
        let (lhs, rhs) = match (self.root, other.root) {
            (None, None) => return true,
            (Some(lhs), Some(rhs)) => (lhs, rhs),
            _ => return false,
        };
        let mut stack = vec![(lhs, rhs)];
        while let Some((lhs, rhs)) = stack.pop() {
            if self.value(lhs) != other.value(rhs) {
                return false;
            }
            let (lhs_links, rhs_links) = (self.hierarchy.live(lhs), other.hierarchy.live(rhs));
            for side in [Side::Left, Side::Right] {
                match (lhs_links.child(side), rhs_links.child(side)) {
                    (None, None) => {}
                    (Some(lhs), Some(rhs)) => stack.push((lhs, rhs)),
                    _ => return false,
                }
            }
        }
        true
    }

    /// Returns a double-ended iterator over the values in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreena::{Direction, Order, Traversal, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.set_root('b');
    /// tree.new_child(Direction::LeftFirst, root, 'a').unwrap();
    /// tree.new_child(Direction::RightFirst, root, 'c').unwrap();
    ///
    /// let postorder = Traversal::new(Order::Postorder, Direction::LeftFirst);
    /// assert_eq!(tree.iter(postorder).collect::<String>(), "acb");
    /// assert_eq!(tree.iter(postorder).rev().collect::<String>(), "bca");
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self, traversal: Traversal) -> Iter<'_, T> {
        Iter::new(self, traversal)
    }

    /// Returns a cursor at the first node of the traversal.
    ///
    /// For an empty tree this is the end cursor.
    #[must_use]
    pub fn begin(&self, traversal: Traversal) -> Cursor<'_, T> {
        Cursor::new(self, self.first_of(traversal), traversal)
    }

    /// Returns the end cursor.
    #[inline]
    #[must_use]
    pub fn end(&self, traversal: Traversal) -> Cursor<'_, T> {
        Cursor::new(self, None, traversal)
    }

    /// Returns a cursor at the root, or the end cursor for an empty tree.
    #[inline]
    #[must_use]
    pub fn root(&self, traversal: Traversal) -> Cursor<'_, T> {
        Cursor::new(self, self.root, traversal)
    }

    /// Returns a cursor at the given node.
    ///
    /// Returns `None` if the node is not in this tree.
    #[must_use]
    pub fn cursor(&self, id: NodeId, traversal: Traversal) -> Option<Cursor<'_, T>> {
        self.hierarchy
            .is_alive(id)
            .then(|| Cursor::new(self, Some(id), traversal))
    }

    /// Returns a mutable cursor at the first node of the traversal.
    #[must_use]
    pub fn begin_mut(&mut self, traversal: Traversal) -> CursorMut<'_, T> {
        let first = self.first_of(traversal);
        CursorMut::new(self, first, traversal)
    }

    /// Returns a mutable cursor at the root.
    #[must_use]
    pub fn root_mut(&mut self, traversal: Traversal) -> CursorMut<'_, T> {
        let root = self.root;
        CursorMut::new(self, root, traversal)
    }

    /// Returns a mutable cursor at the given node.
    ///
    /// Returns `None` if the node is not in this tree.
    #[must_use]
    pub fn cursor_mut(&mut self, id: NodeId, traversal: Traversal) -> Option<CursorMut<'_, T>> {
        if !self.hierarchy.is_alive(id) {
            return None;
        }
        Some(CursorMut::new(self, Some(id), traversal))
    }

    /// Returns an object which prints the tree in human-readable format.
    ///
    /// Children are listed first-child first per `direction`, and a missing
    /// child next to a present one is shown as `(null)`.
    ///
    /// The output format is not guaranteed to be stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreena::{Direction, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.set_root("root");
    /// let left = tree.new_child(Direction::LeftFirst, root, "0").unwrap();
    /// tree.new_child(Direction::RightFirst, left, "0-1").unwrap();
    /// tree.new_child(Direction::RightFirst, root, "1").unwrap();
    ///
    /// let expected = "\
    /// root
    /// |-- 0
    /// |   |-- (null)
    /// |   `-- 0-1
    /// `-- 1";
    /// assert_eq!(tree.debug_print(Direction::LeftFirst).to_string(), expected);
    /// ```
    #[inline]
    #[must_use]
    pub fn debug_print(&self, direction: Direction) -> DebugPrint<'_, T> {
        DebugPrint::new(self, direction)
    }

    /// Returns the links storage.
    #[inline]
    #[must_use]
    pub(crate) fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// Returns the first node of the traversal.
    fn first_of(&self, traversal: Traversal) -> Option<NodeId> {
        self.root
            .map(|root| first_node(&self.hierarchy, traversal, root))
    }

    /// Returns the node after `node`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] for the end position.
    pub(crate) fn step_forward(
        &self,
        traversal: Traversal,
        node: Option<NodeId>,
    ) -> Result<Option<NodeId>, TreeError> {
        let node = node.ok_or(TreeError::PreconditionViolated)?;
        Ok(next_node(&self.hierarchy, traversal, node))
    }

    /// Returns the node before `node`, the last node for the end position.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] if `node` is the first
    /// node or the tree is empty.
    pub(crate) fn step_backward(
        &self,
        traversal: Traversal,
        node: Option<NodeId>,
    ) -> Result<NodeId, TreeError> {
        let inverse = traversal.inverse();
        let prev = match node {
            None => self.first_of(inverse),
            Some(node) => next_node(&self.hierarchy, inverse, node),
        };
        prev.ok_or(TreeError::PreconditionViolated)
    }

    /// Returns the child of `node` at `side`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] for the end position.
    pub(crate) fn child_of(&self, node: Option<NodeId>, side: Side) -> Result<Option<NodeId>, TreeError> {
        let node = node.ok_or(TreeError::PreconditionViolated)?;
        Ok(self.hierarchy.live(node).child(side))
    }

    /// Returns the parent of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NoParent`] for the root and the end position.
    pub(crate) fn parent_of(&self, node: Option<NodeId>) -> Result<NodeId, TreeError> {
        node.and_then(|node| self.hierarchy.live(node).parent())
            .ok_or(TreeError::NoParent)
    }

    /// Allocates a detached node holding `value`.
    fn create_node(&mut self, value: T) -> NodeId {
        let id = self.hierarchy.allocate();
        match id.index().cmp(&self.data.len()) {
            core::cmp::Ordering::Less => {
                debug_assert!(
                    self.data[id.index()].is_none(),
                    "[consistency] reused slots must be vacant"
                );
                self.data[id.index()] = Some(value);
            }
            core::cmp::Ordering::Equal => self.data.push(Some(value)),
            core::cmp::Ordering::Greater => {
                unreachable!("[consistency] node ID must be able to be used as an index for the vec")
            }
        }
        id
    }

    /// Swaps the `side` child of the live node `parent` with the root of
    /// `subtree`, and returns the previous child as a tree.
    fn transplant(&mut self, parent: NodeId, side: Side, subtree: Tree<T>) -> Tree<T> {
        let detached = match self.hierarchy.disconnect(parent, side) {
            Some(old) => {
                let mut detached = Tree::new();
                let top = move_subtree(self, old, &mut detached);
                detached.root = Some(top);
                detached
            }
            None => Tree::new(),
        };
        let mut subtree = subtree;
        if let Some(top) = subtree.root.take() {
            let new_top = move_subtree(&mut subtree, top, self);
            self.hierarchy.connect(parent, side, new_top);
        }
        tracing::trace!(?parent, ?side, detached = detached.len(), "transplanted a subtree");

        detached
    }
}

/// Moves the detached subtree rooted at `top` from one arena to another.
///
/// Returns the node ID of `top` in the destination, where it is a detached
/// node too. Slots in the source are released.
fn move_subtree<T>(src: &mut Tree<T>, top: NodeId, dest: &mut Tree<T>) -> NodeId {
    let new_top = {
        let value = src.take_data(top);
        dest.create_node(value)
    };
    let mut stack = vec![(top, new_top)];
    while let Some((old, new)) = stack.pop() {
        for side in [Side::Left, Side::Right] {
            if let Some(old_child) = src.hierarchy.disconnect(old, side) {
                let value = src.take_data(old_child);
                let new_child = dest.create_node(value);
                dest.hierarchy.connect(new, side, new_child);
                stack.push((old_child, new_child));
            }
        }
        src.hierarchy.release(old);
    }
    new_top
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self {
            hierarchy: Default::default(),
            data: Default::default(),
            root: None,
        }
    }
}

impl<T: Clone> Clone for Tree<T> {
    /// Rebuilds the nodes by a preorder walk, so the clone has a compact arena.
    fn clone(&self) -> Self {
        let mut cloned = Tree::new();
        let root = match self.root {
            Some(v) => v,
            None => return cloned,
        };
        let new_root = cloned.create_node(self.data_of(root).clone());
        cloned.root = Some(new_root);
        let mut stack = vec![(root, new_root)];
        while let Some((old, new)) = stack.pop() {
            let links = self.hierarchy.live(old);
            // Push the right child first so that the left subtree is copied first.
            for side in [Side::Right, Side::Left] {
                if let Some(old_child) = links.child(side) {
                    let new_child = cloned.create_node(self.data_of(old_child).clone());
                    cloned.hierarchy.connect(new, side, new_child);
                    stack.push((old_child, new_child));
                }
            }
        }
        cloned
    }
}

impl<T> Tree<T> {
    /// Returns the value of a node known to be alive.
    fn data_of(&self, id: NodeId) -> &T {
        self.value(id)
            .expect("[consistency] live nodes must have data")
    }

    /// Moves the value out of a node known to be alive.
    fn take_data(&mut self, id: NodeId) -> T {
        self.data[id.index()]
            .take()
            .expect("[consistency] live nodes must have data")
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter(Traversal::PREORDER)
            .eq(other.iter(Traversal::PREORDER))
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter(Traversal::PREORDER))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::traverse::Order;

    /// Builds:
    ///
    /// ```text
    /// root
    /// |-- l
    /// |   `-- (right) lr
    /// `-- r
    /// ```
    fn sample() -> (Tree<&'static str>, NodeId, NodeId) {
        let mut tree = Tree::new();
        let root = tree.set_root("root");
        let left = tree.new_child(Direction::LeftFirst, root, "l").unwrap();
        tree.new_child(Direction::RightFirst, left, "lr").unwrap();
        tree.new_child(Direction::RightFirst, root, "r").unwrap();
        (tree, root, left)
    }

    #[test]
    fn new_child_rejects_occupied_slot() {
        let (mut tree, root, _) = sample();
        let before = tree.clone();
        assert_eq!(
            tree.new_child(Direction::LeftFirst, root, "x"),
            Err(TreeError::PreconditionViolated)
        );
        assert!(tree.shape_eq(&before));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn new_child_rejects_foreign_node() {
        let (mut tree, _, _) = sample();
        let foreign = NodeId::from_index(100).unwrap();
        assert_eq!(
            tree.new_child(Direction::LeftFirst, foreign, "x"),
            Err(TreeError::PreconditionViolated)
        );
    }

    #[test_log::test]
    fn replace_child_moves_subtrees() {
        let (mut tree, root, _) = sample();
        let mut donor = Tree::with_root("new");
        let donor_root = donor.root_id().unwrap();
        donor
            .new_child(Direction::LeftFirst, donor_root, "new-l")
            .unwrap();

        let detached = tree
            .replace_child(Direction::LeftFirst, root, donor)
            .unwrap();

        assert_eq!(
            detached.iter(Traversal::PREORDER).copied().collect::<Vec<_>>(),
            ["l", "lr"]
        );
        assert_eq!(
            tree.iter(Traversal::PREORDER).copied().collect::<Vec<_>>(),
            ["root", "new", "new-l", "r"]
        );
        assert_eq!(tree.len(), 4);
        assert_eq!(detached.len(), 2);

        let new_top = tree.hierarchy().live(root).child(Side::Left).unwrap();
        assert_eq!(tree.hierarchy().live(new_top).parent(), Some(root));
        assert_eq!(detached.hierarchy().live(detached.root_id().unwrap()).parent(), None);
    }

    #[test]
    fn replace_child_with_empty_is_idempotent() {
        let (mut tree, root, _) = sample();
        let first = tree
            .replace_child(Direction::RightFirst, root, Tree::new())
            .unwrap();
        assert_eq!(first.iter(Traversal::PREORDER).copied().collect::<Vec<_>>(), ["r"]);
        let after_first = tree.clone();

        let second = tree
            .replace_child(Direction::RightFirst, root, Tree::new())
            .unwrap();
        assert!(second.is_empty());
        assert!(tree.shape_eq(&after_first));
    }

    #[test]
    fn replace_subtree_at_root_swaps_everything() {
        let (mut tree, root, _) = sample();
        let old = tree.replace_subtree(root, Tree::with_root("solo")).unwrap();
        assert_eq!(old.len(), 4);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn remove_inner_node() {
        let (mut tree, _, left) = sample();
        let removed = tree.remove(left).unwrap();
        assert_eq!(removed.depth(), 2);
        assert_eq!(
            tree.iter(Traversal::PREORDER).copied().collect::<Vec<_>>(),
            ["root", "r"]
        );
        assert!(tree.value(left).is_none());
        assert_eq!(tree.remove(left).err(), Some(TreeError::PreconditionViolated));
    }

    #[test]
    fn vacated_slots_are_reused() {
        let (mut tree, root, left) = sample();
        tree.remove(left).unwrap();
        let capacity = tree.data.len();
        tree.new_child(Direction::LeftFirst, root, "again").unwrap();
        assert_eq!(tree.data.len(), capacity);
    }

    #[test]
    fn depth_boundaries() {
        assert_eq!(Tree::<()>::new().depth(), 0);
        assert_eq!(Tree::with_root(()).depth(), 1);
        assert_eq!(sample().0.depth(), 3);
    }

    #[test]
    fn equality_is_by_preorder_values() {
        let (tree, _, _) = sample();
        let mut mirrored = Tree::new();
        let root = mirrored.set_root("root");
        let l = mirrored.new_child(Direction::LeftFirst, root, "l").unwrap();
        // Same preorder sequence, different shape.
        mirrored.new_child(Direction::LeftFirst, l, "lr").unwrap();
        mirrored.new_child(Direction::RightFirst, root, "r").unwrap();

        assert_eq!(tree, mirrored);
        assert!(!tree.shape_eq(&mirrored));
        assert_ne!(tree, Tree::with_root("root"));
    }

    #[test]
    fn clone_is_compact_and_equal() {
        let (mut tree, _, left) = sample();
        tree.remove(left).unwrap();
        let cloned = tree.clone();
        assert!(cloned.shape_eq(&tree));
        assert_eq!(cloned.data.len(), cloned.len());
    }

    #[test]
    fn cursors_on_empty_tree() {
        let tree = Tree::<i32>::new();
        for traversal in Traversal::all() {
            assert_eq!(tree.begin(traversal), tree.end(traversal));
            assert!(tree.root(traversal).is_end());
        }
        let mut end = tree.end(Traversal::new(Order::Inorder, Direction::LeftFirst));
        assert_eq!(end.retreat(), Err(TreeError::PreconditionViolated));
    }
}
