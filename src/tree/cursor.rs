//! Cursors.

use core::fmt;
use core::ptr;

use crate::direction::Direction;
use crate::error::TreeError;
use crate::id::NodeId;
use crate::traverse::Traversal;
use crate::tree::Tree;

/// Position in a tree, bound to a traversal.
///
/// A cursor either refers to a node or is the end position. The end
/// position comes after the last node of the traversal; an empty tree has
/// only the end position.
///
/// Two cursors are equal when they refer to the same tree object and the
/// same position, regardless of their traversals.
pub struct Cursor<'a, T> {
    /// Tree.
    tree: &'a Tree<T>,
    /// Current node, `None` for the end position.
    node: Option<NodeId>,
    /// Traversal used by `advance` and `retreat`.
    traversal: Traversal,
}

impl<'a, T> Cursor<'a, T> {
    /// Creates a new cursor.
    #[inline]
    #[must_use]
    pub(super) fn new(tree: &'a Tree<T>, node: Option<NodeId>, traversal: Traversal) -> Self {
        debug_assert!(
            node.map_or(true, |id| tree.hierarchy().is_alive(id)),
            "[precondition] the node must be alive"
        );
        Self {
            tree,
            node,
            traversal,
        }
    }

    /// Returns the node ID, or `None` for the end position.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<NodeId> {
        self.node
    }

    /// Returns true if the cursor is at the end position.
    #[inline]
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns the value of the node, or `None` for the end position.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&'a T> {
        self.node.and_then(|id| self.tree.value(id))
    }

    /// Returns the tree.
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &'a Tree<T> {
        self.tree
    }

    /// Returns the traversal.
    #[inline]
    #[must_use]
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Returns the cursor at the same position with another traversal.
    #[inline]
    #[must_use]
    pub fn with_traversal(self, traversal: Traversal) -> Self {
        Self { traversal, ..self }
    }

    /// Moves to the next node of the traversal, or to the end position after
    /// the last node.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreena::{Direction, Traversal, Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.set_root(1);
    /// tree.new_child(Direction::RightFirst, root, 2)?;
    ///
    /// let mut cursor = tree.begin(Traversal::PREORDER);
    /// assert_eq!(cursor.value(), Some(&1));
    /// cursor.advance()?;
    /// assert_eq!(cursor.value(), Some(&2));
    /// cursor.advance()?;
    /// assert!(cursor.is_end());
    /// assert_eq!(cursor.advance(), Err(TreeError::PreconditionViolated));
    /// # Ok::<_, TreeError>(())
    /// ```
    pub fn advance(&mut self) -> Result<(), TreeError> {
        self.node = self.tree.step_forward(self.traversal, self.node)?;
        Ok(())
    }

    /// Moves to the previous node of the traversal. From the end position,
    /// moves to the last node.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] at the first node, or at
    /// the end position of an empty tree. The cursor is left unchanged.
    pub fn retreat(&mut self) -> Result<(), TreeError> {
        self.node = Some(self.tree.step_backward(self.traversal, self.node)?);
        Ok(())
    }

    /// Returns the cursor at the first child per `direction`.
    ///
    /// The result is the end position if the child is absent.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] at the end position.
    pub fn first_child(&self, direction: Direction) -> Result<Self, TreeError> {
        let child = self.tree.child_of(self.node, direction.first())?;
        Ok(Self::new(self.tree, child, self.traversal))
    }

    /// Returns the cursor at the second child per `direction`.
    ///
    /// The result is the end position if the child is absent.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] at the end position.
    pub fn second_child(&self, direction: Direction) -> Result<Self, TreeError> {
        let child = self.tree.child_of(self.node, direction.second())?;
        Ok(Self::new(self.tree, child, self.traversal))
    }

    /// Returns the cursor at the parent.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NoParent`] at the root or the end position.
    pub fn parent(&self) -> Result<Self, TreeError> {
        let parent = self.tree.parent_of(self.node)?;
        Ok(Self::new(self.tree, Some(parent), self.traversal))
    }
}

impl<T> Clone for Cursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("node", &self.node)
            .field("traversal", &self.traversal)
            .finish()
    }
}

/// Position in a tree with mutable access, bound to a traversal.
///
/// Navigation moves the cursor in place. Structural edits through the
/// cursor apply to the children of the current node.
pub struct CursorMut<'a, T> {
    /// Tree.
    tree: &'a mut Tree<T>,
    /// Current node, `None` for the end position.
    node: Option<NodeId>,
    /// Traversal used by `advance` and `retreat`.
    traversal: Traversal,
}

impl<'a, T> CursorMut<'a, T> {
    /// Creates a new cursor.
    #[inline]
    #[must_use]
    pub(super) fn new(tree: &'a mut Tree<T>, node: Option<NodeId>, traversal: Traversal) -> Self {
        Self {
            tree,
            node,
            traversal,
        }
    }

    /// Returns the node ID, or `None` for the end position.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<NodeId> {
        self.node
    }

    /// Returns true if the cursor is at the end position.
    #[inline]
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns the value of the node, or `None` for the end position.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.node.and_then(|id| self.tree.value(id))
    }

    /// Returns the mutable value of the node, or `None` for the end position.
    #[inline]
    #[must_use]
    pub fn value_mut(&mut self) -> Option<&mut T> {
        let id = self.node?;
        self.tree.value_mut(id)
    }

    /// Returns the traversal.
    #[inline]
    #[must_use]
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Changes the traversal used by `advance` and `retreat`.
    #[inline]
    pub fn set_traversal(&mut self, traversal: Traversal) {
        self.traversal = traversal;
    }

    /// Returns a read-only cursor at the same position.
    #[inline]
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.tree, self.node, self.traversal)
    }

    /// Moves to the next node of the traversal.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] at the end position.
    pub fn advance(&mut self) -> Result<(), TreeError> {
        self.node = self.tree.step_forward(self.traversal, self.node)?;
        Ok(())
    }

    /// Moves to the previous node of the traversal.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] at the first node, or at
    /// the end position of an empty tree.
    pub fn retreat(&mut self) -> Result<(), TreeError> {
        self.node = Some(self.tree.step_backward(self.traversal, self.node)?);
        Ok(())
    }

    /// Moves to the first child per `direction`, which may be the end position.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] at the end position.
    pub fn to_first_child(&mut self, direction: Direction) -> Result<(), TreeError> {
        self.node = self.tree.child_of(self.node, direction.first())?;
        Ok(())
    }

    /// Moves to the second child per `direction`, which may be the end position.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] at the end position.
    pub fn to_second_child(&mut self, direction: Direction) -> Result<(), TreeError> {
        self.node = self.tree.child_of(self.node, direction.second())?;
        Ok(())
    }

    /// Moves to the parent.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NoParent`] at the root or the end position.
    pub fn to_parent(&mut self) -> Result<(), TreeError> {
        self.node = Some(self.tree.parent_of(self.node)?);
        Ok(())
    }

    /// Creates a node as the first child per `direction` of the current node,
    /// and returns a cursor at it.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] at the end position, or if
    /// the slot is occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreena::{Direction, Traversal, Tree, TreeError};
    ///
    /// let mut tree = Tree::with_root("root");
    /// let mut root = tree.root_mut(Traversal::PREORDER);
    /// root.new_child(Direction::LeftFirst, "left")?
    ///     .new_child(Direction::RightFirst, "left-right")?;
    /// root.new_child(Direction::RightFirst, "right")?;
    ///
    /// assert_eq!(
    ///     tree.iter(Traversal::PREORDER).copied().collect::<Vec<_>>(),
    ///     ["root", "left", "left-right", "right"]
    /// );
    /// # Ok::<_, TreeError>(())
    /// ```
    pub fn new_child(&mut self, direction: Direction, value: T) -> Result<CursorMut<'_, T>, TreeError> {
        let at = self.node.ok_or(TreeError::PreconditionViolated)?;
        let child = self.tree.new_child(direction, at, value)?;
        Ok(CursorMut::new(self.tree, Some(child), self.traversal))
    }

    /// Replaces the first child per `direction` of the current node with
    /// `subtree`, and returns the detached previous child.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PreconditionViolated`] at the end position.
    pub fn replace_child(&mut self, direction: Direction, subtree: Tree<T>) -> Result<Tree<T>, TreeError> {
        let at = self.node.ok_or(TreeError::PreconditionViolated)?;
        self.tree.replace_child(direction, at, subtree)
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor::new(cursor.tree, cursor.node, cursor.traversal)
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("node", &self.node)
            .field("traversal", &self.traversal)
            .finish()
    }
}
