//! Iterator over values.

use core::fmt;
use core::iter;

use crate::hierarchy::traverse::Traverser;
use crate::traverse::Traversal;
use crate::tree::Tree;

/// Double-ended iterator over the values of a tree in traversal order.
///
/// Iterating backward yields the same values as iterating forward with the
/// [inverse][`Traversal::inverse`] traversal.
pub struct Iter<'a, T> {
    /// Tree.
    tree: &'a Tree<T>,
    /// Traverser.
    traverser: Traverser,
    /// Number of values not yet yielded from either end.
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Creates a new iterator.
    #[must_use]
    pub(super) fn new(tree: &'a Tree<T>, traversal: Traversal) -> Self {
        Self {
            tree,
            traverser: Traverser::new(tree.hierarchy(), traversal, tree.root_id()),
            remaining: tree.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.traverser.next(self.tree.hierarchy())?;
        self.remaining -= 1;
        Some(
            self.tree
                .value(id)
                .expect("[consistency] the node must be the part of the tree"),
        )
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.traverser.next_back(self.tree.hierarchy())?;
        self.remaining -= 1;
        Some(
            self.tree
                .value(id)
                .expect("[consistency] the node must be the part of the tree"),
        )
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> iter::FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            traverser: self.traverser,
            remaining: self.remaining,
        }
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("traverser", &self.traverser)
            .field("remaining", &self.remaining)
            .finish()
    }
}
