//! Node ID.

use core::fmt;
use core::num::NonZeroUsize;

/// Node ID.
///
/// A node ID is an index into the arena of the [`Tree`][`crate::Tree`] that
/// created it. It is only meaningful for that tree, and only until the node
/// is moved out of it (by [`Tree::replace_child`][`crate::Tree::replace_child`]
/// and friends) or the tree is cleared. Slots of removed nodes are reused, so
/// a stale ID may refer to an unrelated node later.
///
/// The ordering (`PartialOrd` and `Ord`) is provided only for use as a key
/// of ordered containers; it has no relation to any traversal order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(NonZeroUsize);

impl NodeId {
    /// Creates a node ID from the slot index.
    ///
    /// Returns `None` if the index is `usize::MAX`.
    #[inline]
    #[must_use]
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        index.checked_add(1).and_then(NonZeroUsize::new).map(Self)
    }

    /// Returns the slot index.
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0.get() - 1
    }
}

// Prevent `{:#?}` from printing the value in redundant 3 lines.
impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.index())
    }
}
