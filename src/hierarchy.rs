//! Link storage for binary trees.

pub(crate) mod traverse;

use core::fmt;

use alloc::vec::Vec;

use crate::direction::{Direction, Side};
use crate::id::NodeId;

/// Arena of node links without custom data tied to nodes.
///
/// This is the only place where parent and child links are written. Every
/// write goes through [`connect`][`Self::connect`] or
/// [`disconnect`][`Self::disconnect`], which update both ends of a link at
/// once, so a child slot and the parent link of the child never disagree.
#[derive(Debug, Clone, Default)]
pub(crate) struct Hierarchy {
    /// Links storage.
    ///
    /// `None` is used for vacant slots.
    links: Vec<Option<Links>>,
    /// Vacant slots to be reused.
    free: Vec<NodeId>,
}

impl Hierarchy {
    /// Creates a new node without any links.
    ///
    /// # Panics
    ///
    /// Panics if the node ID overflows.
    pub(crate) fn allocate(&mut self) -> NodeId {
        if let Some(id) = self.free.pop() {
            debug_assert!(
                self.links[id.index()].is_none(),
                "[consistency] free slots must be vacant"
            );
            self.links[id.index()] = Some(Links::default());
            return id;
        }
        let id = NodeId::from_index(self.links.len())
            .expect("[precondition] node ID overflowed presumably due to too many node creations");
        self.links.push(Some(Links::default()));
        id
    }

    /// Makes the slot of the node vacant.
    ///
    /// # Panics
    ///
    /// Panics if the node is not alive, or if it is still linked to a parent
    /// or children.
    pub(crate) fn release(&mut self, id: NodeId) {
        let links = self
            .links
            .get_mut(id.index())
            .and_then(Option::take)
            .expect("[precondition] the node must be alive");
        if !links.is_alone() {
            panic!("[precondition] the node to release must be detached from neighbors");
        }
        self.free.push(id);
    }

    /// Removes all nodes.
    pub(crate) fn clear(&mut self) {
        self.links.clear();
        self.free.clear();
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.links.len() - self.free.len()
    }

    /// Returns the links of the node if the node is alive.
    #[inline]
    #[must_use]
    pub(crate) fn links(&self, id: NodeId) -> Option<&Links> {
        self.links.get(id.index()).and_then(Option::as_ref)
    }

    /// Returns true if the node is alive.
    #[inline]
    #[must_use]
    pub(crate) fn is_alive(&self, id: NodeId) -> bool {
        self.links(id).is_some()
    }

    /// Returns the links of the node, panicking with the consistency message
    /// if it is dead.
    #[inline]
    #[must_use]
    pub(crate) fn live(&self, id: NodeId) -> &Links {
        self.links(id)
            .expect("[consistency] the node being visited must be alive")
    }

    /// Returns a mutable reference to the links, panicking if the node is dead.
    fn live_mut(&mut self, id: NodeId) -> &mut Links {
        self.links
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .expect("[precondition] the node must be alive")
    }

    /// Returns the parent of the node and the side it hangs on.
    ///
    /// Returns `None` for a root.
    #[must_use]
    pub(crate) fn position(&self, id: NodeId) -> Option<(NodeId, Side)> {
        let parent = self.live(id).parent?;
        let parent_links = self.live(parent);
        if parent_links.child(Side::Left) == Some(id) {
            Some((parent, Side::Left))
        } else {
            debug_assert_eq!(
                parent_links.child(Side::Right),
                Some(id),
                "[consistency] the parent must hold the node in one of its slots"
            );
            Some((parent, Side::Right))
        }
    }

    /// Links `child` into the `side` slot of `parent`.
    ///
    /// ```text
    /// Before:             After:
    ///
    /// parent    child     parent
    ///   |                   |
    ///  (side: empty)       (side) -> child
    /// ```
    ///
    /// # Panics
    ///
    /// * Panics if either node is not alive.
    /// * Panics if the slot is occupied or `child` already has a parent.
    /// * Panics if `parent` and `child` are identical.
    pub(crate) fn connect(&mut self, parent: NodeId, side: Side, child: NodeId) {
        if parent == child {
            panic!("[precondition] a node cannot be the child of itself");
        }
        if self.live(parent).child(side).is_some() {
            panic!("[precondition] the child slot must be empty");
        }
        let child_links = self.live_mut(child);
        if child_links.parent.is_some() {
            panic!("[precondition] the child must be detached");
        }
        child_links.parent = Some(parent);
        self.live_mut(parent).children[side.index()] = Some(child);
    }

    /// Unlinks the `side` child of `parent`, making it a detached root.
    ///
    /// Returns the detached child, or `None` if the slot was empty.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not alive.
    pub(crate) fn disconnect(&mut self, parent: NodeId, side: Side) -> Option<NodeId> {
        let child = self.live_mut(parent).children[side.index()].take()?;
        let child_links = self.live_mut(child);
        debug_assert_eq!(
            child_links.parent,
            Some(parent),
            "[consistency] parent link and child slot must agree"
        );
        child_links.parent = None;
        Some(child)
    }
}

/// Links of a node.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Links {
    /// Parent.
    parent: Option<NodeId>,
    /// Left and right children.
    children: [Option<NodeId>; 2],
}

impl Links {
    /// Returns the parent.
    #[inline]
    #[must_use]
    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the child at the given side.
    #[inline]
    #[must_use]
    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        self.children[side.index()]
    }

    /// Returns the first child per `dir`.
    #[inline]
    #[must_use]
    pub(crate) fn first_child(&self, dir: Direction) -> Option<NodeId> {
        self.child(dir.first())
    }

    /// Returns the second child per `dir`.
    #[inline]
    #[must_use]
    pub(crate) fn second_child(&self, dir: Direction) -> Option<NodeId> {
        self.child(dir.second())
    }

    /// Returns true if the node has no links at all.
    #[must_use]
    fn is_alone(&self) -> bool {
        self.parent.is_none() && self.children.iter().all(Option::is_none)
    }
}

// For compact printing.
impl fmt::Debug for Links {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// A wrapper to print optional node ID in compact form.
        struct OptNodeId(Option<NodeId>);
        impl fmt::Debug for OptNodeId {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    Some(id) => id.fmt(f),
                    None => f.write_str("None"),
                }
            }
        }

        f.debug_struct("Links")
            .field("parent", &OptNodeId(self.parent))
            .field("left", &OptNodeId(self.children[0]))
            .field("right", &OptNodeId(self.children[1]))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_updates_both_ends() {
        let mut hier = Hierarchy::default();
        let parent = hier.allocate();
        let child = hier.allocate();
        hier.connect(parent, Side::Right, child);

        assert_eq!(hier.live(parent).child(Side::Right), Some(child));
        assert_eq!(hier.live(child).parent(), Some(parent));
        assert_eq!(hier.position(child), Some((parent, Side::Right)));

        assert_eq!(hier.disconnect(parent, Side::Right), Some(child));
        assert_eq!(hier.live(parent).child(Side::Right), None);
        assert_eq!(hier.live(child).parent(), None);
        assert_eq!(hier.disconnect(parent, Side::Right), None);
    }

    #[test]
    fn released_slots_are_reused() {
        let mut hier = Hierarchy::default();
        let first = hier.allocate();
        let second = hier.allocate();
        hier.release(first);
        assert_eq!(hier.len(), 1);
        assert!(!hier.is_alive(first));

        let reused = hier.allocate();
        assert_eq!(reused, first);
        assert_ne!(reused, second);
        assert_eq!(hier.len(), 2);
    }

    #[test]
    #[should_panic(expected = "[precondition] the child slot must be empty")]
    fn connect_to_occupied_slot() {
        let mut hier = Hierarchy::default();
        let parent = hier.allocate();
        let a = hier.allocate();
        let b = hier.allocate();
        hier.connect(parent, Side::Left, a);
        hier.connect(parent, Side::Left, b);
    }
}
