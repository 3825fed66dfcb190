//! Tree traversal over node IDs.

use crate::hierarchy::Hierarchy;
use crate::id::NodeId;
use crate::traverse::{Order, Traversal};

/// Returns the first node of the subtree rooted at `top`.
#[must_use]
pub(crate) fn first_node(hier: &Hierarchy, traversal: Traversal, top: NodeId) -> NodeId {
    let dir = traversal.direction;
    match traversal.order {
        Order::Preorder => top,
        Order::Inorder => leftmost(hier, traversal, top),
        Order::Postorder => {
            let mut current = leftmost(hier, traversal, top);
            while let Some(second) = hier.live(current).second_child(dir) {
                current = leftmost(hier, traversal, second);
            }
            current
        }
    }
}

/// Returns the node visited after `current`, or `None` at the end.
#[must_use]
pub(crate) fn next_node(hier: &Hierarchy, traversal: Traversal, current: NodeId) -> Option<NodeId> {
    let dir = traversal.direction;
    let links = hier.live(current);
    match traversal.order {
        Order::Preorder => links
            .first_child(dir)
            .or_else(|| links.second_child(dir))
            .or_else(|| backtrack_preorder(hier, traversal, current)),
        Order::Inorder => match links.second_child(dir) {
            Some(second) => Some(leftmost(hier, traversal, second)),
            None => backtrack_inorder(hier, traversal, current),
        },
        Order::Postorder => {
            let parent = links.parent()?;
            let parent_links = hier.live(parent);
            if parent_links.first_child(dir) == Some(current) {
                if let Some(second) = parent_links.second_child(dir) {
                    return Some(first_node(hier, traversal, second));
                }
            }
            Some(parent)
        }
    }
}

/// Follows first-child links down from `top`.
fn leftmost(hier: &Hierarchy, traversal: Traversal, top: NodeId) -> NodeId {
    let mut current = top;
    while let Some(first) = hier.live(current).first_child(traversal.direction) {
        current = first;
    }
    current
}

/// Climbs while the node is a second child or its parent has no second
/// child, then steps into the second child of the parent.
fn backtrack_preorder(hier: &Hierarchy, traversal: Traversal, start: NodeId) -> Option<NodeId> {
    let dir = traversal.direction;
    let mut current = start;
    loop {
        let parent = hier.live(current).parent()?;
        match hier.live(parent).second_child(dir) {
            Some(second) if second != current => return Some(second),
            _ => current = parent,
        }
    }
}

/// Climbs while the node is a second child, and returns the first ancestor
/// reached from its first side.
fn backtrack_inorder(hier: &Hierarchy, traversal: Traversal, start: NodeId) -> Option<NodeId> {
    let dir = traversal.direction;
    let mut current = start;
    loop {
        let parent = hier.live(current).parent()?;
        if hier.live(parent).first_child(dir) == Some(current) {
            return Some(parent);
        }
        current = parent;
    }
}

/// Double-ended traverser over the whole tree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Traverser {
    /// Traversal for the forward direction.
    traversal: Traversal,
    /// Next node to emit forward and backward.
    next: Option<(NodeId, NodeId)>,
}

impl Traverser {
    /// Creates a traverser for the tree rooted at `root`.
    ///
    /// `root` must not have a parent.
    #[must_use]
    pub(crate) fn new(hier: &Hierarchy, traversal: Traversal, root: Option<NodeId>) -> Self {
        let next = root.map(|root| {
            debug_assert!(
                hier.live(root).parent().is_none(),
                "[precondition] traversers start from a root"
            );
            (
                first_node(hier, traversal, root),
                first_node(hier, traversal.inverse(), root),
            )
        });
        Self { traversal, next }
    }

    /// Traverses the tree forward and returns the next node.
    pub(crate) fn next(&mut self, hier: &Hierarchy) -> Option<NodeId> {
        let (next, next_back) = self.next?;
        self.next = if next == next_back {
            // The next node is the last node.
            None
        } else {
            let next_of_next = next_node(hier, self.traversal, next)
                .expect("[consistency] the back end must be reached before the tree end");
            Some((next_of_next, next_back))
        };
        Some(next)
    }

    /// Traverses the tree backward and returns the next node.
    pub(crate) fn next_back(&mut self, hier: &Hierarchy) -> Option<NodeId> {
        let (next, next_back) = self.next?;
        self.next = if next == next_back {
            None
        } else {
            let next_of_next_back = next_node(hier, self.traversal.inverse(), next_back)
                .expect("[consistency] the front end must be reached before the tree end");
            Some((next, next_of_next_back))
        };
        Some(next_back)
    }
}
