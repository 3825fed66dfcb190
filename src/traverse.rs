//! Traversal strategies.

use crate::direction::Direction;

/// Visiting order of a traversal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, first subtree, second subtree.
    Preorder,
    /// First subtree, node, second subtree.
    #[default]
    Inorder,
    /// First subtree, second subtree, node.
    Postorder,
}

/// Traversal strategy: an [`Order`] combined with a [`Direction`].
///
/// A traversal defines the first node of a tree (`begin`) and, for every
/// node, the node visited next. Both are computed from the parent and child
/// links alone.
///
/// Walking backward through a traversal is the same as walking forward
/// through its [inverse][`Self::inverse`]:
///
/// | traversal              | inverse                  |
/// |------------------------|--------------------------|
/// | preorder, left-first   | postorder, right-first   |
/// | inorder, left-first    | inorder, right-first     |
/// | postorder, left-first  | preorder, right-first    |
///
/// and the same with the directions swapped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Traversal {
    /// Visiting order.
    pub order: Order,
    /// Which child is visited first.
    pub direction: Direction,
}

impl Traversal {
    /// Left-first preorder, which is also used for tree equality and the
    /// text format.
    pub const PREORDER: Self = Self::new(Order::Preorder, Direction::LeftFirst);
    /// Left-first inorder.
    pub const INORDER: Self = Self::new(Order::Inorder, Direction::LeftFirst);
    /// Left-first postorder.
    pub const POSTORDER: Self = Self::new(Order::Postorder, Direction::LeftFirst);

    /// Creates a new traversal.
    #[inline]
    #[must_use]
    pub const fn new(order: Order, direction: Direction) -> Self {
        Self { order, direction }
    }

    /// Returns the traversal that visits nodes in exactly the reverse sequence.
    #[must_use]
    pub const fn inverse(self) -> Self {
        let order = match self.order {
            Order::Preorder => Order::Postorder,
            Order::Inorder => Order::Inorder,
            Order::Postorder => Order::Preorder,
        };
        Self::new(order, self.direction.inverse())
    }

    /// Returns all six traversals.
    #[must_use]
    pub fn all() -> [Self; 6] {
        let mut all = [Self::default(); 6];
        let orders = [Order::Preorder, Order::Inorder, Order::Postorder];
        let directions = [Direction::LeftFirst, Direction::RightFirst];
        for (i, order) in orders.into_iter().enumerate() {
            for (j, direction) in directions.into_iter().enumerate() {
                all[i * 2 + j] = Self::new(order, direction);
            }
        }
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_is_involution() {
        for traversal in Traversal::all() {
            assert_eq!(traversal.inverse().inverse(), traversal);
            assert_ne!(traversal.inverse(), traversal);
        }
    }
}
