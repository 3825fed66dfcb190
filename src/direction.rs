//! Child sides and traversal directions.

/// Physical side of a child slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}

impl Side {
    /// Returns the opposite side.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the index of the slot in a `[left, right]` pair.
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Which child of a node is visited first.
///
/// Every operation that talks about "the first child" or "the second child"
/// takes a direction, and mirroring an operation is done by using
/// [`Direction::inverse`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The left child is the first child.
    #[default]
    LeftFirst,
    /// The right child is the first child.
    RightFirst,
}

impl Direction {
    /// Returns the side of the first child.
    #[inline]
    #[must_use]
    pub const fn first(self) -> Side {
        match self {
            Self::LeftFirst => Side::Left,
            Self::RightFirst => Side::Right,
        }
    }

    /// Returns the side of the second child.
    #[inline]
    #[must_use]
    pub const fn second(self) -> Side {
        self.first().opposite()
    }

    /// Returns the mirrored direction.
    #[inline]
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::LeftFirst => Self::RightFirst,
            Self::RightFirst => Self::LeftFirst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_swaps_sides() {
        for dir in [Direction::LeftFirst, Direction::RightFirst] {
            assert_eq!(dir.inverse().first(), dir.second());
            assert_eq!(dir.inverse().second(), dir.first());
            assert_eq!(dir.inverse().inverse(), dir);
        }
    }
}
