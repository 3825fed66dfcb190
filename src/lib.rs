//! Binary trees stored in an arena, with bidirectional cursors and a
//! bracketed text format.
//!
//! # Trees
//!
//! A [`Tree`] owns at most one root node. Every node has an optional left
//! child, an optional right child, and a back-reference to its parent.
//! Subtrees are moved between trees by value with
//! [`Tree::replace_child`], so a node is never owned by two trees at once.
//!
//! # Traversals
//!
//! A [`Traversal`] pairs an [`Order`] (preorder, inorder, postorder) with a
//! [`Direction`] (left-first or right-first). Cursors step forward with the
//! traversal and backward with its [inverse][`Traversal::inverse`], so no
//! history is kept.
//!
//! ```
//! use bitreena::{Direction, Order, Traversal, Tree};
//!
//! let mut tree = Tree::new();
//! let root = tree.set_root("root");
//! tree.new_child(Direction::LeftFirst, root, "left").unwrap();
//! tree.new_child(Direction::RightFirst, root, "right").unwrap();
//!
//! let inorder = Traversal::new(Order::Inorder, Direction::LeftFirst);
//! let values = tree.iter(inorder).copied().collect::<Vec<_>>();
//! assert_eq!(values, ["left", "root", "right"]);
//! ```
//!
//! # Text format
//!
//! ```
//! use bitreena::text::{parse_keyed, render_keyed};
//!
//! let source = "[(root,1),(left,2),null,null,(right,3),null,null]";
//! let tree = parse_keyed::<String, i32>(source).unwrap();
//! assert_eq!(tree.depth(), 2);
//! assert_eq!(render_keyed(&tree), source);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

mod direction;
mod error;
mod hierarchy;
mod id;
pub mod text;
mod traverse;
pub mod tree;

pub use self::direction::{Direction, Side};
pub use self::error::{ParseError, TreeError};
pub use self::id::NodeId;
pub use self::traverse::{Order, Traversal};
pub use self::tree::{Cursor, CursorMut, Tree, TreeBuilder};
