//! Bracketed text format.
//!
//! ```text
//! tree    := '[' element ']'
//! element := 'null' | payload ',' element (',' element)?
//! payload := '(' text ',' text ')'      (keyed)
//!          | text                       (bare)
//! ```
//!
//! Child elements follow their parent in direction order, first child
//! first. The second child element may be omitted on input; it is always
//! written on output. Whitespace between tokens is ignored.
//!
//! In a text, `\` makes the next character literal. The writer escapes `,`,
//! `[`, `]`, `)`, and `\`. It also escapes whitespace at either end of a
//! text, which the reader would otherwise trim. A `(` is ordinary text.
//!
//! # Examples
//!
//! ```
//! use bitreena::text::{Bare, TextFormat};
//! use bitreena::{Direction, Traversal};
//!
//! let format = TextFormat::new(Bare::<u32>::new()).direction(Direction::RightFirst);
//! let tree = format.parse("[2, 3, null, null, 1, null]")?;
//! assert_eq!(
//!     tree.iter(Traversal::INORDER).copied().collect::<Vec<_>>(),
//!     [1, 2, 3]
//! );
//! assert_eq!(format.render(&tree), "[2,3,null,null,1,null,null]");
//! # Ok::<_, bitreena::ParseError>(())
//! ```

mod payload;
mod reader;

use core::fmt;
use core::str::FromStr;

use alloc::string::String;
use alloc::vec;

use crate::direction::Direction;
use crate::error::ParseError;
use crate::id::NodeId;
use crate::tree::Tree;

pub use self::payload::{Bare, Keyed, PayloadFormat, ReadPayload, WritePayload};
pub use self::reader::{escape_into, Reader};

use self::reader::NULL;

/// Default nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Text format configuration.
///
/// # Examples
///
/// ```
/// use bitreena::text::{Keyed, TextFormat};
/// use bitreena::ParseError;
///
/// let format = TextFormat::new(Keyed::<String, i32>::new()).max_depth(2);
/// assert!(format.parse("[(a,1),(b,2),null]").is_ok());
/// assert_eq!(
///     format.parse("[(a,1),(b,2),(c,3),null]"),
///     Err(ParseError::TooDeep(2))
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextFormat<P> {
    /// Payload format.
    payload: P,
    /// Which child element comes first.
    direction: Direction,
    /// Maximum depth of a tree to parse.
    max_depth: usize,
}

impl<P> TextFormat<P> {
    /// Creates a left-first format with the default nesting limit.
    #[inline]
    #[must_use]
    pub const fn new(payload: P) -> Self {
        Self {
            payload,
            direction: Direction::LeftFirst,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the order of child elements.
    #[inline]
    #[must_use]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the maximum depth of a tree to parse.
    #[inline]
    #[must_use]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the payload format.
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &P {
        &self.payload
    }
}

impl<P: Default> Default for TextFormat<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

/// Pending work of the parser.
#[derive(Debug, Clone, Copy)]
enum Task {
    /// Read an element into a child slot, or into the root for `None`.
    Element {
        /// Parent and the direction whose first child is the slot.
        slot: Option<(NodeId, Direction)>,
        /// Depth of the node to be read.
        depth: usize,
    },
    /// Read the second child element of the node if present.
    SecondChild {
        /// Parent.
        parent: NodeId,
        /// Depth of the parent.
        depth: usize,
    },
}

/// Pending work of the writer.
#[derive(Debug, Clone, Copy)]
enum Piece {
    /// Element for a node or `null`.
    Element(Option<NodeId>),
    /// Separator.
    Comma,
}

impl<P: ReadPayload> TextFormat<P> {
    /// Parses a tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] at the first violation of the grammar. No
    /// partially built tree is returned.
    pub fn parse(&self, source: &str) -> Result<Tree<P::Value>, ParseError> {
        tracing::debug!(len = source.len(), direction = ?self.direction, "parsing tree");
        let mut reader = Reader::new(source);
        match self.parse_tree(&mut reader) {
            Ok(tree) => {
                tracing::debug!(nodes = tree.len(), "parsed tree");
                Ok(tree)
            }
            Err(e) => {
                tracing::debug!(position = reader.position(), error = %e, "failed to parse tree");
                Err(e)
            }
        }
    }

    /// Parses a whole input.
    fn parse_tree(&self, reader: &mut Reader<'_>) -> Result<Tree<P::Value>, ParseError> {
        reader.expect('[')?;
        let mut tree = Tree::new();
        let mut tasks = vec![Task::Element {
            slot: None,
            depth: 1,
        }];
        while let Some(task) = tasks.pop() {
            match task {
                Task::Element { slot, depth } => {
                    if reader.eat_keyword(NULL) {
                        continue;
                    }
                    if depth > self.max_depth {
                        return Err(ParseError::TooDeep(self.max_depth));
                    }
                    let value = self.payload.read(reader)?;
                    let node = match slot {
                        None => tree.set_root(value),
                        Some((parent, direction)) => tree
                            .new_child(direction, parent, value)
                            .expect("[consistency] each child slot is read at most once"),
                    };
                    reader.expect(',')?;
                    tasks.push(Task::SecondChild {
                        parent: node,
                        depth,
                    });
                    tasks.push(Task::Element {
                        slot: Some((node, self.direction)),
                        depth: depth + 1,
                    });
                }
                Task::SecondChild { parent, depth } => {
                    if reader.eat(',') {
                        tasks.push(Task::Element {
                            slot: Some((parent, self.direction.inverse())),
                            depth: depth + 1,
                        });
                    }
                }
            }
        }
        reader.expect(']')?;
        reader.skip_whitespace();
        if !reader.rest().is_empty() {
            return Err(ParseError::TrailingInput(reader.position()));
        }

        Ok(tree)
    }
}

impl<P: WritePayload> TextFormat<P> {
    /// Renders a tree.
    ///
    /// Parsing the result with the same format gives back an equal tree, as
    /// long as the values survive `Display` and `FromStr` and contain no
    /// raw newlines.
    #[must_use]
    pub fn render(&self, tree: &Tree<P::Value>) -> String {
        let mut out = String::new();
        self.render_into(tree, &mut out);
        out
    }

    /// Appends the rendered tree to `out`.
    pub fn render_into(&self, tree: &Tree<P::Value>, out: &mut String) {
        out.push('[');
        let mut pieces = vec![Piece::Element(tree.root_id())];
        while let Some(piece) = pieces.pop() {
            let node = match piece {
                Piece::Comma => {
                    out.push(',');
                    continue;
                }
                Piece::Element(None) => {
                    out.push_str(NULL);
                    continue;
                }
                Piece::Element(Some(v)) => v,
            };
            let value = tree
                .value(node)
                .expect("[consistency] the node must be the part of the tree");
            self.payload.write(value, out);
            let links = tree.hierarchy().live(node);
            pieces.extend([
                Piece::Element(links.second_child(self.direction)),
                Piece::Comma,
                Piece::Element(links.first_child(self.direction)),
                Piece::Comma,
            ]);
        }
        out.push(']');
    }
}

/// Parses a left-first tree with `(key,value)` payloads.
///
/// # Errors
///
/// Returns [`ParseError`] for malformed input.
///
/// # Examples
///
/// ```
/// use bitreena::text::parse_keyed;
/// use bitreena::Traversal;
///
/// let tree = parse_keyed::<String, i32>("[(a,1),null,(b,2),null]")?;
/// assert_eq!(tree.len(), 2);
/// assert_eq!(
///     tree.iter(Traversal::INORDER).map(|(_, v)| *v).collect::<Vec<_>>(),
///     [1, 2]
/// );
/// # Ok::<_, bitreena::ParseError>(())
/// ```
pub fn parse_keyed<K: FromStr, V: FromStr>(source: &str) -> Result<Tree<(K, V)>, ParseError> {
    TextFormat::new(Keyed::new()).parse(source)
}

/// Renders a tree with `(key,value)` payloads, left-first.
#[must_use]
pub fn render_keyed<K: fmt::Display, V: fmt::Display>(tree: &Tree<(K, V)>) -> String {
    TextFormat::new(Keyed::new()).render(tree)
}

/// Parses a left-first tree with bare payloads.
///
/// # Errors
///
/// Returns [`ParseError`] for malformed input.
pub fn parse_bare<V: FromStr>(source: &str) -> Result<Tree<V>, ParseError> {
    TextFormat::new(Bare::new()).parse(source)
}

/// Renders a tree with bare payloads, left-first.
#[must_use]
pub fn render_bare<V: fmt::Display>(tree: &Tree<V>) -> String {
    TextFormat::new(Bare::new()).render(tree)
}
