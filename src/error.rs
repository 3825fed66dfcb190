//! Error types.

use alloc::string::String;

use thiserror::Error;

/// Misuse of the tree structure API.
///
/// An operation returning this error has not modified the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TreeError {
    /// The position does not reference a live node, or the target child slot
    /// is already occupied.
    #[error("precondition violated: the position is absent or the child slot is occupied")]
    PreconditionViolated,
    /// Asked for the parent of the root or of the end position.
    #[error("the position has no parent")]
    NoParent,
}

/// Malformed input for the text format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// A required delimiter is missing.
    #[error("expected `{0}`")]
    Expected(char),
    /// The input ended in the middle of a token.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A payload is missing its separator or contains an unescaped delimiter.
    #[error("malformed payload")]
    MalformedPayload,
    /// The payload text could not be converted to the value type.
    #[error("invalid payload value `{0}`")]
    InvalidValue(String),
    /// Something other than whitespace follows the closing bracket.
    #[error("trailing input at byte {0}")]
    TrailingInput(usize),
    /// The tree nests deeper than the configured limit.
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
}
