//! Errors raised while reading bracketed tree text.

use thiserror::Error;

/// Result type alias for parsing.
pub type ParseResult<T> = std::result::Result<T, FormatError>;

/// Malformed input text.
///
/// This is the only error the core raises, and always before any search
/// work begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Trimmed input does not start with `(` and end with `)`.
    #[error("invalid input format: must start with \"(\" and end with \")\"")]
    NotBracketed,

    /// Input ran out in the middle of an expression.
    #[error("unexpected end of input during parsing")]
    UnexpectedEnd,

    /// `(` was the last token.
    #[error("node name missing after \"(\"")]
    MissingName,

    /// The token after `(` is itself a bracket.
    #[error("invalid node name: {0}")]
    InvalidName(String),

    /// A node's child list was never closed.
    #[error("missing \")\" for node {0}")]
    UnclosedNode(String),

    /// A `)` appeared where an expression was expected.
    #[error("unexpected \")\"")]
    UnexpectedClose,

    /// A bare token that is not a base-10 integer.
    #[error("invalid leaf value: {0}, expected an integer")]
    InvalidLeaf(String),

    /// Tokens remain after the outermost expression closed.
    #[error("extra input after main expression, starting at {0}")]
    TrailingTokens(String),

    /// Nesting exceeds the configured depth limit.
    #[error("tree nests deeper than {0} levels")]
    TooDeep(usize),
}
