use thiserror::Error;

/// Result type used across the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for the parameval crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Unexpected character while tokenizing. `position` counts characters,
    /// starting at 0.
    #[error("ParseError: unexpected character '{character}' at position {position}")]
    Lexical {
        /// Index of the offending character
        position: usize,
        /// The offending character
        character: char,
    },
    /// An operator did not find as many operands as its arity requires
    #[error("ParseError: operator '{symbol}' expects {expected} operand(s), found {found}")]
    Arity {
        /// Symbol of the operator
        symbol: String,
        /// Operands the operator needs
        expected: u8,
        /// Operands that were available
        found: usize,
    },
    /// The token sequence did not reduce to a single root
    #[error("ParseError: {0}")]
    Structure(String),
    /// A bracket without its counterpart
    #[error("ParseError: unmatched '{0}'")]
    UnmatchedBracket(char),
    /// The tree handed to the evaluator breaks the node invariants
    #[error("TreeError: {0}")]
    MalformedTree(String),
    /// A value that is neither a bound symbol nor a number
    #[error("NameError: '{0}' is not a known symbol nor a numeric literal")]
    InvalidLiteral(String),
    /// The expression nests deeper than the configured limit
    #[error("LimitError: expression is nested deeper than {0} levels")]
    DepthLimit(usize),
    /// Symbol tables only accept non-empty names
    #[error("NameError: symbol names can not be empty")]
    EmptySymbolName,
}

/// Coarse classification of an [`Error`](enum.Error.html)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unrecognized character in the input
    Lexical,
    /// Arity, bracket or root-count problem while building the tree
    Structural,
    /// Missing child or invalid node kind during evaluation
    MalformedTree,
    /// Unbound symbol or unparsable literal
    InvalidLiteral,
    /// Nesting depth cap reached
    ResourceLimit,
    /// Invalid symbol table entry
    InvalidSymbol,
}

impl Error {
    /// Get the kind tag of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Self::Lexical { .. } => ErrorKind::Lexical,
            Self::Arity { .. } | Self::Structure(_) | Self::UnmatchedBracket(_) => {
                ErrorKind::Structural
            }
            Self::MalformedTree(_) => ErrorKind::MalformedTree,
            Self::InvalidLiteral(_) => ErrorKind::InvalidLiteral,
            Self::DepthLimit(_) => ErrorKind::ResourceLimit,
            Self::EmptySymbolName => ErrorKind::InvalidSymbol,
        }
    }
}
