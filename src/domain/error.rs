//! Domain-level errors (the domain layer does no I/O)

use thiserror::Error;

/// Domain errors arise only at the input boundary: text that should describe
/// a tree, a tag, or a traversal choice but does not.
///
/// Building and reading a tree never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("unrecognized tag: {0}")]
    UnknownTag(String),

    #[error("unknown traversal order: {0}")]
    UnknownOrder(String),

    #[error("unknown visitor: {0}")]
    UnknownVisitor(String),

    #[error("invalid number at offset {offset}: {text}")]
    InvalidNumber { offset: usize, text: String },

    #[error("unexpected {found} at offset {offset}, expected {expected}")]
    Unexpected {
        offset: usize,
        expected: &'static str,
        found: String,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
