//! Contains all kinds of errors that the lexical analysis phase can produce.

use enum_as_inner::EnumAsInner;
use thiserror::Error;

/// The source contains a character that does not start any recognized token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("unexpected character `{character}` at line {line}")]
pub struct LexicalError {
    /// The offending character.
    pub character: char,

    /// The 1-based line number where the character appears.
    pub line: usize,
}

/// The bounded token sequence would exceed its configured maximum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("the token stream exceeded its configured limit of {limit} tokens")]
pub struct CapacityExceeded {
    /// The configured maximum number of tokens.
    pub limit: usize,
}

/// Is an enumeration containing all kinds of errors that can occur while tokenizing the source
/// code.
///
/// Neither kind is recoverable within this phase; the caller decides whether to abort or report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    CapacityExceeded(#[from] CapacityExceeded),
}
