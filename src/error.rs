//! # Error
//!
//! Every error the library can produce.
//! The main structs are [`Error`] and [`ErrorKind`].

use crate::position::Position;

pub type Result<T> = std::result::Result<T, Error>;

/// # Summary
///
/// `Error` is the type representing all information required about a given
/// error. It is an opaque wrapper around an [`ErrorKind`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    kind: Box<ErrorKind>,
}

impl Error {
    /// Build a new `Error` of the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind: Box::new(kind),
        }
    }

    /// Return the kind of the error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// # Summary
///
/// `ErrorKind` is an enum that contains all the possible errors that
/// `munch` might encounter when lexing.
///
/// # Error kinds
///
/// `EmptyLiteral`, `EmptyCharSet`, `InvalidPattern` and `DuplicateRule`
/// are configuration errors: they arise when building a token type or a
/// lexer, before any input is lexed, and are always caller-fixable.
/// `UnexpectedInput` arises while lexing, when no configured rule can
/// consume any input at the current position.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("cannot use an empty string as a literal token")]
    EmptyLiteral,
    #[error("cannot use an empty character set as a token")]
    EmptyCharSet,
    #[error("invalid token pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("duplicate definition of rule {name:?}")]
    DuplicateRule { name: String },
    #[error("unexpected input at {position}")]
    UnexpectedInput { position: Position },
}

impl ErrorKind {
    /// Wrap the kind in an [`Error`], as the error case of a [`Result`].
    pub fn err<T>(self) -> Result<T> {
        Err(Error::new(self))
    }
}
