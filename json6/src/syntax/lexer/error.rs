//! This module contains the errors used by the lexer.

use crate::syntax::Position;
use std::{error, fmt, io};

/// An error that occurred during the lexing of the source input.
#[derive(Debug)]
pub enum Error {
    /// An underlying read failure, including malformed UTF-8 in the source.
    Io(io::Error),

    /// The source ended in the middle of a token.
    UnexpectedEof {
        /// What the lexer was expecting when the input ended.
        expected: Box<str>,
        /// The position of the end of the input.
        pos: Position,
    },

    /// A character that cannot continue the token being lexed.
    InvalidChar {
        /// The offending character.
        found: char,
        /// What the lexer was expecting instead.
        expected: Box<str>,
        /// The position of the offending character.
        pos: Position,
    },

    /// An integer literal whose magnitude does not fit a 64-bit signed integer.
    NumberOutOfRange {
        /// The raw literal text.
        literal: Box<str>,
        /// The position of the start of the literal.
        pos: Position,
    },
}

impl Error {
    /// Creates a new `UnexpectedEof` error.
    pub(super) fn unexpected_eof<E>(expected: E, pos: Position) -> Self
    where
        E: Into<Box<str>>,
    {
        Self::UnexpectedEof {
            expected: expected.into(),
            pos,
        }
    }

    /// Creates a new `InvalidChar` error.
    pub(super) fn invalid_char<E>(found: char, expected: E, pos: Position) -> Self
    where
        E: Into<Box<str>>,
    {
        Self::InvalidChar {
            found,
            expected: expected.into(),
            pos,
        }
    }

    /// Creates a new `NumberOutOfRange` error.
    pub(super) fn number_out_of_range<L>(literal: L, pos: Position) -> Self
    where
        L: Into<Box<str>>,
    {
        Self::NumberOutOfRange {
            literal: literal.into(),
            pos,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof { expected, pos } => {
                write!(f, "unexpected end of input at {pos}, expecting {expected}")
            }
            Self::InvalidChar {
                found,
                expected,
                pos,
            } => {
                write!(
                    f,
                    "invalid character '{found}' at {pos}, expecting {expected}"
                )
            }
            Self::NumberOutOfRange { literal, pos } => {
                write!(
                    f,
                    "number '{literal}' at {pos} does not fit in a 64-bit signed integer"
                )
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}
