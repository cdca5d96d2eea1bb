//! Error and result implementation for the parser.

use crate::syntax::{lexer, Span};
use std::{error, fmt};

/// Result of a parsing operation.
pub type ParseResult = Result<crate::value::Value, ParseError>;

/// `ParseError` is an enum which represents errors encountered during parsing.
#[derive(Debug)]
pub enum ParseError {
    /// When it expected a certain kind of token, but got another as part of
    /// something.
    Expected {
        /// The token kinds that were legal at this point.
        expected: Box<[String]>,
        /// The raw text of the token that was found instead.
        found: Box<str>,
        /// The position of the found token.
        span: Span,
        /// The production being parsed.
        context: &'static str,
    },
    /// When there is an abrupt end to the token stream.
    AbruptEnd {
        /// The token kinds that were legal at this point.
        expected: Box<[String]>,
    },
    /// A lexing error.
    Lex {
        /// The underlying error.
        err: lexer::Error,
    },
}

impl ParseError {
    /// Creates an `Expected` parsing error.
    pub(super) fn expected<F>(expected: &[&str], found: F, span: Span, context: &'static str) -> Self
    where
        F: Into<Box<str>>,
    {
        Self::Expected {
            expected: owned_list(expected),
            found: found.into(),
            span,
            context,
        }
    }

    /// Creates an `AbruptEnd` parsing error.
    pub(super) fn abrupt_end(expected: &[&str]) -> Self {
        Self::AbruptEnd {
            expected: owned_list(expected),
        }
    }
}

impl From<lexer::Error> for ParseError {
    fn from(err: lexer::Error) -> Self {
        Self::Lex { err }
    }
}

fn owned_list(expected: &[&str]) -> Box<[String]> {
    expected.iter().map(|s| (*s).to_owned()).collect()
}

/// Renders an expectation list as `token 'a'` or `one of 'a', 'b' or 'c'`.
fn fmt_expected(expected: &[String], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let [single] = expected {
        write!(f, "token '{single}'")
    } else {
        write!(f, "one of ")?;
        for (i, expect) in expected.iter().enumerate() {
            if i == 0 {
                write!(f, "'{expect}'")?;
            } else if i == expected.len() - 1 {
                write!(f, " or '{expect}'")?;
            } else {
                write!(f, ", '{expect}'")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expected {
                expected,
                found,
                span,
                context,
            } => {
                write!(f, "expected ")?;
                fmt_expected(expected, f)?;
                write!(
                    f,
                    ", got '{found}' in {context} at line {}, col {}",
                    span.start().line_number(),
                    span.start().column_number()
                )
            }
            Self::AbruptEnd { expected } => {
                write!(f, "unexpected end of input, expecting ")?;
                fmt_expected(expected, f)
            }
            Self::Lex { err } => fmt::Display::fmt(err, f),
        }
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Lex { err } => Some(err),
            _ => None,
        }
    }
}
