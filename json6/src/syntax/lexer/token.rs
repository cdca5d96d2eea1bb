//! This module implements all of the tokens of the JSON6 grammar.

use crate::syntax::Span;
use std::fmt;

#[cfg(feature = "deser")]
use serde::{Deserialize, Serialize};

/// This represents the smallest individual unit of JSON6 source text.
///
/// Besides its kind, every token keeps the exact source characters it was
/// lexed from and its position in the source.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token kind, which contains the decoded data of the token.
    kind: TokenKind,
    /// The exact source characters that composed the token.
    raw: Box<str>,
    /// The token position in the original source code.
    span: Span,
}

impl Token {
    /// Creates a new token from its kind, raw source text and span.
    #[inline]
    pub fn new<R>(kind: TokenKind, raw: R, span: Span) -> Self
    where
        R: Into<Box<str>>,
    {
        Self {
            kind,
            raw: raw.into(),
            span,
        }
    }

    /// Gets the kind of the token.
    #[inline]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Gets the exact source characters that composed the token.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Gets the token span in the original source code.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Represents the two numeric sub-kinds of a number token.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// A 64-bit floating point number.
    Rational(f64),

    /// A 64-bit signed integer.
    Integer(i64),
}

impl From<f64> for Numeric {
    #[inline]
    fn from(n: f64) -> Self {
        Self::Rational(n)
    }
}

impl From<i64> for Numeric {
    #[inline]
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

/// The six structural punctuators of the JSON6 grammar.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuator {
    /// `{`
    OpenBlock,
    /// `}`
    CloseBlock,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
}

impl Punctuator {
    /// Gets the punctuator as a static string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenBlock => "{",
            Self::CloseBlock => "}",
            Self::OpenBracket => "[",
            Self::CloseBracket => "]",
            Self::Colon => ":",
            Self::Comma => ",",
        }
    }

    /// Gets the punctuator corresponding to a source character, if any.
    pub(crate) fn from_char(ch: char) -> Option<Self> {
        match ch {
            '{' => Some(Self::OpenBlock),
            '}' => Some(Self::CloseBlock),
            '[' => Some(Self::OpenBracket),
            ']' => Some(Self::CloseBracket),
            ':' => Some(Self::Colon),
            ',' => Some(Self::Comma),
            _ => None,
        }
    }
}

impl fmt::Display for Punctuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents the type of a token and the decoded data it carries.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A boolean literal, which is either `true` or `false`.
    BooleanLiteral(bool),

    /// An identifier, with escape sequences decoded.
    Identifier(Box<str>),

    /// A `null` literal.
    NullLiteral,

    /// An `undefined` literal.
    UndefinedLiteral,

    /// A numeric literal.
    NumericLiteral(Numeric),

    /// A piece of punctuation.
    Punctuator(Punctuator),

    /// A string literal, with escape sequences decoded.
    StringLiteral(Box<str>),

    /// A comment. Comments are tokens, but carry no meaning in the grammar.
    Comment,
}

impl From<bool> for TokenKind {
    fn from(oth: bool) -> Self {
        Self::BooleanLiteral(oth)
    }
}

impl From<Punctuator> for TokenKind {
    fn from(punc: Punctuator) -> Self {
        Self::Punctuator(punc)
    }
}

impl From<Numeric> for TokenKind {
    fn from(num: Numeric) -> Self {
        Self::NumericLiteral(num)
    }
}

impl TokenKind {
    /// Creates a `BooleanLiteral` token kind.
    pub fn boolean_literal(lit: bool) -> Self {
        Self::BooleanLiteral(lit)
    }

    /// Creates an `Identifier` token kind.
    pub fn identifier<I>(ident: I) -> Self
    where
        I: Into<Box<str>>,
    {
        Self::Identifier(ident.into())
    }

    /// Creates a `NumericLiteral` token kind.
    pub fn numeric_literal<L>(lit: L) -> Self
    where
        L: Into<Numeric>,
    {
        Self::NumericLiteral(lit.into())
    }

    /// Creates a `StringLiteral` token kind.
    pub fn string_literal<S>(lit: S) -> Self
    where
        S: Into<Box<str>>,
    {
        Self::StringLiteral(lit.into())
    }
}
