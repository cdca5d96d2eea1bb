//! A parser for JSON6 token streams.
//!
//! The parser is an expectation-driven recursive descent over the token
//! sequence produced by the lexer: at every point it knows the set of legal
//! next tokens and reports that set when something else shows up. Comments
//! are skipped everywhere. The result is a [`Value`] tree.

mod array;
mod cursor;
mod error;
mod object;


pub use self::error::{ParseError, ParseResult};

use self::{array::ArrayLiteral, cursor::Cursor, object::ObjectLiteral};
use crate::{
    syntax::lexer::{Lexer, Numeric, Punctuator, Token, TokenKind},
    value::Value,
};
use std::io::Read;

/// Trait implemented by the parsers of the individual grammar productions.
trait TokenParser: Sized {
    /// The resulting type of the production.
    type Output;

    /// Parses the production using the given token cursor.
    fn parse(self, cursor: &mut Cursor) -> Result<Self::Output, ParseError>;
}

/// JSON6 parser: builds a [`Value`] tree from a token sequence.
#[derive(Debug)]
pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    /// Creates a parser over an already-lexed token sequence.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            cursor: Cursor::new(tokens),
        }
    }

    /// Lexes the whole source and creates a parser over its tokens.
    pub fn from_reader<R>(reader: R) -> Result<Self, ParseError>
    where
        R: Read,
    {
        let mut lexer = Lexer::new(reader);
        Ok(Self::new(lexer.tokenize()?))
    }

    /// Parses the single top-level value of the source.
    ///
    /// After the value, only comments may remain in the stream.
    pub fn parse_all(mut self) -> ParseResult {
        let value = ValueLiteral.parse(&mut self.cursor)?;

        if let Some(token) = self.cursor.next() {
            return Err(ParseError::expected(
                &["end of input"],
                token.raw(),
                token.span(),
                "top level",
            ));
        }

        Ok(value)
    }
}

/// Parses a single JSON6 value: a scalar token, an object or an array.
#[derive(Debug, Clone, Copy)]
struct ValueLiteral;

impl TokenParser for ValueLiteral {
    type Output = Value;

    fn parse(self, cursor: &mut Cursor) -> ParseResult {
        let token = match cursor.next() {
            Some(token) => token,
            None => return Err(ParseError::abrupt_end(&["value"])),
        };

        let value = match token.kind() {
            TokenKind::NullLiteral => Value::Null,
            TokenKind::UndefinedLiteral => Value::Undefined,
            TokenKind::BooleanLiteral(lit) => Value::Boolean(*lit),
            TokenKind::NumericLiteral(Numeric::Integer(num)) => Value::Integer(*num),
            TokenKind::NumericLiteral(Numeric::Rational(num)) => Value::Rational(*num),
            TokenKind::StringLiteral(lit) => Value::String(lit.clone()),
            TokenKind::Punctuator(Punctuator::OpenBlock) => ObjectLiteral.parse(cursor)?,
            TokenKind::Punctuator(Punctuator::OpenBracket) => ArrayLiteral.parse(cursor)?,
            _ => {
                return Err(ParseError::expected(
                    &["value"],
                    token.raw(),
                    token.span(),
                    "JSON6 value",
                ));
            }
        };

        Ok(value)
    }
}
