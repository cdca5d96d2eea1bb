//! Array literal parsing.

use super::{Cursor, ParseError, TokenParser, ValueLiteral};
use crate::{syntax::lexer::Punctuator, value::Value};

/// Parses an array literal.
///
/// A comma in value position is an elision and produces a `Null` element; a
/// trailing comma before the closing bracket adds nothing, so `[1,,,2]` has
/// four elements while `[1,2,3,]` has three.
///
/// Note: expects the opening `[` to already be consumed.
#[derive(Debug, Clone, Copy)]
pub(super) struct ArrayLiteral;

impl TokenParser for ArrayLiteral {
    type Output = Value;

    fn parse(self, cursor: &mut Cursor) -> Result<Value, ParseError> {
        let mut elements = Vec::new();
        let mut expect_value = true;

        loop {
            if cursor.peek().is_none() {
                let expected: &[&str] = if expect_value {
                    &["value", ",", "]"]
                } else {
                    &[",", "]"]
                };
                return Err(ParseError::abrupt_end(expected));
            }

            if cursor.next_if(Punctuator::CloseBracket).is_some() {
                break;
            }

            if cursor.next_if(Punctuator::Comma).is_some() {
                if expect_value {
                    elements.push(Value::Null);
                }
                expect_value = true;
                continue;
            }

            if !expect_value {
                let token = cursor.next().expect("peeked token vanished");
                return Err(ParseError::expected(
                    &[",", "]"],
                    token.raw(),
                    token.span(),
                    "array literal",
                ));
            }

            elements.push(ValueLiteral.parse(cursor)?);
            expect_value = false;
        }

        Ok(Value::Array(elements))
    }
}
