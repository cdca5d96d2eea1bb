//! Object literal parsing.

use super::{Cursor, ParseError, TokenParser, ValueLiteral};
use crate::{
    syntax::lexer::{Punctuator, TokenKind},
    value::{Value, ValueMap},
};

/// Parses an object literal.
///
/// A key may be an identifier or a string literal; a trailing comma before
/// the closing brace is legal. Duplicate keys are not an error: the later
/// value overwrites the earlier one without moving the key.
///
/// Note: expects the opening `{` to already be consumed.
#[derive(Debug, Clone, Copy)]
pub(super) struct ObjectLiteral;

impl TokenParser for ObjectLiteral {
    type Output = Value;

    fn parse(self, cursor: &mut Cursor) -> Result<Value, ParseError> {
        let mut entries = ValueMap::default();

        loop {
            if cursor.next_if(Punctuator::CloseBlock).is_some() {
                break;
            }

            let key = match cursor.next() {
                Some(token) => match token.kind() {
                    TokenKind::Identifier(name) => name.to_string(),
                    TokenKind::StringLiteral(lit) => lit.to_string(),
                    _ => {
                        return Err(ParseError::expected(
                            &["identifier", "string", "}"],
                            token.raw(),
                            token.span(),
                            "object literal",
                        ));
                    }
                },
                None => return Err(ParseError::abrupt_end(&["identifier", "string", "}"])),
            };

            cursor.expect(Punctuator::Colon, "object literal")?;

            let value = ValueLiteral.parse(cursor)?;
            entries.insert(key, value);

            if cursor.next_if(Punctuator::CloseBlock).is_some() {
                break;
            }

            if cursor.next_if(Punctuator::Comma).is_none() {
                return match cursor.next() {
                    Some(token) => Err(ParseError::expected(
                        &[",", "}"],
                        token.raw(),
                        token.span(),
                        "object literal",
                    )),
                    None => Err(ParseError::abrupt_end(&[",", "}"])),
                };
            }
        }

        Ok(Value::Object(entries))
    }
}
