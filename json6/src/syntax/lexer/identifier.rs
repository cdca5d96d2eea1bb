//! This module implements lexing for identifiers, including the keyword
//! fallback.

use super::{
    string::StringLiteral, unicode::UnicodeProperties, Cursor, Error, Punctuator, Token,
    TokenKind, Tokenizer,
};
use crate::syntax::{Position, Span};
use std::io::Read;

const EXPECTED_START: &str = "'$', '_', a unicode escape sequence, or a character in categories \
                              Lu, Ll, Lt, Lm, Lo, or Nl";
const EXPECTED_PART: &str = "'$', '_', a unicode escape sequence, or a character in categories \
                             Lu, Ll, Lt, Lm, Lo, Nl, Mn, Mc, Nd, or Pc";

/// Identifier lexing.
///
/// The sub-machine consumes a whole identifier and only then classifies its
/// raw character sequence: `true`, `false`, `null`, `undefined`, `Infinity`
/// and `NaN` written without escapes become their literal tokens, anything
/// else is an identifier. A keyword attempt that diverges mid-word therefore
/// keeps every consumed character and ends up an identifier, and a word
/// assembled with escape sequences is always an identifier.
///
/// Note: expects the initial character to already be consumed from the cursor.
#[derive(Debug, Clone, Copy)]
pub(super) struct Identifier {
    init: char,
}

impl Identifier {
    /// Creates a new identifier lexer.
    pub(super) fn new(init: char) -> Self {
        Self { init }
    }
}

impl<R> Tokenizer<R> for Identifier {
    fn lex(&mut self, cursor: &mut Cursor<R>, start_pos: Position) -> Result<Token, Error>
    where
        R: Read,
    {
        let mut raw = String::new();
        let mut decoded = String::new();

        if self.init == '\\' {
            raw.push('\\');
            let ch = take_identifier_escape(cursor, &mut raw)?;
            if !ch.is_identifier_start() {
                return Err(Error::invalid_char(ch, EXPECTED_START, start_pos));
            }
            decoded.push(ch);
        } else if self.init.is_identifier_start() {
            raw.push(self.init);
            decoded.push(self.init);
        } else {
            raw.push(self.init);
            return Err(Error::invalid_char(self.init, EXPECTED_START, start_pos));
        }

        loop {
            match cursor.peek()? {
                None => break,
                Some(ch) if ch.is_json6_whitespace() => break,
                Some(ch) if Punctuator::from_char(ch).is_some() => break,
                // A comment may directly terminate the identifier.
                Some('/') => break,
                Some('\\') => {
                    cursor.next_char()?;
                    raw.push('\\');
                    let escape_pos = cursor.pos();
                    let ch = take_identifier_escape(cursor, &mut raw)?;
                    if !ch.is_identifier_part() {
                        return Err(Error::invalid_char(ch, EXPECTED_PART, escape_pos));
                    }
                    decoded.push(ch);
                }
                Some(ch) if ch.is_identifier_part() => {
                    cursor.next_char()?;
                    raw.push(ch);
                    decoded.push(ch);
                }
                Some(ch) => {
                    let pos = cursor.pos();
                    cursor.next_char()?;
                    raw.push(ch);
                    return Err(Error::invalid_char(ch, EXPECTED_PART, pos));
                }
            }
        }

        let kind = match raw.as_str() {
            "true" => TokenKind::BooleanLiteral(true),
            "false" => TokenKind::BooleanLiteral(false),
            "null" => TokenKind::NullLiteral,
            "undefined" => TokenKind::UndefinedLiteral,
            "Infinity" => TokenKind::numeric_literal(f64::INFINITY),
            "NaN" => TokenKind::numeric_literal(f64::NAN),
            _ => TokenKind::identifier(decoded),
        };

        Ok(Token::new(kind, raw, Span::new(start_pos, cursor.pos())))
    }
}

/// Lexes the tail of an identifier escape sequence, with the backslash
/// already consumed, and decodes it to a character.
///
/// Only unicode escapes are valid in identifiers, so the backslash must be
/// followed by `u`.
fn take_identifier_escape<R>(cursor: &mut Cursor<R>, raw: &mut String) -> Result<char, Error>
where
    R: Read,
{
    let pos = cursor.pos();
    match cursor.next_char()? {
        Some('u') => raw.push('u'),
        Some(ch) => {
            raw.push(ch);
            return Err(Error::invalid_char(ch, "'u'", pos));
        }
        None => return Err(Error::unexpected_eof("'u'", cursor.pos())),
    }

    let escape_pos = cursor.pos();
    let code_point = StringLiteral::take_unicode_escape_sequence(cursor, raw, None)?;
    char::from_u32(code_point).ok_or_else(|| {
        Error::invalid_char(char::REPLACEMENT_CHARACTER, "a Unicode scalar value", escape_pos)
    })
}
