//! Comment lexing.

use super::{unicode::is_line_terminator, Cursor, Error, Token, TokenKind, Tokenizer};
use crate::syntax::{Position, Span};
use std::io::Read;

/// Line comment lexing.
///
/// Note: expects the initial `//` to already be consumed from the cursor.
/// The terminating line terminator is not part of the token.
#[derive(Debug, Clone, Copy)]
pub(super) struct SingleLineComment;

impl<R> Tokenizer<R> for SingleLineComment {
    fn lex(&mut self, cursor: &mut Cursor<R>, start_pos: Position) -> Result<Token, Error>
    where
        R: Read,
    {
        let mut raw = String::from("//");

        loop {
            match cursor.peek()? {
                None => break,
                Some(ch) if is_line_terminator(ch) => break,
                Some(_) => {
                    if let Some(ch) = cursor.next_char()? {
                        raw.push(ch);
                    }
                }
            }
        }

        Ok(Token::new(
            TokenKind::Comment,
            raw,
            Span::new(start_pos, cursor.pos()),
        ))
    }
}

/// Block comment lexing.
///
/// Note: expects the initial `/*` to already be consumed from the cursor.
/// The closing `*/` must appear before the end of the input.
#[derive(Debug, Clone, Copy)]
pub(super) struct MultiLineComment;

impl<R> Tokenizer<R> for MultiLineComment {
    fn lex(&mut self, cursor: &mut Cursor<R>, start_pos: Position) -> Result<Token, Error>
    where
        R: Read,
    {
        let mut raw = String::from("/*");

        loop {
            match cursor.next_char()? {
                None => return Err(Error::unexpected_eof("'*/'", cursor.pos())),
                Some('*') => {
                    raw.push('*');
                    if cursor.next_is('/')? {
                        raw.push('/');
                        break;
                    }
                }
                Some(ch) => raw.push(ch),
            }
        }

        Ok(Token::new(
            TokenKind::Comment,
            raw,
            Span::new(start_pos, cursor.pos()),
        ))
    }
}
