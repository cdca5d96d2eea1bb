//! A lexical analyzer for JSON6 source text.
//!
//! The lexer splits its input into a sequence of [`Token`]s. Each kind of
//! token has its own sub-machine, selected on the first significant
//! character; the keyword-shaped words (`true`, `null`, `Infinity`, ...)
//! share their lexical space with identifiers and fall back to an identifier
//! token when they diverge mid-word.

mod comment;
mod cursor;
mod error;
mod identifier;
mod number;
mod string;
mod token;
mod unicode;

#[cfg(test)]
mod tests;

pub use self::{
    error::Error,
    token::{Numeric, Punctuator, Token, TokenKind},
};

use self::{
    comment::{MultiLineComment, SingleLineComment},
    cursor::Cursor,
    identifier::Identifier,
    number::NumberLiteral,
    string::StringLiteral,
    unicode::UnicodeProperties,
};
use crate::syntax::{Position, Span};
use std::io::Read;

trait Tokenizer<R> {
    /// Lexes the next token.
    fn lex(&mut self, cursor: &mut Cursor<R>, start_pos: Position) -> Result<Token, Error>
    where
        R: Read;
}

/// A lexical analyzer for JSON6 source text.
#[derive(Debug)]
pub struct Lexer<R> {
    cursor: Cursor<R>,
    ignore_errors: bool,
}

impl<R> Lexer<R>
where
    R: Read,
{
    /// Creates a new lexer over the given byte source.
    pub fn new(reader: R) -> Self {
        Self {
            cursor: Cursor::new(reader),
            ignore_errors: false,
        }
    }

    /// Determines if the lexer ignores lexical errors.
    ///
    /// The default behavior is to stop on the first lexical error. With
    /// `ignore_errors(true)` the offending token is discarded and lexing
    /// resumes on the next character. Read failures are never ignored.
    pub fn ignore_errors(&mut self, ignore: bool) {
        self.ignore_errors = ignore;
    }

    /// Gets the current position of the lexer in the source.
    pub fn pos(&self) -> Position {
        self.cursor.pos()
    }

    /// Fetches the next token, or `None` at the end of the input.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        if !self.ignore_errors {
            return self.lex_token();
        }

        loop {
            match self.lex_token() {
                Err(Error::Io(err)) => return Err(Error::Io(err)),
                Err(_) => continue,
                other => return other,
            }
        }
    }

    /// Runs the lexer to completion, returning every token of the source in
    /// order.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }

        Ok(tokens)
    }

    fn lex_token(&mut self) -> Result<Option<Token>, Error> {
        // Whitespace is never part of a token.
        loop {
            match self.cursor.peek()? {
                Some(ch) if ch.is_json6_whitespace() => {
                    self.cursor.next_char()?;
                }
                _ => break,
            }
        }

        let start_pos = self.cursor.pos();
        let next_ch = match self.cursor.next_char()? {
            Some(ch) => ch,
            None => return Ok(None),
        };

        let token = match next_ch {
            '/' => self.lex_comment(start_pos)?,
            '"' | '\'' | '`' => StringLiteral::new(next_ch).lex(&mut self.cursor, start_pos)?,
            '-' | '+' | '.' => NumberLiteral::new(next_ch).lex(&mut self.cursor, start_pos)?,
            ch if ch.is_ascii_digit() => {
                NumberLiteral::new(ch).lex(&mut self.cursor, start_pos)?
            }
            ch => {
                if let Some(punc) = Punctuator::from_char(ch) {
                    Token::new(
                        TokenKind::Punctuator(punc),
                        punc.as_str(),
                        Span::new(start_pos, self.cursor.pos()),
                    )
                } else {
                    Identifier::new(ch).lex(&mut self.cursor, start_pos)?
                }
            }
        };

        Ok(Some(token))
    }

    fn lex_comment(&mut self, start_pos: Position) -> Result<Token, Error> {
        let pos = self.cursor.pos();
        match self.cursor.next_char()? {
            Some('/') => SingleLineComment.lex(&mut self.cursor, start_pos),
            Some('*') => MultiLineComment.lex(&mut self.cursor, start_pos),
            Some(ch) => Err(Error::invalid_char(ch, "'/' or '*'", pos)),
            None => Err(Error::unexpected_eof("'/' or '*'", self.cursor.pos())),
        }
    }
}
