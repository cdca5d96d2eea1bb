//! Cursor implementation for the parser.

use super::ParseError;
use crate::syntax::lexer::{Punctuator, Token, TokenKind};

/// Token cursor.
///
/// A forward-only cursor over the token sequence produced by the lexer.
/// Comment tokens carry no meaning in the grammar, so the cursor silently
/// skips them; the end of the stream is `None`, distinct from every token
/// kind.
#[derive(Debug)]
pub(super) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    /// Creates a new cursor over a token sequence.
    pub(super) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Moves the cursor to the next significant token and returns it.
    pub(super) fn next(&mut self) -> Option<Token> {
        self.skip_comments();
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }

        token
    }

    /// Peeks the next significant token without moving the cursor.
    pub(super) fn peek(&mut self) -> Option<&Token> {
        self.skip_comments();
        self.tokens.get(self.pos)
    }

    /// If the next significant token is the given punctuator, consumes it and
    /// returns it.
    pub(super) fn next_if(&mut self, punc: Punctuator) -> Option<Token> {
        let found = matches!(
            self.peek().map(Token::kind),
            Some(TokenKind::Punctuator(p)) if *p == punc
        );
        if found {
            self.next()
        } else {
            None
        }
    }

    /// Consumes the next token, checking that it is the given punctuator.
    pub(super) fn expect(
        &mut self,
        punc: Punctuator,
        context: &'static str,
    ) -> Result<Token, ParseError> {
        match self.next() {
            Some(token) => {
                if matches!(token.kind(), TokenKind::Punctuator(p) if *p == punc) {
                    Ok(token)
                } else {
                    Err(ParseError::expected(
                        &[punc.as_str()],
                        token.raw(),
                        token.span(),
                        context,
                    ))
                }
            }
            None => Err(ParseError::abrupt_end(&[punc.as_str()])),
        }
    }

    fn skip_comments(&mut self) {
        while matches!(
            self.tokens.get(self.pos).map(Token::kind),
            Some(TokenKind::Comment)
        ) {
            self.pos += 1;
        }
    }
}
