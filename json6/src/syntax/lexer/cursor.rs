//! Module implementing the lexer cursor. This is used for managing the input byte stream.

use crate::syntax::Position;
use std::io::{self, Bytes, Error, ErrorKind, Read};

/// Cursor over the source code.
///
/// Decodes the underlying byte stream into code points, offers a one
/// character lookahead, and tracks the line and column of the next character.
#[derive(Debug)]
pub(super) struct Cursor<R> {
    iter: InnerIter<R>,
    peeked: Option<Option<char>>,
    pos: Position,
    last_was_cr: bool,
}

impl<R> Cursor<R> {
    /// Gets the current position of the cursor in the source code.
    #[inline]
    pub(super) fn pos(&self) -> Position {
        self.pos
    }

    /// Advances the position to the next column.
    #[inline]
    fn next_column(&mut self) {
        let current_line = self.pos.line_number();
        let next_column = self.pos.column_number() + 1;
        self.pos = Position::new(current_line, next_column);
    }

    /// Advances the position to the next line.
    #[inline]
    fn next_line(&mut self) {
        let next_line = self.pos.line_number() + 1;
        self.pos = Position::new(next_line, 1);
    }
}

impl<R> Cursor<R>
where
    R: Read,
{
    /// Creates a new lexer cursor.
    #[inline]
    pub(super) fn new(inner: R) -> Self {
        Self {
            iter: InnerIter::new(inner.bytes()),
            peeked: None,
            pos: Position::new(1, 1),
            last_was_cr: false,
        }
    }

    /// Peeks the next character without consuming it.
    #[inline]
    pub(super) fn peek(&mut self) -> Result<Option<char>, Error> {
        let iter = &mut self.iter;
        if let Some(v) = self.peeked {
            Ok(v)
        } else {
            let val = iter.next_char()?;
            self.peeked = Some(val);
            Ok(val)
        }
    }

    /// Compares the character passed in to the next character, if they match true is returned
    /// and the buffer is incremented.
    #[inline]
    pub(super) fn next_is(&mut self, peek: char) -> io::Result<bool> {
        Ok(match self.peek()? {
            Some(next) if next == peek => {
                let _ = self.next_char()?;
                true
            }
            _ => false,
        })
    }

    /// Applies the predicate to the next character and returns the result.
    /// Returns false if there is no next character.
    ///
    /// The buffer is not incremented.
    #[inline]
    pub(super) fn next_is_pred<F>(&mut self, pred: &F) -> io::Result<bool>
    where
        F: Fn(char) -> bool,
    {
        Ok(if let Some(peek) = self.peek()? {
            pred(peek)
        } else {
            false
        })
    }

    /// Retrieves the next character, advancing the position tracker.
    ///
    /// All four line terminators advance the line and reset the column; a
    /// `\n` directly following a `\r` is part of the same line break.
    pub(super) fn next_char(&mut self) -> Result<Option<char>, Error> {
        let chr = match self.peeked.take() {
            Some(v) => v,
            None => self.iter.next_char()?,
        };

        match chr {
            Some('\r') => {
                self.next_line();
                self.last_was_cr = true;
            }
            Some('\n') => {
                if !self.last_was_cr {
                    self.next_line();
                }
                self.last_was_cr = false;
            }
            Some('\u{2028}') | Some('\u{2029}') => {
                self.next_line();
                self.last_was_cr = false;
            }
            Some(_) => {
                self.next_column();
                self.last_was_cr = false;
            }
            None => {}
        }

        Ok(chr)
    }
}

/// Inner iterator for a cursor.
#[derive(Debug)]
struct InnerIter<R> {
    iter: Bytes<R>,
}

impl<R> InnerIter<R> {
    /// Creates a new inner iterator.
    #[inline]
    fn new(iter: Bytes<R>) -> Self {
        Self { iter }
    }
}

impl<R> InnerIter<R>
where
    R: Read,
{
    /// Retrieves the next UTF-8 checked character.
    fn next_char(&mut self) -> io::Result<Option<char>> {
        let first_byte = match self.iter.next().transpose()? {
            Some(b) => b,
            None => return Ok(None),
        };

        if first_byte < 0x80 {
            // 0b0xxx_xxxx
            return Ok(Some(first_byte.into()));
        }

        let num_bytes = if first_byte < 0xC0 {
            // A continuation byte cannot begin a sequence.
            return Err(invalid_utf8());
        } else if first_byte < 0xE0 {
            // 0b110x_xxxx
            2
        } else if first_byte < 0xF0 {
            // 0b1110_xxxx
            3
        } else if first_byte < 0xF8 {
            // 0b1111_0xxx
            4
        } else {
            return Err(invalid_utf8());
        };

        let mut buf = [first_byte, 0u8, 0u8, 0u8];
        for b in buf.iter_mut().take(num_bytes).skip(1) {
            *b = match self.iter.next() {
                Some(Ok(b)) => b,
                Some(Err(e)) => return Err(e),
                None => return Err(invalid_utf8()),
            };
        }

        match std::str::from_utf8(&buf[..num_bytes]) {
            Ok(s) => Ok(s.chars().next()),
            Err(_) => Err(invalid_utf8()),
        }
    }
}

fn invalid_utf8() -> Error {
    Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8")
}
