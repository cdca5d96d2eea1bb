//! This module implements lexing for number literals.

use super::{unicode::UnicodeProperties, Cursor, Error, Numeric, Punctuator, Token, TokenKind, Tokenizer};
use crate::syntax::{Position, Span};
use std::io::Read;

/// Number literal lexing.
///
/// Covers every numeric form of the grammar: a run of `-` signs each flipping
/// the sign, a single leading `+`, hex/binary/octal literals behind a `0`
/// prefix, fraction and exponent forms with a leading or trailing decimal
/// point, underscore separators between digits, and the `Infinity` and `NaN`
/// words, which must complete once a sign committed the machine to a number.
///
/// Note: expects the initial sign, digit or decimal point to already be
/// consumed from the cursor (stored in `init`).
#[derive(Debug, Clone, Copy)]
pub(super) struct NumberLiteral {
    init: char,
}

impl NumberLiteral {
    /// Creates a new number literal lexer.
    pub(super) fn new(init: char) -> Self {
        Self { init }
    }
}

/// This is a helper structure.
///
/// This structure helps with identifying what numerical type it is and what
/// base it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericKind {
    Rational,
    Integer(u32),
}

impl NumericKind {
    /// Gets the base of the number kind.
    fn base(self) -> u32 {
        match self {
            Self::Rational => 10,
            Self::Integer(base) => base,
        }
    }

    /// Gets the display name of a digit in this base.
    fn digit_name(self) -> &'static str {
        match self {
            Self::Integer(16) => "hexadecimal digit",
            Self::Integer(8) => "octal digit",
            Self::Integer(2) => "binary digit",
            _ => "decimal digit",
        }
    }

    /// Gets the expectation text used when the literal ends on an invalid
    /// character.
    fn end_of_value_expectation(self) -> &'static str {
        match self {
            Self::Integer(16) => "hexadecimal digit, separator, punctuator, or whitespace",
            Self::Integer(8) => "octal digit, separator, punctuator, or whitespace",
            Self::Integer(2) => "binary digit, separator, punctuator, or whitespace",
            _ => "decimal digit, separator, punctuator, or whitespace",
        }
    }
}

impl<R> Tokenizer<R> for NumberLiteral {
    fn lex(&mut self, cursor: &mut Cursor<R>, start_pos: Position) -> Result<Token, Error>
    where
        R: Read,
    {
        let mut raw = String::new();
        let mut clean = String::new();
        let mut kind = NumericKind::Integer(10);
        let mut negative = false;

        let mut init = self.init;

        // A run of '-' flips the sign on each repetition; '+' may appear once.
        // After any sign only a digit, '.', 'I' or 'N' may follow.
        if init == '-' {
            raw.push('-');
            negative = true;
            init = loop {
                let pos = cursor.pos();
                match cursor.next_char()? {
                    Some('-') => {
                        raw.push('-');
                        negative = !negative;
                    }
                    Some(ch) if is_begin_after_sign(ch) => break ch,
                    Some(ch) => {
                        raw.push(ch);
                        return Err(Error::invalid_char(
                            ch,
                            "decimal digit, '-', '.', 'I', or 'N'",
                            pos,
                        ));
                    }
                    None => {
                        return Err(Error::unexpected_eof(
                            "decimal digit, '-', '.', 'I', or 'N'",
                            cursor.pos(),
                        ));
                    }
                }
            };
        } else if init == '+' {
            raw.push('+');
            let pos = cursor.pos();
            init = match cursor.next_char()? {
                Some(ch) if is_begin_after_sign(ch) => ch,
                Some(ch) => {
                    raw.push(ch);
                    return Err(Error::invalid_char(ch, "decimal digit, '.', 'I', or 'N'", pos));
                }
                None => {
                    return Err(Error::unexpected_eof(
                        "decimal digit, '.', 'I', or 'N'",
                        cursor.pos(),
                    ));
                }
            };
        }

        match init {
            'I' => {
                raw.push('I');
                take_literal_tail(cursor, &mut raw, "nfinity")?;
                check_end_of_value(cursor, "whitespace, punctuator, or line terminator")?;
                let value = if negative {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                };
                return Ok(Token::new(
                    TokenKind::numeric_literal(value),
                    raw,
                    Span::new(start_pos, cursor.pos()),
                ));
            }
            'N' => {
                raw.push('N');
                take_literal_tail(cursor, &mut raw, "aN")?;
                check_end_of_value(cursor, "whitespace, punctuator, or line terminator")?;
                // The sign is accepted syntactically but NaN carries none.
                return Ok(Token::new(
                    TokenKind::numeric_literal(f64::NAN),
                    raw,
                    Span::new(start_pos, cursor.pos()),
                ));
            }
            '.' => {
                raw.push('.');
                clean.push_str("0.");
                // A fractional literal without an integer part needs at least
                // one digit after the decimal point.
                let pos = cursor.pos();
                match cursor.next_char()? {
                    Some(ch) if ch.is_ascii_digit() => {
                        raw.push(ch);
                        clean.push(ch);
                    }
                    Some(ch) => {
                        raw.push(ch);
                        return Err(Error::invalid_char(ch, "decimal digit", pos));
                    }
                    None => return Err(Error::unexpected_eof("decimal digit", cursor.pos())),
                }
                kind = lex_fraction_rest(cursor, &mut raw, &mut clean, true)?;
            }
            '0' => {
                raw.push('0');
                match cursor.peek()? {
                    Some(ch @ ('x' | 'X')) => {
                        cursor.next_char()?;
                        raw.push(ch);
                        kind = NumericKind::Integer(16);
                        lex_radix_digits(cursor, &mut raw, &mut clean, kind)?;
                    }
                    Some(ch @ ('o' | 'O')) => {
                        cursor.next_char()?;
                        raw.push(ch);
                        kind = NumericKind::Integer(8);
                        lex_radix_digits(cursor, &mut raw, &mut clean, kind)?;
                    }
                    Some(ch @ ('b' | 'B')) => {
                        cursor.next_char()?;
                        raw.push(ch);
                        kind = NumericKind::Integer(2);
                        lex_radix_digits(cursor, &mut raw, &mut clean, kind)?;
                    }
                    Some('.') => {
                        cursor.next_char()?;
                        raw.push('.');
                        clean.push_str("0.");
                        kind = lex_fraction_rest(cursor, &mut raw, &mut clean, false)?;
                    }
                    Some(ch @ ('e' | 'E')) => {
                        cursor.next_char()?;
                        raw.push(ch);
                        clean.push_str("0e");
                        kind = lex_exponent_rest(cursor, &mut raw, &mut clean)?;
                    }
                    Some(ch) if ch.is_ascii_digit() => {
                        clean.push('0');
                        kind = lex_decimal_rest(cursor, &mut raw, &mut clean)?;
                    }
                    Some('_') => {
                        clean.push('0');
                        cursor.next_char()?;
                        raw.push('_');
                        take_separated_digit(cursor, &mut raw, &mut clean, kind)?;
                        kind = lex_decimal_rest(cursor, &mut raw, &mut clean)?;
                    }
                    _ => {
                        clean.push('0');
                        check_end_of_value(
                            cursor,
                            "decimal digit, base or exponent indicator, decimal point, \
                             separator, punctuator, or whitespace",
                        )?;
                    }
                }
            }
            ch if ch.is_ascii_digit() => {
                raw.push(ch);
                clean.push(ch);
                kind = lex_decimal_rest(cursor, &mut raw, &mut clean)?;
            }
            _ => unreachable!("number literal can only begin with a digit, a sign, '.', 'I', or 'N'"),
        }

        let numeric = match kind {
            NumericKind::Rational => {
                let abs: f64 = fast_float2::parse(&clean)
                    .map_err(|_| Error::number_out_of_range(raw.clone(), start_pos))?;
                Numeric::Rational(if negative { -abs } else { abs })
            }
            NumericKind::Integer(base) => {
                let magnitude = u64::from_str_radix(&clean, base)
                    .map_err(|_| Error::number_out_of_range(raw.clone(), start_pos))?;
                let value = if negative {
                    if magnitude > i64::MAX as u64 + 1 {
                        return Err(Error::number_out_of_range(raw, start_pos));
                    }
                    (-(magnitude as i128)) as i64
                } else {
                    i64::try_from(magnitude)
                        .map_err(|_| Error::number_out_of_range(raw.clone(), start_pos))?
                };
                Numeric::Integer(value)
            }
        };

        Ok(Token::new(
            TokenKind::NumericLiteral(numeric),
            raw,
            Span::new(start_pos, cursor.pos()),
        ))
    }
}

/// Checks if a character may begin the numeric part after a sign.
fn is_begin_after_sign(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | 'I' | 'N')
}

/// Consumes the remaining characters of a fixed word such as `Infinity`.
fn take_literal_tail<R>(cursor: &mut Cursor<R>, raw: &mut String, tail: &str) -> Result<(), Error>
where
    R: Read,
{
    for expected in tail.chars() {
        let pos = cursor.pos();
        match cursor.next_char()? {
            Some(ch) if ch == expected => raw.push(ch),
            Some(ch) => {
                raw.push(ch);
                return Err(Error::invalid_char(ch, format!("'{expected}'"), pos));
            }
            None => return Err(Error::unexpected_eof(format!("'{expected}'"), cursor.pos())),
        }
    }

    Ok(())
}

/// Consumes the integer-part continuation of a decimal literal, then an
/// optional fraction or exponent part.
fn lex_decimal_rest<R>(
    cursor: &mut Cursor<R>,
    raw: &mut String,
    clean: &mut String,
) -> Result<NumericKind, Error>
where
    R: Read,
{
    loop {
        match cursor.peek()? {
            Some(ch) if ch.is_ascii_digit() => {
                cursor.next_char()?;
                raw.push(ch);
                clean.push(ch);
            }
            Some('_') => {
                cursor.next_char()?;
                raw.push('_');
                take_separated_digit(cursor, raw, clean, NumericKind::Integer(10))?;
            }
            Some('.') => {
                cursor.next_char()?;
                raw.push('.');
                clean.push('.');
                return lex_fraction_rest(cursor, raw, clean, false);
            }
            Some(ch @ ('e' | 'E')) => {
                cursor.next_char()?;
                raw.push(ch);
                clean.push('e');
                return lex_exponent_rest(cursor, raw, clean);
            }
            _ => {
                check_end_of_value(
                    cursor,
                    "decimal digit, decimal point, exponent indicator, separator, \
                     punctuator, or whitespace",
                )?;
                return Ok(NumericKind::Integer(10));
            }
        }
    }
}

/// Consumes the fraction digits after a decimal point, then an optional
/// exponent part.
///
/// The caller has already consumed the integer part or the first fraction
/// digit, so a trailing decimal point like `123.` is complete here. A
/// separator is only legal between two fraction digits.
fn lex_fraction_rest<R>(
    cursor: &mut Cursor<R>,
    raw: &mut String,
    clean: &mut String,
    mut prev_digit: bool,
) -> Result<NumericKind, Error>
where
    R: Read,
{
    loop {
        match cursor.peek()? {
            Some(ch) if ch.is_ascii_digit() => {
                cursor.next_char()?;
                raw.push(ch);
                clean.push(ch);
                prev_digit = true;
            }
            Some('_') if prev_digit => {
                cursor.next_char()?;
                raw.push('_');
                take_separated_digit(cursor, raw, clean, NumericKind::Rational)?;
            }
            Some(ch @ ('e' | 'E')) => {
                cursor.next_char()?;
                raw.push(ch);
                if clean.ends_with('.') {
                    clean.push('0');
                }
                clean.push('e');
                return lex_exponent_rest(cursor, raw, clean);
            }
            _ => {
                check_end_of_value(
                    cursor,
                    "decimal digit, exponent indicator, separator, punctuator, or whitespace",
                )?;
                return Ok(NumericKind::Rational);
            }
        }
    }
}

/// Consumes an exponent part: an optional sign, then one or more digits.
fn lex_exponent_rest<R>(
    cursor: &mut Cursor<R>,
    raw: &mut String,
    clean: &mut String,
) -> Result<NumericKind, Error>
where
    R: Read,
{
    let pos = cursor.pos();
    match cursor.next_char()? {
        Some(ch @ ('+' | '-')) => {
            raw.push(ch);
            clean.push(ch);
            let pos = cursor.pos();
            match cursor.next_char()? {
                Some(digit) if digit.is_ascii_digit() => {
                    raw.push(digit);
                    clean.push(digit);
                }
                Some(other) => {
                    raw.push(other);
                    return Err(Error::invalid_char(other, "decimal digit", pos));
                }
                None => return Err(Error::unexpected_eof("decimal digit", cursor.pos())),
            }
        }
        Some(digit) if digit.is_ascii_digit() => {
            raw.push(digit);
            clean.push(digit);
        }
        Some(other) => {
            raw.push(other);
            return Err(Error::invalid_char(other, "'+', '-', or decimal digit", pos));
        }
        None => {
            return Err(Error::unexpected_eof(
                "'+', '-', or decimal digit",
                cursor.pos(),
            ));
        }
    }

    loop {
        match cursor.peek()? {
            Some(ch) if ch.is_ascii_digit() => {
                cursor.next_char()?;
                raw.push(ch);
                clean.push(ch);
            }
            Some('_') => {
                cursor.next_char()?;
                raw.push('_');
                take_separated_digit(cursor, raw, clean, NumericKind::Rational)?;
            }
            _ => {
                check_end_of_value(
                    cursor,
                    "decimal digit, separator, punctuator, or whitespace",
                )?;
                return Ok(NumericKind::Rational);
            }
        }
    }
}

/// Consumes the digits of a hex, octal or binary literal. At least one digit
/// must follow the base prefix.
fn lex_radix_digits<R>(
    cursor: &mut Cursor<R>,
    raw: &mut String,
    clean: &mut String,
    kind: NumericKind,
) -> Result<(), Error>
where
    R: Read,
{
    let base = kind.base();
    let mut prev_digit = false;

    loop {
        match cursor.peek()? {
            Some(ch) if ch.is_digit(base) => {
                cursor.next_char()?;
                raw.push(ch);
                clean.push(ch);
                prev_digit = true;
            }
            Some('_') if prev_digit => {
                cursor.next_char()?;
                raw.push('_');
                take_separated_digit(cursor, raw, clean, kind)?;
            }
            _ if !prev_digit => {
                let pos = cursor.pos();
                return match cursor.next_char()? {
                    Some(ch) => {
                        raw.push(ch);
                        Err(Error::invalid_char(ch, kind.digit_name(), pos))
                    }
                    None => Err(Error::unexpected_eof(kind.digit_name(), cursor.pos())),
                };
            }
            _ => {
                check_end_of_value(cursor, kind.end_of_value_expectation())?;
                return Ok(());
            }
        }
    }
}

/// Consumes the digit required directly after a separator.
///
/// A separator may only stand between two digits: never doubled, never at the
/// start of a sub-literal, and never before the end of the value.
fn take_separated_digit<R>(
    cursor: &mut Cursor<R>,
    raw: &mut String,
    clean: &mut String,
    kind: NumericKind,
) -> Result<(), Error>
where
    R: Read,
{
    let pos = cursor.pos();
    match cursor.next_char()? {
        Some(ch) if ch.is_digit(kind.base()) => {
            raw.push(ch);
            clean.push(ch);
            Ok(())
        }
        Some(ch) => {
            raw.push(ch);
            Err(Error::invalid_char(ch, kind.digit_name(), pos))
        }
        None => Err(Error::unexpected_eof(kind.digit_name(), cursor.pos())),
    }
}

/// Checks that the literal is followed by a valid end of value: whitespace, a
/// line terminator, a punctuator, the start of a comment, or the end of the
/// input. The terminating character is left in the cursor.
fn check_end_of_value<R>(cursor: &mut Cursor<R>, expected: &str) -> Result<(), Error>
where
    R: Read,
{
    match cursor.peek()? {
        None => Ok(()),
        Some(ch) if ch.is_json6_whitespace() => Ok(()),
        Some(ch) if Punctuator::from_char(ch).is_some() => Ok(()),
        Some('/') => Ok(()),
        Some(ch) => {
            let pos = cursor.pos();
            cursor.next_char()?;
            Err(Error::invalid_char(ch, expected, pos))
        }
    }
}
