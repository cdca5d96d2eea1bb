//! A JSON6 decoder.
//!
//! JSON6 is a lenient, ES6-flavored superset of JSON: unquoted identifier
//! keys, single/double/backtick string quoting with the full escape alphabet,
//! hexadecimal/binary/octal integers with underscore digit separators,
//! leading and trailing decimal points, `Infinity` and `NaN`, `+`/`-` and
//! repeated `-` number signs, `undefined`, line and block comments, trailing
//! commas and array holes.
//!
//! Decoding is a two-stage pipeline. The [`Lexer`] segments UTF-8 source into
//! tokens, the [`Parser`] composes them into a [`Value`] tree, and the
//! [`bind`] layer assigns the tree into a caller-supplied target: a scalar, a
//! sequence, a string-keyed mapping, a [`Record`] with tagged fields, or an
//! open [`Value`].
//!
//! # Example
//!
//! ```
//! let value = json6::parse_from_str("{ answer: 0x2A, /* elided */ extras: [1,,2,] }").unwrap();
//!
//! let object = value.as_object().unwrap();
//! assert_eq!(object["answer"].as_integer(), Some(42));
//! assert_eq!(object["extras"].as_array().unwrap().len(), 3);
//! ```
//!
//! Decoding into a typed target:
//!
//! ```
//! let mut ports: Vec<i64> = Vec::new();
//! json6::decode_from_str("[0x50, 8_080, 9e3]", &mut ports).unwrap();
//! assert_eq!(ports, vec![80, 8080, 9000]);
//! ```

#![deny(
    unused_qualifications,
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style
)]
#![warn(clippy::perf, clippy::single_match_else, clippy::dbg_macro)]
#![allow(
    clippy::missing_inline_in_public_items,
    clippy::cognitive_complexity,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::as_conversions
)]

pub mod bind;
pub mod syntax;
pub mod value;

pub use crate::{
    bind::{Bind, Field, Record},
    syntax::{
        lexer::Lexer,
        parser::{ParseError, Parser},
        Position, Span,
    },
    value::{Value, ValueMap},
};

use std::{error, fmt};

/// An error produced by a decode call: either the source failed to lex or
/// parse, or the decoded value tree did not fit the target.
#[derive(Debug)]
pub enum Error {
    /// The source failed to lex or parse.
    Parse(ParseError),
    /// The decoded value tree does not fit the target.
    Bind(bind::Error),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<bind::Error> for Error {
    fn from(err: bind::Error) -> Self {
        Self::Bind(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => fmt::Display::fmt(err, f),
            Self::Bind(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Bind(err) => Some(err),
        }
    }
}

/// Parses JSON6 source text into a [`Value`] tree.
pub fn parse_from_str(src: &str) -> Result<Value, Error> {
    parse_from_slice(src.as_bytes())
}

/// Parses JSON6 source bytes into a [`Value`] tree.
pub fn parse_from_slice(src: &[u8]) -> Result<Value, Error> {
    let parser = Parser::from_reader(src)?;
    Ok(parser.parse_all()?)
}

/// Decodes JSON6 source text into a caller-supplied target.
pub fn decode_from_str<T>(src: &str, target: &mut T) -> Result<(), Error>
where
    T: Bind,
{
    decode_from_slice(src.as_bytes(), target)
}

/// Decodes JSON6 source bytes into a caller-supplied target.
pub fn decode_from_slice<T>(src: &[u8], target: &mut T) -> Result<(), Error>
where
    T: Bind,
{
    let value = parse_from_slice(src)?;
    Ok(target.bind(&value)?)
}
