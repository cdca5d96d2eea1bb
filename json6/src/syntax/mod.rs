//! Syntactical analysis of JSON6 source text.
//!
//! The two stages live here: the [`lexer`] segments a UTF-8 byte stream into
//! tokens, and the [`parser`] composes those tokens into a
//! [`Value`][crate::value::Value] tree.

pub mod lexer;
pub mod parser;

mod position;

pub use self::{
    lexer::Lexer,
    parser::Parser,
    position::{Position, Span},
};
