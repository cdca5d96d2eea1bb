//! This module implements the JSON6 value tree.
//!
//! Decoded content, utility methods and conversions between JSON6 values and
//! Rust values.

#[cfg(test)]
mod tests;

mod conversions;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::fmt;

#[cfg(feature = "deser")]
use serde::{Deserialize, Serialize};

/// The ordered mapping JSON6 objects decode into.
///
/// Keys are unique and iteration follows first-insertion order; writing an
/// existing key overwrites its value without moving the key.
pub type ValueMap = IndexMap<String, Value, FxBuildHasher>;

/// A JSON6 value.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `null` - a null value, for when a value exists but is empty.
    Null,
    /// `undefined` - an undefined value, for when a value does not exist.
    Undefined,
    /// `boolean` - a `true` / `false` value.
    Boolean(bool),
    /// A 64-bit signed integer, produced by decimal, hexadecimal, binary and
    /// octal literals.
    Integer(i64),
    /// A 64-bit floating point number, produced by fraction, exponent,
    /// `Infinity` and `NaN` literals.
    Rational(f64),
    /// A string, with escape sequences already decoded.
    String(Box<str>),
    /// An array of values, in source order, including elided elements.
    Array(Vec<Value>),
    /// An object: unique string keys mapped to values, in first-insertion
    /// order.
    Object(ValueMap),
}

impl Value {
    /// Creates a new `null` value.
    #[inline]
    pub fn null() -> Self {
        Self::Null
    }

    /// Creates a new `undefined` value.
    #[inline]
    pub fn undefined() -> Self {
        Self::Undefined
    }

    /// Returns true if the value is `null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the value is `undefined`.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true if the value is `null` or `undefined`.
    #[inline]
    pub fn is_null_or_undefined(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Returns the boolean if the value is a boolean.
    #[inline]
    pub fn as_boolean(&self) -> Option<bool> {
        match *self {
            Self::Boolean(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns the integer if the value is an integer.
    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Self::Integer(num) => Some(num),
            _ => None,
        }
    }

    /// Returns the floating point number if the value is a rational.
    #[inline]
    pub fn as_rational(&self) -> Option<f64> {
        match *self {
            Self::Rational(num) => Some(num),
            _ => None,
        }
    }

    /// Returns the string slice if the value is a string.
    #[inline]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns the elements if the value is an array.
    #[inline]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the entries if the value is an object.
    #[inline]
    pub fn as_object(&self) -> Option<&ValueMap> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Gets the name of the kind of the value, as used in diagnostics.
    pub fn type_of(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Rational(_) => "double",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Undefined => f.write_str("undefined"),
            Self::Boolean(lit) => write!(f, "{lit}"),
            Self::Integer(num) => write!(f, "{num}"),
            Self::Rational(num) => write!(f, "{num}"),
            Self::String(lit) => write!(f, "{lit:?}"),
            Self::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Self::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
