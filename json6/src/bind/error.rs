//! This module contains the errors used by the binder.

use crate::value::Value;
use std::{error, fmt};

/// An error that occurred while binding a value tree into a target.
#[derive(Debug)]
pub enum Error {
    /// The source value cannot be represented by the target type.
    MismatchType {
        /// A rendering of the source value and its kind.
        value: Box<str>,
        /// The name of the target type.
        target: &'static str,
    },
}

impl Error {
    /// Creates a new `MismatchType` error.
    pub(super) fn mismatch(value: &Value, target: &'static str) -> Self {
        Self::MismatchType {
            value: format!("{value} ({})", value.type_of()).into(),
            target,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchType { value, target } => {
                write!(f, "can not bind {value} to {target}")
            }
        }
    }
}

impl error::Error for Error {}
