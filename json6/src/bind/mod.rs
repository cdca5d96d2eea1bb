//! Binding of decoded value trees onto caller-supplied targets.
//!
//! The binder is a small capability protocol: anything that can receive a
//! decoded value implements [`Bind`], and the decoder walks the value tree
//! calling into the target. Scalars, growable and fixed-length sequences,
//! string-keyed open mappings, optional holders and [`Record`] types with
//! tagged fields are supported out of the box; `null` and `undefined` zero
//! whatever they are bound to.

mod error;
mod record;


pub use self::{
    error::Error,
    record::{Field, Record},
};

use crate::value::Value;
use indexmap::IndexMap;
use std::{
    collections::HashMap,
    hash::BuildHasher,
};

/// A target that a decoded value can be bound into.
///
/// Binding mutates the target in place: a matching value replaces the
/// previous contents, `null` and `undefined` reset them to the zero value,
/// and a value of the wrong shape leaves the target untouched and reports a
/// [`MismatchType`][Error::MismatchType] error.
pub trait Bind {
    /// Assigns the given value into `self`.
    fn bind(&mut self, value: &Value) -> Result<(), Error>;
}

macro_rules! impl_bind_signed {
    ($($ty:ty),* $(,)?) => {
        $(impl Bind for $ty {
            fn bind(&mut self, value: &Value) -> Result<(), Error> {
                match *value {
                    Value::Integer(num) => {
                        *self = <$ty>::try_from(num)
                            .map_err(|_| Error::mismatch(value, stringify!($ty)))?;
                        Ok(())
                    }
                    Value::Rational(num) => {
                        *self = rational_to_integer(num)
                            .and_then(|wide| <$ty>::try_from(wide).ok())
                            .ok_or_else(|| Error::mismatch(value, stringify!($ty)))?;
                        Ok(())
                    }
                    Value::Null | Value::Undefined => {
                        *self = 0;
                        Ok(())
                    }
                    _ => Err(Error::mismatch(value, stringify!($ty))),
                }
            }
        })*
    };
}

macro_rules! impl_bind_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(impl Bind for $ty {
            fn bind(&mut self, value: &Value) -> Result<(), Error> {
                match *value {
                    Value::Integer(num) => {
                        // A negative integer never fits an unsigned target.
                        *self = <$ty>::try_from(num)
                            .map_err(|_| Error::mismatch(value, stringify!($ty)))?;
                        Ok(())
                    }
                    Value::Rational(num) => {
                        *self = rational_to_integer(num)
                            .and_then(|wide| <$ty>::try_from(wide).ok())
                            .ok_or_else(|| Error::mismatch(value, stringify!($ty)))?;
                        Ok(())
                    }
                    Value::Null | Value::Undefined => {
                        *self = 0;
                        Ok(())
                    }
                    _ => Err(Error::mismatch(value, stringify!($ty))),
                }
            }
        })*
    };
}

impl_bind_signed!(i8, i16, i32, i64, isize);
impl_bind_unsigned!(u8, u16, u32, u64, usize);

/// Converts a rational to an integer when it is numerically integral.
fn rational_to_integer(num: f64) -> Option<i64> {
    if !num.is_finite() || num.fract() != 0.0 {
        return None;
    }

    let wide = num as i64;
    (wide as f64 == num).then_some(wide)
}

impl Bind for f64 {
    fn bind(&mut self, value: &Value) -> Result<(), Error> {
        match *value {
            Value::Integer(num) => *self = num as f64,
            Value::Rational(num) => *self = num,
            Value::Null | Value::Undefined => *self = 0.0,
            _ => return Err(Error::mismatch(value, "f64")),
        }

        Ok(())
    }
}

impl Bind for f32 {
    fn bind(&mut self, value: &Value) -> Result<(), Error> {
        match *value {
            Value::Integer(num) => *self = num as f32,
            Value::Rational(num) => *self = num as f32,
            Value::Null | Value::Undefined => *self = 0.0,
            _ => return Err(Error::mismatch(value, "f32")),
        }

        Ok(())
    }
}

impl Bind for bool {
    fn bind(&mut self, value: &Value) -> Result<(), Error> {
        match *value {
            Value::Boolean(lit) => *self = lit,
            Value::Null | Value::Undefined => *self = false,
            _ => return Err(Error::mismatch(value, "bool")),
        }

        Ok(())
    }
}

impl Bind for String {
    fn bind(&mut self, value: &Value) -> Result<(), Error> {
        match value {
            Value::String(lit) => {
                self.clear();
                self.push_str(lit);
            }
            Value::Null | Value::Undefined => self.clear(),
            _ => return Err(Error::mismatch(value, "String")),
        }

        Ok(())
    }
}

/// The open target: accepts any value and preserves the distinction between
/// `null` and `undefined`.
impl Bind for Value {
    fn bind(&mut self, value: &Value) -> Result<(), Error> {
        *self = value.clone();
        Ok(())
    }
}

impl<T> Bind for Vec<T>
where
    T: Bind + Default,
{
    fn bind(&mut self, value: &Value) -> Result<(), Error> {
        match value {
            Value::Array(items) => {
                self.clear();
                for item in items {
                    let mut element = T::default();
                    element.bind(item)?;
                    self.push(element);
                }

                Ok(())
            }
            Value::Null | Value::Undefined => {
                self.clear();
                Ok(())
            }
            _ => Err(Error::mismatch(value, std::any::type_name::<Self>())),
        }
    }
}

impl<T, const N: usize> Bind for [T; N]
where
    T: Bind,
{
    fn bind(&mut self, value: &Value) -> Result<(), Error> {
        match value {
            Value::Array(items) => {
                // Excess source elements are ignored; missing ones leave the
                // corresponding slots untouched.
                for (slot, item) in self.iter_mut().zip(items) {
                    slot.bind(item)?;
                }

                Ok(())
            }
            Value::Null | Value::Undefined => {
                for slot in self.iter_mut() {
                    slot.bind(&Value::Null)?;
                }

                Ok(())
            }
            _ => Err(Error::mismatch(value, std::any::type_name::<Self>())),
        }
    }
}

impl<S> Bind for IndexMap<String, Value, S>
where
    S: BuildHasher,
{
    fn bind(&mut self, value: &Value) -> Result<(), Error> {
        match value {
            Value::Object(entries) => {
                self.clear();
                for (key, entry) in entries {
                    self.insert(key.clone(), entry.clone());
                }

                Ok(())
            }
            Value::Null | Value::Undefined => {
                self.clear();
                Ok(())
            }
            _ => Err(Error::mismatch(value, std::any::type_name::<Self>())),
        }
    }
}

impl<S> Bind for HashMap<String, Value, S>
where
    S: BuildHasher,
{
    fn bind(&mut self, value: &Value) -> Result<(), Error> {
        match value {
            Value::Object(entries) => {
                self.clear();
                for (key, entry) in entries {
                    self.insert(key.clone(), entry.clone());
                }

                Ok(())
            }
            Value::Null | Value::Undefined => {
                self.clear();
                Ok(())
            }
            _ => Err(Error::mismatch(value, std::any::type_name::<Self>())),
        }
    }
}

/// An optional holder: `null` and `undefined` clear it, anything else
/// materializes the inner value as needed before binding into it.
impl<T> Bind for Option<T>
where
    T: Bind + Default,
{
    fn bind(&mut self, value: &Value) -> Result<(), Error> {
        if value.is_null_or_undefined() {
            *self = None;
            return Ok(());
        }

        match self {
            Some(inner) => inner.bind(value),
            None => {
                let mut inner = T::default();
                inner.bind(value)?;
                *self = Some(inner);
                Ok(())
            }
        }
    }
}
