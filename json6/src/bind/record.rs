//! Record targets: fixed shapes with named, optionally tagged fields.

use super::{Bind, Error};
use crate::value::Value;
use std::fmt;

/// One bindable field of a [`Record`].
///
/// A field has the name it is declared with and up to three priority-ordered
/// alternative names. When binding an object, the aliases are tried first in
/// declaration order, then the declared name; the first name present among
/// the object's keys wins.
pub struct Field<'a> {
    name: &'static str,
    aliases: [Option<&'static str>; 3],
    target: &'a mut dyn Bind,
}

impl<'a> Field<'a> {
    /// Declares a field with its name and binding target.
    pub fn new(name: &'static str, target: &'a mut dyn Bind) -> Self {
        Self {
            name,
            aliases: [None; 3],
            target,
        }
    }

    /// Adds an alternative source name for the field.
    ///
    /// At most three aliases are honored; further ones are ignored.
    #[must_use]
    pub fn alias(mut self, name: &'static str) -> Self {
        if let Some(slot) = self.aliases.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(name);
        }

        self
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

/// A fixed-shape binding target with named fields.
///
/// Implementing `Record` gives the type a [`Bind`] implementation that
/// matches the keys of a decoded object against the declared fields. Object
/// keys that match no field are ignored, and fields that match no key keep
/// their previous value.
///
/// # Example
///
/// ```
/// use json6::{Field, Record};
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: i64,
/// }
///
/// impl Record for Server {
///     fn fields(&mut self) -> Vec<Field<'_>> {
///         vec![
///             Field::new("host", &mut self.host).alias("hostname"),
///             Field::new("port", &mut self.port),
///         ]
///     }
/// }
///
/// let mut server = Server::default();
/// json6::decode_from_str("{ hostname: 'example.org', port: 8080 }", &mut server).unwrap();
/// assert_eq!(server.host, "example.org");
/// assert_eq!(server.port, 8080);
/// ```
pub trait Record {
    /// Lists the record's bindable fields.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

impl<T> Bind for T
where
    T: Record,
{
    fn bind(&mut self, value: &Value) -> Result<(), Error> {
        match value {
            Value::Object(entries) => {
                for field in self.fields() {
                    let Field {
                        name,
                        aliases,
                        target,
                    } = field;
                    let source = aliases
                        .iter()
                        .flatten()
                        .chain(std::iter::once(&name))
                        .find_map(|key| entries.get(*key));
                    if let Some(value) = source {
                        target.bind(value)?;
                    }
                }

                Ok(())
            }
            Value::Null | Value::Undefined => {
                for field in self.fields() {
                    field.target.bind(&Value::Null)?;
                }

                Ok(())
            }
            _ => Err(Error::mismatch(value, std::any::type_name::<T>())),
        }
    }
}
