//! Tests for the value tree.

use super::{Value, ValueMap};

#[test]
fn conversions() {
    assert_eq!(Value::from(true), Value::Boolean(true));
    assert_eq!(Value::from(42i64), Value::Integer(42));
    assert_eq!(Value::from(42i32), Value::Integer(42));
    assert_eq!(Value::from(0.5), Value::Rational(0.5));
    assert_eq!(Value::from("hi"), Value::String("hi".into()));
    assert_eq!(Value::from(()), Value::Null);
    assert_eq!(Value::from(Some(1i64)), Value::Integer(1));
    assert_eq!(Value::from(None::<i64>), Value::Null);
}

#[test]
fn accessors() {
    assert!(Value::Null.is_null());
    assert!(Value::Undefined.is_undefined());
    assert!(Value::Undefined.is_null_or_undefined());
    assert!(!Value::Undefined.is_null());
    assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
    assert_eq!(Value::Integer(7).as_integer(), Some(7));
    assert_eq!(Value::Rational(0.5).as_rational(), Some(0.5));
    assert_eq!(Value::from("s").as_string(), Some("s"));
    assert_eq!(Value::Integer(7).as_string(), None);
}

#[test]
fn type_names() {
    assert_eq!(Value::Null.type_of(), "null");
    assert_eq!(Value::Undefined.type_of(), "undefined");
    assert_eq!(Value::Boolean(false).type_of(), "boolean");
    assert_eq!(Value::Integer(0).type_of(), "integer");
    assert_eq!(Value::Rational(0.0).type_of(), "double");
    assert_eq!(Value::from("").type_of(), "string");
    assert_eq!(Value::Array(Vec::new()).type_of(), "array");
    assert_eq!(Value::Object(ValueMap::default()).type_of(), "object");
}

#[test]
fn map_preserves_first_insertion_order() {
    let mut entries = ValueMap::default();
    entries.insert("b".to_owned(), Value::Integer(1));
    entries.insert("a".to_owned(), Value::Integer(2));
    entries.insert("b".to_owned(), Value::Integer(3));

    let keys: Vec<&String> = entries.keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
    assert_eq!(entries["b"], Value::Integer(3));
}

#[test]
fn display() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Integer(-7).to_string(), "-7");
    assert_eq!(Value::from("hi").to_string(), "\"hi\"");
    assert_eq!(
        Value::Array(vec![Value::Integer(1), Value::Null]).to_string(),
        "[1, null]"
    );

    let mut entries = ValueMap::default();
    entries.insert("a".to_owned(), Value::Boolean(true));
    assert_eq!(Value::Object(entries).to_string(), "{a: true}");
}
