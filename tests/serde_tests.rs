#![cfg(feature = "serde")]
//! Integration tests for serde support of dynamic values.

use rstest::rstest;
use underbar::value::{Callable, Value};
use underbar::{array, object};

#[rstest]
fn test_value_json_roundtrip() {
    let value = Value::from(object! {
        "name" => "moe",
        "age" => 40,
        "height" => 1.75,
        "tags" => array!["a", Value::Null, true],
        "nested" => object! { "empty" => array![] },
    });
    let json = serde_json::to_string(&value).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, restored);
}

#[rstest]
fn test_integral_numbers_serialize_as_integers() {
    assert_eq!(serde_json::to_string(&Value::from(3)).unwrap(), "3");
    assert_eq!(serde_json::to_string(&Value::from(2.5)).unwrap(), "2.5");
}

#[rstest]
fn test_undefined_serializes_as_null() {
    assert_eq!(serde_json::to_string(&Value::Undefined).unwrap(), "null");
    let restored: Value = serde_json::from_str("null").unwrap();
    assert_eq!(restored, Value::Null);
}

#[rstest]
fn test_functions_do_not_serialize() {
    let value = Value::from(Callable::new(|_, _| Ok(Value::Null)));
    assert!(serde_json::to_string(&value).is_err());
}

#[rstest]
fn test_object_keys_serialize_in_sorted_order() {
    let value = Value::from(object! { "b" => 1, "a" => 2 });
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"a":2,"b":1}"#);
}
