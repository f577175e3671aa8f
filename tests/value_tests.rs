//! Integration tests for the dynamic value model.

use rstest::rstest;
use underbar::error::{Error, MethodNotFoundError};
use underbar::iteration::{Collection, Key, each};
use underbar::value::{Callable, MethodRef, Truthy, Value};
use underbar::{array, object};

// =============================================================================
// Truthiness
// =============================================================================

#[rstest]
#[case(Value::Undefined, false)]
#[case(Value::Null, false)]
#[case(Value::from(false), false)]
#[case(Value::from(0), false)]
#[case(Value::from(-0.0), false)]
#[case(Value::Number(f64::NAN), false)]
#[case(Value::from(""), false)]
#[case(Value::from("0"), true)]
#[case(Value::from(1), true)]
#[case(array![], true)]
#[case(Value::from(object! {}), true)]
fn test_value_truthiness(#[case] value: Value, #[case] expected: bool) {
    assert_eq!(value.is_truthy(), expected);
    assert_eq!(value.is_falsy(), !expected);
}

#[rstest]
fn test_native_truthiness() {
    assert!(Some(1_u8).is_truthy());
    assert!(Some(0_u8).is_falsy());
    assert!(None::<u8>.is_falsy());
    assert!("text".is_truthy());
    assert!(String::new().is_falsy());
    assert!(0.0_f64.is_falsy());
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn test_strict_equality() {
    assert_ne!(Value::from(1), Value::from("1"));
    assert_ne!(Value::Null, Value::Undefined);
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    assert_eq!(Value::from(0.0), Value::from(-0.0));
    assert_eq!(array![1, array![2]], array![1, array![2]]);
}

#[rstest]
fn test_functions_compare_by_identity() {
    let callable = Callable::new(|receiver, _| Ok(receiver.clone()));
    let same = Value::from(callable.clone());
    let other = Value::from(Callable::new(|receiver, _| Ok(receiver.clone())));
    assert_eq!(Value::from(callable), same);
    assert_ne!(same, other);
}

// =============================================================================
// Properties and methods
// =============================================================================

#[rstest]
fn test_property_lookup() {
    let stooge = Value::from(object! { "name" => "moe", "tags" => array!["a"] });
    assert_eq!(stooge.property("name"), Value::from("moe"));
    assert_eq!(stooge.property("tags").property("length"), Value::from(1));
    assert!(stooge.property("age").is_undefined());
}

#[rstest]
fn test_call_method_on_own_function_property() {
    let greeter = Value::from(object! {
        "name" => "moe",
        "greet" => Callable::new(|receiver, arguments| {
            let greeting = arguments.first().cloned().unwrap_or_default();
            Ok(Value::from(format!("{greeting} {}", receiver.property("name"))))
        }),
    });
    assert_eq!(
        greeter.call_method("greet", &[Value::from("hi")]),
        Ok(Value::from("hi moe"))
    );
}

#[rstest]
fn test_call_method_on_nullish_fails() {
    assert_eq!(
        Value::Null.call_method("toString", &[]),
        Err(Error::MethodNotFound(MethodNotFoundError {
            method: "toString".to_string(),
            receiver: "null",
        }))
    );
}

#[rstest]
fn test_method_ref_dispatch() {
    let by_name = MethodRef::from("toLowerCase");
    assert_eq!(by_name.call(&Value::from("ABC"), &[]), Ok(Value::from("abc")));
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn test_value_entries_for_arrays_and_objects() {
    let list = array!["x", "y"];
    let keys: Vec<String> = list.entries().map(|(key, _)| key.to_string()).collect();
    assert_eq!(keys, vec!["0", "1"]);

    let record = Value::from(object! { "b" => 1, "a" => 2 });
    let mut names = Vec::new();
    each(&record, |_, key, _| {
        if let Key::Name(name) = key {
            names.push(name);
        }
    });
    assert_eq!(names, vec!["a", "b"]);
}

#[rstest]
fn test_primitive_values_have_no_entries() {
    assert_eq!(Value::from("abc").values().count(), 0);
    assert_eq!(Value::Null.values().count(), 0);
}
