#![cfg(feature = "object")]
//! Integration tests for the object merge helpers.

use std::collections::HashMap;

use rstest::rstest;
use underbar::object::{Mapping, defaults, defaults_value, extend, extend_value};
use underbar::value::Value;
use underbar::{array, object};

// =============================================================================
// extend
// =============================================================================

#[rstest]
fn test_extend_later_sources_win() {
    let mut target = object! { "a" => 1 };
    extend(&mut target, &[&object! { "b" => 2 }, &object! { "a" => 3 }]);
    assert_eq!(target, object! { "a" => 3, "b" => 2 });
}

#[rstest]
fn test_extend_chains_through_returned_target() {
    let mut target = HashMap::from([("x", 1)]);
    let patch = HashMap::from([("y", 2)]);
    let extended = extend(&mut target, &[&patch]);
    assert!(extended.has_own(&"y"));
    extended.assign("z", 3);
    assert_eq!(target.len(), 3);
}

#[rstest]
fn test_extend_value_merges_arrays_by_index() {
    let mut target = Value::from(object! {});
    extend_value(&mut target, &[array!["a", "b"]]).unwrap();
    assert_eq!(target, Value::from(object! { "0" => "a", "1" => "b" }));
}

#[rstest]
fn test_extend_value_skips_nullish_sources() {
    let mut target = Value::from(object! { "a" => 1 });
    extend_value(&mut target, &[Value::Undefined, Value::Null]).unwrap();
    assert_eq!(target, Value::from(object! { "a" => 1 }));
}

// =============================================================================
// defaults
// =============================================================================

#[rstest]
fn test_defaults_only_fills_missing_keys() {
    let mut target = object! { "a" => 1 };
    defaults(&mut target, &[&object! { "a" => 2, "b" => 2 }]);
    assert_eq!(target, object! { "a" => 1, "b" => 2 });
}

#[rstest]
fn test_defaults_first_source_wins() {
    let mut target = object! {};
    defaults(
        &mut target,
        &[&object! { "flavor" => "vanilla" }, &object! { "flavor" => "chocolate", "sprinkles" => "lots" }],
    );
    assert_eq!(
        target,
        object! { "flavor" => "vanilla", "sprinkles" => "lots" }
    );
}

#[rstest]
fn test_defaults_value_keeps_falsy_target_values() {
    let mut target = Value::from(object! { "zero" => 0, "empty" => "" });
    defaults_value(
        &mut target,
        &[Value::from(object! { "zero" => 1, "empty" => "filled", "new" => true })],
    )
    .unwrap();
    assert_eq!(
        target,
        Value::from(object! { "zero" => 0, "empty" => "", "new" => true })
    );
}

#[rstest]
#[case(Value::from(5))]
#[case(Value::Null)]
fn test_defaults_value_rejects_non_object_target(#[case] mut target: Value) {
    let error = defaults_value(&mut target, &[]).unwrap_err();
    assert_eq!(error.parameter, "target");
}
