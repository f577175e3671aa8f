//! Membership and quantifier tests.

use crate::iteration::Collection;
use crate::value::Truthy;

/// Returns `true` if any value of the collection equals `target`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::contains;
///
/// assert!(contains(&[1, 2, 3], &3));
/// assert!(!contains(&[1, 2, 3], &4));
///
/// let mut scores = BTreeMap::new();
/// scores.insert("moe", 10);
/// assert!(contains(&scores, &10));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    collection.values().any(|value| value == target)
}

/// Returns `true` if `predicate` is truthy for every value.
///
/// An empty collection passes vacuously. Evaluation stops at the first
/// falsy result.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every;
///
/// assert!(every(&[2, 4, 6], |number| number % 2 == 0));
/// assert!(!every(&[2, 3, 6], |number| number % 2 == 0));
/// assert!(every(&[] as &[i32], |_| false));
/// ```
pub fn every<C, P, R>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> R,
    R: Truthy,
{
    collection.values().all(|value| predicate(value).is_truthy())
}

/// Returns `true` if every value is itself truthy.
///
/// This is [`every`] with the predicate omitted.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every_truthy;
/// use underbar::value::Value;
///
/// assert!(every_truthy(&[1, 2, 3]));
/// assert!(!every_truthy(&[1, 0, 3]));
/// assert!(!every_truthy(&[Value::from("a"), Value::Undefined]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, <C::Item as Truthy>::is_truthy)
}

/// Returns `true` if `predicate` is truthy for at least one value.
///
/// An empty collection never passes. Evaluation stops at the first truthy
/// result.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some;
///
/// assert!(some(&[1, 2, 3], |number| *number > 2));
/// assert!(!some(&[] as &[i32], |_| true));
/// ```
pub fn some<C, P, R>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> R,
    R: Truthy,
{
    collection.values().any(|value| predicate(value).is_truthy())
}

/// Returns `true` if at least one value is itself truthy.
///
/// This is [`some`] with the predicate omitted.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some_truthy;
///
/// assert!(some_truthy(&["", "yes"]));
/// assert!(!some_truthy(&["", ""]));
/// ```
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, <C::Item as Truthy>::is_truthy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use crate::{array, object};
    use rstest::rstest;

    #[rstest]
    fn contains_uses_strict_equality_on_values() {
        let values = array![1, "2"];
        assert!(contains(&values, &Value::from(1)));
        assert!(!contains(&values, &Value::from(2)));
    }

    #[rstest]
    fn contains_searches_object_values_not_keys() {
        let object = Value::from(object! { "a" => "b" });
        assert!(contains(&object, &Value::from("b")));
        assert!(!contains(&object, &Value::from("a")));
    }

    #[rstest]
    fn every_stops_at_first_failure() {
        let mut calls = 0;
        let result = every(&[1, 0, 1, 1], |number| {
            calls += 1;
            *number
        });
        assert!(!result);
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn some_stops_at_first_success() {
        let mut calls = 0;
        let result = some(&[0, 1, 0], |number| {
            calls += 1;
            *number
        });
        assert!(result);
        assert_eq!(calls, 2);
    }

    #[rstest]
    #[case(vec![], true, false)]
    #[case(vec![Value::from(0)], false, false)]
    #[case(vec![Value::from(0), Value::from("x")], false, true)]
    #[case(vec![Value::from(true), Value::from(1)], true, true)]
    fn omitted_predicate_tests_truthiness(
        #[case] values: Vec<Value>,
        #[case] all: bool,
        #[case] any: bool,
    ) {
        assert_eq!(every_truthy(&values), all);
        assert_eq!(some_truthy(&values), any);
    }
}
