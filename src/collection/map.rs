//! Element-wise transformations.

use crate::error::{Error, InvalidArgumentError};
use crate::value::{MethodRef, Value};

/// Returns `iterator` applied to every element, in order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::map;
///
/// assert_eq!(map(&[1, 2, 3], |number| number * 2), vec![2, 4, 6]);
/// assert!(map(&[] as &[i32], |number| number * 2).is_empty());
/// ```
pub fn map<T, U, F>(items: &[T], iterator: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(iterator).collect()
}

/// Like [`map`], but stops at the first error and returns it unchanged.
///
/// # Errors
///
/// Returns the first error produced by `iterator`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::try_map;
///
/// let parsed: Result<Vec<i32>, _> = try_map(&["1", "2"], |text| text.parse::<i32>());
/// assert_eq!(parsed, Ok(vec![1, 2]));
///
/// let failed: Result<Vec<i32>, _> = try_map(&["1", "x"], |text| text.parse::<i32>());
/// assert!(failed.is_err());
/// ```
pub fn try_map<T, U, E, F>(items: &[T], iterator: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    items.iter().map(iterator).collect()
}

/// Reads `property` from every element, the equivalent of
/// `map(items, |item| item[property])`.
///
/// Elements lacking the property contribute [`Value::Undefined`].
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if an element is `undefined` or `null`,
/// which have no properties at all.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::pluck;
/// use underbar::value::Value;
/// use underbar::object;
///
/// let people = vec![
///     Value::from(object! { "name" => "moe", "age" => 30 }),
///     Value::from(object! { "name" => "curly", "age" => 50 }),
/// ];
/// assert_eq!(
///     pluck(&people, "age").unwrap(),
///     vec![Value::from(30), Value::from(50)]
/// );
/// ```
pub fn pluck(items: &[Value], property: &str) -> Result<Vec<Value>, InvalidArgumentError> {
    items
        .iter()
        .map(|item| {
            if item.is_nullish() {
                Err(InvalidArgumentError {
                    parameter: "array",
                    expected: "elements with properties",
                    found: item.type_name(),
                })
            } else {
                Ok(item.property(property))
            }
        })
        .collect()
}

/// Calls `method` on every element with `arguments`, collecting the results.
///
/// A [`MethodRef::Name`] is resolved on each element itself (see
/// [`Value::call_method`]); a [`MethodRef::Callable`] is called with each
/// element as its receiver.
///
/// # Errors
///
/// Returns [`Error::MethodNotFound`] for the first element the name does not
/// resolve on, or the first error a method returns.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke;
/// use underbar::value::{Callable, MethodRef, Value};
/// use underbar::array;
///
/// let lists = vec![array![5, 1, 7], array![3, 2, 1]];
/// let sorted = invoke(&lists, &MethodRef::from("sort"), &[]).unwrap();
/// assert_eq!(sorted, vec![array![1, 5, 7], array![1, 2, 3]]);
///
/// let shout = MethodRef::from(Callable::new(|receiver, _| {
///     receiver.call_method("toUpperCase", &[])
/// }));
/// let words = vec![Value::from("dog"), Value::from("cat")];
/// assert_eq!(
///     invoke(&words, &shout, &[]).unwrap(),
///     vec![Value::from("DOG"), Value::from("CAT")]
/// );
/// ```
pub fn invoke(
    items: &[Value],
    method: &MethodRef,
    arguments: &[Value],
) -> Result<Vec<Value>, Error> {
    items
        .iter()
        .map(|item| method.call(item, arguments))
        .collect()
}
