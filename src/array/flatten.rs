//! Depth-first flattening of nested arrays.

use crate::error::InvalidArgumentError;
use crate::value::Value;

/// An arbitrarily deep nesting of lists around leaf items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A leaf.
    Item(T),
    /// A nested list.
    List(Vec<Self>),
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(list: Vec<Nested<T>>) -> Self {
        Self::List(list)
    }
}

/// Returns the leaves of `items`, left to right, depth first.
///
/// Runs on an explicit stack, so nesting depth is limited by memory rather
/// than by the call stack.
///
/// # Examples
///
/// ```rust
/// use underbar::array::{Nested, flatten};
///
/// // [1, [2, [3, [4]], 5]]
/// let nested = [
///     Nested::Item(1),
///     Nested::List(vec![
///         Nested::Item(2),
///         Nested::List(vec![Nested::Item(3), Nested::List(vec![Nested::Item(4)])]),
///         Nested::Item(5),
///     ]),
/// ];
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten<T: Clone>(items: &[Nested<T>]) -> Vec<T> {
    let mut flat = Vec::new();
    let mut stack = vec![items.iter()];
    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(Nested::Item(item)) => flat.push(item.clone()),
            Some(Nested::List(list)) => stack.push(list.iter()),
            None => {
                stack.pop();
            }
        }
    }
    flat
}

/// [`flatten`] over a dynamic array.
///
/// Nested arrays are opened; every other value, objects included, is a leaf.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if `nested` is not an array.
///
/// # Examples
///
/// ```rust
/// use underbar::array::flatten_value;
/// use underbar::value::Value;
/// use underbar::{array, object};
///
/// let nested = array![1, array![2, array![object! { "a" => 3 }]]];
/// assert_eq!(
///     flatten_value(&nested).unwrap(),
///     vec![Value::from(1), Value::from(2), Value::from(object! { "a" => 3 })]
/// );
/// ```
pub fn flatten_value(nested: &Value) -> Result<Vec<Value>, InvalidArgumentError> {
    let elements = nested.as_array().ok_or(InvalidArgumentError {
        parameter: "nested_array",
        expected: "array",
        found: nested.type_name(),
    })?;
    let mut flat = Vec::new();
    let mut stack = vec![elements.iter()];
    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(Value::Array(inner)) => stack.push(inner.iter()),
            Some(leaf) => flat.push(leaf.clone()),
            None => {
                stack.pop();
            }
        }
    }
    Ok(flat)
}
