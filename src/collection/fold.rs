//! Left folds over collections.

use crate::error::EmptyReductionError;
use crate::iteration::Collection;

/// Folds the collection's values from the left.
///
/// With `Some(initial)` the fold starts from `initial` and visits every
/// value. With `None` the first value seeds the accumulator and the fold
/// starts from the second. A seed of `Some(0)` is an ordinary seed, distinct
/// from an omitted one.
///
/// # Errors
///
/// Returns [`EmptyReductionError`] when the collection is empty and no seed
/// is given.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
/// use underbar::error::EmptyReductionError;
///
/// let add = |sum: i32, number: &i32| sum + number;
/// assert_eq!(reduce(&[1, 2, 3], add, Some(0)), Ok(6));
/// assert_eq!(reduce(&[1, 2, 3], add, None), Ok(6));
/// assert_eq!(reduce(&[1, 2, 3], add, Some(10)), Ok(16));
/// assert_eq!(reduce(&[] as &[i32], add, Some(0)), Ok(0));
/// assert_eq!(reduce(&[] as &[i32], add, None), Err(EmptyReductionError));
/// ```
pub fn reduce<C, F>(
    collection: &C,
    mut iterator: F,
    initial: Option<C::Item>,
) -> Result<C::Item, EmptyReductionError>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    let mut values = collection.values();
    let seed = match initial {
        Some(seed) => seed,
        None => values.next().cloned().ok_or(EmptyReductionError)?,
    };
    Ok(values.fold(seed, |accumulator, value| iterator(accumulator, value)))
}

/// Folds the collection's values from the left into an accumulator of any type.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::fold;
///
/// let mut stock = BTreeMap::new();
/// stock.insert("apples", 3);
/// stock.insert("pears", 4);
/// let summary = fold(&stock, String::new(), |text, count| format!("{text}{count}"));
/// assert_eq!(summary, "34");
/// ```
pub fn fold<C, B, F>(collection: &C, initial: B, iterator: F) -> B
where
    C: Collection + ?Sized,
    F: FnMut(B, &C::Item) -> B,
{
    collection.values().fold(initial, iterator)
}

/// Like [`fold`], but stops at the first error and returns it unchanged.
///
/// # Errors
///
/// Returns the first error produced by `iterator`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::try_fold;
///
/// let checked = try_fold(&[100_u8, 100], 0_u8, |sum, number| {
///     sum.checked_add(*number).ok_or("overflow")
/// });
/// assert_eq!(checked, Ok(200));
///
/// let overflowed = try_fold(&[200_u8, 100], 0_u8, |sum, number| {
///     sum.checked_add(*number).ok_or("overflow")
/// });
/// assert_eq!(overflowed, Err("overflow"));
/// ```
pub fn try_fold<C, B, E, F>(collection: &C, initial: B, mut iterator: F) -> Result<B, E>
where
    C: Collection + ?Sized,
    F: FnMut(B, &C::Item) -> Result<B, E>,
{
    let mut accumulator = initial;
    for value in collection.values() {
        accumulator = iterator(accumulator, value)?;
    }
    Ok(accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use crate::{array, object};
    use rstest::rstest;

    #[rstest]
    fn reduce_without_seed_starts_from_first_value() {
        let mut visited = Vec::new();
        let result = reduce(
            &[1, 2, 3],
            |accumulator, value| {
                visited.push((accumulator, *value));
                accumulator * 10 + value
            },
            None,
        );
        assert_eq!(result, Ok(123));
        assert_eq!(visited, vec![(1, 2), (12, 3)]);
    }

    #[rstest]
    fn reduce_single_value_without_seed_returns_it() {
        let result = reduce(&["only"], |_, value| *value, None);
        assert_eq!(result, Ok("only"));
    }

    #[rstest]
    fn reduce_over_object_values() {
        let object = Value::from(object! { "a" => 1, "b" => 2 });
        let total = reduce(
            &object,
            |sum, value| Value::Number(sum.to_number() + value.to_number()),
            None,
        );
        assert_eq!(total, Ok(Value::from(3)));
    }

    #[rstest]
    fn reduce_over_empty_value_array_fails() {
        let empty = array![];
        assert_eq!(
            reduce(&empty, |left, _| left, None),
            Err(EmptyReductionError)
        );
    }

    #[rstest]
    fn try_fold_stops_at_first_error() {
        let mut calls = 0;
        let result: Result<i32, &str> = try_fold(&[1, 2, 3], 0, |sum, value| {
            calls += 1;
            if *value == 2 { Err("two") } else { Ok(sum + value) }
        });
        assert_eq!(result, Err("two"));
        assert_eq!(calls, 2);
    }
}
