//! Order-preserving selection of elements.

use crate::value::Truthy;

/// Returns the elements for which `predicate` is truthy, in order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
///
/// // Any truthy result counts, not just `bool`.
/// let odds = filter(&[1, 2, 3, 4, 5, 6], |number| number % 2);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn filter<T, P, R>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> R,
    R: Truthy,
{
    items
        .iter()
        .filter(|item| predicate(item).is_truthy())
        .cloned()
        .collect()
}

/// Returns the elements for which `predicate` is falsy, in order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reject;
///
/// let odds = reject(&[1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn reject<T, P, R>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> R,
    R: Truthy,
{
    filter(items, |item| predicate(item).is_falsy())
}

/// Returns the first occurrence of each distinct element, in original order.
///
/// Distinctness is `PartialEq` equality; no sorting takes place. Values that
/// are not equal to themselves (such as `NaN`) are never merged.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq;
///
/// assert_eq!(uniq(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// assert_eq!(uniq(&["b", "a", "b"]), vec!["b", "a"]);
/// ```
pub fn uniq<T>(items: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    items.iter().fold(Vec::new(), |mut distinct, item| {
        if !distinct.contains(item) {
            distinct.push(item.clone());
        }
        distinct
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use rstest::rstest;

    #[rstest]
    fn filter_and_reject_partition_the_input() {
        let numbers = vec![1, 2, 3, 4, 5];
        let kept = filter(&numbers, |number| *number > 2);
        let dropped = reject(&numbers, |number| *number > 2);
        assert_eq!(kept, vec![3, 4, 5]);
        assert_eq!(dropped, vec![1, 2]);
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn filter_with_value_predicate() {
        let values = vec![Value::from(0), Value::from("x"), Value::Null, Value::from(2)];
        let truthy = filter(&values, Value::clone);
        assert_eq!(truthy, vec![Value::from("x"), Value::from(2)]);
    }

    #[rstest]
    fn uniq_keeps_first_occurrence_order() {
        assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[rstest]
    fn uniq_distinguishes_types_of_values() {
        let values = vec![Value::from(1), Value::from("1"), Value::from(1)];
        assert_eq!(uniq(&values), vec![Value::from(1), Value::from("1")]);
    }

    #[rstest]
    fn uniq_does_not_mutate_input() {
        let numbers = vec![2, 1, 2];
        let _ = uniq(&numbers);
        assert_eq!(numbers, vec![2, 1, 2]);
    }
}
