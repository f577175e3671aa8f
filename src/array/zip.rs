//! Transposition of several arrays.

/// Groups the elements of `arrays` by index.
///
/// Tuple `i` holds element `i` of every input, in input order. The result is
/// as long as the longest input; positions past the end of a shorter input
/// are `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::array::zip;
///
/// let names = ["moe", "larry"];
/// let ages = ["30", "40", "50"];
/// assert_eq!(
///     zip(&[&names, &ages]),
///     vec![
///         vec![Some("moe"), Some("30")],
///         vec![Some("larry"), Some("40")],
///         vec![None, Some("50")],
///     ]
/// );
/// ```
pub fn zip<T: Clone>(arrays: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = arrays.iter().map(|array| array.len()).max().unwrap_or(0);
    (0..longest)
        .map(|index| {
            arrays
                .iter()
                .map(|array| array.get(index).cloned())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn no_arrays_zip_to_nothing() {
        assert!(zip::<i32>(&[]).is_empty());
    }

    #[rstest]
    fn empty_arrays_zip_to_nothing() {
        assert!(zip::<i32>(&[&[], &[]]).is_empty());
    }

    #[rstest]
    fn single_array_wraps_each_element() {
        assert_eq!(zip(&[&[1, 2]]), vec![vec![Some(1)], vec![Some(2)]]);
    }

    #[rstest]
    fn every_tuple_has_one_slot_per_array() {
        let zipped = zip(&[&[1][..], &[2, 3][..], &[][..]]);
        assert_eq!(zipped.len(), 2);
        assert!(zipped.iter().all(|tuple| tuple.len() == 3));
        assert_eq!(zipped[1], vec![None, Some(3), None]);
    }
}
