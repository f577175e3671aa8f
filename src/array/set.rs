//! Membership-based set operations over arrays.

/// Returns the elements of the first array present in every other array.
///
/// Order and multiplicity follow the first array. Membership is
/// `PartialEq` equality. With no arrays the result is empty.
///
/// # Examples
///
/// ```rust
/// use underbar::array::intersection;
///
/// let stooges = ["moe", "curly", "larry"];
/// let leaders = ["moe", "groucho"];
/// assert_eq!(intersection(&[&stooges, &leaders]), vec!["moe"]);
/// ```
pub fn intersection<T>(arrays: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let Some((first, others)) = arrays.split_first() else {
        return Vec::new();
    };
    first
        .iter()
        .filter(|item| others.iter().all(|other| other.contains(item)))
        .cloned()
        .collect()
}

/// Returns the elements of `items` present in none of `others`.
///
/// Every occurrence of an excluded value is dropped; the rest keep their
/// order. Neither `items` nor `others` is modified.
///
/// # Examples
///
/// ```rust
/// use underbar::array::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4, 5], &[&[5, 2, 10]]), vec![1, 3, 4]);
/// assert_eq!(difference(&[1, 2, 3], &[]), vec![1, 2, 3]);
/// ```
pub fn difference<T>(items: &[T], others: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    items
        .iter()
        .filter(|item| !others.iter().any(|other| other.contains(item)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn intersection_of_three() {
        assert_eq!(intersection(&[&[1, 2, 3], &[2, 3, 4], &[2, 5]]), vec![2]);
    }

    #[rstest]
    fn intersection_keeps_first_array_multiplicity() {
        assert_eq!(intersection(&[&[1, 1, 2], &[1]]), vec![1, 1]);
    }

    #[rstest]
    fn intersection_of_one_array_is_a_copy() {
        assert_eq!(intersection(&[&[3, 1, 3]]), vec![3, 1, 3]);
    }

    #[rstest]
    fn intersection_of_nothing_is_empty() {
        assert!(intersection::<i32>(&[]).is_empty());
    }

    #[rstest]
    fn difference_removes_every_occurrence() {
        assert_eq!(difference(&[1, 2, 2, 3, 2], &[&[2]]), vec![1, 3]);
    }

    #[rstest]
    fn difference_checks_all_others() {
        assert_eq!(difference(&[1, 2, 3, 4], &[&[2], &[4]]), vec![1, 3]);
    }

    #[rstest]
    fn difference_leaves_inputs_alone() {
        let items = vec![1, 2, 3];
        let excluded = vec![2];
        let _ = difference(&items, &[&excluded]);
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(excluded, vec![2]);
    }
}
