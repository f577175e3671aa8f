//! Leading and trailing elements of a sequence.

/// Returns the first element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Returns the first `min(count, len)` elements.
///
/// A count of zero yields an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 10), &[1, 2, 3]);
/// assert!(first_n(&[1, 2, 3], 0).is_empty());
/// ```
#[inline]
pub fn first_n<T>(items: &[T], count: usize) -> &[T] {
    &items[..count.min(items.len())]
}

/// Returns the last element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// ```
#[inline]
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Returns the last `min(count, len)` elements in their original order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
#[inline]
pub fn last_n<T>(items: &[T], count: usize) -> &[T] {
    &items[items.len().saturating_sub(count)..]
}
