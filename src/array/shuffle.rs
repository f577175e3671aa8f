//! Uniform random permutation.

use rand::Rng;

/// Returns the elements of `items` in a uniformly random order.
///
/// Uses the thread-local generator; see [`shuffle_with`] to supply one.
///
/// # Examples
///
/// ```rust
/// use underbar::array::shuffle;
///
/// let numbers = [4, 5, 6];
/// let mut shuffled = shuffle(&numbers);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, numbers);
/// ```
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// Returns the elements of `items` permuted with `rng` (Fisher–Yates).
///
/// Every permutation is equally likely given a uniform generator, and the
/// same seed always yields the same order.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::array::shuffle_with;
///
/// let first = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    for index in (1..shuffled.len()).rev() {
        let other = rng.gen_range(0..=index);
        shuffled.swap(index, other);
    }
    shuffled
}
