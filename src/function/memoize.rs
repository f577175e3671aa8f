//! Memoization by argument.

use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;

/// The map type backing memoization caches.
///
/// With the `fxhash` feature this is `rustc_hash::FxHashMap`, otherwise the
/// standard `HashMap`.
#[cfg(feature = "fxhash")]
pub type Cache<K, V> = rustc_hash::FxHashMap<K, V>;

/// The map type backing memoization caches.
///
/// With the `fxhash` feature this is `rustc_hash::FxHashMap`, otherwise the
/// standard `HashMap`.
#[cfg(not(feature = "fxhash"))]
pub type Cache<K, V> = std::collections::HashMap<K, V>;

/// A function wrapper that caches results by argument.
///
/// On a cache miss the function runs and its result is stored; on a hit the
/// stored result is returned without running the function. Presence is
/// decided by key membership, so falsy results (`0`, `""`, `false`, `None`)
/// are cached like any other, and falsy keys are ordinary keys.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. Use [`SyncMemoize`](super::SyncMemoize) to
/// share a cache between threads.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::function::memoize;
///
/// let calls = Cell::new(0);
/// let is_zero = memoize(|number: &i32| {
///     calls.set(calls.get() + 1);
///     *number == 0
/// });
///
/// assert!(is_zero.call(0));
/// assert!(is_zero.call(0));
/// assert!(!is_zero.call(1));
/// assert_eq!(calls.get(), 2);
/// ```
pub struct Memoize<F, K, V> {
    function: F,
    cache: RefCell<Cache<K, V>>,
}

/// Wraps `function` so that each distinct argument is computed once.
///
/// The function receives the argument by reference; arguments of several
/// values are passed as a tuple.
///
/// # Examples
///
/// ```rust
/// use underbar::function::memoize;
///
/// let label = memoize(|key: &Option<&str>| key.map_or(0, str::len));
/// assert_eq!(label.call(None), 0);
/// assert_eq!(label.call(Some("")), 0);
/// assert_eq!(label.call(Some("abc")), 3);
/// assert_eq!(label.cache_len(), 3);
/// ```
pub fn memoize<F, K, V>(function: F) -> Memoize<F, K, V>
where
    F: Fn(&K) -> V,
    K: Eq + Hash,
{
    Memoize {
        function,
        cache: RefCell::new(Cache::default()),
    }
}

impl<F, K, V> Memoize<F, K, V>
where
    F: Fn(&K) -> V,
    K: Eq + Hash,
{
    /// Returns the cached result for `argument`, computing it on a miss.
    ///
    /// The cache is not borrowed while the function runs.
    pub fn call(&self, argument: K) -> V
    where
        V: Clone,
    {
        if let Some(cached) = self.cache.borrow().get(&argument) {
            return cached.clone();
        }
        let computed = (self.function)(&argument);
        self.cache
            .borrow_mut()
            .entry(argument)
            .or_insert(computed)
            .clone()
    }

    /// Returns `true` if a result for `argument` is cached.
    pub fn is_cached(&self, argument: &K) -> bool {
        self.cache.borrow().contains_key(argument)
    }

    /// Returns the number of cached results.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<F, K, V> fmt::Debug for Memoize<F, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}
