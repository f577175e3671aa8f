//! Thread-safe versions of [`Once`](super::Once) and [`Memoize`](super::Memoize).

use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;
use static_assertions::{assert_impl_all, assert_not_impl_any};

use super::memoize::{Cache, Memoize};
use super::once::{Once, OnceState};

assert_impl_all!(SyncOnce<fn(i32) -> i32, i32>: Send, Sync);
assert_impl_all!(SyncMemoize<fn(&u64) -> u64, u64, u64>: Send, Sync);
assert_not_impl_any!(Once<fn(i32) -> i32, i32>: Sync);
assert_not_impl_any!(Memoize<fn(&u64) -> u64, u64, u64>: Sync);

/// A thread-safe wrapper that calls its function on the first call only.
///
/// The lock is held while the function runs, so concurrent callers block
/// until the first call finishes and then observe its result. The function
/// therefore runs exactly once even under contention.
///
/// # Deadlock
///
/// The wrapped function must not call the same wrapper: the lock is not
/// reentrant.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::thread;
/// use underbar::function::sync_once;
///
/// let runs = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&runs);
/// let initialize = Arc::new(sync_once(move |()| counter.fetch_add(1, Ordering::SeqCst) + 1));
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let initialize = Arc::clone(&initialize);
///         thread::spawn(move || initialize.call(()))
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), 1);
/// }
/// assert_eq!(runs.load(Ordering::SeqCst), 1);
/// ```
pub struct SyncOnce<F, R> {
    state: Mutex<OnceState<F, R>>,
}

/// Wraps `function` so that it runs at most one time across all threads.
pub fn sync_once<F, A, R>(function: F) -> SyncOnce<F, R>
where
    F: FnOnce(A) -> R,
{
    SyncOnce {
        state: Mutex::new(OnceState::Pending(function)),
    }
}

impl<F, R> SyncOnce<F, R> {
    /// Calls the wrapped function the first time, replays its result after.
    ///
    /// # Panics
    ///
    /// Panics if the function panicked during an earlier first call.
    pub fn call<A>(&self, arguments: A) -> R
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        let mut state = self.state.lock();
        match std::mem::replace(&mut *state, OnceState::Running) {
            OnceState::Done(result) => {
                let replay = result.clone();
                *state = OnceState::Done(result);
                replay
            }
            OnceState::Running => panic!("SyncOnce function panicked"),
            OnceState::Pending(function) => {
                let result = function(arguments);
                *state = OnceState::Done(result.clone());
                result
            }
        }
    }

    /// Returns `true` once the function has run to completion.
    pub fn has_run(&self) -> bool {
        matches!(*self.state.lock(), OnceState::Done(_))
    }

    /// Returns the cached result, if the function has run.
    pub fn result(&self) -> Option<R>
    where
        R: Clone,
    {
        match &*self.state.lock() {
            OnceState::Done(result) => Some(result.clone()),
            _ => None,
        }
    }
}

impl<F, R: fmt::Debug> fmt::Debug for SyncOnce<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.try_lock().as_deref() {
            Some(OnceState::Pending(_)) => formatter.write_str("SyncOnce(<pending>)"),
            Some(OnceState::Done(result)) => {
                formatter.debug_tuple("SyncOnce").field(result).finish()
            }
            Some(OnceState::Running) | None => formatter.write_str("SyncOnce(<running>)"),
        }
    }
}

/// A thread-safe function wrapper that caches results by argument.
///
/// The cache lock is released while the function runs. Two threads missing
/// on the same key at the same moment may both compute it; the first result
/// stored wins and every caller receives that stored result.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
/// use underbar::function::sync_memoize;
///
/// let square = Arc::new(sync_memoize(|number: &u64| number * number));
/// let worker = {
///     let square = Arc::clone(&square);
///     thread::spawn(move || square.call(9))
/// };
/// assert_eq!(worker.join().unwrap(), 81);
/// assert!(square.is_cached(&9));
/// ```
pub struct SyncMemoize<F, K, V> {
    function: F,
    cache: Mutex<Cache<K, V>>,
}

/// Wraps `function` in a cache that can be shared between threads.
pub fn sync_memoize<F, K, V>(function: F) -> SyncMemoize<F, K, V>
where
    F: Fn(&K) -> V,
    K: Eq + Hash,
{
    SyncMemoize {
        function,
        cache: Mutex::new(Cache::default()),
    }
}

impl<F, K, V> SyncMemoize<F, K, V>
where
    F: Fn(&K) -> V,
    K: Eq + Hash,
{
    /// Returns the cached result for `argument`, computing it on a miss.
    pub fn call(&self, argument: K) -> V
    where
        V: Clone,
    {
        if let Some(cached) = self.cache.lock().get(&argument) {
            return cached.clone();
        }
        let computed = (self.function)(&argument);
        self.cache
            .lock()
            .entry(argument)
            .or_insert(computed)
            .clone()
    }

    /// Returns `true` if a result for `argument` is cached.
    pub fn is_cached(&self, argument: &K) -> bool {
        self.cache.lock().contains_key(argument)
    }

    /// Returns the number of cached results.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }
}

impl<F, K, V> fmt::Debug for SyncMemoize<F, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SyncMemoize")
            .field("cached", &self.cache.lock().len())
            .finish_non_exhaustive()
    }
}
