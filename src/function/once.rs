//! Functions that run at most one time.

use std::cell::RefCell;
use std::fmt;

/// The internal state of a [`Once`] wrapper.
#[derive(Debug)]
pub enum OnceState<F, R> {
    /// The function has not been called yet.
    Pending(F),
    /// The function is running (or panicked while running).
    Running,
    /// The function ran and produced this result.
    Done(R),
}

/// A function wrapper that calls its function on the first call only.
///
/// The first [`call`](Once::call) runs the function with the given
/// arguments and caches the result. Every later call returns a clone of the
/// cached result, whatever its arguments, without running the function
/// again.
///
/// # Type Parameters
///
/// * `F` - The wrapped function; `FnOnce` suffices since it runs once
/// * `R` - The result type
///
/// # Thread Safety
///
/// This type is NOT thread-safe. Use [`SyncOnce`](super::SyncOnce) to share
/// a wrapper between threads.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::function::once;
///
/// let counter = Cell::new(0);
/// let increment = once(|step: i32| {
///     counter.set(counter.get() + step);
///     counter.get()
/// });
///
/// assert_eq!(increment.call(5), 5);
/// assert_eq!(increment.call(100), 5);
/// assert_eq!(increment.call(7), 5);
/// assert_eq!(counter.get(), 5);
/// ```
pub struct Once<F, R> {
    state: RefCell<OnceState<F, R>>,
}

/// Wraps `function` so that it runs at most one time.
///
/// Multiple arguments are passed as a tuple.
///
/// # Examples
///
/// ```rust
/// use underbar::function::once;
///
/// let add = once(|(left, right): (i32, i32)| left + right);
/// assert_eq!(add.call((1, 2)), 3);
/// assert_eq!(add.call((10, 20)), 3);
/// ```
#[inline]
pub const fn once<F, A, R>(function: F) -> Once<F, R>
where
    F: FnOnce(A) -> R,
{
    Once {
        state: RefCell::new(OnceState::Pending(function)),
    }
}

impl<F, R> Once<F, R> {
    /// Calls the wrapped function the first time, replays its result after.
    ///
    /// # Panics
    ///
    /// Panics if the function panicked during the first call, or if the
    /// function calls this same wrapper while it is running.
    pub fn call<A>(&self, arguments: A) -> R
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        let pending = {
            let mut state = self.state.borrow_mut();
            match std::mem::replace(&mut *state, OnceState::Running) {
                OnceState::Done(result) => {
                    let replay = result.clone();
                    *state = OnceState::Done(result);
                    return replay;
                }
                OnceState::Running => panic!("Once function panicked or was re-entered"),
                OnceState::Pending(function) => function,
            }
        };

        let result = pending(arguments);
        *self.state.borrow_mut() = OnceState::Done(result.clone());
        result
    }

    /// Returns `true` once the function has run to completion.
    #[inline]
    pub fn has_run(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Done(_))
    }

    /// Returns the cached result, if the function has run.
    pub fn result(&self) -> Option<R>
    where
        R: Clone,
    {
        match &*self.state.borrow() {
            OnceState::Done(result) => Some(result.clone()),
            _ => None,
        }
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Pending(_) => formatter.write_str("Once(<pending>)"),
            OnceState::Running => formatter.write_str("Once(<running>)"),
            OnceState::Done(result) => formatter.debug_tuple("Once").field(result).finish(),
        }
    }
}
