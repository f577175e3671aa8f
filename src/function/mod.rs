//! Function combinators.
//!
//! Each combinator takes a function and returns a wrapper object with
//! modified invocation semantics. A wrapper owns its state (a run flag, a
//! cache) for exactly as long as the wrapper lives; two wrappers never share
//! state, even when built from the same function.
//!
//! - [`once`] / [`Once`]: run at most one time, then replay the result
//! - [`memoize`] / [`Memoize`]: cache results by argument
//! - [`sync_once`] / [`SyncOnce`] and [`sync_memoize`] / [`SyncMemoize`]:
//!   the same contracts, safe to share between threads
//! - [`delay`] (feature `async`): run later on a tokio runtime
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use underbar::function::{memoize, once};
//!
//! let runs = Cell::new(0);
//! let initialize = once(|()| {
//!     runs.set(runs.get() + 1);
//!     "ready"
//! });
//! assert_eq!(initialize.call(()), "ready");
//! assert_eq!(initialize.call(()), "ready");
//! assert_eq!(runs.get(), 1);
//!
//! let square = memoize(|number: &u64| number * number);
//! assert_eq!(square.call(12), 144);
//! assert!(square.is_cached(&12));
//! ```

mod memoize;
mod once;
mod sync;

#[cfg(feature = "async")]
mod delay;
#[cfg(feature = "async")]
pub mod runtime;

pub use memoize::{Cache, Memoize, memoize};
pub use once::{Once, OnceState, once};
pub use sync::{SyncMemoize, SyncOnce, sync_memoize, sync_once};

#[cfg(feature = "async")]
pub use delay::{DelayError, Delayed, delay};
