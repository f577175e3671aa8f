//! The tokio runtime behind [`delay`](super::delay).
//!
//! Delayed calls are spawned on the caller's runtime when there is one. From
//! plain synchronous code they go to a lazily started, process-wide
//! multi-thread runtime instead, so `delay` works the same from `main` as
//! from inside an async task.
//!
//! - [`global`]: the shared runtime, sized to the number of CPU cores
//! - [`handle`]: the current runtime's handle, or a per-thread cached handle
//!   to the shared runtime
//! - [`try_run_blocking`]: drive a future to completion from synchronous code

use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::future::Future;
use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime, RuntimeFlavor};

/// Shared runtime, started on first access and never dropped.
static GLOBAL_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    let worker_threads = num_cpus::get();
    tracing::debug!(worker_threads, "starting shared runtime for delayed calls");
    Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .thread_name("underbar-delay")
        .enable_all()
        .build()
        .expect("Failed to create global tokio runtime")
});

/// Returns the shared runtime, starting it if needed.
///
/// # Panics
///
/// Panics if the runtime cannot be built (for example when the process may
/// not spawn threads).
#[inline]
#[must_use]
pub fn global() -> &'static Runtime {
    &GLOBAL_RUNTIME
}

thread_local! {
    static CACHED_HANDLE: RefCell<Option<Handle>> = const { RefCell::new(None) };
}

/// Returns the handle delayed calls are spawned on.
///
/// Inside a tokio runtime this is the current runtime's handle, so delayed
/// calls follow that runtime's clock (including a paused test clock).
/// Outside one it is the shared runtime's handle, cached per thread.
#[inline]
#[must_use]
pub fn handle() -> Handle {
    if let Ok(current) = Handle::try_current() {
        return current;
    }
    CACHED_HANDLE.with(|cached| {
        cached
            .borrow_mut()
            .get_or_insert_with(|| global().handle().clone())
            .clone()
    })
}

/// Why a future could not be driven to completion synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockingError {
    /// Blocking was requested on a current-thread runtime's worker, where
    /// it would stall the only thread able to make progress.
    CurrentThreadRuntime,
    /// The surrounding runtime has a flavor that does not support blocking.
    UnsupportedRuntimeFlavor,
}

impl fmt::Display for BlockingError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentThreadRuntime => formatter.write_str(
                "cannot block inside a current-thread runtime: \
                 block_in_place is only supported in multi-thread runtimes",
            ),
            Self::UnsupportedRuntimeFlavor => {
                formatter.write_str("cannot block inside a runtime of this flavor")
            }
        }
    }
}

impl Error for BlockingError {}

/// Drives `future` to completion on the calling thread.
///
/// Inside a multi-thread runtime the worker is handed off with
/// `block_in_place` first. Outside any runtime the shared runtime drives
/// the future.
///
/// # Errors
///
/// Returns [`BlockingError`] when called from inside a runtime that cannot
/// block, most commonly a current-thread runtime.
pub fn try_run_blocking<F, T>(future: F) -> Result<T, BlockingError>
where
    F: Future<Output = T>,
{
    let Ok(current) = Handle::try_current() else {
        return Ok(global().block_on(future));
    };
    match current.runtime_flavor() {
        RuntimeFlavor::MultiThread => {
            Ok(tokio::task::block_in_place(|| current.block_on(future)))
        }
        RuntimeFlavor::CurrentThread => Err(BlockingError::CurrentThreadRuntime),
        _ => Err(BlockingError::UnsupportedRuntimeFlavor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::ptr;
    use std::thread;

    #[rstest]
    fn global_is_a_single_instance() {
        assert!(ptr::eq(global(), global()));
    }

    #[rstest]
    fn global_is_shared_across_threads() {
        let address = ptr::from_ref(global()) as usize;
        let other = thread::spawn(|| ptr::from_ref(global()) as usize)
            .join()
            .unwrap();
        assert_eq!(address, other);
    }

    #[rstest]
    fn handle_outside_runtime_points_at_global() {
        assert_eq!(handle().runtime_flavor(), RuntimeFlavor::MultiThread);
    }

    #[rstest]
    #[tokio::test(flavor = "current_thread")]
    async fn handle_inside_runtime_prefers_current() {
        assert_eq!(handle().runtime_flavor(), RuntimeFlavor::CurrentThread);
    }

    #[rstest]
    fn run_blocking_outside_runtime() {
        assert_eq!(try_run_blocking(async { 42 }), Ok(42));
    }

    #[rstest]
    #[tokio::test(flavor = "current_thread")]
    async fn run_blocking_refuses_current_thread_runtime() {
        assert_eq!(
            try_run_blocking(async { 1 }),
            Err(BlockingError::CurrentThreadRuntime)
        );
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn run_blocking_inside_multi_thread_runtime() {
        let result = tokio::task::spawn_blocking(|| try_run_blocking(async { 7 }))
            .await
            .unwrap();
        assert_eq!(result, Ok(7));
    }

    #[rstest]
    fn blocking_error_display() {
        assert!(
            BlockingError::CurrentThreadRuntime
                .to_string()
                .contains("current-thread")
        );
    }
}
