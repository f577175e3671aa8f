//! Deferred invocation on a tokio runtime.

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::task::{JoinError, JoinHandle};

use super::runtime::{self, BlockingError};

/// Why a delayed call produced no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelayError {
    /// The deferred function panicked.
    Panicked,
    /// The task was cancelled, usually because its runtime shut down.
    Cancelled,
    /// [`Delayed::wait`] was called where the thread cannot block.
    Blocking(BlockingError),
}

impl fmt::Display for DelayError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panicked => formatter.write_str("delayed function panicked"),
            Self::Cancelled => formatter.write_str("delayed call was cancelled"),
            Self::Blocking(error) => write!(formatter, "cannot wait for delayed call: {error}"),
        }
    }
}

impl Error for DelayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Blocking(error) => Some(error),
            Self::Panicked | Self::Cancelled => None,
        }
    }
}

impl From<JoinError> for DelayError {
    fn from(error: JoinError) -> Self {
        if error.is_panic() {
            Self::Panicked
        } else {
            Self::Cancelled
        }
    }
}

impl From<BlockingError> for DelayError {
    fn from(error: BlockingError) -> Self {
        Self::Blocking(error)
    }
}

/// A scheduled call, returned by [`delay`].
///
/// Awaiting it yields the function's result once it has fired. Dropping it
/// detaches the call: the function still runs when its wait elapses.
#[must_use = "dropping a Delayed detaches the call; await it to get the result"]
pub struct Delayed<R> {
    handle: JoinHandle<R>,
}

impl<R> Delayed<R> {
    /// Returns `true` once the call has fired and finished.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks the calling thread until the call has fired.
    ///
    /// # Errors
    ///
    /// Returns [`DelayError::Blocking`] when called on a current-thread
    /// runtime's worker, or the error the call itself ended with.
    pub fn wait(self) -> Result<R, DelayError> {
        runtime::try_run_blocking(self)?
    }
}

impl<R> Future for Delayed<R> {
    type Output = Result<R, DelayError>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle)
            .poll(context)
            .map(|joined| joined.map_err(DelayError::from))
    }
}

impl<R> fmt::Debug for Delayed<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Delayed")
            .field("finished", &self.handle.is_finished())
            .finish()
    }
}

/// Calls `function(arguments)` once `wait` has elapsed, without blocking.
///
/// The call is spawned on the current tokio runtime, or on the shared
/// runtime from [`runtime::global`] when there is none. A zero `wait` still
/// defers the call to the runtime instead of running it inline.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::function::delay;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let greeting = delay(|name: &str| format!("hi {name}"), Duration::from_millis(50), "moe");
/// assert_eq!(greeting.await.unwrap(), "hi moe");
/// # }
/// ```
pub fn delay<F, A, R>(function: F, wait: Duration, arguments: A) -> Delayed<R>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    tracing::trace!(?wait, "scheduling delayed call");
    let handle = runtime::handle().spawn(async move {
        tokio::time::sleep(wait).await;
        tracing::trace!(?wait, "firing delayed call");
        function(arguments)
    });
    Delayed { handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::mpsc;

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn does_not_fire_before_wait() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        let delayed = delay(
            move |()| flag.store(true, Ordering::SeqCst),
            Duration::from_millis(100),
            (),
        );

        tokio::time::sleep(Duration::from_millis(99)).await;
        assert!(!fired.load(Ordering::SeqCst));
        assert!(!delayed.is_finished());

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert!(fired.load(Ordering::SeqCst));
        assert!(delayed.await.is_ok());
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn passes_arguments() {
        let sum = delay(|(left, right): (i32, i32)| left + right, Duration::from_secs(1), (1, 2));
        assert_eq!(sum.await, Ok(3));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn reports_panics() {
        let failing = delay(|()| -> i32 { panic!("boom") }, Duration::ZERO, ());
        assert_eq!(failing.await, Err(DelayError::Panicked));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn dropping_detaches_the_call() {
        let (sender, receiver) = tokio::sync::oneshot::channel();
        drop(delay(
            move |value: u8| sender.send(value),
            Duration::from_millis(10),
            5,
        ));
        assert_eq!(receiver.await, Ok(5));
    }

    #[rstest]
    fn fires_from_synchronous_code() {
        let (sender, receiver) = mpsc::channel();
        let delayed = delay(
            move |value: &'static str| sender.send(value),
            Duration::from_millis(5),
            "later",
        );
        assert_eq!(
            receiver.recv_timeout(Duration::from_secs(5)),
            Ok("later")
        );
        assert!(delayed.wait().is_ok());
    }

    #[rstest]
    #[tokio::test(flavor = "current_thread")]
    async fn wait_refuses_current_thread_runtime() {
        let delayed = delay(|()| 1, Duration::ZERO, ());
        assert_eq!(
            delayed.wait(),
            Err(DelayError::Blocking(BlockingError::CurrentThreadRuntime))
        );
    }

    #[rstest]
    fn error_display() {
        assert_eq!(DelayError::Panicked.to_string(), "delayed function panicked");
        assert!(DelayError::Blocking(BlockingError::CurrentThreadRuntime).source().is_some());
    }
}
