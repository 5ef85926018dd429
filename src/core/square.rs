//! Delayed squaring: the one asynchronous unit of work in the crate.
//!
//! Each call validates its input, then spawns an independent task on the
//! current tokio runtime that sleeps for a fixed delay before yielding the
//! square. Negative input is rejected before any timer is registered.

use crate::core::ConfigProvider;
use crate::utils::error::{Result, UtilsError};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

pub const NEGATIVE_INPUT_MESSAGE: &str = "Negative number not allowed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayedSquare {
    delay: Duration,
}

impl DelayedSquare {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::with_delay(config.square_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts squaring `n` and returns a handle to the eventual result.
    ///
    /// The returned handle is already failed when `n` is negative or when no
    /// tokio runtime is running; otherwise the delay starts immediately,
    /// whether or not the handle is ever awaited. On a runtime without a
    /// time driver the handle resolves to [`UtilsError::TaskFailed`].
    pub fn spawn(&self, n: f64) -> SquareHandle {
        if n < 0.0 {
            tracing::warn!(n, "Rejected negative input");
            return SquareHandle::failed(UtilsError::invalid_argument(NEGATIVE_INPUT_MESSAGE));
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => return SquareHandle::failed(UtilsError::RuntimeUnavailable),
        };

        let delay = self.delay;
        tracing::debug!(n, delay_ms = delay.as_millis() as u64, "Scheduling square");

        // Deadline is fixed at call time, not when the task is first polled.
        // The timer itself is registered inside the task, so a runtime built
        // without `enable_time` fails the task instead of panicking here.
        let deadline = tokio::time::Instant::now() + delay;
        let task = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            n * n
        });

        SquareHandle {
            state: HandleState::Pending(task),
        }
    }

    pub async fn square(&self, n: f64) -> Result<f64> {
        self.spawn(n).await
    }

    /// Squares every value concurrently. Results keep the input order.
    pub async fn square_many(&self, values: &[f64]) -> Vec<Result<f64>> {
        let handles: Vec<SquareHandle> = values.iter().map(|&n| self.spawn(n)).collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            results.push(handle.await);
        }
        results
    }
}

impl Default for DelayedSquare {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn square_async(n: f64) -> Result<f64> {
    DelayedSquare::new().square(n).await
}

/// Future resolving to the result of one [`DelayedSquare::spawn`] call.
///
/// Dropping the handle detaches the task; the delay still runs out.
#[derive(Debug)]
pub struct SquareHandle {
    state: HandleState,
}

#[derive(Debug)]
enum HandleState {
    Failed(Option<UtilsError>),
    Pending(JoinHandle<f64>),
}

impl SquareHandle {
    fn failed(error: UtilsError) -> Self {
        Self {
            state: HandleState::Failed(Some(error)),
        }
    }

    /// True when the call was rejected up front and no task was scheduled.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, HandleState::Failed(Some(_)))
    }
}

impl Future for SquareHandle {
    type Output = Result<f64>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.state {
            HandleState::Failed(error) => match error.take() {
                Some(error) => Poll::Ready(Err(error)),
                None => panic!("SquareHandle polled after completion"),
            },
            HandleState::Pending(task) => Pin::new(task).poll(cx).map_err(UtilsError::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;
    use tokio_test::{assert_pending, assert_ready_err, task};

    #[tokio::test(start_paused = true)]
    async fn test_resolves_to_square_after_delay() {
        let start = Instant::now();
        let value = DelayedSquare::new().square(7.0).await.unwrap();

        assert_eq!(value, 49.0);
        assert!(start.elapsed() >= DEFAULT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_is_accepted() {
        assert_eq!(square_async(0.0).await.unwrap(), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_negative_zero_is_accepted() {
        let handle = DelayedSquare::new().spawn(-0.0);
        assert!(!handle.is_failed());

        let value = handle.await.unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[tokio::test(start_paused = true)]
    async fn test_negative_input_fails_immediately() {
        let handle = DelayedSquare::new().spawn(-2.0);
        assert!(handle.is_failed());

        let mut polled = task::spawn(handle);
        let err = assert_ready_err!(polled.poll());

        assert!(matches!(err, UtilsError::InvalidArgument { .. }));
        assert_eq!(err.to_string(), NEGATIVE_INPUT_MESSAGE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_until_delay_elapses() {
        let mut polled = task::spawn(DelayedSquare::new().spawn(3.0));
        assert_pending!(polled.poll());

        tokio::time::advance(Duration::from_millis(999)).await;
        assert_pending!(polled.poll());

        tokio::time::advance(Duration::from_millis(1)).await;
        let value = loop {
            if let Poll::Ready(result) = polled.poll() {
                break result.unwrap();
            }
            tokio::task::yield_now().await;
        };
        assert_eq!(value, 9.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay() {
        let squarer = DelayedSquare::with_delay(Duration::from_millis(50));
        let start = Instant::now();

        assert_eq!(squarer.square(1.5).await.unwrap(), 2.25);
        assert!(start.elapsed() >= Duration::from_millis(50));
        assert!(start.elapsed() < DEFAULT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nan_is_not_rejected() {
        let value = square_async(f64::NAN).await.unwrap();
        assert!(value.is_nan());
    }

    #[test]
    fn test_fails_without_runtime() {
        let handle = DelayedSquare::new().spawn(2.0);
        assert!(handle.is_failed());

        let err = tokio_test::block_on(handle).unwrap_err();
        assert!(matches!(err, UtilsError::RuntimeUnavailable));
    }

    #[test]
    fn test_runtime_without_timer_fails_the_handle() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        let err = runtime
            .block_on(async { DelayedSquare::new().spawn(2.0).await })
            .unwrap_err();
        assert!(matches!(err, UtilsError::TaskFailed(_)));
    }
}
