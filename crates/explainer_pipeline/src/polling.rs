//! Bounded polling of asynchronous jobs.

use explainer_error::{ExplainerResult, PollError, PollErrorKind};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

/// Interval, deadline and optional cancellation for [`poll_until`].
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Pause between a not-done result and the next probe
    pub interval: Duration,
    /// Budget measured from the first probe
    pub timeout: Duration,
    /// Stops polling early when cancelled
    pub cancellation: Option<CancellationToken>,
}

impl PollConfig {
    /// Config without cancellation.
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self {
            interval,
            timeout,
            cancellation: None,
        }
    }

    /// Attach a cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Probe until `is_done` accepts a result or the timeout elapses.
///
/// The first probe runs immediately. After each not-done result the call
/// sleeps for exactly `interval`, then gives up if `timeout` has elapsed
/// since the call started. A done result is returned even when it arrives
/// after the deadline.
///
/// # Errors
///
/// - Probe errors are returned as-is, without retrying.
/// - [`PollErrorKind::Timeout`] once the deadline passes.
/// - [`PollErrorKind::Cancelled`] when the configured token fires.
///
/// # Examples
///
/// ```
/// use explainer_error::ExplainerError;
/// use explainer_pipeline::{PollConfig, poll_until};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut calls = 0;
/// let config = PollConfig::new(Duration::from_millis(1), Duration::from_secs(1));
/// let value = poll_until(
///     || {
///         calls += 1;
///         let current = calls;
///         async move { Ok::<_, ExplainerError>(current) }
///     },
///     |n| *n >= 3,
///     &config,
/// )
/// .await
/// .unwrap();
/// assert_eq!(value, 3);
/// # }
/// ```
pub async fn poll_until<T, P, Fut, D>(
    mut probe: P,
    is_done: D,
    config: &PollConfig,
) -> ExplainerResult<T>
where
    P: FnMut() -> Fut,
    Fut: Future<Output = ExplainerResult<T>>,
    D: Fn(&T) -> bool,
{
    let started = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        if config.is_cancelled() {
            debug!(attempts, "Polling cancelled");
            return Err(PollError::new(PollErrorKind::Cancelled).into());
        }

        attempts += 1;
        let value = probe().await?;
        if is_done(&value) {
            debug!(attempts, elapsed_ms = started.elapsed().as_millis() as u64, "Polling finished");
            return Ok(value);
        }
        trace!(attempts, "Result not ready");

        match &config.cancellation {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => {
                        debug!(attempts, "Polling cancelled");
                        return Err(PollError::new(PollErrorKind::Cancelled).into());
                    }
                    _ = tokio::time::sleep(config.interval) => {}
                }
            }
            None => tokio::time::sleep(config.interval).await,
        }

        if started.elapsed() >= config.timeout {
            warn!(attempts, timeout_ms = config.timeout_ms(), "Polling timed out");
            return Err(PollError::new(PollErrorKind::Timeout {
                timeout_ms: config.timeout_ms(),
            })
            .into());
        }
    }
}
