use explainer_error::{
    ExplainerError, ExplainerErrorKind, PollErrorKind, StageError, StageErrorKind,
};
use explainer_pipeline::{PollConfig, poll_until};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

fn poll_kind(err: &ExplainerError) -> PollErrorKind {
    match err.kind() {
        ExplainerErrorKind::Poll(e) => e.kind,
        other => panic!("expected poll error, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_done_after_n_not_done_results_takes_n_plus_one_probes() {
    let calls = AtomicU32::new(0);
    let config = PollConfig::new(Duration::from_secs(10), Duration::from_secs(600));
    let started = Instant::now();

    let value = poll_until(
        || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Ok::<_, ExplainerError>(n) }
        },
        |n| *n == 4,
        &config,
    )
    .await
    .unwrap();

    assert_eq!(value, 4);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(started.elapsed(), Duration::from_secs(30));
}

#[tokio::test(start_paused = true)]
async fn test_timeout_shorter_than_interval_probes_once() {
    let calls = AtomicU32::new(0);
    let config = PollConfig::new(Duration::from_secs(10), Duration::from_secs(5));

    let err = poll_until(
        || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, ExplainerError>(false) }
        },
        |done| *done,
        &config,
    )
    .await
    .unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(poll_kind(&err), PollErrorKind::Timeout { timeout_ms: 5000 });
    assert_eq!(err.reason(), "Polling timed out after 5000ms");
}

#[tokio::test(start_paused = true)]
async fn test_deadline_checked_after_each_sleep() {
    let calls = AtomicU32::new(0);
    let config = PollConfig::new(Duration::from_secs(1), Duration::from_millis(3500));

    let err = poll_until(
        || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, ExplainerError>(()) }
        },
        |_| false,
        &config,
    )
    .await
    .unwrap_err();

    // probes at 0s, 1s, 2s and 3s; the wake at 4s is past the deadline
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(poll_kind(&err), PollErrorKind::Timeout { timeout_ms: 3500 });
}

#[tokio::test(start_paused = true)]
async fn test_done_result_past_deadline_is_returned() {
    let config = PollConfig::new(Duration::from_secs(1), Duration::from_secs(5));

    let value = poll_until(
        || async {
            tokio::time::sleep(Duration::from_secs(20)).await;
            Ok::<_, ExplainerError>("finished")
        },
        |_| true,
        &config,
    )
    .await
    .unwrap();

    assert_eq!(value, "finished");
}

#[tokio::test(start_paused = true)]
async fn test_probe_error_propagates_without_retry() {
    let calls = AtomicU32::new(0);
    let config = PollConfig::new(Duration::from_secs(1), Duration::from_secs(60));

    let err = poll_until(
        || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n == 2 {
                    Err(StageError::new(StageErrorKind::Configuration("boom".to_string())).into())
                } else {
                    Ok::<_, ExplainerError>(n)
                }
            }
        },
        |_| false,
        &config,
    )
    .await
    .unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(err.reason(), "Configuration error: boom");
}

#[tokio::test(start_paused = true)]
async fn test_cancellation_interrupts_sleep() {
    let calls = Arc::new(AtomicU32::new(0));
    let token = CancellationToken::new();
    let config = PollConfig::new(Duration::from_secs(10), Duration::from_secs(600))
        .with_cancellation(token.clone());

    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(15)).await;
        canceller.cancel();
    });

    let probe_calls = calls.clone();
    let err = poll_until(
        move || {
            probe_calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, ExplainerError>(()) }
        },
        |_| false,
        &config,
    )
    .await
    .unwrap_err();

    assert_eq!(poll_kind(&err), PollErrorKind::Cancelled);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_cancelled_token_prevents_first_probe() {
    let calls = AtomicU32::new(0);
    let token = CancellationToken::new();
    token.cancel();
    let config =
        PollConfig::new(Duration::from_millis(1), Duration::from_secs(1)).with_cancellation(token);

    let err = poll_until(
        || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, ExplainerError>(()) }
        },
        |_| true,
        &config,
    )
    .await
    .unwrap_err();

    assert_eq!(poll_kind(&err), PollErrorKind::Cancelled);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
