//! Behavior of the composed transport stack: round-robin rotation over a
//! pool of mocks, and the metrics decorator around it.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use tron_kit::proto::core;
use tron_kit::{Error, MetricsCollector, MetricsTransport, RoundRobinTransport, Transport};

use crate::support::{call_log, CallLog, MockTransport, RecordingCollector};

fn pool_of(n: usize, log: &CallLog) -> RoundRobinTransport {
    let members: Vec<Arc<dyn Transport>> = (0..n)
        .map(|id| Arc::new(MockTransport::pooled(id, log.clone())) as Arc<dyn Transport>)
        .collect();
    RoundRobinTransport::new(members).unwrap()
}

fn served_by(log: &CallLog) -> Vec<usize> {
    log.lock().unwrap().iter().map(|(id, _)| *id).collect()
}

// =============================================================================
// Round-robin rotation
// =============================================================================

#[tokio::test]
async fn test_rotation_starts_at_first_member_and_cycles() {
    let log = call_log();
    let pool = pool_of(3, &log);

    for _ in 0..7 {
        pool.get_now_block().await.unwrap();
    }

    assert_eq!(served_by(&log), vec![0, 1, 2, 0, 1, 2, 0]);
}

#[tokio::test]
async fn test_rotation_is_shared_across_methods() {
    let log = call_log();
    let pool = pool_of(3, &log);

    pool.get_account(core::Account::default()).await.unwrap();
    pool.get_now_block().await.unwrap();
    pool.total_transaction().await.unwrap();

    let calls = log.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![
            (0, "GetAccount"),
            (1, "GetNowBlock"),
            (2, "TotalTransaction"),
        ]
    );
}

#[tokio::test]
async fn test_single_member_pool_serves_everything() {
    let log = call_log();
    let pool = pool_of(1, &log);

    for _ in 0..5 {
        pool.list_nodes().await.unwrap();
    }

    assert_eq!(served_by(&log), vec![0, 0, 0, 0, 0]);
}

#[tokio::test]
async fn test_concurrent_calls_stay_evenly_distributed() {
    let log = call_log();
    let pool = Arc::new(pool_of(4, &log));

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..100 {
        let pool = Arc::clone(&pool);
        tasks.spawn(async move {
            pool.total_transaction().await.unwrap();
        });
    }
    while let Some(task) = tasks.join_next().await {
        task.unwrap();
    }

    let mut counts = [0usize; 4];
    for id in served_by(&log) {
        counts[id] += 1;
    }
    assert_eq!(counts, [25, 25, 25, 25]);
}

// =============================================================================
// Pool close semantics
// =============================================================================

#[tokio::test]
async fn test_close_visits_every_member() {
    let log = call_log();
    let members: Vec<MockTransport> =
        (0..3).map(|id| MockTransport::pooled(id, log.clone())).collect();
    let counters: Vec<_> = members.iter().map(MockTransport::closes).collect();

    let pool = RoundRobinTransport::new(
        members
            .into_iter()
            .map(|m| Arc::new(m) as Arc<dyn Transport>)
            .collect(),
    )
    .unwrap();

    pool.close().await.unwrap();

    for counter in &counters {
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}

#[tokio::test]
async fn test_close_returns_last_failure_but_visits_all() {
    let log = call_log();
    let healthy = MockTransport::pooled(0, log.clone());
    let broken_one = MockTransport::pooled(1, log.clone()).with_failing_close();
    let broken_two = MockTransport::pooled(2, log.clone()).with_failing_close();
    let counters = [healthy.closes(), broken_one.closes(), broken_two.closes()];

    let pool = RoundRobinTransport::new(vec![
        Arc::new(healthy) as Arc<dyn Transport>,
        Arc::new(broken_one) as Arc<dyn Transport>,
        Arc::new(broken_two) as Arc<dyn Transport>,
    ])
    .unwrap();

    let err = pool.close().await.unwrap_err();
    assert!(err.to_string().contains("close 2"), "got: {err}");

    for counter in &counters {
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}

// =============================================================================
// Metrics decorator
// =============================================================================

#[tokio::test]
async fn test_decorator_passes_results_through_and_records_success() {
    let collector = Arc::new(RecordingCollector::default());
    let stack = MetricsTransport::new(
        Arc::new(MockTransport::ok()),
        Arc::clone(&collector) as Arc<dyn MetricsCollector>,
    );

    stack.get_now_block().await.unwrap();

    let requests = collector.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (blockchain, method, status, _duration) = &requests[0];
    assert_eq!(blockchain, "tron");
    assert_eq!(method, "GetNowBlock");
    assert_eq!(status, "success");
    assert!(collector.errors.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_decorator_records_error_with_type_and_reraises() {
    let collector = Arc::new(RecordingCollector::default());
    let stack = MetricsTransport::new(
        Arc::new(MockTransport::failing()),
        Arc::clone(&collector) as Arc<dyn MetricsCollector>,
    );

    let err = stack
        .get_account(core::Account::default())
        .await
        .unwrap_err();

    // The caller sees the untouched transport error.
    assert_eq!(err.transport().unwrap().protocol, "mock");
    assert!(matches!(err.root(), Error::NotConnected));

    let requests = collector.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].2, "error");

    let errors = collector.errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].1, "GetAccount");
    assert_eq!(errors[0].2, "other");
}

#[tokio::test]
async fn test_decorator_does_not_instrument_close() {
    let collector = Arc::new(RecordingCollector::default());
    let stack = MetricsTransport::new(
        Arc::new(MockTransport::ok()),
        Arc::clone(&collector) as Arc<dyn MetricsCollector>,
    );

    stack.close().await.unwrap();

    assert!(collector.requests.lock().unwrap().is_empty());
    assert!(collector.errors.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_decorator_custom_blockchain_label() {
    let collector = Arc::new(RecordingCollector::default());
    let stack = MetricsTransport::with_blockchain(
        Arc::new(MockTransport::ok()),
        Arc::clone(&collector) as Arc<dyn MetricsCollector>,
        "tron-nile",
    );

    stack.list_nodes().await.unwrap();

    assert_eq!(collector.requests.lock().unwrap()[0].0, "tron-nile");
}

#[tokio::test]
async fn test_error_context_survives_full_layering() {
    let collector = Arc::new(RecordingCollector::default());
    let pool = RoundRobinTransport::new(vec![
        Arc::new(MockTransport::failing()) as Arc<dyn Transport>,
    ])
    .unwrap();
    let stack = MetricsTransport::new(
        Arc::new(pool),
        Arc::clone(&collector) as Arc<dyn MetricsCollector>,
    );

    let err = stack.total_transaction().await.unwrap_err();

    let annotation = err.transport().expect("transport annotation");
    assert_eq!(annotation.protocol, "mock");
    assert_eq!(annotation.host, "mock-0");
    assert_eq!(annotation.method, "TotalTransaction");
    assert!(matches!(err.root(), Error::NotConnected));
}
