use std::sync::Arc;
use std::time::Duration;

use crate::common::{self, FLAT_BODY, RecordingSink};
use httpmock::Method::GET;
use leetstats::{Lookup, LookupOutcome, StatsRetriever};

fn slow_lookup(server: &httpmock::MockServer, sink: RecordingSink) -> Lookup<RecordingSink> {
    let client = common::client(vec![common::endpoint(0)], vec![common::proxy(server, 0)]);
    Lookup::new(StatsRetriever::new(&client), sink)
}

fn mock_slow(server: &httpmock::MockServer, delay: Duration) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/p0");
        then.status(200)
            .header("content-type", "application/json")
            .delay(delay)
            .body(FLAT_BODY);
    })
}

#[tokio::test]
async fn second_trigger_while_running_is_refused() {
    let server = common::setup_server();
    let slow = mock_slow(&server, Duration::from_millis(600));
    let lookup = Arc::new(slow_lookup(&server, RecordingSink::default()));

    let first = tokio::spawn({
        let lookup = Arc::clone(&lookup);
        async move { lookup.trigger("uma").await }
    });

    for _ in 0..100 {
        if lookup.is_busy() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(lookup.is_busy());

    let second = lookup.trigger("vera").await;
    assert!(matches!(second, LookupOutcome::Busy));

    let first = first.await.unwrap();
    assert!(matches!(first, LookupOutcome::Found(_)));
    slow.assert_hits(1);
    assert!(!lookup.is_busy());
    assert!(!lookup.sink().loading());
}

#[tokio::test]
async fn loading_is_cleared_when_the_sink_panics() {
    let server = common::setup_server();
    let _m = common::mock_proxy(&server, 0, &common::target(0, "walt"), 200, FLAT_BODY);
    let lookup = Arc::new(slow_lookup(&server, RecordingSink::panicking()));

    let handle = tokio::spawn({
        let lookup = Arc::clone(&lookup);
        async move { lookup.trigger("walt").await }
    });
    let err = handle.await.unwrap_err();

    assert!(err.is_panic());
    assert!(!lookup.sink().loading());
    assert!(!lookup.is_busy());
}

#[tokio::test]
async fn loading_is_cleared_when_the_lookup_is_dropped() {
    let server = common::setup_server();
    let _slow = mock_slow(&server, Duration::from_secs(2));
    let lookup = slow_lookup(&server, RecordingSink::default());

    let res = tokio::time::timeout(Duration::from_millis(100), lookup.trigger("xena")).await;

    assert!(res.is_err());
    assert!(!lookup.sink().loading());
    assert!(!lookup.is_busy());
}
