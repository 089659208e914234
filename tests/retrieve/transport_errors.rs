use std::time::Duration;

use crate::common::{self, FLAT_BODY};
use httpmock::Method::GET;
use leetstats::{ProxyTransport, StatsClient, StatsError, StatsRetriever};

#[tokio::test]
async fn non_json_body_falls_over_to_next_proxy() {
    let server = common::setup_server();
    let html = common::mock_proxy(&server, 0, &common::target(0, "liam"), 200, "<html>rate limited</html>");
    let ok = common::mock_proxy(&server, 1, &common::target(0, "liam"), 200, FLAT_BODY);

    let client = common::client(
        vec![common::endpoint(0)],
        vec![common::proxy(&server, 0), common::proxy(&server, 1)],
    );
    let stats = StatsRetriever::new(&client).retrieve("liam").await.unwrap();

    html.assert();
    ok.assert();
    assert_eq!(stats.easy, Some(10));
}

#[tokio::test]
async fn malformed_body_is_reported_with_its_url() {
    let server = common::setup_server();
    let _m = common::mock_proxy(&server, 0, &common::target(0, "mia"), 200, "not json");

    let client = common::client(vec![common::endpoint(0)], vec![common::proxy(&server, 0)]);
    let target = common::endpoint(0).url_for("mia").unwrap();
    let err = StatsRetriever::new(&client)
        .fetch_through_proxies(&target)
        .await
        .unwrap_err();

    match err {
        StatsError::MalformedBody { url, .. } => assert!(url.contains("/p0")),
        other => panic!("expected MalformedBody, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_proxy_is_a_network_failure_and_is_skipped() {
    let server = common::setup_server();
    let ok = common::mock_proxy(&server, 0, &common::target(0, "noah"), 200, FLAT_BODY);

    let client = common::client(
        vec![common::endpoint(0)],
        vec![
            ProxyTransport::template("http://127.0.0.1:1/raw?url={url}"),
            common::proxy(&server, 0),
        ],
    );
    let target = common::endpoint(0).url_for("noah").unwrap();
    let raw = StatsRetriever::new(&client)
        .fetch_through_proxies(&target)
        .await
        .unwrap();

    ok.assert();
    assert_eq!(raw["totalSolved"], 42);
}

#[tokio::test]
async fn only_unreachable_proxies_surface_the_network_error() {
    let client = common::client(
        vec![common::endpoint(0)],
        vec![ProxyTransport::template("http://127.0.0.1:1/raw?url={url}")],
    );
    let err = StatsRetriever::new(&client)
        .retrieve("olga")
        .await
        .unwrap_err();

    assert!(matches!(err.root_cause(), StatsError::Network(_)));
}

#[tokio::test]
async fn slow_proxy_times_out_and_the_next_one_answers() {
    let server = common::setup_server();
    let _slow = server.mock(|when, then| {
        when.method(GET).path("/p0");
        then.status(200)
            .delay(Duration::from_secs(3))
            .body(FLAT_BODY);
    });
    let fast = common::mock_proxy(&server, 1, &common::target(0, "pia"), 200, FLAT_BODY);

    let client = StatsClient::builder()
        .endpoints(vec![common::endpoint(0)])
        .proxies(vec![common::proxy(&server, 0), common::proxy(&server, 1)])
        .timeout(Duration::from_millis(250))
        .build()
        .unwrap();
    let started = std::time::Instant::now();
    let stats = StatsRetriever::new(&client).retrieve("pia").await.unwrap();

    fast.assert();
    assert_eq!(stats.total, Some(42));
    assert!(started.elapsed() < Duration::from_secs(3));
}
