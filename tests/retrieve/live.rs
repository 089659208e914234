use leetstats::{StatsClient, StatsRetriever};

#[tokio::test]
#[ignore]
async fn live_default_sources_smoke() {
    if !crate::common::live_enabled() {
        return;
    }

    let client = StatsClient::builder().build().unwrap();
    let stats = StatsRetriever::new(&client)
        .retrieve("leetcode")
        .await
        .unwrap();

    assert!(stats.total.is_some());
}
