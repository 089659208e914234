use serde_json::Value;
use url::Url;

use crate::core::{StatsClient, StatsError};

/// One plain GET: non-2xx becomes `Status`, a body that is not JSON becomes
/// `MalformedBody`. The client's per-request timeout bounds the whole exchange.
pub(crate) async fn get_json(client: &StatsClient, url: &Url) -> Result<Value, StatsError> {
    let mut req = client.http().get(url.clone());
    if let Some(t) = client.timeout() {
        req = req.timeout(t);
    }

    let resp = req.send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(StatsError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|source| StatsError::MalformedBody {
        url: url.to_string(),
        source,
    })
}
