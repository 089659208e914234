//! Two-level fallback: endpoints in order, each reached through proxies in order.

use serde_json::Value;
use url::Url;

use super::{Stats, normalize};
use crate::core::fallback::first_success;
use crate::core::{Stage, StatsClient, StatsError, net};

/// Tries every proxy for `target`, returning the first JSON body that comes back.
pub(crate) async fn fetch_through_proxies(
    client: &StatsClient,
    target: &Url,
) -> Result<Value, StatsError> {
    first_success(client.proxies(), |_idx, proxy| async move {
        let url = proxy.wrap(target)?;
        let res = net::get_json(client, &url).await;

        #[cfg(feature = "tracing")]
        if let Err(e) = &res {
            tracing::debug!(proxy = _idx, via = proxy.label(), %url, error = %e, "proxy attempt failed");
        }

        res
    })
    .await
    .map_err(|ex| {
        ex.last.unwrap_or_else(|| StatsError::Exhausted {
            stage: Stage::Proxies,
            attempts: 0,
            last: None,
        })
    })
}

/// Walks the endpoint list; the first endpoint whose body normalizes wins.
pub(crate) async fn retrieve(client: &StatsClient, username: &str) -> Result<Stats, StatsError> {
    first_success(client.endpoints(), |_idx, endpoint| async move {
        let res = async {
            let target = endpoint.url_for(username)?;
            let raw = fetch_through_proxies(client, &target).await?;
            normalize(&raw)
        }
        .await;

        #[cfg(feature = "tracing")]
        if let Err(e) = &res {
            tracing::debug!(endpoint = _idx, source = endpoint.label(), error = %e, "endpoint attempt failed");
        }

        res
    })
    .await
    .map_err(|ex| StatsError::Exhausted {
        stage: Stage::Endpoints,
        attempts: ex.attempts,
        last: ex.last.map(Box::new),
    })
}
