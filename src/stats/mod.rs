//! Solved-problem statistics: the canonical model, upstream layouts, and the
//! fallback retriever.
//!
//! Internals are split into:
//! - `model`: the [`Stats`] value handed to callers
//! - `wire`:  recognized upstream layouts and [`normalize`]
//! - `api`:   the endpoint/proxy fallback loops

mod api;
mod model;
mod wire;

pub use model::Stats;
pub use wire::{Shape, detect_shape, normalize};

use serde_json::Value;
use url::Url;

use crate::core::{StatsClient, StatsError};

/// Looks up statistics for a username across the client's configured sources.
///
/// Endpoints are tried in order; each one is reached through the proxies in
/// order. Attempts run strictly one after another and the first body that
/// normalizes is returned. Nothing is carried over between calls.
///
/// # Example
///
/// ```no_run
/// # use leetstats::{StatsClient, StatsRetriever};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = StatsClient::default();
/// let stats = StatsRetriever::new(&client).retrieve("alice").await?;
/// println!("solved {:?} problems", stats.total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StatsRetriever {
    client: StatsClient,
}

impl StatsRetriever {
    pub fn new(client: &StatsClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    pub fn client(&self) -> &StatsClient {
        &self.client
    }

    /// Fetches and normalizes statistics for `username`.
    ///
    /// The username is trimmed and percent-encoded before it is spliced into an
    /// endpoint template.
    ///
    /// # Errors
    ///
    /// - [`StatsError::InvalidUsername`] if the name is blank.
    /// - [`StatsError::Exhausted`] once every endpoint has failed; its source is the
    ///   most recent underlying failure, or `None` when no endpoint is configured.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn retrieve(&self, username: &str) -> Result<Stats, StatsError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(StatsError::InvalidUsername);
        }
        api::retrieve(&self.client, username).await
    }

    /// Reaches `target` through the configured proxies and returns the parsed body.
    ///
    /// # Errors
    ///
    /// The most recent proxy failure, or [`StatsError::Exhausted`] with stage
    /// `Proxies` if no proxy is configured.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, target), err, fields(target = %target)))]
    pub async fn fetch_through_proxies(&self, target: &Url) -> Result<Value, StatsError> {
        api::fetch_through_proxies(&self.client, target).await
    }
}
