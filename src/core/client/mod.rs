//! Public client surface + builder.
//! Defaults (sources, UA, timeout) live in `constants`.

mod constants;

use crate::core::StatsError;
use crate::core::source::{Endpoint, ProxyTransport};
use constants::{
    DEFAULT_ENDPOINT_ALFA, DEFAULT_ENDPOINT_STATS_API, DEFAULT_PROXY_ALLORIGINS,
    DEFAULT_PROXY_CORSPROXY, DEFAULT_TIMEOUT, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;

/// Shared HTTP client plus the ordered endpoint and proxy lists.
///
/// Cloning is cheap: the connection pool and the templates are reference-counted.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: Client,
    endpoints: Vec<Endpoint>,
    proxies: Vec<ProxyTransport>,
    timeout: Option<Duration>,
}

impl Default for StatsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl StatsClient {
    /// Create a new builder.
    pub fn builder() -> StatsClientBuilder {
        StatsClientBuilder::default()
    }

    /// Endpoints in fallback priority order.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Proxy transports in fallback priority order.
    pub fn proxies(&self) -> &[ProxyTransport] {
        &self.proxies
    }

    /// Upper bound applied to every individual request, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

/// The endpoints used when none are configured explicitly.
pub fn default_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::template(DEFAULT_ENDPOINT_ALFA),
        Endpoint::template(DEFAULT_ENDPOINT_STATS_API),
    ]
}

/// The proxy transports used when none are configured explicitly.
pub fn default_proxies() -> Vec<ProxyTransport> {
    vec![
        ProxyTransport::template(DEFAULT_PROXY_ALLORIGINS),
        ProxyTransport::template(DEFAULT_PROXY_CORSPROXY),
    ]
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct StatsClientBuilder {
    user_agent: Option<String>,
    custom_client: Option<Client>,
    endpoints: Option<Vec<Endpoint>>,
    proxies: Option<Vec<ProxyTransport>>,
    timeout: Option<Option<Duration>>,
    connect_timeout: Option<Duration>,
}

impl StatsClientBuilder {
    /// Override the User-Agent. Ignored when a custom client is supplied.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Use a preconfigured `reqwest::Client` instead of building one.
    pub fn custom_client(mut self, client: Client) -> Self {
        self.custom_client = Some(client);
        self
    }

    /// Replace the endpoint list. An empty list is allowed; lookups then fail immediately.
    pub fn endpoints(mut self, endpoints: impl IntoIterator<Item = Endpoint>) -> Self {
        self.endpoints = Some(endpoints.into_iter().collect());
        self
    }

    /// Append one endpoint. The first call discards the defaults.
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoints.get_or_insert_with(Vec::new).push(endpoint);
        self
    }

    /// Replace the proxy list.
    pub fn proxies(mut self, proxies: impl IntoIterator<Item = ProxyTransport>) -> Self {
        self.proxies = Some(proxies.into_iter().collect());
        self
    }

    /// Append one proxy transport. The first call discards the defaults.
    pub fn proxy(mut self, proxy: ProxyTransport) -> Self {
        self.proxies.get_or_insert_with(Vec::new).push(proxy);
        self
    }

    /// Request endpoints directly, without any pass-through proxy.
    pub fn no_proxy(mut self) -> Self {
        self.proxies = Some(vec![ProxyTransport::direct()]);
        self
    }

    /// Per-request timeout. Default: 10 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(Some(dur));
        self
    }

    /// Let requests wait as long as the transport allows.
    pub fn no_timeout(mut self) -> Self {
        self.timeout = Some(None);
        self
    }

    /// Set a connect timeout. Default: none. Ignored when a custom client is supplied.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<StatsClient, StatsError> {
        let http = match self.custom_client {
            Some(client) => client,
            None => {
                let mut httpb = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                httpb.build()?
            }
        };

        Ok(StatsClient {
            http,
            endpoints: self.endpoints.unwrap_or_else(default_endpoints),
            proxies: self.proxies.unwrap_or_else(default_proxies),
            timeout: self.timeout.unwrap_or(Some(DEFAULT_TIMEOUT)),
        })
    }
}
