//! Endpoint and proxy URL templates.
//!
//! Both are plain "string in, URL string out" functions wrapped in an `Arc` so a
//! configured list can be cloned cheaply with the client. The input handed to a
//! template is always percent-encoded first, so templates only splice.

use std::fmt;
use std::sync::Arc;

use url::{Url, form_urlencoded};

use crate::core::StatsError;

/// Placeholder replaced by the encoded username in endpoint templates.
pub const USERNAME_PLACEHOLDER: &str = "{username}";
/// Placeholder replaced by the encoded target URL in proxy templates.
pub const URL_PLACEHOLDER: &str = "{url}";

type BuildFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Percent-encodes `raw` as a single URI component.
///
/// Only `A-Z a-z 0-9 - _ . *` pass through; a space becomes `%20`, never `+`,
/// so the result is safe inside a path segment as well as a query string.
pub fn encode_component(raw: &str) -> String {
    // byte_serialize emits a literal '+' only for spaces; a real '+' comes out as %2B.
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// A statistics source: builds the API URL for one username.
#[derive(Clone)]
pub struct Endpoint {
    label: String,
    build: BuildFn,
}

impl Endpoint {
    /// Wraps an arbitrary builder. The closure receives the already-encoded username.
    pub fn new(
        label: impl Into<String>,
        build: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            build: Arc::new(build),
        }
    }

    /// Builds from a template such as `https://host/{username}/solved`.
    pub fn template(template: impl Into<String>) -> Self {
        let template = template.into();
        let label = template.clone();
        Self::new(label, move |user| {
            template.replace(USERNAME_PLACEHOLDER, user)
        })
    }

    /// Human-readable name, used in diagnostics.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The endpoint URL for `username` (encoded here, not by the caller).
    ///
    /// `.` and `..` are refused: `%2E` is still a dot segment to the URL parser,
    /// so the request would silently go to a different resource.
    pub fn url_for(&self, username: &str) -> Result<Url, StatsError> {
        if matches!(username, "." | "..") {
            return Err(StatsError::UnroutableUsername(username.to_string()));
        }
        Ok(Url::parse(&(self.build)(&encode_component(username)))?)
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Endpoint").field(&self.label).finish()
    }
}

#[derive(Clone)]
enum Transport {
    Direct,
    Wrap { label: String, build: BuildFn },
}

/// A pass-through proxy that fetches a target URL and relays its body.
#[derive(Clone)]
pub struct ProxyTransport {
    inner: Transport,
}

impl ProxyTransport {
    /// Wraps an arbitrary builder. The closure receives the already-encoded target URL.
    pub fn new(
        label: impl Into<String>,
        build: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: Transport::Wrap {
                label: label.into(),
                build: Arc::new(build),
            },
        }
    }

    /// Builds from a template such as `https://proxy.example/raw?url={url}`.
    pub fn template(template: impl Into<String>) -> Self {
        let template = template.into();
        let label = template.clone();
        Self::new(label, move |target| template.replace(URL_PLACEHOLDER, target))
    }

    /// No proxy at all: the target URL is requested as-is.
    pub fn direct() -> Self {
        Self {
            inner: Transport::Direct,
        }
    }

    /// `true` for the transport built by [`ProxyTransport::direct`].
    pub fn is_direct(&self) -> bool {
        matches!(self.inner, Transport::Direct)
    }

    /// Human-readable name, used in diagnostics.
    pub fn label(&self) -> &str {
        match &self.inner {
            Transport::Direct => "direct",
            Transport::Wrap { label, .. } => label,
        }
    }

    /// The URL to request in order to reach `target` through this transport.
    pub fn wrap(&self, target: &Url) -> Result<Url, StatsError> {
        match &self.inner {
            Transport::Direct => Ok(target.clone()),
            Transport::Wrap { build, .. } => {
                Ok(Url::parse(&build(&encode_component(target.as_str())))?)
            }
        }
    }
}

impl fmt::Debug for ProxyTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProxyTransport").field(&self.label()).finish()
    }
}
