use std::fmt;

use thiserror::Error;

/// Which fallback loop ran out of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Every configured proxy transport failed for one target URL.
    Proxies,
    /// Every configured data-source endpoint failed.
    Endpoints,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Proxies => "proxies",
            Stage::Endpoints => "endpoints",
        })
    }
}

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The request never produced a response: DNS, connect, TLS, aborted, or timed out.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream answered with a status outside the 2xx range.
    #[error("HTTP {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not valid JSON.
    #[error("malformed JSON body from {url}: {source}")]
    MalformedBody {
        /// The URL whose body failed to parse.
        url: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The body was valid JSON but matched no known statistics layout.
    #[error("unrecognized response shape: {0}")]
    UnrecognizedShape(String),

    /// An endpoint or proxy template produced something that is not an absolute URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The username was empty after trimming.
    #[error("username must not be empty")]
    InvalidUsername,

    /// The username is `.` or `..`, which URL parsing folds away as a dot segment
    /// (encoded or not), so it can never reach the source verbatim.
    #[error("username `{0}` cannot be sent as a URL path segment")]
    UnroutableUsername(String),

    /// Every configured option of a fallback loop was attempted and failed,
    /// or none was configured.
    #[error("all {stage} failed after {attempts} attempt(s){}", last_suffix(.last))]
    Exhausted {
        /// The loop that ran dry.
        stage: Stage,
        /// How many options of that loop were tried.
        attempts: usize,
        /// The most recent failure, if any attempt ran.
        #[source]
        last: Option<Box<StatsError>>,
    },
}

fn last_suffix(last: &Option<Box<StatsError>>) -> String {
    last.as_ref()
        .map(|e| format!("; last error: {e}"))
        .unwrap_or_default()
}

impl StatsError {
    /// Follows `Exhausted` wrappers down to the last concrete failure.
    pub fn root_cause(&self) -> &StatsError {
        let mut cur = self;
        while let StatsError::Exhausted {
            last: Some(inner), ..
        } = cur
        {
            cur = &**inner;
        }
        cur
    }

    /// `true` for an `Exhausted` error of the given stage.
    pub fn is_exhausted(&self, stage: Stage) -> bool {
        matches!(self, StatsError::Exhausted { stage: s, .. } if *s == stage)
    }
}
