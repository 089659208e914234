//! Centralized constants for default sources, timeouts and UA.

use std::time::Duration;

/// Default desktop UA; some free proxies reject obviously scripted clients.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Upper bound on a single proxied request.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Community LeetCode API; answers in the flat `totalSolved` layout.
pub(crate) const DEFAULT_ENDPOINT_ALFA: &str =
    "https://alfa-leetcode-api.onrender.com/{username}/solved";

/// Heroku-hosted stats API; fallback source.
pub(crate) const DEFAULT_ENDPOINT_STATS_API: &str =
    "https://leetcode-stats-api.herokuapp.com/{username}";

/// allorigins raw pass-through (relays the body untouched).
pub(crate) const DEFAULT_PROXY_ALLORIGINS: &str = "https://api.allorigins.win/raw?url={url}";

/// corsproxy.io; the target goes in as the bare query string.
pub(crate) const DEFAULT_PROXY_CORSPROXY: &str = "https://corsproxy.io/?{url}";
