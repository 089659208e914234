//! leetstats: solved-problem counts for a coding-judge user, fetched through
//! ordered endpoint and proxy fallbacks.
//!
//! ```no_run
//! # use leetstats::{StatsClient, StatsRetriever};
//! # #[tokio::main]
//! # async fn main() -> Result<(), leetstats::StatsError> {
//! let client = StatsClient::builder().build()?;
//! let stats = StatsRetriever::new(&client).retrieve("alice").await?;
//! println!("{stats:?}");
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod lookup;
pub mod stats;

pub use crate::core::{
    Endpoint, ProxyTransport, Stage, StatsClient, StatsClientBuilder, StatsError,
    default_endpoints, default_proxies, encode_component,
};
pub use lookup::{DisplaySink, Lookup, LookupOutcome, TerminalSink};
pub use stats::{Shape, Stats, StatsRetriever, detect_shape, normalize};
