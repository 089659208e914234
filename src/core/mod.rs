//! Core components of the `leetstats` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`StatsClient`] and its builder.
//! - The primary [`StatsError`] type.
//! - [`Endpoint`] and [`ProxyTransport`] URL templates.
//! - Internal networking and the shared fallback combinator.

/// The main client (`StatsClient`), builder, and default sources.
pub mod client;
/// The primary error type (`StatsError`) for the crate.
pub mod error;
pub(crate) mod fallback;
pub(crate) mod net;
/// Endpoint and proxy URL templates.
pub mod source;

// convenient re-exports so most code can just `use crate::core::StatsClient`
pub use client::{StatsClient, StatsClientBuilder, default_endpoints, default_proxies};
pub use error::{Stage, StatsError};
pub use source::{Endpoint, ProxyTransport, encode_component};
