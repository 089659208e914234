// src/bin/leetstats.rs
use std::time::Duration;

use clap::Parser;
use leetstats::{
    Endpoint, Lookup, LookupOutcome, ProxyTransport, StatsClient, StatsRetriever, TerminalSink,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Looks up solved-problem counts for each USERNAME. With no usernames, reads
/// one username per line from stdin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = "Set RUST_LOG=leetstats=debug to see every failed attempt.")]
struct Args {
    /// Usernames to look up
    #[arg(value_name = "USERNAME")]
    usernames: Vec<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10.0, value_parser = parse_timeout)]
    timeout: f64,

    /// Data source template, e.g. https://host/{username}/solved (repeatable)
    #[arg(long = "endpoint", value_name = "TEMPLATE")]
    endpoints: Vec<String>,

    /// Pass-through proxy template, e.g. https://proxy/raw?url={url} (repeatable)
    #[arg(long = "proxy", value_name = "TEMPLATE", conflicts_with = "direct")]
    proxies: Vec<String>,

    /// Skip proxies and call endpoints directly
    #[arg(long)]
    direct: bool,

    /// Print one JSON object per lookup
    #[arg(long)]
    json: bool,
}

fn parse_timeout(s: &str) -> Result<f64, String> {
    let secs: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("invalid timeout: {secs}"));
    }
    Ok(secs)
}

fn build_client(args: &Args) -> Result<StatsClient, leetstats::StatsError> {
    let mut builder = StatsClient::builder().timeout(Duration::from_secs_f64(args.timeout));
    if !args.endpoints.is_empty() {
        builder = builder.endpoints(args.endpoints.iter().map(|t| Endpoint::template(t.as_str())));
    }
    if args.direct {
        builder = builder.no_proxy();
    } else if !args.proxies.is_empty() {
        builder = builder.proxies(args.proxies.iter().map(|t| ProxyTransport::template(t.as_str())));
    }
    builder.build()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = build_client(&args)?;
    let lookup = Lookup::new(
        StatsRetriever::new(&client),
        TerminalSink::new().json(args.json),
    );

    let mut failures = 0usize;
    if args.usernames.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if !matches!(lookup.trigger(&line).await, LookupOutcome::Found(_)) {
                failures += 1;
            }
        }
    } else {
        for name in &args.usernames {
            if !matches!(lookup.trigger(name).await, LookupOutcome::Found(_)) {
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}
