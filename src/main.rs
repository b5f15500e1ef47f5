//! Caching System demo
//!
//! Drives a cache of the configured policy through a fixed sequence of
//! operations. Cache output goes to stdout, logs go to stderr.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use caching_system::{AnyCache, Cache, Config};

/// Entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the cache for the configured policy
/// 4. Run the demo scenario and log the final statistics
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "caching_system=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Configuration loaded: policy={}, max_items={}",
        config.policy, config.max_items
    );

    let mut cache: AnyCache<String, String> =
        AnyCache::with_capacity(config.policy, config.max_items)
            .context("Failed to build cache")?;

    run_scenario(&mut cache);

    let stats = serde_json::to_string(&cache.stats()).context("Failed to serialize stats")?;
    info!("Final stats: {}", stats);

    Ok(())
}

/// Fills the cache past the default bound, overwrites one key, adds one
/// more, and reads a few keys back.
fn run_scenario(cache: &mut AnyCache<String, String>) {
    for (key, value) in [("A", "1"), ("B", "2"), ("C", "3"), ("D", "4")] {
        put(cache, key, value);
    }
    cache.print_cache();

    put(cache, "E", "5");
    cache.print_cache();

    put(cache, "C", "30");
    put(cache, "F", "6");
    cache.print_cache();

    for key in [Some("A"), Some("C"), None] {
        let key = key.map(str::to_string);
        let value = cache.get(key.as_ref());
        println!(
            "get({}) -> {}",
            key.as_deref().unwrap_or("None"),
            value.map(String::as_str).unwrap_or("None")
        );
    }
}

fn put(cache: &mut AnyCache<String, String>, key: &str, value: &str) {
    cache.put(Some(key.to_string()), Some(value.to_string()));
}
