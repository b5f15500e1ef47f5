//! Cache Module
//!
//! In-memory key/value caches sharing one contract and differing only in
//! their eviction policy.

mod basic;
mod bounded;
mod fifo;
mod lifo;
mod lru;
mod mru;
mod order;
mod policy;
mod stats;


use std::fmt::Display;
use std::io::{self, Write};

use tracing::{debug, warn};

// Re-export public types
pub use basic::BasicCache;
pub use fifo::FifoCache;
pub use lifo::LifoCache;
pub use lru::LruCache;
pub use mru::MruCache;
pub use order::OrderTracker;
pub use policy::{AnyCache, EvictionPolicy};
pub use stats::CacheStats;

// == Public Constants ==
/// Default capacity of every bounded cache.
pub const MAX_ITEMS: usize = 4;

/// Banner written before the entries by [`Cache::write_cache`].
pub const CACHE_BANNER: &str = "Current cache:";

// == Cache Contract ==
/// Operations every caching policy provides.
///
/// `None` stands for the absent key or value: `put` ignores it and `get`
/// answers it with `None`. Values that are present but "empty" (`0`, `""`)
/// are stored like any other.
pub trait Cache<K, V> {
    /// Stores `value` under `key`, evicting per policy when a bounded store
    /// would grow past its capacity.
    fn put(&mut self, key: Option<K>, value: Option<V>);

    /// Returns the value stored under `key`.
    ///
    /// Takes `&mut self` since recency policies reorder keys on reads.
    fn get(&mut self, key: Option<&K>) -> Option<&V>;

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries, `None` when unbounded.
    fn capacity(&self) -> Option<usize>;

    /// Current entries in the policy's natural order.
    fn entries(&self) -> Vec<(&K, &V)>;

    /// Snapshot of the activity counters.
    fn stats(&self) -> CacheStats;

    // == Write Cache ==
    /// Writes the banner then one `key: value` line per entry, sorted by the
    /// rendered key.
    fn write_cache(&self, out: &mut dyn Write) -> io::Result<()>
    where
        K: Display,
        V: Display,
    {
        let mut lines: Vec<(String, String)> = self
            .entries()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        lines.sort();

        writeln!(out, "{}", CACHE_BANNER)?;
        for (key, value) in lines {
            writeln!(out, "{}: {}", key, value)?;
        }
        Ok(())
    }

    // == Print Cache ==
    /// Writes the cache contents to stdout.
    fn print_cache(&self)
    where
        K: Display,
        V: Display,
    {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(err) = self.write_cache(&mut handle) {
            warn!(error = %err, "failed to print cache contents");
        }
    }
}

// == Discard Notice ==
/// Reports an evicted key on stdout as `DISCARD: <key>`.
pub(crate) fn announce_discard<K: Display>(key: &K) {
    debug!(key = %key, "evicted cache entry");
    println!("DISCARD: {}", key);
}
