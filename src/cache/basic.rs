//! Basic Cache Module
//!
//! Unbounded cache: `put` and `get` pass straight through to a HashMap.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use crate::cache::{Cache, CacheStats};

// == Basic Cache ==
/// Cache without a size limit. Nothing is ever evicted.
#[derive(Debug)]
pub struct BasicCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Activity counters
    stats: CacheStats,
}

impl<K, V> Default for BasicCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> BasicCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }
}

impl<K: Eq + Hash, V> Cache<K, V> for BasicCache<K, V> {
    fn put(&mut self, key: Option<K>, value: Option<V>) {
        let (Some(key), Some(value)) = (key, value) else {
            trace!("ignoring put with missing key or value");
            return;
        };
        self.entries.insert(key, value);
    }

    fn get(&mut self, key: Option<&K>) -> Option<&V> {
        let value = key.and_then(|k| self.entries.get(k));
        self.stats.record_lookup(value.is_some());
        value
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        self.entries.iter().collect()
    }

    fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}
