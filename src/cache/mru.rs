//! MRU Cache Module
//!
//! Bounded cache that evicts the most recently used entry.

use std::fmt::Display;
use std::hash::Hash;

use tracing::trace;

use crate::cache::bounded::{validate_capacity, BoundedStore, Victim};
use crate::cache::{announce_discard, Cache, CacheStats, MAX_ITEMS};
use crate::error::Result;

// == MRU Cache ==
/// Most-recently-used cache.
///
/// Usage tracking matches [`LruCache`](crate::cache::LruCache); eviction takes
/// the opposite end, before the new entry is stored.
#[derive(Debug)]
pub struct MruCache<K, V> {
    store: BoundedStore<K, V>,
}

impl<K: Eq + Hash + Clone, V> Default for MruCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> MruCache<K, V> {
    // == Constructors ==
    pub fn new() -> Self {
        Self {
            store: BoundedStore::new(MAX_ITEMS),
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            store: BoundedStore::new(validate_capacity(capacity)?),
        })
    }

    // == Insert ==
    /// Inserts or overwrites an entry, returning the evicted pair.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        let evicted = self.store.make_room(&key, Victim::Newest);
        self.store.store(key, value, true);
        evicted
    }
}

impl<K: Eq + Hash + Clone + Display, V> Cache<K, V> for MruCache<K, V> {
    fn put(&mut self, key: Option<K>, value: Option<V>) {
        let (Some(key), Some(value)) = (key, value) else {
            trace!("ignoring put with missing key or value");
            return;
        };
        if let Some((evicted, _)) = self.insert(key, value) {
            announce_discard(&evicted);
        }
    }

    fn get(&mut self, key: Option<&K>) -> Option<&V> {
        self.store.lookup(key, true)
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.store.capacity())
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        self.store.entries()
    }

    fn stats(&self) -> CacheStats {
        self.store.stats()
    }
}
