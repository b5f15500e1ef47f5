//! FIFO Cache Module
//!
//! Bounded cache that evicts the entry inserted first.

use std::fmt::Display;
use std::hash::Hash;

use tracing::trace;

use crate::cache::bounded::{validate_capacity, BoundedStore, Victim};
use crate::cache::{announce_discard, Cache, CacheStats, MAX_ITEMS};
use crate::error::Result;

// == FIFO Cache ==
/// First-in-first-out cache.
///
/// Eviction order follows first insertion only: overwriting a key updates its
/// value but leaves its place in the queue unchanged, and reads never reorder.
#[derive(Debug)]
pub struct FifoCache<K, V> {
    store: BoundedStore<K, V>,
}

impl<K: Eq + Hash + Clone, V> Default for FifoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> FifoCache<K, V> {
    // == Constructors ==
    /// Creates an empty cache holding at most [`MAX_ITEMS`] entries.
    pub fn new() -> Self {
        Self {
            store: BoundedStore::new(MAX_ITEMS),
        }
    }

    /// Creates an empty cache holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            store: BoundedStore::new(validate_capacity(capacity)?),
        })
    }

    // == Insert ==
    /// Inserts or overwrites an entry, returning the pair evicted to make
    /// room for it. Nothing is written to stdout.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        let evicted = self.store.make_room(&key, Victim::Oldest);
        self.store.store(key, value, false);
        evicted
    }
}

impl<K: Eq + Hash + Clone + Display, V> Cache<K, V> for FifoCache<K, V> {
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
        self.store.lookup(key, false)
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
