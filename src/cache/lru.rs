//! LRU Cache Module
//!
//! Bounded cache that evicts the least recently used entry.

use std::fmt::Display;
use std::hash::Hash;

use tracing::trace;

use crate::cache::bounded::{validate_capacity, BoundedStore, Victim};
use crate::cache::{announce_discard, Cache, CacheStats, MAX_ITEMS};
use crate::error::Result;

// == LRU Cache ==
/// Least-recently-used cache.
///
/// Both `put` and a successful `get` mark the key as most recently used.
#[derive(Debug)]
pub struct LruCache<K, V> {
    store: BoundedStore<K, V>,
}

impl<K: Eq + Hash + Clone, V> Default for LruCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> LruCache<K, V> {
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
        let evicted = self.store.make_room(&key, Victim::Oldest);
        self.store.store(key, value, true);
        evicted
    }
}

impl<K: Eq + Hash + Clone + Display, V> Cache<K, V> for LruCache<K, V> {
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

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LruCache<&'static str, i32> {
        let mut cache = LruCache::with_capacity(3).unwrap();
        cache.insert("key1", 1);
        cache.insert("key2", 2);
        cache.insert("key3", 3);
        cache
    }

    #[test]
    fn test_lru_eviction() {
        let mut cache = filled();

        // Cache is full, adding key4 should evict key1 (oldest)
        assert_eq!(cache.insert("key4", 4), Some(("key1", 1)));

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(Some(&"key1")), None);
        assert!(cache.get(Some(&"key2")).is_some());
        assert!(cache.get(Some(&"key3")).is_some());
        assert!(cache.get(Some(&"key4")).is_some());
    }

    #[test]
    fn test_lru_touch_on_get() {
        let mut cache = filled();

        // Access key1 to make it most recently used
        cache.get(Some(&"key1"));

        // Adding key4 should evict key2 (now oldest)
        assert_eq!(cache.insert("key4", 4), Some(("key2", 2)));
        assert!(cache.get(Some(&"key1")).is_some());
    }

    #[test]
    fn test_lru_touch_on_overwrite() {
        let mut cache = filled();

        assert_eq!(cache.insert("key1", 10), None);
        assert_eq!(cache.insert("key4", 4), Some(("key2", 2)));
        assert_eq!(cache.get(Some(&"key1")), Some(&10));
    }

    #[test]
    fn test_lru_miss_does_not_reorder() {
        let mut cache = filled();

        cache.get(Some(&"missing"));
        cache.get(None);

        assert_eq!(cache.insert("key4", 4), Some(("key1", 1)));
    }
}
