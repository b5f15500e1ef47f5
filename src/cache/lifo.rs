//! LIFO Cache Module
//!
//! Bounded cache that evicts the entry put last.

use std::fmt::Display;
use std::hash::Hash;

use tracing::trace;

use crate::cache::bounded::{validate_capacity, BoundedStore, Victim};
use crate::cache::{announce_discard, Cache, CacheStats, MAX_ITEMS};
use crate::error::Result;

// == LIFO Cache ==
/// Last-in-first-out cache.
///
/// An overwrite counts as a put, so the overwritten key becomes the next
/// eviction candidate. Reads never reorder.
#[derive(Debug)]
pub struct LifoCache<K, V> {
    store: BoundedStore<K, V>,
}

impl<K: Eq + Hash + Clone, V> Default for LifoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> LifoCache<K, V> {
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

impl<K: Eq + Hash + Clone + Display, V> Cache<K, V> for LifoCache<K, V> {
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

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_evicts_last_put() {
        let mut cache = LifoCache::new();
        for (key, value) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
            assert_eq!(cache.insert(key, value), None);
        }

        assert_eq!(cache.insert("E", 5), Some(("D", 4)));
        assert_eq!(cache.insert("F", 6), Some(("E", 5)));

        assert_eq!(cache.len(), MAX_ITEMS);
        assert_eq!(cache.get(Some(&"A")), Some(&1));
        assert_eq!(cache.get(Some(&"F")), Some(&6));
    }

    #[test]
    fn test_lifo_overwrite_becomes_newest() {
        let mut cache = LifoCache::new();
        for (key, value) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
            cache.insert(key, value);
        }

        assert_eq!(cache.insert("B", 20), None);
        assert_eq!(cache.insert("E", 5), Some(("B", 20)));
    }

    #[test]
    fn test_lifo_get_does_not_reorder() {
        let mut cache = LifoCache::with_capacity(2).unwrap();
        cache.insert("A", 1);
        cache.insert("B", 2);

        cache.get(Some(&"A"));

        assert_eq!(cache.insert("C", 3), Some(("B", 2)));
    }

    #[test]
    fn test_lifo_put_ignores_missing_key_or_value() {
        let mut cache: LifoCache<&str, i32> = LifoCache::new();

        cache.put(None, Some(1));
        cache.put(Some("A"), None);

        assert!(cache.is_empty());
        assert_eq!(cache.stats().evictions, 0);
    }
}
