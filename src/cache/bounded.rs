//! Bounded Store Module
//!
//! HashMap storage plus an order tracker, shared by every capacity-limited
//! policy. The policies decide which end of the order is evicted and whether
//! reads or overwrites move a key.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::{CacheStats, OrderTracker};
use crate::error::{CacheError, Result};

// == Victim ==
/// End of the order tracker an eviction takes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Victim {
    Oldest,
    Newest,
}

/// Rejects capacities a bounded cache cannot honour.
pub(crate) fn validate_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Err(CacheError::InvalidCapacity(
            "bounded cache capacity must be at least 1".to_string(),
        ));
    }
    Ok(capacity)
}

// == Bounded Store ==
/// Invariant: every key in `entries` appears exactly once in `order`, and
/// `order` holds no other keys.
#[derive(Debug)]
pub(crate) struct BoundedStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Eviction order
    order: OrderTracker<K>,
    /// Activity counters
    stats: CacheStats,
    /// Maximum number of entries
    capacity: usize,
}

impl<K: Eq + Hash + Clone, V> BoundedStore<K, V> {
    // == Constructor ==
    /// Callers validate `capacity` first.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: OrderTracker::new(),
            stats: CacheStats::new(),
            capacity,
        }
    }

    // == Make Room ==
    /// Evicts one entry if storing `key` would grow a full store.
    ///
    /// Overwrites of a present key never evict.
    pub(crate) fn make_room(&mut self, key: &K, victim: Victim) -> Option<(K, V)> {
        if self.entries.contains_key(key) || self.entries.len() < self.capacity {
            return None;
        }

        let evicted_key = match victim {
            Victim::Oldest => self.order.pop_oldest(),
            Victim::Newest => self.order.pop_newest(),
        }?;
        let evicted_value = self.entries.remove(&evicted_key)?;

        self.stats.record_eviction();
        self.stats.set_total_entries(self.entries.len());
        Some((evicted_key, evicted_value))
    }

    // == Store ==
    /// Inserts or overwrites an entry.
    ///
    /// New keys take the newest position. An overwritten key keeps its
    /// position unless `refresh` is set.
    pub(crate) fn store(&mut self, key: K, value: V, refresh: bool) {
        if self.entries.insert(key.clone(), value).is_none() {
            self.order.push(key);
        } else if refresh {
            self.order.touch(key);
        }
        self.stats.set_total_entries(self.entries.len());
    }

    // == Lookup ==
    /// Returns the value for `key`, moving a hit to the newest position when
    /// `refresh` is set.
    pub(crate) fn lookup(&mut self, key: Option<&K>, refresh: bool) -> Option<&V> {
        let hit = key.is_some_and(|k| self.entries.contains_key(k));
        self.stats.record_lookup(hit);

        let key = key?;
        if hit && refresh {
            self.order.touch(key.clone());
        }
        self.entries.get(key)
    }

    // == Entries ==
    /// Entries from the oldest to the newest position.
    pub(crate) fn entries(&self) -> Vec<(&K, &V)> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get_key_value(key))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn filled(keys: &[&'static str]) -> BoundedStore<&'static str, usize> {
        let mut store = BoundedStore::new(keys.len());
        for (i, key) in keys.iter().enumerate() {
            store.store(*key, i, false);
        }
        store
    }

    #[test]
    fn test_validate_capacity() {
        assert_eq!(validate_capacity(1), Ok(1));
        assert!(matches!(
            validate_capacity(0),
            Err(CacheError::InvalidCapacity(_))
        ));
    }

    #[test]
    fn test_make_room_below_capacity() {
        let mut store: BoundedStore<&str, usize> = BoundedStore::new(2);
        store.store("a", 1, false);

        assert_eq!(store.make_room(&"b", Victim::Oldest), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_make_room_skips_overwrite() {
        let mut store = filled(&["a", "b"]);

        assert_eq!(store.make_room(&"a", Victim::Oldest), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_make_room_takes_requested_end() {
        let mut store = filled(&["a", "b", "c"]);
        assert_eq!(store.make_room(&"x", Victim::Oldest), Some(("a", 0)));

        let mut store = filled(&["a", "b", "c"]);
        assert_eq!(store.make_room(&"x", Victim::Newest), Some(("c", 2)));
        assert_eq!(store.stats().evictions, 1);
        assert_eq!(store.stats().total_entries, 2);
    }

    #[test]
    fn test_store_overwrite_keeps_position() {
        let mut store = filled(&["a", "b"]);
        store.store("a", 10, false);

        assert_eq!(store.entries(), vec![(&"a", &10), (&"b", &1)]);
    }

    #[test]
    fn test_store_overwrite_with_refresh() {
        let mut store = filled(&["a", "b"]);
        store.store("a", 10, true);

        assert_eq!(store.entries(), vec![(&"b", &1), (&"a", &10)]);
    }

    #[test]
    fn test_lookup_counts_and_refreshes() {
        let mut store = filled(&["a", "b"]);

        assert_eq!(store.lookup(Some(&"a"), true), Some(&0));
        assert_eq!(store.lookup(Some(&"z"), true), None);
        assert_eq!(store.lookup(None, true), None);

        assert_eq!(store.entries(), vec![(&"b", &1), (&"a", &0)]);
        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
    }
}
