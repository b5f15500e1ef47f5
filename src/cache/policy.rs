//! Policy Selection Module
//!
//! Picks a cache implementation by name at construction time.

use std::fmt::{self, Display};
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cache::{BasicCache, Cache, CacheStats, FifoCache, LifoCache, LruCache, MruCache};
use crate::error::{CacheError, Result};

// == Eviction Policy ==
/// Available caching policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// Unbounded, never evicts
    Basic,
    /// Evicts the first inserted key
    Fifo,
    /// Evicts the last put key
    Lifo,
    /// Evicts the least recently used key
    Lru,
    /// Evicts the most recently used key
    Mru,
}

impl EvictionPolicy {
    /// Every policy, in declaration order.
    pub const ALL: [EvictionPolicy; 5] = [
        EvictionPolicy::Basic,
        EvictionPolicy::Fifo,
        EvictionPolicy::Lifo,
        EvictionPolicy::Lru,
        EvictionPolicy::Mru,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionPolicy::Basic => "basic",
            EvictionPolicy::Fifo => "fifo",
            EvictionPolicy::Lifo => "lifo",
            EvictionPolicy::Lru => "lru",
            EvictionPolicy::Mru => "mru",
        }
    }
}

impl Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        EvictionPolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str() == name)
            .ok_or_else(|| CacheError::UnknownPolicy(s.to_string()))
    }
}

// == Any Cache ==
/// A cache of any policy behind one type.
#[derive(Debug)]
pub enum AnyCache<K, V> {
    Basic(BasicCache<K, V>),
    Fifo(FifoCache<K, V>),
    Lifo(LifoCache<K, V>),
    Lru(LruCache<K, V>),
    Mru(MruCache<K, V>),
}

impl<K: Eq + Hash + Clone, V> AnyCache<K, V> {
    // == Constructors ==
    /// Creates a cache for `policy`; bounded policies hold
    /// [`MAX_ITEMS`](crate::cache::MAX_ITEMS) entries.
    pub fn new(policy: EvictionPolicy) -> Self {
        match policy {
            EvictionPolicy::Basic => AnyCache::Basic(BasicCache::new()),
            EvictionPolicy::Fifo => AnyCache::Fifo(FifoCache::new()),
            EvictionPolicy::Lifo => AnyCache::Lifo(LifoCache::new()),
            EvictionPolicy::Lru => AnyCache::Lru(LruCache::new()),
            EvictionPolicy::Mru => AnyCache::Mru(MruCache::new()),
        }
    }

    /// Creates a cache for `policy` with the given bound.
    ///
    /// `capacity` is ignored for [`EvictionPolicy::Basic`].
    pub fn with_capacity(policy: EvictionPolicy, capacity: usize) -> Result<Self> {
        Ok(match policy {
            EvictionPolicy::Basic => AnyCache::Basic(BasicCache::new()),
            EvictionPolicy::Fifo => AnyCache::Fifo(FifoCache::with_capacity(capacity)?),
            EvictionPolicy::Lifo => AnyCache::Lifo(LifoCache::with_capacity(capacity)?),
            EvictionPolicy::Lru => AnyCache::Lru(LruCache::with_capacity(capacity)?),
            EvictionPolicy::Mru => AnyCache::Mru(MruCache::with_capacity(capacity)?),
        })
    }

    pub fn policy(&self) -> EvictionPolicy {
        match self {
            AnyCache::Basic(_) => EvictionPolicy::Basic,
            AnyCache::Fifo(_) => EvictionPolicy::Fifo,
            AnyCache::Lifo(_) => EvictionPolicy::Lifo,
            AnyCache::Lru(_) => EvictionPolicy::Lru,
            AnyCache::Mru(_) => EvictionPolicy::Mru,
        }
    }
}

impl<K: Eq + Hash + Clone + Display, V> Cache<K, V> for AnyCache<K, V> {
    fn put(&mut self, key: Option<K>, value: Option<V>) {
        match self {
            AnyCache::Basic(cache) => cache.put(key, value),
            AnyCache::Fifo(cache) => cache.put(key, value),
            AnyCache::Lifo(cache) => cache.put(key, value),
            AnyCache::Lru(cache) => cache.put(key, value),
            AnyCache::Mru(cache) => cache.put(key, value),
        }
    }

    fn get(&mut self, key: Option<&K>) -> Option<&V> {
        match self {
            AnyCache::Basic(cache) => cache.get(key),
            AnyCache::Fifo(cache) => cache.get(key),
            AnyCache::Lifo(cache) => cache.get(key),
            AnyCache::Lru(cache) => cache.get(key),
            AnyCache::Mru(cache) => cache.get(key),
        }
    }

    fn len(&self) -> usize {
        match self {
            AnyCache::Basic(cache) => cache.len(),
            AnyCache::Fifo(cache) => cache.len(),
            AnyCache::Lifo(cache) => cache.len(),
            AnyCache::Lru(cache) => cache.len(),
            AnyCache::Mru(cache) => cache.len(),
        }
    }

    fn capacity(&self) -> Option<usize> {
        match self {
            AnyCache::Basic(cache) => cache.capacity(),
            AnyCache::Fifo(cache) => cache.capacity(),
            AnyCache::Lifo(cache) => cache.capacity(),
            AnyCache::Lru(cache) => cache.capacity(),
            AnyCache::Mru(cache) => cache.capacity(),
        }
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        match self {
            AnyCache::Basic(cache) => cache.entries(),
            AnyCache::Fifo(cache) => cache.entries(),
            AnyCache::Lifo(cache) => cache.entries(),
            AnyCache::Lru(cache) => cache.entries(),
            AnyCache::Mru(cache) => cache.entries(),
        }
    }

    fn stats(&self) -> CacheStats {
        match self {
            AnyCache::Basic(cache) => cache.stats(),
            AnyCache::Fifo(cache) => cache.stats(),
            AnyCache::Lifo(cache) => cache.stats(),
            AnyCache::Lru(cache) => cache.stats(),
            AnyCache::Mru(cache) => cache.stats(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MAX_ITEMS;

    #[test]
    fn test_policy_from_str() {
        assert_eq!("fifo".parse::<EvictionPolicy>(), Ok(EvictionPolicy::Fifo));
        assert_eq!(" LRU ".parse::<EvictionPolicy>(), Ok(EvictionPolicy::Lru));
        assert_eq!(
            "lfu".parse::<EvictionPolicy>(),
            Err(CacheError::UnknownPolicy("lfu".to_string()))
        );
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in EvictionPolicy::ALL {
            assert_eq!(policy.to_string().parse::<EvictionPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_policy_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&EvictionPolicy::Mru).unwrap(),
            "\"mru\""
        );
        let policy: EvictionPolicy = serde_json::from_str("\"lifo\"").unwrap();
        assert_eq!(policy, EvictionPolicy::Lifo);
    }

    #[test]
    fn test_any_cache_new_matches_policy() {
        for policy in EvictionPolicy::ALL {
            let cache: AnyCache<String, String> = AnyCache::new(policy);
            assert_eq!(cache.policy(), policy);
            assert!(cache.is_empty());

            let expected = match policy {
                EvictionPolicy::Basic => None,
                _ => Some(MAX_ITEMS),
            };
            assert_eq!(cache.capacity(), expected);
        }
    }

    #[test]
    fn test_any_cache_with_capacity() {
        let cache: AnyCache<String, String> =
            AnyCache::with_capacity(EvictionPolicy::Lru, 10).unwrap();
        assert_eq!(cache.capacity(), Some(10));

        let result: Result<AnyCache<String, String>> =
            AnyCache::with_capacity(EvictionPolicy::Fifo, 0);
        assert!(matches!(result, Err(CacheError::InvalidCapacity(_))));

        // Capacity does not apply to the unbounded cache
        let basic: AnyCache<String, String> =
            AnyCache::with_capacity(EvictionPolicy::Basic, 0).unwrap();
        assert_eq!(basic.capacity(), None);
    }

    #[test]
    fn test_any_cache_delegates() {
        let mut cache = AnyCache::new(EvictionPolicy::Fifo);
        for (key, value) in [("A", 1), ("B", 2), ("C", 3), ("D", 4), ("E", 5)] {
            cache.put(Some(key), Some(value));
        }

        assert_eq!(cache.len(), MAX_ITEMS);
        assert_eq!(cache.get(Some(&"A")), None);
        assert_eq!(cache.get(Some(&"E")), Some(&5));
        assert_eq!(cache.stats().evictions, 1);
    }
}
