//! Caching System - in-memory key/value caches
//!
//! One [`Cache`] contract with interchangeable eviction policies: an
//! unbounded basic cache plus FIFO, LIFO, LRU and MRU caches bounded by
//! [`MAX_ITEMS`] entries by default.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{
    AnyCache, BasicCache, Cache, CacheStats, EvictionPolicy, FifoCache, LifoCache, LruCache,
    MruCache, MAX_ITEMS,
};
pub use config::Config;
pub use error::{CacheError, Result};
