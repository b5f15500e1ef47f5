//! Error types for the caching system
//!
//! Cache operations never fail; errors only arise while building a cache or
//! loading configuration.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the caching system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Policy name not recognised
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),

    /// Bounded cache requested with an unusable capacity
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),

    /// Configuration value could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the caching system.
pub type Result<T> = std::result::Result<T, CacheError>;
