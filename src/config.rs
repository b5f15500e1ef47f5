//! Configuration Module
//!
//! Loads the demo configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::{EvictionPolicy, MAX_ITEMS};
use crate::error::{CacheError, Result};

/// Environment variable selecting the eviction policy.
pub const POLICY_VAR: &str = "CACHE_POLICY";
/// Environment variable setting the bound of bounded policies.
pub const MAX_ITEMS_VAR: &str = "CACHE_MAX_ITEMS";

/// Demo configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Caching policy to build
    pub policy: EvictionPolicy,
    /// Maximum number of entries for bounded policies
    pub max_items: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_POLICY` - basic, fifo, lifo, lru or mru (default: fifo)
    /// - `CACHE_MAX_ITEMS` - bound for bounded policies (default: 4)
    ///
    /// Unset variables take their default; set but unparsable ones are errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`] with an explicit variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let policy = match lookup(POLICY_VAR) {
            Some(raw) => EvictionPolicy::from_str(&raw)?,
            None => defaults.policy,
        };

        let max_items = match lookup(MAX_ITEMS_VAR) {
            Some(raw) => raw.trim().parse().map_err(|_| {
                CacheError::InvalidConfig(format!(
                    "{} must be a positive integer, got {:?}",
                    MAX_ITEMS_VAR, raw
                ))
            })?,
            None => defaults.max_items,
        };

        Ok(Self { policy, max_items })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: EvictionPolicy::Fifo,
            max_items: MAX_ITEMS,
        }
    }
}
