//! Cache configuration types and builder patterns
//!
//! This module provides the configuration for a [`MemoCache`]: the entry
//! capacity, the optional time-to-live applied to new entries, and whether
//! hit/miss counters are collected.
//!
//! [`MemoCache`]: super::MemoCache

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MemoError, MemoResult};

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 128;

/// Configuration for cache behavior
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CacheConfig {
    /// Maximum number of entries, expired ones included (must be > 0)
    pub capacity: usize,

    /// Time-to-live for new entries (None = no expiration)
    ///
    /// Serialized as whole milliseconds under `ttl_ms`; any sub-millisecond
    /// remainder is dropped when the config is written out.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "ttl_ms",
            with = "crate::utils::serde::option_duration_millis",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub ttl: Option<Duration>,

    /// Whether to collect hit/miss/eviction counters
    pub track_metrics: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY, ttl: None, track_metrics: false }
    }
}

impl CacheConfig {
    /// Create a new configuration builder
    pub fn builder() -> CacheConfigBuilder {
        CacheConfigBuilder::default()
    }

    /// Quick preset for a plain LRU cache
    ///
    /// # Example
    /// ```
    /// use memocache::CacheConfig;
    ///
    /// let config = CacheConfig::lru(1000);
    /// assert!(config.ttl.is_none());
    /// ```
    pub fn lru(capacity: usize) -> Self {
        Self { capacity, ..Self::default() }
    }

    /// Combined TTL + LRU cache
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    ///
    /// use memocache::CacheConfig;
    ///
    /// let config = CacheConfig::ttl_lru(Duration::from_secs(3600), 1000);
    /// assert_eq!(config.capacity, 1000);
    /// ```
    pub fn ttl_lru(ttl: Duration, capacity: usize) -> Self {
        Self { capacity, ttl: Some(ttl), ..Self::default() }
    }

    /// Check that the configuration can back a cache
    ///
    /// # Errors
    /// Returns [`MemoError::InvalidConfiguration`] when `capacity` is zero.
    pub fn validate(&self) -> MemoResult<()> {
        if self.capacity == 0 {
            return Err(MemoError::invalid("capacity", "must be greater than zero"));
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration document
    ///
    /// Missing keys fall back to their defaults. The TTL is given in whole
    /// milliseconds under `ttl_ms`.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    ///
    /// use memocache::CacheConfig;
    ///
    /// let config = CacheConfig::from_toml_str("capacity = 64\nttl_ms = 250")?;
    /// assert_eq!(config.capacity, 64);
    /// assert_eq!(config.ttl, Some(Duration::from_millis(250)));
    /// # Ok::<(), memocache::MemoError>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`MemoError::ConfigParse`] for malformed documents and
    /// [`MemoError::InvalidConfiguration`] for out-of-range values.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(contents: &str) -> MemoResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for CacheConfig with fluent API
#[derive(Debug, Default)]
pub struct CacheConfigBuilder {
    config: CacheConfig,
}

impl CacheConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum number of entries
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set time-to-live for entries
    pub fn ttl(mut self, duration: Duration) -> Self {
        self.config.ttl = Some(duration);
        self
    }

    /// Enable or disable metrics tracking
    pub fn track_metrics(mut self, enabled: bool) -> Self {
        self.config.track_metrics = enabled;
        self
    }

    /// Build the configuration
    ///
    /// Validation happens when the cache is constructed.
    pub fn build(self) -> CacheConfig {
        self.config
    }
}
