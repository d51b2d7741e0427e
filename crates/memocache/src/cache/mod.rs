//! Bounded LRU cache with optional TTL expiry
//!
//! # Features
//!
//! - **Bounded**: never holds more than `capacity` entries once a call returns
//! - **Strict LRU**: every hit or insert makes an entry the most recently used
//! - **Lazy TTL**: expired entries are dropped when next looked up; there is
//!   no background sweep
//! - **Fallible factories**: `try_*` operations propagate the factory's error
//!   and store nothing
//! - **Testable**: clock abstraction for deterministic time-based testing
//!
//! # Examples
//!
//! ## Simple LRU Cache
//! ```
//! use memocache::{CacheConfig, MemoCache};
//!
//! let mut cache: MemoCache<u64, u64> = MemoCache::new(CacheConfig::lru(100))?;
//! assert_eq!(cache.get_or_compute(7, || 7 * 7), 49);
//! assert_eq!(cache.peek(&7), Some(&49));
//! # Ok::<(), memocache::MemoError>(())
//! ```
//!
//! ## TTL + LRU with a controllable clock
//! ```
//! use std::time::Duration;
//!
//! use memocache::{CacheConfig, MemoCache, MockClock};
//!
//! let clock = MockClock::new();
//! let config = CacheConfig::ttl_lru(Duration::from_secs(30), 1000);
//! let mut cache: MemoCache<&str, u32, MockClock> = MemoCache::with_clock(config, clock.clone())?;
//!
//! cache.get_or_compute("session", || 1);
//! clock.advance(Duration::from_secs(31));
//! assert_eq!(cache.get_or_compute("session", || 2), 2);
//! # Ok::<(), memocache::MemoError>(())
//! ```
//!
//! ## Fallible factory
//! ```
//! use memocache::{CacheConfig, MemoCache};
//!
//! let mut cache: MemoCache<&str, i64> = MemoCache::new(CacheConfig::default())?;
//!
//! let parsed = cache.try_get_or_compute("42", || "42".parse::<i64>());
//! assert_eq!(parsed, Ok(42));
//!
//! let failed = cache.try_get_or_compute("nope", || "nope".parse::<i64>());
//! assert!(failed.is_err());
//! assert!(!cache.contains_key("nope"));
//! # Ok::<(), memocache::MemoError>(())
//! ```
//!
//! ## Cache Statistics
//! ```
//! use memocache::{CacheConfig, MemoCache};
//!
//! let config = CacheConfig::builder().capacity(100).track_metrics(true).build();
//! let mut cache: MemoCache<String, i32> = MemoCache::new(config)?;
//!
//! cache.get_or_compute("key1".to_string(), || 1);
//! cache.get_or_compute("key1".to_string(), || 1);
//!
//! let stats = cache.stats();
//! assert_eq!(stats.hits, 1);
//! assert_eq!(stats.misses, 1);
//! # Ok::<(), memocache::MemoError>(())
//! ```
//!
//! # Thread Safety
//!
//! The cache is single-threaded by design: the check, insert and evict steps
//! of a lookup are not atomic, and every recency-changing operation needs
//! `&mut self`. Share it behind a mutex when several threads memoize through
//! the same instance.

mod config;
mod core;
mod entry;
mod stats;

// Re-export public API
pub use self::core::MemoCache;

pub use config::{CacheConfig, CacheConfigBuilder, DEFAULT_CAPACITY};
pub use stats::CacheStats;
