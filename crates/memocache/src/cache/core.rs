//! Core memoization cache with LRU eviction and lazy TTL expiry
//!
//! Entries live in an [`LruCache`] used in unbounded mode; this module owns
//! the capacity policy. After every insertion the least recently used
//! entries are popped one at a time until the cache is back at capacity.
//! Expired entries are only reclaimed when their key is looked up again,
//! when LRU eviction reaches them, or when the caller asks for
//! [`MemoCache::purge_expired`]. Until then they occupy a capacity slot.

use std::borrow::Borrow;
use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};

use lru::LruCache;
use tracing::{debug, trace};

use super::config::CacheConfig;
use super::entry::CacheEntry;
use super::stats::{CacheStats, MetricsCollector};
use crate::clock::{Clock, SystemClock};
use crate::error::MemoResult;

/// Bounded memoization cache
///
/// # Type Parameters
/// - `K`: Key type (must be `Hash + Eq`)
/// - `V`: Value type (`Clone` to hand out cached values)
/// - `C`: Clock type for expiry checks (defaults to `SystemClock`)
///
/// All operations that touch recency take `&mut self`. To share a cache
/// between threads, wrap it in a mutex.
///
/// # Example
/// ```
/// use memocache::{CacheConfig, MemoCache};
///
/// let mut cache: MemoCache<String, usize> = MemoCache::new(CacheConfig::lru(100))?;
///
/// let len = cache.get_or_compute("hello".to_string(), || "hello".len());
/// assert_eq!(len, 5);
/// # Ok::<(), memocache::MemoError>(())
/// ```
pub struct MemoCache<K, V, C = SystemClock>
where
    K: Hash + Eq,
    C: Clock,
{
    entries: LruCache<K, CacheEntry<V>>,
    config: CacheConfig,
    metrics: MetricsCollector,
    clock: C,
}

impl<K, V> MemoCache<K, V, SystemClock>
where
    K: Hash + Eq,
{
    /// Create a new cache with the given configuration using system clock
    ///
    /// # Errors
    /// Returns [`MemoError::InvalidConfiguration`] when the capacity is zero.
    ///
    /// [`MemoError::InvalidConfiguration`]: crate::MemoError::InvalidConfiguration
    pub fn new(config: CacheConfig) -> MemoResult<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<K, V, C> MemoCache<K, V, C>
where
    K: Hash + Eq,
    C: Clock,
{
    /// Create a new cache with a custom clock (useful for testing)
    ///
    /// # Errors
    /// Returns [`MemoError::InvalidConfiguration`] when the capacity is zero.
    ///
    /// [`MemoError::InvalidConfiguration`]: crate::MemoError::InvalidConfiguration
    pub fn with_clock(config: CacheConfig, clock: C) -> MemoResult<Self> {
        config.validate()?;

        debug!(capacity = config.capacity, ttl = ?config.ttl, "Memo cache created");

        Ok(Self {
            entries: LruCache::unbounded(),
            config,
            metrics: MetricsCollector::default(),
            clock,
        })
    }

    /// Return the cached value for `key`, computing it with `factory` on a miss
    ///
    /// A live entry is marked most recently used and returned without
    /// calling `factory`. An expired entry is dropped and treated as a miss.
    /// On a miss `factory` runs exactly once, its result is stored as the
    /// most recently used entry, and least recently used entries are evicted
    /// until the cache is back at capacity.
    pub fn get_or_compute<F>(&mut self, key: K, factory: F) -> V
    where
        V: Clone,
        F: FnOnce() -> V,
    {
        self.get_or_compute_with(key, |_| factory())
    }

    /// Like [`get_or_compute`](Self::get_or_compute), but the factory
    /// borrows the key
    pub fn get_or_compute_with<F>(&mut self, key: K, factory: F) -> V
    where
        V: Clone,
        F: FnOnce(&K) -> V,
    {
        match self.lookup_or_insert(key, |key| Ok::<V, Infallible>(factory(key))) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Fallible form of [`get_or_compute`](Self::get_or_compute)
    ///
    /// # Errors
    /// Returns the factory's error unchanged. Nothing is stored for `key`
    /// and no entry is evicted.
    pub fn try_get_or_compute<E, F>(&mut self, key: K, factory: F) -> Result<V, E>
    where
        V: Clone,
        F: FnOnce() -> Result<V, E>,
    {
        self.lookup_or_insert(key, |_| factory())
    }

    /// Fallible form of [`get_or_compute_with`](Self::get_or_compute_with)
    ///
    /// # Errors
    /// Returns the factory's error unchanged.
    pub fn try_get_or_compute_with<E, F>(&mut self, key: K, factory: F) -> Result<V, E>
    where
        V: Clone,
        F: FnOnce(&K) -> Result<V, E>,
    {
        self.lookup_or_insert(key, factory)
    }

    fn lookup_or_insert<E, F>(&mut self, key: K, factory: F) -> Result<V, E>
    where
        V: Clone,
        F: FnOnce(&K) -> Result<V, E>,
    {
        let now = self.clock.now();

        let expired = match self.entries.get(&key) {
            Some(entry) if entry.is_live(now) => {
                if self.config.track_metrics {
                    self.metrics.record_hit();
                }
                trace!("Memo cache hit");
                return Ok(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.pop(&key);
            if self.config.track_metrics {
                self.metrics.record_expiration();
            }
            debug!("Dropped expired entry on access");
        }

        if self.config.track_metrics {
            self.metrics.record_miss();
        }
        trace!(expired, "Memo cache miss");

        let value = factory(&key)?;

        self.entries.put(key, CacheEntry::new(value.clone(), now, self.config.ttl));
        if self.config.track_metrics {
            self.metrics.record_insert();
        }

        self.evict_overflow(now);

        Ok(value)
    }

    /// Pop least recently used entries until the cache is within capacity
    fn evict_overflow(&mut self, now: Instant) {
        while self.entries.len() > self.config.capacity {
            let Some((_, entry)) = self.entries.pop_lru() else {
                break;
            };

            if self.config.track_metrics {
                self.metrics.record_eviction();
            }
            debug!(
                expired = entry.is_expired(now),
                capacity = self.config.capacity,
                "Evicted least recently used entry"
            );
        }
    }

    /// Look up a live value without touching recency or counters
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        self.entries.peek(key).filter(|entry| entry.is_live(now)).map(|entry| &entry.value)
    }

    /// Check whether `key` holds a live value
    ///
    /// Expired entries report `false` even while they still occupy a slot.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.peek(key).is_some()
    }

    /// Remove `key`, returning its value if it was still live
    pub fn invalidate<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        self.entries.pop(key).filter(|entry| entry.is_live(now)).map(|entry| entry.value)
    }

    /// Remove every expired entry
    ///
    /// The cache never sweeps on its own; this is the only way to reclaim
    /// expired slots without touching their keys.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize
    where
        K: Clone,
    {
        if self.config.ttl.is_none() {
            return 0;
        }

        let now = self.clock.now();

        // Collect keys to remove (avoid borrow conflict)
        let expired: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.entries.pop(key);

            if self.config.track_metrics {
                self.metrics.record_expiration();
            }
        }

        if !expired.is_empty() {
            debug!(
                removed = expired.len(),
                remaining = self.entries.len(),
                "Purged expired entries"
            );
        }

        expired.len()
    }

    /// Clear all entries from the cache
    ///
    /// Counters are reset as well.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.metrics.reset();
    }

    /// Number of entries held, expired ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Time-to-live applied to new entries
    pub fn ttl(&self) -> Option<Duration> {
        self.config.ttl
    }

    /// Configuration the cache was built with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Clock used for expiry checks
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.metrics.snapshot(self.len(), self.config.capacity)
    }
}

impl<K, V, C> fmt::Debug for MemoCache<K, V, C>
where
    K: Hash + Eq,
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.config.capacity)
            .field("ttl", &self.config.ttl)
            .field("track_metrics", &self.config.track_metrics)
            .finish_non_exhaustive()
    }
}
