//! Cache statistics and metrics tracking
//!
//! This module provides types for tracking cache performance metrics
//! including hit rates, eviction counts, and lazy expirations.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Statistics for cache performance monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CacheStats {
    /// Current number of entries, expired ones included
    pub size: usize,

    /// Maximum allowed entries
    pub capacity: usize,

    /// Lookups answered from the cache
    pub hits: u64,

    /// Lookups that had to run the factory (key absent or expired)
    pub misses: u64,

    /// Computed values stored in the cache
    pub inserts: u64,

    /// Entries displaced by the LRU policy
    pub evictions: u64,

    /// Expired entries removed on access or by a purge
    pub expirations: u64,
}

impl CacheStats {
    /// Calculate hit rate (hits / total accesses)
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Calculate miss rate (misses / total accesses)
    pub fn miss_rate(&self) -> f64 {
        1.0 - self.hit_rate()
    }

    /// Calculate fill ratio (size / capacity)
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.size as f64 / self.capacity as f64
        }
    }

    /// Total number of access operations (hits + misses)
    pub fn total_accesses(&self) -> u64 {
        self.hits + self.misses
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size={}/{} hits={} misses={} hit_rate={:.2}% evictions={} expirations={}",
            self.size,
            self.capacity,
            self.hits,
            self.misses,
            self.hit_rate() * 100.0,
            self.evictions,
            self.expirations
        )
    }
}

/// Counters owned by a single cache
///
/// The cache is mutated through `&mut self` only, so plain integers suffice.
#[derive(Debug, Clone, Default)]
pub(crate) struct MetricsCollector {
    hits: u64,
    misses: u64,
    inserts: u64,
    evictions: u64,
    expirations: u64,
}

impl MetricsCollector {
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_insert(&mut self) {
        self.inserts += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    /// Get current statistics snapshot
    pub(crate) fn snapshot(&self, size: usize, capacity: usize) -> CacheStats {
        CacheStats {
            size,
            capacity,
            hits: self.hits,
            misses: self.misses,
            inserts: self.inserts,
            evictions: self.evictions,
            expirations: self.expirations,
        }
    }

    /// Reset all metrics to zero
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for cache::stats.
    use super::*;

    /// Validates `CacheStats::default` behavior for the cache stats default
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms every counter starts at `0`.
    #[test]
    fn test_cache_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.size, 0);
        assert_eq!(stats.capacity, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.inserts, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.expirations, 0);
    }

    /// Validates `Default::default` behavior for the hit rate calculation
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures `(stats.hit_rate() - 0.8).abs() < 1e-10` evaluates to true.
    /// - Ensures `(stats.miss_rate() - 0.2).abs() < 1e-10` evaluates to true.
    /// - Confirms `stats.total_accesses()` equals `100`.
    #[test]
    fn test_hit_rate_calculation() {
        let stats = CacheStats { hits: 80, misses: 20, ..Default::default() };

        assert!((stats.hit_rate() - 0.8).abs() < 1e-10);
        assert!((stats.miss_rate() - 0.2).abs() < 1e-10);
        assert_eq!(stats.total_accesses(), 100);
    }

    /// Validates `CacheStats::default` behavior for the hit rate no accesses
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms `stats.hit_rate()` equals `0.0`.
    /// - Confirms `stats.miss_rate()` equals `1.0`.
    #[test]
    fn test_hit_rate_no_accesses() {
        let stats = CacheStats::default();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.miss_rate(), 1.0);
    }

    /// Validates `Default::default` behavior for the fill ratio scenario.
    ///
    /// Assertions:
    /// - Confirms `stats.fill_ratio()` equals `0.5`.
    /// - Confirms a zero capacity reports `0.0` rather than dividing by zero.
    #[test]
    fn test_fill_ratio() {
        let half = CacheStats { size: 50, capacity: 100, ..Default::default() };
        let empty = CacheStats::default();

        assert_eq!(half.fill_ratio(), 0.5);
        assert_eq!(empty.fill_ratio(), 0.0);
    }

    /// Validates `CacheStats` `Display` output.
    ///
    /// Assertions:
    /// - Ensures size, capacity and hit rate are rendered.
    #[test]
    fn test_cache_stats_display() {
        let stats = CacheStats { size: 2, capacity: 4, hits: 3, misses: 1, ..Default::default() };
        let rendered = stats.to_string();

        assert!(rendered.contains("size=2/4"));
        assert!(rendered.contains("hit_rate=75.00%"));
    }

    /// Validates `MetricsCollector` behavior for the metrics collector record
    /// operations scenario.
    ///
    /// Assertions:
    /// - Confirms each counter reflects the recorded events.
    /// - Confirms `stats.size` and `stats.capacity` come from the snapshot
    ///   arguments.
    #[test]
    fn test_metrics_collector_record_operations() {
        let mut collector = MetricsCollector::default();

        collector.record_hit();
        collector.record_hit();
        collector.record_miss();
        collector.record_insert();
        collector.record_eviction();
        collector.record_expiration();

        let stats = collector.snapshot(5, 10);

        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.inserts, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.expirations, 1);
        assert_eq!(stats.size, 5);
        assert_eq!(stats.capacity, 10);
    }

    /// Validates `MetricsCollector::reset` behavior for the metrics collector
    /// reset scenario.
    ///
    /// Assertions:
    /// - Confirms all counters return to `0`.
    #[test]
    fn test_metrics_collector_reset() {
        let mut collector = MetricsCollector::default();
        collector.record_hit();
        collector.record_miss();
        collector.record_insert();

        collector.reset();

        assert_eq!(collector.snapshot(0, 1), CacheStats { capacity: 1, ..Default::default() });
    }
}
