//! Transparent memoization of functions
//!
//! [`Memoized`] owns a function together with the [`MemoCache`] that stores
//! its results. Calling it with arguments it has seen (and whose entry is
//! still live) returns the cached result without running the function.
//!
//! The argument type doubles as the cache key. Tuples work for fixed
//! signatures; [`CallKey`] covers calls with keyword arguments.
//!
//! # Example
//! ```
//! use memocache::{memoize, CacheConfig};
//!
//! let mut add = memoize(CacheConfig::lru(2), |&(a, b): &(i32, i32)| a + b)?;
//!
//! assert_eq!(add.call((1, 2)), 3);
//! assert_eq!(add.call((1, 2)), 3);
//! assert_eq!(add.cache().len(), 1);
//! # Ok::<(), memocache::MemoError>(())
//! ```

mod key;

use std::fmt;
use std::hash::Hash;

pub use key::CallKey;

use crate::cache::{CacheConfig, MemoCache};
use crate::clock::{Clock, SystemClock};
use crate::error::MemoResult;

/// A function wrapped with its own memoization cache
///
/// Built by [`memoize`], [`try_memoize`] or their `_with_clock` variants.
pub struct Memoized<A, V, F, C = SystemClock>
where
    A: Hash + Eq,
    C: Clock,
{
    func: F,
    cache: MemoCache<A, V, C>,
}

/// Memoize an infallible function
///
/// # Errors
/// Returns [`MemoError::InvalidConfiguration`] when the capacity is zero.
///
/// [`MemoError::InvalidConfiguration`]: crate::MemoError::InvalidConfiguration
pub fn memoize<A, V, F>(config: CacheConfig, func: F) -> MemoResult<Memoized<A, V, F>>
where
    A: Hash + Eq,
    V: Clone,
    F: FnMut(&A) -> V,
{
    memoize_with_clock(config, SystemClock, func)
}

/// Memoize an infallible function, reading time from `clock`
///
/// # Errors
/// Returns [`MemoError::InvalidConfiguration`] when the capacity is zero.
///
/// [`MemoError::InvalidConfiguration`]: crate::MemoError::InvalidConfiguration
pub fn memoize_with_clock<A, V, F, C>(
    config: CacheConfig,
    clock: C,
    func: F,
) -> MemoResult<Memoized<A, V, F, C>>
where
    A: Hash + Eq,
    V: Clone,
    F: FnMut(&A) -> V,
    C: Clock,
{
    Ok(Memoized::new(func, MemoCache::with_clock(config, clock)?))
}

/// Memoize a fallible function
///
/// Only `Ok` results are cached; errors reach the caller unchanged.
///
/// # Errors
/// Returns [`MemoError::InvalidConfiguration`] when the capacity is zero.
///
/// [`MemoError::InvalidConfiguration`]: crate::MemoError::InvalidConfiguration
pub fn try_memoize<A, V, E, F>(config: CacheConfig, func: F) -> MemoResult<Memoized<A, V, F>>
where
    A: Hash + Eq,
    V: Clone,
    F: FnMut(&A) -> Result<V, E>,
{
    try_memoize_with_clock(config, SystemClock, func)
}

/// Memoize a fallible function, reading time from `clock`
///
/// # Errors
/// Returns [`MemoError::InvalidConfiguration`] when the capacity is zero.
///
/// [`MemoError::InvalidConfiguration`]: crate::MemoError::InvalidConfiguration
pub fn try_memoize_with_clock<A, V, E, F, C>(
    config: CacheConfig,
    clock: C,
    func: F,
) -> MemoResult<Memoized<A, V, F, C>>
where
    A: Hash + Eq,
    V: Clone,
    F: FnMut(&A) -> Result<V, E>,
    C: Clock,
{
    Ok(Memoized::new(func, MemoCache::with_clock(config, clock)?))
}

impl<A, V, F, C> Memoized<A, V, F, C>
where
    A: Hash + Eq,
    C: Clock,
{
    /// Pair a function with an existing cache
    pub fn new(func: F, cache: MemoCache<A, V, C>) -> Self {
        Self { func, cache }
    }

    /// Call the function, or return the cached result for `args`
    pub fn call(&mut self, args: A) -> V
    where
        V: Clone,
        F: FnMut(&A) -> V,
    {
        self.cache.get_or_compute_with(args, &mut self.func)
    }

    /// Call a fallible function, or return the cached result for `args`
    ///
    /// # Errors
    /// Returns the function's error unchanged; nothing is cached for `args`.
    pub fn try_call<E>(&mut self, args: A) -> Result<V, E>
    where
        V: Clone,
        F: FnMut(&A) -> Result<V, E>,
    {
        self.cache.try_get_or_compute_with(args, &mut self.func)
    }

    /// The cache backing this function
    pub fn cache(&self) -> &MemoCache<A, V, C> {
        &self.cache
    }

    /// Mutable access to the backing cache
    pub fn cache_mut(&mut self) -> &mut MemoCache<A, V, C> {
        &mut self.cache
    }

    /// Forget every cached result
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Split into the wrapped function and its cache
    pub fn into_parts(self) -> (F, MemoCache<A, V, C>) {
        (self.func, self.cache)
    }
}

impl<A, V, F, C> fmt::Debug for Memoized<A, V, F, C>
where
    A: Hash + Eq,
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized").field("cache", &self.cache).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for memoize.
    use std::time::Duration;

    use super::*;
    use crate::clock::MockClock;

    /// Validates `memoize` behavior for the repeated call scenario.
    ///
    /// Assertions:
    /// - Confirms the wrapped function runs once per distinct argument.
    #[test]
    fn test_memoize_runs_once_per_argument() {
        let mut calls = 0;
        let mut square = memoize(CacheConfig::lru(8), |n: &u64| {
            calls += 1;
            n * n
        })
        .unwrap();

        assert_eq!(square.call(3), 9);
        assert_eq!(square.call(3), 9);
        assert_eq!(square.call(4), 16);

        drop(square);
        assert_eq!(calls, 2);
    }

    /// Validates `memoize` behavior for the zero capacity scenario.
    ///
    /// Assertions:
    /// - Ensures construction fails.
    #[test]
    fn test_memoize_rejects_zero_capacity() {
        let result = memoize(CacheConfig::lru(0), |n: &u8| *n);
        assert!(result.is_err());
    }

    /// Validates `try_memoize` behavior for the failing call scenario.
    ///
    /// Assertions:
    /// - Confirms errors are returned verbatim and not cached.
    /// - Confirms successes are cached.
    #[test]
    fn test_try_memoize_caches_only_success() {
        let mut attempts = 0;
        let mut parse = try_memoize(CacheConfig::lru(8), |text: &String| {
            attempts += 1;
            text.parse::<i32>()
        })
        .unwrap();

        assert!(parse.try_call("x".to_string()).is_err());
        assert!(parse.try_call("x".to_string()).is_err());
        assert_eq!(parse.try_call("5".to_string()), Ok(5));
        assert_eq!(parse.try_call("5".to_string()), Ok(5));
        assert_eq!(parse.cache().len(), 1);

        drop(parse);
        assert_eq!(attempts, 3);
    }

    /// Validates `memoize_with_clock` behavior for the ttl scenario.
    ///
    /// Assertions:
    /// - Confirms the function runs again once the entry expired.
    #[test]
    fn test_memoize_with_clock_expires() {
        let clock = MockClock::new();
        let config = CacheConfig::ttl_lru(Duration::from_secs(60), 4);
        let mut generation = 0;
        let mut lookup = memoize_with_clock(config, clock.clone(), |_: &&str| {
            generation += 1;
            generation
        })
        .unwrap();

        assert_eq!(lookup.call("user"), 1);
        clock.advance(Duration::from_secs(59));
        assert_eq!(lookup.call("user"), 1);
        clock.advance(Duration::from_secs(2));
        assert_eq!(lookup.call("user"), 2);
    }

    /// Validates `Memoized::clear` and `Memoized::into_parts`.
    ///
    /// Assertions:
    /// - Confirms clearing forces recomputation.
    /// - Confirms the cache handed back by `into_parts` holds the result.
    #[test]
    fn test_memoized_clear_and_into_parts() {
        let mut runs = 0;
        let mut double = memoize(CacheConfig::lru(4), |n: &i32| {
            runs += 1;
            n * 2
        })
        .unwrap();

        double.call(1);
        double.clear();
        double.call(1);

        let (_, cache) = double.into_parts();
        assert_eq!(cache.peek(&1), Some(&2));
        assert_eq!(runs, 2);
    }
}
