//! Bounded memoization cache with LRU eviction and optional TTL expiry.
//!
//! The crate is built around [`MemoCache`], a single-threaded cache that maps
//! a call signature to a previously computed result. Entries are evicted in
//! least-recently-used order once the configured capacity is exceeded, and
//! may expire after a time-to-live. Expiry is lazy: an expired entry keeps
//! its capacity slot until it is looked up again, displaced by LRU eviction,
//! or removed by an explicit [`MemoCache::purge_expired`] call.
//!
//! [`memoize`] wraps an arbitrary function in a [`Memoized`] adapter that
//! owns both the function and its cache.
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`CacheConfig`] and
//!   [`CacheStats`], plus [`CacheConfig::from_toml_str`]
//!
//! # Example
//!
//! ```
//! use memocache::{CacheConfig, MemoCache};
//!
//! let mut cache: MemoCache<&str, u64> = MemoCache::new(CacheConfig::lru(2))?;
//!
//! assert_eq!(cache.get_or_compute("a", || 1), 1);
//! assert_eq!(cache.get_or_compute("a", || unreachable!()), 1);
//! # Ok::<(), memocache::MemoError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod cache;
pub mod clock;
pub mod error;
pub mod memoize;

#[cfg(feature = "serde")]
pub mod utils;

// Re-export commonly used types and traits for convenience
// ------------------------
pub use cache::{CacheConfig, CacheConfigBuilder, CacheStats, MemoCache, DEFAULT_CAPACITY};
pub use clock::{Clock, FnClock, MockClock, SystemClock};
pub use error::{MemoError, MemoResult};
pub use memoize::{
    memoize, memoize_with_clock, try_memoize, try_memoize_with_clock, CallKey, Memoized,
};
#[cfg(feature = "serde")]
pub use utils::serde::{duration_millis, option_duration_millis};
