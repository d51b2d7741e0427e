use std::time::{Duration, Instant};

/// A memoized value together with its expiry deadline.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    /// Entry value.
    pub(crate) value: V,

    /// Absolute expiry time.
    ///
    /// - [`None`] if the value must be kept forever.
    pub(crate) expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    /// A deadline that overflows the clock's range is treated as "never".
    pub(crate) fn new(value: V, now: Instant, ttl: Option<Duration>) -> Self {
        Self { value, expires_at: ttl.and_then(|ttl| now.checked_add(ttl)) }
    }

    /// Check if the entry may still be served at `now`.
    ///
    /// The deadline itself is already expired.
    pub(crate) fn is_live(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at > now,
            None => true,
        }
    }

    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        !self.is_live(now)
    }
}
