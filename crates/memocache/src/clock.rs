//! Time abstraction for testability
//!
//! The cache never calls `Instant::now()` directly. It reads time through a
//! [`Clock`], so production code runs on [`SystemClock`] while tests drive a
//! [`MockClock`] and move time forward explicitly.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use memocache::{Clock, MockClock, SystemClock};
//!
//! // Use system clock in production
//! let clock = SystemClock;
//! let _now = clock.now();
//!
//! // Use mock clock in tests
//! let mock = MockClock::new();
//! let start = mock.now();
//! mock.advance(Duration::from_secs(5));
//! assert_eq!(mock.now().duration_since(start), Duration::from_secs(5));
//! ```

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Monotonic time source consulted by the cache
pub trait Clock: Send + Sync {
    /// Get current instant (monotonic time)
    fn now(&self) -> Instant;
}

/// Real system clock implementation for production use
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Implement Clock for Arc<T> where T: Clock for convenient sharing
impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Adapts any zero-argument time-source callable into a [`Clock`]
///
/// ```
/// use std::time::Instant;
///
/// use memocache::{Clock, FnClock};
///
/// let fixed = Instant::now();
/// let clock = FnClock::new(move || fixed);
/// assert_eq!(clock.now(), fixed);
/// ```
#[derive(Clone, Copy)]
pub struct FnClock<F>(F);

impl<F> FnClock<F>
where
    F: Fn() -> Instant + Send + Sync,
{
    /// Wrap a time-source callable
    pub const fn new(source: F) -> Self {
        Self(source)
    }
}

impl<F> Clock for FnClock<F>
where
    F: Fn() -> Instant + Send + Sync,
{
    fn now(&self) -> Instant {
        (self.0)()
    }
}

impl<F> fmt::Debug for FnClock<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnClock").finish_non_exhaustive()
    }
}

/// Mock clock for deterministic testing
///
/// Clones share the same elapsed time, so a test can keep one handle and
/// give another to the cache.
#[derive(Debug, Clone)]
pub struct MockClock {
    start: Instant,
    elapsed: Arc<Mutex<Duration>>,
}

impl MockClock {
    /// Create a new mock clock starting at the current instant
    pub fn new() -> Self {
        Self::with_current_time(Instant::now())
    }

    /// Create a new mock clock with a specific start time
    pub fn with_current_time(start: Instant) -> Self {
        Self { start, elapsed: Arc::new(Mutex::new(Duration::ZERO)) }
    }

    /// Advance the mock clock by a duration
    pub fn advance(&self, duration: Duration) {
        if let Ok(mut elapsed) = self.elapsed.lock() {
            *elapsed += duration;
        }
    }

    /// Advance the mock clock by milliseconds (convenience method)
    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    /// Set the mock clock to a specific elapsed time
    pub fn set_elapsed(&self, duration: Duration) {
        if let Ok(mut elapsed) = self.elapsed.lock() {
            *elapsed = duration;
        }
    }

    /// Get the current elapsed time
    pub fn elapsed(&self) -> Duration {
        self.elapsed.lock().map(|e| *e).unwrap_or(Duration::ZERO)
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        self.start + self.elapsed()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for clock.
    use super::*;

    /// Validates `MockClock::advance` behavior for the mock clock advance
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms `clock.now() - start` equals `1500ms` after two advances.
    /// - Confirms `clock.elapsed()` equals `1500ms`.
    #[test]
    fn test_mock_clock_advance() {
        let clock = MockClock::new();
        let start = clock.now();

        clock.advance(Duration::from_secs(1));
        clock.advance_millis(500);

        assert_eq!(clock.now().duration_since(start), Duration::from_millis(1500));
        assert_eq!(clock.elapsed(), Duration::from_millis(1500));
    }

    /// Validates `MockClock::set_elapsed` behavior for the mock clock set
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms the clock reports exactly the elapsed time that was set.
    #[test]
    fn test_mock_clock_set_elapsed() {
        let start = Instant::now();
        let clock = MockClock::with_current_time(start);

        clock.advance(Duration::from_secs(30));
        clock.set_elapsed(Duration::from_secs(2));

        assert_eq!(clock.now(), start + Duration::from_secs(2));
    }

    /// Validates `MockClock::clone` behavior for the shared elapsed time
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms advancing one handle is observed through the other.
    #[test]
    fn test_mock_clock_clones_share_time() {
        let clock = MockClock::new();
        let handle = clock.clone();

        handle.advance(Duration::from_secs(7));

        assert_eq!(clock.elapsed(), Duration::from_secs(7));
        assert_eq!(clock.now(), handle.now());
    }

    /// Validates `FnClock::new` behavior for the callable time source
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms the wrapped callable supplies `now()`.
    #[test]
    fn test_fn_clock_uses_callable() {
        let fixed = Instant::now();
        let clock = FnClock::new(move || fixed);

        assert_eq!(clock.now(), fixed);
        assert_eq!(clock.now(), fixed);
    }

    /// Validates `Arc<MockClock>` behavior for the arc delegation scenario.
    ///
    /// Assertions:
    /// - Confirms the `Arc` wrapper reports the inner clock's time.
    #[test]
    fn test_arc_clock_delegates() {
        let clock = Arc::new(MockClock::new());
        clock.advance(Duration::from_secs(3));

        let shared: Arc<dyn Clock> = clock.clone();
        assert_eq!(shared.now(), clock.now());
    }
}
