//! Time Provider Trait and Implementations
//!
//! Clock abstraction used for storage expiry. Production code reads the
//! system clock; tests drive a mock clock forward by whole days.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::{Arc, Mutex};

/// Source of the current time
pub trait TimeProvider: Send + Sync {
    /// Get the current UTC time
    fn now_utc(&self) -> DateTime<Utc>;

    /// Instant at which something written now with `ttl` expires
    fn expiry_after(&self, ttl: Duration) -> DateTime<Utc> {
        self.now_utc() + ttl
    }

    /// Whether `expires_at` has been reached
    fn is_expired(&self, expires_at: DateTime<Utc>) -> bool {
        self.now_utc() >= expires_at
    }
}

/// Shared handle passed to stores
pub type SharedTimeProvider = Arc<dyn TimeProvider>;

/// System time provider for production use
#[derive(Debug, Clone, Default)]
pub struct SystemTimeProvider;

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for SystemTimeProvider {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Mock time provider for testing
///
/// Clones share the same clock, so a test can keep one handle and give
/// another to the store under test.
#[derive(Debug, Clone)]
pub struct MockTimeProvider {
    current_time: Arc<Mutex<DateTime<Utc>>>,
}

impl MockTimeProvider {
    /// Create a new mock time provider starting from the given time
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self {
            current_time: Arc::new(Mutex::new(start_time)),
        }
    }

    /// Create a mock time provider starting from a specific date/time
    pub fn new_from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Self::new)
    }

    /// Advance the mock time by the specified duration
    pub fn advance(&self, duration: Duration) {
        if let Ok(mut time) = self.current_time.lock() {
            *time += duration;
        }
    }

    pub fn advance_days(&self, days: i64) {
        self.advance(Duration::days(days));
    }

    /// Get the current mock time
    pub fn current_time(&self) -> DateTime<Utc> {
        self.current_time
            .lock()
            .map_or_else(|poisoned| *poisoned.into_inner(), |time| *time)
    }
}

impl Default for MockTimeProvider {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_utc(&self) -> DateTime<Utc> {
        self.current_time()
    }
}
