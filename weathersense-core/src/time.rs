//! Time handling for measurement statistics
//!
//! Statistics record *when* an extreme happened and *how long* a sample
//! represents. Both come from outside the core:
//! - a [`TimeSource`] supplies timestamps (console clock, system clock, replay)
//! - sample durations are plain [`Duration`]s computed by the collector

use core::time::Duration;

use crate::constants::time::MS_PER_SECOND;

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of time for the system
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs replayed/fixed)
    fn is_wall_clock(&self) -> bool;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for tests and archive replay
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Clock stopped at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `by`
    pub fn advance(&mut self, by: Duration) {
        self.timestamp += by.as_millis() as Timestamp;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

/// Elapsed time between two timestamps, zero if the clock went backwards
pub fn elapsed(earlier: Timestamp, later: Timestamp) -> Duration {
    Duration::from_millis(later.saturating_sub(earlier))
}

/// Averaging weight of a duration, in seconds
pub(crate) fn weight_seconds(duration: Duration) -> f64 {
    duration.as_secs_f64()
}

/// Timestamp `seconds` after `start`
pub fn after_seconds(start: Timestamp, seconds: u64) -> Timestamp {
    start + seconds * MS_PER_SECOND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut time = FixedTime::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(Duration::from_millis(500));
        assert_eq!(time.now(), 1500);
        assert!(!time.is_wall_clock());
    }

    #[test]
    fn elapsed_saturates() {
        assert_eq!(elapsed(1000, 61_000), Duration::from_secs(60));
        // Clock adjusted backwards
        assert_eq!(elapsed(5000, 1000), Duration::ZERO);
    }

    #[test]
    fn weights_keep_fractional_seconds() {
        assert_eq!(weight_seconds(Duration::from_millis(1500)), 1.5);
        assert_eq!(after_seconds(1000, 60), 61_000);
    }
}
