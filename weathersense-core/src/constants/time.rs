//! Time-Related Constants
//!
//! Conversion factors used when turning sample durations into averaging
//! weights and when bucketing statistics.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// Seconds per day.
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

// ===== SAMPLING =====

/// Archive interval of the console the collector reads (seconds).
///
/// Each archive record represents this much time in duration-weighted averages.
pub const DEFAULT_ARCHIVE_INTERVAL_SECS: u64 = 5 * SECONDS_PER_MINUTE;
