//! Valid Ranges and Comparison Precision per Measurement Kind
//!
//! Ranges are in each kind's canonical unit. Kinds without an entry here
//! accept any finite value.

// ===== HUMIDITY =====

/// Completely dry air (% RH).
pub const HUMIDITY_MIN_PCT: f64 = 0.0;

/// Saturated air (% RH).
pub const HUMIDITY_MAX_PCT: f64 = 100.0;

// ===== SPEED =====

/// Wind speed cannot be negative (m/s).
pub const SPEED_MIN_MPS: f64 = 0.0;

// ===== LEAF WETNESS =====

/// Completely dry leaf sensor.
pub const LEAF_WETNESS_MIN: f64 = 0.0;

/// Saturated leaf sensor.
///
/// Source: Davis Instruments leaf wetness sensor (6420) index scale
pub const LEAF_WETNESS_MAX: f64 = 15.0;

// ===== UV INDEX =====

/// Lowest UV index.
pub const UV_INDEX_MIN: u8 = 0;

/// Highest UV index the station reports.
///
/// The WHO scale is open ended ("11+"), station consoles cap at 15.
pub const UV_INDEX_MAX: u8 = 15;

// ===== COMPARE PRECISION (decimal digits kept for equality) =====

/// Temperature, pressure, depth family, humidity, soil moisture, heading.
pub const DEFAULT_COMPARE_PRECISION: i32 = 1;

/// Wind speed is compared at hundredths of m/s.
pub const SPEED_COMPARE_PRECISION: i32 = 2;

/// Solar radiation and leaf wetness are whole numbers.
pub const WHOLE_COMPARE_PRECISION: i32 = 0;
