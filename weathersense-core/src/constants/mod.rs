//! Constants for WeatherSense Core
//!
//! Centralized numeric values used by the unit tables, the kind validators,
//! and the statistics accumulators.
//!
//! ## Organization
//!
//! - **Physics**: unit conversion factors and physical reference values
//! - **Sensors**: valid ranges and compare precision per measurement kind
//! - **Time**: time conversions and archive intervals
//!
//! Names always carry their unit.

/// Unit conversion factors and physical reference values.
pub mod physics;

/// Valid ranges and equality precision of each measurement kind.
pub mod sensors;

/// Time conversions and sampling intervals.
pub mod time;

pub use physics::{
    KELVIN_OFFSET, FAHRENHEIT_SCALE, FAHRENHEIT_OFFSET,
    ALTITUDE_METERS_PER_MILLIBAR, DEGREES_PER_CIRCLE,
};

pub use sensors::{
    HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT, SPEED_MIN_MPS,
    UV_INDEX_MIN, UV_INDEX_MAX,
};

pub use time::{MS_PER_SECOND, SECONDS_PER_HOUR, SECONDS_PER_DAY};
