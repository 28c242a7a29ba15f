//! Unit-safe weather measurements for WeatherSense
//!
//! Typed measurement values with pluggable display units, precision-aware
//! equality, and the min/max/average statistics the collector rolls up from
//! raw console samples into hourly, daily and monthly summaries.
//!
//! Key constraints:
//! - Builds without `std` (console firmware, display boards)
//! - Measurements are `Copy` newtypes over one `f64`
//! - No global state: display units live in an explicit [`UnitRegistry`]
//!
//! ```rust
//! use core::time::Duration;
//! use weathersense_core::{
//!     Measurement, MeasurementStatistics, Temperature, TemperatureUnit, UnitRegistry,
//! };
//!
//! let mut units = UnitRegistry::standard();
//! units.set::<Temperature>(TemperatureUnit::Fahrenheit);
//!
//! let mut hour = MeasurementStatistics::<Temperature>::new();
//! for (minute, f) in [(0, 50.0), (1, 54.0), (2, 52.0)] {
//!     let reading = Temperature::in_default_unit(f, &units)?;
//!     hour.apply_value(reading, minute * 60_000, Duration::from_secs(60))?;
//! }
//!
//! let high = hour.maximum_value().and_then(|t| t.format(&units));
//! assert_eq!(high.as_deref(), Some("54.0 °F"));
//! # Ok::<(), weathersense_core::MeasurementError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod errors;
pub mod measurement;
#[cfg(feature = "config")]
pub mod preferences;
pub mod registry;
pub mod statistics;
pub mod time;
pub mod unit;

// Public API
pub use errors::{MeasurementError, MeasurementResult};
pub use measurement::{
    AnyMeasurement, AnyUnit, CompareMode, Depth, DepthUnit, Distance, Heading, HeadingUnit,
    Humidity, HumidityUnit, LeafWetness, LeafWetnessUnit, Measurement, MeasurementKind,
    Pressure, PressureUnit, Rainfall, SoilMoisture, SoilMoistureUnit, SolarRadiation,
    SolarRadiationUnit, Speed, SpeedUnit, Temperature, TemperatureUnit, UvIndex,
};
#[cfg(feature = "config")]
pub use preferences::{ConfigError, UnitPreferences};
pub use registry::UnitRegistry;
#[cfg(feature = "std")]
pub use statistics::SharedStatistics;
pub use statistics::{
    ExtremeType, MeasurementAverage, MeasurementExtreme, MeasurementStatistics,
    MeasurementValueTime,
};
pub use time::{TimeSource, Timestamp};
pub use unit::{Conversion, Unit};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
