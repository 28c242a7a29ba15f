//! Physical Conversion Constants for WeatherSense
//!
//! Scale factors and offsets used by the unit tables. Every unit converts
//! from its kind's canonical storage unit with `display = canonical * scale + offset`.

// ===== TEMPERATURE =====

/// Offset between Celsius and Kelvin.
///
/// Source: NIST Special Publication 330 (2019)
pub const KELVIN_OFFSET: f64 = 273.15;

/// Fahrenheit degrees per Celsius degree.
pub const FAHRENHEIT_SCALE: f64 = 1.8;

/// Fahrenheit reading at the freezing point of water.
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Absolute zero in Celsius (°C).
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -KELVIN_OFFSET;

// ===== PRESSURE =====

/// Millibars per inch of mercury at 0°C.
///
/// Source: WMO Guide to Meteorological Instruments, Annex 1.B
pub const MILLIBAR_PER_INCH_HG: f64 = 33.86386;

/// Millibars per kilopascal.
pub const MILLIBAR_PER_KILOPASCAL: f64 = 10.0;

/// Altitude change that moves station pressure by one millibar (m/mb).
///
/// Near-surface approximation used for sea-level reduction of station
/// barometer readings; valid for the first few hundred meters.
pub const ALTITUDE_METERS_PER_MILLIBAR: f64 = 8.23;

/// Standard atmospheric pressure at sea level (mb).
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_PRESSURE_MB: f64 = 1013.25;

// ===== LENGTH =====

/// Millimeters per inch (exact, international inch).
pub const MILLIMETERS_PER_INCH: f64 = 25.4;

/// Millimeters per foot (exact).
pub const MILLIMETERS_PER_FOOT: f64 = MILLIMETERS_PER_INCH * 12.0;

/// Millimeters per meter.
pub const MILLIMETERS_PER_METER: f64 = 1_000.0;

// ===== SPEED =====

/// Kilometers per hour in one meter per second.
pub const KPH_PER_MPS: f64 = 3.6;

/// Statute miles per hour in one meter per second.
pub const MPH_PER_MPS: f64 = 2.23693;

/// Knots in one meter per second.
pub const KNOTS_PER_MPS: f64 = 1.94384;

// ===== ANGLES =====

/// Degrees in a full circle; headings wrap at this value.
pub const DEGREES_PER_CIRCLE: f64 = 360.0;
