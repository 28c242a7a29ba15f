//! Shared checks used by every measurement kind
//!
//! Pure functions, no allocation. Each kind's constructor funnels its
//! canonical value through these before wrapping it.

use crate::{
    constants::physics::DEGREES_PER_CIRCLE,
    errors::{MeasurementError, MeasurementResult},
};

use super::MeasurementKind;

/// Reject NaN and infinities
pub fn check_finite(kind: MeasurementKind, value: f64) -> MeasurementResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MeasurementError::InvalidValue { kind })
    }
}

/// Check if a value is within the inclusive range `[min, max]`
pub fn check_range(kind: MeasurementKind, value: f64, min: f64, max: f64) -> MeasurementResult<f64> {
    let value = check_finite(kind, value)?;
    if value < min || value > max {
        Err(MeasurementError::OutOfRange { kind, value, min, max })
    } else {
        Ok(value)
    }
}

/// Check a lower bound only
pub fn check_at_least(kind: MeasurementKind, value: f64, min: f64) -> MeasurementResult<f64> {
    check_range(kind, value, min, f64::MAX)
}

/// Fold an angle in degrees into `[0, 360)`
pub fn normalize_degrees(degrees: f64) -> f64 {
    let folded = degrees % DEGREES_PER_CIRCLE;
    let folded = if folded < 0.0 { folded + DEGREES_PER_CIRCLE } else { folded };
    // -1e-20 % 360 + 360 rounds back up to 360
    if folded >= DEGREES_PER_CIRCLE { 0.0 } else { folded }
}

/// Equality key: the value rounded to `precision` decimal digits
pub fn compare_key(value: f64, precision: i32) -> i64 {
    let scale = libm::pow(10.0, precision as f64);
    libm::round(value * scale) as i64
}
