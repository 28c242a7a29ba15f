//! Error Types for Measurement Construction and Accumulation
//!
//! ## Design Philosophy
//!
//! Measurement errors travel through the collector's hot path (every sensor
//! sample is wrapped in a typed measurement), so they follow the same rules as
//! the rest of the core:
//!
//! 1. **Small Size**: variants carry a kind tag and a few floats, nothing more.
//!
//! 2. **No Heap Allocation**: messages are `&'static str`, never `String`.
//!
//! 3. **Copy Semantics**: errors are returned by value and may be queued.
//!
//! ## Error Categories
//!
//! ### Invalid Arguments
//! - `OutOfRange`: value outside the kind's valid range (humidity above 100%,
//!   negative wind speed)
//! - `IndexOutOfRange`: UV index outside 0 to 15
//! - `InvalidValue`: NaN or infinite input
//!
//! ### Kind Violations
//! - `KindMismatch`: arithmetic between two different measurement kinds
//! - `UnitMismatch`: a unit of one family assigned as default for another kind
//!
//! ### Accumulation
//! - `ZeroDuration`: a weighted average merge where both sides weigh nothing
//! - `LockPoisoned`: a shared accumulator whose writer panicked
//!
//! Equality across kinds is never an error: it is simply `false`.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use weathersense_core::{Humidity, Measurement, MeasurementError};
//!
//! match Humidity::from_canonical(104.0) {
//!     Ok(_) => {}
//!     Err(MeasurementError::OutOfRange { min, max, .. }) => {
//!         // Sensor reported an impossible reading, drop the sample
//!         assert_eq!((min, max), (0.0, 100.0));
//!     }
//!     Err(_) => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

use crate::measurement::MeasurementKind;

/// Result type for measurement operations
pub type MeasurementResult<T> = Result<T, MeasurementError>;

/// Measurement errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MeasurementError {
    /// Value outside the valid range of its kind
    #[error("{kind} value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Kind that rejected the value
        kind: MeasurementKind,
        /// The rejected value, in the kind's canonical unit
        value: f64,
        /// Smallest accepted value
        min: f64,
        /// Largest accepted value
        max: f64,
    },

    /// UV index outside `[min, max]`
    #[error("UV index {index} outside range [{min}, {max}]")]
    IndexOutOfRange {
        /// The rejected index
        index: i32,
        /// Smallest accepted index
        min: u8,
        /// Largest accepted index
        max: u8,
    },

    /// NaN or infinity
    #[error("{kind} value is not a finite number")]
    InvalidValue {
        /// Kind that rejected the value
        kind: MeasurementKind,
    },

    /// Arithmetic between two different measurement kinds
    #[error("cannot combine {found} with {expected}")]
    KindMismatch {
        /// Kind of the receiver
        expected: MeasurementKind,
        /// Kind of the argument
        found: MeasurementKind,
    },

    /// Default unit assignment with a unit that does not measure the kind
    #[error("unit '{unit}' cannot be the default unit of {kind}")]
    UnitMismatch {
        /// Kind being configured
        kind: MeasurementKind,
        /// Label of the offending unit
        unit: &'static str,
    },

    /// Weighted merge with zero total duration
    #[error("cannot average samples with zero total duration")]
    ZeroDuration,

    /// A shared accumulator lock was poisoned by a panicking writer
    #[error("statistics lock poisoned")]
    LockPoisoned,
}

impl MeasurementError {
    /// True for the errors raised by a bad constructor argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. }
                | Self::IndexOutOfRange { .. }
                | Self::InvalidValue { .. }
                | Self::UnitMismatch { .. }
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MeasurementError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { kind, value, min, max } =>
                defmt::write!(fmt, "{} value {} outside [{}, {}]", kind.name(), value, min, max),
            Self::IndexOutOfRange { index, min, max } =>
                defmt::write!(fmt, "UV index {} outside [{}, {}]", index, min, max),
            Self::InvalidValue { kind } =>
                defmt::write!(fmt, "{} value not finite", kind.name()),
            Self::KindMismatch { expected, found } =>
                defmt::write!(fmt, "Cannot combine {} with {}", found.name(), expected.name()),
            Self::UnitMismatch { kind, unit } =>
                defmt::write!(fmt, "Unit {} not valid for {}", unit, kind.name()),
            Self::ZeroDuration =>
                defmt::write!(fmt, "Zero duration average"),
            Self::LockPoisoned =>
                defmt::write!(fmt, "Lock poisoned"),
        }
    }
}
