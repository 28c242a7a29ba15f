//! Wind speed
//!
//! Stored in meters per second and compared at hundredths, which is finer
//! than any cup anemometer resolves. A negative speed is a wiring or
//! calibration fault and is rejected.

use crate::{
    constants::physics::{KNOTS_PER_MPS, KPH_PER_MPS, MPH_PER_MPS},
    constants::sensors::{SPEED_COMPARE_PRECISION, SPEED_MIN_MPS},
    unit::{Conversion, Unit},
};

use super::{utils, AnyUnit, MeasurementKind};

/// Speed units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedUnit {
    /// Kilometers per hour
    KilometersPerHour,
    /// Meters per second (storage unit)
    MetersPerSecond,
    /// Statute miles per hour
    MilesPerHour,
    /// Nautical miles per hour
    Knots,
}

impl Unit for SpeedUnit {
    fn conversion(self) -> Conversion {
        match self {
            Self::KilometersPerHour => Conversion::scaled(KPH_PER_MPS),
            Self::MetersPerSecond => Conversion::IDENTITY,
            Self::MilesPerHour => Conversion::scaled(MPH_PER_MPS),
            Self::Knots => Conversion::scaled(KNOTS_PER_MPS),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::KilometersPerHour => "KPH",
            Self::MetersPerSecond => "MPS",
            Self::MilesPerHour => "MPH",
            Self::Knots => "KTS",
        }
    }

    fn decimals(self) -> usize {
        match self {
            Self::MetersPerSecond => 2,
            _ => 1,
        }
    }

    fn all() -> &'static [Self] {
        &[Self::KilometersPerHour, Self::MetersPerSecond, Self::MilesPerHour, Self::Knots]
    }

    fn into_any(self) -> AnyUnit {
        AnyUnit::Speed(self)
    }

    fn from_any(unit: AnyUnit) -> Option<Self> {
        match unit {
            AnyUnit::Speed(unit) => Some(unit),
            _ => None,
        }
    }
}

measurement_kind! {
    /// Wind speed in meters per second, never negative
    Speed {
        kind: Speed,
        unit: SpeedUnit,
        canonical: SpeedUnit::MetersPerSecond,
        precision: SPEED_COMPARE_PRECISION,
        validate: |value| utils::check_at_least(MeasurementKind::Speed, value, SPEED_MIN_MPS),
    }
}
