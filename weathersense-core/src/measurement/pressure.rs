//! Barometric Pressure with Altitude Reduction
//!
//! ## Station vs Sea-Level Pressure
//!
//! A barometer reads *station pressure*, which falls as the station gets
//! higher. Forecast maps use *sea-level pressure* so stations can be compared.
//! Near the surface the reduction is close to linear:
//!
//! ```text
//! Δp (mb) = altitude (m) / 8.23
//!
//! Station at 250 m reading 985.0 mb
//! Sea-level pressure ≈ 985.0 + 250 / 8.23 ≈ 1015.4 mb
//! ```
//!
//! The linear form is accurate to a fraction of a millibar for the few hundred
//! meters home stations sit at; it is not a substitute for the barometric
//! formula at mountain altitudes.
//!
//! ## Units
//!
//! Millibar is the storage unit; hectopascal is numerically identical.

use crate::{
    constants::physics::{ALTITUDE_METERS_PER_MILLIBAR, MILLIBAR_PER_INCH_HG, MILLIBAR_PER_KILOPASCAL},
    constants::sensors::DEFAULT_COMPARE_PRECISION,
    errors::MeasurementResult,
    unit::{Conversion, Unit},
};

use super::{utils, AnyUnit, DepthUnit, Distance, Measurement, MeasurementKind};

/// Pressure units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureUnit {
    /// Kilopascal
    KiloPascal,
    /// Hectopascal, same magnitude as the millibar
    HectoPascal,
    /// Millibar (storage unit)
    Millibar,
    /// Inches of mercury
    InchesOfMercury,
}

impl Unit for PressureUnit {
    fn conversion(self) -> Conversion {
        match self {
            Self::KiloPascal => Conversion::scaled(1.0 / MILLIBAR_PER_KILOPASCAL),
            Self::HectoPascal | Self::Millibar => Conversion::IDENTITY,
            Self::InchesOfMercury => Conversion::scaled(1.0 / MILLIBAR_PER_INCH_HG),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::KiloPascal => "kPa",
            Self::HectoPascal => "hPa",
            Self::Millibar => "mb",
            Self::InchesOfMercury => "inHg",
        }
    }

    fn decimals(self) -> usize {
        match self {
            Self::KiloPascal => 1,
            Self::HectoPascal | Self::Millibar => 0,
            Self::InchesOfMercury => 2,
        }
    }

    fn all() -> &'static [Self] {
        &[Self::KiloPascal, Self::HectoPascal, Self::Millibar, Self::InchesOfMercury]
    }

    fn into_any(self) -> AnyUnit {
        AnyUnit::Pressure(self)
    }

    fn from_any(unit: AnyUnit) -> Option<Self> {
        match unit {
            AnyUnit::Pressure(unit) => Some(unit),
            _ => None,
        }
    }
}

measurement_kind! {
    /// Barometric pressure, stored in millibars
    Pressure {
        kind: Pressure,
        unit: PressureUnit,
        canonical: PressureUnit::Millibar,
        precision: DEFAULT_COMPARE_PRECISION,
        validate: |value| utils::check_finite(MeasurementKind::Pressure, value),
    }
}

impl Pressure {
    /// Pressure difference equivalent to `altitude`
    pub fn barometric_offset(altitude: Distance) -> MeasurementResult<Pressure> {
        Pressure::from_canonical(altitude.get_in(DepthUnit::Meters) / ALTITUDE_METERS_PER_MILLIBAR)
    }

    /// Station pressure reduced to sea level (adds the altitude offset)
    pub fn adjust_for_altitude(&self, altitude: Distance) -> MeasurementResult<Pressure> {
        self.add(&Self::barometric_offset(altitude)?)
    }

    /// Sea-level pressure back to station pressure (removes the altitude offset)
    pub fn remove_altitude_adjustment(&self, altitude: Distance) -> MeasurementResult<Pressure> {
        self.subtract(&Self::barometric_offset(altitude)?)
    }
}
