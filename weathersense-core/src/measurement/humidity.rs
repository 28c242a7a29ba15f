//! Relative humidity
//!
//! Relative humidity is a ratio against saturation, so it is bounded by
//! definition: 0% is completely dry air and 100% is saturated. Capacitive
//! sensors can drift slightly past either end; such readings are rejected
//! here rather than clamped, and the collector decides what to do with them.

use crate::{
    constants::sensors::{DEFAULT_COMPARE_PRECISION, HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT},
    unit::{Conversion, Unit},
};

use super::{utils, AnyUnit, MeasurementKind};

/// Humidity units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HumidityUnit {
    /// Percent relative humidity
    RelativeHumidity,
}

impl Unit for HumidityUnit {
    fn conversion(self) -> Conversion {
        Conversion::IDENTITY
    }

    fn label(self) -> &'static str {
        "%"
    }

    fn decimals(self) -> usize {
        1
    }

    fn all() -> &'static [Self] {
        &[Self::RelativeHumidity]
    }

    fn into_any(self) -> AnyUnit {
        AnyUnit::Humidity(self)
    }

    fn from_any(unit: AnyUnit) -> Option<Self> {
        match unit {
            AnyUnit::Humidity(unit) => Some(unit),
            _ => None,
        }
    }
}

measurement_kind! {
    /// Relative humidity in percent, within `[0, 100]`
    Humidity {
        kind: Humidity,
        unit: HumidityUnit,
        canonical: HumidityUnit::RelativeHumidity,
        precision: DEFAULT_COMPARE_PRECISION,
        validate: |value| utils::check_range(
            MeasurementKind::Humidity,
            value,
            HUMIDITY_MIN_PCT,
            HUMIDITY_MAX_PCT,
        ),
    }
}

impl Humidity {
    /// Completely dry air
    pub const MIN: Humidity = Humidity(HUMIDITY_MIN_PCT);

    /// Saturated air
    pub const MAX: Humidity = Humidity(HUMIDITY_MAX_PCT);
}
