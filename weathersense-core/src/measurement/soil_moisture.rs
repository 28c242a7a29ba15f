//! Soil moisture tension in centibars

use crate::{
    constants::sensors::DEFAULT_COMPARE_PRECISION,
    unit::{Conversion, Unit},
};

use super::{utils, AnyUnit, MeasurementKind};

/// Soil moisture units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoilMoistureUnit {
    /// Centibar of soil water tension
    Centibar,
}

impl Unit for SoilMoistureUnit {
    fn conversion(self) -> Conversion {
        Conversion::IDENTITY
    }

    fn label(self) -> &'static str {
        "cb"
    }

    fn decimals(self) -> usize {
        0
    }

    fn all() -> &'static [Self] {
        &[Self::Centibar]
    }

    fn into_any(self) -> AnyUnit {
        AnyUnit::SoilMoisture(self)
    }

    fn from_any(unit: AnyUnit) -> Option<Self> {
        match unit {
            AnyUnit::SoilMoisture(unit) => Some(unit),
            _ => None,
        }
    }
}

measurement_kind! {
    /// Soil moisture tension; higher is drier
    SoilMoisture {
        kind: SoilMoisture,
        unit: SoilMoistureUnit,
        canonical: SoilMoistureUnit::Centibar,
        precision: DEFAULT_COMPARE_PRECISION,
        validate: |value| utils::check_finite(MeasurementKind::SoilMoisture, value),
    }
}
