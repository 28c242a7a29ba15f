//! Solar radiation in watts per square meter

use crate::{
    constants::sensors::WHOLE_COMPARE_PRECISION,
    unit::{Conversion, Unit},
};

use super::{utils, AnyUnit, MeasurementKind};

/// Solar radiation units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarRadiationUnit {
    /// Watts per square meter
    WattsPerSquareMeter,
}

impl Unit for SolarRadiationUnit {
    fn conversion(self) -> Conversion {
        Conversion::IDENTITY
    }

    fn label(self) -> &'static str {
        "W/m2"
    }

    fn decimals(self) -> usize {
        0
    }

    fn all() -> &'static [Self] {
        &[Self::WattsPerSquareMeter]
    }

    fn into_any(self) -> AnyUnit {
        AnyUnit::SolarRadiation(self)
    }

    fn from_any(unit: AnyUnit) -> Option<Self> {
        match unit {
            AnyUnit::SolarRadiation(unit) => Some(unit),
            _ => None,
        }
    }
}

measurement_kind! {
    /// Solar radiation, compared in whole W/m²
    SolarRadiation {
        kind: SolarRadiation,
        unit: SolarRadiationUnit,
        canonical: SolarRadiationUnit::WattsPerSquareMeter,
        precision: WHOLE_COMPARE_PRECISION,
        validate: |value| utils::check_finite(MeasurementKind::SolarRadiation, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Measurement;

    #[test]
    fn whole_watt_precision() {
        let a = SolarRadiation::from_canonical(812.4).unwrap();
        let b = SolarRadiation::from_canonical(811.6).unwrap();
        let c = SolarRadiation::from_canonical(812.6).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.format_with_unit(SolarRadiationUnit::WattsPerSquareMeter), "812 W/m2");
    }
}
