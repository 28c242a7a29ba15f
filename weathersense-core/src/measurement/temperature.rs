//! Temperature in degrees Celsius
//!
//! Temperature is the one family whose units differ by an offset as well as a
//! scale, so conversions go through the full affine [`Conversion`]. No range is
//! enforced: the collector sees soil probes, freezer sensors, and heated rain
//! gauges, and plausibility filtering belongs to the collector.

use crate::{
    constants::physics::{FAHRENHEIT_OFFSET, FAHRENHEIT_SCALE, KELVIN_OFFSET},
    constants::sensors::DEFAULT_COMPARE_PRECISION,
    unit::{Conversion, Unit},
};

use super::{utils, AnyUnit, MeasurementKind};

/// Temperature units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Celsius (storage unit)
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}

impl Unit for TemperatureUnit {
    fn conversion(self) -> Conversion {
        match self {
            Self::Celsius => Conversion::IDENTITY,
            Self::Fahrenheit => Conversion::affine(FAHRENHEIT_SCALE, FAHRENHEIT_OFFSET),
            Self::Kelvin => Conversion::affine(1.0, KELVIN_OFFSET),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    fn decimals(self) -> usize {
        1
    }

    fn all() -> &'static [Self] {
        &[Self::Celsius, Self::Fahrenheit, Self::Kelvin]
    }

    fn into_any(self) -> AnyUnit {
        AnyUnit::Temperature(self)
    }

    fn from_any(unit: AnyUnit) -> Option<Self> {
        match unit {
            AnyUnit::Temperature(unit) => Some(unit),
            _ => None,
        }
    }
}

measurement_kind! {
    /// Temperature, stored in degrees Celsius
    Temperature {
        kind: Temperature,
        unit: TemperatureUnit,
        canonical: TemperatureUnit::Celsius,
        precision: DEFAULT_COMPARE_PRECISION,
        validate: |value| utils::check_finite(MeasurementKind::Temperature, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::{Measurement, Pressure};
    use crate::AnyMeasurement;
    use crate::MeasurementError;

    #[test]
    fn converts_between_scales() {
        let boiling = Temperature::new(212.0, TemperatureUnit::Fahrenheit).unwrap();
        assert!((boiling.canonical() - 100.0).abs() < 1e-9);
        assert!((boiling.get_in(TemperatureUnit::Kelvin) - 373.15).abs() < 1e-9);

        let freezing = Temperature::new(273.15, TemperatureUnit::Kelvin).unwrap();
        assert!(freezing.canonical().abs() < 1e-9);
        assert!((freezing.get_in(TemperatureUnit::Fahrenheit) - 32.0).abs() < 1e-9);
    }

    #[test]
    fn kelvin_zero_is_absolute_zero() {
        let zero = Temperature::new(0.0, TemperatureUnit::Kelvin).unwrap();
        assert!((zero.canonical() - crate::constants::physics::ABSOLUTE_ZERO_CELSIUS).abs() < 1e-9);
    }

    #[test]
    fn no_range_restriction() {
        assert!(Temperature::from_canonical(-89.2).is_ok());
        assert!(Temperature::from_canonical(1200.0).is_ok());
    }

    #[test]
    fn arithmetic_in_celsius() {
        let a = Temperature::new(50.0, TemperatureUnit::Fahrenheit).unwrap();
        let b = Temperature::from_canonical(5.0).unwrap();
        assert_eq!(a.add(&b).unwrap(), Temperature::from_canonical(15.0).unwrap());
        assert_eq!(a.subtract(&b).unwrap(), Temperature::from_canonical(5.0).unwrap());
    }

    #[test]
    fn mixing_kinds_fails_but_comparing_does_not() {
        let t: AnyMeasurement = Temperature::from_canonical(10.0).unwrap().into();
        let p: AnyMeasurement = Pressure::from_canonical(10.0).unwrap().into();

        assert_eq!(
            t.add(&p),
            Err(MeasurementError::KindMismatch {
                expected: MeasurementKind::Temperature,
                found: MeasurementKind::Pressure,
            })
        );
        assert!(t != p);
    }

    #[test]
    fn formatting() {
        let t = Temperature::from_canonical(21.46).unwrap();
        assert_eq!(t.format_in(TemperatureUnit::Celsius), "21.5");
        assert_eq!(t.format_with_unit(TemperatureUnit::Fahrenheit), "70.6 °F");
        assert_eq!(alloc::format!("{}", t), "21.5 °C");
    }
}
