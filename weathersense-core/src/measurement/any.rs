//! Kind-erased measurements and units
//!
//! The typed newtypes cover code that knows what it is holding. Archive rows,
//! summary tables and configuration files do not, so they go through these
//! closed sum types instead. Mixing kinds here is a runtime
//! [`MeasurementError::KindMismatch`] rather than a compile error.

use alloc::string::String;
use core::fmt;

use crate::{
    errors::{MeasurementError, MeasurementResult},
    registry::UnitRegistry,
    unit::Unit,
};

use super::{
    Depth, DepthUnit, Distance, Heading, HeadingUnit, Humidity, HumidityUnit, LeafWetness,
    LeafWetnessUnit, Measurement, MeasurementKind, Pressure, PressureUnit, Rainfall,
    SoilMoisture, SoilMoistureUnit, SolarRadiation, SolarRadiationUnit, Speed, SpeedUnit,
    Temperature, TemperatureUnit,
};

/// A unit of any family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnyUnit {
    /// Temperature units
    Temperature(TemperatureUnit),
    /// Pressure units
    Pressure(PressureUnit),
    /// Length units, shared by depth, distance and rainfall
    Depth(DepthUnit),
    /// Speed units
    Speed(SpeedUnit),
    /// Relative humidity
    Humidity(HumidityUnit),
    /// Solar radiation
    SolarRadiation(SolarRadiationUnit),
    /// Soil moisture
    SoilMoisture(SoilMoistureUnit),
    /// Heading
    Heading(HeadingUnit),
    /// Leaf wetness index
    LeafWetness(LeafWetnessUnit),
}

macro_rules! with_unit {
    ($any:expr, $unit:ident => $body:expr) => {
        match $any {
            AnyUnit::Temperature($unit) => $body,
            AnyUnit::Pressure($unit) => $body,
            AnyUnit::Depth($unit) => $body,
            AnyUnit::Speed($unit) => $body,
            AnyUnit::Humidity($unit) => $body,
            AnyUnit::SolarRadiation($unit) => $body,
            AnyUnit::SoilMoisture($unit) => $body,
            AnyUnit::Heading($unit) => $body,
            AnyUnit::LeafWetness($unit) => $body,
        }
    };
}

impl AnyUnit {
    /// Display label
    pub fn label(self) -> &'static str {
        with_unit!(self, unit => unit.label())
    }

    /// Convert a value in this unit to its family's canonical unit
    pub fn to_canonical(self, value: f64) -> f64 {
        with_unit!(self, unit => unit.to_canonical(value))
    }

    /// Convert a canonical value to this unit
    pub fn from_canonical(self, value: f64) -> f64 {
        with_unit!(self, unit => unit.from_canonical(value))
    }

    /// Format a value expressed in this unit
    pub fn format(self, value: f64) -> String {
        with_unit!(self, unit => unit.format(value))
    }

    /// Format a value expressed in this unit, with label
    pub fn format_with_unit(self, value: f64) -> String {
        with_unit!(self, unit => unit.format_with_unit(value))
    }

    /// True if this unit measures `kind`
    pub fn serves(self, kind: MeasurementKind) -> bool {
        use MeasurementKind as K;
        matches!(
            (self, kind),
            (Self::Temperature(_), K::Temperature)
                | (Self::Pressure(_), K::Pressure)
                | (Self::Depth(_), K::Depth | K::Distance | K::Rainfall)
                | (Self::Speed(_), K::Speed)
                | (Self::Humidity(_), K::Humidity)
                | (Self::SolarRadiation(_), K::SolarRadiation)
                | (Self::SoilMoisture(_), K::SoilMoisture)
                | (Self::Heading(_), K::Heading)
                | (Self::LeafWetness(_), K::LeafWetness)
        )
    }

    /// Storage unit of `kind`
    pub fn canonical_for(kind: MeasurementKind) -> AnyUnit {
        match kind {
            MeasurementKind::Temperature => Temperature::CANONICAL_UNIT.into_any(),
            MeasurementKind::Pressure => Pressure::CANONICAL_UNIT.into_any(),
            MeasurementKind::Depth => Depth::CANONICAL_UNIT.into_any(),
            MeasurementKind::Distance => Distance::CANONICAL_UNIT.into_any(),
            MeasurementKind::Rainfall => Rainfall::CANONICAL_UNIT.into_any(),
            MeasurementKind::Speed => Speed::CANONICAL_UNIT.into_any(),
            MeasurementKind::Humidity => Humidity::CANONICAL_UNIT.into_any(),
            MeasurementKind::SolarRadiation => SolarRadiation::CANONICAL_UNIT.into_any(),
            MeasurementKind::SoilMoisture => SoilMoisture::CANONICAL_UNIT.into_any(),
            MeasurementKind::Heading => Heading::CANONICAL_UNIT.into_any(),
            MeasurementKind::LeafWetness => LeafWetness::CANONICAL_UNIT.into_any(),
        }
    }

    /// Find the unit of `kind` whose label is `label`
    pub fn parse(kind: MeasurementKind, label: &str) -> Option<AnyUnit> {
        match Self::canonical_for(kind) {
            Self::Temperature(_) => TemperatureUnit::from_label(label).map(Self::Temperature),
            Self::Pressure(_) => PressureUnit::from_label(label).map(Self::Pressure),
            Self::Depth(_) => DepthUnit::from_label(label).map(Self::Depth),
            Self::Speed(_) => SpeedUnit::from_label(label).map(Self::Speed),
            Self::Humidity(_) => HumidityUnit::from_label(label).map(Self::Humidity),
            Self::SolarRadiation(_) => SolarRadiationUnit::from_label(label).map(Self::SolarRadiation),
            Self::SoilMoisture(_) => SoilMoistureUnit::from_label(label).map(Self::SoilMoisture),
            Self::Heading(_) => HeadingUnit::from_label(label).map(Self::Heading),
            // The index has an empty label, accept its name too
            Self::LeafWetness(_) => match label {
                "index" => Some(Self::LeafWetness(LeafWetnessUnit::Index)),
                _ => LeafWetnessUnit::from_label(label).map(Self::LeafWetness),
            },
        }
    }
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

macro_rules! any_measurement {
    ($($kind:ident),+ $(,)?) => {
        /// A measurement of any kind
        #[derive(Debug, Clone, Copy)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum AnyMeasurement {
            $(
                #[allow(missing_docs)]
                $kind($kind),
            )+
        }

        impl AnyMeasurement {
            /// Kind tag
            pub fn kind(&self) -> MeasurementKind {
                match self {
                    $(Self::$kind(_) => MeasurementKind::$kind,)+
                }
            }

            /// Stored value in the kind's canonical unit
            pub fn canonical(&self) -> f64 {
                match self {
                    $(Self::$kind(m) => m.canonical(),)+
                }
            }

            /// Precision-rounded equality key of the wrapped value
            pub fn compare_key(&self) -> i64 {
                match self {
                    $(Self::$kind(m) => m.compare_key(),)+
                }
            }

            /// Zero of `kind`
            pub fn zero_of(kind: MeasurementKind) -> Self {
                match kind {
                    $(MeasurementKind::$kind => Self::$kind($kind::zero()),)+
                }
            }

            /// Build a measurement of `kind` from a canonical value
            pub fn from_canonical(kind: MeasurementKind, value: f64) -> MeasurementResult<Self> {
                match kind {
                    $(MeasurementKind::$kind => $kind::from_canonical(value).map(Self::$kind),)+
                }
            }

            fn same_kind(&self, other: &Self) -> bool {
                matches!((self, other), $((Self::$kind(_), Self::$kind(_)))|+)
            }
        }

        impl fmt::Display for AnyMeasurement {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$kind(m) => fmt::Display::fmt(m, f),)+
                }
            }
        }

        $(
            impl From<$kind> for AnyMeasurement {
                fn from(value: $kind) -> Self {
                    Self::$kind(value)
                }
            }

            impl TryFrom<AnyMeasurement> for $kind {
                type Error = MeasurementError;

                fn try_from(value: AnyMeasurement) -> Result<Self, Self::Error> {
                    match value {
                        AnyMeasurement::$kind(m) => Ok(m),
                        other => Err(MeasurementError::KindMismatch {
                            expected: MeasurementKind::$kind,
                            found: other.kind(),
                        }),
                    }
                }
            }
        )+
    };
}

any_measurement! {
    Temperature,
    Pressure,
    Depth,
    Distance,
    Rainfall,
    Speed,
    Humidity,
    SolarRadiation,
    SoilMoisture,
    Heading,
    LeafWetness,
}

impl AnyMeasurement {
    /// Sum of two measurements of the same kind
    ///
    /// # Errors
    ///
    /// `KindMismatch` when the kinds differ, or the kind's own range error.
    pub fn add(&self, other: &Self) -> MeasurementResult<Self> {
        self.check_kind(other)?;
        Self::from_canonical(self.kind(), self.canonical() + other.canonical())
    }

    /// Difference of two measurements of the same kind
    pub fn subtract(&self, other: &Self) -> MeasurementResult<Self> {
        self.check_kind(other)?;
        Self::from_canonical(self.kind(), self.canonical() - other.canonical())
    }

    /// Value converted to `unit`
    ///
    /// # Errors
    ///
    /// `UnitMismatch` when `unit` does not measure this kind.
    pub fn get_in(&self, unit: AnyUnit) -> MeasurementResult<f64> {
        if unit.serves(self.kind()) {
            Ok(unit.from_canonical(self.canonical()))
        } else {
            Err(MeasurementError::UnitMismatch { kind: self.kind(), unit: unit.label() })
        }
    }

    /// Format in `unit`, with label
    pub fn format_with_unit(&self, unit: AnyUnit) -> MeasurementResult<String> {
        self.get_in(unit).map(|value| unit.format_with_unit(value))
    }

    /// Value in the configured default unit
    pub fn get(&self, units: &UnitRegistry) -> Option<f64> {
        units
            .default_unit(self.kind())
            .map(|unit| unit.from_canonical(self.canonical()))
    }

    /// Format in the configured default unit, with label
    pub fn format(&self, units: &UnitRegistry) -> Option<String> {
        units
            .default_unit(self.kind())
            .map(|unit| unit.format_with_unit(unit.from_canonical(self.canonical())))
    }

    fn check_kind(&self, other: &Self) -> MeasurementResult<()> {
        if self.same_kind(other) {
            Ok(())
        } else {
            Err(MeasurementError::KindMismatch { expected: self.kind(), found: other.kind() })
        }
    }
}

// Different kinds are unequal, never an error
impl PartialEq for AnyMeasurement {
    fn eq(&self, other: &Self) -> bool {
        self.same_kind(other) && self.compare_key() == other.compare_key()
    }
}

impl Eq for AnyMeasurement {}

impl core::hash::Hash for AnyMeasurement {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.compare_key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_families_serve_their_kinds() {
        let mm = AnyUnit::Depth(DepthUnit::Millimeters);
        assert!(mm.serves(MeasurementKind::Depth));
        assert!(mm.serves(MeasurementKind::Rainfall));
        assert!(mm.serves(MeasurementKind::Distance));
        assert!(!mm.serves(MeasurementKind::Pressure));

        for kind in MeasurementKind::ALL {
            assert!(AnyUnit::canonical_for(kind).serves(kind));
            assert_eq!(AnyUnit::canonical_for(kind).from_canonical(12.5), 12.5);
        }
    }

    #[test]
    fn parse_labels() {
        assert_eq!(
            AnyUnit::parse(MeasurementKind::Pressure, "inHg"),
            Some(AnyUnit::Pressure(PressureUnit::InchesOfMercury))
        );
        assert_eq!(
            AnyUnit::parse(MeasurementKind::Rainfall, "in"),
            Some(AnyUnit::Depth(DepthUnit::Inches))
        );
        assert_eq!(
            AnyUnit::parse(MeasurementKind::LeafWetness, "index"),
            Some(AnyUnit::LeafWetness(LeafWetnessUnit::Index))
        );
        assert_eq!(AnyUnit::parse(MeasurementKind::Temperature, "mb"), None);
    }

    #[test]
    fn kind_erased_arithmetic() {
        let a = AnyMeasurement::from_canonical(MeasurementKind::Rainfall, 2.5).unwrap();
        let b: AnyMeasurement = Rainfall::from_canonical(1.5).unwrap().into();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.kind(), MeasurementKind::Rainfall);
        assert_eq!(sum.canonical(), 4.0);

        let depth: AnyMeasurement = Depth::from_canonical(1.5).unwrap().into();
        assert_eq!(
            a.subtract(&depth),
            Err(MeasurementError::KindMismatch {
                expected: MeasurementKind::Rainfall,
                found: MeasurementKind::Depth,
            })
        );
        // Same canonical value, different kind
        assert_ne!(b, depth);
    }

    #[test]
    fn range_rules_still_apply() {
        let a: AnyMeasurement = Humidity::from_canonical(70.0).unwrap().into();
        let b: AnyMeasurement = Humidity::from_canonical(40.0).unwrap().into();
        assert!(matches!(a.add(&b), Err(MeasurementError::OutOfRange { .. })));
        assert!(AnyMeasurement::from_canonical(MeasurementKind::Speed, -3.0).is_err());
    }

    #[test]
    fn typed_round_trip() {
        let any: AnyMeasurement = Speed::from_canonical(4.2).unwrap().into();
        let speed = Speed::try_from(any).unwrap();
        assert_eq!(speed.canonical(), 4.2);
        assert!(matches!(
            Temperature::try_from(any),
            Err(MeasurementError::KindMismatch { expected: MeasurementKind::Temperature, .. })
        ));
    }

    #[test]
    fn conversions_check_the_unit() {
        let t: AnyMeasurement = Temperature::from_canonical(100.0).unwrap().into();
        let f = t.get_in(AnyUnit::Temperature(TemperatureUnit::Fahrenheit)).unwrap();
        assert!((f - 212.0).abs() < 1e-9);
        assert_eq!(
            t.get_in(AnyUnit::Pressure(PressureUnit::Millibar)),
            Err(MeasurementError::UnitMismatch { kind: MeasurementKind::Temperature, unit: "mb" })
        );

        let units = UnitRegistry::standard();
        assert_eq!(t.format(&units).as_deref(), Some("100.0 °C"));
        assert_eq!(t.get(&UnitRegistry::new()), None);
    }
}
