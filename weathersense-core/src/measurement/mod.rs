//! Typed Weather Measurements
//!
//! ## Overview
//!
//! A measurement is an immutable `f64` stored in its kind's canonical unit.
//! Every kind (temperature, pressure, wind speed, ...) is its own newtype, so
//! the compiler refuses to add a pressure to a temperature. Code that handles
//! readings generically (archive records, summaries) uses the kind-erased
//! [`AnyMeasurement`], where the same mistake is a [`MeasurementError::KindMismatch`].
//!
//! ## Canonical Units and Precision
//!
//! | Kind           | Canonical unit | Valid range     | Compare precision |
//! |----------------|----------------|-----------------|-------------------|
//! | Temperature    | °C             | any             | 1                 |
//! | Pressure       | mb             | any             | 1                 |
//! | Depth family   | mm             | any             | 1                 |
//! | Speed          | m/s            | ≥ 0             | 2                 |
//! | Humidity       | %              | [0, 100]        | 1                 |
//! | SolarRadiation | W/m²           | any             | 0                 |
//! | SoilMoisture   | cb             | any             | 1                 |
//! | Heading        | degrees        | folded to [0, 360) | 1              |
//! | LeafWetness    | index          | [0, 15]         | 0                 |
//!
//! ## Equality and Ordering
//!
//! Two measurements of a kind are equal when their canonical values agree
//! after rounding to the kind's compare precision. Ordering and hashing use
//! the same rounded key, so `a == b` exactly when `a.cmp(&b)` is `Equal`.
//! [`Measurement::compare_raw`] orders by the unrounded value.
//!
//! ## Display Units
//!
//! Which unit a person sees is configuration, held by a
//! [`UnitRegistry`](crate::registry::UnitRegistry) passed to [`Measurement::get`]
//! and [`Measurement::format`].
//!
//! ```rust
//! use weathersense_core::{Measurement, Temperature, TemperatureUnit, UnitRegistry};
//!
//! let mut units = UnitRegistry::standard();
//! let outside = Temperature::new(68.0, TemperatureUnit::Fahrenheit)?;
//! assert_eq!(outside.format(&units).as_deref(), Some("20.0 °C"));
//!
//! units.set::<Temperature>(TemperatureUnit::Fahrenheit);
//! assert_eq!(outside.get(&units), Some(68.0));
//! # Ok::<(), weathersense_core::MeasurementError>(())
//! ```

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

use crate::{
    errors::MeasurementResult,
    registry::UnitRegistry,
    unit::Unit,
};

/// Declares a measurement newtype and its trait plumbing.
///
/// `validate` maps a canonical value to the stored value or an error; it is
/// where range checks and heading normalization live.
macro_rules! measurement_kind {
    (
        $(#[$meta:meta])*
        $name:ident {
            kind: $kind:ident,
            unit: $unit:ty,
            canonical: $canonical:expr,
            precision: $precision:expr,
            validate: $validate:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
        pub struct $name(f64);

        impl $crate::measurement::Measurement for $name {
            type Unit = $unit;
            const KIND: $crate::measurement::MeasurementKind = $crate::measurement::MeasurementKind::$kind;
            const COMPARE_PRECISION: i32 = $precision;
            const CANONICAL_UNIT: $unit = $canonical;

            fn from_canonical(value: f64) -> $crate::errors::MeasurementResult<Self> {
                let validate: fn(f64) -> $crate::errors::MeasurementResult<f64> = $validate;
                validate(value).map(Self)
            }

            #[inline]
            fn canonical(&self) -> f64 {
                self.0
            }

            #[inline]
            fn zero() -> Self {
                Self(0.0)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                use $crate::measurement::Measurement;
                self.compare_key() == other.compare_key()
            }
        }

        impl Eq for $name {}

        impl core::hash::Hash for $name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                use $crate::measurement::Measurement;
                self.compare_key().hash(state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                use $crate::measurement::Measurement;
                self.compare_key().cmp(&other.compare_key())
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                use $crate::measurement::Measurement;
                use $crate::unit::Unit;
                f.write_str(&Self::CANONICAL_UNIT.format_with_unit(self.0))
            }
        }

        impl TryFrom<f64> for $name {
            type Error = $crate::errors::MeasurementError;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                <Self as $crate::measurement::Measurement>::from_canonical(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> f64 {
                value.0
            }
        }
    };
}

mod any;
mod depth;
mod heading;
mod humidity;
mod leaf_wetness;
mod pressure;
mod soil_moisture;
mod solar_radiation;
mod speed;
mod temperature;
mod uv_index;
pub mod utils;

pub use any::{AnyMeasurement, AnyUnit};
pub use depth::{Depth, DepthUnit, Distance, Rainfall};
pub use heading::{CompareMode, Heading, HeadingUnit};
pub use humidity::{Humidity, HumidityUnit};
pub use leaf_wetness::{LeafWetness, LeafWetnessUnit};
pub use pressure::{Pressure, PressureUnit};
pub use soil_moisture::{SoilMoisture, SoilMoistureUnit};
pub use solar_radiation::{SolarRadiation, SolarRadiationUnit};
pub use speed::{Speed, SpeedUnit};
pub use temperature::{Temperature, TemperatureUnit};
pub use uv_index::UvIndex;

/// Closed set of measurement kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasurementKind {
    /// Air, soil, or water temperature
    Temperature,
    /// Barometric pressure
    Pressure,
    /// Snow, water, or generic depth
    Depth,
    /// Altitude and other distances
    Distance,
    /// Rain accumulation
    Rainfall,
    /// Wind speed
    Speed,
    /// Relative humidity
    Humidity,
    /// Solar radiation
    SolarRadiation,
    /// Soil moisture tension
    SoilMoisture,
    /// Wind direction
    Heading,
    /// Leaf wetness index
    LeafWetness,
}

impl MeasurementKind {
    /// Number of kinds
    pub const COUNT: usize = 11;

    /// Every kind, in declaration order
    pub const ALL: [MeasurementKind; Self::COUNT] = [
        Self::Temperature,
        Self::Pressure,
        Self::Depth,
        Self::Distance,
        Self::Rainfall,
        Self::Speed,
        Self::Humidity,
        Self::SolarRadiation,
        Self::SoilMoisture,
        Self::Heading,
        Self::LeafWetness,
    ];

    /// Human readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Pressure => "Pressure",
            Self::Depth => "Depth",
            Self::Distance => "Distance",
            Self::Rainfall => "Rainfall",
            Self::Speed => "Speed",
            Self::Humidity => "Humidity",
            Self::SolarRadiation => "SolarRadiation",
            Self::SoilMoisture => "SoilMoisture",
            Self::Heading => "Heading",
            Self::LeafWetness => "LeafWetness",
        }
    }

    /// Position in [`MeasurementKind::ALL`]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look a kind up by [`name`](Self::name)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// The zero value of this kind
    pub fn zero(self) -> AnyMeasurement {
        AnyMeasurement::zero_of(self)
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Behavior shared by every measurement kind
///
/// Implemented by the `measurement_kind!` newtypes; the only required
/// methods are the canonical constructor, the accessor, and `zero`.
pub trait Measurement:
    Copy + fmt::Debug + Eq + Ord + core::hash::Hash + Into<AnyMeasurement> + 'static
{
    /// Unit family of this kind
    type Unit: Unit;

    /// Kind tag
    const KIND: MeasurementKind;

    /// Decimal digits kept when comparing for equality
    const COMPARE_PRECISION: i32;

    /// Storage unit; converting to and from it is the identity
    const CANONICAL_UNIT: Self::Unit;

    /// Build from a value in the canonical unit, applying the kind's rules
    fn from_canonical(value: f64) -> MeasurementResult<Self>;

    /// Stored value in the canonical unit
    fn canonical(&self) -> f64;

    /// Canonical zero of this kind
    fn zero() -> Self;

    /// Build from a value expressed in `unit`
    fn new(value: f64, unit: Self::Unit) -> MeasurementResult<Self> {
        let value = utils::check_finite(Self::KIND, value)?;
        Self::from_canonical(unit.to_canonical(value))
    }

    /// Build from a value in the configured default unit
    ///
    /// Falls back to the canonical unit when `units` has no default for this kind.
    fn in_default_unit(value: f64, units: &UnitRegistry) -> MeasurementResult<Self> {
        let unit = units.unit_for::<Self>().unwrap_or(Self::CANONICAL_UNIT);
        Self::new(value, unit)
    }

    /// Value in the configured default unit, `None` if none is configured
    fn get(&self, units: &UnitRegistry) -> Option<f64> {
        units
            .unit_for::<Self>()
            .map(|unit| unit.from_canonical(self.canonical()))
    }

    /// Value converted to `unit`
    fn get_in(&self, unit: Self::Unit) -> f64 {
        unit.from_canonical(self.canonical())
    }

    /// Sum in canonical units
    fn add(&self, other: &Self) -> MeasurementResult<Self> {
        Self::from_canonical(self.canonical() + other.canonical())
    }

    /// Difference in canonical units
    fn subtract(&self, other: &Self) -> MeasurementResult<Self> {
        Self::from_canonical(self.canonical() - other.canonical())
    }

    /// Format in `unit`, without label
    fn format_in(&self, unit: Self::Unit) -> String {
        unit.format(self.get_in(unit))
    }

    /// Format in `unit`, followed by its label
    fn format_with_unit(&self, unit: Self::Unit) -> String {
        unit.format_with_unit(self.get_in(unit))
    }

    /// Format in the configured default unit, with label
    fn format(&self, units: &UnitRegistry) -> Option<String> {
        units
            .unit_for::<Self>()
            .map(|unit| self.format_with_unit(unit))
    }

    /// Precision-rounded key behind `Eq`, `Ord` and `Hash`
    fn compare_key(&self) -> i64 {
        utils::compare_key(self.canonical(), Self::COMPARE_PRECISION)
    }

    /// Order by the unrounded canonical value
    fn compare_raw(&self, other: &Self) -> Ordering {
        self.canonical().total_cmp(&other.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in MeasurementKind::ALL {
            assert_eq!(MeasurementKind::from_name(kind.name()), Some(kind));
            assert_eq!(MeasurementKind::ALL[kind.index()], kind);
        }
        assert_eq!(MeasurementKind::from_name("Luminosity"), None);
    }

    #[test]
    fn every_kind_has_a_zero() {
        for kind in MeasurementKind::ALL {
            let zero = kind.zero();
            assert_eq!(zero.kind(), kind);
            assert_eq!(zero.canonical(), 0.0);
        }
    }

    #[test]
    fn equality_follows_precision() {
        // precision 1: 20.03 and 20.04 both round to 200
        let a = Temperature::from_canonical(20.03).unwrap();
        let b = Temperature::from_canonical(20.04).unwrap();
        let c = Temperature::from_canonical(20.06).unwrap();
        assert_eq!(a, b);
        assert_ne!(b, c);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.compare_raw(&b), Ordering::Less);
        assert!(b < c);
    }

    #[test]
    fn nan_rejected_before_conversion() {
        assert!(Temperature::new(f64::NAN, TemperatureUnit::Fahrenheit).is_err());
        assert!(Pressure::new(f64::INFINITY, PressureUnit::InchesOfMercury).is_err());
    }

    #[test]
    fn default_unit_lookup() {
        let empty = UnitRegistry::new();
        let t = Temperature::from_canonical(25.0).unwrap();
        assert_eq!(t.get(&empty), None);
        assert_eq!(t.format(&empty), None);

        let units = UnitRegistry::standard();
        assert_eq!(t.get(&units), Some(25.0));
        assert_eq!(t.get_in(TemperatureUnit::Fahrenheit), 77.0);

        // Unconfigured kind constructs through the canonical unit
        let d = Distance::in_default_unit(3.0, &empty).unwrap();
        assert_eq!(d.canonical(), 3.0);
        let d = Distance::in_default_unit(3.0, &units).unwrap();
        assert!((d.canonical() - 3000.0).abs() < 1e-9);
    }
}
