//! Default Display Units
//!
//! Which unit a person sees for each kind is station configuration. The
//! registry is an explicit value owned by the caller and passed to
//! [`Measurement::get`] and [`Measurement::format`]; nothing is global.
//!
//! A kind with no configured unit reads as `None` rather than falling back
//! silently. [`UnitRegistry::standard`] carries the usual station setup.

use crate::{
    errors::{MeasurementError, MeasurementResult},
    measurement::{
        AnyUnit, DepthUnit, HeadingUnit, HumidityUnit, LeafWetnessUnit, Measurement,
        MeasurementKind, PressureUnit, SoilMoistureUnit, SolarRadiationUnit, SpeedUnit,
        TemperatureUnit,
    },
    unit::Unit,
};

/// Default unit per measurement kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RegistrySlots"))]
pub struct UnitRegistry {
    units: [Option<AnyUnit>; MeasurementKind::COUNT],
}

/// Unchecked wire form; every slot is replayed through `set_default_unit`
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RegistrySlots {
    units: [Option<AnyUnit>; MeasurementKind::COUNT],
}

#[cfg(feature = "serde")]
impl TryFrom<RegistrySlots> for UnitRegistry {
    type Error = MeasurementError;

    fn try_from(slots: RegistrySlots) -> MeasurementResult<Self> {
        let mut registry = Self::new();
        for (kind, unit) in MeasurementKind::ALL.into_iter().zip(slots.units) {
            if let Some(unit) = unit {
                registry.set_default_unit(kind, unit)?;
            }
        }
        Ok(registry)
    }
}

impl UnitRegistry {
    /// Registry with no defaults configured
    pub const fn new() -> Self {
        Self { units: [None; MeasurementKind::COUNT] }
    }

    /// Station defaults: metric everywhere except rainfall in inches
    pub fn standard() -> Self {
        let mut units = Self::new();
        let defaults = [
            (MeasurementKind::Temperature, AnyUnit::Temperature(TemperatureUnit::Celsius)),
            (MeasurementKind::Pressure, AnyUnit::Pressure(PressureUnit::Millibar)),
            (MeasurementKind::Depth, AnyUnit::Depth(DepthUnit::Millimeters)),
            (MeasurementKind::Distance, AnyUnit::Depth(DepthUnit::Meters)),
            (MeasurementKind::Rainfall, AnyUnit::Depth(DepthUnit::Inches)),
            (MeasurementKind::Speed, AnyUnit::Speed(SpeedUnit::MetersPerSecond)),
            (MeasurementKind::Humidity, AnyUnit::Humidity(HumidityUnit::RelativeHumidity)),
            (MeasurementKind::SolarRadiation, AnyUnit::SolarRadiation(SolarRadiationUnit::WattsPerSquareMeter)),
            (MeasurementKind::SoilMoisture, AnyUnit::SoilMoisture(SoilMoistureUnit::Centibar)),
            (MeasurementKind::Heading, AnyUnit::Heading(HeadingUnit::Degrees)),
            (MeasurementKind::LeafWetness, AnyUnit::LeafWetness(LeafWetnessUnit::Index)),
        ];
        for (kind, unit) in defaults {
            units.units[kind.index()] = Some(unit);
        }
        units
    }

    /// Set the default unit of `kind`
    ///
    /// # Errors
    ///
    /// `UnitMismatch` when `unit` belongs to a family that does not measure `kind`.
    pub fn set_default_unit(&mut self, kind: MeasurementKind, unit: AnyUnit) -> MeasurementResult<()> {
        if !unit.serves(kind) {
            return Err(MeasurementError::UnitMismatch { kind, unit: unit.label() });
        }
        log_debug!("default unit for {} set to {:?}", kind, unit);
        self.units[kind.index()] = Some(unit);
        Ok(())
    }

    /// Default unit of `kind`, `None` if never configured
    #[inline]
    pub fn default_unit(&self, kind: MeasurementKind) -> Option<AnyUnit> {
        self.units[kind.index()]
    }

    /// Typed form of [`set_default_unit`](Self::set_default_unit); cannot mismatch
    pub fn set<M: Measurement>(&mut self, unit: M::Unit) {
        log_debug!("default unit for {} set to {:?}", M::KIND, unit);
        self.units[M::KIND.index()] = Some(unit.into_any());
    }

    /// Typed default unit of `M`
    pub fn unit_for<M: Measurement>(&self) -> Option<M::Unit> {
        self.default_unit(M::KIND).and_then(M::Unit::from_any)
    }

    /// Forget the default unit of `kind`
    pub fn clear(&mut self, kind: MeasurementKind) {
        self.units[kind.index()] = None;
    }

    /// Configured `(kind, unit)` pairs in kind order
    pub fn iter(&self) -> impl Iterator<Item = (MeasurementKind, AnyUnit)> + '_ {
        MeasurementKind::ALL
            .iter()
            .zip(self.units.iter())
            .filter_map(|(kind, unit)| unit.map(|unit| (*kind, unit)))
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::{Rainfall, Temperature};

    #[test]
    fn empty_registry_has_no_defaults() {
        let units = UnitRegistry::new();
        for kind in MeasurementKind::ALL {
            assert_eq!(units.default_unit(kind), None);
        }
        assert_eq!(units.iter().count(), 0);
    }

    #[test]
    fn standard_covers_every_kind() {
        let units = UnitRegistry::default();
        assert_eq!(units.iter().count(), MeasurementKind::COUNT);
        for (kind, unit) in units.iter() {
            assert!(unit.serves(kind));
        }
        assert_eq!(units.unit_for::<Rainfall>(), Some(DepthUnit::Inches));
    }

    #[test]
    fn mismatched_family_rejected() {
        let mut units = UnitRegistry::new();
        let err = units
            .set_default_unit(MeasurementKind::Temperature, AnyUnit::Speed(SpeedUnit::Knots))
            .unwrap_err();
        assert_eq!(err, MeasurementError::UnitMismatch { kind: MeasurementKind::Temperature, unit: "KTS" });
        assert_eq!(units.default_unit(MeasurementKind::Temperature), None);

        units
            .set_default_unit(MeasurementKind::Distance, AnyUnit::Depth(DepthUnit::Feet))
            .unwrap();
        assert_eq!(units.default_unit(MeasurementKind::Distance), Some(AnyUnit::Depth(DepthUnit::Feet)));
    }

    #[cfg(feature = "std")]
    #[test]
    fn deserialize_replays_family_check() {
        let mut json = serde_json::to_value(UnitRegistry::standard()).unwrap();
        json["units"][MeasurementKind::Pressure.index()] =
            serde_json::to_value(AnyUnit::Temperature(TemperatureUnit::Kelvin)).unwrap();
        let err = serde_json::from_value::<UnitRegistry>(json).unwrap_err();
        assert!(err.to_string().contains("unit 'K' cannot be the default unit of Pressure"), "{err}");

        let mut json = serde_json::to_value(UnitRegistry::standard()).unwrap();
        json["units"][MeasurementKind::Heading.index()] = serde_json::Value::Null;
        let units: UnitRegistry = serde_json::from_value(json).unwrap();
        assert_eq!(units.default_unit(MeasurementKind::Heading), None);
        assert_eq!(units.unit_for::<Rainfall>(), Some(DepthUnit::Inches));
    }

    #[test]
    fn typed_set_and_clear() {
        let mut units = UnitRegistry::new();
        units.set::<Temperature>(TemperatureUnit::Kelvin);
        assert_eq!(units.unit_for::<Temperature>(), Some(TemperatureUnit::Kelvin));

        units.clear(MeasurementKind::Temperature);
        assert_eq!(units.unit_for::<Temperature>(), None);
    }

    #[test]
    fn registries_are_independent() {
        let mut imperial = UnitRegistry::standard();
        imperial.set::<Temperature>(TemperatureUnit::Fahrenheit);
        let metric = UnitRegistry::standard();
        assert_eq!(metric.unit_for::<Temperature>(), Some(TemperatureUnit::Celsius));
        assert_ne!(imperial, metric);
    }
}
