//! Unit preferences file
//!
//! Stations keep their display units in a small JSON object mapping kind
//! names to unit labels:
//!
//! ```json
//! { "Temperature": "°F", "Pressure": "inHg", "Rainfall": "in" }
//! ```
//!
//! Kinds missing from the file keep whatever the registry already had. An
//! unknown kind name is skipped with a warning so older builds can read newer
//! files; an unknown unit label is an error.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::{
    errors::MeasurementError,
    measurement::{AnyUnit, MeasurementKind},
    registry::UnitRegistry,
};

/// Errors while reading or applying unit preferences
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("preferences I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a JSON object of strings
    #[error("preferences are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The registry refused a resolved unit
    #[error(transparent)]
    Measurement(#[from] MeasurementError),

    /// The label names no unit of the kind
    #[error("'{label}' is not a unit of {kind}")]
    UnknownUnit {
        /// Kind being configured
        kind: MeasurementKind,
        /// Label found in the file
        label: String,
    },
}

/// Kind name to unit label mapping, as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitPreferences {
    units: BTreeMap<String, String>,
}

impl UnitPreferences {
    /// Parse preferences from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read preferences from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write preferences to a file as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Snapshot every configured default of `registry`
    pub fn from_registry(registry: &UnitRegistry) -> Self {
        let units = registry
            .iter()
            .map(|(kind, unit)| (kind.name().to_string(), unit.label().to_string()))
            .collect();
        Self { units }
    }

    /// Unit label configured for `kind`, if any
    pub fn label(&self, kind: MeasurementKind) -> Option<&str> {
        self.units.get(kind.name()).map(String::as_str)
    }

    /// Set the label for `kind`
    pub fn insert(&mut self, kind: MeasurementKind, label: impl Into<String>) {
        self.units.insert(kind.name().to_string(), label.into());
    }

    /// Resolve every entry and store it in `registry`
    ///
    /// Nothing is written to `registry` unless every known kind resolves.
    pub fn apply(&self, registry: &mut UnitRegistry) -> Result<(), ConfigError> {
        let mut resolved = Vec::with_capacity(self.units.len());
        for (name, label) in &self.units {
            let Some(kind) = MeasurementKind::from_name(name) else {
                log_warn!("ignoring unit preference for unknown kind '{}'", name);
                continue;
            };
            let unit = AnyUnit::parse(kind, label)
                .ok_or_else(|| ConfigError::UnknownUnit { kind, label: label.clone() })?;
            resolved.push((kind, unit));
        }

        for (kind, unit) in resolved {
            registry.set_default_unit(kind, unit)?;
        }
        Ok(())
    }

    /// Standard registry with these preferences applied on top
    pub fn to_registry(&self) -> Result<UnitRegistry, ConfigError> {
        let mut registry = UnitRegistry::standard();
        self.apply(&mut registry)?;
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::{PressureUnit, TemperatureUnit};

    #[test]
    fn apply_overrides_listed_kinds() {
        let prefs = UnitPreferences::from_json(r#"{"Temperature": "°F", "Pressure": "inHg"}"#).unwrap();
        let registry = prefs.to_registry().unwrap();
        assert_eq!(
            registry.default_unit(MeasurementKind::Temperature),
            Some(AnyUnit::Temperature(TemperatureUnit::Fahrenheit))
        );
        assert_eq!(
            registry.default_unit(MeasurementKind::Pressure),
            Some(AnyUnit::Pressure(PressureUnit::InchesOfMercury))
        );
        // Untouched kinds keep the station default
        assert_eq!(registry.default_unit(MeasurementKind::Humidity), UnitRegistry::standard().default_unit(MeasurementKind::Humidity));
    }

    #[test]
    fn unknown_unit_leaves_registry_alone() {
        let prefs = UnitPreferences::from_json(r#"{"Pressure": "inHg", "Temperature": "Rankine"}"#).unwrap();
        let mut registry = UnitRegistry::new();
        let err = prefs.apply(&mut registry).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownUnit { kind: MeasurementKind::Temperature, .. }));
        assert_eq!(registry, UnitRegistry::new());
    }

    #[test]
    fn unknown_kind_is_skipped() {
        let prefs = UnitPreferences::from_json(r#"{"Luminosity": "lux", "Speed": "KTS"}"#).unwrap();
        let mut registry = UnitRegistry::new();
        prefs.apply(&mut registry).unwrap();
        assert_eq!(registry.iter().count(), 1);
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(UnitPreferences::from_json("[1, 2]"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn registry_snapshot_round_trips() {
        let mut registry = UnitRegistry::standard();
        registry.set_default_unit(MeasurementKind::Temperature, AnyUnit::Temperature(TemperatureUnit::Kelvin)).unwrap();

        let prefs = UnitPreferences::from_registry(&registry);
        assert_eq!(prefs.label(MeasurementKind::Temperature), Some("K"));

        let mut restored = UnitRegistry::new();
        prefs.apply(&mut restored).unwrap();
        assert_eq!(restored, registry);
    }
}
