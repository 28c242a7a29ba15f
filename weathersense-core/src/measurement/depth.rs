//! Depth, distance, and rainfall
//!
//! Three kinds share one unit family stored in millimeters. They stay
//! separate kinds (a rain total is not an altitude) but each converts into the
//! others without loss. Their standard display units differ: depth in
//! millimeters, distance in meters, rainfall in inches.

use crate::{
    constants::physics::{MILLIMETERS_PER_FOOT, MILLIMETERS_PER_INCH, MILLIMETERS_PER_METER},
    constants::sensors::DEFAULT_COMPARE_PRECISION,
    unit::{Conversion, Unit},
};

use super::{utils, AnyUnit, MeasurementKind};

/// Length units shared by [`Depth`], [`Distance`] and [`Rainfall`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DepthUnit {
    /// Millimeters (storage unit)
    Millimeters,
    /// Centimeters
    Centimeters,
    /// Meters
    Meters,
    /// Kilometers
    Kilometers,
    /// Inches
    Inches,
    /// Feet
    Feet,
}

impl Unit for DepthUnit {
    fn conversion(self) -> Conversion {
        match self {
            Self::Millimeters => Conversion::IDENTITY,
            Self::Centimeters => Conversion::scaled(0.1),
            Self::Meters => Conversion::scaled(1.0 / MILLIMETERS_PER_METER),
            Self::Kilometers => Conversion::scaled(1.0e-6),
            Self::Inches => Conversion::scaled(1.0 / MILLIMETERS_PER_INCH),
            Self::Feet => Conversion::scaled(1.0 / MILLIMETERS_PER_FOOT),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Inches => "in",
            Self::Feet => "ft",
        }
    }

    fn decimals(self) -> usize {
        match self {
            Self::Millimeters | Self::Kilometers => 1,
            Self::Centimeters | Self::Inches => 2,
            Self::Meters | Self::Feet => 3,
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Millimeters,
            Self::Centimeters,
            Self::Meters,
            Self::Kilometers,
            Self::Inches,
            Self::Feet,
        ]
    }

    fn into_any(self) -> AnyUnit {
        AnyUnit::Depth(self)
    }

    fn from_any(unit: AnyUnit) -> Option<Self> {
        match unit {
            AnyUnit::Depth(unit) => Some(unit),
            _ => None,
        }
    }
}

measurement_kind! {
    /// Generic depth, stored in millimeters
    Depth {
        kind: Depth,
        unit: DepthUnit,
        canonical: DepthUnit::Millimeters,
        precision: DEFAULT_COMPARE_PRECISION,
        validate: |value| utils::check_finite(MeasurementKind::Depth, value),
    }
}

measurement_kind! {
    /// Distance or altitude, stored in millimeters
    Distance {
        kind: Distance,
        unit: DepthUnit,
        canonical: DepthUnit::Millimeters,
        precision: DEFAULT_COMPARE_PRECISION,
        validate: |value| utils::check_finite(MeasurementKind::Distance, value),
    }
}

measurement_kind! {
    /// Rain accumulation, stored in millimeters
    Rainfall {
        kind: Rainfall,
        unit: DepthUnit,
        canonical: DepthUnit::Millimeters,
        precision: DEFAULT_COMPARE_PRECISION,
        validate: |value| utils::check_finite(MeasurementKind::Rainfall, value),
    }
}

macro_rules! same_family {
    ($($from:ident => $to:ident),+ $(,)?) => {
        $(
            impl From<$from> for $to {
                fn from(value: $from) -> Self {
                    Self(value.0)
                }
            }
        )+
    };
}

same_family! {
    Depth => Distance,
    Depth => Rainfall,
    Distance => Depth,
    Distance => Rainfall,
    Rainfall => Depth,
    Rainfall => Distance,
}
