//! Leaf wetness index
//!
//! Leaf wetness sensors report an index from 0 (dry) to 15 (saturated).
//! Readings arrive as integers, but averages of the index are fractional, so
//! the stored value is an `f64` like every other kind.

use crate::{
    constants::sensors::{LEAF_WETNESS_MAX, LEAF_WETNESS_MIN, WHOLE_COMPARE_PRECISION},
    unit::{Conversion, Unit},
};

use super::{utils, AnyUnit, MeasurementKind};

/// Leaf wetness units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LeafWetnessUnit {
    /// Dimensionless index, 0 to 15
    Index,
}

impl Unit for LeafWetnessUnit {
    fn conversion(self) -> Conversion {
        Conversion::IDENTITY
    }

    fn label(self) -> &'static str {
        ""
    }

    fn decimals(self) -> usize {
        0
    }

    fn all() -> &'static [Self] {
        &[Self::Index]
    }

    fn into_any(self) -> AnyUnit {
        AnyUnit::LeafWetness(self)
    }

    fn from_any(unit: AnyUnit) -> Option<Self> {
        match unit {
            AnyUnit::LeafWetness(unit) => Some(unit),
            _ => None,
        }
    }
}

measurement_kind! {
    /// Leaf wetness index within `[0, 15]`
    LeafWetness {
        kind: LeafWetness,
        unit: LeafWetnessUnit,
        canonical: LeafWetnessUnit::Index,
        precision: WHOLE_COMPARE_PRECISION,
        validate: |value| utils::check_range(
            MeasurementKind::LeafWetness,
            value,
            LEAF_WETNESS_MIN,
            LEAF_WETNESS_MAX,
        ),
    }
}

impl LeafWetness {
    /// Dry leaf
    pub const MIN: LeafWetness = LeafWetness(LEAF_WETNESS_MIN);

    /// Saturated leaf
    pub const MAX: LeafWetness = LeafWetness(LEAF_WETNESS_MAX);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Measurement;

    #[test]
    fn index_range() {
        assert_eq!(LeafWetness::from_canonical(15.0).unwrap(), LeafWetness::MAX);
        assert!(LeafWetness::from_canonical(15.5).is_err());
        assert!(LeafWetness::from_canonical(-1.0).is_err());
        // No label, the index stands alone
        assert_eq!(LeafWetness::MIN.format_with_unit(LeafWetnessUnit::Index), "0");
    }
}
