//! Wind Direction and Circular Comparison
//!
//! A heading is a bearing in degrees, always folded into `[0, 360)`. Every
//! construction path (including `add` and `subtract`) goes through the fold,
//! so `Heading(370)` is `Heading(10)` and `Heading(-10)` is `Heading(350)`.
//!
//! ## Betweenness
//!
//! Ranges of headings are arcs walked clockwise from `low` to `high`. When
//! `low > high` the arc crosses north:
//!
//! ```text
//!            N (0)
//!      350 ----+---- 10         low = 350, high = 10
//!             /|\               355 and 5 are inside,
//!            / | \              180 is not
//! ```
//!
//! The bounds are checked inclusively or exclusively per [`CompareMode`].
//!
//! Equality, ordering and hashing are not wrap-aware. They round the stored
//! degrees like every other kind, so `Heading(359.96)` and [`Heading::NORTH`]
//! compare unequal even though they are 0.04° apart. Use
//! [`Heading::is_between_arc`] to ask whether two bearings are close.
//!
//! ## Compass Points
//!
//! The 16-point compass splits the circle into 22.5° slices centered on each
//! point. A slice includes its upper bound and excludes its lower bound, so
//! 11.25° is still north.

use alloc::format;
use alloc::string::String;

use crate::{
    constants::physics::DEGREES_PER_CIRCLE,
    constants::sensors::DEFAULT_COMPARE_PRECISION,
    errors::{MeasurementError, MeasurementResult},
    unit::{Conversion, Unit},
};

use super::{utils, AnyUnit, Measurement, MeasurementKind};

const COMPASS_LABELS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE",
    "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW",
];

const COMPASS_SLICE_DEGREES: f64 = DEGREES_PER_CIRCLE / COMPASS_LABELS.len() as f64;

/// Heading units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeadingUnit {
    /// Degrees clockwise from north
    Degrees,
}

impl Unit for HeadingUnit {
    fn conversion(self) -> Conversion {
        Conversion::IDENTITY
    }

    fn label(self) -> &'static str {
        "°"
    }

    fn decimals(self) -> usize {
        0
    }

    fn all() -> &'static [Self] {
        &[Self::Degrees]
    }

    fn into_any(self) -> AnyUnit {
        AnyUnit::Heading(self)
    }

    fn from_any(unit: AnyUnit) -> Option<Self> {
        match unit {
            AnyUnit::Heading(unit) => Some(unit),
            _ => None,
        }
    }

    // Bearings read as three digits: 005, 045, 270
    fn format(self, value: f64) -> String {
        format!("{:03.0}", value)
    }

    fn format_with_unit(self, value: f64) -> String {
        format!("{}{}", self.format(value), self.label())
    }
}

/// Which bounds of a range count as inside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompareMode {
    /// `low <= h <= high`
    Inclusive,
    /// `low < h < high`
    NonInclusive,
    /// `low <= h < high`
    InclusiveNonInclusive,
    /// `low < h <= high`
    NonInclusiveInclusive,
}

impl CompareMode {
    fn contains(self, low: f64, value: f64, high: f64) -> bool {
        match self {
            Self::Inclusive => value >= low && value <= high,
            Self::NonInclusive => value > low && value < high,
            Self::InclusiveNonInclusive => value >= low && value < high,
            Self::NonInclusiveInclusive => value > low && value <= high,
        }
    }
}

measurement_kind! {
    /// Wind direction in degrees, folded into `[0, 360)`
    Heading {
        kind: Heading,
        unit: HeadingUnit,
        canonical: HeadingUnit::Degrees,
        precision: DEFAULT_COMPARE_PRECISION,
        validate: |value| utils::check_finite(MeasurementKind::Heading, value)
            .map(utils::normalize_degrees),
    }
}

impl Heading {
    /// Due north
    pub const NORTH: Heading = Heading(0.0);

    /// Heading for the start of slice `index` when the circle is cut into
    /// `slices` equal slices
    pub fn for_slice(index: usize, slices: usize) -> MeasurementResult<Self> {
        let per_slice = DEGREES_PER_CIRCLE / slices as f64;
        Self::from_canonical(per_slice * index as f64)
    }

    /// Rotate clockwise by `degrees`
    pub fn add_degrees(&self, degrees: f64) -> MeasurementResult<Self> {
        let degrees = utils::check_finite(MeasurementKind::Heading, degrees)?;
        Self::from_canonical(self.0 + degrees)
    }

    /// Rotate counter-clockwise by `degrees`
    pub fn subtract_degrees(&self, degrees: f64) -> MeasurementResult<Self> {
        self.add_degrees(-degrees)
    }

    /// True if this heading lies on the clockwise arc from `low` to `high`
    pub fn is_between(&self, low: &Heading, high: &Heading, mode: CompareMode) -> bool {
        self.between_unchecked(low.0, high.0, mode)
    }

    /// Same as [`is_between`](Self::is_between) with raw bounds
    ///
    /// # Errors
    ///
    /// `OutOfRange` if either bound lies outside `[0, 360)`.
    pub fn is_between_degrees(&self, low: f64, high: f64, mode: CompareMode) -> MeasurementResult<bool> {
        for bound in [low, high] {
            if !(0.0..DEGREES_PER_CIRCLE).contains(&bound) {
                return Err(MeasurementError::OutOfRange {
                    kind: MeasurementKind::Heading,
                    value: bound,
                    min: 0.0,
                    max: DEGREES_PER_CIRCLE,
                });
            }
        }
        Ok(self.between_unchecked(low, high, mode))
    }

    /// True if this heading lies within `arc` degrees centered on `center`
    pub fn is_between_arc(&self, center: &Heading, arc: f64, mode: CompareMode) -> bool {
        let half = arc / 2.0;
        let low = utils::normalize_degrees(center.0 - half);
        let high = utils::normalize_degrees(center.0 + half);
        self.between_unchecked(low, high, mode)
    }

    /// 16-point compass label ("N", "NNE", ... "NNW")
    pub fn compass_label(&self) -> &'static str {
        // Slice i covers (center_i - 11.25, center_i + 11.25]
        let slice = libm::ceil((self.0 - COMPASS_SLICE_DEGREES / 2.0) / COMPASS_SLICE_DEGREES);
        let index = (slice as i64).rem_euclid(COMPASS_LABELS.len() as i64) as usize;
        COMPASS_LABELS[index]
    }

    fn between_unchecked(&self, low: f64, mut high: f64, mode: CompareMode) -> bool {
        let mut value = self.0;
        if low > high {
            // Arc crosses north, unroll it past 360
            if value <= high {
                value += DEGREES_PER_CIRCLE;
            }
            high += DEGREES_PER_CIRCLE;
        }
        mode.contains(low, value, high)
    }
}
