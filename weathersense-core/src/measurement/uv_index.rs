//! UV index
//!
//! Not a [`Measurement`](super::Measurement): the index is an integer scale
//! with no units to convert and no meaningful average of two readings.

use core::fmt;

use crate::{
    constants::sensors::{UV_INDEX_MAX, UV_INDEX_MIN},
    errors::{MeasurementError, MeasurementResult},
};

/// UV index within `[0, 15]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "u8"))]
pub struct UvIndex(u8);

impl UvIndex {
    /// Lowest index
    pub const MIN: UvIndex = UvIndex(UV_INDEX_MIN);

    /// Highest index the console reports
    pub const MAX: UvIndex = UvIndex(UV_INDEX_MAX);

    /// Validate an index
    pub fn new(index: i32) -> MeasurementResult<Self> {
        if index < i32::from(UV_INDEX_MIN) || index > i32::from(UV_INDEX_MAX) {
            return Err(MeasurementError::IndexOutOfRange {
                index,
                min: UV_INDEX_MIN,
                max: UV_INDEX_MAX,
            });
        }
        Ok(Self(index as u8))
    }

    /// Integer value of the index
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for UvIndex {
    type Error = MeasurementError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<UvIndex> for u8 {
    fn from(uv: UvIndex) -> u8 {
        uv.0
    }
}

impl fmt::Display for UvIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
