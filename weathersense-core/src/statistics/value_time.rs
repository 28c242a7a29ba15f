//! A measurement paired with the time it was observed

use core::fmt;

use crate::{measurement::Measurement, time::Timestamp};

/// Value and timestamp, both always present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementValueTime<M> {
    value: M,
    time: Timestamp,
}

impl<M: Measurement> MeasurementValueTime<M> {
    /// Pair `value` with `time`
    pub const fn new(value: M, time: Timestamp) -> Self {
        Self { value, time }
    }

    /// The measurement
    #[inline]
    pub fn value(&self) -> M {
        self.value
    }

    /// When it was observed
    #[inline]
    pub fn time(&self) -> Timestamp {
        self.time
    }
}

impl<M: Measurement + fmt::Display> fmt::Display for MeasurementValueTime<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.value, self.time)
    }
}
