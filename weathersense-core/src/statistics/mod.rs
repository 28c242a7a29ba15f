//! Measurement Statistics
//!
//! ## Overview
//!
//! [`MeasurementStatistics`] keeps the minimum, maximum and duration-weighted
//! average of one measurement kind over a period. The collector feeds live
//! samples into one accumulator per sensor per bucket; finished buckets are
//! merged upward with [`MeasurementStatistics::apply_statistics`] (five
//! minute → hour → day → month).
//!
//! ```rust
//! use core::time::Duration;
//! use weathersense_core::{Measurement, MeasurementStatistics, Temperature};
//!
//! let mut stats = MeasurementStatistics::<Temperature>::new();
//! let minute = Duration::from_secs(60);
//! stats.apply_value(Temperature::from_canonical(10.0)?, 60_000, minute)?;
//! stats.apply_value(Temperature::from_canonical(30.0)?, 120_000, minute)?;
//! stats.apply_value(Temperature::from_canonical(20.0)?, 180_000, minute)?;
//!
//! assert_eq!(stats.minimum_time(), Some(60_000));
//! assert_eq!(stats.maximum_value(), Some(Temperature::from_canonical(30.0)?));
//! assert_eq!(stats.average(), Some(Temperature::from_canonical(20.0)?));
//! assert_eq!(stats.average_duration(), Duration::from_secs(180));
//! # Ok::<(), weathersense_core::MeasurementError>(())
//! ```
//!
//! ## Missing Samples
//!
//! Every `apply_*` method takes `impl Into<Option<M>>`. A `None` sample leaves
//! the corresponding tracker untouched: a sensor that dropped out for a minute
//! must not drag the average toward zero.
//!
//! ## Concurrency
//!
//! The accumulator itself is a plain value and needs `&mut self`. Share one
//! between threads through [`SharedStatistics`], which hands out consistent
//! snapshots of the whole triple.

use core::fmt;
use core::time::Duration;

use crate::{
    errors::MeasurementResult,
    measurement::Measurement,
    time::{TimeSource, Timestamp},
};

mod average;
mod extreme;
#[cfg(feature = "std")]
mod shared;
mod value_time;

pub use average::MeasurementAverage;
pub use extreme::{ExtremeType, MeasurementExtreme};
#[cfg(feature = "std")]
pub use shared::SharedStatistics;
pub use value_time::MeasurementValueTime;

/// Minimum, maximum and average of one measurement kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementStatistics<M> {
    minimum: MeasurementExtreme<M>,
    maximum: MeasurementExtreme<M>,
    average: MeasurementAverage<M>,
}

impl<M: Measurement> MeasurementStatistics<M> {
    /// Empty statistics; the average starts from the kind's zero with no weight
    pub fn new() -> Self {
        Self {
            minimum: MeasurementExtreme::new(ExtremeType::Minimum),
            maximum: MeasurementExtreme::new(ExtremeType::Maximum),
            average: MeasurementAverage::new(M::zero(), Duration::ZERO),
        }
    }

    /// Feed one sample observed at `time` and covering `duration`
    ///
    /// The extremes are always updated. The error, if any, comes from the
    /// average (see [`MeasurementAverage::apply_value`]).
    pub fn apply_value(&mut self, value: impl Into<Option<M>>, time: Timestamp, duration: Duration) -> MeasurementResult<()> {
        let value = value.into();
        self.minimum.apply_value(value, time);
        self.maximum.apply_value(value, time);
        self.average.apply_value(value, duration)
    }

    /// Feed one sample stamped with the current time of `clock`
    pub fn apply_value_now<T: TimeSource>(&mut self, value: impl Into<Option<M>>, clock: &T, duration: Duration) -> MeasurementResult<()> {
        self.apply_value(value, clock.now(), duration)
    }

    /// Feed a pre-aggregated record, such as a console archive entry with
    /// separate high, low and average readings
    pub fn apply_values(
        &mut self,
        minimum: impl Into<Option<M>>,
        maximum: impl Into<Option<M>>,
        average: impl Into<Option<M>>,
        time: Timestamp,
        duration: Duration,
    ) -> MeasurementResult<()> {
        self.minimum.apply_value(minimum, time);
        self.maximum.apply_value(maximum, time);
        self.average.apply_value(average, duration)
    }

    /// Merge statistics of a finer period into these
    ///
    /// An average covering no time contributes nothing; only its extremes are
    /// merged.
    pub fn apply_statistics(&mut self, other: &MeasurementStatistics<M>) -> MeasurementResult<()> {
        self.minimum.apply_value_time(other.minimum.value_time());
        self.maximum.apply_value_time(other.maximum.value_time());
        if other.average.duration().is_zero() {
            return Ok(());
        }
        self.average.apply_average(&other.average)
    }

    /// Replace the minimum tracker wholesale
    pub fn set_minimum(&mut self, value: impl Into<Option<M>>, time: Timestamp) {
        self.minimum = MeasurementExtreme::with_value(ExtremeType::Minimum, value, time);
    }

    /// Replace the maximum tracker wholesale
    pub fn set_maximum(&mut self, value: impl Into<Option<M>>, time: Timestamp) {
        self.maximum = MeasurementExtreme::with_value(ExtremeType::Maximum, value, time);
    }

    /// Replace the average tracker wholesale
    pub fn set_average(&mut self, value: M, duration: Duration) {
        self.average = MeasurementAverage::new(value, duration);
    }

    /// Lowest value seen
    pub fn minimum_value(&self) -> Option<M> {
        self.minimum.extreme()
    }

    /// When the lowest value was seen
    pub fn minimum_time(&self) -> Option<Timestamp> {
        self.minimum.extreme_time()
    }

    /// Highest value seen
    pub fn maximum_value(&self) -> Option<M> {
        self.maximum.extreme()
    }

    /// When the highest value was seen
    pub fn maximum_time(&self) -> Option<Timestamp> {
        self.maximum.extreme_time()
    }

    /// Weighted average
    pub fn average(&self) -> Option<M> {
        self.average.average()
    }

    /// Time covered by the average
    pub fn average_duration(&self) -> Duration {
        self.average.duration()
    }

    /// Minimum tracker
    pub fn minimum(&self) -> &MeasurementExtreme<M> {
        &self.minimum
    }

    /// Maximum tracker
    pub fn maximum(&self) -> &MeasurementExtreme<M> {
        &self.maximum
    }

    /// Average tracker
    pub fn average_tracker(&self) -> &MeasurementAverage<M> {
        &self.average
    }
}

impl<M: Measurement> Default for MeasurementStatistics<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Measurement + fmt::Display> fmt::Display for MeasurementStatistics<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Minimum[{}] Maximum[{}] Average[{}]", self.minimum, self.maximum, self.average)
    }
}
