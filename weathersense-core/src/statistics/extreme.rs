//! Running minimum or maximum
//!
//! An extreme starts empty and takes the first value it sees. After that a
//! value replaces it only when strictly lower (minimum) or strictly higher
//! (maximum) by raw canonical value, so on a tie the earliest time is kept.
//! Missing samples (`None`) never change state.

use core::fmt;

use crate::{
    measurement::Measurement,
    time::Timestamp,
};

use super::MeasurementValueTime;

/// Which end of the range is tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtremeType {
    /// Lowest value wins
    Minimum,
    /// Highest value wins
    Maximum,
}

impl fmt::Display for ExtremeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Minimum => "Minimum",
            Self::Maximum => "Maximum",
        })
    }
}

/// Extreme value of one kind and when it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementExtreme<M> {
    extreme_type: ExtremeType,
    extreme: Option<MeasurementValueTime<M>>,
}

impl<M: Measurement> MeasurementExtreme<M> {
    /// Empty tracker
    pub const fn new(extreme_type: ExtremeType) -> Self {
        Self { extreme_type, extreme: None }
    }

    /// Tracker that already holds `value` (when present) at `time`
    pub fn with_value(extreme_type: ExtremeType, value: impl Into<Option<M>>, time: Timestamp) -> Self {
        let mut extreme = Self::new(extreme_type);
        extreme.apply_value(value, time);
        extreme
    }

    /// Offer a sample; returns true if it became the new extreme
    pub fn apply_value(&mut self, value: impl Into<Option<M>>, time: Timestamp) -> bool {
        let Some(value) = value.into() else {
            return false;
        };

        let replace = match &self.extreme {
            None => true,
            Some(current) => self.improves(&value, &current.value()),
        };

        if replace {
            log_trace!("{} of {} replaced at {}", self.extreme_type, M::KIND, time);
            self.extreme = Some(MeasurementValueTime::new(value, time));
        }
        replace
    }

    /// Offer a sample that already carries its time
    pub fn apply_value_time(&mut self, value_time: Option<MeasurementValueTime<M>>) -> bool {
        match value_time {
            Some(vt) => self.apply_value(vt.value(), vt.time()),
            None => false,
        }
    }

    /// Recorded extreme
    pub fn extreme(&self) -> Option<M> {
        self.extreme.map(|vt| vt.value())
    }

    /// When the recorded extreme happened
    pub fn extreme_time(&self) -> Option<Timestamp> {
        self.extreme.map(|vt| vt.time())
    }

    /// Recorded extreme with its time
    pub fn value_time(&self) -> Option<MeasurementValueTime<M>> {
        self.extreme
    }

    /// Minimum or maximum
    pub fn extreme_type(&self) -> ExtremeType {
        self.extreme_type
    }

    /// True until the first sample arrives
    pub fn is_empty(&self) -> bool {
        self.extreme.is_none()
    }

    fn improves(&self, candidate: &M, current: &M) -> bool {
        let ordering = candidate.compare_raw(current);
        match self.extreme_type {
            ExtremeType::Minimum => ordering.is_lt(),
            ExtremeType::Maximum => ordering.is_gt(),
        }
    }
}

impl<M: Measurement + fmt::Display> fmt::Display for MeasurementExtreme<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extreme {
            Some(vt) => write!(f, "Type: {}  Extreme: {}  Time: {}", self.extreme_type, vt.value(), vt.time()),
            None => write!(f, "Type: {}  Extreme: none", self.extreme_type),
        }
    }
}
