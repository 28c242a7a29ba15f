//! Thread-shared statistics accumulator
//!
//! The collector's sample thread writes while display and archive threads
//! read. Readers always get a copy of the full minimum/maximum/average triple
//! taken under one lock, never a mix of before and after a sample.

use core::time::Duration;
use std::sync::RwLock;

use crate::{
    errors::{MeasurementError, MeasurementResult},
    measurement::Measurement,
    time::Timestamp,
};

use super::MeasurementStatistics;

/// [`MeasurementStatistics`] behind a read/write lock
#[derive(Debug)]
pub struct SharedStatistics<M> {
    inner: RwLock<MeasurementStatistics<M>>,
}

impl<M: Measurement> SharedStatistics<M> {
    /// Empty accumulator
    pub fn new() -> Self {
        Self::from_statistics(MeasurementStatistics::new())
    }

    /// Accumulator starting from existing statistics
    pub fn from_statistics(stats: MeasurementStatistics<M>) -> Self {
        Self { inner: RwLock::new(stats) }
    }

    /// Feed one sample
    pub fn apply_value(&self, value: impl Into<Option<M>>, time: Timestamp, duration: Duration) -> MeasurementResult<()> {
        let mut stats = self.inner.write().map_err(|_| MeasurementError::LockPoisoned)?;
        stats.apply_value(value, time, duration)
    }

    /// Merge statistics of a finer period
    pub fn apply_statistics(&self, other: &MeasurementStatistics<M>) -> MeasurementResult<()> {
        let mut stats = self.inner.write().map_err(|_| MeasurementError::LockPoisoned)?;
        stats.apply_statistics(other)
    }

    /// Consistent copy of the current statistics
    pub fn snapshot(&self) -> MeasurementResult<MeasurementStatistics<M>> {
        let stats = self.inner.read().map_err(|_| MeasurementError::LockPoisoned)?;
        Ok(*stats)
    }

    /// Return the current statistics and start over, for closing a bucket
    pub fn take(&self) -> MeasurementResult<MeasurementStatistics<M>> {
        let mut stats = self.inner.write().map_err(|_| MeasurementError::LockPoisoned)?;
        Ok(core::mem::take(&mut *stats))
    }
}

impl<M: Measurement> Default for SharedStatistics<M> {
    fn default() -> Self {
        Self::new()
    }
}
