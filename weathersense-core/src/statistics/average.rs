//! Duration-weighted running average
//!
//! Each sample weighs as much as the time it represents:
//!
//! ```text
//! average' = (average * d + sample * ds) / (d + ds)
//! d'       = d + ds
//! ```
//!
//! Merging two averages is the same formula with the other average as the
//! sample, which is how hourly summaries roll up into daily ones.

use core::fmt;
use core::time::Duration;

use crate::{
    errors::{MeasurementError, MeasurementResult},
    measurement::Measurement,
    time::weight_seconds,
};

/// Weighted average of one kind and the total time it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementAverage<M> {
    value: Option<M>,
    duration: Duration,
}

impl<M: Measurement> MeasurementAverage<M> {
    /// Average seeded with `value` covering `duration`
    pub const fn new(value: M, duration: Duration) -> Self {
        Self { value: Some(value), duration }
    }

    /// Average with no samples yet
    pub const fn empty() -> Self {
        Self { value: None, duration: Duration::ZERO }
    }

    /// Fold in a sample covering `duration`
    ///
    /// A missing sample is ignored. An empty average takes the first sample
    /// as is.
    ///
    /// # Errors
    ///
    /// `ZeroDuration` when neither side carries any weight; the average is
    /// left unchanged.
    pub fn apply_value(&mut self, sample: impl Into<Option<M>>, duration: Duration) -> MeasurementResult<()> {
        let Some(sample) = sample.into() else {
            return Ok(());
        };

        let Some(current) = self.value else {
            self.value = Some(sample);
            self.duration = duration;
            return Ok(());
        };

        let total = self.duration + duration;
        let weight = weight_seconds(total);
        if weight == 0.0 {
            log_warn!("refusing to average {} over zero duration", M::KIND);
            return Err(MeasurementError::ZeroDuration);
        }

        let (a, b) = (current.canonical(), sample.canonical());
        let sum = a * weight_seconds(self.duration) + b * weight_seconds(duration);
        // The mean lies between its inputs; rounding must not carry it past a range bound.
        let merged = (sum / weight).clamp(a.min(b), a.max(b));
        let average = M::from_canonical(merged)?;

        self.value = Some(average);
        self.duration = total;
        Ok(())
    }

    /// Merge another average into this one
    pub fn apply_average(&mut self, other: &MeasurementAverage<M>) -> MeasurementResult<()> {
        self.apply_value(other.value, other.duration)
    }

    /// Current average, `None` before the first sample
    pub fn average(&self) -> Option<M> {
        self.value
    }

    /// Total time covered
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<M: Measurement> Default for MeasurementAverage<M> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<M: Measurement + fmt::Display> fmt::Display for MeasurementAverage<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Average: {} Duration: {:?}", value, self.duration),
            None => write!(f, "Average: none Duration: {:?}", self.duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::{Humidity, LeafWetness, Temperature};

    fn celsius(value: f64) -> Temperature {
        Temperature::from_canonical(value).unwrap()
    }

    #[test]
    fn equal_weights_split_the_difference() {
        let mut avg = MeasurementAverage::new(celsius(10.0), Duration::from_secs(100));
        avg.apply_value(celsius(20.0), Duration::from_secs(100)).unwrap();
        assert_eq!(avg.average(), Some(celsius(15.0)));
        assert_eq!(avg.duration(), Duration::from_secs(200));

        // Order does not matter for equal durations
        let mut reversed = MeasurementAverage::new(celsius(20.0), Duration::from_secs(100));
        reversed.apply_value(celsius(10.0), Duration::from_secs(100)).unwrap();
        assert_eq!(reversed, avg);
    }

    #[test]
    fn longer_samples_weigh_more() {
        let mut avg = MeasurementAverage::new(celsius(10.0), Duration::from_secs(60));
        avg.apply_value(celsius(20.0), Duration::from_secs(180)).unwrap();
        assert!((avg.average().unwrap().canonical() - 17.5).abs() < 1e-9);
    }

    #[test]
    fn zero_seed_takes_on_first_sample() {
        let mut avg = MeasurementAverage::new(Temperature::zero(), Duration::ZERO);
        avg.apply_value(celsius(22.0), Duration::from_secs(300)).unwrap();
        assert_eq!(avg.average(), Some(celsius(22.0)));
    }

    #[test]
    fn zero_total_duration_is_refused() {
        let mut avg = MeasurementAverage::new(celsius(10.0), Duration::ZERO);
        let before = avg;
        assert_eq!(avg.apply_value(celsius(20.0), Duration::ZERO), Err(MeasurementError::ZeroDuration));
        assert_eq!(avg, before);

        // A weightless sample against a weighted average changes nothing
        let mut avg = MeasurementAverage::new(celsius(10.0), Duration::from_secs(60));
        avg.apply_value(celsius(99.0), Duration::ZERO).unwrap();
        assert_eq!(avg.average(), Some(celsius(10.0)));
    }

    #[test]
    fn missing_sample_is_ignored() {
        let mut avg = MeasurementAverage::new(celsius(10.0), Duration::from_secs(60));
        avg.apply_value(None, Duration::from_secs(60)).unwrap();
        assert_eq!(avg.duration(), Duration::from_secs(60));
    }

    #[test]
    fn empty_average_adopts_first_sample() {
        let mut avg = MeasurementAverage::<Humidity>::empty();
        assert_eq!(avg.average(), None);
        avg.apply_value(Humidity::from_canonical(55.0).unwrap(), Duration::from_secs(30)).unwrap();
        assert_eq!(avg.average(), Humidity::from_canonical(55.0).ok());
        assert_eq!(avg.duration(), Duration::from_secs(30));
    }

    #[test]
    fn saturated_humidity_stays_in_range() {
        let mut avg = MeasurementAverage::new(Humidity::MAX, Duration::from_millis(1));
        avg.apply_value(Humidity::MAX, Duration::from_millis(13)).unwrap();
        assert_eq!(avg.average(), Some(Humidity::MAX));
        assert_eq!(avg.duration(), Duration::from_millis(14));
    }

    #[test]
    fn fractional_weights_at_range_bounds() {
        for first in 1..=40u64 {
            for second in 1..=40u64 {
                let mut wet = MeasurementAverage::new(LeafWetness::MAX, Duration::from_millis(first));
                wet.apply_value(LeafWetness::MAX, Duration::from_millis(second)).unwrap();
                assert_eq!(wet.average(), Some(LeafWetness::MAX));

                let mut dry = MeasurementAverage::new(Humidity::MIN, Duration::from_millis(first));
                dry.apply_value(Humidity::MIN, Duration::from_millis(second)).unwrap();
                assert_eq!(dry.average(), Some(Humidity::MIN));
            }
        }
    }

    #[test]
    fn merging_averages() {
        let mut hour = MeasurementAverage::new(celsius(10.0), Duration::from_secs(3600));
        let next = MeasurementAverage::new(celsius(14.0), Duration::from_secs(3600));
        hour.apply_average(&next).unwrap();
        assert_eq!(hour.average(), Some(celsius(12.0)));
        assert_eq!(hour.duration(), Duration::from_secs(7200));

        hour.apply_average(&MeasurementAverage::empty()).unwrap();
        assert_eq!(hour.duration(), Duration::from_secs(7200));
    }
}
