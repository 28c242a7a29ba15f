//! Integration tests for statistics roll-up
//!
//! Tests the path a day of console archive records takes through the core:
//! - Typed readings built in the station's display units
//! - Five-minute samples accumulated into hourly buckets
//! - Hourly buckets merged into a daily summary
//! - Shared accumulators drained by a bucket closer

#![cfg(test)]

use core::time::Duration;
use std::sync::Arc;
use std::thread;

use weathersense_core::{
    constants::time::{DEFAULT_ARCHIVE_INTERVAL_SECS, MS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR},
    time::FixedTime,
    AnyMeasurement, Humidity, Measurement, MeasurementKind, MeasurementStatistics, Rainfall,
    SharedStatistics, Speed, SpeedUnit, Temperature, TemperatureUnit, TimeSource, UnitRegistry,
};

const INTERVAL: Duration = Duration::from_secs(DEFAULT_ARCHIVE_INTERVAL_SECS);
const RECORDS_PER_HOUR: u64 = SECONDS_PER_HOUR / DEFAULT_ARCHIVE_INTERVAL_SECS;

/// Diurnal temperature curve in °F: coldest at 05:00, warmest at 17:00
fn outdoor_fahrenheit(hour: u64, record: u64) -> f64 {
    let minutes = (hour * 60 + record * 5) as f64;
    let phase = (minutes - 5.0 * 60.0) / (24.0 * 60.0) * core::f64::consts::TAU;
    55.0 - 15.0 * phase.cos()
}

fn imperial_units() -> UnitRegistry {
    let mut units = UnitRegistry::standard();
    units.set::<Temperature>(TemperatureUnit::Fahrenheit);
    units.set::<Speed>(SpeedUnit::MilesPerHour);
    units
}

#[test]
fn test_day_of_archive_records() {
    let units = imperial_units();
    let mut clock = FixedTime::new(0);
    let mut hours = Vec::new();

    for hour in 0..24 {
        let mut bucket = MeasurementStatistics::<Temperature>::new();
        for record in 0..RECORDS_PER_HOUR {
            let reading = Temperature::in_default_unit(outdoor_fahrenheit(hour, record), &units).unwrap();
            bucket.apply_value_now(reading, &clock, INTERVAL).unwrap();
            clock.advance(INTERVAL);
        }
        assert_eq!(bucket.average_duration(), Duration::from_secs(SECONDS_PER_HOUR));
        hours.push(bucket);
    }

    let mut day = MeasurementStatistics::new();
    for hour in &hours {
        day.apply_statistics(hour).unwrap();
    }

    assert_eq!(day.average_duration(), Duration::from_secs(SECONDS_PER_DAY));

    // 05:00 and 17:00 records hit the curve's extremes exactly
    assert_eq!(day.minimum_time(), Some(5 * SECONDS_PER_HOUR * MS_PER_SECOND));
    assert_eq!(day.maximum_time(), Some(17 * SECONDS_PER_HOUR * MS_PER_SECOND));
    assert_eq!(day.minimum_value().and_then(|t| t.format(&units)).as_deref(), Some("40.0 °F"));
    assert_eq!(day.maximum_value().and_then(|t| t.format(&units)).as_deref(), Some("70.0 °F"));

    // A full cosine period averages to its midline
    let mean = day.average().unwrap().get(&units).unwrap();
    assert!((mean - 55.0).abs() < 1e-6, "daily mean {}", mean);
}

#[test]
fn test_dropouts_do_not_bias_average() {
    let mut hour = MeasurementStatistics::<Humidity>::new();
    let readings = [Some(60.0), None, Some(62.0), None, None, Some(64.0)];
    for (i, reading) in readings.iter().enumerate() {
        let sample = reading.map(|rh| Humidity::from_canonical(rh).unwrap());
        hour.apply_value(sample, i as u64 * 300_000, INTERVAL).unwrap();
    }

    assert_eq!(hour.average(), Humidity::from_canonical(62.0).ok());
    assert_eq!(hour.average_duration(), INTERVAL * 3);
    assert_eq!(hour.maximum_time(), Some(5 * 300_000));
}

#[test]
fn test_console_high_low_records() {
    // Archive records carry their own high and low for the interval
    let mut day = MeasurementStatistics::<Speed>::new();
    let records = [
        (1.2, 4.5, 2.0),
        (0.0, 9.8, 3.1),
        (2.2, 6.1, 4.0),
    ];
    for (i, (low, high, avg)) in records.iter().enumerate() {
        day.apply_values(
            Speed::from_canonical(*low).unwrap(),
            Speed::from_canonical(*high).unwrap(),
            Speed::from_canonical(*avg).unwrap(),
            i as u64,
            INTERVAL,
        )
        .unwrap();
    }

    assert_eq!(day.minimum_value(), Speed::from_canonical(0.0).ok());
    assert_eq!(day.maximum_time(), Some(1));
    assert_eq!(day.average(), Speed::from_canonical(3.03).ok());
}

#[test]
fn test_loaded_summary_merges_with_live_data() {
    // Summary row read back from storage: extremes and average set directly
    let mut stored = MeasurementStatistics::<Rainfall>::new();
    stored.set_minimum(Rainfall::from_canonical(0.0).unwrap(), 100);
    stored.set_maximum(Rainfall::from_canonical(2.4).unwrap(), 200);
    stored.set_average(Rainfall::from_canonical(0.6).unwrap(), Duration::from_secs(SECONDS_PER_HOUR));

    let mut live = MeasurementStatistics::new();
    live.apply_value(Rainfall::from_canonical(1.0).unwrap(), 300, Duration::from_secs(SECONDS_PER_HOUR)).unwrap();

    let mut total = stored;
    total.apply_statistics(&live).unwrap();
    assert_eq!(total.maximum_time(), Some(200));
    assert_eq!(total.average(), Rainfall::from_canonical(0.8).ok());
    assert_eq!(total.average_duration(), Duration::from_secs(2 * SECONDS_PER_HOUR));
}

#[test]
fn test_shared_bucket_closing() {
    let current = Arc::new(SharedStatistics::<Temperature>::new());
    let clock = FixedTime::new(1_000);

    let sampler = {
        let current = Arc::clone(&current);
        let clock = clock.clone();
        thread::spawn(move || {
            for i in 0..50 {
                let t = Temperature::from_canonical(15.0 + (i % 5) as f64).unwrap();
                current.apply_value(t, clock.now(), Duration::from_secs(12)).unwrap();
            }
        })
    };
    sampler.join().unwrap();

    let hour = current.take().unwrap();
    assert_eq!(hour.average_duration(), Duration::from_secs(600));
    assert_eq!(hour.average(), Temperature::from_canonical(17.0).ok());
    assert_eq!(current.snapshot().unwrap().average_duration(), Duration::ZERO);
}

#[test]
fn test_mixed_kind_archive_row() {
    let units = UnitRegistry::standard();
    let row: Vec<AnyMeasurement> = vec![
        Temperature::from_canonical(21.0).unwrap().into(),
        Humidity::from_canonical(48.0).unwrap().into(),
        Rainfall::from_canonical(25.4).unwrap().into(),
    ];

    let rendered: Vec<String> = row.iter().filter_map(|m| m.format(&units)).collect();
    assert_eq!(rendered, vec!["21.0 °C", "48.0 %", "1.00 in"]);

    let kinds: Vec<MeasurementKind> = row.iter().map(AnyMeasurement::kind).collect();
    assert_eq!(kinds, vec![MeasurementKind::Temperature, MeasurementKind::Humidity, MeasurementKind::Rainfall]);
    assert!(row[0].add(&row[1]).is_err());
}
