//! Daily Roll-up Example
//!
//! Feeds a day of simulated five-minute console readings into hourly
//! statistics, then merges the hours into a daily summary.
//!
//! ## What You'll Learn
//!
//! - Building typed readings in the station's display units
//! - Accumulating minimum, maximum and weighted average per hour
//! - Handling sensor dropouts (missing samples)
//! - Rolling hourly buckets up into a day
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_daily_rollup
//! ```

use core::time::Duration;

use weathersense_core::{
    time::FixedTime, Measurement, MeasurementError, MeasurementStatistics, Temperature,
    TemperatureUnit, UnitRegistry,
};

const INTERVAL: Duration = Duration::from_secs(300);

fn main() -> Result<(), MeasurementError> {
    println!("WeatherSense Daily Roll-up Example");
    println!("==================================\n");

    // Readings arrive in °F from the console
    let mut units = UnitRegistry::standard();
    units.set::<Temperature>(TemperatureUnit::Fahrenheit);

    let mut clock = FixedTime::new(0);
    let mut day = MeasurementStatistics::<Temperature>::new();

    for hour in 0..24u64 {
        let mut bucket = MeasurementStatistics::<Temperature>::new();

        for record in 0..12u64 {
            // The sensor drops out for the 03:00 hour
            let reading = if hour == 3 {
                None
            } else {
                let minutes = (hour * 60 + record * 5) as f64;
                let phase = (minutes - 300.0) / 1440.0 * core::f64::consts::TAU;
                Some(Temperature::in_default_unit(55.0 - 15.0 * phase.cos(), &units)?)
            };
            bucket.apply_value_now(reading, &clock, INTERVAL)?;
            clock.advance(INTERVAL);
        }

        // The empty hour still carries its zero seed with no weight
        println!(
            "{:02}:00  low {:>8}  high {:>8}  covered {:>4}s",
            hour,
            bucket.minimum_value().and_then(|t| t.format(&units)).unwrap_or_else(|| "--".into()),
            bucket.maximum_value().and_then(|t| t.format(&units)).unwrap_or_else(|| "--".into()),
            bucket.average_duration().as_secs(),
        );

        day.apply_statistics(&bucket)?;
    }

    println!("\n{}", "=".repeat(60));
    println!("Day summary:");
    println!("  {}", day);
    if let Some(average) = day.average().and_then(|t| t.format(&units)) {
        println!("  Average {} over {:?}", average, day.average_duration());
    }
    if let (Some(low), Some(at)) = (day.minimum_value(), day.minimum_time()) {
        println!("  Low {} at minute {}", low.format_with_unit(TemperatureUnit::Fahrenheit), at / 60_000);
    }
    Ok(())
}
