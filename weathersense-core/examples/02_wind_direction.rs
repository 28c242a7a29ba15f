//! Wind Direction Example
//!
//! Works with headings on the circle: folding, rotating, arc tests that cross
//! north, and 16-point compass labels.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_wind_direction
//! ```

use weathersense_core::{CompareMode, Heading, Measurement, MeasurementError};

fn main() -> Result<(), MeasurementError> {
    println!("WeatherSense Wind Direction Example");
    println!("===================================\n");

    // Raw vane readings, including wrapped and negative values
    for raw in [0.0, 22.4, 95.0, 200.0, 359.0, 370.0, -15.0] {
        let heading = Heading::from_canonical(raw)?;
        println!("  raw {:>7.1}  ->  {}  {:>3}", raw, heading, heading.compass_label());
    }

    // A northerly sector crosses 0°
    let low = Heading::from_canonical(315.0)?;
    let high = Heading::from_canonical(45.0)?;
    println!("\nNortherly sector {} to {}:", low, high);
    for raw in [300.0, 330.0, 0.0, 44.9, 45.0, 90.0] {
        let heading = Heading::from_canonical(raw)?;
        let inside = heading.is_between(&low, &high, CompareMode::InclusiveNonInclusive);
        println!("  {}  {}", heading, if inside { "inside" } else { "outside" });
    }

    // Veer by 30° through north
    let gust = Heading::from_canonical(340.0)?;
    println!("\n{} veered 30° is {}", gust, gust.add_degrees(30.0)?);

    // Eight-slice wind rose
    println!("\nWind rose slices:");
    for slice in 0..8 {
        let start = Heading::for_slice(slice, 8)?;
        println!("  slice {}  starts at {}  ({})", slice, start, start.compass_label());
    }

    Ok(())
}
