//! Demo: the Mauna Loa CO2 wrangling pipeline
//!
//! Loads the bundled weekly series, indexes it at weekly-Saturday frequency,
//! resamples to month starts with the mean, slices 1958, and backward-fills
//! the remaining gaps.

use chrono::{NaiveDate, Weekday};
use keeling::{Frequency, PartialDate, TimeSeries};

fn main() -> keeling::Result<()> {
    let rows = keeling::io::read_raw_rows("data/co2_weekly.csv", true)?;
    println!("loaded {} raw rows", rows.len());

    let weekly = TimeSeries::<NaiveDate>::from_raw_rows(
        rows,
        Frequency::Weekly(Weekday::Sat),
        Some("co2".to_string()),
    )?;
    println!(
        "weekly series: {} points, {} missing",
        weekly.len(),
        weekly.na_count()
    );

    let monthly = weekly.resample(Frequency::MonthStart).mean()?;
    println!(
        "monthly means: {} points, {} missing",
        monthly.len(),
        monthly.na_count()
    );

    let y1958 = monthly.select_range(Some("1958".parse::<PartialDate>()?), None)?;
    println!("\nmonthly means from 1958 on:");
    for (month, value) in y1958.iter() {
        println!("  {}  {}", month, value);
    }

    let before = monthly.na_count();
    let filled = monthly.bfill()?;
    println!(
        "\nbackward fill: {} missing before, {} after",
        before,
        filled.na_count()
    );

    Ok(())
}
