//! keeling: time-indexed series wrangling
//!
//! A small library for the classic atmospheric-CO2 walkthrough: build a
//! frequency-indexed series from raw (date, value) rows, resample it to a
//! coarser calendar frequency with NA-aware aggregation, slice it by
//! (partial) date range, and backward-fill the gaps. Missing values are a
//! genuine tri-state ([`NA`]), never a NaN sentinel, and every transformation
//! is a pure function from one [`TimeSeries`] to a new one.
//!
//! ```no_run
//! use keeling::{Frequency, TimeSeries};
//! use chrono::{NaiveDate, Weekday};
//!
//! # fn main() -> keeling::Result<()> {
//! let rows = keeling::io::read_raw_rows("data/co2_weekly.csv", true)?;
//! let weekly = TimeSeries::<NaiveDate>::from_raw_rows(
//!     rows,
//!     Frequency::Weekly(Weekday::Sat),
//!     Some("co2".to_string()),
//! )?;
//! let monthly = weekly.resample(Frequency::MonthStart).mean()?;
//! let gaps_before = monthly.na_count();
//! let filled = monthly.bfill()?;
//! assert!(filled.na_count() <= gaps_before);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod io;
pub mod na;
pub mod temporal;

// Re-export core types
pub use error::{Error, Result};
pub use na::NA;
pub use temporal::{date_range, DateRange, Frequency, PartialDate, Resample, Temporal, TimeSeries};

/// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
