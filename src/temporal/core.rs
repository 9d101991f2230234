//! Core time series data structures
//!
//! `Temporal` abstracts the index instant (day-level dates or full
//! datetimes); `TimeSeries` pairs a strictly increasing index with NA-aware
//! values and an optional declared frequency.

use crate::error::{Error, Result};
use crate::na::NA;
use crate::temporal::date_range::date_range;
use crate::temporal::frequency::Frequency;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Trait for types usable as time series index points
pub trait Temporal: Clone + Ord + Debug + Display {
    /// Parse from ISO-8601-like text
    fn parse(s: &str) -> Result<Self>;

    /// Day-level projection used by all calendar logic
    fn date(&self) -> NaiveDate;

    /// The first instant of `date` as this type
    fn start_of_day(date: NaiveDate) -> Self;

    /// The last instant of `date` as this type
    fn end_of_day(date: NaiveDate) -> Self;
}

impl Temporal for NaiveDate {
    fn parse(s: &str) -> Result<Self> {
        s.parse::<NaiveDate>()
            .map_err(|e| Error::Parse(format!("'{}' is not a valid date: {}", s, e)))
    }

    fn date(&self) -> NaiveDate {
        *self
    }

    fn start_of_day(date: NaiveDate) -> Self {
        date
    }

    fn end_of_day(date: NaiveDate) -> Self {
        date
    }
}

impl Temporal for NaiveDateTime {
    fn parse(s: &str) -> Result<Self> {
        // Accept a full datetime, or a bare date meaning midnight
        if let Ok(dt) = s.parse::<NaiveDateTime>() {
            return Ok(dt);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
            return Ok(dt);
        }
        s.parse::<NaiveDate>()
            .map(|d| d.and_hms_opt(0, 0, 0).unwrap())
            .map_err(|e| Error::Parse(format!("'{}' is not a valid datetime: {}", s, e)))
    }

    fn date(&self) -> NaiveDate {
        NaiveDateTime::date(self)
    }

    fn start_of_day(date: NaiveDate) -> Self {
        date.and_hms_opt(0, 0, 0).unwrap()
    }

    fn end_of_day(date: NaiveDate) -> Self {
        date.and_hms_micro_opt(23, 59, 59, 999_999).unwrap()
    }
}

/// Time series structure: strictly increasing timestamps, NA-aware values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeries<T: Temporal> {
    /// Series values (wrapped in the NA type)
    values: Vec<NA<f64>>,

    /// Index timestamps, strictly increasing
    timestamps: Vec<T>,

    /// Declared frequency (if regular)
    frequency: Option<Frequency>,

    /// Name (optional)
    name: Option<String>,
}

impl<T: Temporal> TimeSeries<T> {
    /// Create a new time series from values and timestamps
    ///
    /// Fails if lengths differ or timestamps are not strictly increasing;
    /// input is never reordered.
    pub fn new(values: Vec<NA<f64>>, timestamps: Vec<T>, name: Option<String>) -> Result<Self> {
        if values.len() != timestamps.len() {
            return Err(Error::InconsistentRowCount {
                expected: timestamps.len(),
                found: values.len(),
            });
        }

        check_strictly_increasing(&timestamps)?;

        Ok(TimeSeries {
            values,
            timestamps,
            frequency: None,
            name,
        })
    }

    /// Build a frequency-indexed series from raw (date text, optional value) rows
    ///
    /// Rows must arrive chronologically sorted and each timestamp must lie on
    /// the frequency's grid. The realized index is the full grid over
    /// [min, max] of the observations; grid points with no raw row get NA.
    pub fn from_raw_rows<S, I>(rows: I, freq: Frequency, name: Option<String>) -> Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, Option<f64>)>,
    {
        let mut parsed: Vec<(T, NA<f64>)> = Vec::new();
        for (text, value) in rows {
            let point = T::parse(text.as_ref())?;
            if let Some((prev, _)) = parsed.last() {
                if point <= *prev {
                    return Err(Error::Order(format!(
                        "raw rows not chronologically sorted: {} follows {}",
                        point, prev
                    )));
                }
                if point.date() == prev.date() {
                    return Err(Error::Order(format!(
                        "duplicate observation for {}",
                        point.date()
                    )));
                }
            }
            if !freq.is_on_grid(point.date()) {
                return Err(Error::InvalidFrequency(format!(
                    "timestamp {} does not fall on the {} grid",
                    point, freq
                )));
            }
            parsed.push((point, NA::from(value)));
        }

        if parsed.is_empty() {
            let empty = TimeSeries::new(Vec::new(), Vec::new(), name)?;
            return Ok(empty.with_frequency(freq));
        }

        let first = parsed.first().unwrap().0.date();
        let last = parsed.last().unwrap().0.date();
        let grid = date_range(first, last, freq)?;

        let mut values = Vec::with_capacity(grid.len());
        let mut timestamps = Vec::with_capacity(grid.len());
        let mut raw = parsed.into_iter().peekable();

        for grid_date in grid {
            let observed = matches!(raw.peek(), Some((point, _)) if point.date() == grid_date);
            let value = if observed {
                raw.next().unwrap().1
            } else {
                NA::NA
            };
            values.push(value);
            timestamps.push(T::start_of_day(grid_date));
        }

        let series = TimeSeries::new(values, timestamps, name)?;
        Ok(series.with_frequency(freq))
    }

    /// Set the declared frequency
    pub fn with_frequency(mut self, freq: Frequency) -> Self {
        self.frequency = Some(freq);
        self
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the array of values
    pub fn values(&self) -> &[NA<f64>] {
        &self.values
    }

    /// Get the array of timestamps
    pub fn timestamps(&self) -> &[T] {
        &self.timestamps
    }

    /// Get the declared frequency
    pub fn frequency(&self) -> Option<&Frequency> {
        self.frequency.as_ref()
    }

    /// Get the name
    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    /// Get a (timestamp, value) pair by position
    pub fn get(&self, pos: usize) -> Option<(&T, &NA<f64>)> {
        match (self.timestamps.get(pos), self.values.get(pos)) {
            (Some(t), Some(v)) => Some((t, v)),
            _ => None,
        }
    }

    /// Iterate over (timestamp, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&T, &NA<f64>)> {
        self.timestamps.iter().zip(self.values.iter())
    }

    /// Rebuild a derived series, carrying name and setting a frequency tag
    pub(crate) fn derive(
        &self,
        values: Vec<NA<f64>>,
        timestamps: Vec<T>,
        frequency: Option<Frequency>,
    ) -> Result<Self> {
        let mut series = TimeSeries::new(values, timestamps, self.name.clone())?;
        series.frequency = frequency;
        Ok(series)
    }
}

fn check_strictly_increasing<T: Temporal>(timestamps: &[T]) -> Result<()> {
    for pair in timestamps.windows(2) {
        if pair[1] <= pair[0] {
            return Err(Error::Order(format!(
                "timestamps must be strictly increasing: {} does not follow {}",
                pair[1], pair[0]
            )));
        }
    }
    Ok(())
}
