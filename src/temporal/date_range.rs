//! Module for generating frequency grids
//!
//! A grid is the ordered list of all on-grid dates of a frequency within an
//! inclusive date interval.

use crate::error::{Error, Result};
use crate::temporal::frequency::Frequency;
use chrono::NaiveDate;

/// Structure to generate a date range on a frequency grid
#[derive(Debug, Clone)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    freq: Frequency,
}

impl DateRange {
    /// Create a date range from start, end, and frequency
    pub fn new(start: NaiveDate, end: NaiveDate, freq: Frequency) -> Result<Self> {
        if start > end {
            return Err(Error::Consistency(
                "Start date must not be later than end date".to_string(),
            ));
        }

        Ok(DateRange { start, end, freq })
    }

    /// Get all grid points in the range
    ///
    /// The first point is the first on-grid date at or after `start`; points
    /// follow until `end` inclusive. May be empty when no grid point falls
    /// inside the interval.
    pub fn generate(&self) -> Vec<NaiveDate> {
        let mut result = Vec::new();
        let mut current = self.freq.ceil(self.start);

        while current <= self.end {
            result.push(current);
            current = self.freq.next_grid_point(current);
        }

        result
    }
}

/// Helper function to generate a frequency grid over an inclusive range
pub fn date_range(start: NaiveDate, end: NaiveDate, freq: Frequency) -> Result<Vec<NaiveDate>> {
    DateRange::new(start, end, freq).map(|range| range.generate())
}
