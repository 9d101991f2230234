//! Label-based range selection
//!
//! Bounds are full dates or partial dates ("1990", "1990-06"). A partial
//! start resolves to the unit's first instant and a partial end to its last
//! instant, so selecting a whole year or month works without spelling out
//! calendar boundaries.

use crate::error::{Error, Result};
use crate::temporal::core::{Temporal, TimeSeries};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A possibly partial calendar date used as a selection bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartialDate {
    /// A whole year, e.g. "1990"
    Year(i32),
    /// A whole month, e.g. "1990-06"
    YearMonth(i32, u32),
    /// An exact date, e.g. "1990-06-15"
    Date(NaiveDate),
}

impl PartialDate {
    /// First calendar date covered by this bound
    pub fn first_date(&self) -> NaiveDate {
        match self {
            PartialDate::Year(y) => NaiveDate::from_ymd_opt(*y, 1, 1).unwrap(),
            PartialDate::YearMonth(y, m) => NaiveDate::from_ymd_opt(*y, *m, 1).unwrap(),
            PartialDate::Date(d) => *d,
        }
    }

    /// Last calendar date covered by this bound
    pub fn last_date(&self) -> NaiveDate {
        match self {
            PartialDate::Year(y) => NaiveDate::from_ymd_opt(*y, 12, 31).unwrap(),
            PartialDate::YearMonth(y, m) => {
                let (next_y, next_m) = if *m == 12 { (*y + 1, 1) } else { (*y, *m + 1) };
                NaiveDate::from_ymd_opt(next_y, next_m, 1).unwrap() - chrono::Duration::days(1)
            }
            PartialDate::Date(d) => *d,
        }
    }

    /// Resolve as an inclusive lower bound
    pub fn lower_bound<T: Temporal>(&self) -> T {
        T::start_of_day(self.first_date())
    }

    /// Resolve as an inclusive upper bound
    ///
    /// An exact date resolves to exactly that instant, not the whole day; a
    /// partial date covers through the last instant of its unit.
    pub fn upper_bound<T: Temporal>(&self) -> T {
        match self {
            PartialDate::Date(d) => T::start_of_day(*d),
            _ => T::end_of_day(self.last_date()),
        }
    }
}

impl FromStr for PartialDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        match parts.len() {
            1 => {
                let year: i32 = parts[0]
                    .parse()
                    .map_err(|_| Error::Parse(format!("'{}' is not a valid year", s)))?;
                Ok(PartialDate::Year(year))
            }
            2 => {
                let year: i32 = parts[0]
                    .parse()
                    .map_err(|_| Error::Parse(format!("'{}' is not a valid year-month", s)))?;
                let month: u32 = parts[1]
                    .parse()
                    .map_err(|_| Error::Parse(format!("'{}' is not a valid year-month", s)))?;
                if !(1..=12).contains(&month) {
                    return Err(Error::Parse(format!("'{}' has month out of range", s)));
                }
                Ok(PartialDate::YearMonth(year, month))
            }
            3 => <NaiveDate as Temporal>::parse(s).map(PartialDate::Date),
            _ => Err(Error::Parse(format!("'{}' is not a valid date bound", s))),
        }
    }
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartialDate::Year(y) => write!(f, "{:04}", y),
            PartialDate::YearMonth(y, m) => write!(f, "{:04}-{:02}", y, m),
            PartialDate::Date(d) => write!(f, "{}", d),
        }
    }
}

impl<T: Temporal> TimeSeries<T> {
    /// Select the inclusive sub-series between two optional bounds
    ///
    /// Omitted bounds default to the series extremes. Returns an empty series
    /// when nothing falls inside the bounds; fails with a range order error
    /// when the resolved start is strictly after the resolved end. Frequency,
    /// name, and point order are preserved; no re-aggregation or filling.
    pub fn select_range(
        &self,
        start: Option<PartialDate>,
        end: Option<PartialDate>,
    ) -> Result<Self> {
        // Explicit reversed bounds fail even when the series is empty
        if let (Some(s), Some(e)) = (start, end) {
            let lower: T = s.lower_bound();
            let upper: T = e.upper_bound();
            if lower > upper {
                return Err(Error::RangeOrder {
                    start: lower.to_string(),
                    end: upper.to_string(),
                });
            }
        }

        if self.is_empty() {
            return self.derive(Vec::new(), Vec::new(), self.frequency().copied());
        }

        let timestamps = self.timestamps();
        let lower: T = match start {
            Some(bound) => bound.lower_bound(),
            None => timestamps[0].clone(),
        };
        let upper: T = match end {
            Some(bound) => bound.upper_bound(),
            None => timestamps[timestamps.len() - 1].clone(),
        };

        if lower > upper {
            return Err(Error::RangeOrder {
                start: lower.to_string(),
                end: upper.to_string(),
            });
        }

        let mut values = Vec::new();
        let mut selected = Vec::new();
        for (point, value) in self.iter() {
            if *point >= lower && *point <= upper {
                selected.push(point.clone());
                values.push(*value);
            }
        }

        self.derive(values, selected, self.frequency().copied())
    }
}
