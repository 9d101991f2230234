//! Missing-value counting and filling

use crate::error::Result;
use crate::na::NA;
use crate::temporal::core::{Temporal, TimeSeries};

impl<T: Temporal> TimeSeries<T> {
    /// Get the count of NA values
    pub fn na_count(&self) -> usize {
        self.values().iter().filter(|v| v.is_na()).count()
    }

    /// Get the count of non-NA values
    pub fn value_count(&self) -> usize {
        self.values().iter().filter(|v| v.is_value()).count()
    }

    /// Check if there are any NA values
    pub fn has_na(&self) -> bool {
        self.values().iter().any(|v| v.is_na())
    }

    /// Backward-fill NA values
    ///
    /// Each NA takes the value of the nearest later present point. A single
    /// reverse pass; a trailing run of NAs has no later value and stays NA,
    /// so `na_count` can remain positive after filling.
    pub fn bfill(&self) -> Result<Self> {
        let mut filled: Vec<NA<f64>> = Vec::with_capacity(self.len());
        let mut carry: Option<f64> = None;

        for value in self.values().iter().rev() {
            match value {
                NA::Value(v) => {
                    carry = Some(*v);
                    filled.push(NA::Value(*v));
                }
                NA::NA => filled.push(NA::from(carry)),
            }
        }
        filled.reverse();

        self.derive(filled, self.timestamps().to_vec(), self.frequency().copied())
    }

    /// Forward-fill NA values
    ///
    /// Mirror image of `bfill`: a leading run of NAs stays NA.
    pub fn ffill(&self) -> Result<Self> {
        let mut filled: Vec<NA<f64>> = Vec::with_capacity(self.len());
        let mut carry: Option<f64> = None;

        for value in self.values() {
            match value {
                NA::Value(v) => {
                    carry = Some(*v);
                    filled.push(NA::Value(*v));
                }
                NA::NA => filled.push(NA::from(carry)),
            }
        }

        self.derive(filled, self.timestamps().to_vec(), self.frequency().copied())
    }

    /// Fill NA values with a constant
    pub fn fillna(&self, fill_value: f64) -> Result<Self> {
        let filled: Vec<NA<f64>> = self
            .values()
            .iter()
            .map(|v| match v {
                NA::Value(_) => *v,
                NA::NA => NA::Value(fill_value),
            })
            .collect();

        self.derive(filled, self.timestamps().to_vec(), self.frequency().copied())
    }
}
