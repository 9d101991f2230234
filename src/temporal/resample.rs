use crate::error::{Error, Result};
use crate::na::NA;
use crate::temporal::core::{Temporal, TimeSeries};
use crate::temporal::date_range::date_range;
use crate::temporal::frequency::Frequency;

/// Structure representing resampling operations
///
/// Buckets a series into consecutive calendar windows of the target
/// frequency and reduces each window to one value. Window membership is
/// determined solely by the timestamp (`window_start`), the representative
/// timestamp of each output row is the canonical window start, and windows
/// with no present values come out as NA.
#[derive(Debug)]
pub struct Resample<'a, T: Temporal> {
    /// Original time series
    series: &'a TimeSeries<T>,

    /// Resampling target frequency
    frequency: Frequency,
}

impl<'a, T: Temporal> Resample<'a, T> {
    /// Create a new resampling operation
    pub fn new(series: &'a TimeSeries<T>, frequency: Frequency) -> Self {
        Resample { series, frequency }
    }

    /// Resample using mean over present values
    pub fn mean(&self) -> Result<TimeSeries<T>> {
        self.aggregate(|values| values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Resample using sum over present values
    pub fn sum(&self) -> Result<TimeSeries<T>> {
        self.aggregate(|values| values.iter().sum())
    }

    /// Resample using maximum over present values
    pub fn max(&self) -> Result<TimeSeries<T>> {
        self.aggregate(|values| {
            values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        })
    }

    /// Resample using minimum over present values
    pub fn min(&self) -> Result<TimeSeries<T>> {
        self.aggregate(|values| values.iter().copied().fold(f64::INFINITY, f64::min))
    }

    /// Resample using a custom aggregation function
    ///
    /// The aggregator only ever sees non-empty slices of present values;
    /// missing inputs are excluded before the call and empty windows are
    /// emitted as NA without calling it.
    pub fn aggregate<F>(&self, aggregator: F) -> Result<TimeSeries<T>>
    where
        F: Fn(&[f64]) -> f64,
    {
        // Aggregation to a finer grid than the declared source frequency has
        // no unambiguous window assignment
        if let Some(source) = self.series.frequency() {
            if self.frequency.approx_days() < source.approx_days() {
                return Err(Error::InvalidFrequency(format!(
                    "cannot aggregate {} series to finer frequency {}",
                    source, self.frequency
                )));
            }
        }

        if self.series.is_empty() {
            return self
                .series
                .derive(Vec::new(), Vec::new(), Some(self.frequency));
        }

        let timestamps = self.series.timestamps();
        let first_window = self.frequency.window_start(timestamps[0].date());
        let last_window = self
            .frequency
            .window_start(timestamps[timestamps.len() - 1].date());

        // Fully regular output grid; empty windows stay as rows
        let windows = date_range(first_window, last_window, self.frequency)?;

        let mut result_values = Vec::with_capacity(windows.len());
        let mut result_timestamps = Vec::with_capacity(windows.len());
        let mut points = self.series.iter().peekable();

        for window in windows {
            let mut bucket: Vec<f64> = Vec::new();
            while let Some((point, value)) = points.peek() {
                if self.frequency.window_start(point.date()) != window {
                    break;
                }
                if let NA::Value(v) = **value {
                    bucket.push(v);
                }
                points.next();
            }

            let aggregated = if bucket.is_empty() {
                NA::NA
            } else {
                NA::Value(aggregator(&bucket))
            };
            result_values.push(aggregated);
            result_timestamps.push(T::start_of_day(window));
        }

        self.series
            .derive(result_values, result_timestamps, Some(self.frequency))
    }
}

impl<T: Temporal> TimeSeries<T> {
    /// Begin a resampling operation toward `frequency`
    pub fn resample(&self, frequency: Frequency) -> Resample<'_, T> {
        Resample::new(self, frequency)
    }
}
