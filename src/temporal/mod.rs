//! Module for time series data manipulation

// Module structure
pub mod core;
pub mod date_range;
pub mod fill;
pub mod frequency;
pub mod resample;
pub mod select;

// Re-export public items from submodules
pub use self::core::{Temporal, TimeSeries};
pub use self::date_range::{date_range, DateRange};
pub use self::frequency::Frequency;
pub use self::resample::Resample;
pub use self::select::PartialDate;
