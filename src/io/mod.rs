//! Module for loading raw tabular data

pub mod csv;

pub use self::csv::{read_raw_rows, RawRow};
