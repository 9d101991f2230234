use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error")]
    Io(#[source] std::io::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),

    #[error("Date parse error: {0}")]
    Parse(String),

    #[error("Index order error: {0}")]
    Order(String),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Range order error: start {start} is after end {end}")]
    RangeOrder { start: String, end: String },

    #[error("Inconsistent row count: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Consistency error: {0}")]
    Consistency(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
