//! Error type for the data layer (reading, reshaping and coercing the export).
//!
//! Rendering and CLI code wrap these in `anyhow::Error`; the variants stay
//! typed so callers and tests can tell a missing column from bad numbers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    /// The input file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not parseable as CSV (e.g. a record wider than the header).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record with more fields than the header row.
    #[error("record {record} has {found} fields, header has {expected}")]
    RaggedRecord {
        record: usize,
        found: usize,
        expected: usize,
    },

    /// Fewer records than the footer rows that have to be dropped.
    #[error("expected at least {required} records (footer rows), found {found}")]
    TooFewRows { found: usize, required: usize },

    /// An expected column is not present in the table.
    #[error("missing column: {0:?}")]
    MissingColumn(String),

    /// A non-missing cell that does not parse as a floating point number.
    #[error("column {column:?} for {country:?}: cannot parse {value:?} as a number")]
    InvalidNumber {
        column: String,
        country: String,
        value: String,
    },

    /// A pie wedge value that is negative or infinite.
    #[error("cannot draw a pie wedge for {country:?} with value {value}")]
    InvalidWedge { country: String, value: f64 },

    /// A numeric column label that does not fit an integer year.
    #[error("invalid year label: {0:?}")]
    InvalidYear(String),
}

pub type DataResult<T> = Result<T, DataError>;
