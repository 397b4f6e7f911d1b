//! Error types for decoding Census API payloads.
//!
//! Decoding a [`Table`](crate::Table) into records never fails; every failure
//! mode lives in the step that turns a raw response body into a table.
//!
//! # Example
//!
//! ```
//! use census_core::{CensusError, Table};
//!
//! let error = Table::from_json("[]").unwrap_err();
//! assert!(matches!(error, CensusError::MissingHeaderRow));
//! ```

use thiserror::Error;

/// Errors produced while parsing a Census tabular payload.
#[derive(Debug, Error)]
pub enum CensusError {
    /// The body was not a JSON array of arrays.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The outer array was empty, so there is no header row.
    #[error("payload has no header row")]
    MissingHeaderRow,

    /// A header cell was not a string.
    #[error("header cell at column {column} is not a string: {value}")]
    InvalidHeader {
        /// Zero-based column index
        column: usize,
        /// The offending cell rendered as JSON
        value: String,
    },

    /// A data row does not line up with the header row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        /// One-based data row index (the header is row 0)
        row: usize,
        /// Number of header columns
        expected: usize,
        /// Number of cells in the row
        found: usize,
    },
}

impl CensusError {
    /// Returns true if the body itself could not be parsed as JSON.
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

/// Type alias for Results with CensusError.
pub type Result<T> = std::result::Result<T, CensusError>;
