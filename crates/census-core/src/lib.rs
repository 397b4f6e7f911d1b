//! Census Core - Domain types and tabular decoding
//!
//! This crate provides the foundational types shared by the Census ASE proxy:
//! keyed records, the error payload returned to HTTP callers, and the decoder
//! that turns the Census API's header-row tables into records.

pub mod error;
pub mod table;
pub mod types;

pub use error::{CensusError, Result};
pub use table::{RESERVED_VARIABLE_NAMES, Table};
pub use types::{ErrorPayload, Record, RecordList};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
