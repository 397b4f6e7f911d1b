//! Census data source trait definition.

use async_trait::async_trait;
use census_core::Table;

use crate::error::UpstreamError;

/// A source of Annual Survey of Entrepreneurs tables.
///
/// The server only ever talks to this trait, so tests can substitute a
/// scripted source for the real Census API.
///
/// # Implementors
///
/// - [`HttpCensusSource`](crate::HttpCensusSource) - queries api.census.gov
#[async_trait]
pub trait CensusSource: Send + Sync {
    /// Fetches the variable listing for a survey year.
    ///
    /// The returned table is undecoded; callers choose whether to drop the
    /// reserved pseudo-variables.
    ///
    /// # Errors
    ///
    /// - `UpstreamError::Transport` if the request fails or returns a non-2xx status
    /// - `UpstreamError::EmptyBody` if the response body is blank
    /// - `UpstreamError::Malformed` if the body is not a Census table
    async fn variables(&self, year: u32) -> Result<Table, UpstreamError>;

    /// Fetches the nation-level dataset for a survey year.
    ///
    /// `headers` is the comma separated `get=` list, passed through as-is.
    async fn dataset(&self, year: u32, headers: &str) -> Result<Table, UpstreamError>;

    /// Returns the name of this source, used for logging.
    fn name(&self) -> &str;
}
