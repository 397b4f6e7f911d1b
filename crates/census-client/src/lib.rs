//! Census Client - Upstream access to the Census Bureau API
//!
//! This crate abstracts the Annual Survey of Entrepreneurs endpoints behind the
//! [`CensusSource`] trait and ships the production implementation,
//! [`HttpCensusSource`], built on `reqwest`.
//!
//! # Example
//!
//! ```no_run
//! use census_client::{CensusClientConfig, CensusSource, HttpCensusSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CensusClientConfig::builder().api_key("my-key").build()?;
//! let source = HttpCensusSource::new(config)?;
//!
//! let table = source.variables(2014).await?;
//! println!("{} variables", table.into_variable_records().len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod source;

pub use config::{CensusClientConfig, CensusClientConfigBuilder, DEFAULT_BASE_URL};
pub use error::UpstreamError;
pub use http::HttpCensusSource;
pub use source::CensusSource;
