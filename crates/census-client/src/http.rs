//! `reqwest` implementation of [`CensusSource`].

use async_trait::async_trait;
use census_core::Table;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::CensusClientConfig;
use crate::error::UpstreamError;
use crate::source::CensusSource;

/// Geography clause for nation-level dataset queries.
const NATION_GEOGRAPHY: &str = "us:*";

/// Census source backed by the public HTTP API.
#[derive(Debug, Clone)]
pub struct HttpCensusSource {
    client: Client,
    config: CensusClientConfig,
}

impl HttpCensusSource {
    /// Creates a source with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::InvalidConfig` if the TLS backend cannot be initialized.
    pub fn new(config: CensusClientConfig) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| UpstreamError::InvalidConfig(e.to_string()))?;

        Ok(Self { client, config })
    }

    async fn get_table(&self, url: &str, query: &[(&str, &str)]) -> Result<Table, UpstreamError> {
        let mut params: Vec<(&str, &str)> = query.to_vec();
        if let Some(key) = self.config.api_key() {
            params.push(("key", key));
        }

        debug!(url = %url, "Querying census endpoint");

        let response = self
            .client
            .get(url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "Census request failed");
                UpstreamError::transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Transport {
                status: Some(status.as_u16()),
                body: e.to_string(),
            })?;

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Census returned an error status");
            return Err(UpstreamError::Transport {
                status: Some(status.as_u16()),
                body,
            });
        }

        if body.trim().is_empty() {
            debug!(url = %url, status = status.as_u16(), "Census returned an empty body");
            return Err(UpstreamError::EmptyBody);
        }

        Ok(Table::from_json(&body)?)
    }
}

#[async_trait]
impl CensusSource for HttpCensusSource {
    async fn variables(&self, year: u32) -> Result<Table, UpstreamError> {
        let url = self.config.variables_url(year);
        self.get_table(&url, &[]).await
    }

    async fn dataset(&self, year: u32, headers: &str) -> Result<Table, UpstreamError> {
        let url = self.config.dataset_url(year);
        self.get_table(&url, &[("get", headers), ("for", NATION_GEOGRAPHY)])
            .await
    }

    fn name(&self) -> &str {
        "census-http"
    }
}
