//! Census client configuration.

use std::time::Duration;

/// Root of the public Census data API.
pub const DEFAULT_BASE_URL: &str = "https://api.census.gov/data";

/// Configuration for [`HttpCensusSource`](crate::HttpCensusSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusClientConfig {
    /// API root, without a trailing slash.
    base_url: String,

    /// Key sent as the `key` query parameter (optional, Census allows
    /// a small number of anonymous requests).
    api_key: Option<String>,

    /// Outbound request timeout. `None` leaves the client default in place.
    timeout: Option<Duration>,
}

impl CensusClientConfig {
    /// Creates a new builder.
    pub fn builder() -> CensusClientConfigBuilder {
        CensusClientConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// URL of the variable listing for a survey year.
    pub fn variables_url(&self, year: u32) -> String {
        format!("{}/{}/ase/cscbo/variables", self.base_url, year)
    }

    /// URL of the dataset query for a survey year.
    pub fn dataset_url(&self, year: u32) -> String {
        format!("{}/{}/ase/cscbo", self.base_url, year)
    }
}

impl Default for CensusClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: None,
        }
    }
}

/// Builder for CensusClientConfig.
#[derive(Debug, Default)]
pub struct CensusClientConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl CensusClientConfigBuilder {
    /// Overrides the API root (useful for tests and mirrors).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets or clears the API key.
    pub fn maybe_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is blank or not HTTP(S), or if the API
    /// key is blank.
    pub fn build(self) -> Result<CensusClientConfig, &'static str> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        if base_url.is_empty() {
            return Err("base_url cannot be empty");
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err("base_url must start with http:// or https://");
        }

        let api_key = match self.api_key {
            Some(key) if key.trim().is_empty() => return Err("api_key cannot be blank"),
            other => other,
        };

        Ok(CensusClientConfig {
            base_url,
            api_key,
            timeout: self.timeout,
        })
    }
}
