//! Server settings.
//!
//! Loaded with the `config` crate from an optional TOML file, overridden by
//! `CENSUS_*` environment variables:
//!
//! ```toml
//! port = 5000
//! debug = false
//! api_key = "..."
//! cache_minutes = 60
//! ```
//!
//! The file path comes from `CENSUS_CONFIG` (default `census.toml`); a missing
//! file is not an error.

use std::net::SocketAddr;
use std::time::Duration;

use census_client::{CensusClientConfig, DEFAULT_BASE_URL};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use crate::cache::FetcherConfig;

/// Prefix of the environment variables read as settings.
pub const ENV_PREFIX: &str = "CENSUS";

/// Environment variable naming the settings file.
pub const CONFIG_PATH_ENV: &str = "CENSUS_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "census.toml";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid setting '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interfaz donde escucha el servidor
    pub host: String,
    pub port: u16,
    /// Sube el nivel de log por defecto a `debug`
    pub debug: bool,
    /// Key del Census API, enviada como `key=`
    pub api_key: Option<String>,
    /// Minutos que una respuesta cacheada se considera fresca
    pub cache_minutes: u64,
    /// Argument tuples memoizados por endpoint
    pub cache_capacity: u64,
    pub base_url: String,
    /// Timeout de las llamadas al Census API; sin valor usa el default del cliente
    pub request_timeout_seconds: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            debug: false,
            api_key: None,
            cache_minutes: 60,
            cache_capacity: 32,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_seconds: None,
        }
    }
}

impl Settings {
    /// Loads settings from the file named by `CENSUS_CONFIG` and the environment.
    pub fn load() -> Result<Self, SettingsError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Loads settings from an optional TOML file and the environment.
    pub fn load_from(path: &str) -> Result<Self, SettingsError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::new(path, FileFormat::Toml).required(false))
                .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true)),
        )
    }

    /// Parses settings from TOML text only.
    pub fn from_toml_str(toml: &str) -> Result<Self, SettingsError> {
        Self::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects values the server cannot run with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.port == 0 {
            return Err(SettingsError::Invalid {
                key: "port",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.cache_capacity == 0 {
            return Err(SettingsError::Invalid {
                key: "cache_capacity",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.base_url.trim().is_empty() {
            return Err(SettingsError::Invalid {
                key: "base_url",
                reason: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| SettingsError::Invalid {
                key: "host",
                reason: e.to_string(),
            })
    }

    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            capacity: self.cache_capacity,
            ttl: Duration::from_secs(self.cache_minutes.saturating_mul(60)),
        }
    }

    pub fn client_config(&self) -> Result<CensusClientConfig, SettingsError> {
        let mut builder = CensusClientConfig::builder()
            .base_url(&self.base_url)
            .maybe_api_key(self.api_key.clone());
        if let Some(seconds) = self.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        builder.build().map_err(|reason| SettingsError::Invalid {
            key: "base_url",
            reason: reason.to_string(),
        })
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
