//! Census ASE proxy binary.

use std::sync::Arc;

use anyhow::Context;
use census_client::HttpCensusSource;
use census_server::{AppState, Settings, metrics::init_metrics, run_server};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Census ASE proxy v{}", census_server::version());
    tracing::info!("Census API: {}", settings.base_url);
    tracing::info!(
        cache_minutes = settings.cache_minutes,
        cache_capacity = settings.cache_capacity,
        "Cache configured"
    );
    if settings.api_key.is_none() {
        tracing::warn!("CENSUS_API_KEY is not set, requests will be rate limited by the Census API");
    }

    let addr = settings.socket_addr()?;
    let source = HttpCensusSource::new(settings.client_config()?)?;
    let state = AppState::new(Arc::new(source), settings.fetcher_config());

    let prometheus_handle = init_metrics().context("failed to install metrics recorder")?;

    run_server(addr, state, prometheus_handle).await?;

    Ok(())
}
