//! Census Server - HTTP proxy for the Annual Survey of Entrepreneurs
//!
//! Serves reshaped Census Bureau ASE data under `/api/entrepreneur`, memoizing
//! every upstream call per normalized arguments and refetching a key once it
//! is older than the configured TTL or its last call failed.

pub mod cache;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod settings;
pub mod state;

pub use error::AppError;
pub use handlers::health::HealthResponse;
pub use server::{create_router, create_router_with_metrics, run_server};
pub use settings::{Settings, SettingsError};
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
