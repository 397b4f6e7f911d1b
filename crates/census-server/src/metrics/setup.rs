//! Metrics setup and initialization.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::info;

use super::{cache::register_cache_metrics, http::register_http_metrics};

/// Buckets para histogramas (en segundos). Las llamadas al Census API
/// tardan cientos de milisegundos, los cache hits microsegundos.
const BUCKETS: &[f64] = &[
    0.0001, // 100 microsegundos
    0.001,  // 1 milisegundo
    0.005,  // 5 milisegundos
    0.025,  // 25 milisegundos
    0.1,    // 100 milisegundos
    0.25,   // 250 milisegundos
    0.5,    // 500 milisegundos
    1.0,    // 1 segundo
    2.5,    // 2.5 segundos
    5.0,    // 5 segundos
    10.0,   // 10 segundos
    30.0,   // 30 segundos
];

/// Instala el recorder global y retorna el handle para el endpoint /metrics.
///
/// # Errors
///
/// Falla si ya hay un recorder instalado en el proceso.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new()
        .set_buckets(BUCKETS)?
        .install_recorder()?;

    register_cache_metrics();
    register_http_metrics();

    info!("Metrics system initialized");
    Ok(handle)
}

/// Construye un recorder sin instalarlo globalmente (para tests).
pub fn detached_handle() -> Result<PrometheusHandle, BuildError> {
    Ok(PrometheusBuilder::new().set_buckets(BUCKETS)?.build_recorder().handle())
}
