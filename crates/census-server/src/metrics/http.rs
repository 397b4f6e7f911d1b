//! Per-route HTTP metrics.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use tokio::time::Instant;

/// Label para requests que no matchean ninguna ruta (404, 405).
const UNMATCHED_ROUTE: &str = "unmatched";

/// Agrupa status codes para no crear una serie por codigo.
fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        _ => "5xx",
    }
}

/// Registra requests, latencia y respuestas con error upstream por ruta.
///
/// La ruta es la plantilla matcheada (`/api/entrepreneur/{year}`), asi un
/// año nuevo no abre una serie nueva. En este servicio un 5xx siempre
/// significa que el Census API fallo, por eso se cuenta aparte.
pub async fn track_http_requests(
    matched_path: Option<MatchedPath>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let route = matched_path
        .as_ref()
        .map_or(UNMATCHED_ROUTE, MatchedPath::as_str)
        .to_owned();
    let method = request.method().as_str().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let elapsed = started.elapsed().as_secs_f64();
    let status = response.status();

    counter!(
        "census_http_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => status_class(status)
    )
    .increment(1);
    histogram!(
        "census_http_request_duration_seconds",
        "method" => method,
        "route" => route.clone()
    )
    .record(elapsed);

    if status.is_server_error() {
        counter!("census_http_upstream_failures_total", "route" => route).increment(1);
    }

    response
}

/// Describe las metricas HTTP
pub fn register_http_metrics() {
    metrics::describe_counter!(
        "census_http_requests_total",
        "HTTP requests by method, route template and status class"
    );
    metrics::describe_histogram!(
        "census_http_request_duration_seconds",
        "HTTP request duration in seconds, cache hits included"
    );
    metrics::describe_counter!(
        "census_http_upstream_failures_total",
        "Responses that carried a Census error payload"
    );
}
