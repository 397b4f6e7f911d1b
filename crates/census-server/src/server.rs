use std::net::SocketAddr;

use axum::{
    Router, middleware,
    routing::{delete, get},
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::handlers::{
    entrepreneur::{get_dataset, get_variables},
    health::health_check,
    invalidate::invalidate_all,
    metrics::metrics_handler,
};
use crate::metrics::http::track_http_requests;
use crate::middleware::{MakeRequestUuidV7, RequestSpan, api_cors};
use crate::state::AppState;

/// Routes under `/api`, with CORS open to every origin.
fn api_router() -> Router<AppState> {
    Router::new()
        .route("/entrepreneur/variables/{year}", get(get_variables))
        .route("/entrepreneur/cache", delete(invalidate_all))
        .route("/entrepreneur/{year}", get(get_dataset))
        .layer(api_cors())
}

fn with_middleware(router: Router) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(RequestSpan)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::x_request_id());

    router
        .layer(middleware::from_fn(track_http_requests))
        .layer(middleware_stack)
}

/// Creates the application router without the `/metrics` endpoint.
pub fn create_router(state: AppState) -> Router {
    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_router())
        .with_state(state);

    with_middleware(app)
}

/// Creates the application router plus `/metrics` served from `prometheus_handle`.
pub fn create_router_with_metrics(state: AppState, prometheus_handle: PrometheusHandle) -> Router {
    // Router for metrics endpoint (different state)
    let metrics_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_router())
        .with_state(state)
        .merge(metrics_router);

    with_middleware(app)
}

/// Runs the server until Ctrl+C or SIGTERM.
pub async fn run_server(
    addr: SocketAddr,
    state: AppState,
    prometheus_handle: PrometheusHandle,
) -> Result<(), std::io::Error> {
    let app = create_router_with_metrics(state, prometheus_handle);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
