//! Logging estructurado de requests.

use axum::http::Request;
use tower_http::trace::MakeSpan;
use tracing::{Span, info_span};

use super::request_id::REQUEST_ID_HEADER;

/// Crea el span `http_request` con request id, metodo y path.
///
/// Debe ir dentro de `SetRequestIdLayer` para que el id ya exista.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown");

        info_span!(
            "http_request",
            request_id = %request_id,
            method = %request.method(),
            path = %request.uri().path(),
        )
    }
}
