use tower_http::cors::{Any, CorsLayer};

/// CORS para `/api/*`: cualquier origen, metodo y header.
pub fn api_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
