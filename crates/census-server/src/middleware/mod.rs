//! Middleware stack para el servidor HTTP.
//!
//! - `MakeRequestUuidV7`: genera X-Request-Id cuando el cliente no manda uno
//! - `RequestSpan`: span de tracing por request con el request id
//! - `api_cors`: CORS abierto para `/api/*`

mod cors;
mod logging;
mod request_id;

pub use cors::api_cors;
pub use logging::RequestSpan;
pub use request_id::{MakeRequestUuidV7, REQUEST_ID_HEADER};
