use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use census_core::ErrorPayload;
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    /// Parametros invalidos
    BadRequest(String),

    /// El Census API fallo; el payload se devuelve tal cual
    Upstream(ErrorPayload),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Bad Request".to_string(),
                    message,
                }),
            )
                .into_response(),
            AppError::Upstream(payload) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
            },
        }
    }
}
