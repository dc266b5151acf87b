//! # Error Handling Middleware
//!
//! This module maps domain errors to HTTP status codes and JSON error
//! responses, so every handler reports failures in the same shape:
//!
//! ```json
//! { "error": "Validation error: month must be between 1 and 12" }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use barbershop_core::errors::BarberError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps a `BarberError` and implements `IntoResponse`, so
/// handlers can return `Result<Json<T>, AppError>` and use `?` on both
/// domain results and repository results.
#[derive(Debug)]
pub struct AppError(pub BarberError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BarberError::NotFound(_) => StatusCode::NOT_FOUND,
            BarberError::Validation(_) => StatusCode::BAD_REQUEST,
            BarberError::Conflict(_) => StatusCode::CONFLICT,
            BarberError::Authentication(_) => StatusCode::UNAUTHORIZED,
            BarberError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BarberError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<BarberError> for AppError {
    fn from(err: BarberError) -> Self {
        AppError(err)
    }
}

/// Repository failures surface as `BarberError::Database`
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BarberError::Database(err))
    }
}

/// Maps a BarberError to an HTTP response
pub fn map_error(err: BarberError) -> Response {
    AppError(err).into_response()
}
