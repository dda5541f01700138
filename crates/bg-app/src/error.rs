//! Health-check error type with Axum `IntoResponse` support.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::routes::health::HealthReport;

/// The only runtime failure the app reports.
#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("{0}")]
    CheckFailed(String),
}

impl From<anyhow::Error> for HealthError {
    fn from(err: anyhow::Error) -> Self {
        HealthError::CheckFailed(format!("{err:#}"))
    }
}

impl IntoResponse for HealthError {
    fn into_response(self) -> Response {
        let body = HealthReport::unhealthy(self.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
