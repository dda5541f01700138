//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::HealthError;
use crate::state::AppState;
use crate::{SERVICE_NAME, VERSION_TAG};

/// Liveness verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Body of `GET /health`. Healthy reports carry `version` and `service`;
/// unhealthy ones carry `error` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            version: Some(VERSION_TAG.to_string()),
            service: Some(SERVICE_NAME.to_string()),
            error: None,
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            version: None,
            service: None,
            error: Some(error.into()),
        }
    }
}

/// GET /health: runs the installed liveness probe.
///
/// 200 with the healthy report, or 500 with `{"status":"unhealthy","error":..}`.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthReport>, HealthError> {
    if let Err(err) = state.probe.check().await {
        let err = HealthError::from(err);
        tracing::warn!(probe = state.probe.name(), error = %err, "health check failed");
        return Err(err);
    }

    Ok(Json(HealthReport::healthy()))
}
