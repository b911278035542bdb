//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::DATABASE_UNREACHABLE_MESSAGE;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub services: ServiceStatus,
}

/// Individual service status.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    pub database: ServiceHealth,
}

/// Service health with optional error message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint - verifies database connectivity.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = match state.user_service.health().await {
        Ok(()) => ServiceHealth {
            status: "healthy".to_string(),
            error: None,
        },
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            ServiceHealth {
                status: "unhealthy".to_string(),
                error: Some(DATABASE_UNREACHABLE_MESSAGE.to_string()),
            }
        }
    };

    let all_healthy = database.status == "healthy";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        services: ServiceStatus { database },
    };

    if all_healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
