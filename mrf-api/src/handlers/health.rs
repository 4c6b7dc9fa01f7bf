//! Health Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    dto::HealthResponse,
    error::{ApiError, ApiResult, ErrorResponse},
    state::AppState,
};

/// Liveness endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "MRF API is live".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Readiness probe: the storage backend must be reachable
pub async fn readiness(State(state): State<AppState>) -> ApiResult<&'static str> {
    let health = state.catalog.backend().health_check().await?;
    if health.healthy {
        Ok("OK")
    } else {
        Err(ApiError::internal(format!(
            "Storage backend not ready: {}",
            health.message
        )))
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("NOT_FOUND", "Endpoint not found")),
    )
}
