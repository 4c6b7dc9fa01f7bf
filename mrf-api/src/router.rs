//! API Router
//!
//! Route definitions for the MRF API. Every route lives under `/api`.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, state::AppState};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Health endpoints
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness))
        // MRF endpoints
        .route("/generate-mrf", post(handlers::generate_mrf))
        .route("/mrf-files", get(handlers::list_mrf_files))
        .route("/download/:file_id", get(handlers::download_mrf))
        .route("/file/:file_id", get(handlers::get_file_details));

    Router::new()
        .nest("/api", api)
        .fallback(handlers::not_found)
        .with_state(state)
}
