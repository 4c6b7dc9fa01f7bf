//! API Server setup

use axum::{extract::DefaultBodyLimit, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::router::create_router;
use crate::state::AppState;
use crate::ServerConfig;

/// Wrap the router with body limit, tracing and CORS layers
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let mut router = create_router(state)
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}

/// Create storage directories, state and router
pub async fn create_server(
    config: &ServerConfig,
) -> Result<(Router, SocketAddr), Box<dyn std::error::Error + Send + Sync>> {
    // Reserved for raw uploads; nothing writes here yet
    tokio::fs::create_dir_all(&config.uploads_path).await?;

    let state = AppState::new(&config.storage_path).await?;
    let router = build_app(state, config);

    let addr: SocketAddr = config.bind_address().parse()?;

    Ok((router, addr))
}

/// Run the API server
pub async fn run_server(
    config: &ServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (router, addr) = create_server(config).await?;

    tracing::info!(
        storage = %config.storage_path,
        "MRF API server listening on {}",
        addr
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
