//! MRF REST API Layer
//!
//! HTTP API for generating, listing and downloading machine-readable files.
//!
//! # Endpoints
//!
//! ## Health
//! - `GET /api/health` - Liveness check
//! - `GET /api/ready` - Storage readiness probe
//!
//! ## MRF Files
//! - `POST /api/generate-mrf` - Validate claims, generate and store an MRF
//! - `GET /api/mrf-files` - List generated files, newest first
//! - `GET /api/file/:file_id` - File details
//! - `GET /api/download/:file_id` - Download the stored document
//!
//! # Usage
//!
//! ```ignore
//! use mrf_api::{run_server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let config = ServerConfig::from_env();
//!     run_server(&config).await
//! }
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use router::create_router;
pub use server::{build_app, create_server, run_server};
pub use state::AppState;

/// API version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default port
pub const DEFAULT_PORT: u16 = 3001;

/// Default request body limit (50 MiB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 50 * 1024 * 1024;

/// Configuration for the MRF API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub bind_addr: String,
    /// Port
    pub port: u16,
    /// Directory holding generated documents and the catalog index
    pub storage_path: String,
    /// Directory reserved for raw uploads
    pub uploads_path: String,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
    /// Enable permissive CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            storage_path: "./mrf-files".to_string(),
            uploads_path: "./uploads".to_string(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var("MRF_BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: std::env::var("MRF_PORT")
                .or_else(|_| std::env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            storage_path: std::env::var("MRF_STORAGE_PATH").unwrap_or(defaults.storage_path),
            uploads_path: std::env::var("MRF_UPLOADS_PATH").unwrap_or(defaults.uploads_path),
            max_body_size: std::env::var("MRF_MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
            enable_cors: std::env::var("MRF_ENABLE_CORS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_cors),
        }
    }

    /// Get the full bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
        assert_eq!(config.max_body_size, 50 * 1024 * 1024);
        assert!(config.enable_cors);
    }
}
