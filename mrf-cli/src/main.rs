//! MRF CLI Entry Point
//!
//! Configuration is loaded from environment variables (via .env file).
//! Command-line arguments override environment variables.

use clap::Parser;
use mrf_api::{init_logging, LogConfig, LogLevel};
use mrf_cli::{handler, Cli, Commands};

#[tokio::main]
async fn main() {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The server always logs; other commands only when verbose
    if cli.verbose || matches!(cli.command, Commands::Serve { .. }) {
        let mut config = LogConfig::from_env();
        if cli.verbose {
            config.level = LogLevel::Debug;
        }
        if let Err(e) = init_logging(&config) {
            eprintln!("Warning: failed to initialize logging: {}", e);
        }
    }

    if let Err(e) = handler::run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
