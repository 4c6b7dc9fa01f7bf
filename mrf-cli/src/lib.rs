//! MRF CLI - Command Line Interface
//!
//! Command-line access to the MRF generator: run the API server, validate
//! claims exports, and generate, list and download MRF files straight from
//! a storage directory.
//!
//! # Usage
//!
//! ```text
//! mrf [OPTIONS] <COMMAND>
//!
//! Commands:
//!   serve     Start the MRF API server
//!   validate  Validate a claims CSV without generating anything
//!   generate  Generate an MRF document from a claims CSV
//!   list      List generated files, newest first
//!   show      Show catalog details of one file
//!   download  Write a stored document to disk
//!
//! Options:
//!   -s, --storage <DIR>    Storage directory [env: MRF_STORAGE_PATH] [default: ./mrf-files]
//!   -f, --format <FORMAT>  Output format (json, table) [default: table]
//!   -v, --verbose          Enable verbose output
//! ```
//!
//! # Examples
//!
//! ```text
//! mrf validate claims.csv
//! mrf generate claims.csv --customer "Test Health" --select 0,2,5
//! mrf download 3f2c0a4e-... --out plan.json
//! ```

pub mod commands;
pub mod error;
pub mod handler;
pub mod output;

pub use commands::{Cli, Commands, OutputFormat};
pub use error::{CliError, CliResult};

/// MRF CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
