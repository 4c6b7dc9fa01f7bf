//! CLI Commands Module
//!
//! Command definitions for the MRF CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MRF generator CLI
#[derive(Parser, Debug)]
#[command(name = "mrf")]
#[command(version)]
#[command(about = "Machine-readable file generator for approved claims")]
#[command(long_about = "Validate claims exports, generate MRF documents and manage \
    the catalog of generated files.\n\n\
    Every command except `serve` works directly on the storage directory.")]
pub struct Cli {
    /// Directory holding generated documents and the catalog index
    #[arg(short, long, global = true, env = "MRF_STORAGE_PATH", default_value = "./mrf-files")]
    pub storage: PathBuf,

    /// Output format (json, table)
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Table format (human-readable)
    #[default]
    Table,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the MRF API server
    Serve {
        /// Host to bind to (env: MRF_BIND_ADDR)
        #[arg(short = 'H', long, env = "MRF_BIND_ADDR", default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on (env: MRF_PORT, then PORT, default 3001)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate a claims CSV without generating anything
    Validate {
        /// Path to the CSV export
        csv: PathBuf,
        /// Print the accepted records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate an MRF document from a claims CSV
    Generate {
        /// Path to the CSV export
        csv: PathBuf,
        /// Customer the document is generated for
        #[arg(short, long)]
        customer: String,
        /// Zero-based indices of the accepted records to include
        #[arg(long, value_delimiter = ',')]
        select: Option<Vec<usize>>,
    },

    /// List generated files, newest first
    List,

    /// Show catalog details of one file
    Show {
        /// File id
        id: String,
    },

    /// Write a stored document to disk
    Download {
        /// File id
        id: String,
        /// Output path; defaults to the file's download name
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_help() {
        let result = Cli::try_parse_from(["mrf", "--help"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_parse_generate_with_selection() {
        let cli = Cli::try_parse_from([
            "mrf",
            "generate",
            "claims.csv",
            "--customer",
            "Test Health",
            "--select",
            "0,2,5",
            "--storage",
            "/tmp/mrf",
        ])
        .unwrap();

        assert_eq!(cli.storage, PathBuf::from("/tmp/mrf"));
        match cli.command {
            Commands::Generate {
                csv,
                customer,
                select,
            } => {
                assert_eq!(csv, PathBuf::from("claims.csv"));
                assert_eq!(customer, "Test Health");
                assert_eq!(select, Some(vec![0, 2, 5]));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_download_out() {
        let cli = Cli::try_parse_from(["mrf", "download", "abc", "--out", "doc.json"]).unwrap();
        match cli.command {
            Commands::Download { id, out } => {
                assert_eq!(id, "abc");
                assert_eq!(out, Some(PathBuf::from("doc.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_port() {
        let cli = Cli::try_parse_from(["mrf", "serve", "--port", "8080"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { port: Some(8080), .. }));

        let cli = Cli::try_parse_from(["mrf", "serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { port: None, .. }));
    }

    #[test]
    fn test_rejects_bad_selection() {
        let result = Cli::try_parse_from([
            "mrf", "generate", "c.csv", "--customer", "x", "--select", "1,two",
        ]);
        assert!(result.is_err());
    }
}
