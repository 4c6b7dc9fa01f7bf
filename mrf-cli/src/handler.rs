//! Command Handlers
//!
//! Handler functions for CLI commands. Everything except `serve` works on
//! the storage directory directly, through the same catalog the server uses.

use std::fs::File;
use std::path::{Path, PathBuf};

use mrf_api::{AppState, ServerConfig};
use mrf_core::{parse_csv, select_claims, ClaimValidator, ValidationReport};
use mrf_storage::CatalogEntry;

use crate::commands::{Cli, Commands, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output;

/// Result of a CLI generation
#[derive(Debug)]
pub struct GenerateOutcome {
    /// Catalog entry of the stored document
    pub entry: CatalogEntry,
    /// Messages for rows skipped during validation
    pub rejected: Vec<String>,
}

/// Run the CLI with parsed arguments
pub async fn run(cli: Cli) -> CliResult<()> {
    if cli.storage.as_os_str().is_empty() {
        return Err(CliError::config("storage path must not be empty"));
    }

    match cli.command {
        Commands::Serve { host, port } => handle_serve(&cli.storage, host, port).await,
        Commands::Validate { csv, json } => handle_validate(&csv, json, cli.format),
        Commands::Generate {
            csv,
            customer,
            select,
        } => {
            let state = open_state(&cli.storage).await?;
            let outcome = generate_from_csv(&state, &csv, &customer, select.as_deref()).await?;
            output::print_generated(&outcome, &customer, cli.format);
            Ok(())
        }
        Commands::List => {
            let state = open_state(&cli.storage).await?;
            output::print_file_list(&state.catalog.list().await, cli.format);
            Ok(())
        }
        Commands::Show { id } => {
            let state = open_state(&cli.storage).await?;
            output::print_file_info(&state.catalog.get(&id).await?, cli.format);
            Ok(())
        }
        Commands::Download { id, out } => {
            let state = open_state(&cli.storage).await?;
            let written = download_to(&state, &id, out).await?;
            output::print_success(&format!("Wrote {}", written.display()));
            Ok(())
        }
    }
}

/// Open the catalog over a storage directory
async fn open_state(storage: &Path) -> CliResult<AppState> {
    Ok(AppState::new(storage).await?)
}

/// Server settings for `serve`: flags first, then the environment
pub fn serve_config(storage: &Path, host: String, port: Option<u16>) -> ServerConfig {
    let env = ServerConfig::from_env();
    ServerConfig {
        bind_addr: host,
        port: port.unwrap_or(env.port),
        storage_path: storage.to_string_lossy().into_owned(),
        ..env
    }
}

/// Handle starting the API server
async fn handle_serve(storage: &Path, host: String, port: Option<u16>) -> CliResult<()> {
    let config = serve_config(storage, host, port);

    output::print_info(&format!("Starting MRF API server on {}", config.bind_address()));
    output::print_info(&format!("  Storage: {}", config.storage_path));

    mrf_api::run_server(&config)
        .await
        .map_err(|e| CliError::server(e.to_string()))
}

/// Handle CSV validation
fn handle_validate(csv: &Path, json: bool, format: OutputFormat) -> CliResult<()> {
    let report = validate_csv(csv)?;

    if json {
        output::print_json(&report.records);
    } else {
        output::print_validation_report(&report, format);
    }

    if report.records.is_empty() && !report.errors.is_empty() {
        return Err(CliError::ValidationFailed {
            rejected: report.errors.len(),
        });
    }
    Ok(())
}

/// Parse and validate a CSV export. Row numbers count the header line.
pub fn validate_csv(path: &Path) -> CliResult<ValidationReport> {
    let file = File::open(path)?;
    let rows = parse_csv(file)?;
    let report = ClaimValidator::new().validate(&rows);

    tracing::debug!(
        path = %path.display(),
        accepted = report.records.len(),
        rejected = report.errors.len(),
        "Validated claims file"
    );

    Ok(report)
}

/// Validate a CSV export, keep the selected accepted records and store the
/// resulting document
///
/// Rejected rows are skipped and reported back. Selection indices address
/// the accepted records, not the raw rows.
pub async fn generate_from_csv(
    state: &AppState,
    csv: &Path,
    customer: &str,
    select: Option<&[usize]>,
) -> CliResult<GenerateOutcome> {
    if customer.trim().is_empty() {
        return Err(CliError::invalid_arg("customer must not be blank"));
    }

    let report = validate_csv(csv)?;
    if report.records.is_empty() {
        return Err(CliError::ValidationFailed {
            rejected: report.errors.len(),
        });
    }

    let claims = match select {
        Some(indices) => {
            let selected = select_claims(&report.records, indices);
            if selected.is_empty() {
                return Err(CliError::invalid_arg(format!(
                    "selection matched none of the {} accepted records",
                    report.records.len()
                )));
            }
            selected
        }
        None => report.records,
    };

    let document = state.transformer.transform(&claims, customer)?;
    let entry = state.catalog.store(&document, customer).await?;

    Ok(GenerateOutcome {
        entry,
        rejected: report.errors,
    })
}

/// Write a stored document to `out`, or to its download name in the
/// current directory
pub async fn download_to(state: &AppState, id: &str, out: Option<PathBuf>) -> CliResult<PathBuf> {
    let file = state.catalog.retrieve(id).await?;
    let path = out.unwrap_or_else(|| PathBuf::from(&file.filename));

    tokio::fs::write(&path, &file.bytes).await?;
    tracing::info!(file_id = %id, path = %path.display(), size = file.bytes.len(), "Downloaded MRF file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CSV: &str = "Provider Name,Provider TIN,Procedure Code,Procedure Description,\
Place of Service,Billing Class,Allowed Amount,Billed Amount,Service Date\n\
Acme Clinic,12-3456789,99213,Office visit,11,professional,150.00,200.00,2024-03-01\n\
Beta Health,,80053,Metabolic panel,81,institutional,42.10,60.00,2024-03-02\n\
Broken Row,,,Missing code,11,professional,0,10,2024-03-03\n\
Gamma Care,98-7654321,93000,ECG,11,professional,25,30,2024-03-04\n";

    fn write_csv(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("claims.csv");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_validate_csv_reports_header_offset_rows() {
        let dir = TempDir::new().unwrap();
        let csv = write_csv(&dir, CSV);

        let report = validate_csv(&csv).unwrap();

        assert_eq!(report.records.len(), 3);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Row 4: "));
    }

    #[test]
    fn test_serve_config_port_precedence() {
        let explicit = serve_config(Path::new("/tmp/mrf"), "127.0.0.1".to_string(), Some(8080));
        assert_eq!(explicit.bind_address(), "127.0.0.1:8080");
        assert_eq!(explicit.storage_path, "/tmp/mrf");

        let from_env = serve_config(Path::new("/tmp/mrf"), "0.0.0.0".to_string(), None);
        assert_eq!(from_env.port, ServerConfig::from_env().port);
    }

    #[test]
    fn test_validate_missing_file() {
        let err = validate_csv(Path::new("/nonexistent/claims.csv")).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }

    #[tokio::test]
    async fn test_generate_skips_rejected_rows() {
        let dir = TempDir::new().unwrap();
        let csv = write_csv(&dir, CSV);
        let state = AppState::new(dir.path().join("store")).await.unwrap();

        let outcome = generate_from_csv(&state, &csv, "Test Health", None).await.unwrap();

        assert_eq!(outcome.entry.record_count, 3);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(state.catalog.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_generate_with_selection() {
        let dir = TempDir::new().unwrap();
        let csv = write_csv(&dir, CSV);
        let state = AppState::new(dir.path().join("store")).await.unwrap();

        let outcome = generate_from_csv(&state, &csv, "Test Health", Some(&[0, 2, 9]))
            .await
            .unwrap();
        assert_eq!(outcome.entry.record_count, 2);

        let file = state.catalog.retrieve(&outcome.entry.id).await.unwrap();
        let document: serde_json::Value = serde_json::from_slice(&file.bytes).unwrap();
        let refs = document["provider_references"].as_array().unwrap();
        assert_eq!(refs[0]["provider_name"], "Acme Clinic");
        assert_eq!(refs[1]["provider_name"], "Gamma Care");
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_selection_and_blank_customer() {
        let dir = TempDir::new().unwrap();
        let csv = write_csv(&dir, CSV);
        let state = AppState::new(dir.path().join("store")).await.unwrap();

        let err = generate_from_csv(&state, &csv, "Test Health", Some(&[7]))
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let err = generate_from_csv(&state, &csv, "  ", None).await.unwrap_err();
        assert_eq!(err.exit_code(), 2);

        assert!(state.catalog.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_generate_all_rows_rejected() {
        let dir = TempDir::new().unwrap();
        let csv = write_csv(
            &dir,
            "provider_name,allowed_amount\nAcme Clinic,150\n",
        );
        let state = AppState::new(dir.path().join("store")).await.unwrap();

        let err = generate_from_csv(&state, &csv, "Test Health", None)
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::ValidationFailed { rejected: 1 }));
    }

    #[tokio::test]
    async fn test_download_to_path() {
        let dir = TempDir::new().unwrap();
        let csv = write_csv(&dir, CSV);
        let state = AppState::new(dir.path().join("store")).await.unwrap();
        let outcome = generate_from_csv(&state, &csv, "Test Health", None).await.unwrap();

        let target = dir.path().join("out.json");
        let written = download_to(&state, &outcome.entry.id, Some(target.clone()))
            .await
            .unwrap();

        assert_eq!(written, target);
        let bytes = std::fs::read(&target).unwrap();
        assert_eq!(bytes.len() as u64, outcome.entry.size);

        let err = download_to(&state, "missing", Some(target)).await.unwrap_err();
        assert_eq!(err.exit_code(), 21);
    }
}
