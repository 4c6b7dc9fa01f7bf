//! Output Formatting
//!
//! Utilities for formatting CLI output in various formats.

use crate::commands::OutputFormat;
use crate::handler::GenerateOutcome;
use mrf_core::ValidationReport;
use mrf_storage::MrfFileInfo;
use serde::Serialize;

/// Print as JSON
pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error formatting JSON: {}", e),
    }
}

/// Print a validation report
pub fn print_validation_report(report: &ValidationReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "accepted": report.records.len(),
            "rejected": report.errors.len(),
            "errors": report.errors,
        })),
        OutputFormat::Table => {
            println!("Validation Result");
            println!("=================");
            print_row("Accepted:", &report.records.len().to_string());
            print_row("Rejected:", &report.errors.len().to_string());
            if !report.errors.is_empty() {
                println!();
                for error in &report.errors {
                    println!("  - {}", error);
                }
            }
            if !report.records.is_empty() {
                println!();
                println!("{:<5} {:<30} {:<10} {:>12}", "#", "Provider", "Code", "Allowed");
                for (index, record) in report.records.iter().enumerate() {
                    println!(
                        "{:<5} {:<30} {:<10} {:>12}",
                        index, record.provider_name, record.procedure_code, record.allowed_amount
                    );
                }
            }
        }
    }
}

/// Print the result of a generation
pub fn print_generated(outcome: &GenerateOutcome, customer: &str, format: OutputFormat) {
    for error in &outcome.rejected {
        print_warning(&format!("skipped {}", error));
    }

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "success": true,
            "fileId": outcome.entry.id,
            "filename": outcome.entry.filename,
            "message": format!("Generated MRF for {}", customer),
        })),
        OutputFormat::Table => {
            println!("Generated MRF for {}", customer);
            print_row("File ID:", &outcome.entry.id);
            print_row("Filename:", &outcome.entry.filename);
            print_row("Records:", &outcome.entry.record_count.to_string());
            print_row("Size:", &format!("{} bytes", outcome.entry.size));
        }
    }
}

/// Print the catalog listing
pub fn print_file_list(files: &[MrfFileInfo], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&files),
        OutputFormat::Table => {
            if files.is_empty() {
                println!("No MRF files generated yet.");
                return;
            }
            println!(
                "{:<36}  {:<40}  {:<20}  {:>7}  {:>10}",
                "ID", "Filename", "Created", "Records", "Size"
            );
            for file in files {
                println!(
                    "{:<36}  {:<40}  {:<20}  {:>7}  {:>10}",
                    file.id,
                    file.filename,
                    file.created_at.format("%Y-%m-%d %H:%M:%S"),
                    file.record_count,
                    file.size
                );
            }
        }
    }
}

/// Print details of one file
pub fn print_file_info(file: &MrfFileInfo, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(file),
        OutputFormat::Table => {
            println!("MRF File");
            println!("========");
            print_row("ID:", &file.id);
            print_row("Filename:", &file.filename);
            print_row("Customer:", &file.customer);
            print_row("Created:", &file.created_at.to_rfc3339());
            print_row("Records:", &file.record_count.to_string());
            print_row("Size:", &format!("{} bytes", file.size));
        }
    }
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{}", message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    eprintln!("Warning: {}", message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{}", message);
}

/// Print a table row
pub fn print_row(key: &str, value: &str) {
    println!("{:<20} {}", key, value);
}
