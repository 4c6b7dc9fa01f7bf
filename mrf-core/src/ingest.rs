//! Raw Row Ingest
//!
//! Produces [`RawRow`]s from delimited text or JSON objects. Field names are
//! normalized so `"Provider Name"` and `provider_name` address the same
//! column; values stay untyped text for the validator to coerce.

use std::io::Read;

use serde_json::Value;

use crate::error::CoreResult;
use crate::types::RawRow;

/// Normalize a column name: trimmed, lower-cased, whitespace runs to `_`
pub fn normalize_header(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Read CSV with a header line into raw rows
///
/// Blank lines and rows whose cells are all empty are skipped. Short rows
/// are accepted; their missing trailing cells are simply absent fields.
pub fn parse_csv<R: Read>(reader: R) -> CoreResult<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| (header.clone(), cell.to_string()))
            .collect();
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "Parsed CSV input");
    Ok(rows)
}

/// Convert a JSON object into a raw row
///
/// Strings are kept as-is, numbers and booleans are rendered as text, and
/// nulls are dropped. Anything other than an object yields an empty row.
pub fn raw_row_from_json(value: &Value) -> RawRow {
    let Some(object) = value.as_object() else {
        return RawRow::new();
    };

    object
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => return None,
                other => other.to_string(),
            };
            Some((normalize_header(key), text))
        })
        .collect()
}
