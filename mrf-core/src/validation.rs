//! Claim Validation
//!
//! Turns untyped input rows into [`ClaimRecord`]s. The accepted shape is the
//! [`CLAIM_SCHEMA`] table; every row is checked against the whole table so a
//! rejected row reports all of its violations at once.
//!
//! Rejected rows never abort a batch. They are dropped from the output and a
//! `"Row <n>: ..."` message is collected instead, where `<n>` is the row's
//! 1-based position in the input file (header rows included).

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::types::{ClaimRecord, RawRow};

/// Constraint applied to one input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Text that is non-empty after trimming
    Required,
    /// Decimal strictly greater than zero
    PositiveAmount,
}

/// One row of the claim schema
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraint: Constraint,
    /// Reported when the constraint is violated
    pub message: &'static str,
}

/// Claim input schema. `provider_tin` is optional and therefore unlisted.
pub const CLAIM_SCHEMA: &[FieldRule] = &[
    FieldRule {
        field: "provider_name",
        constraint: Constraint::Required,
        message: "Provider name is required",
    },
    FieldRule {
        field: "procedure_code",
        constraint: Constraint::Required,
        message: "Procedure code is required",
    },
    FieldRule {
        field: "procedure_description",
        constraint: Constraint::Required,
        message: "Procedure description is required",
    },
    FieldRule {
        field: "place_of_service",
        constraint: Constraint::Required,
        message: "Place of service is required",
    },
    FieldRule {
        field: "billing_class",
        constraint: Constraint::Required,
        message: "Billing class is required",
    },
    FieldRule {
        field: "allowed_amount",
        constraint: Constraint::PositiveAmount,
        message: "Allowed amount must be positive",
    },
    FieldRule {
        field: "billed_amount",
        constraint: Constraint::PositiveAmount,
        message: "Billed amount must be positive",
    },
    FieldRule {
        field: "service_date",
        constraint: Constraint::Required,
        message: "Service date is required",
    },
];

/// Result of validating a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Valid(ClaimRecord),
    Invalid {
        row_number: usize,
        violations: Vec<&'static str>,
    },
}

impl RowOutcome {
    /// Human-readable error line for an invalid row
    pub fn error_message(&self) -> Option<String> {
        match self {
            RowOutcome::Valid(_) => None,
            RowOutcome::Invalid {
                row_number,
                violations,
            } => Some(format!("Row {}: {}", row_number, violations.join(", "))),
        }
    }
}

/// Output of a batch validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Accepted records, in input order
    pub records: Vec<ClaimRecord>,
    /// One message per rejected row
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// True when every row was accepted
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Row validator
#[derive(Debug, Clone, Copy)]
pub struct ClaimValidator {
    header_rows: usize,
}

impl Default for ClaimValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimValidator {
    /// Validator for delimited input with a single header line
    pub fn new() -> Self {
        Self { header_rows: 1 }
    }

    /// Validator for input without a header line (e.g. JSON arrays)
    pub fn without_header() -> Self {
        Self { header_rows: 0 }
    }

    /// Validate every row, keeping the valid ones in order
    pub fn validate(&self, rows: &[RawRow]) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (index, row) in rows.iter().enumerate() {
            match self.validate_row(index, row) {
                RowOutcome::Valid(record) => report.records.push(record),
                outcome => {
                    if let Some(message) = outcome.error_message() {
                        report.errors.push(message);
                    }
                }
            }
        }

        if !report.errors.is_empty() {
            tracing::debug!(
                accepted = report.records.len(),
                rejected = report.errors.len(),
                "Claim rows rejected during validation"
            );
        }

        report
    }

    /// Validate one row; `index` is its 0-based position among data rows
    pub fn validate_row(&self, index: usize, row: &RawRow) -> RowOutcome {
        let violations: Vec<&'static str> = CLAIM_SCHEMA
            .iter()
            .filter(|rule| !satisfies(row, rule))
            .map(|rule| rule.message)
            .collect();

        if !violations.is_empty() {
            return RowOutcome::Invalid {
                row_number: index + 1 + self.header_rows,
                violations,
            };
        }

        RowOutcome::Valid(ClaimRecord {
            provider_name: text(row, "provider_name"),
            provider_tin: Some(text(row, "provider_tin")).filter(|tin| !tin.is_empty()),
            procedure_code: text(row, "procedure_code"),
            procedure_description: text(row, "procedure_description"),
            place_of_service: text(row, "place_of_service"),
            billing_class: text(row, "billing_class"),
            allowed_amount: amount(row, "allowed_amount"),
            billed_amount: amount(row, "billed_amount"),
            service_date: text(row, "service_date"),
        })
    }
}

/// Validate rows read from a source with one header line
pub fn validate(rows: &[RawRow]) -> ValidationReport {
    ClaimValidator::new().validate(rows)
}

fn satisfies(row: &RawRow, rule: &FieldRule) -> bool {
    match rule.constraint {
        Constraint::Required => !text(row, rule.field).is_empty(),
        Constraint::PositiveAmount => amount(row, rule.field) > Decimal::ZERO,
    }
}

fn text(row: &RawRow, field: &str) -> String {
    row.get(field)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Coerce a text cell to a decimal. Missing or unparseable cells become zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .unwrap_or(Decimal::ZERO)
}

fn amount(row: &RawRow, field: &str) -> Decimal {
    row.get(field)
        .map(|value| parse_amount(value))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid_row(provider: &str) -> RawRow {
        row(&[
            ("provider_name", provider),
            ("provider_tin", "12-3456789"),
            ("procedure_code", "99213"),
            ("procedure_description", "Office visit"),
            ("place_of_service", "11"),
            ("billing_class", "professional"),
            ("allowed_amount", "150.00"),
            ("billed_amount", "200.00"),
            ("service_date", "2024-03-01"),
        ])
    }

    #[test]
    fn test_valid_rows_kept_in_order() {
        let rows = vec![valid_row("Acme Clinic"), valid_row("Beta Health"), valid_row("Gamma")];

        let report = validate(&rows);

        assert!(report.is_clean());
        let names: Vec<_> = report.records.iter().map(|r| r.provider_name.as_str()).collect();
        assert_eq!(names, vec!["Acme Clinic", "Beta Health", "Gamma"]);
        assert_eq!(report.records[0].allowed_amount, Decimal::new(15000, 2));
        assert_eq!(report.records[0].tin(), Some("12-3456789"));
    }

    #[test]
    fn test_empty_input() {
        let report = validate(&[]);
        assert!(report.records.is_empty());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_non_positive_allowed_amount_dropped() {
        let mut zero = valid_row("Zero");
        zero.insert("allowed_amount".to_string(), "0".to_string());
        let mut negative = valid_row("Negative");
        negative.insert("allowed_amount".to_string(), "-5".to_string());
        let mut missing = valid_row("Missing");
        missing.remove("allowed_amount");

        let rows = vec![valid_row("Ok"), zero, negative, missing];
        let report = validate(&rows);

        assert_eq!(report.records.len(), 1);
        assert_eq!(
            report.errors,
            vec![
                "Row 3: Allowed amount must be positive".to_string(),
                "Row 4: Allowed amount must be positive".to_string(),
                "Row 5: Allowed amount must be positive".to_string(),
            ]
        );
    }

    #[test]
    fn test_unparseable_amount_treated_as_zero() {
        let mut bad = valid_row("Bad");
        bad.insert("billed_amount".to_string(), "n/a".to_string());

        let report = validate(&[bad]);

        assert!(report.records.is_empty());
        assert_eq!(report.errors, vec!["Row 2: Billed amount must be positive".to_string()]);
    }

    #[test]
    fn test_all_violations_reported_in_schema_order() {
        let rows = vec![row(&[("provider_name", "Only Name")])];

        let report = validate(&rows);

        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0],
            "Row 2: Procedure code is required, Procedure description is required, \
             Place of service is required, Billing class is required, \
             Allowed amount must be positive, Billed amount must be positive, \
             Service date is required"
        );
    }

    #[test]
    fn test_whitespace_only_text_is_empty() {
        let mut blank = valid_row("Blank");
        blank.insert("procedure_code".to_string(), "   ".to_string());

        let report = validate(&[blank]);

        assert_eq!(report.errors, vec!["Row 2: Procedure code is required".to_string()]);
    }

    #[test]
    fn test_without_header_numbering() {
        let mut bad = valid_row("Bad");
        bad.remove("service_date");

        let report = ClaimValidator::without_header().validate(&[bad]);

        assert_eq!(report.errors, vec!["Row 1: Service date is required".to_string()]);
    }

    #[test]
    fn test_empty_tin_becomes_absent() {
        let mut no_tin = valid_row("No Tin");
        no_tin.insert("provider_tin".to_string(), "".to_string());

        let outcome = ClaimValidator::new().validate_row(0, &no_tin);

        match outcome {
            RowOutcome::Valid(record) => assert_eq!(record.provider_tin, None),
            other => panic!("expected valid row, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 42.50 "), Decimal::new(4250, 2));
        assert_eq!(parse_amount("1e2"), Decimal::from(100));
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
    }
}
