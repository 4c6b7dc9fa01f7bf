//! MRF Core
//!
//! Pure business rules for turning healthcare claim rows into a
//! machine-readable in-network rate file (MRF).
//!
//! # Pipeline
//!
//! ```text
//! CSV / JSON rows ──► ingest ──► RawRow[] ──► ClaimValidator ──► ClaimRecord[]
//!                                                  │
//!                                                  └──► "Row n: ..." errors
//!
//! ClaimRecord[] ──► select_claims ──► MrfTransformer ──► MrfDocument
//! ```
//!
//! Nothing in this crate performs storage I/O; persisting documents is the
//! job of `mrf-storage`.
//!
//! # Usage
//!
//! ```ignore
//! use mrf_core::{parse_csv, validate, MrfTransformer};
//!
//! let rows = parse_csv(std::fs::File::open("claims.csv")?)?;
//! let report = validate(&rows);
//! let document = MrfTransformer::new().transform(&report.records, "Test Health")?;
//! ```

pub mod error;
pub mod ingest;
pub mod selection;
pub mod transform;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult};
pub use ingest::{normalize_header, parse_csv, raw_row_from_json};
pub use selection::select_claims;
pub use transform::{MrfTransformer, MRF_VERSION, PLACEHOLDER_EIN, PLACEHOLDER_NPI};
pub use types::{
    ClaimRecord, MrfDocument, NegotiatedPrice, NetworkGroup, ProviderAddress, ProviderGroup,
    ProviderReference, RateEntry, RawRow, TaxIdentifier,
};
pub use validation::{
    validate, ClaimValidator, Constraint, FieldRule, RowOutcome, ValidationReport, CLAIM_SCHEMA,
};
