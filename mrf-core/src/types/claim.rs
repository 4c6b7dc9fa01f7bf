//! Claim Types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One untyped input row, keyed by normalized field name
pub type RawRow = BTreeMap<String, String>;

/// A single validated line-item claim
///
/// Only the validator constructs these from raw input, so every required
/// text field is non-empty and both amounts are strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub provider_name: String,
    /// Provider tax id; absent when the input cell was empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_tin: Option<String>,
    pub procedure_code: String,
    pub procedure_description: String,
    pub place_of_service: String,
    pub billing_class: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub allowed_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub billed_amount: Decimal,
    pub service_date: String,
}

impl ClaimRecord {
    /// Provider tax id, if one was supplied
    pub fn tin(&self) -> Option<&str> {
        self.provider_tin.as_deref()
    }
}
