//! Machine-Readable File Types
//!
//! Serde model of the in-network rate file. Field names and their order
//! follow the published schema, so the structs serialize directly to the
//! document that is stored and served.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level MRF document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MrfDocument {
    pub reporting_entity_name: String,
    pub reporting_entity_type: String,
    pub plan_name: String,
    pub plan_id_type: String,
    pub plan_id: String,
    pub plan_market_type: String,
    pub last_updated_on: NaiveDate,
    pub version: String,
    /// Always exactly one bundled network group
    pub in_network: Vec<NetworkGroup>,
    /// One reference per claim, positionally aligned with the rates
    pub provider_references: Vec<ProviderReference>,
}

impl MrfDocument {
    /// Number of claims carried by the document
    pub fn record_count(&self) -> usize {
        self.in_network
            .iter()
            .map(|group| group.negotiated_rates.len())
            .sum()
    }
}

/// In-network billing code group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkGroup {
    pub negotiation_arrangement: String,
    pub name: String,
    pub billing_code_type: String,
    pub billing_code_type_version: String,
    pub billing_code: String,
    pub description: String,
    pub negotiated_rates: Vec<RateEntry>,
}

/// Negotiated rate for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub provider_groups: Vec<ProviderGroup>,
    pub provider_references: Vec<String>,
    pub negotiated_prices: Vec<NegotiatedPrice>,
}

/// Provider group identified by NPI list and tax id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderGroup {
    pub npi: Vec<String>,
    pub tin: TaxIdentifier,
}

/// Tax identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxIdentifier {
    #[serde(rename = "type")]
    pub id_type: String,
    pub value: String,
}

/// Price line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiatedPrice {
    pub negotiated_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub negotiated_rate: Decimal,
    pub expiration_date: String,
    pub service_code: Vec<String>,
    pub billing_class: String,
}

/// Provider reference entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderReference {
    /// Position of the originating claim in the input sequence
    pub provider_group_id: usize,
    pub provider_name: String,
    pub provider_address: ProviderAddress,
}

/// Provider address block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderAddress {
    #[serde(rename = "type")]
    pub address_type: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}
