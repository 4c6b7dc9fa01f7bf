//! Claims to MRF Transformation
//!
//! Builds one [`MrfDocument`] from a batch of validated claims. The output
//! holds a single bundled network group with one rate entry per claim, plus
//! one provider reference per claim at the same position. Provider
//! references are never merged, even when two claims share a provider name.

use chrono::{NaiveDate, Utc};

use crate::error::{CoreError, CoreResult};
use crate::types::{
    ClaimRecord, MrfDocument, NegotiatedPrice, NetworkGroup, ProviderAddress, ProviderGroup,
    ProviderReference, RateEntry, TaxIdentifier,
};

/// Schema version written into every document
pub const MRF_VERSION: &str = "1.0.0";
/// NPI used when a claim carries no provider tax id
pub const PLACEHOLDER_NPI: &str = "0000000000";
/// EIN used when a claim carries no provider tax id
pub const PLACEHOLDER_EIN: &str = "00-0000000";

const REPORTING_ENTITY_TYPE: &str = "health_plan";
const PLAN_ID_TYPE: &str = "hios";
const PLAN_ID_SUFFIX: &str = "_2024";
const PLAN_MARKET_TYPE: &str = "individual";
const NEGOTIATION_ARRANGEMENT: &str = "ffs";
const BILLING_CODE_TYPE: &str = "CPT";
const BILLING_CODE_TYPE_VERSION: &str = "2024";
const BUNDLE_BILLING_CODE: &str = "BUNDLE";
const BUNDLE_DESCRIPTION: &str = "Bundled Healthcare Services";
const NEGOTIATED_TYPE: &str = "negotiated";
const EXPIRATION_DATE: &str = "2024-12-31";
const TIN_TYPE: &str = "ein";

/// Builds MRF documents from claims
#[derive(Debug, Clone, Copy, Default)]
pub struct MrfTransformer;

impl MrfTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Transform claims into a document stamped with today's UTC date
    pub fn transform(&self, claims: &[ClaimRecord], customer: &str) -> CoreResult<MrfDocument> {
        self.transform_on(claims, customer, Utc::now().date_naive())
    }

    /// Transform claims into a document stamped with `last_updated_on`
    pub fn transform_on(
        &self,
        claims: &[ClaimRecord],
        customer: &str,
        last_updated_on: NaiveDate,
    ) -> CoreResult<MrfDocument> {
        if claims.is_empty() {
            return Err(CoreError::EmptyClaims);
        }
        if customer.trim().is_empty() {
            return Err(CoreError::MissingCustomer);
        }

        let network = NetworkGroup {
            negotiation_arrangement: NEGOTIATION_ARRANGEMENT.to_string(),
            name: format!("{} Network", customer),
            billing_code_type: BILLING_CODE_TYPE.to_string(),
            billing_code_type_version: BILLING_CODE_TYPE_VERSION.to_string(),
            billing_code: BUNDLE_BILLING_CODE.to_string(),
            description: BUNDLE_DESCRIPTION.to_string(),
            negotiated_rates: claims.iter().map(rate_entry).collect(),
        };

        let provider_references = claims
            .iter()
            .enumerate()
            .map(|(index, claim)| provider_reference(index, claim))
            .collect();

        Ok(MrfDocument {
            reporting_entity_name: customer.to_string(),
            reporting_entity_type: REPORTING_ENTITY_TYPE.to_string(),
            plan_name: format!("{} Health Plan", customer),
            plan_id_type: PLAN_ID_TYPE.to_string(),
            plan_id: plan_id(customer),
            plan_market_type: PLAN_MARKET_TYPE.to_string(),
            last_updated_on,
            version: MRF_VERSION.to_string(),
            in_network: vec![network],
            provider_references,
        })
    }
}

/// Plan id: customer name with all whitespace removed plus the plan year
pub fn plan_id(customer: &str) -> String {
    let compact: String = customer.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{}{}", compact, PLAN_ID_SUFFIX)
}

fn rate_entry(claim: &ClaimRecord) -> RateEntry {
    RateEntry {
        provider_groups: vec![ProviderGroup {
            npi: vec![claim.tin().unwrap_or(PLACEHOLDER_NPI).to_string()],
            tin: TaxIdentifier {
                id_type: TIN_TYPE.to_string(),
                value: claim.tin().unwrap_or(PLACEHOLDER_EIN).to_string(),
            },
        }],
        provider_references: vec![claim.provider_name.clone()],
        negotiated_prices: vec![NegotiatedPrice {
            negotiated_type: NEGOTIATED_TYPE.to_string(),
            negotiated_rate: claim.allowed_amount,
            expiration_date: EXPIRATION_DATE.to_string(),
            service_code: vec![claim.procedure_code.clone()],
            billing_class: claim.billing_class.clone(),
        }],
    }
}

fn provider_reference(index: usize, claim: &ClaimRecord) -> ProviderReference {
    ProviderReference {
        provider_group_id: index,
        provider_name: claim.provider_name.clone(),
        provider_address: ProviderAddress {
            address_type: "billing".to_string(),
            address: "Address not provided".to_string(),
            city: "City not provided".to_string(),
            state: "State not provided".to_string(),
            zip: "00000".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn claim(provider: &str, tin: Option<&str>, allowed: i64) -> ClaimRecord {
        ClaimRecord {
            provider_name: provider.to_string(),
            provider_tin: tin.map(str::to_string),
            procedure_code: "99213".to_string(),
            procedure_description: "Office visit".to_string(),
            place_of_service: "11".to_string(),
            billing_class: "professional".to_string(),
            allowed_amount: Decimal::new(allowed, 2),
            billed_amount: Decimal::new(allowed * 2, 2),
            service_date: "2024-03-01".to_string(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_single_claim_document() {
        let claims = vec![claim("Acme Clinic", Some("12-3456789"), 15000)];

        let doc = MrfTransformer::new()
            .transform_on(&claims, "Test Health", date())
            .unwrap();

        assert_eq!(doc.reporting_entity_name, "Test Health");
        assert_eq!(doc.reporting_entity_type, "health_plan");
        assert_eq!(doc.plan_name, "Test Health Health Plan");
        assert_eq!(doc.plan_id, "TestHealth_2024");
        assert_eq!(doc.version, MRF_VERSION);
        assert_eq!(doc.in_network.len(), 1);

        let group = &doc.in_network[0];
        assert_eq!(group.name, "Test Health Network");
        assert_eq!(group.billing_code, "BUNDLE");
        assert_eq!(group.negotiated_rates.len(), 1);

        let rate = &group.negotiated_rates[0];
        assert_eq!(rate.negotiated_prices[0].negotiated_rate, Decimal::new(15000, 2));
        assert_eq!(rate.negotiated_prices[0].service_code, vec!["99213".to_string()]);
        assert_eq!(rate.provider_groups[0].npi, vec!["12-3456789".to_string()]);
        assert_eq!(rate.provider_references, vec!["Acme Clinic".to_string()]);
        assert_eq!(doc.provider_references[0].provider_group_id, 0);
        assert_eq!(doc.record_count(), 1);
    }

    #[test]
    fn test_missing_tin_uses_placeholders() {
        let claims = vec![
            claim("Acme Clinic", Some("12-3456789"), 15000),
            claim("Beta Health", None, 9000),
        ];

        let doc = MrfTransformer::new()
            .transform_on(&claims, "Test Health", date())
            .unwrap();

        let group = &doc.in_network[0].negotiated_rates[1].provider_groups[0];
        assert_eq!(group.npi, vec![PLACEHOLDER_NPI.to_string()]);
        assert_eq!(group.tin.id_type, "ein");
        assert_eq!(group.tin.value, PLACEHOLDER_EIN);

        let first = &doc.in_network[0].negotiated_rates[0].provider_groups[0];
        assert_eq!(first.tin.value, "12-3456789");
    }

    #[test]
    fn test_references_aligned_and_not_deduplicated() {
        let claims = vec![
            claim("Acme Clinic", None, 100),
            claim("Acme Clinic", None, 200),
            claim("Beta Health", None, 300),
            claim("Acme Clinic", None, 400),
        ];

        let doc = MrfTransformer::new()
            .transform_on(&claims, "Dup Co", date())
            .unwrap();

        assert_eq!(doc.in_network[0].negotiated_rates.len(), claims.len());
        assert_eq!(doc.provider_references.len(), claims.len());
        for (i, reference) in doc.provider_references.iter().enumerate() {
            assert_eq!(reference.provider_group_id, i);
            assert_eq!(reference.provider_name, claims[i].provider_name);
            assert_eq!(reference.provider_address.zip, "00000");
        }
    }

    #[test]
    fn test_deterministic_for_fixed_date() {
        let claims = vec![claim("Acme", None, 100), claim("Beta", Some("99-1"), 250)];
        let transformer = MrfTransformer::new();

        let a = serde_json::to_vec(&transformer.transform_on(&claims, "Co", date()).unwrap()).unwrap();
        let b = serde_json::to_vec(&transformer.transform_on(&claims, "Co", date()).unwrap()).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_serialized_shape() {
        let claims = vec![claim("Acme Clinic", None, 15000)];
        let doc = MrfTransformer::new()
            .transform_on(&claims, "Test Health", date())
            .unwrap();

        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["last_updated_on"], "2024-06-01");
        assert_eq!(json["in_network"][0]["negotiated_rates"][0]["negotiated_prices"][0]["negotiated_rate"], 150.0);
        assert_eq!(json["in_network"][0]["negotiated_rates"][0]["provider_groups"][0]["tin"]["type"], "ein");
        assert_eq!(json["provider_references"][0]["provider_address"]["type"], "billing");
    }

    #[test]
    fn test_rejects_empty_input() {
        let transformer = MrfTransformer::new();

        assert!(matches!(
            transformer.transform_on(&[], "Co", date()),
            Err(CoreError::EmptyClaims)
        ));
        assert!(matches!(
            transformer.transform_on(&[claim("A", None, 1)], "  ", date()),
            Err(CoreError::MissingCustomer)
        ));
    }

    #[test]
    fn test_plan_id_strips_all_whitespace() {
        assert_eq!(plan_id("Blue  Cross\tPlan"), "BlueCrossPlan_2024");
    }
}
