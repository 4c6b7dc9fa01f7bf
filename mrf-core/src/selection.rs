//! Claim Selection
//!
//! Narrows a validated batch down to the rows a user approved.

use std::collections::BTreeSet;

use crate::types::ClaimRecord;

/// Keep the records at `indices`, preserving their original order
///
/// Duplicate and out-of-range indices are ignored.
pub fn select_claims(records: &[ClaimRecord], indices: &[usize]) -> Vec<ClaimRecord> {
    let selected: BTreeSet<usize> = indices.iter().copied().collect();
    records
        .iter()
        .enumerate()
        .filter(|(index, _)| selected.contains(index))
        .map(|(_, record)| record.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn claim(provider: &str) -> ClaimRecord {
        ClaimRecord {
            provider_name: provider.to_string(),
            provider_tin: None,
            procedure_code: "99213".to_string(),
            procedure_description: "Office visit".to_string(),
            place_of_service: "11".to_string(),
            billing_class: "professional".to_string(),
            allowed_amount: Decimal::ONE,
            billed_amount: Decimal::ONE,
            service_date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_selection_keeps_input_order() {
        let records = vec![claim("a"), claim("b"), claim("c"), claim("d")];

        let picked = select_claims(&records, &[3, 0, 3, 9]);

        let names: Vec<_> = picked.iter().map(|r| r.provider_name.as_str()).collect();
        assert_eq!(names, vec!["a", "d"]);
    }

    #[test]
    fn test_empty_selection() {
        let records = vec![claim("a")];
        assert!(select_claims(&records, &[]).is_empty());
    }
}
