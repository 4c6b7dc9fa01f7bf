//! Data Transfer Objects for the MRF API

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

/// Generate MRF request
///
/// Both fields stay untyped JSON so a `null`, a missing field or a value of
/// the wrong type is reported as a bad request instead of a body rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateMrfRequest {
    /// Approved claim rows, as submitted by the client
    #[serde(default)]
    #[validate(required, custom = "non_empty_array")]
    pub claims: Option<Value>,

    /// Customer the file is generated for
    #[serde(default)]
    #[validate(required, custom = "non_blank_string")]
    pub customer: Option<Value>,
}

impl GenerateMrfRequest {
    /// Submitted claim rows, if `claims` is a non-empty array
    pub fn claim_rows(&self) -> Option<&[Value]> {
        match &self.claims {
            Some(Value::Array(rows)) if !rows.is_empty() => Some(rows),
            _ => None,
        }
    }

    /// Customer name exactly as submitted, if it is a non-blank string
    pub fn customer_name(&self) -> Option<&str> {
        match &self.customer {
            Some(Value::String(customer)) if !customer.trim().is_empty() => Some(customer),
            _ => None,
        }
    }
}

fn non_empty_array(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Array(rows) if !rows.is_empty() => Ok(()),
        _ => Err(ValidationError::new("non_empty_array")),
    }
}

fn non_blank_string(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new("non_blank_string")),
    }
}

/// Generate MRF response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMrfResponse {
    pub success: bool,
    /// Catalog id of the stored file
    pub file_id: String,
    pub filename: String,
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> GenerateMrfRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_accepts_claims_and_customer() {
        let req = request(json!({ "claims": [{}], "customer": " Acme " }));
        assert!(req.validate().is_ok());
        assert_eq!(req.claim_rows().map(<[Value]>::len), Some(1));
        assert_eq!(req.customer_name(), Some(" Acme "));
    }

    #[test]
    fn test_rejects_missing_or_mistyped_fields() {
        for body in [
            json!({}),
            json!({ "claims": null, "customer": "Acme" }),
            json!({ "claims": {}, "customer": "Acme" }),
            json!({ "claims": [], "customer": "Acme" }),
            json!({ "claims": [{}], "customer": 42 }),
            json!({ "claims": [{}], "customer": "   " }),
        ] {
            let req = request(body.clone());
            assert!(req.validate().is_err(), "accepted {}", body);
            assert!(
                req.claim_rows().is_none() || req.customer_name().is_none(),
                "accepted {}",
                body
            );
        }
    }
}
