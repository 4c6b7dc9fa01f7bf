//! MRF Core Types
//!
//! - Claim records (validated input rows)
//! - MRF documents (the published in-network rate file)

pub mod claim;
pub mod mrf;

pub use claim::{ClaimRecord, RawRow};
pub use mrf::{
    MrfDocument, NegotiatedPrice, NetworkGroup, ProviderAddress, ProviderGroup,
    ProviderReference, RateEntry, TaxIdentifier,
};
