//! MRF API Handlers

pub mod health;
pub mod mrf;

pub use health::*;
pub use mrf::*;
