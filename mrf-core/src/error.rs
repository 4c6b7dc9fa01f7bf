//! MRF Core Error Types

use thiserror::Error;

/// Core errors
#[derive(Debug, Error)]
pub enum CoreError {
    /// No claims were supplied to the transformer
    #[error("At least one claim is required")]
    EmptyClaims,

    /// Customer name missing or blank
    #[error("Customer name is required")]
    MissingCustomer,

    /// Tabular input could not be read
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Core result type
pub type CoreResult<T> = Result<T, CoreError>;

impl From<csv::Error> for CoreError {
    fn from(err: csv::Error) -> Self {
        CoreError::Csv(err.to_string())
    }
}
