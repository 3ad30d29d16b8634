//! Error types for the sellers.json validator

use thiserror::Error;

/// Result type for validator operations
pub type Result<T> = std::result::Result<T, SellersJsonError>;

/// Validator errors
#[derive(Error, Debug)]
pub enum SellersJsonError {
    #[error("Assertion error: {message}")]
    Assertion { message: String },

    #[error("Unknown seller type: {0}")]
    UnknownSellerType(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
