// ABOUTME: Error types for pnyx ledger operations
// ABOUTME: Defines PnyxError enum covering all failure modes

use thiserror::Error;

/// Errors that can occur during ledger operations
#[derive(Error, Debug)]
pub enum PnyxError {
    /// Rating value outside the allowed [-5, 5] band
    #[error("invalid rating {value}: must be between -5 and 5")]
    InvalidRating { value: i32 },

    /// Empty domain, issue, suggestion, or voter identifier
    #[error("invalid identifier: {field} must be non-empty")]
    InvalidIdentifier { field: &'static str },

    /// Domain policy that cannot be applied
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    /// I/O error reading a policy file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
