//! Error types

mod api;
mod field;
mod validation;

pub use api::*;
pub use field::*;
pub use validation::*;

/// Top-level error type for hrdesk operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from an API call.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Error accessing a record field.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A form failed client-side validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
