use thiserror::Error;

use crate::rates::RateError;

/// Failure taxonomy surfaced to the UI collaborator. Variants stay flat so a
/// caller can show a tailored message per kind instead of a generic error.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Rate service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Malformed rate response: {0}")]
    MalformedResponse(String),

    #[error("Storage error: {0}")]
    Persistence(#[from] anyhow::Error),
}

impl AppError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl From<RateError> for AppError {
    fn from(err: RateError) -> Self {
        match err {
            RateError::UnsupportedCurrency(code) => AppError::UnsupportedCurrency(code),
            RateError::ServiceUnavailable(detail) => AppError::ServiceUnavailable(detail),
            RateError::MalformedResponse(detail) => AppError::MalformedResponse(detail),
        }
    }
}
