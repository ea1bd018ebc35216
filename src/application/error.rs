use thiserror::Error;

use crate::domain::AccountError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// The account-level failure behind this error, if any.
    pub fn account_error(&self) -> Option<&AccountError> {
        match self {
            AppError::Account(err) => Some(err),
            _ => None,
        }
    }
}
