use thiserror::Error;

use super::Amount;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// A required argument was not supplied.
    #[error("Missing required argument: {0}")]
    InvalidArguments(&'static str),

    #[error("Account balance has not been set")]
    UninitializedState,

    /// The amount is not a number (text, list, object, boolean...).
    #[error("Unsupported amount type: {kind}")]
    InvalidType { kind: &'static str },

    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Amount, requested: Amount },

    #[error("Amount out of range")]
    Overflow,
}
