//! Error types for the OpenShield foundation layer

use thiserror::Error;

/// Result type for foundation-type operations
pub type Result<T> = std::result::Result<T, TypesError>;

/// Errors produced while constructing or parsing foundation types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// Denomination does not match the accepted grammar
    #[error("invalid denomination: {denom}")]
    InvalidDenom { denom: String },

    /// A coin set contains the same denomination twice
    #[error("duplicate denomination: {denom}")]
    DuplicateDenom { denom: String },

    /// Amount could not be parsed as an unsigned integer
    #[error("invalid amount: {input}")]
    InvalidAmount { input: String },

    /// A coin expression such as "100ushield" could not be parsed
    #[error("invalid coin expression: {input}")]
    InvalidCoinExpression { input: String },

    /// Account identifier is not valid hex
    #[error("invalid account identifier: {reason}")]
    InvalidAccountId { reason: String },
}
