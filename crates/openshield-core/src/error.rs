//! Error types for the command layer

use thiserror::Error;

/// Structural validation failures
///
/// Exactly one failure is returned per command: rules run in declared order
/// and the first violation wins. Failures are terminal: a malformed command
/// is never partially applied, and retrying identical input reproduces the
/// identical failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required signer identity is empty
    #[error("sender is empty")]
    EmptySender,

    /// Pool sponsor is blank after trimming
    #[error("sponsor is empty")]
    EmptySponsor,

    /// Pool identifier is zero (reserved for "no pool")
    #[error("pool id cannot be 0")]
    InvalidPoolId,

    /// An amount is malformed, or zero where non-zero is required
    #[error("invalid coins: {context}")]
    InvalidCoins { context: String },

    /// Shield amount is missing, malformed or zero
    #[error("no shield coverage specified")]
    NoShield,

    /// Coverage duration is zero or negative
    #[error("duration must be positive")]
    InvalidDuration,

    /// Destination address is blank after trimming
    #[error("destination address is empty")]
    InvalidDestination,

    /// Denomination fails the accepted grammar
    #[error("invalid denomination: {denom}")]
    InvalidDenom { denom: String },

    /// Purchase description is blank after trimming
    #[error("purchase description is missing")]
    MissingDescription,
}

/// Canonical encoding failure
///
/// The command set is closed and every field serializes, so in practice this
/// only surfaces programming errors; it still propagates rather than panics.
#[derive(Debug, Error)]
#[error("canonical encoding failed: {0}")]
pub struct EncodeError(#[from] serde_json::Error);
