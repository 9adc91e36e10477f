//! OpenShield Crypto - Cryptographic primitives for the command layer
//!
//! This crate provides:
//! - SHA-256 digests over canonical command bytes
//! - Ed25519 key pairs and signer-identity derivation
//! - Signature envelopes and the `Signable` seam used by the command layer
//!
//! # Determinism Invariant
//!
//! Everything signed or hashed here goes through canonical bytes produced
//! upstream; nothing in this crate injects time, randomness or addresses
//! into the signed payload.

pub mod hash;
pub mod keys;
pub mod signature;

pub use hash::*;
pub use keys::*;
pub use signature::*;

use thiserror::Error;

/// Cryptographic errors
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("signing failed: {0}")]
    SigningFailed(String),

    #[error("verification failed: {0}")]
    VerificationFailed(String),

    #[error("invalid key format: {0}")]
    InvalidKeyFormat(String),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
