//! Command signatures for OpenShield
//!
//! The signature envelope wraps an Ed25519 signature over canonical sign
//! bytes together with the signer's public key. The `signed_at` timestamp is
//! envelope metadata for audit trails; it is never part of the signed
//! payload, which must stay deterministic.

use crate::{CryptoError, CryptoResult, KeyPair, PublicKey};
use ed25519_dalek::{Signature as Ed25519Signature, Signer, Verifier};
use serde::{Deserialize, Serialize};

/// A signature envelope attached to a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Hex-encoded signature bytes
    pub signature: String,
    /// Public key of the signer
    pub public_key: PublicKey,
    /// When the envelope was produced (audit metadata, not signed)
    pub signed_at: i64,
}

impl Signature {
    /// Sign a canonical byte sequence
    pub fn sign(keypair: &KeyPair, message: &[u8]) -> CryptoResult<Self> {
        let signature = keypair
            .signing_key()
            .try_sign(message)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        Ok(Self {
            signature: hex::encode(signature.to_bytes()),
            public_key: PublicKey::from_keypair(keypair),
            signed_at: chrono::Utc::now().timestamp_millis(),
        })
    }

    /// Verify the signature against a canonical byte sequence
    pub fn verify(&self, message: &[u8]) -> CryptoResult<bool> {
        let signature_bytes = hex::decode(&self.signature)
            .map_err(|e| CryptoError::VerificationFailed(e.to_string()))?;

        if signature_bytes.len() != 64 {
            return Err(CryptoError::VerificationFailed(
                "signature must be 64 bytes".to_string(),
            ));
        }

        let mut sig_array = [0u8; 64];
        sig_array.copy_from_slice(&signature_bytes);

        let signature = Ed25519Signature::from_bytes(&sig_array);
        let verifying_key = self.public_key.to_verifying_key()?;

        match verifying_key.verify(message, &signature) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    }
}

/// Types with a canonical byte representation that can be signed
pub trait Signable {
    /// The exact bytes to sign
    fn signable_bytes(&self) -> Vec<u8>;
}

/// Sign any Signable value
pub fn sign<T: Signable>(keypair: &KeyPair, item: &T) -> CryptoResult<Signature> {
    Signature::sign(keypair, &item.signable_bytes())
}

/// Verify a signature over any Signable value
pub fn verify<T: Signable>(signature: &Signature, item: &T) -> CryptoResult<bool> {
    signature.verify(&item.signable_bytes())
}
