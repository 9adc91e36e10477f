//! Key management for OpenShield
//!
//! A signer identity is derived from the Ed25519 public key: the first 20
//! bytes of its SHA-256 digest. Every node derives the same identity from
//! the same key, so signer resolution stays deterministic.

use crate::hash::sha256;
use crate::{CryptoError, CryptoResult};
use ed25519_dalek::{SigningKey, VerifyingKey};
use openshield_types::AccountId;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

/// Byte length of a derived account identity
pub const ACCOUNT_ID_LEN: usize = 20;

/// A key pair for signing commands
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl KeyPair {
    /// Generate a new random key pair
    pub fn generate() -> Self {
        let mut csprng = OsRng;
        let signing_key = SigningKey::generate(&mut csprng);
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Create from existing signing key bytes
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(bytes);
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Get the signing key (private - never expose!)
    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Get the verifying key (public)
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Get the public key as a hex string
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.verifying_key.as_bytes())
    }

    /// Derive the account identity that commands signed by this key carry
    pub fn account_id(&self) -> AccountId {
        derive_account_id(self.verifying_key.as_bytes())
    }

    /// Get the signing key bytes (for secure storage only!)
    pub fn signing_key_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

/// Derive an account identity from public key bytes
pub fn derive_account_id(public_key: &[u8]) -> AccountId {
    let digest = sha256(public_key);
    AccountId::new(&digest[..ACCOUNT_ID_LEN])
}

/// Public key reference (safe to share)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey {
    /// Hex-encoded public key
    pub key: String,
}

impl PublicKey {
    /// Create from a key pair
    pub fn from_keypair(keypair: &KeyPair) -> Self {
        Self {
            key: keypair.public_key_hex(),
        }
    }

    /// Parse the verifying key
    pub fn to_verifying_key(&self) -> CryptoResult<VerifyingKey> {
        let bytes = hex::decode(&self.key)
            .map_err(|e| CryptoError::InvalidKeyFormat(e.to_string()))?;

        if bytes.len() != 32 {
            return Err(CryptoError::InvalidKeyFormat(
                "public key must be 32 bytes".to_string(),
            ));
        }

        let mut key_bytes = [0u8; 32];
        key_bytes.copy_from_slice(&bytes);

        VerifyingKey::from_bytes(&key_bytes)
            .map_err(|e| CryptoError::InvalidKeyFormat(e.to_string()))
    }

    /// Derive the account identity for this key
    pub fn account_id(&self) -> CryptoResult<AccountId> {
        let key = self.to_verifying_key()?;
        Ok(derive_account_id(key.as_bytes()))
    }
}
