//! Hashing utilities for OpenShield
//!
//! Command content identity is SHA-256 over the canonical sign bytes; the
//! hex form is what shows up in logs and dedup keys.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of a byte sequence
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the SHA-256 hash and return it as lowercase hex
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}
