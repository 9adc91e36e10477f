//! Identity types for OpenShield
//!
//! The signer of a command is an opaque byte identifier. The command layer
//! never interprets the bytes; it only needs emptiness and equality, plus a
//! stable string form for the wire (lowercase hex, empty string for the
//! empty identity).

use crate::error::{Result, TypesError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Opaque signer/account identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(Vec<u8>);

impl AccountId {
    /// Create an identity from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The empty identity, rejected by every command that requires a signer
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Parse from lowercase hex; the empty string is the empty identity
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| TypesError::InvalidAccountId {
            reason: e.to_string(),
        })?;
        Ok(Self(bytes))
    }

    /// View the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Emptiness predicate
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl FromStr for AccountId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<&[u8]> for AccountId {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}
