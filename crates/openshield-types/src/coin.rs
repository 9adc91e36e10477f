//! Coin and coin-set types for OpenShield
//!
//! Amounts are exact unsigned integers in the ledger's balance width (u128).
//! On the wire an amount is a decimal string, so very large balances survive
//! JSON round-trips unchanged. Coin sets are kept sorted by denomination,
//! which is the canonical form expected by the command encoder.

use crate::denom::is_valid_denom;
use crate::error::{Result, TypesError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serde representation of amounts: decimal strings on the wire
mod amount_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&amount.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<u128>()
            .map_err(|_| de::Error::custom(format!("invalid amount string: {s}")))
    }
}

/// A single-denomination amount
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// Denomination, matching the grammar in [`crate::denom`]
    pub denom: String,
    /// Exact quantity in base units
    #[serde(with = "amount_string")]
    pub amount: u128,
}

impl Coin {
    /// Create a new coin
    pub fn new(amount: u128, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Check that the denomination matches the accepted grammar
    pub fn is_valid(&self) -> bool {
        is_valid_denom(&self.denom)
    }

    /// Check if the quantity is zero
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = TypesError;

    /// Parse a coin expression such as `100ushield`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (amount, denom) = s.split_at(split);
        if amount.is_empty() || denom.is_empty() {
            return Err(TypesError::InvalidCoinExpression {
                input: s.to_string(),
            });
        }
        let amount = amount.parse::<u128>().map_err(|_| TypesError::InvalidAmount {
            input: amount.to_string(),
        })?;
        if !is_valid_denom(denom) {
            return Err(TypesError::InvalidDenom {
                denom: denom.to_string(),
            });
        }
        Ok(Self::new(amount, denom))
    }
}

/// An ordered-by-denomination set of coins
///
/// Construction sorts the elements, so two sets built from the same coins in
/// any order compare equal and encode identically. Validity additionally
/// requires every element to be well-formed and denominations to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// Create a coin set, sorting by denomination
    pub fn new(mut coins: Vec<Coin>) -> Self {
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));
        Self(coins)
    }

    /// The empty coin set
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Check that every element is valid and denominations are unique
    ///
    /// The sort performed at construction makes uniqueness a strictly
    /// increasing neighbour check.
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(Coin::is_valid)
            && self.0.windows(2).all(|w| w[0].denom < w[1].denom)
    }

    /// True iff the set is empty or every quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Coin::is_zero)
    }

    /// Number of coins in the set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set has no elements
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the coins in denomination order
    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }

    /// View the coins as a slice
    pub fn as_slice(&self) -> &[Coin] {
        &self.0
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        Self(vec![coin])
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for coin in &self.0 {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{coin}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Coins {
    type Err = TypesError;

    /// Parse a comma-separated coin list such as `100ushield,5uatom`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::empty());
        }
        let coins = s
            .split(',')
            .map(Coin::from_str)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(coins))
    }
}

/// A deposit spanning native and externally-denominated tokens
///
/// Validity and zero-ness are evaluated per side; a command decides which
/// sides it requires to be non-zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MixedCoins {
    /// Native-denomination side
    pub native: Coins,
    /// Foreign-denomination side
    pub foreign: Coins,
}

impl MixedCoins {
    /// Create a mixed deposit
    pub fn new(native: Coins, foreign: Coins) -> Self {
        Self { native, foreign }
    }

    /// Check that both sides are independently valid
    pub fn is_valid(&self) -> bool {
        self.native.is_valid() && self.foreign.is_valid()
    }
}

impl fmt::Display for MixedCoins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "native: {}; foreign: {}", self.native, self.foreign)
    }
}
