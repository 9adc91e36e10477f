//! The shield command set
//!
//! Eleven command variants, each a closed record with exactly one signer
//! field. `ShieldCommand` is the sum type over all of them; routing, type
//! tagging, signer resolution and validation all match exhaustively, so
//! adding a variant breaks every consumer until it is handled.
//!
//! Wire field names are part of the signed format and are pinned with serde
//! renames where they differ from the Rust field: the legacy capitalized
//! `"Shield"` key on pool updates, the `"sender"`/`"from"` split across
//! variants, and `"additional_period"` for the update duration.

use crate::error::ValidationError;
use crate::events;
use openshield_types::{validate_denom, AccountId, Coin, Coins, MixedCoins};
use serde::{Deserialize, Serialize};

/// Serde representation of raw byte fields: lowercase hex on the wire
mod hex_bytes {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(de::Error::custom)
    }
}

/// Open a new coverage pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePool {
    /// Pool creator and required signer
    pub from: AccountId,
    /// Coverage the pool can issue
    pub shield: Coins,
    /// Initial deposit backing the pool, native and foreign sides
    pub deposit: MixedCoins,
    /// Display name of the covered project
    pub sponsor: String,
    /// Coverage duration
    pub time_of_coverage: i64,
}

impl CreatePool {
    pub fn new(
        from: AccountId,
        shield: Coins,
        deposit: MixedCoins,
        sponsor: impl Into<String>,
        time_of_coverage: i64,
    ) -> Self {
        Self {
            from,
            shield,
            deposit,
            sponsor: sponsor.into(),
            time_of_coverage,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.from.is_empty() {
            return Err(ValidationError::EmptySender);
        }
        if self.sponsor.trim().is_empty() {
            return Err(ValidationError::EmptySponsor);
        }
        if self.deposit.native.is_zero() || !self.deposit.native.is_valid() {
            return Err(ValidationError::InvalidCoins {
                context: format!("native amount: {}", self.deposit.native),
            });
        }
        if self.deposit.foreign.is_zero() || !self.deposit.foreign.is_valid() {
            return Err(ValidationError::InvalidCoins {
                context: format!("foreign amount: {}", self.deposit.foreign),
            });
        }
        if !self.shield.is_valid() || self.shield.is_zero() {
            return Err(ValidationError::NoShield);
        }
        if self.time_of_coverage <= 0 {
            return Err(ValidationError::InvalidDuration);
        }
        Ok(())
    }
}

/// Adjust an existing pool's shield, deposit or duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePool {
    /// Pool admin and required signer
    pub from: AccountId,
    /// New coverage capacity
    #[serde(rename = "Shield")]
    pub shield: Coins,
    /// Deposit top-up; either side may be zero here
    pub deposit: MixedCoins,
    pub pool_id: u64,
    /// Extension of the coverage period
    #[serde(rename = "additional_period")]
    pub additional_time: i64,
}

impl UpdatePool {
    pub fn new(
        from: AccountId,
        shield: Coins,
        deposit: MixedCoins,
        pool_id: u64,
        additional_time: i64,
    ) -> Self {
        Self {
            from,
            shield,
            deposit,
            pool_id,
            additional_time,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.from.is_empty() {
            return Err(ValidationError::EmptySender);
        }
        if self.pool_id == 0 {
            return Err(ValidationError::InvalidPoolId);
        }
        // A top-up may be zero on either side; it still has to be well-formed.
        if !(self.deposit.native.is_valid() && self.deposit.foreign.is_valid()) {
            return Err(ValidationError::InvalidCoins {
                context: "invalid deposit".to_string(),
            });
        }
        if !self.shield.is_valid() {
            return Err(ValidationError::InvalidCoins {
                context: "invalid shield".to_string(),
            });
        }
        if self.additional_time <= 0 {
            return Err(ValidationError::InvalidDuration);
        }
        Ok(())
    }
}

/// Pause a pool so it stops issuing new coverage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PausePool {
    pub from: AccountId,
    pub pool_id: u64,
}

impl PausePool {
    pub fn new(from: AccountId, pool_id: u64) -> Self {
        Self { from, pool_id }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.from.is_empty() {
            return Err(ValidationError::EmptySender);
        }
        if self.pool_id == 0 {
            return Err(ValidationError::InvalidPoolId);
        }
        Ok(())
    }
}

/// Resume a paused pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumePool {
    pub from: AccountId,
    pub pool_id: u64,
}

impl ResumePool {
    pub fn new(from: AccountId, pool_id: u64) -> Self {
        Self { from, pool_id }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.from.is_empty() {
            return Err(ValidationError::EmptySender);
        }
        if self.pool_id == 0 {
            return Err(ValidationError::InvalidPoolId);
        }
        Ok(())
    }
}

/// Deposit collateral behind a pool's coverage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositCollateral {
    #[serde(rename = "sender")]
    pub from: AccountId,
    pub pool_id: u64,
    pub collateral: Coin,
}

impl DepositCollateral {
    pub fn new(from: AccountId, pool_id: u64, collateral: Coin) -> Self {
        Self {
            from,
            pool_id,
            collateral,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.from.is_empty() {
            return Err(ValidationError::EmptySender);
        }
        if self.pool_id == 0 {
            return Err(ValidationError::InvalidPoolId);
        }
        if !self.collateral.is_valid() || self.collateral.is_zero() {
            return Err(ValidationError::InvalidCoins {
                context: format!("collateral amount: {}", self.collateral),
            });
        }
        Ok(())
    }
}

/// Withdraw collateral from a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawCollateral {
    #[serde(rename = "sender")]
    pub from: AccountId,
    pub pool_id: u64,
    pub collateral: Coin,
}

impl WithdrawCollateral {
    pub fn new(from: AccountId, pool_id: u64, collateral: Coin) -> Self {
        Self {
            from,
            pool_id,
            collateral,
        }
    }

    /// Only the pool id is checked. The sender and collateral checks present
    /// on DepositCollateral are absent here; see DESIGN.md (open questions)
    /// before tightening.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pool_id == 0 {
            return Err(ValidationError::InvalidPoolId);
        }
        Ok(())
    }
}

/// Withdraw accumulated native-denomination rewards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawRewards {
    #[serde(rename = "sender")]
    pub from: AccountId,
}

impl WithdrawRewards {
    pub fn new(from: AccountId) -> Self {
        Self { from }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.from.is_empty() {
            return Err(ValidationError::EmptySender);
        }
        Ok(())
    }
}

/// Withdraw foreign-denomination rewards to an external destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawForeignRewards {
    #[serde(rename = "sender")]
    pub from: AccountId,
    /// Foreign denomination being withdrawn
    pub denom: String,
    /// Destination address on the foreign chain, opaque to this layer
    pub to_addr: String,
}

impl WithdrawForeignRewards {
    pub fn new(from: AccountId, denom: impl Into<String>, to_addr: impl Into<String>) -> Self {
        Self {
            from,
            denom: denom.into(),
            to_addr: to_addr.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.from.is_empty() {
            return Err(ValidationError::EmptySender);
        }
        if self.to_addr.trim().is_empty() {
            return Err(ValidationError::InvalidDestination);
        }
        Ok(())
    }
}

/// Clear pending payouts for a denomination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearPayouts {
    #[serde(rename = "sender")]
    pub from: AccountId,
    pub denom: String,
}

impl ClearPayouts {
    pub fn new(from: AccountId, denom: impl Into<String>) -> Self {
        Self {
            from,
            denom: denom.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.from.is_empty() {
            return Err(ValidationError::EmptySender);
        }
        if validate_denom(&self.denom).is_err() {
            return Err(ValidationError::InvalidDenom {
                denom: self.denom.clone(),
            });
        }
        Ok(())
    }
}

/// Purchase shield coverage from a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseShield {
    pub pool_id: u64,
    /// Coverage amount being purchased
    pub shield: Coins,
    /// What the purchaser is protecting
    pub description: String,
    pub from: AccountId,
    /// Simulation flag used by fee estimation; never validated
    pub simulate: bool,
    /// Transaction hash echoed back during simulation
    #[serde(rename = "sim_txhash", with = "hex_bytes")]
    pub sim_tx_hash: Vec<u8>,
}

impl PurchaseShield {
    pub fn new(
        pool_id: u64,
        shield: Coins,
        description: impl Into<String>,
        from: AccountId,
    ) -> Self {
        Self {
            pool_id,
            shield,
            description: description.into(),
            from,
            simulate: false,
            sim_tx_hash: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pool_id == 0 {
            return Err(ValidationError::InvalidPoolId);
        }
        if !self.shield.is_valid() || self.shield.is_zero() {
            return Err(ValidationError::InvalidCoins {
                context: format!("shield amount: {}", self.shield),
            });
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if self.from.is_empty() {
            return Err(ValidationError::EmptySender);
        }
        Ok(())
    }
}

/// Withdraw a reimbursement granted by a governance proposal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawReimbursement {
    pub proposal_id: u64,
    pub from: AccountId,
}

impl WithdrawReimbursement {
    pub fn new(proposal_id: u64, from: AccountId) -> Self {
        Self { proposal_id, from }
    }

    /// No structural checks: eligibility is entirely state-dependent and
    /// resolved by execution logic. See DESIGN.md (open questions).
    pub fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// The closed set of shield commands
///
/// Serialized adjacently tagged, `{"type": <tag>, "value": {...}}`, with the
/// tag equal to [`ShieldCommand::type_tag`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ShieldCommand {
    #[serde(rename = "create_pool")]
    CreatePool(CreatePool),
    #[serde(rename = "update_pool")]
    UpdatePool(UpdatePool),
    #[serde(rename = "pause_pool")]
    PausePool(PausePool),
    #[serde(rename = "resume_pool")]
    ResumePool(ResumePool),
    #[serde(rename = "deposit_collateral")]
    DepositCollateral(DepositCollateral),
    #[serde(rename = "withdraw_collateral")]
    WithdrawCollateral(WithdrawCollateral),
    #[serde(rename = "withdraw_rewards")]
    WithdrawRewards(WithdrawRewards),
    #[serde(rename = "withdraw_foreign_rewards")]
    WithdrawForeignRewards(WithdrawForeignRewards),
    #[serde(rename = "clear_payouts")]
    ClearPayouts(ClearPayouts),
    #[serde(rename = "purchase_shield")]
    PurchaseShield(PurchaseShield),
    #[serde(rename = "withdraw_reimbursement")]
    WithdrawReimbursement(WithdrawReimbursement),
}

impl ShieldCommand {
    /// Module routing key, constant across the command set
    pub fn route(&self) -> &'static str {
        events::ROUTE
    }

    /// Per-variant type tag used for event classification and wire
    /// discrimination
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::CreatePool(_) => events::TYPE_CREATE_POOL,
            Self::UpdatePool(_) => events::TYPE_UPDATE_POOL,
            Self::PausePool(_) => events::TYPE_PAUSE_POOL,
            Self::ResumePool(_) => events::TYPE_RESUME_POOL,
            Self::DepositCollateral(_) => events::TYPE_DEPOSIT_COLLATERAL,
            Self::WithdrawCollateral(_) => events::TYPE_WITHDRAW_COLLATERAL,
            Self::WithdrawRewards(_) => events::TYPE_WITHDRAW_REWARDS,
            Self::WithdrawForeignRewards(_) => events::TYPE_WITHDRAW_FOREIGN_REWARDS,
            Self::ClearPayouts(_) => events::TYPE_CLEAR_PAYOUTS,
            Self::PurchaseShield(_) => events::TYPE_PURCHASE_SHIELD,
            Self::WithdrawReimbursement(_) => events::TYPE_WITHDRAW_REIMBURSEMENT,
        }
    }

    /// The ordered list of identities that must have authorized this command
    ///
    /// Every variant carries exactly one signer today; a multi-signer variant
    /// would return a de-duplicated ordered sequence here.
    pub fn signers(&self) -> Vec<AccountId> {
        match self {
            Self::CreatePool(cmd) => vec![cmd.from.clone()],
            Self::UpdatePool(cmd) => vec![cmd.from.clone()],
            Self::PausePool(cmd) => vec![cmd.from.clone()],
            Self::ResumePool(cmd) => vec![cmd.from.clone()],
            Self::DepositCollateral(cmd) => vec![cmd.from.clone()],
            Self::WithdrawCollateral(cmd) => vec![cmd.from.clone()],
            Self::WithdrawRewards(cmd) => vec![cmd.from.clone()],
            Self::WithdrawForeignRewards(cmd) => vec![cmd.from.clone()],
            Self::ClearPayouts(cmd) => vec![cmd.from.clone()],
            Self::PurchaseShield(cmd) => vec![cmd.from.clone()],
            Self::WithdrawReimbursement(cmd) => vec![cmd.from.clone()],
        }
    }

    /// Structural validation: pure, stateless, first violated rule wins
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::CreatePool(cmd) => cmd.validate(),
            Self::UpdatePool(cmd) => cmd.validate(),
            Self::PausePool(cmd) => cmd.validate(),
            Self::ResumePool(cmd) => cmd.validate(),
            Self::DepositCollateral(cmd) => cmd.validate(),
            Self::WithdrawCollateral(cmd) => cmd.validate(),
            Self::WithdrawRewards(cmd) => cmd.validate(),
            Self::WithdrawForeignRewards(cmd) => cmd.validate(),
            Self::ClearPayouts(cmd) => cmd.validate(),
            Self::PurchaseShield(cmd) => cmd.validate(),
            Self::WithdrawReimbursement(cmd) => cmd.validate(),
        }
    }
}
