//! OpenShield Core - the command layer of the shield protocol
//!
//! Users change protocol state through typed commands: create a coverage
//! pool, adjust it, move collateral, purchase shield coverage, withdraw
//! rewards or reimbursements. Before a command enters the ledger's
//! state-transition pipeline it passes through this crate:
//!
//! 1. Signer resolution: which identity must have authorized it
//! 2. Structural validation: well-formedness, never ledger state
//! 3. Canonical encoding: the exact bytes that are signed and hashed
//!
//! # Determinism Invariant
//!
//! Validation and encoding are pure functions of the command's field values.
//! Any two nodes, at any chain height, reach the same verdict and the same
//! bytes for the same command; a divergence here is a consensus fault.
//! Whether a command should succeed against current ledger state (pool
//! exists, balances suffice) is execution logic's problem, not ours.

pub mod command;
pub mod encode;
pub mod error;
pub mod events;

pub use command::*;
pub use encode::*;
pub use error::*;
pub use events::*;

// Foundation types used throughout the command surface
pub use openshield_types::{AccountId, Coin, Coins, MixedCoins};
