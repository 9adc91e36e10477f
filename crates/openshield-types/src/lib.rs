//! OpenShield Types - Canonical domain types for the shield protocol
//!
//! This crate contains the foundational types for OpenShield with zero
//! dependencies on other openshield crates. It defines:
//!
//! - Denomination grammar shared by every transactable amount
//! - Coin, coin-set and mixed (native + foreign) amount types
//! - The opaque account identity attached to every command
//!
//! # Architectural Invariants
//!
//! These types back the determinism guarantees of the command layer:
//!
//! 1. Amounts are exact integers, never floating point
//! 2. Coin sets are kept sorted by denomination (canonical form)
//! 3. Validity is a pure function of the value, never of ledger state

pub mod coin;
pub mod denom;
pub mod error;
pub mod identity;

pub use coin::*;
pub use denom::*;
pub use error::*;
pub use identity::*;

/// Version of the OpenShield types schema
pub const TYPES_VERSION: &str = "0.1.0";
