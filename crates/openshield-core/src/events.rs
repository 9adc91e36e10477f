//! Routing key and event type tags for the shield command set
//!
//! The type tag of each variant is the classification contract surfaced to
//! logging and observability consumers, and doubles as the wire
//! discriminator. Tags must never collide across variants.

/// Module routing key shared by every shield command
pub const ROUTE: &str = "shield";

pub const TYPE_CREATE_POOL: &str = "create_pool";
pub const TYPE_UPDATE_POOL: &str = "update_pool";
pub const TYPE_PAUSE_POOL: &str = "pause_pool";
pub const TYPE_RESUME_POOL: &str = "resume_pool";
pub const TYPE_DEPOSIT_COLLATERAL: &str = "deposit_collateral";
pub const TYPE_WITHDRAW_COLLATERAL: &str = "withdraw_collateral";
pub const TYPE_WITHDRAW_REWARDS: &str = "withdraw_rewards";
pub const TYPE_WITHDRAW_FOREIGN_REWARDS: &str = "withdraw_foreign_rewards";
pub const TYPE_CLEAR_PAYOUTS: &str = "clear_payouts";
pub const TYPE_PURCHASE_SHIELD: &str = "purchase_shield";
pub const TYPE_WITHDRAW_REIMBURSEMENT: &str = "withdraw_reimbursement";

/// All type tags, in declaration order
pub const ALL_TYPE_TAGS: [&str; 11] = [
    TYPE_CREATE_POOL,
    TYPE_UPDATE_POOL,
    TYPE_PAUSE_POOL,
    TYPE_RESUME_POOL,
    TYPE_DEPOSIT_COLLATERAL,
    TYPE_WITHDRAW_COLLATERAL,
    TYPE_WITHDRAW_REWARDS,
    TYPE_WITHDRAW_FOREIGN_REWARDS,
    TYPE_CLEAR_PAYOUTS,
    TYPE_PURCHASE_SHIELD,
    TYPE_WITHDRAW_REIMBURSEMENT,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_type_tags_are_unique() {
        let unique: HashSet<_> = ALL_TYPE_TAGS.iter().collect();
        assert_eq!(unique.len(), ALL_TYPE_TAGS.len());
    }
}
