//! # Reward Records
//!
//! An immutable milestone grant for a learner. Rewards are created once and
//! never mutated, revoked, or deleted; there is no uniqueness constraint on
//! (learner, milestone) — granting the same milestone twice produces two
//! records.

use serde::{Deserialize, Serialize};

use attesta_core::{AccountId, Amount, Timestamp};

/// One milestone grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// The learner the reward was granted to.
    pub learner_id: AccountId,
    /// The milestone being rewarded (free text, e.g. `"course1_completed"`).
    pub milestone: String,
    /// The granted value.
    pub amount: Amount,
    /// When the reward was granted.
    pub granted_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_amount_travels_as_decimal_string() {
        let reward = Reward {
            learner_id: AccountId::new("alice"),
            milestone: "course1_completed".into(),
            amount: Amount::new(10),
            granted_at: Timestamp::parse("2026-01-15T12:00:00Z").unwrap(),
        };
        let json = serde_json::to_string(&reward).unwrap();
        assert!(json.contains("\"amount\":\"10\""), "got: {json}");
        let parsed: Reward = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reward);
    }
}
