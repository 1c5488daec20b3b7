//! # Registry Configuration
//!
//! Plain-data tuning for the registry components. Constructed
//! programmatically or deserialized from the embedding host's config file;
//! there is no global state and nothing here reads the environment.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use attesta_core::{AccountId, Amount};

/// Reward value used when a grant does not specify an amount.
pub const DEFAULT_REWARD_AMOUNT: Amount = Amount::new(10);

/// Who may flip an organization's verification gate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "admins", rename_all = "snake_case")]
pub enum VerificationPolicy {
    /// Any authenticated caller may verify any organization.
    #[default]
    Open,
    /// Only the listed accounts may verify organizations.
    Admins(BTreeSet<AccountId>),
}

impl VerificationPolicy {
    /// Whether `caller` is allowed to verify organizations under this policy.
    pub fn permits(&self, caller: &AccountId) -> bool {
        match self {
            Self::Open => true,
            Self::Admins(admins) => admins.contains(caller),
        }
    }
}

/// Tunable behavior of the registry components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Authorization policy for `verify_organization`.
    pub verification_policy: VerificationPolicy,
    /// Reward value granted when `grant_reward` is called without an amount.
    pub default_reward_amount: Amount,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            verification_policy: VerificationPolicy::Open,
            default_reward_amount: DEFAULT_REWARD_AMOUNT,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
