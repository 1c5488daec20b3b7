//! # Reward Ledger
//!
//! Milestone grants for registered learners. Rewards are immutable once
//! granted and numbered `reward_<n>` from a counter independent of the
//! certificate sequence.
//!
//! ## Listing
//!
//! Alongside every grant the ledger appends the new id to a per-learner
//! index under [`Namespace::RewardsByLearner`], in the same request.
//! `list_rewards` walks that index, so listing costs O(result size) and
//! returns grants in ascending grant order.

use attesta_core::{AccountId, Amount, PlatformError, RegistryError, RewardId};
use attesta_platform::{HostEnv, Namespace};
use attesta_state::Reward;

use crate::identity::load_individual;
use crate::store;

/// Reward granting and lookup.
#[derive(Debug, Clone)]
pub struct RewardLedger {
    default_amount: Amount,
}

impl RewardLedger {
    /// Create the ledger with the amount used when grants don't specify one.
    pub fn new(default_amount: Amount) -> Self {
        Self { default_amount }
    }

    /// Grant a milestone reward to a registered learner.
    ///
    /// The amount defaults to the configured value and may be overridden per
    /// call. Returns the allocated reward id.
    pub fn grant_reward<E>(
        &self,
        env: &mut E,
        learner_id: AccountId,
        milestone: String,
        amount: Option<Amount>,
    ) -> Result<RewardId, RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        let caller = store::require_caller(env)?;
        if load_individual(env, &learner_id)?.is_none() {
            return Err(RegistryError::NotFound {
                kind: "individual".to_string(),
                id: learner_id.0,
            });
        }

        let number = store::Counter::Reward.allocate(env)?;
        let reward_id = RewardId::from_counter(number);
        let reward = Reward {
            learner_id: learner_id.clone(),
            milestone,
            amount: amount.unwrap_or(self.default_amount),
            granted_at: env.now(),
        };
        store::store_json(env, Namespace::Rewards, reward_id.as_str(), &reward)?;

        let mut index: Vec<RewardId> =
            store::load_json(env, Namespace::RewardsByLearner, learner_id.as_str())?
                .unwrap_or_default();
        index.push(reward_id.clone());
        store::store_json(env, Namespace::RewardsByLearner, learner_id.as_str(), &index)?;

        tracing::info!(
            reward = %reward_id,
            learner = %learner_id,
            milestone = %reward.milestone,
            amount = %reward.amount,
            granter = %caller,
            "reward granted"
        );
        Ok(reward_id)
    }

    /// All rewards granted to a learner, in ascending grant order. Empty for
    /// learners with none, registered or not.
    pub fn list_rewards<E>(
        &self,
        env: &E,
        learner_id: &AccountId,
    ) -> Result<Vec<Reward>, RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        let index: Vec<RewardId> =
            store::load_json(env, Namespace::RewardsByLearner, learner_id.as_str())?
                .unwrap_or_default();
        let mut rewards = Vec::with_capacity(index.len());
        for reward_id in &index {
            let reward: Reward = store::load_json(env, Namespace::Rewards, reward_id.as_str())?
                .ok_or_else(|| {
                    PlatformError::Storage(format!(
                        "reward index for {learner_id} references missing record {reward_id}"
                    ))
                })?;
            rewards.push(reward);
        }
        Ok(rewards)
    }

    /// Look up a single reward. `None` when absent.
    pub fn get_reward<E>(&self, env: &E, reward_id: &RewardId) -> Result<Option<Reward>, RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        store::load_json(env, Namespace::Rewards, reward_id.as_str())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
