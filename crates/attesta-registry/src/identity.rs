//! # Identity Registration & Verification
//!
//! Individuals and organizations register under their own account identity.
//! Registration is create-only per namespace: a second registration of the
//! same kind fails, while one account may hold an Individual record and an
//! Organization record independently.
//!
//! Organization verification is a one-way gate behind the configured
//! [`VerificationPolicy`]. The default `Open` policy lets any authenticated
//! caller verify any organization; `Admins` restricts the operation to a
//! fixed set of accounts.

use attesta_core::{AccountId, RegistryError};
use attesta_platform::{HostEnv, Namespace};
use attesta_state::{Individual, Organization};

use crate::config::VerificationPolicy;
use crate::store;

/// Load an individual record by account. Shared with the other components
/// for existence checks.
pub(crate) fn load_individual<E>(
    env: &E,
    id: &AccountId,
) -> Result<Option<Individual>, RegistryError>
where
    E: HostEnv + ?Sized,
{
    store::load_json(env, Namespace::Individuals, id.as_str())
}

/// Load an organization record by account.
pub(crate) fn load_organization<E>(
    env: &E,
    id: &AccountId,
) -> Result<Option<Organization>, RegistryError>
where
    E: HostEnv + ?Sized,
{
    store::load_json(env, Namespace::Organizations, id.as_str())
}

/// Identity registration, lookup, and the organization verification gate.
#[derive(Debug, Clone)]
pub struct IdentityRegistry {
    policy: VerificationPolicy,
}

impl IdentityRegistry {
    /// Create the registry with the given verification policy.
    pub fn new(policy: VerificationPolicy) -> Self {
        Self { policy }
    }

    /// Register the caller as an individual. Create-only: fails with
    /// `AlreadyRegistered` if an individual record exists for the caller.
    pub fn register_individual<E>(
        &self,
        env: &mut E,
        name: String,
        date_of_birth: String,
        email: String,
    ) -> Result<(), RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        let caller = store::require_caller(env)?;
        if load_individual(env, &caller)?.is_some() {
            return Err(RegistryError::AlreadyRegistered {
                kind: "individual".to_string(),
                id: caller.0,
            });
        }
        let record = Individual::new(name, date_of_birth, email, env.now());
        store::store_json(env, Namespace::Individuals, caller.as_str(), &record)?;
        tracing::info!(account = %caller, "individual registered");
        Ok(())
    }

    /// Register the caller as an organization. New organizations are always
    /// unverified.
    pub fn register_organization<E>(
        &self,
        env: &mut E,
        name: String,
        contact_info: String,
    ) -> Result<(), RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        let caller = store::require_caller(env)?;
        if load_organization(env, &caller)?.is_some() {
            return Err(RegistryError::AlreadyRegistered {
                kind: "organization".to_string(),
                id: caller.0,
            });
        }
        let record = Organization::new(name, contact_info, env.now());
        store::store_json(env, Namespace::Organizations, caller.as_str(), &record)?;
        tracing::info!(account = %caller, "organization registered");
        Ok(())
    }

    /// Pass an organization through the verification gate.
    ///
    /// The policy check runs before the lookup, so a caller the policy
    /// rejects learns nothing about whether the organization exists.
    pub fn verify_organization<E>(
        &self,
        env: &mut E,
        organization_id: &AccountId,
    ) -> Result<(), RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        let caller = store::require_caller(env)?;
        if !self.policy.permits(&caller) {
            tracing::warn!(
                account = %caller,
                organization = %organization_id,
                "organization verification rejected by policy"
            );
            return Err(RegistryError::Unauthorized(format!(
                "account {caller} is not permitted to verify organizations"
            )));
        }
        let mut record =
            load_organization(env, organization_id)?.ok_or_else(|| RegistryError::NotFound {
                kind: "organization".to_string(),
                id: organization_id.0.clone(),
            })?;
        record.mark_verified();
        store::store_json(env, Namespace::Organizations, organization_id.as_str(), &record)?;
        tracing::info!(organization = %organization_id, verifier = %caller, "organization verified");
        Ok(())
    }

    /// Look up an individual. `None` when absent.
    pub fn get_individual<E>(
        &self,
        env: &E,
        id: &AccountId,
    ) -> Result<Option<Individual>, RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        load_individual(env, id)
    }

    /// Look up an organization. `None` when absent.
    pub fn get_organization<E>(
        &self,
        env: &E,
        id: &AccountId,
    ) -> Result<Option<Organization>, RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        load_organization(env, id)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
