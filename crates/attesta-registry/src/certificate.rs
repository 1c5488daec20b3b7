//! # Certificate Issuance & Lifecycle
//!
//! Certificates are issued by verified organizations, bound immutably to
//! one issuer and one learner, and mutated only by the bound issuer. Every
//! lifecycle event — issuance included — appends one [`AuditEntry`] to the
//! certificate's history, so a certificate carries at least one entry for
//! its entire life.
//!
//! ## Authorization
//!
//! Issuance requires the caller to be a registered organization with the
//! verification gate passed. Status updates and revocation require the
//! caller to equal the certificate's bound `issuer_org_id`. The `revoked`
//! status is terminal by convention only: the issuer may keep updating a
//! revoked certificate, and every such update is audit-logged.
//!
//! ## Validation
//!
//! [`validate_certificate`](CertificateRegistry::validate_certificate)
//! returns one discriminated [`CertificateValidation`] outcome — missing,
//! revoked, or valid with the bound metadata — so the three cases stay
//! distinguishable without an absent-versus-error asymmetry.

use serde::{Deserialize, Serialize};

use attesta_core::{AccountId, CertificateId, CourseId, RegistryError};
use attesta_platform::{HostEnv, Namespace};
use attesta_state::{
    AuditAction, AuditEntry, Certificate, CertificateDraft, CertificateMetadata,
    CertificateStatus,
};

use crate::identity::{load_individual, load_organization};
use crate::store;

/// Audit reason recorded on the issuance entry.
const ISSUANCE_REASON: &str = "certificate issued";

/// The outcome of validating a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CertificateValidation {
    /// No certificate exists under the requested id.
    NotFound,
    /// The certificate exists but has been revoked.
    Revoked {
        /// The revoked certificate.
        certificate_id: CertificateId,
    },
    /// The certificate is live.
    Valid {
        /// The metadata bound at issuance.
        metadata: CertificateMetadata,
    },
}

impl CertificateValidation {
    /// Collapse the outcome into the absent-or-error shape: `None` when
    /// missing, [`RegistryError::Revoked`] when revoked, metadata otherwise.
    pub fn into_result(self) -> Result<Option<CertificateMetadata>, RegistryError> {
        match self {
            Self::NotFound => Ok(None),
            Self::Revoked { certificate_id } => Err(RegistryError::Revoked(certificate_id.0)),
            Self::Valid { metadata } => Ok(Some(metadata)),
        }
    }
}

/// Certificate issuance, lifecycle mutation, validation, and history.
#[derive(Debug, Clone, Default)]
pub struct CertificateRegistry;

impl CertificateRegistry {
    /// Create the registry.
    pub fn new() -> Self {
        Self
    }

    /// Issue a certificate to `learner_id` for `course_id`.
    ///
    /// The caller must be a registered, verified organization; the learner
    /// must be a registered individual. The stored metadata binds
    /// `learner_id`, `course_id`, and the caller as `issuer_org_id` — the
    /// draft cannot override them. Returns the allocated certificate id.
    pub fn issue_certificate<E>(
        &self,
        env: &mut E,
        learner_id: AccountId,
        course_id: CourseId,
        draft: CertificateDraft,
    ) -> Result<CertificateId, RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        let caller = store::require_caller(env)?;
        let Some(organization) = load_organization(env, &caller)? else {
            tracing::warn!(
                account = %caller,
                "issuance rejected: caller is not a registered organization"
            );
            return Err(RegistryError::Unauthorized(format!(
                "account {caller} is not a registered organization"
            )));
        };
        if !organization.verified {
            tracing::warn!(
                account = %caller,
                "issuance rejected: organization has not passed verification"
            );
            return Err(RegistryError::Unauthorized(format!(
                "organization {caller} is not verified"
            )));
        }
        if load_individual(env, &learner_id)?.is_none() {
            return Err(RegistryError::NotFound {
                kind: "individual".to_string(),
                id: learner_id.0,
            });
        }

        let number = store::Counter::Certificate.allocate(env)?;
        let certificate_id = CertificateId::from_counter(number);
        let metadata = CertificateMetadata::bind(learner_id, course_id, caller.clone(), draft);
        let certificate = Certificate::issue(metadata, env.now());
        store::store_json(env, Namespace::Certificates, certificate_id.as_str(), &certificate)?;
        append_history(
            env,
            &certificate_id,
            AuditEntry {
                at: env.now(),
                action: AuditAction::Issued,
                reason: ISSUANCE_REASON.to_string(),
                actor: caller.clone(),
            },
        )?;
        tracing::info!(
            certificate = %certificate_id,
            learner = %certificate.metadata.learner_id,
            issuer = %caller,
            "certificate issued"
        );
        Ok(certificate_id)
    }

    /// Change a certificate's status. Any status string is accepted; the
    /// audit entry's reason records the new status value.
    pub fn update_certificate_status<E>(
        &self,
        env: &mut E,
        certificate_id: &CertificateId,
        new_status: String,
    ) -> Result<(), RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        let caller = store::require_caller(env)?;
        let mut certificate = self.issuer_bound(env, &caller, certificate_id)?;
        let status = CertificateStatus::from(new_status);
        let reason = status.as_str().to_string();
        certificate.set_status(status, env.now());
        store::store_json(env, Namespace::Certificates, certificate_id.as_str(), &certificate)?;
        append_history(
            env,
            certificate_id,
            AuditEntry {
                at: env.now(),
                action: AuditAction::StatusUpdated,
                reason,
                actor: caller.clone(),
            },
        )?;
        tracing::info!(
            certificate = %certificate_id,
            status = %certificate.status,
            issuer = %caller,
            "certificate status updated"
        );
        Ok(())
    }

    /// Revoke a certificate, recording the caller's free-text reason.
    pub fn revoke_certificate<E>(
        &self,
        env: &mut E,
        certificate_id: &CertificateId,
        reason: String,
    ) -> Result<(), RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        let caller = store::require_caller(env)?;
        let mut certificate = self.issuer_bound(env, &caller, certificate_id)?;
        certificate.revoke(env.now());
        store::store_json(env, Namespace::Certificates, certificate_id.as_str(), &certificate)?;
        append_history(
            env,
            certificate_id,
            AuditEntry {
                at: env.now(),
                action: AuditAction::Revoked,
                reason: reason.clone(),
                actor: caller.clone(),
            },
        )?;
        tracing::info!(
            certificate = %certificate_id,
            issuer = %caller,
            reason = %reason,
            "certificate revoked"
        );
        Ok(())
    }

    /// Validate a certificate into one discriminated outcome.
    pub fn validate_certificate<E>(
        &self,
        env: &E,
        certificate_id: &CertificateId,
    ) -> Result<CertificateValidation, RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        let Some(certificate) = load_certificate(env, certificate_id)? else {
            return Ok(CertificateValidation::NotFound);
        };
        if certificate.is_revoked() {
            return Ok(CertificateValidation::Revoked {
                certificate_id: certificate_id.clone(),
            });
        }
        Ok(CertificateValidation::Valid {
            metadata: certificate.metadata,
        })
    }

    /// The full ordered audit history. Empty — never absent — for unknown
    /// certificate ids.
    pub fn get_certificate_history<E>(
        &self,
        env: &E,
        certificate_id: &CertificateId,
    ) -> Result<Vec<AuditEntry>, RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        let history: Option<Vec<AuditEntry>> =
            store::load_json(env, Namespace::CertificateHistory, certificate_id.as_str())?;
        Ok(history.unwrap_or_default())
    }

    /// Look up a certificate. `None` when absent.
    pub fn get_certificate<E>(
        &self,
        env: &E,
        certificate_id: &CertificateId,
    ) -> Result<Option<Certificate>, RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        load_certificate(env, certificate_id)
    }

    /// Load the certificate and require the caller to be its bound issuer.
    fn issuer_bound<E>(
        &self,
        env: &E,
        caller: &AccountId,
        certificate_id: &CertificateId,
    ) -> Result<Certificate, RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        let certificate =
            load_certificate(env, certificate_id)?.ok_or_else(|| RegistryError::NotFound {
                kind: "certificate".to_string(),
                id: certificate_id.0.clone(),
            })?;
        if certificate.metadata.issuer_org_id != *caller {
            tracing::warn!(
                certificate = %certificate_id,
                account = %caller,
                "certificate mutation rejected: caller is not the bound issuer"
            );
            return Err(RegistryError::Unauthorized(format!(
                "account {caller} is not the issuer of certificate {certificate_id}"
            )));
        }
        Ok(certificate)
    }
}

fn load_certificate<E>(
    env: &E,
    certificate_id: &CertificateId,
) -> Result<Option<Certificate>, RegistryError>
where
    E: HostEnv + ?Sized,
{
    store::load_json(env, Namespace::Certificates, certificate_id.as_str())
}

/// Append one entry to a certificate's history sequence.
fn append_history<E>(
    env: &mut E,
    certificate_id: &CertificateId,
    entry: AuditEntry,
) -> Result<(), RegistryError>
where
    E: HostEnv + ?Sized,
{
    let mut history: Vec<AuditEntry> =
        store::load_json(env, Namespace::CertificateHistory, certificate_id.as_str())?
            .unwrap_or_default();
    history.push(entry);
    store::store_json(env, Namespace::CertificateHistory, certificate_id.as_str(), &history)
}

// ─── Tests ───────────────────────────────────────────────────────────
