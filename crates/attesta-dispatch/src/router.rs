//! # Request Router
//!
//! [`Router`] owns one instance of each registry component and maps parsed
//! [`Operation`] values onto them, serializing typed results back to JSON.
//! The platform env is injected per call — the router holds configuration,
//! never state.
//!
//! [`Router::handle`] is the embedding entry point: it parses a [`Call`],
//! opens a tracing span carrying the request id, operation name, and kind,
//! and runs the operation atomically through
//! [`MemoryPlatform::execute`](attesta_platform::MemoryPlatform).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use attesta_core::RegistryError;
use attesta_platform::{HostEnv, MemoryPlatform, RequestContext};
use attesta_registry::{
    CertificateRegistry, IdentityRegistry, PaymentGateway, RegistryConfig, RewardLedger,
};

use crate::error::DispatchError;
use crate::operation::{Operation, OperationKind};

/// One request envelope: a unique id, an operation name, and its arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Call {
    /// Request id bound into the tracing span.
    pub request_id: Uuid,
    /// Operation name, e.g. `"issue_certificate"`.
    pub operation: String,
    /// JSON arguments object.
    #[serde(default)]
    pub arguments: Value,
}

impl Call {
    /// Build a call with a fresh request id.
    pub fn new(operation: impl Into<String>, arguments: Value) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            operation: operation.into(),
            arguments,
        }
    }
}

/// The operation router over the four registry components.
#[derive(Debug, Clone)]
pub struct Router {
    identity: IdentityRegistry,
    certificates: CertificateRegistry,
    rewards: RewardLedger,
    payments: PaymentGateway,
}

impl Router {
    /// Build the components from configuration.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            identity: IdentityRegistry::new(config.verification_policy),
            certificates: CertificateRegistry::new(),
            rewards: RewardLedger::new(config.default_reward_amount),
            payments: PaymentGateway::new(),
        }
    }

    /// Handle one call end to end: parse, span, execute atomically.
    pub fn handle(
        &self,
        platform: &mut MemoryPlatform,
        ctx: RequestContext,
        call: Call,
    ) -> Result<Value, DispatchError> {
        let operation = match Operation::parse(&call.operation, call.arguments) {
            Ok(operation) => operation,
            Err(err) => {
                tracing::debug!(
                    id = %call.request_id,
                    operation = %call.operation,
                    error = %err,
                    code = err.code(),
                    "request rejected before dispatch"
                );
                return Err(err);
            }
        };
        let span = tracing::info_span!(
            "request",
            id = %call.request_id,
            operation = operation.name(),
            kind = %operation.kind(),
        );
        let _guard = span.enter();
        let outcome = platform.execute(ctx, |env| self.dispatch(env, operation));
        match &outcome {
            Ok(_) => {}
            Err(err @ DispatchError::Registry(RegistryError::Platform(_) | RegistryError::Codec(_))) => {
                tracing::error!(error = %err, code = err.code(), "request failed");
            }
            Err(err) => {
                tracing::debug!(error = %err, code = err.code(), "request rejected");
            }
        }
        outcome
    }

    /// Run one parsed operation against the given env.
    ///
    /// Mutating operations are refused up front when the request carries no
    /// caller; individual components re-check on their own paths.
    pub fn dispatch<E>(&self, env: &mut E, operation: Operation) -> Result<Value, DispatchError>
    where
        E: HostEnv + ?Sized,
    {
        if operation.kind() == OperationKind::Mutating && env.caller().is_none() {
            return Err(DispatchError::Registry(RegistryError::Unauthorized(
                format!("{} requires an authenticated caller", operation.name()),
            )));
        }
        let response = match operation {
            Operation::RegisterIndividual {
                name,
                date_of_birth,
                email,
            } => {
                self.identity.register_individual(env, name, date_of_birth, email)?;
                Value::Null
            }
            Operation::RegisterOrganization { name, contact_info } => {
                self.identity.register_organization(env, name, contact_info)?;
                Value::Null
            }
            Operation::VerifyOrganization { organization_id } => {
                self.identity.verify_organization(env, &organization_id)?;
                Value::Null
            }
            Operation::IssueCertificate {
                learner_id,
                course_id,
                metadata,
            } => {
                let id = self
                    .certificates
                    .issue_certificate(env, learner_id, course_id, metadata)?;
                Value::String(id.0)
            }
            Operation::UpdateCertificateStatus {
                certificate_id,
                new_status,
            } => {
                self.certificates
                    .update_certificate_status(env, &certificate_id, new_status)?;
                Value::Null
            }
            Operation::RevokeCertificate {
                certificate_id,
                reason,
            } => {
                self.certificates.revoke_certificate(env, &certificate_id, reason)?;
                Value::Null
            }
            Operation::GrantReward {
                learner_id,
                milestone,
                amount,
            } => {
                let id = self.rewards.grant_reward(env, learner_id, milestone, amount)?;
                Value::String(id.0)
            }
            Operation::ProcessPayment {
                recipient_id,
                amount,
            } => {
                self.payments.process_payment(env, &recipient_id, amount)?;
                Value::Null
            }
            Operation::GetIndividual { account_id } => {
                to_json(&self.identity.get_individual(env, &account_id)?)?
            }
            Operation::GetOrganization { account_id } => {
                to_json(&self.identity.get_organization(env, &account_id)?)?
            }
            Operation::GetCertificate { certificate_id } => {
                to_json(&self.certificates.get_certificate(env, &certificate_id)?)?
            }
            Operation::ValidateCertificate { certificate_id } => {
                to_json(&self.certificates.validate_certificate(env, &certificate_id)?)?
            }
            Operation::GetCertificateHistory { certificate_id } => to_json(
                &self
                    .certificates
                    .get_certificate_history(env, &certificate_id)?,
            )?,
            Operation::ListRewards { learner_id } => {
                to_json(&self.rewards.list_rewards(env, &learner_id)?)?
            }
            Operation::GetReward { reward_id } => {
                to_json(&self.rewards.get_reward(env, &reward_id)?)?
            }
        };
        Ok(response)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, DispatchError> {
    serde_json::to_value(value)
        .map_err(|err| DispatchError::Registry(RegistryError::Codec(format!("response: {err}"))))
}

// ─── Tests ───────────────────────────────────────────────────────────
