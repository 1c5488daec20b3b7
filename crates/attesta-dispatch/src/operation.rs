//! # Operation Surface
//!
//! Every operation the registry answers, as one typed enum. The wire shape
//! is an operation name plus a JSON arguments object; [`Operation::parse`]
//! maps that onto a variant, distinguishing unknown names from known names
//! with malformed arguments.
//!
//! Each operation is tagged [`OperationKind::Mutating`] or
//! [`OperationKind::ReadOnly`]. Mutating operations require an
//! authenticated caller; read-only ones answer anonymous requests.

use serde::{Deserialize, Serialize};

use attesta_core::{AccountId, Amount, CertificateId, CourseId, RewardId};
use attesta_state::CertificateDraft;

use crate::error::DispatchError;

/// Every operation name on the surface, in declaration order.
pub const OPERATION_NAMES: [&str; 15] = [
    "register_individual",
    "register_organization",
    "verify_organization",
    "issue_certificate",
    "update_certificate_status",
    "revoke_certificate",
    "grant_reward",
    "process_payment",
    "get_individual",
    "get_organization",
    "get_certificate",
    "validate_certificate",
    "get_certificate_history",
    "list_rewards",
    "get_reward",
];

/// Whether an operation writes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Requires an authenticated caller; may write state.
    Mutating,
    /// Never writes state; callable anonymously.
    ReadOnly,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Mutating => "mutating",
            Self::ReadOnly => "read_only",
        };
        f.write_str(s)
    }
}

/// One typed operation, parsed from a name and a JSON arguments object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", content = "arguments", rename_all = "snake_case")]
pub enum Operation {
    RegisterIndividual {
        name: String,
        date_of_birth: String,
        email: String,
    },
    RegisterOrganization {
        name: String,
        contact_info: String,
    },
    VerifyOrganization {
        organization_id: AccountId,
    },
    IssueCertificate {
        learner_id: AccountId,
        course_id: CourseId,
        metadata: CertificateDraft,
    },
    UpdateCertificateStatus {
        certificate_id: CertificateId,
        new_status: String,
    },
    RevokeCertificate {
        certificate_id: CertificateId,
        reason: String,
    },
    GrantReward {
        learner_id: AccountId,
        milestone: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount: Option<Amount>,
    },
    ProcessPayment {
        recipient_id: AccountId,
        amount: Amount,
    },
    GetIndividual {
        account_id: AccountId,
    },
    GetOrganization {
        account_id: AccountId,
    },
    GetCertificate {
        certificate_id: CertificateId,
    },
    ValidateCertificate {
        certificate_id: CertificateId,
    },
    GetCertificateHistory {
        certificate_id: CertificateId,
    },
    ListRewards {
        learner_id: AccountId,
    },
    GetReward {
        reward_id: RewardId,
    },
}

impl Operation {
    /// Parse an operation name and JSON arguments into a typed operation.
    ///
    /// A name outside [`OPERATION_NAMES`] fails `UnknownOperation`; a known
    /// name whose arguments don't fit fails `InvalidArguments`.
    pub fn parse(name: &str, arguments: serde_json::Value) -> Result<Self, DispatchError> {
        let operation = OPERATION_NAMES
            .iter()
            .find(|candidate| **candidate == name)
            .copied()
            .ok_or_else(|| DispatchError::UnknownOperation(name.to_string()))?;
        let envelope = serde_json::json!({ "operation": operation, "arguments": arguments });
        serde_json::from_value(envelope)
            .map_err(|source| DispatchError::InvalidArguments { operation, source })
    }

    /// The wire name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RegisterIndividual { .. } => "register_individual",
            Self::RegisterOrganization { .. } => "register_organization",
            Self::VerifyOrganization { .. } => "verify_organization",
            Self::IssueCertificate { .. } => "issue_certificate",
            Self::UpdateCertificateStatus { .. } => "update_certificate_status",
            Self::RevokeCertificate { .. } => "revoke_certificate",
            Self::GrantReward { .. } => "grant_reward",
            Self::ProcessPayment { .. } => "process_payment",
            Self::GetIndividual { .. } => "get_individual",
            Self::GetOrganization { .. } => "get_organization",
            Self::GetCertificate { .. } => "get_certificate",
            Self::ValidateCertificate { .. } => "validate_certificate",
            Self::GetCertificateHistory { .. } => "get_certificate_history",
            Self::ListRewards { .. } => "list_rewards",
            Self::GetReward { .. } => "get_reward",
        }
    }

    /// Whether this operation writes state.
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::RegisterIndividual { .. }
            | Self::RegisterOrganization { .. }
            | Self::VerifyOrganization { .. }
            | Self::IssueCertificate { .. }
            | Self::UpdateCertificateStatus { .. }
            | Self::RevokeCertificate { .. }
            | Self::GrantReward { .. }
            | Self::ProcessPayment { .. } => OperationKind::Mutating,
            Self::GetIndividual { .. }
            | Self::GetOrganization { .. }
            | Self::GetCertificate { .. }
            | Self::ValidateCertificate { .. }
            | Self::GetCertificateHistory { .. }
            | Self::ListRewards { .. }
            | Self::GetReward { .. } => OperationKind::ReadOnly,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_register_individual() {
        let operation = Operation::parse(
            "register_individual",
            json!({
                "name": "Alice",
                "date_of_birth": "1999-04-02",
                "email": "alice@example.com"
            }),
        )
        .unwrap();
        assert_eq!(
            operation,
            Operation::RegisterIndividual {
                name: "Alice".to_string(),
                date_of_birth: "1999-04-02".to_string(),
                email: "alice@example.com".to_string(),
            }
        );
        assert_eq!(operation.kind(), OperationKind::Mutating);
    }

    #[test]
    fn test_parse_unknown_name() {
        let outcome = Operation::parse("mint_diploma", json!({}));
        assert!(matches!(
            outcome,
            Err(DispatchError::UnknownOperation(ref name)) if name == "mint_diploma"
        ));
    }

    #[test]
    fn test_parse_known_name_with_missing_field() {
        let outcome = Operation::parse("register_individual", json!({ "name": "Alice" }));
        assert!(matches!(
            outcome,
            Err(DispatchError::InvalidArguments { operation, .. })
                if operation == "register_individual"
        ));
    }

    #[test]
    fn test_parse_rejects_numeric_amount() {
        // Amounts travel as decimal strings; bare JSON numbers are refused.
        let outcome = Operation::parse(
            "process_payment",
            json!({ "recipient_id": "alice", "amount": 50 }),
        );
        assert!(matches!(outcome, Err(DispatchError::InvalidArguments { .. })));
    }

    #[test]
    fn test_grant_reward_amount_is_optional() {
        let operation = Operation::parse(
            "grant_reward",
            json!({ "learner_id": "alice", "milestone": "course1_completed" }),
        )
        .unwrap();
        assert_eq!(
            operation,
            Operation::GrantReward {
                learner_id: AccountId::new("alice"),
                milestone: "course1_completed".to_string(),
                amount: None,
            }
        );
    }

    #[test]
    fn test_every_name_is_either_mutating_or_read_only() {
        let mutating = [
            "register_individual",
            "register_organization",
            "verify_organization",
            "issue_certificate",
            "update_certificate_status",
            "revoke_certificate",
            "grant_reward",
            "process_payment",
        ];
        for name in OPERATION_NAMES {
            let arguments = sample_arguments(name);
            let operation = Operation::parse(name, arguments).unwrap();
            assert_eq!(operation.name(), name);
            let expected = if mutating.contains(&name) {
                OperationKind::Mutating
            } else {
                OperationKind::ReadOnly
            };
            assert_eq!(operation.kind(), expected, "kind mismatch for {name}");
        }
    }

    #[test]
    fn test_round_trip_through_wire_form() {
        let operation = Operation::ValidateCertificate {
            certificate_id: CertificateId::new("cert_1"),
        };
        let wire = serde_json::to_value(&operation).unwrap();
        assert_eq!(wire["operation"], "validate_certificate");
        assert_eq!(wire["arguments"]["certificate_id"], "cert_1");
        let parsed: Operation = serde_json::from_value(wire).unwrap();
        assert_eq!(parsed, operation);
    }

    /// Minimal valid arguments for each operation name.
    fn sample_arguments(name: &str) -> serde_json::Value {
        match name {
            "register_individual" => json!({
                "name": "Alice", "date_of_birth": "1999-04-02", "email": "a@example.com"
            }),
            "register_organization" => json!({
                "name": "School", "contact_info": "admin@school.example"
            }),
            "verify_organization" => json!({ "organization_id": "school" }),
            "issue_certificate" => json!({
                "learner_id": "alice",
                "course_id": "course1",
                "metadata": { "course_name": "Rust", "completion_date": "2026-02-01" }
            }),
            "update_certificate_status" => json!({
                "certificate_id": "cert_1", "new_status": "completed"
            }),
            "revoke_certificate" => json!({ "certificate_id": "cert_1", "reason": "fraud" }),
            "grant_reward" => json!({ "learner_id": "alice", "milestone": "m" }),
            "process_payment" => json!({ "recipient_id": "alice", "amount": "50" }),
            "get_individual" | "get_organization" => json!({ "account_id": "alice" }),
            "get_certificate" | "validate_certificate" | "get_certificate_history" => {
                json!({ "certificate_id": "cert_1" })
            }
            "list_rewards" => json!({ "learner_id": "alice" }),
            "get_reward" => json!({ "reward_id": "reward_1" }),
            other => panic!("no sample arguments for {other}"),
        }
    }
}
