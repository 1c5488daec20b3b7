//! # Certificate Records and Lifecycle
//!
//! A certificate binds one issuer and one learner at issuance and never
//! rebinds. Its status starts at `pending` and moves through caller-chosen
//! strings; `revoked` is the conventional terminal state.
//!
//! ```text
//! pending ──▶ completed (or any issuer-chosen status) ──▶ revoked
//! ```
//!
//! ## Status Set
//!
//! The status set is open: issuers may record any string. The three
//! well-known statuses get their own variants so that `"revoked"` written
//! anywhere compares equal to [`CertificateStatus::Revoked`]; everything
//! else rides in [`CertificateStatus::Custom`].
//!
//! ## Binding
//!
//! [`CertificateMetadata::bind`] is the only constructor for stored
//! metadata. The learner, course, and issuer come from the registry's
//! explicit parameters and caller identity — matching fields in the
//! caller's draft payload are discarded, never trusted.

use serde::{Deserialize, Serialize};

use attesta_core::{AccountId, CourseId, Timestamp};

// ─── Certificate Status ──────────────────────────────────────────────

/// The lifecycle status of a certificate.
///
/// Serialized as its plain wire string (`"pending"`, `"completed"`,
/// `"revoked"`, or the custom text), so stored certificates read naturally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CertificateStatus {
    /// Freshly issued, not yet completed.
    Pending,
    /// The learner completed the course.
    Completed,
    /// Withdrawn by the issuer. Terminal by convention, not enforced.
    Revoked,
    /// Any other issuer-chosen status string.
    Custom(String),
}

impl CertificateStatus {
    /// The wire string for this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Revoked => "revoked",
            Self::Custom(s) => s,
        }
    }

    /// Whether this is the `revoked` status.
    pub fn is_revoked(&self) -> bool {
        matches!(self, Self::Revoked)
    }
}

impl From<String> for CertificateStatus {
    /// Normalize a wire string. The well-known statuses always parse to
    /// their named variants, so `Custom` never shadows them.
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "revoked" => Self::Revoked,
            _ => Self::Custom(s),
        }
    }
}

impl From<&str> for CertificateStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<CertificateStatus> for String {
    fn from(status: CertificateStatus) -> Self {
        match status {
            CertificateStatus::Custom(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Metadata ────────────────────────────────────────────────────────

/// Caller-supplied certificate fields, as accepted at issuance.
///
/// This is the payload shape an issuer sends. Any `learner_id`,
/// `course_id`, or `issuer_org_id` keys a caller smuggles into the payload
/// are simply ignored at deserialization — they have no fields to land in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateDraft {
    /// Human-readable course title.
    pub course_name: String,
    /// Completion date, as supplied by the issuer (opaque to the registry).
    pub completion_date: String,
    /// Skills covered, in issuer-chosen order.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Optional grade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

/// The metadata stored inside a certificate, bound at issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateMetadata {
    /// The learner the certificate was issued to. Never changes.
    pub learner_id: AccountId,
    /// The course the certificate covers. Never changes.
    pub course_id: CourseId,
    /// Human-readable course title.
    pub course_name: String,
    /// Completion date, as supplied by the issuer.
    pub completion_date: String,
    /// The organization that issued the certificate. Never changes.
    pub issuer_org_id: AccountId,
    /// Skills covered, in issuer-chosen order.
    pub skills: Vec<String>,
    /// Optional grade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl CertificateMetadata {
    /// Assemble stored metadata from the registry-bound identities and the
    /// caller's draft. The only constructor — binding cannot be bypassed.
    pub fn bind(
        learner_id: AccountId,
        course_id: CourseId,
        issuer_org_id: AccountId,
        draft: CertificateDraft,
    ) -> Self {
        Self {
            learner_id,
            course_id,
            course_name: draft.course_name,
            completion_date: draft.completion_date,
            issuer_org_id,
            skills: draft.skills,
            grade: draft.grade,
        }
    }
}

// ─── Certificate ─────────────────────────────────────────────────────

/// A stored certificate: bound metadata plus mutable lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Metadata bound at issuance.
    pub metadata: CertificateMetadata,
    /// Current lifecycle status.
    pub status: CertificateStatus,
    /// When the certificate was issued.
    pub issued_at: Timestamp,
    /// When the certificate last changed.
    pub updated_at: Timestamp,
}

impl Certificate {
    /// Create a freshly issued certificate in `pending` status.
    pub fn issue(metadata: CertificateMetadata, issued_at: Timestamp) -> Self {
        Self {
            metadata,
            status: CertificateStatus::Pending,
            issued_at,
            updated_at: issued_at,
        }
    }

    /// Record a status change. Any status is accepted, including after
    /// revocation — the registry audit-logs every change instead of
    /// enforcing terminality.
    pub fn set_status(&mut self, status: CertificateStatus, at: Timestamp) {
        self.status = status;
        self.updated_at = at;
    }

    /// Move to the `revoked` status.
    pub fn revoke(&mut self, at: Timestamp) {
        self.set_status(CertificateStatus::Revoked, at);
    }

    /// Whether the certificate is currently revoked.
    pub fn is_revoked(&self) -> bool {
        self.status.is_revoked()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn draft() -> CertificateDraft {
        CertificateDraft {
            course_name: "Rust Fundamentals".into(),
            completion_date: "2026-01-10".into(),
            skills: vec!["ownership".into(), "lifetimes".into()],
            grade: Some("A".into()),
        }
    }

    fn metadata() -> CertificateMetadata {
        CertificateMetadata::bind(
            AccountId::new("alice"),
            CourseId::new("course1"),
            AccountId::new("school"),
            draft(),
        )
    }

    // ── status normalization ─────────────────────────────────────────

    #[test]
    fn test_well_known_statuses_parse_to_named_variants() {
        assert_eq!(CertificateStatus::from("pending"), CertificateStatus::Pending);
        assert_eq!(
            CertificateStatus::from("completed"),
            CertificateStatus::Completed
        );
        assert_eq!(CertificateStatus::from("revoked"), CertificateStatus::Revoked);
    }

    #[test]
    fn test_unknown_statuses_become_custom() {
        let status = CertificateStatus::from("under_review");
        assert_eq!(status, CertificateStatus::Custom("under_review".into()));
        assert_eq!(status.as_str(), "under_review");
        assert!(!status.is_revoked());
    }

    #[test]
    fn test_status_serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_string(&CertificateStatus::Revoked).unwrap(),
            "\"revoked\""
        );
        let parsed: CertificateStatus = serde_json::from_str("\"revoked\"").unwrap();
        assert!(parsed.is_revoked());
    }

    #[test]
    fn test_custom_never_shadows_well_known() {
        // Deserializing the literal "revoked" must land on the named variant,
        // so revocation checks cannot be dodged with a custom spelling.
        let parsed: CertificateStatus = serde_json::from_str("\"revoked\"").unwrap();
        assert_eq!(parsed, CertificateStatus::Revoked);
        assert_ne!(parsed, CertificateStatus::Custom("revoked".into()));
    }

    // ── metadata binding ─────────────────────────────────────────────

    #[test]
    fn test_bind_uses_registry_identities() {
        let meta = metadata();
        assert_eq!(meta.learner_id, AccountId::new("alice"));
        assert_eq!(meta.course_id, CourseId::new("course1"));
        assert_eq!(meta.issuer_org_id, AccountId::new("school"));
        assert_eq!(meta.course_name, "Rust Fundamentals");
        assert_eq!(meta.skills, vec!["ownership", "lifetimes"]);
    }

    #[test]
    fn test_draft_discards_smuggled_binding_fields() {
        // Binding fields present in the payload have nowhere to land.
        let payload = r#"{
            "course_name": "Rust Fundamentals",
            "completion_date": "2026-01-10",
            "skills": [],
            "learner_id": "mallory",
            "issuer_org_id": "mallory_org"
        }"#;
        let parsed: CertificateDraft = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.course_name, "Rust Fundamentals");
        let meta = CertificateMetadata::bind(
            AccountId::new("alice"),
            CourseId::new("course1"),
            AccountId::new("school"),
            parsed,
        );
        assert_eq!(meta.learner_id, AccountId::new("alice"));
        assert_eq!(meta.issuer_org_id, AccountId::new("school"));
    }

    #[test]
    fn test_draft_defaults_optional_fields() {
        let payload = r#"{"course_name": "Intro", "completion_date": "2026-02-01"}"#;
        let parsed: CertificateDraft = serde_json::from_str(payload).unwrap();
        assert!(parsed.skills.is_empty());
        assert!(parsed.grade.is_none());
    }

    // ── lifecycle ────────────────────────────────────────────────────

    #[test]
    fn test_issue_starts_pending_with_matching_stamps() {
        let cert = Certificate::issue(metadata(), ts("2026-01-15T12:00:00Z"));
        assert_eq!(cert.status, CertificateStatus::Pending);
        assert_eq!(cert.issued_at, cert.updated_at);
    }

    #[test]
    fn test_set_status_bumps_updated_at_only() {
        let mut cert = Certificate::issue(metadata(), ts("2026-01-15T12:00:00Z"));
        cert.set_status("completed".into(), ts("2026-01-16T09:00:00Z"));
        assert_eq!(cert.status, CertificateStatus::Completed);
        assert_eq!(cert.issued_at, ts("2026-01-15T12:00:00Z"));
        assert_eq!(cert.updated_at, ts("2026-01-16T09:00:00Z"));
    }

    #[test]
    fn test_revoke_sets_literal_revoked() {
        let mut cert = Certificate::issue(metadata(), ts("2026-01-15T12:00:00Z"));
        cert.revoke(ts("2026-01-17T08:00:00Z"));
        assert!(cert.is_revoked());
        assert_eq!(cert.status.as_str(), "revoked");
    }

    #[test]
    fn test_status_change_after_revoke_is_accepted() {
        let mut cert = Certificate::issue(metadata(), ts("2026-01-15T12:00:00Z"));
        cert.revoke(ts("2026-01-17T08:00:00Z"));
        cert.set_status("reinstated".into(), ts("2026-01-18T08:00:00Z"));
        assert!(!cert.is_revoked());
        assert_eq!(cert.status.as_str(), "reinstated");
    }

    #[test]
    fn test_certificate_serialization_roundtrip() {
        let mut cert = Certificate::issue(metadata(), ts("2026-01-15T12:00:00Z"));
        cert.set_status("completed".into(), ts("2026-01-16T09:00:00Z"));
        let json = serde_json::to_string(&cert).unwrap();
        let parsed: Certificate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cert);
    }
}
