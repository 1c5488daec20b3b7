//! # Audit History Vocabulary
//!
//! Every certificate carries an append-only sequence of `AuditEntry` values,
//! one per lifecycle event, starting with the issuance record. Entries are
//! never mutated or removed; insertion order is history order.

use serde::{Deserialize, Serialize};

use attesta_core::{AccountId, Timestamp};

/// The kind of lifecycle event an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// The certificate was issued. Always the first entry, exactly once.
    Issued,
    /// The certificate status was changed; the reason carries the new status.
    StatusUpdated,
    /// The certificate was revoked; the reason carries the revoker's text.
    Revoked,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Issued => "issued",
            Self::StatusUpdated => "status_updated",
            Self::Revoked => "revoked",
        };
        f.write_str(s)
    }
}

/// One immutable entry in a certificate's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event happened.
    pub at: Timestamp,
    /// What kind of event this is.
    pub action: AuditAction,
    /// Human-readable context: the new status for updates, free text for
    /// revocations.
    pub reason: String,
    /// The account that performed the action.
    pub actor: AccountId,
}
